//! Server configuration
//!
//! Read once at startup from the process environment (after `.env` has been
//! loaded) and passed down explicitly.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::adapters::gemini::DEFAULT_BASE_URL;

pub const DEFAULT_PRIMARY_MODEL: &str = "gemini-2.5-flash-preview-04-17";
pub const DEFAULT_FALLBACK_MODEL: &str = "gemini-2.0-flash-001";
pub const DEFAULT_PERSONA_PATH: &str = "personality.json";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Fatal startup configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Configuration for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Gemini API key
    pub api_key: String,
    /// Location of the persona description document
    pub persona_path: PathBuf,
    /// Model tried first for every chat request
    pub primary_model: String,
    /// Model tried once when the primary fails
    pub fallback_model: String,
    /// Gemini REST base URL
    pub gemini_base_url: String,
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Create a configuration with defaults for everything but the API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            persona_path: PathBuf::from(DEFAULT_PERSONA_PATH),
            primary_model: DEFAULT_PRIMARY_MODEL.to_string(),
            fallback_model: DEFAULT_FALLBACK_MODEL.to_string(),
            gemini_base_url: DEFAULT_BASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, treating empty values as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("GEMINI_API_KEY").ok_or(ConfigError::MissingVar("GEMINI_API_KEY"))?;
        let mut config = Self::new(api_key);

        if let Some(path) = get("PERSONA_PATH") {
            config.persona_path = PathBuf::from(path);
        }
        if let Some(model) = get("PRIMARY_MODEL") {
            config.primary_model = model;
        }
        if let Some(model) = get("FALLBACK_MODEL") {
            config.fallback_model = model;
        }
        if let Some(url) = get("GEMINI_BASE_URL") {
            config.gemini_base_url = url;
        }
        if let Some(host) = get("HOST") {
            config.host = host;
        }
        if let Some(port) = get("PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                value: port,
            })?;
        }

        Ok(config)
    }

    /// Set the persona document path
    pub fn with_persona_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.persona_path = path.into();
        self
    }

    /// Set the primary and fallback models
    pub fn with_models(mut self, primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        self.primary_model = primary.into();
        self.fallback_model = fallback.into();
        self
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidValue {
            name: "HOST",
            value: self.host.clone(),
        })
    }
}
