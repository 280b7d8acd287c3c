//! Persona Domain Library
//!
//! Core domain types and interfaces for the persona chatbot.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (PersonaProfile)
//!   - `services/`: Pure domain services (prompt rendering)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: External service interfaces (text generation)
//!
//! # Usage
//!
//! ```rust,ignore
//! use persona::{build_prompt, PersonaProfile};
//!
//! let prompt = build_prompt(&PersonaProfile::default(), "What's your favorite hobby?");
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    build_prompt, DomainError, GenerationError, PersonaProfile, ProviderError,
};
pub use ports::GenerationProvider;
