//! Persona CLI - Chat with the persona from a terminal
//!
//! Thin client for the Persona Chatbot API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;

use api::PersonaClient;
use config::Config;

const GREETING: &str = "Hi there! I'm a personal chatbot. Ask me anything!";
const APOLOGY: &str = "Sorry, I had trouble responding. Please try again.";

#[derive(Parser)]
#[command(name = "persona")]
#[command(about = "Persona CLI - Chat with the persona chatbot", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL (overrides the configured one)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the API is running
    Health,

    /// Send a single message
    Chat {
        /// Message to send
        message: String,
    },

    /// Interactive chat session
    Repl,

    /// List models available to the server
    Models,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the API base URL
    SetUrl {
        /// Base URL, e.g. http://localhost:8000
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Health => cmd_health(cli.url).await,
        Commands::Chat { message } => cmd_chat(cli.url, message).await,
        Commands::Repl => cmd_repl(cli.url).await,
        Commands::Models => cmd_models(cli.url).await,
        Commands::Config { action } => cmd_config(action),
    }
}

// ============================================
// Command Implementations
// ============================================

fn client(url: Option<String>) -> Result<PersonaClient> {
    let base_url = match url {
        Some(u) => u,
        None => Config::load()?.base_url,
    };
    Ok(PersonaClient::new(&base_url))
}

async fn cmd_health(url: Option<String>) -> Result<()> {
    let client = client(url)?;
    print!("Checking API... ");

    match client.health().await {
        Ok(health) => {
            println!("{} {}", health.status.green(), health.message.dimmed());
            Ok(())
        }
        Err(e) => {
            println!("{}", "Failed".red());
            Err(e)
        }
    }
}

async fn cmd_chat(url: Option<String>, message: String) -> Result<()> {
    if message.trim().is_empty() {
        bail!("Message cannot be empty");
    }

    let client = client(url)?;
    let response = client.chat(message.trim()).await?;
    println!("{}", response);

    Ok(())
}

async fn cmd_repl(url: Option<String>) -> Result<()> {
    let client = client(url)?;

    println!("{} {}", "persona>".cyan().bold(), GREETING);
    println!("{}", "(type 'exit' to leave)".dimmed());

    loop {
        let input: String = Input::new()
            .with_prompt("you")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        let message = input.trim();
        if message.is_empty() {
            continue;
        }
        if is_exit(message) {
            break;
        }

        match client.chat(message).await {
            Ok(response) => println!("{} {}", "persona>".cyan().bold(), response),
            Err(e) => {
                eprintln!("{}", format!("{:#}", e).dimmed());
                println!("{} {}", "persona>".cyan().bold(), APOLOGY.yellow());
            }
        }
    }

    Ok(())
}

async fn cmd_models(url: Option<String>) -> Result<()> {
    let client = client(url)?;
    let models = client.list_models().await?;

    if models.is_empty() {
        println!("No models available.");
        return Ok(());
    }

    println!("{}", "Models:".bold());
    for name in models {
        println!("  {}", name.cyan());
    }

    Ok(())
}

fn cmd_config(action: Option<ConfigAction>) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        Some(ConfigAction::SetUrl { url }) => {
            config.set_base_url(&url);
            config.save()?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }
        None => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Base URL: {}", config.base_url);
        }
    }

    Ok(())
}

fn is_exit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "exit" | "quit")
}
