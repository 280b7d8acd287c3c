//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates calls to
//! the generation provider.

mod chat_service;
mod generation_client;

pub use chat_service::ChatService;
pub use generation_client::GenerationClient;
