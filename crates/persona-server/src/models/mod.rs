//! API Data Models
//!
//! - Chat: request/response for the persona chat endpoint
//! - Model: diagnostic model listing
//! - Health / Error bodies

mod chat;

pub use chat::*;
