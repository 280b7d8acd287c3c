//! Persona Chatbot API Routes
//!
//! - / - Liveness
//! - /api/chat - Persona chat (primary model, one fallback)
//! - /api/models - Diagnostic model listing
//! - /docs, /openapi.json - API documentation

pub mod chat;
pub mod health;
pub mod models;
pub mod swagger;
