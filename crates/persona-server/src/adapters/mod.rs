//! Infrastructure Adapters
//!
//! Concrete implementations of the domain ports and of persona loading.

pub mod gemini;
pub mod persona_file;

pub use gemini::GeminiProvider;
