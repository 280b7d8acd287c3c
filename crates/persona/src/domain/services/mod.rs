//! Domain Services
//!
//! Stateless logic operating on domain entities.

mod prompt;

pub use prompt::build_prompt;
