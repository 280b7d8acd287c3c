//! Persona Store - loads the persona document from disk

use std::fs;
use std::path::Path;

use persona::{DomainError, PersonaProfile};

/// Load the persona document at `path`, falling back to the default profile
///
/// Read or parse failures are logged and absorbed; this never fails.
pub fn load(path: &Path) -> PersonaProfile {
    match read(path) {
        Ok(profile) => {
            tracing::info!("Loaded persona '{}' from {}", profile.name, path.display());
            profile
        }
        Err(e) => {
            tracing::warn!(
                "Error loading personality data from {}: {} - using default persona",
                path.display(),
                e
            );
            PersonaProfile::default()
        }
    }
}

fn read(path: &Path) -> Result<PersonaProfile, DomainError> {
    let text = fs::read_to_string(path).map_err(|e| DomainError::PersonaLoad(e.to_string()))?;
    PersonaProfile::from_json(&text)
}
