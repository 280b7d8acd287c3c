//! PersonaProfile - The personality the chatbot simulates
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::errors::DomainError;

/// PersonaProfile - Traits, style and background of the simulated person
///
/// Every field is optional in the source document; missing or `null`
/// fields deserialize to empty text or an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub traits: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub speaking_style: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub background: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub knowledge_areas: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl PersonaProfile {
    /// Parse a profile from a JSON document
    pub fn from_json(text: &str) -> Result<Self, DomainError> {
        serde_json::from_str(text).map_err(|e| DomainError::PersonaLoad(e.to_string()))
    }

    /// Name used in the prompt ("the user" when the profile has none)
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "the user"
        } else {
            &self.name
        }
    }
}

impl Default for PersonaProfile {
    fn default() -> Self {
        Self {
            name: "Default User".to_string(),
            traits: vec![
                "Helpful".to_string(),
                "Friendly".to_string(),
                "Knowledgeable".to_string(),
            ],
            speaking_style: "Casual and conversational".to_string(),
            background: "A tech enthusiast with varied interests".to_string(),
            interests: vec![
                "Technology".to_string(),
                "Reading".to_string(),
                "Learning".to_string(),
            ],
            knowledge_areas: vec![
                "Programming".to_string(),
                "Science".to_string(),
                "Arts".to_string(),
            ],
        }
    }
}
