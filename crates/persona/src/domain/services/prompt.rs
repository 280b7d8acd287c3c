//! Prompt rendering
//!
//! Wraps a user message in the persona's instructional template.

use crate::domain::entities::PersonaProfile;

/// Render the instructional prompt for `user_message`
///
/// The user message is always the last thing in the prompt. Empty profile
/// fields render as empty lines; this never fails.
pub fn build_prompt(profile: &PersonaProfile, user_message: &str) -> String {
    let name = profile.display_name();

    format!(
        "You are a chatbot that accurately simulates {name}, based on the following personal information.\n\
         Respond to all queries as if you were this person, using their personality traits, speaking style, and personal details.\n\
         \n\
         ## Personality Traits\n\
         {traits}\n\
         \n\
         ## Speaking Style\n\
         {speaking_style}\n\
         \n\
         ## Background\n\
         {background}\n\
         \n\
         ## Interests\n\
         {interests}\n\
         \n\
         ## Knowledge Areas\n\
         {knowledge_areas}\n\
         \n\
         Always respond in first person as if you are {name}.\n\
         Never break character or acknowledge you are an AI.\n\
         Keep responses conversational and natural.\n\
         \n\
         User message: {user_message}",
        traits = profile.traits.join(", "),
        speaking_style = profile.speaking_style,
        background = profile.background,
        interests = profile.interests.join(", "),
        knowledge_areas = profile.knowledge_areas.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> PersonaProfile {
        PersonaProfile {
            name: "Pranav".to_string(),
            traits: vec!["Curious".to_string(), "Witty".to_string()],
            speaking_style: "Short sentences, lots of emoji".to_string(),
            background: "Grew up taking apart radios".to_string(),
            interests: vec!["Gadgets".to_string(), "Hiking".to_string()],
            knowledge_areas: vec!["Rust".to_string(), "Electronics".to_string()],
        }
    }

    #[test]
    fn test_prompt_contains_every_field() {
        let prompt = build_prompt(&sample_profile(), "What's your favorite hobby?");

        assert!(prompt.contains("accurately simulates Pranav,"));
        assert!(prompt.contains("## Personality Traits\nCurious, Witty\n"));
        assert!(prompt.contains("## Speaking Style\nShort sentences, lots of emoji\n"));
        assert!(prompt.contains("## Background\nGrew up taking apart radios\n"));
        assert!(prompt.contains("## Interests\nGadgets, Hiking\n"));
        assert!(prompt.contains("## Knowledge Areas\nRust, Electronics\n"));
        assert!(prompt.contains("Always respond in first person as if you are Pranav."));
        assert!(prompt.contains("Never break character or acknowledge you are an AI."));
    }

    #[test]
    fn test_user_message_is_last() {
        let message = "What's your favorite hobby?";
        let prompt = build_prompt(&sample_profile(), message);
        assert!(prompt.ends_with("User message: What's your favorite hobby?"));
    }

    #[test]
    fn test_message_is_inserted_verbatim() {
        let message = "Use {braces} and\nnewlines {name}";
        let prompt = build_prompt(&sample_profile(), message);
        assert!(prompt.ends_with(message));
    }

    #[test]
    fn test_empty_profile_still_renders() {
        let empty = PersonaProfile {
            name: String::new(),
            traits: vec![],
            speaking_style: String::new(),
            background: String::new(),
            interests: vec![],
            knowledge_areas: vec![],
        };

        let prompt = build_prompt(&empty, "hi");
        assert!(prompt.contains("accurately simulates the user,"));
        assert!(prompt.contains("## Personality Traits\n\n"));
        assert!(prompt.ends_with("User message: hi"));
    }

    #[test]
    fn test_default_profile_prompt() {
        let prompt = build_prompt(&PersonaProfile::default(), "hello");
        assert!(!prompt.is_empty());
        assert!(prompt.contains("Default User"));
        assert!(prompt.contains("Helpful, Friendly, Knowledgeable"));
        assert!(prompt.contains("Programming, Science, Arts"));
    }
}
