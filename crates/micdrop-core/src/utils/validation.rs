//! Input validation for the public API surface.
//!
//! Handlers validate before dispatching to services; the orchestrator
//! assumes debate inputs have already passed these checks.

use crate::ports::CoreError;

/// Longest accepted translation input.
pub const MAX_TRANSLATION_LENGTH: usize = 5000;

/// Longest accepted song title.
pub const MAX_SONG_TITLE_LENGTH: usize = 200;

/// Longest accepted rapper name.
pub const MAX_RAPPER_NAME_LENGTH: usize = 100;

/// Longest accepted topic title.
pub const MAX_TOPIC_TITLE_LENGTH: usize = 200;

/// Validate debate start input: distinct, non-empty, bounded names and a
/// non-empty, bounded topic title.
pub fn validate_debate_input(
    rapper1: &str,
    rapper2: &str,
    topic_title: &str,
) -> Result<(), CoreError> {
    if rapper1.trim().is_empty() {
        return Err(CoreError::Validation("Rapper 1 must be selected.".into()));
    }
    if rapper2.trim().is_empty() {
        return Err(CoreError::Validation("Rapper 2 must be selected.".into()));
    }
    if topic_title.trim().is_empty() {
        return Err(CoreError::Validation("Topic must be selected.".into()));
    }
    if rapper1 == rapper2 {
        return Err(CoreError::Validation("Rappers must be different.".into()));
    }
    if rapper1.len() > MAX_RAPPER_NAME_LENGTH || rapper2.len() > MAX_RAPPER_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Rapper names must be at most {MAX_RAPPER_NAME_LENGTH} characters."
        )));
    }
    if topic_title.len() > MAX_TOPIC_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Topic title must be at most {MAX_TOPIC_TITLE_LENGTH} characters."
        )));
    }
    Ok(())
}

/// Validate translation input: non-empty and bounded.
pub fn validate_translation_input(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(
            "Translation text cannot be empty.".into(),
        ));
    }
    if text.len() > MAX_TRANSLATION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Text exceeds maximum length of {MAX_TRANSLATION_LENGTH} characters."
        )));
    }
    Ok(())
}

/// Validate lyrics lookup input: non-empty and bounded title.
pub fn validate_lyrics_input(song_title: &str) -> Result<(), CoreError> {
    if song_title.trim().is_empty() {
        return Err(CoreError::Validation("Song title cannot be empty.".into()));
    }
    if song_title.len() > MAX_SONG_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Song title exceeds maximum length of {MAX_SONG_TITLE_LENGTH} characters."
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_debate_input_passes() {
        assert!(validate_debate_input("Alpha", "Beta", "Test Topic").is_ok());
    }

    #[test]
    fn identical_rappers_are_rejected() {
        assert!(validate_debate_input("Alpha", "Alpha", "Test Topic").is_err());
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(validate_debate_input("", "Beta", "Topic").is_err());
        assert!(validate_debate_input("Alpha", "  ", "Topic").is_err());
        assert!(validate_debate_input("Alpha", "Beta", "").is_err());
    }

    #[test]
    fn oversized_names_are_rejected() {
        let long = "x".repeat(MAX_RAPPER_NAME_LENGTH + 1);
        assert!(validate_debate_input(&long, "Beta", "Topic").is_err());
    }

    #[test]
    fn translation_bounds_are_enforced() {
        assert!(validate_translation_input("hello").is_ok());
        assert!(validate_translation_input("").is_err());
        let long = "x".repeat(MAX_TRANSLATION_LENGTH + 1);
        assert!(validate_translation_input(&long).is_err());
    }

    #[test]
    fn lyrics_title_bounds_are_enforced() {
        assert!(validate_lyrics_input("City Lights").is_ok());
        assert!(validate_lyrics_input(" ").is_err());
        let long = "x".repeat(MAX_SONG_TITLE_LENGTH + 1);
        assert!(validate_lyrics_input(&long).is_err());
    }
}
