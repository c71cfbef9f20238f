//! Translation direction between English and Indonesian
//!
//! A [`Direction`] is the source→target language pair of a request. Only two
//! pairs exist, and on the wire they are spelled `en-id` and `id-en`.

use crate::mt::error::{MtError, MtResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Source→target language pair for a translation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// English → Indonesian
    #[default]
    #[serde(rename = "en-id")]
    EnId,
    /// Indonesian → English
    #[serde(rename = "id-en")]
    IdEn,
}

impl Direction {
    /// Parse the wire form. Anything other than `en-id` or `id-en` is rejected,
    /// including differently cased or padded variants.
    pub fn parse(value: &str) -> MtResult<Self> {
        match value {
            "en-id" => Ok(Direction::EnId),
            "id-en" => Ok(Direction::IdEn),
            _ => Err(MtError::ValidationError(format!(
                "Unknown translation direction: {:?}",
                value
            ))),
        }
    }

    /// Wire form used in the multipart `direction` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::EnId => "en-id",
            Direction::IdEn => "id-en",
        }
    }

    /// Human-readable name of the source language, as used in the prompt
    pub fn source_language(&self) -> &'static str {
        match self {
            Direction::EnId => "English",
            Direction::IdEn => "Indonesian",
        }
    }

    /// Human-readable name of the target language, as used in the prompt
    pub fn target_language(&self) -> &'static str {
        match self {
            Direction::EnId => "Indonesian",
            Direction::IdEn => "English",
        }
    }

    /// ISO 639-1 codes of the (source, target) pair
    pub fn locales(&self) -> (&'static str, &'static str) {
        match self {
            Direction::EnId => ("en", "id"),
            Direction::IdEn => ("id", "en"),
        }
    }

    /// The opposite direction
    pub fn toggled(&self) -> Self {
        match self {
            Direction::EnId => Direction::IdEn,
            Direction::IdEn => Direction::EnId,
        }
    }
}

impl FromStr for Direction {
    type Err = MtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::parse(s)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(Direction::parse("en-id").unwrap(), Direction::EnId);
        assert_eq!(Direction::parse("id-en").unwrap(), Direction::IdEn);
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for value in ["", "EN-ID", " en-id", "en-id ", "en", "id", "en_id", "fr-en"] {
            match Direction::parse(value) {
                Err(MtError::ValidationError(_)) => {}
                other => panic!("Expected ValidationError for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_language_names() {
        assert_eq!(Direction::EnId.source_language(), "English");
        assert_eq!(Direction::EnId.target_language(), "Indonesian");
        assert_eq!(Direction::IdEn.source_language(), "Indonesian");
        assert_eq!(Direction::IdEn.target_language(), "English");
    }

    #[test]
    fn test_default_is_english_to_indonesian() {
        assert_eq!(Direction::default(), Direction::EnId);
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        assert_eq!(Direction::EnId.toggled(), Direction::IdEn);
        assert_eq!(Direction::IdEn.toggled(), Direction::EnId);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Direction::IdEn).unwrap(), "\"id-en\"");
        let parsed: Direction = serde_json::from_str("\"en-id\"").unwrap();
        assert_eq!(parsed, Direction::EnId);
    }

    #[test]
    fn test_display_and_from_str_agree() {
        for direction in [Direction::EnId, Direction::IdEn] {
            let parsed: Direction = direction.to_string().parse().unwrap();
            assert_eq!(parsed, direction);
        }
    }
}
