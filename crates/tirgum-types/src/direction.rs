use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Source -> target language pair of a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "en|am")]
    EnglishToAmharic,
    #[serde(rename = "am|en")]
    AmharicToEnglish,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::EnglishToAmharic, Direction::AmharicToEnglish];

    /// Compact pair code understood by the translation API, e.g. `en|am`
    pub fn lang_pair(self) -> &'static str {
        match self {
            Direction::EnglishToAmharic => "en|am",
            Direction::AmharicToEnglish => "am|en",
        }
    }

    pub fn source(self) -> &'static str {
        match self {
            Direction::EnglishToAmharic => "en",
            Direction::AmharicToEnglish => "am",
        }
    }

    pub fn target(self) -> &'static str {
        match self {
            Direction::EnglishToAmharic => "am",
            Direction::AmharicToEnglish => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Direction::EnglishToAmharic => Direction::AmharicToEnglish,
            Direction::AmharicToEnglish => Direction::EnglishToAmharic,
        }
    }

    /// Human readable name shown in the direction selector
    pub fn title(self) -> &'static str {
        match self {
            Direction::EnglishToAmharic => "English to Amharic",
            Direction::AmharicToEnglish => "Amharic to English",
        }
    }

    pub fn input_label(self) -> &'static str {
        match self {
            Direction::EnglishToAmharic => "Write in English",
            Direction::AmharicToEnglish => "Write in Amharic",
        }
    }

    pub fn output_placeholder(self) -> &'static str {
        match self {
            Direction::EnglishToAmharic => "Translated Amharic text will appear here",
            Direction::AmharicToEnglish => "Translated English text will appear here",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lang_pair())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown direction '{0}', expected 'en|am' or 'am|en'")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en|am" | "en-am" | "en2am" => Ok(Direction::EnglishToAmharic),
            "am|en" | "am-en" | "am2en" => Ok(Direction::AmharicToEnglish),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swapping_twice_returns_to_start() {
        for direction in Direction::ALL {
            assert_eq!(direction.toggled().toggled(), direction);
            assert_ne!(direction.toggled(), direction);
        }
    }

    #[test]
    fn lang_pair_is_source_and_target() {
        for direction in Direction::ALL {
            assert_eq!(
                direction.lang_pair(),
                format!("{}|{}", direction.source(), direction.target())
            );
        }
        assert_eq!(Direction::default().lang_pair(), "en|am");
    }

    #[test]
    fn parses_lang_pairs() {
        assert_eq!("en|am".parse(), Ok(Direction::EnglishToAmharic));
        assert_eq!(" AM|EN ".parse(), Ok(Direction::AmharicToEnglish));
        assert_eq!(
            "en|fr".parse::<Direction>(),
            Err(ParseDirectionError("en|fr".to_string()))
        );
    }

    #[test]
    fn serializes_as_lang_pair() {
        let json = serde_json::to_string(&Direction::AmharicToEnglish).unwrap();
        assert_eq!(json, "\"am|en\"");

        let parsed: Direction = serde_json::from_str("\"en|am\"").unwrap();
        assert_eq!(parsed, Direction::EnglishToAmharic);
    }
}
