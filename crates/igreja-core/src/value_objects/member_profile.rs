//! Member profile vocabulary - civil status and pastoral profile tags
//!
//! The store keeps these as plain text: a single value for marital status
//! and text arrays for the tags. Legacy rows may carry values outside the
//! vocabulary, so decoding is lenient: an unknown marital status reads as
//! `Single` and unknown tags are skipped instead of failing the row.
//!
//! The serde renames match the store tokens, so form payloads and rows
//! speak the same vocabulary.

use serde::{Deserialize, Serialize};

/// Civil status of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    /// Store string
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
            Self::Divorced => "divorced",
            Self::Widowed => "widowed",
        }
    }

    /// Lenient decode; anything unknown reads as `Single`
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "married" => Self::Married,
            "divorced" => Self::Divorced,
            "widowed" => Self::Widowed,
            _ => Self::Single,
        }
    }
}

/// The five love languages, stored with Portuguese tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoveLanguage {
    #[serde(rename = "palavras")]
    Words,
    #[serde(rename = "tempo")]
    QualityTime,
    #[serde(rename = "presentes")]
    Gifts,
    #[serde(rename = "atos")]
    ActsOfService,
    #[serde(rename = "toques")]
    PhysicalTouch,
}

impl LoveLanguage {
    /// Store token
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Words => "palavras",
            Self::QualityTime => "tempo",
            Self::Gifts => "presentes",
            Self::ActsOfService => "atos",
            Self::PhysicalTouch => "toques",
        }
    }

    /// Decode one token; `None` for anything outside the vocabulary
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "palavras" => Some(Self::Words),
            "tempo" => Some(Self::QualityTime),
            "presentes" => Some(Self::Gifts),
            "atos" => Some(Self::ActsOfService),
            "toques" => Some(Self::PhysicalTouch),
            _ => None,
        }
    }

    /// Decode a stored array, skipping unknown tokens
    pub fn decode_all(tokens: &[String]) -> Vec<Self> {
        tokens.iter().filter_map(|t| Self::from_db_str(t)).collect()
    }

    /// Encode for storage
    pub fn encode_all(values: &[Self]) -> Vec<String> {
        values.iter().map(|v| v.as_db_str().to_string()).collect()
    }
}

/// DISC profile outcomes, stored with the capitalized Portuguese labels
/// the assessment form produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityTrait {
    #[serde(rename = "Determinado")]
    Determined,
    #[serde(rename = "Influenciador")]
    Influencer,
    #[serde(rename = "Seguro")]
    Steady,
    #[serde(rename = "Cauteloso")]
    Cautious,
}

impl PersonalityTrait {
    /// Store token
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Determined => "Determinado",
            Self::Influencer => "Influenciador",
            Self::Steady => "Seguro",
            Self::Cautious => "Cauteloso",
        }
    }

    /// Decode one token; `None` for anything outside the vocabulary
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Determinado" => Some(Self::Determined),
            "Influenciador" => Some(Self::Influencer),
            "Seguro" => Some(Self::Steady),
            "Cauteloso" => Some(Self::Cautious),
            _ => None,
        }
    }

    /// Decode a stored array, skipping unknown tokens
    pub fn decode_all(tokens: &[String]) -> Vec<Self> {
        tokens.iter().filter_map(|t| Self::from_db_str(t)).collect()
    }

    /// Encode for storage
    pub fn encode_all(values: &[Self]) -> Vec<String> {
        values.iter().map(|v| v.as_db_str().to_string()).collect()
    }
}
