//! Receipt sections
//!
//! Every receipt and category is classified as either personal or business
//! spending. Tax reports are grouped by section first.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level classification of a receipt or category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Personal,
    Business,
}

impl Section {
    /// All sections, in report order
    pub fn all() -> &'static [Self] {
        &[Self::Personal, Self::Business]
    }

    /// Lowercase identifier used in storage and query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Business => "business",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Personal => write!(f, "Personal"),
            Self::Business => write!(f, "Business"),
        }
    }
}

impl FromStr for Section {
    type Err = SectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "business" => Ok(Self::Business),
            other => Err(SectionParseError(other.to_string())),
        }
    }
}

/// Error type for section parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionParseError(String);

impl fmt::Display for SectionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid section '{}' (expected 'personal' or 'business')",
            self.0
        )
    }
}

impl std::error::Error for SectionParseError {}
