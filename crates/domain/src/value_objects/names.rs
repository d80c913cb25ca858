//! Validated name newtypes for domain entities
//!
//! Names are valid by construction:
//! - Present (a missing name never reaches the aggregate)
//! - Trimmed of leading/trailing whitespace
//! - Within length limits, counted in characters after trimming

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Minimum length for a screen name, after trimming
pub const MIN_SCREEN_NAME_LENGTH: usize = 3;

/// Maximum length for a screen name, after trimming
pub const MAX_SCREEN_NAME_LENGTH: usize = 20;

// ============================================================================
// ScreenName
// ============================================================================

/// A validated screen name (3..=20 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScreenName(String);

impl ScreenName {
    /// Create a new validated screen name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name is shorter than 3 characters after trimming
    /// - The name exceeds 20 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Screen name cannot be empty"));
        }
        let len = trimmed.chars().count();
        if len < MIN_SCREEN_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Screen name must be at least {} characters",
                MIN_SCREEN_NAME_LENGTH
            )));
        }
        if len > MAX_SCREEN_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Screen name cannot exceed {} characters",
                MAX_SCREEN_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ScreenName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ScreenName> for String {
    fn from(name: ScreenName) -> String {
        name.0
    }
}
