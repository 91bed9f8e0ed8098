//! Error types for rule table configuration
//!
//! Extraction, classification and validation are total and never error.
//! The only failures are unusable configuration tables.

/// Errors raised while loading or checking [`crate::RuleTables`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML text could not be decoded
    #[error("invalid rule table toml: {0}")]
    Toml(#[from] toml::de::Error),

    /// A table entry is empty or malformed
    #[error("invalid entry in table '{table}': {reason}")]
    InvalidEntry {
        /// Table holding the entry
        table: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// A pattern assembled from table entries failed to compile
    #[error("pattern for '{table}' failed to compile: {message}")]
    Pattern {
        /// Table the pattern was built from
        table: &'static str,
        /// Regex compiler message
        message: String,
    },

    /// Id sequence settings cannot produce increasing ids
    #[error("invalid id sequence: {0}")]
    Sequence(String),
}

impl ConfigError {
    /// Create invalid entry error
    pub fn invalid_entry(table: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            table,
            reason: reason.into(),
        }
    }

    /// Create pattern compilation error
    pub fn pattern(table: &'static str, message: impl Into<String>) -> Self {
        Self::Pattern {
            table,
            message: message.into(),
        }
    }
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
