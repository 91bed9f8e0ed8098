//! Error types for the scenario pipeline
//!
//! Stages themselves are total. The only failures leaving the core are
//! unusable configuration and malformed input shapes.

use qa_model::ConfigError;

/// Pipeline error type
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Rule tables or sequence settings are unusable
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Requirement input has the wrong shape
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PipelineError {
    /// Create invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Whether the error comes from configuration rather than input
    #[inline]
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Result type alias for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
