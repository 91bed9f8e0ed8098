//! Requirement input
//!
//! The shape supplied by whatever retrieves requirement text. The core
//! never fetches it itself.

use crate::error::{PipelineError, PipelineResult};
use serde::{Deserialize, Serialize};

/// One requirement document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementInput {
    /// Story identifier used as id prefix, e.g. `272265`
    pub story_id: Option<String>,
    /// Story title
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Acceptance criteria bullets, in document order
    pub bullets: Vec<String>,
    /// Supplementary QA notes
    pub notes: Option<String>,
}

impl RequirementInput {
    /// Create input with a title
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// With story id
    #[inline]
    #[must_use]
    pub fn with_story_id(mut self, story_id: impl Into<String>) -> Self {
        self.story_id = Some(story_id.into());
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With one more bullet
    #[inline]
    #[must_use]
    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullets.push(bullet.into());
        self
    }

    /// With bullets, replacing any already set
    #[must_use]
    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    /// With QA notes
    #[inline]
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Check the input can be processed
    ///
    /// # Errors
    /// Returns [`PipelineError::InvalidInput`] for a blank title.
    pub fn validate(&self) -> PipelineResult<()> {
        if self.title.trim().is_empty() {
            return Err(PipelineError::invalid_input("title is blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let input = RequirementInput::new("Full Screen Mode")
            .with_story_id("272265")
            .with_bullet("Select View → Full Screen Mode.")
            .with_notes("- Windows 11 only");
        assert_eq!(input.story_id.as_deref(), Some("272265"));
        assert_eq!(input.bullets.len(), 1);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn blank_title_rejected() {
        let err = RequirementInput::new("   ").validate().unwrap_err();
        assert!(matches!(err, PipelineError::InvalidInput(_)));
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let input: RequirementInput =
            serde_json::from_str(r#"{"title": "Rotate", "bullets": ["User can rotate."]}"#)
                .unwrap();
        assert_eq!(input.title, "Rotate");
        assert!(input.notes.is_none());
        assert!(input.description.is_empty());
    }
}
