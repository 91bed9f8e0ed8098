//! Draft id sequencing
//!
//! One sequence per story session. The first primary id is the sentinel;
//! later ids come from a counter that only moves forward. Edge-case drafts
//! draw from a separate counter.

use qa_model::{ConfigResult, SequenceConfig};

/// Per-session id sequence
#[derive(Debug, Clone)]
pub struct IdSequence {
    config: SequenceConfig,
    prefix: Option<String>,
    sentinel_issued: bool,
    next: u32,
    next_edge: u32,
    issued: usize,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::from_valid(SequenceConfig::default())
    }
}

impl IdSequence {
    /// Create sequence from a configuration
    ///
    /// # Errors
    /// Returns [`qa_model::ConfigError::Sequence`] for an unusable config.
    pub fn new(config: SequenceConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: SequenceConfig) -> Self {
        Self {
            next: config.start,
            next_edge: config.edge_case_start,
            config,
            prefix: None,
            sentinel_issued: false,
            issued: 0,
        }
    }

    /// Prefix every id with a story id, e.g. `272265-005`
    #[must_use]
    pub fn with_prefix(mut self, story_id: impl Into<String>) -> Self {
        let story_id = story_id.into();
        self.prefix = (!story_id.trim().is_empty()).then_some(story_id);
        self
    }

    /// Next primary id
    pub fn next_id(&mut self) -> String {
        self.issued += 1;
        if !self.sentinel_issued {
            self.sentinel_issued = true;
            return self.prefixed(self.config.sentinel_id.clone());
        }
        let value = self.next;
        self.next = self.next.saturating_add(self.config.step);
        self.prefixed(self.pad(value))
    }

    /// Next edge-case id
    pub fn next_edge_id(&mut self) -> String {
        self.issued += 1;
        let value = self.next_edge;
        self.next_edge = self.next_edge.saturating_add(self.config.step);
        self.prefixed(self.pad(value))
    }

    /// Number of ids handed out so far
    #[must_use]
    pub fn issued(&self) -> usize {
        self.issued
    }

    fn pad(&self, value: u32) -> String {
        format!("{value:0width$}", width = self.config.width)
    }

    fn prefixed(&self, id: String) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}-{id}"),
            None => id,
        }
    }
}
