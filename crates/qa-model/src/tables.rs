//! Static rule tables
//!
//! The configuration surface of the pipeline: forbidden phrases, generic
//! areas, the container whitelist and the keyword set per story type.
//! Tables are supplied at construction time and never mutated afterwards.

use crate::error::{ConfigError, ConfigResult};
use crate::story_type::StoryType;
use serde::{Deserialize, Serialize};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Keyword set per story type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryKeywords {
    /// [`StoryType::ModeLayout`]
    pub mode_layout: Vec<String>,
    /// [`StoryType::Dialog`]
    pub dialog: Vec<String>,
    /// [`StoryType::Tool`]
    pub tool: Vec<String>,
    /// [`StoryType::Measurement`]
    pub measurement: Vec<String>,
    /// [`StoryType::FileOps`]
    pub file_ops: Vec<String>,
    /// [`StoryType::Menu`]
    pub menu: Vec<String>,
    /// [`StoryType::Properties`]
    pub properties: Vec<String>,
    /// [`StoryType::HelpDocumentation`]
    pub help_documentation: Vec<String>,
}

impl StoryKeywords {
    /// Keywords for a story type; empty for [`StoryType::Unknown`]
    #[must_use]
    pub fn get(&self, story_type: StoryType) -> &[String] {
        match story_type {
            StoryType::ModeLayout => &self.mode_layout,
            StoryType::Dialog => &self.dialog,
            StoryType::Tool => &self.tool,
            StoryType::Measurement => &self.measurement,
            StoryType::FileOps => &self.file_ops,
            StoryType::Menu => &self.menu,
            StoryType::Properties => &self.properties,
            StoryType::HelpDocumentation => &self.help_documentation,
            StoryType::Unknown => &[],
        }
    }
}

impl Default for StoryKeywords {
    fn default() -> Self {
        Self {
            mode_layout: strings(&[
                "fullscreen", "full screen", "mode", "workspace", "presentation", "layout",
                "window", "display", "view", "screen",
            ]),
            dialog: strings(&[
                "dialog", "modal", "window", "create", "close", "open", "popup", "form", "wizard",
            ]),
            tool: strings(&[
                "tool", "select tool", "marker", "handle", "rotate", "mirror", "move",
                "transform", "flip", "scale", "resize", "active", "remains active",
                "tool remains", "selection tool",
            ]),
            measurement: strings(&[
                "dimension", "diameter", "radius", "measurement", "gps", "label", "value",
                "unit", "metric", "imperial", "measure",
            ]),
            file_ops: strings(&[
                "open", "save", "close", "recent files", "export", "import", "load", "file",
                "document",
            ]),
            menu: strings(&[
                "menu", "menu item", "option", "command", "subcategories", "view →",
                "view menu", "edit →", "file →", "tools →",
            ]),
            properties: strings(&[
                "properties", "property", "panel", "settings", "configure", "preferences",
                "options panel",
            ]),
            help_documentation: strings(&[
                "help", "manual", "user manual", "documentation", "guide", "about",
                "release notes", "license", "credits", "version", "readme", "faq", "support",
                "viewer", "pdf", "offline",
            ]),
        }
    }
}

/// Named static tables consumed by extraction, synthesis and validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTables {
    /// Ambiguity-inducing phrases rejected in step text and objectives
    pub forbidden_phrases: Vec<String>,
    /// Title areas accepted without a grounded surface
    pub generic_areas: Vec<String>,
    /// Container names recognized in `Token → Option` paths
    pub container_whitelist: Vec<String>,
    /// Keyword set per story type
    pub story_keywords: StoryKeywords,
    /// Assistive-technology tools; never navigable surfaces
    pub assistive_tools: Vec<String>,
    /// Nouns that switch verification phrasing to plural
    pub plural_nouns: Vec<String>,
    /// Markers that cancel a bullet
    pub cancelled_indicators: Vec<String>,
    /// Application named in prologue and teardown steps
    pub application_name: String,
}

impl Default for RuleTables {
    fn default() -> Self {
        Self {
            forbidden_phrases: strings(&[
                "or",
                "if available",
                "if supported",
                "where safe",
                "ambiguous",
            ]),
            generic_areas: strings(&["Canvas", "Undo/Redo", "Accessibility", "Units"]),
            container_whitelist: strings(&[
                "View", "Edit", "File", "Tools", "Window", "Help", "Dimensions", "Properties",
            ]),
            story_keywords: StoryKeywords::default(),
            assistive_tools: strings(&[
                "Accessibility Insights",
                "VoiceOver",
                "Accessibility Scanner",
                "Narrator",
                "TalkBack",
                "JAWS",
                "NVDA",
            ]),
            plural_nouns: strings(&[
                "panels", "menus", "toolbars", "borders", "issues", "objects", "shapes", "items",
                "controls", "buttons",
            ]),
            cancelled_indicators: strings(&[
                "cancelled",
                "out of scope",
                "to be cancelled",
                "not implemented",
                "deprecated",
                "superseded",
                "will not be implemented",
            ]),
            application_name: "ENV QuickDraw".to_string(),
        }
    }
}

impl RuleTables {
    /// Built-in tables
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tables from TOML; omitted tables keep their defaults
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the text is not valid TOML or a table
    /// fails [`RuleTables::validate`].
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let tables: Self = toml::from_str(text)?;
        tables.validate()?;
        Ok(tables)
    }

    /// With forbidden phrases
    #[must_use]
    pub fn with_forbidden_phrases(mut self, phrases: Vec<String>) -> Self {
        self.forbidden_phrases = phrases;
        self
    }

    /// With container whitelist
    #[must_use]
    pub fn with_container_whitelist(mut self, containers: Vec<String>) -> Self {
        self.container_whitelist = containers;
        self
    }

    /// With application name
    #[must_use]
    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = name.into();
        self
    }

    /// Check that every table is usable
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidEntry`] naming the first bad table.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(bad) = self
            .container_whitelist
            .iter()
            .find(|c| c.trim().is_empty() || !c.chars().all(char::is_alphanumeric))
        {
            return Err(ConfigError::invalid_entry(
                "container_whitelist",
                format!("container token must be a single word, got '{bad}'"),
            ));
        }

        let blank = |items: &[String]| items.iter().any(|s| s.trim().is_empty());
        if blank(&self.forbidden_phrases) {
            return Err(ConfigError::invalid_entry("forbidden_phrases", "blank phrase"));
        }
        if blank(&self.generic_areas) {
            return Err(ConfigError::invalid_entry("generic_areas", "blank area"));
        }
        if blank(&self.assistive_tools) {
            return Err(ConfigError::invalid_entry("assistive_tools", "blank tool name"));
        }
        for story_type in StoryType::EVALUATION_ORDER {
            if blank(self.story_keywords.get(story_type)) {
                return Err(ConfigError::invalid_entry(
                    "story_keywords",
                    format!("blank keyword for {story_type}"),
                ));
            }
        }
        if self.application_name.trim().is_empty() {
            return Err(ConfigError::invalid_entry("application_name", "empty name"));
        }
        Ok(())
    }

    /// Whether a bullet carries a cancellation marker
    #[must_use]
    pub fn is_cancelled(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.cancelled_indicators
            .iter()
            .any(|marker| lower.contains(marker.as_str()))
    }

    /// Whether `area` is accepted without evidence
    #[must_use]
    pub fn is_generic_area(&self, area: &str) -> bool {
        self.generic_areas.iter().any(|a| a == area)
    }
}

/// Draft id sequencing.
///
/// The first non-cancelled bullet takes the sentinel id; every later one
/// takes the next value of a counter advancing by a fixed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Id of the first drafted bullet
    pub sentinel_id: String,
    /// First counter value after the sentinel
    pub start: u32,
    /// Counter increment
    pub step: u32,
    /// First counter value for edge-case drafts
    pub edge_case_start: u32,
    /// Zero-padded width of counter ids
    pub width: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            sentinel_id: "AC1".to_string(),
            start: 5,
            step: 5,
            edge_case_start: 100,
            width: 3,
        }
    }
}

impl SequenceConfig {
    /// Check the sequence can only increase
    ///
    /// # Errors
    /// Returns [`ConfigError::Sequence`] for a zero step or blank sentinel.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.step == 0 {
            return Err(ConfigError::Sequence("step must be positive".to_string()));
        }
        if self.sentinel_id.trim().is_empty() {
            return Err(ConfigError::Sequence("sentinel id is blank".to_string()));
        }
        Ok(())
    }
}
