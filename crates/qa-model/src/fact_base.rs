//! Evidence-backed fact base
//!
//! The only source of truth downstream generation may reference. Every
//! value stored here is traceable to a span of the requirement text; an
//! absent pattern leaves its collection empty.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Placeholder shown when no entry point can be grounded in evidence
pub const UNSPECIFIED_ENTRY_POINT: &str = "Unspecified Entry Point (NEEDS INPUT)";

/// Evidence reference used for facts taken from the description
pub const DESCRIPTION_REF: &str = "Description";

/// Explicit navigation path into the feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPoint {
    /// Full navigation string, e.g. `View → Full Screen Mode`
    pub path: String,
    /// Coarse UI container, e.g. `View Menu`
    pub surface: String,
    /// Bullet id or [`DESCRIPTION_REF`]
    pub evidence_ref: String,
}

impl EntryPoint {
    /// Create entry point
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        surface: impl Into<String>,
        evidence_ref: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            surface: surface.into(),
            evidence_ref: evidence_ref.into(),
        }
    }
}

/// Kind of UI control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlType {
    /// Push button
    Button,
    /// On/off toggle
    Toggle,
    /// Keyboard shortcut
    Hotkey,
    /// Entry inside a menu
    MenuItem,
}

/// Explicit control mentioned in evidence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    /// Control label, e.g. `Show Diameter toggle`, `ESC`
    pub name: String,
    /// Control kind
    pub control_type: ControlType,
    /// Bullet id the control was read from
    pub evidence_ref: String,
}

/// Platform the feature must be exercised on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRequirement {
    /// Platform name: `Windows 11`, `iPad`, `Android Tablet`
    pub platform: String,
    /// Interaction model: `mouse/keyboard`, `touch`
    pub interaction_model: String,
    /// Assistive tool named in the same span, if any
    pub accessibility_tool: Option<String>,
    /// Bullet id the requirement was read from
    pub evidence_ref: String,
}

/// Structured facts extracted from one requirement document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactBase {
    /// Feature name derived from the story title
    pub feature_name: String,
    /// Ordered entry points; index 0 is the primary one
    pub entry_points: Vec<EntryPoint>,
    /// Named UI containers, superset of entry point surfaces
    pub surfaces: IndexSet<String>,
    /// Controls; repeats across sub-patterns are kept
    pub controls: Vec<Control>,
    /// At most one record per platform name
    pub platform_requirements: Vec<PlatformRequirement>,
    /// Items explicitly declared out of scope (lower-case)
    pub out_of_scope: IndexSet<String>,
    /// Explicit constraints
    pub constraints: Vec<String>,
    /// Object types named in evidence
    pub object_types: IndexSet<String>,
    /// Action verbs named in evidence
    pub actions: Vec<String>,
    /// Negative scenarios named in evidence
    pub negative_scenarios: IndexSet<String>,
    /// Bullet id → source text, in document order
    pub evidence_bullets: IndexMap<String, String>,
}

impl FactBase {
    /// Create empty fact base for a feature
    #[must_use]
    pub fn new(feature_name: impl Into<String>) -> Self {
        Self {
            feature_name: feature_name.into(),
            ..Self::default()
        }
    }

    /// Primary entry point surface.
    ///
    /// Falls back to the first recorded surface when no arrow path was
    /// found. `None` means the gap must be surfaced to a reviewer.
    #[must_use]
    pub fn primary_entry_point(&self) -> Option<&str> {
        self.entry_points
            .first()
            .map(|e| e.surface.as_str())
            .or_else(|| self.surfaces.first().map(String::as_str))
    }

    /// Primary entry point, or [`UNSPECIFIED_ENTRY_POINT`]
    #[must_use]
    pub fn entry_point_or_sentinel(&self) -> &str {
        self.primary_entry_point().unwrap_or(UNSPECIFIED_ENTRY_POINT)
    }

    /// Whether `surface` is a grounded surface or entry point surface
    #[must_use]
    pub fn has_surface(&self, surface: &str) -> bool {
        self.surfaces.contains(surface) || self.entry_points.iter().any(|e| e.surface == surface)
    }

    /// All known surfaces, surfaces first then entry point surfaces
    #[must_use]
    pub fn known_surfaces(&self) -> Vec<&str> {
        let mut out: IndexSet<&str> = self.surfaces.iter().map(String::as_str).collect();
        out.extend(self.entry_points.iter().map(|e| e.surface.as_str()));
        out.into_iter().collect()
    }

    /// Platform names in evidence order
    #[must_use]
    pub fn platforms(&self) -> Vec<&str> {
        self.platform_requirements
            .iter()
            .map(|p| p.platform.as_str())
            .collect()
    }

    /// Whether a platform record exists
    #[must_use]
    pub fn has_platform(&self, platform: &str) -> bool {
        self.platform_requirements
            .iter()
            .any(|p| p.platform == platform)
    }

    /// Case-insensitive out-of-scope lookup
    #[must_use]
    pub fn is_out_of_scope(&self, item: &str) -> bool {
        let item = item.to_lowercase();
        self.out_of_scope.iter().any(|s| s.to_lowercase() == item)
    }

    /// Whether any evidence bullet contains `needle` (case-insensitive)
    #[must_use]
    pub fn evidence_mentions(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.evidence_bullets
            .values()
            .any(|text| text.to_lowercase().contains(&needle))
    }

    /// Human-readable digest for debugging
    #[must_use]
    pub fn summary(&self) -> String {
        fn join<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
            let joined = items
                .into_iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            if joined.is_empty() {
                "None".to_string()
            } else {
                joined
            }
        }

        let mut out = format!("Fact base: {}\n", self.feature_name);
        let _ = writeln!(out, "  Entry points: {}", self.entry_points.len());
        for ep in &self.entry_points {
            let _ = writeln!(out, "    - {} (from {})", ep.path, ep.evidence_ref);
        }
        let _ = writeln!(out, "  Surfaces: {}", join(&self.surfaces));
        let _ = writeln!(out, "  Controls: {}", self.controls.len());
        let platforms: Vec<String> = self.platforms().into_iter().map(String::from).collect();
        let _ = writeln!(out, "  Platforms: {}", join(&platforms));
        let _ = writeln!(out, "  Object types: {}", join(&self.object_types));
        let _ = writeln!(out, "  Out of scope: {}", join(&self.out_of_scope));
        let _ = writeln!(out, "  Negative scenarios: {}", join(&self.negative_scenarios));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_fact_base() -> FactBase {
        let mut facts = FactBase::new("Full Screen Mode");
        facts.entry_points.push(EntryPoint::new(
            "View → Full Screen Mode",
            "View Menu",
            "AC1",
        ));
        facts.surfaces.insert("View Menu".to_string());
        facts
    }

    #[test]
    fn primary_entry_point_prefers_arrow_paths() {
        let mut facts = menu_fact_base();
        facts.surfaces.shift_insert(0, "Properties Panel".to_string());
        assert_eq!(facts.primary_entry_point(), Some("View Menu"));
    }

    #[test]
    fn primary_entry_point_falls_back_to_first_surface() {
        let mut facts = FactBase::new("Rotate");
        facts.surfaces.insert("Tools Menu".to_string());
        facts.surfaces.insert("Properties Panel".to_string());
        assert_eq!(facts.primary_entry_point(), Some("Tools Menu"));
    }

    #[test]
    fn empty_fact_base_yields_sentinel() {
        let facts = FactBase::new("Anything");
        assert_eq!(facts.primary_entry_point(), None);
        assert_eq!(facts.entry_point_or_sentinel(), UNSPECIFIED_ENTRY_POINT);
    }

    #[test]
    fn has_surface_checks_entry_points_too() {
        let mut facts = FactBase::new("Feature");
        facts
            .entry_points
            .push(EntryPoint::new("Location", "Design Panel", DESCRIPTION_REF));
        assert!(facts.has_surface("Design Panel"));
        assert!(!facts.has_surface("View Menu"));
        assert_eq!(facts.known_surfaces(), vec!["Design Panel"]);
    }

    #[test]
    fn out_of_scope_is_case_insensitive() {
        let mut facts = FactBase::new("Feature");
        facts.out_of_scope.insert("tooltips".to_string());
        assert!(facts.is_out_of_scope("Tooltips"));
        assert!(!facts.is_out_of_scope("templates"));
    }

    #[test]
    fn summary_lists_entry_points() {
        let summary = menu_fact_base().summary();
        assert!(summary.contains("View → Full Screen Mode (from AC1)"));
        assert!(summary.contains("Platforms: None"));
    }
}
