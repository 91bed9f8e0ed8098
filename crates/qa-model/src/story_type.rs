//! Closed story taxonomy
//!
//! A story is classified once per session. The category gates which
//! scenario templates and platform/accessibility expansions may be
//! generated downstream.

use serde::{Deserialize, Serialize};

/// Feature category of a requirement document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryType {
    /// Modes and window layouts (fullscreen, presentation, workspaces)
    ModeLayout,
    /// Modal dialogs and forms
    Dialog,
    /// Canvas tools acting on selected objects
    Tool,
    /// Dimension and measurement annotations
    Measurement,
    /// Open, save, import and export flows
    FileOps,
    /// Menu items and commands
    Menu,
    /// Property panels and settings
    Properties,
    /// Help menus, manuals, about dialogs
    HelpDocumentation,
    /// No category keyword matched
    Unknown,
}

impl StoryType {
    /// Order in which categories are scored.
    ///
    /// Ties go to the earliest entry. `HelpDocumentation` is scored first
    /// because its vocabulary is narrower than `Menu` or `FileOps`.
    pub const EVALUATION_ORDER: [StoryType; 8] = [
        StoryType::HelpDocumentation,
        StoryType::ModeLayout,
        StoryType::Dialog,
        StoryType::Tool,
        StoryType::Measurement,
        StoryType::FileOps,
        StoryType::Menu,
        StoryType::Properties,
    ];

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StoryType::ModeLayout => "Mode/Layout",
            StoryType::Dialog => "Dialog",
            StoryType::Tool => "Tool",
            StoryType::Measurement => "Measurement",
            StoryType::FileOps => "File Operations",
            StoryType::Menu => "Menu",
            StoryType::Properties => "Properties",
            StoryType::HelpDocumentation => "Help/Documentation",
            StoryType::Unknown => "Unknown",
        }
    }

    /// Snake-case identifier (`mode_layout`, `file_ops`, ...)
    #[must_use]
    pub fn snake_name(self) -> &'static str {
        match self {
            StoryType::ModeLayout => "mode_layout",
            StoryType::Dialog => "dialog",
            StoryType::Tool => "tool",
            StoryType::Measurement => "measurement",
            StoryType::FileOps => "file_ops",
            StoryType::Menu => "menu",
            StoryType::Properties => "properties",
            StoryType::HelpDocumentation => "help_documentation",
            StoryType::Unknown => "unknown",
        }
    }

    /// Scenario templates that may be generated for this category
    #[must_use]
    pub fn allowed_templates(self) -> &'static [ScenarioTemplate] {
        use ScenarioTemplate as T;
        match self {
            StoryType::ModeLayout => &[
                T::RepeatedEnterExit,
                T::PreserveActiveProject,
                T::UndoRedo,
            ],
            StoryType::Dialog => &[T::CloseWithoutAction, T::TabOrderFocusTrap, T::UndoRedo],
            StoryType::Tool => &[
                T::NoSelection,
                T::MultiObjectSelection,
                T::UndoRedo,
            ],
            StoryType::Measurement => &[
                T::NoSelection,
                T::WrongObjectType,
                T::DuplicatePrevention,
                T::UnitSystem,
                T::UndoRedo,
            ],
            StoryType::FileOps => &[T::FileNotFound, T::RecentFileOrdering, T::UndoRedo],
            StoryType::Menu | StoryType::Properties | StoryType::Unknown => &[T::UndoRedo],
            StoryType::HelpDocumentation => &[],
        }
    }

    /// Whether a template applies to this category
    #[must_use]
    pub fn allows(self, template: ScenarioTemplate) -> bool {
        self.allowed_templates().contains(&template)
    }

    /// Whether accessibility drafts are generated for this category
    #[must_use]
    pub fn includes_accessibility(self) -> bool {
        matches!(
            self,
            StoryType::ModeLayout
                | StoryType::Dialog
                | StoryType::Menu
                | StoryType::Properties
                | StoryType::Measurement
                | StoryType::HelpDocumentation
        )
    }
}

impl std::fmt::Display for StoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Edge-case scenario families gated by [`StoryType`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioTemplate {
    /// Enter and exit a mode several times in a row
    RepeatedEnterExit,
    /// Open project survives entering a mode
    PreserveActiveProject,
    /// Dismiss a dialog without acting
    CloseWithoutAction,
    /// Keyboard focus order inside a dialog
    TabOrderFocusTrap,
    /// Invoke the feature with nothing selected
    NoSelection,
    /// Apply to several selected objects at once
    MultiObjectSelection,
    /// Apply to an object of an unsupported type
    WrongObjectType,
    /// Reapply without creating duplicates
    DuplicatePrevention,
    /// Labels follow the active unit system
    UnitSystem,
    /// Missing file on open
    FileNotFound,
    /// Recent files list ordering
    RecentFileOrdering,
    /// Undo and redo of the feature's actions
    UndoRedo,
}
