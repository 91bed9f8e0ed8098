//! Per-bullet observables
//!
//! An [`Observable`] is the atomic action/target/outcome triple read from
//! one requirement bullet. It is built once and consumed immediately by
//! scenario synthesis.

use serde::{Deserialize, Serialize};

/// Canonical action families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Tool activation
    Activate,
    /// Turn a feature on
    Enable,
    /// Turn a feature off
    Disable,
    /// Rotate an object
    Rotate,
    /// Drag a handle or object
    Drag,
    /// Enter a mode
    Enter,
    /// Leave a mode
    Exit,
    /// Flip a state
    Toggle,
    /// Create an element
    Create,
    /// Remove an element
    Remove,
    /// Change a value
    Modify,
    /// Pick an element
    Select,
    /// Observation only
    Verify,
    /// Something is shown
    Display,
    /// Something is hidden
    Hide,
    /// Change size
    Resize,
    /// Change position
    Move,
    /// Take a measurement
    Measure,
    /// Feature can be reached
    Accessible,
}

impl Action {
    /// Lower-case identifier
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Activate => "activate",
            Action::Enable => "enable",
            Action::Disable => "disable",
            Action::Rotate => "rotate",
            Action::Drag => "drag",
            Action::Enter => "enter",
            Action::Exit => "exit",
            Action::Toggle => "toggle",
            Action::Create => "create",
            Action::Remove => "remove",
            Action::Modify => "modify",
            Action::Select => "select",
            Action::Verify => "verify",
            Action::Display => "display",
            Action::Hide => "hide",
            Action::Resize => "resize",
            Action::Move => "move",
            Action::Measure => "measure",
            Action::Accessible => "accessible",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Testable observable extracted from a single bullet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observable {
    /// What the user does
    pub action: Action,
    /// What is acted upon
    pub target: String,
    /// What to verify, in extraction order; never empty
    pub outcomes: Vec<String>,
    /// Platform, object type and phase limits
    pub constraints: Vec<String>,
    /// Whether an object must exist before the action
    pub requires_object: bool,
    /// Original bullet text
    pub source_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_serializes_snake_case() {
        let json = serde_json::to_string(&Action::Accessible).unwrap();
        assert_eq!(json, "\"accessible\"");
        assert_eq!(Action::Enter.to_string(), "enter");
    }
}
