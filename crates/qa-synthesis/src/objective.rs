//! One-sentence objectives with `<b>` emphasis

use qa_model::{Action, Observable};

/// Builds draft objectives
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectiveBuilder;

impl ObjectiveBuilder {
    /// Create objective builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Objective for a bullet draft
    #[must_use]
    pub fn build(&self, observable: &Observable, feature: &str, entry_point: &str) -> String {
        let target = &observable.target;
        match observable.action {
            Action::Enter => format!(
                "Verify that <b>{feature}</b> can be entered via <b>{entry_point}</b> \
                 and {target} is activated correctly"
            ),
            Action::Exit => format!(
                "Verify that <b>{feature}</b> can be exited and previous state is restored"
            ),
            Action::Create | Action::Enable | Action::Disable | Action::Toggle => format!(
                "Verify that <b>{target}</b> can be {} via <b>{entry_point}</b>",
                past_tense(observable.action)
            ),
            Action::Rotate | Action::Move => format!(
                "Verify that <b>{target}</b> can be {} correctly",
                past_tense(observable.action)
            ),
            Action::Resize => format!("Verify that <b>{target}</b> resizes correctly"),
            Action::Measure => format!("Verify that <b>{target}</b> can be measured accurately"),
            Action::Accessible => {
                format!("Verify that <b>{feature}</b> is accessible via <b>{entry_point}</b>")
            }
            Action::Verify if !observable.outcomes.is_empty() => {
                format!("Verify that <b>{}</b>", observable.outcomes[0])
            }
            _ => format!(
                "Verify that <b>{}</b> action on <b>{target}</b> works correctly via <b>{entry_point}</b>",
                observable.action
            ),
        }
    }

    /// Objective for an undo/redo draft
    #[must_use]
    pub fn undo_redo(&self, feature: &str) -> String {
        format!(
            "Verify that <b>Undo</b> and <b>Redo</b> correctly reverse and restore <b>{feature}</b> actions"
        )
    }
}

fn past_tense(action: Action) -> &'static str {
    match action {
        Action::Create => "created",
        Action::Enable => "enabled",
        Action::Disable => "disabled",
        Action::Toggle => "toggled",
        Action::Rotate => "rotated",
        Action::Move => "moved",
        _ => "applied",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn observable(action: Action, target: &str, outcomes: &[&str]) -> Observable {
        Observable {
            action,
            target: target.to_string(),
            outcomes: outcomes.iter().map(|o| (*o).to_string()).collect(),
            constraints: Vec::new(),
            requires_object: false,
            source_text: String::new(),
        }
    }

    #[test]
    fn enter_objective() {
        let objective = ObjectiveBuilder::new().build(
            &observable(Action::Enter, "fullscreen mode", &["mode is active"]),
            "Full Screen Mode",
            "View Menu",
        );
        assert_eq!(
            objective,
            "Verify that <b>Full Screen Mode</b> can be entered via <b>View Menu</b> \
             and fullscreen mode is activated correctly"
        );
    }

    #[test]
    fn verify_uses_first_outcome() {
        let objective = ObjectiveBuilder::new().build(
            &observable(Action::Verify, "label", &["label is visible", "value is shown"]),
            "Diameter",
            "Dimensions Menu",
        );
        assert_eq!(objective, "Verify that <b>label is visible</b>");
    }

    #[test]
    fn fallback_names_action_and_entry_point() {
        let objective = ObjectiveBuilder::new().build(
            &observable(Action::Remove, "layer", &["layer is removed"]),
            "Layers",
            "Edit Menu",
        );
        assert_eq!(
            objective,
            "Verify that <b>remove</b> action on <b>layer</b> works correctly via <b>Edit Menu</b>"
        );
    }

    #[test]
    fn past_tense_objectives() {
        let builder = ObjectiveBuilder::new();
        assert_eq!(
            builder.build(&observable(Action::Rotate, "object", &[]), "Rotate", "Tools Menu"),
            "Verify that <b>object</b> can be rotated correctly"
        );
        assert_eq!(
            builder.build(&observable(Action::Toggle, "grid", &[]), "Grid", "View Menu"),
            "Verify that <b>grid</b> can be toggled via <b>View Menu</b>"
        );
    }
}
