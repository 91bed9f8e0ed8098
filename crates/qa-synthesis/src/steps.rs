//! Step sequences
//!
//! Every sequence runs prologue, optional object setup, navigation, the
//! action, one verification per outcome, then teardown. Only verification
//! steps carry an expected result.

use crate::text::{article, capitalize, sentence, title_case};
use qa_model::{Action, FactBase, Observable, RuleTables, TestStep};

/// Builds ordered test steps
#[derive(Debug, Clone)]
pub struct StepBuilder {
    application: String,
    plural_nouns: Vec<String>,
}

impl Default for StepBuilder {
    fn default() -> Self {
        Self::new(&RuleTables::default())
    }
}

impl StepBuilder {
    /// Create step builder from rule tables
    #[must_use]
    pub fn new(tables: &RuleTables) -> Self {
        Self {
            application: tables.application_name.clone(),
            plural_nouns: tables.plural_nouns.clone(),
        }
    }

    /// Steps for one bullet draft
    #[must_use]
    pub fn build(&self, observable: &Observable, facts: &FactBase) -> Vec<TestStep> {
        let entry_point = facts.entry_point_or_sentinel();
        let mut steps = self.prologue();

        if observable.requires_object {
            steps.extend(self.object_setup(facts));
        }

        steps.extend(self.navigation(
            entry_point,
            &option_name(&observable.target),
            observable.action == Action::Accessible,
        ));
        steps.extend(self.action_step(observable));
        steps.extend(observable.outcomes.iter().map(|o| self.verification(o)));
        steps.push(self.teardown());
        steps
    }

    /// Prerequisite assertion and application launch
    #[must_use]
    pub fn prologue(&self) -> Vec<TestStep> {
        vec![
            TestStep::action(self.prerequisite()),
            TestStep::action(format!("Launch the {} application.", self.application)),
        ]
    }

    /// Fixed first step of every sequence
    #[must_use]
    pub fn prerequisite(&self) -> String {
        format!("PRE-REQ: {} application is installed", self.application)
    }

    /// Fixed last step of every sequence
    #[must_use]
    pub fn teardown(&self) -> TestStep {
        TestStep::action(format!("Close/Exit the {} application", self.application))
    }

    /// Create and select an object; names the object type when evidence does
    #[must_use]
    pub fn object_setup(&self, facts: &FactBase) -> Vec<TestStep> {
        match facts.object_types.first() {
            Some(kind) => vec![
                TestStep::action(format!("Create a new drawing with {} {kind}.", article(kind))),
                TestStep::action(format!("Select the {kind}.")),
            ],
            None => vec![
                TestStep::action("Create a new drawing with an object."),
                TestStep::action("Select the object."),
            ],
        }
    }

    /// Reach `option` from `entry_point`.
    ///
    /// With `open_only`, a menu entry point yields only the open step.
    #[must_use]
    pub fn navigation(&self, entry_point: &str, option: &str, open_only: bool) -> Vec<TestStep> {
        if entry_point.contains("Menu") {
            let menu = entry_point.strip_suffix(" Menu").unwrap_or(entry_point);
            let mut steps = vec![TestStep::action(format!("Open the {menu} menu."))];
            if !open_only {
                steps.push(TestStep::action(format!("Select {option}.")));
            }
            steps
        } else if entry_point.contains("Panel") {
            vec![
                TestStep::action(format!("Open the {entry_point}.")),
                TestStep::action(format!("Enable the {option}.")),
            ]
        } else if entry_point.contains("Toolbar") {
            vec![TestStep::action(format!(
                "Click the {option} button on the {entry_point}."
            ))]
        } else if entry_point.contains("Dialog") {
            vec![TestStep::action(format!("Open the {entry_point}."))]
        } else {
            vec![TestStep::action(format!(
                "Navigate to {option} via {entry_point}."
            ))]
        }
    }

    /// Action step; observational actions have none
    #[must_use]
    pub fn action_step(&self, observable: &Observable) -> Option<TestStep> {
        let target = &observable.target;
        let text = match observable.action {
            Action::Display | Action::Verify | Action::Accessible => return None,
            Action::Activate => "Activate the tool.".to_string(),
            Action::Rotate if observable.source_text.to_lowercase().contains("handle") => {
                format!("Drag the rotation handle to rotate the {target}.")
            }
            Action::Rotate => format!("Rotate the {target} using the rotation tool."),
            Action::Enter
            | Action::Exit
            | Action::Create
            | Action::Enable
            | Action::Disable
            | Action::Toggle
            | Action::Select
            | Action::Move
            | Action::Drag
            | Action::Resize
            | Action::Measure => {
                format!("{} {target}.", capitalize(observable.action.as_str()))
            }
            Action::Remove | Action::Modify | Action::Hide => {
                format!("Perform {} on {target}.", observable.action)
            }
        };
        Some(TestStep::action(text))
    }

    /// Verification step for one outcome
    #[must_use]
    pub fn verification(&self, outcome: &str) -> TestStep {
        let outcome = outcome.trim().trim_end_matches('.');
        let has_verb = outcome.contains(" is ") || outcome.contains(" are ");
        if !has_verb && self.is_plural(outcome) {
            TestStep::verify(
                format!("Verify {outcome} are present."),
                sentence(&format!("{outcome} are present")),
            )
        } else {
            TestStep::verify(format!("Verify {outcome}."), sentence(outcome))
        }
    }

    /// Verification step with explicit wording
    #[must_use]
    pub fn check(&self, statement: &str) -> TestStep {
        let statement = statement.trim().trim_end_matches('.');
        TestStep::verify(format!("Verify {statement}."), sentence(statement))
    }

    fn is_plural(&self, phrase: &str) -> bool {
        let lower = phrase.to_lowercase();
        lower
            .split(|c: char| !c.is_alphanumeric())
            .any(|w| self.plural_nouns.iter().any(|n| n == w))
    }
}

/// Option name shown in navigation steps
#[must_use]
pub fn option_name(target: &str) -> String {
    let title = title_case(target);
    if title.contains("Fullscreen Mode") {
        title.replace("Fullscreen Mode", "Full Screen Mode")
    } else {
        title.replace("Fullscreen", "Full Screen Mode")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qa_model::EntryPoint;

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

    fn view_menu_facts() -> FactBase {
        let mut facts = FactBase::new("Full Screen Mode");
        facts.entry_points.push(EntryPoint::new(
            "View → Full Screen Mode",
            "View Menu",
            "AC1",
        ));
        facts
    }

    fn actions(steps: &[TestStep]) -> Vec<&str> {
        steps.iter().map(|s| s.action.as_str()).collect()
    }

    #[test]
    fn fullscreen_sequence() {
        let steps = StepBuilder::default().build(
            &observable(Action::Enter, "fullscreen mode", &["OS-level UI is hidden"]),
            &view_menu_facts(),
        );
        assert_eq!(
            actions(&steps),
            vec![
                "PRE-REQ: ENV QuickDraw application is installed",
                "Launch the ENV QuickDraw application.",
                "Open the View menu.",
                "Select Full Screen Mode.",
                "Enter fullscreen mode.",
                "Verify OS-level UI is hidden.",
                "Close/Exit the ENV QuickDraw application",
            ]
        );
        assert_eq!(steps[5].expected, "OS-level UI is hidden.");
        assert!(steps
            .iter()
            .all(|s| s.is_verification() == !s.expected.is_empty()));
    }

    #[test]
    fn object_setup_uses_grounded_type() {
        let builder = StepBuilder::default();
        let mut facts = FactBase::new("Diameter");
        assert_eq!(
            actions(&builder.object_setup(&facts)),
            vec!["Create a new drawing with an object.", "Select the object."]
        );
        facts.object_types.insert("ellipse".to_string());
        assert_eq!(
            actions(&builder.object_setup(&facts)),
            vec!["Create a new drawing with an ellipse.", "Select the ellipse."]
        );
    }

    #[test]
    fn navigation_branches_on_entry_point() {
        let builder = StepBuilder::default();
        assert_eq!(
            actions(&builder.navigation("Properties Panel", "Show Diameter", false)),
            vec!["Open the Properties Panel.", "Enable the Show Diameter."]
        );
        assert_eq!(
            actions(&builder.navigation("Main Toolbar", "Rotate", false)),
            vec!["Click the Rotate button on the Main Toolbar."]
        );
        assert_eq!(
            actions(&builder.navigation("Help Menu", "About", true)),
            vec!["Open the Help menu."]
        );
        assert_eq!(
            actions(&builder.navigation("Canvas", "Rotate", false)),
            vec!["Navigate to Rotate via Canvas."]
        );
    }

    #[test]
    fn sentinel_entry_point_is_surfaced() {
        let steps = StepBuilder::default().build(
            &observable(Action::Create, "layer", &["layer is created"]),
            &FactBase::new("Layers"),
        );
        assert!(steps
            .iter()
            .any(|s| s.action.contains("Unspecified Entry Point (NEEDS INPUT)")));
    }

    #[test]
    fn observational_actions_have_no_action_step() {
        let builder = StepBuilder::default();
        assert!(builder
            .action_step(&observable(Action::Display, "preview", &[]))
            .is_none());
        assert!(builder
            .action_step(&observable(Action::Accessible, "menu", &[]))
            .is_none());
    }

    #[test]
    fn rotate_with_handle() {
        let mut obs = observable(Action::Rotate, "object", &["object is rotated"]);
        obs.source_text = "User can rotate the object by dragging the rotation handle.".into();
        let step = StepBuilder::default().action_step(&obs).unwrap();
        assert_eq!(step.action, "Drag the rotation handle to rotate the object.");
    }

    #[test]
    fn plural_verification() {
        let builder = StepBuilder::default();
        let step = builder.verification("window borders");
        assert_eq!(step.action, "Verify window borders are present.");
        assert_eq!(step.expected, "Window borders are present.");

        let step = builder.verification("status bar");
        assert_eq!(step.action, "Verify status bar.");
        assert_eq!(step.expected, "Status bar.");
    }

    #[test]
    fn singular_outcome_verified_verbatim() {
        let builder = StepBuilder::default();
        for (outcome, action, expected) in [
            (
                "Tool remains active",
                "Verify Tool remains active.",
                "Tool remains active.",
            ),
            (
                "App UI remains visible",
                "Verify App UI remains visible.",
                "App UI remains visible.",
            ),
            (
                "remove completes successfully",
                "Verify remove completes successfully.",
                "Remove completes successfully.",
            ),
            (
                "ellipse resizes correctly",
                "Verify ellipse resizes correctly.",
                "Ellipse resizes correctly.",
            ),
        ] {
            let step = builder.verification(outcome);
            assert_eq!(step.action, action);
            assert_eq!(step.expected, expected);
        }
    }

    #[test]
    fn option_names() {
        assert_eq!(option_name("fullscreen mode"), "Full Screen Mode");
        assert_eq!(option_name("fullscreen"), "Full Screen Mode");
        assert_eq!(option_name("rotation handle"), "Rotation Handle");
    }
}
