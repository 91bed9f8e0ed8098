//! Draft assembly
//!
//! Combines title, steps and objective for one observable. The entry point
//! is always the fact base's primary one, or the sentinel when evidence
//! names none.

use crate::objective::ObjectiveBuilder;
use crate::steps::{option_name, StepBuilder};
use crate::title::{format_title, TitleBuilder};
use qa_model::{FactBase, Observable, RuleTables, TestCaseDraft, TestStep};

/// Generic area of undo/redo drafts
pub const UNDO_REDO_AREA: &str = "Undo/Redo";

/// Builds test case drafts from observables
#[derive(Debug, Clone, Default)]
pub struct ScenarioSynthesizer {
    pub(crate) titles: TitleBuilder,
    pub(crate) steps: StepBuilder,
    pub(crate) objectives: ObjectiveBuilder,
}

impl ScenarioSynthesizer {
    /// Create synthesizer from rule tables
    #[must_use]
    pub fn new(tables: &RuleTables) -> Self {
        Self {
            titles: TitleBuilder::new(),
            steps: StepBuilder::new(tables),
            objectives: ObjectiveBuilder::new(),
        }
    }

    /// Draft for one bullet
    #[must_use]
    pub fn draft(&self, id: impl Into<String>, observable: &Observable, facts: &FactBase) -> TestCaseDraft {
        let id = id.into();
        let entry_point = facts.entry_point_or_sentinel();
        if facts.primary_entry_point().is_none() {
            tracing::warn!("{}: no entry point in evidence, using sentinel", id);
        }

        TestCaseDraft {
            title: self
                .titles
                .build(&id, &facts.feature_name, entry_point, observable),
            steps: self.steps.build(observable, facts),
            objective: self
                .objectives
                .build(observable, &facts.feature_name, entry_point),
            id,
        }
    }

    /// Undo/redo draft for a bullet that mentions undo or redo.
    ///
    /// The bullet's own action is performed, undone and redone.
    #[must_use]
    pub fn undo_redo_draft(
        &self,
        id: impl Into<String>,
        observable: &Observable,
        facts: &FactBase,
    ) -> TestCaseDraft {
        let id = id.into();
        let feature = &facts.feature_name;
        let steps = &self.steps;

        let mut sequence = steps.prologue();
        if observable.requires_object {
            sequence.extend(steps.object_setup(facts));
        }
        sequence.extend(steps.navigation(
            facts.entry_point_or_sentinel(),
            &option_name(&observable.target),
            false,
        ));
        sequence.push(
            steps
                .action_step(observable)
                .unwrap_or_else(|| TestStep::action(format!("Apply {feature}."))),
        );
        if let Some(outcome) = observable.outcomes.first() {
            sequence.push(steps.verification(outcome));
        }
        sequence.push(TestStep::action("Trigger Undo (Ctrl+Z)."));
        sequence.push(steps.check("the change is reversed"));
        sequence.push(TestStep::action("Trigger Redo (Ctrl+Y)."));
        sequence.push(steps.check("the change is restored"));
        sequence.push(steps.teardown());

        TestCaseDraft {
            title: format_title(
                &id,
                feature,
                UNDO_REDO_AREA,
                &format!("Undo and redo {}", observable.target),
            ),
            steps: sequence,
            objective: self.objectives.undo_redo(feature),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qa_model::{EntryPoint, StoryType};
    use qa_observable::ObservableExtractor;

    fn fullscreen_facts() -> FactBase {
        let mut facts = FactBase::new("Full Screen Mode");
        facts
            .entry_points
            .push(EntryPoint::new("View → Full Screen Mode", "View Menu", "AC1"));
        facts
    }

    #[test]
    fn fullscreen_draft_end_to_end() {
        let observable = ObservableExtractor::default().extract(
            "Select View → Full Screen Mode to enter an immersive view. \
             OS-level UI (taskbar, title bar) is hidden.",
            StoryType::ModeLayout,
        );
        let draft = ScenarioSynthesizer::default().draft("AC1", &observable, &fullscreen_facts());

        assert_eq!(draft.id, "AC1");
        assert_eq!(draft.title, "AC1: Full Screen Mode / View Menu / Enter fullscreen mode");
        assert_eq!(draft.area(), Some("View Menu"));
        assert!(draft
            .steps
            .iter()
            .any(|s| s.action == "Verify OS-level UI (taskbar, title bar) is hidden."));
        assert!(draft.objective.contains("<b>View Menu</b>"));
    }

    #[test]
    fn missing_entry_point_uses_sentinel() {
        let observable = ObservableExtractor::default().extract("User can enter the grid mode.", StoryType::Unknown);
        let draft = ScenarioSynthesizer::default().draft("005", &observable, &FactBase::new("Grid"));
        assert_eq!(
            draft.area(),
            Some(qa_model::UNSPECIFIED_ENTRY_POINT)
        );
    }

    #[test]
    fn undo_redo_chain() {
        let observable = ObservableExtractor::default().extract(
            "User can rotate the object; undo restores the original angle.",
            StoryType::Tool,
        );
        let draft = ScenarioSynthesizer::default().undo_redo_draft("010", &observable, &fullscreen_facts());

        assert_eq!(draft.area(), Some(UNDO_REDO_AREA));
        let actions: Vec<_> = draft.steps.iter().map(|s| s.action.as_str()).collect();
        let undo = actions.iter().position(|a| a.starts_with("Trigger Undo")).unwrap();
        let redo = actions.iter().position(|a| a.starts_with("Trigger Redo")).unwrap();
        assert!(undo < redo);
        assert_eq!(actions[undo + 1], "Verify the change is reversed.");
        assert_eq!(draft.steps[redo + 1].expected, "The change is restored.");
        assert!(draft
            .steps
            .iter()
            .all(|s| s.is_verification() == !s.expected.is_empty()));
    }
}
