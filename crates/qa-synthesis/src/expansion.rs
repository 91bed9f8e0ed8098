//! Story-type gated expansions
//!
//! Edge-case drafts follow the templates a story type allows and draw ids
//! from the edge-case counter. Accessibility drafts are emitted once per
//! platform recorded in evidence. Neither ever invents an entry point.

use crate::sequence::IdSequence;
use crate::steps::option_name;
use crate::synthesizer::ScenarioSynthesizer;
use crate::text::article;
use crate::title::format_title;
use qa_model::{
    FactBase, PlatformRequirement, ScenarioTemplate, StoryType, TestCaseDraft, TestStep,
};

/// Generic area of unit-system drafts
pub const UNITS_AREA: &str = "Units";

/// Generic area of accessibility drafts
pub const ACCESSIBILITY_AREA: &str = "Accessibility";

/// Draft content before an id is assigned
struct Scenario {
    area: String,
    phrase: String,
    steps: Vec<TestStep>,
    objective: String,
}

impl Scenario {
    fn into_draft(self, id: String, feature: &str) -> TestCaseDraft {
        TestCaseDraft {
            title: format_title(&id, feature, &self.area, &self.phrase),
            steps: self.steps,
            objective: self.objective,
            id,
        }
    }
}

impl ScenarioSynthesizer {
    /// Edge-case drafts allowed for `story_type`.
    ///
    /// A template is skipped when evidence already records its negative
    /// scenario or lacks the facts it needs. Skipped templates consume no id.
    pub fn edge_cases(
        &self,
        story_type: StoryType,
        facts: &FactBase,
        sequence: &mut IdSequence,
    ) -> Vec<TestCaseDraft> {
        let drafts: Vec<_> = story_type
            .allowed_templates()
            .iter()
            .filter_map(|&template| self.edge_case(template, story_type, facts))
            .map(|scenario| scenario.into_draft(sequence.next_edge_id(), &facts.feature_name))
            .collect();

        tracing::debug!("{} edge-case drafts for {}", drafts.len(), story_type);
        drafts
    }

    /// One accessibility draft per platform requirement
    pub fn accessibility(
        &self,
        story_type: StoryType,
        facts: &FactBase,
        sequence: &mut IdSequence,
    ) -> Vec<TestCaseDraft> {
        if !story_type.includes_accessibility() {
            return Vec::new();
        }
        facts
            .platform_requirements
            .iter()
            .map(|platform| {
                self.platform_access(platform, facts)
                    .into_draft(sequence.next_id(), &facts.feature_name)
            })
            .collect()
    }

    fn edge_case(
        &self,
        template: ScenarioTemplate,
        story_type: StoryType,
        facts: &FactBase,
    ) -> Option<Scenario> {
        let feature = facts.feature_name.as_str();
        let entry_point = facts.entry_point_or_sentinel();
        let steps = &self.steps;
        let navigate = || steps.navigation(entry_point, &option_name(feature), false);
        let apply = || TestStep::action(format!("Apply {feature}."));

        let mut sequence = steps.prologue();
        let (phrase, objective) = match template {
            ScenarioTemplate::RepeatedEnterExit => {
                sequence.extend(navigate());
                sequence.push(TestStep::action(format!("Exit {feature}.")));
                sequence.push(TestStep::action(format!(
                    "Repeat entering and exiting {feature} three times."
                )));
                sequence.push(steps.check("the application remains responsive after each cycle"));
                sequence.push(steps.check("the previous layout is restored after the final exit"));
                (
                    "Repeated toggle enter and exit mode".to_string(),
                    format!(
                        "Verify that <b>{feature}</b> can be entered and exited repeatedly \
                         without losing the previous layout"
                    ),
                )
            }
            ScenarioTemplate::PreserveActiveProject => {
                sequence.extend(steps.object_setup(facts));
                sequence.extend(navigate());
                sequence.push(steps.check("the drawing and its objects are unchanged"));
                sequence.push(TestStep::action(format!("Exit {feature}.")));
                sequence.push(steps.check("the drawing is still open with no changes"));
                (
                    "Active project preserved when entering mode".to_string(),
                    format!(
                        "Verify that the active project is preserved when entering and \
                         exiting <b>{feature}</b>"
                    ),
                )
            }
            ScenarioTemplate::CloseWithoutAction => {
                sequence.extend(navigate());
                sequence.push(TestStep::action("Close the dialog without confirming."));
                sequence.push(steps.check("no new item is created"));
                (
                    "Close dialog without creating".to_string(),
                    format!(
                        "Verify that closing the <b>{feature}</b> dialog without confirming \
                         makes no changes"
                    ),
                )
            }
            ScenarioTemplate::TabOrderFocusTrap => {
                sequence.extend(navigate());
                sequence.push(TestStep::action(
                    "Press Tab repeatedly to move through the dialog controls.",
                ));
                sequence.push(steps.check("focus moves through the dialog controls in order"));
                sequence.push(steps.check("focus stays inside the dialog while it is open"));
                (
                    "Tab order and focus trap in dialog".to_string(),
                    format!(
                        "Verify that keyboard focus follows the tab order and stays inside \
                         the <b>{feature}</b> dialog"
                    ),
                )
            }
            ScenarioTemplate::NoSelection => {
                if facts.negative_scenarios.contains("no_selection") {
                    return None;
                }
                sequence.push(TestStep::action("Create a new drawing."));
                sequence.push(TestStep::action("Clear the selection."));
                sequence.extend(navigate());
                sequence.push(apply());
                let (phrase, check) = if story_type == StoryType::Measurement {
                    ("Measurement with no selection", "no measurement is created")
                } else {
                    ("Tool behavior with no selection", "no object is changed")
                };
                sequence.push(steps.check(check));
                (
                    phrase.to_string(),
                    format!("Verify that <b>{feature}</b> makes no changes when nothing is selected"),
                )
            }
            ScenarioTemplate::MultiObjectSelection => {
                sequence.push(TestStep::action("Create a new drawing with two objects."));
                sequence.push(TestStep::action("Select both objects."));
                sequence.extend(navigate());
                sequence.push(apply());
                sequence.push(steps.check(&format!("{feature} applies to every selected object")));
                (
                    "Tool applied to multiple selected objects".to_string(),
                    format!("Verify that <b>{feature}</b> applies to every selected object"),
                )
            }
            ScenarioTemplate::WrongObjectType => {
                if facts.negative_scenarios.contains("wrong_object_type") {
                    return None;
                }
                let required = facts.object_types.first()?;
                let wrong = if required == "rectangle" { "triangle" } else { "rectangle" };
                sequence.push(TestStep::action(format!(
                    "Create a new drawing with {} {wrong}.",
                    article(wrong)
                )));
                sequence.push(TestStep::action(format!("Select the {wrong}.")));
                sequence.extend(navigate());
                sequence.push(apply());
                sequence.push(steps.check(&format!("no measurement is created for the {wrong}")));
                (
                    format!("Wrong object type ({wrong})"),
                    format!("Verify that <b>{feature}</b> applies only to <b>{required}</b> objects"),
                )
            }
            ScenarioTemplate::DuplicatePrevention => {
                sequence.extend(steps.object_setup(facts));
                sequence.extend(navigate());
                sequence.push(apply());
                sequence.push(TestStep::action(format!(
                    "Apply {feature} again to the same object."
                )));
                sequence.push(steps.check("only one measurement is shown on the object"));
                (
                    "Reapplying measurement does not create duplicates".to_string(),
                    format!(
                        "Verify that reapplying <b>{feature}</b> does not create duplicate measurements"
                    ),
                )
            }
            ScenarioTemplate::UnitSystem => {
                if !(facts.evidence_mentions("metric") || facts.evidence_mentions("imperial")) {
                    return None;
                }
                sequence.extend(steps.object_setup(facts));
                sequence.push(TestStep::action("Set the unit system to Metric."));
                sequence.extend(navigate());
                sequence.push(apply());
                sequence.push(steps.check("the measurement value uses metric units"));
                sequence.push(TestStep::action("Set the unit system to Imperial."));
                sequence.push(steps.check("the measurement value uses imperial units"));
                sequence.push(steps.teardown());
                return Some(Scenario {
                    area: UNITS_AREA.to_string(),
                    phrase: "Imperial and Metric unit display".to_string(),
                    steps: sequence,
                    objective: format!(
                        "Verify that <b>{feature}</b> values follow the <b>Imperial and Metric</b> unit systems"
                    ),
                });
            }
            ScenarioTemplate::FileNotFound => {
                sequence.extend(navigate());
                sequence.push(TestStep::action("Attempt to open a file that no longer exists."));
                sequence.push(steps.check("an error message names the missing file"));
                sequence.push(steps.check("the application remains responsive"));
                (
                    "File not found error handling".to_string(),
                    format!("Verify that <b>{feature}</b> reports a missing file clearly"),
                )
            }
            ScenarioTemplate::RecentFileOrdering => {
                sequence.push(TestStep::action("Open two files one after the other."));
                sequence.extend(navigate());
                sequence.push(steps.check("the most recently opened file is listed first"));
                (
                    "Recent files list ordering".to_string(),
                    format!(
                        "Verify that the recent files list for <b>{feature}</b> is ordered by most recent use"
                    ),
                )
            }
            // Produced per bullet, not as an expansion
            ScenarioTemplate::UndoRedo => return None,
        };
        sequence.push(steps.teardown());

        Some(Scenario {
            area: entry_point.to_string(),
            phrase,
            steps: sequence,
            objective,
        })
    }

    fn platform_access(&self, platform: &PlatformRequirement, facts: &FactBase) -> Scenario {
        let feature = facts.feature_name.as_str();
        let name = platform.platform.as_str();
        let tool = platform.accessibility_tool.as_deref();
        let steps = &self.steps;

        let mut sequence = steps.prologue();
        if let Some(tool) = tool {
            sequence.insert(1, TestStep::action(format!("PRE-REQ: {tool} is installed")));
        }

        let phrase = if platform.interaction_model.contains("keyboard") {
            sequence.push(TestStep::action(format!(
                "Navigate to {feature} using the keyboard (Tab and Arrow keys)."
            )));
            sequence.push(steps.check("each control shows a visible focus indicator"));
            if let Some(tool) = tool {
                sequence.push(TestStep::action(format!("Inspect the {feature} controls with {tool}.")));
            }
            sequence.push(steps.check("each control exposes a label and role"));
            format!("Keyboard Navigation and Focus Indicators ({name})")
        } else {
            if let Some(tool) = tool {
                sequence.push(TestStep::action(format!("Enable {tool}.")));
            }
            sequence.push(TestStep::action(format!("Open {feature} using touch gestures.")));
            sequence.push(steps.check("each control can be reached by touch"));
            match tool {
                Some(tool) => {
                    sequence.push(steps.check(&format!("{tool} announces each control")));
                    format!("Touch Access with {tool} ({name})")
                }
                None => format!("Touch Access ({name})"),
            }
        };
        sequence.push(steps.teardown());

        Scenario {
            area: ACCESSIBILITY_AREA.to_string(),
            phrase,
            steps: sequence,
            objective: format!("Verify that <b>{feature}</b> is accessible on <b>{name}</b>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use qa_model::EntryPoint;

    fn facts(feature: &str, surface: Option<&str>) -> FactBase {
        let mut facts = FactBase::new(feature);
        if let Some(surface) = surface {
            facts
                .entry_points
                .push(EntryPoint::new(format!("{surface} → {feature}"), surface, "AC1"));
        }
        facts
    }

    fn titles(drafts: &[TestCaseDraft]) -> Vec<&str> {
        drafts.iter().map(|d| d.title.as_str()).collect()
    }

    fn assert_shape(drafts: &[TestCaseDraft]) {
        for draft in drafts {
            assert_eq!(
                draft.steps.first().map(|s| s.action.as_str()),
                Some("PRE-REQ: ENV QuickDraw application is installed")
            );
            let last = draft.steps.last().unwrap();
            assert_eq!(last.action, "Close/Exit the ENV QuickDraw application");
            assert!(last.expected.is_empty());
            assert!(draft
                .steps
                .iter()
                .all(|s| s.is_verification() == !s.expected.is_empty()));
        }
    }

    #[test]
    fn mode_layout_edge_cases() {
        let mut seq = IdSequence::default();
        let drafts = ScenarioSynthesizer::default().edge_cases(
            StoryType::ModeLayout,
            &facts("Full Screen Mode", Some("View Menu")),
            &mut seq,
        );
        assert_eq!(
            titles(&drafts),
            vec![
                "100: Full Screen Mode / View Menu / Repeated toggle enter and exit mode",
                "105: Full Screen Mode / View Menu / Active project preserved when entering mode",
            ]
        );
        assert_shape(&drafts);
    }

    #[test]
    fn edge_cases_never_invent_entry_points() {
        let mut seq = IdSequence::default();
        let drafts = ScenarioSynthesizer::default().edge_cases(
            StoryType::Dialog,
            &facts("Insert Shape", None),
            &mut seq,
        );
        assert_eq!(drafts.len(), 2);
        assert!(drafts
            .iter()
            .all(|d| d.area() == Some(qa_model::UNSPECIFIED_ENTRY_POINT)));
    }

    #[test]
    fn recorded_negative_suppresses_template() {
        let mut f = facts("Rotate", Some("Tools Menu"));
        f.negative_scenarios.insert("no_selection".to_string());
        let mut seq = IdSequence::default();
        let drafts = ScenarioSynthesizer::default().edge_cases(StoryType::Tool, &f, &mut seq);
        assert_eq!(
            titles(&drafts),
            vec!["100: Rotate / Tools Menu / Tool applied to multiple selected objects"]
        );
    }

    #[test]
    fn measurement_expansions_need_evidence() {
        let synth = ScenarioSynthesizer::default();
        let mut seq = IdSequence::default();

        let bare = facts("Diameter", Some("Dimensions Menu"));
        let drafts = synth.edge_cases(StoryType::Measurement, &bare, &mut seq);
        // no object type, no unit mention: only no-selection and duplicates
        assert_eq!(drafts.len(), 2);

        let mut rich = bare.clone();
        rich.object_types.insert("ellipse".to_string());
        rich.evidence_bullets
            .insert("AC2".to_string(), "Value shown in metric units".to_string());
        let drafts = synth.edge_cases(StoryType::Measurement, &rich, &mut seq);
        assert_eq!(drafts.len(), 4);

        let wrong = drafts.iter().find(|d| d.title.contains("Wrong object type")).unwrap();
        assert!(wrong.steps.iter().any(|s| s.action == "Create a new drawing with a rectangle."));

        let units = drafts.iter().find(|d| d.area() == Some(UNITS_AREA)).unwrap();
        assert!(units.objective.contains("Imperial and Metric"));
        assert_shape(&drafts);
    }

    #[test]
    fn help_stories_have_no_edge_cases() {
        let mut seq = IdSequence::default();
        let drafts = ScenarioSynthesizer::default().edge_cases(
            StoryType::HelpDocumentation,
            &facts("User Manual", Some("Help Menu")),
            &mut seq,
        );
        assert!(drafts.is_empty());
        assert_eq!(seq.next_edge_id(), "100");
    }

    #[test]
    fn accessibility_per_platform() {
        let mut f = facts("Full Screen Mode", Some("View Menu"));
        f.platform_requirements.push(PlatformRequirement {
            platform: "Windows 11".into(),
            interaction_model: "mouse/keyboard".into(),
            accessibility_tool: None,
            evidence_ref: "AC3".into(),
        });
        f.platform_requirements.push(PlatformRequirement {
            platform: "iPad".into(),
            interaction_model: "touch".into(),
            accessibility_tool: Some("VoiceOver".into()),
            evidence_ref: "AC4".into(),
        });

        let mut seq = IdSequence::default();
        seq.next_id();
        let drafts = ScenarioSynthesizer::default().accessibility(StoryType::ModeLayout, &f, &mut seq);

        assert_eq!(
            titles(&drafts),
            vec![
                "005: Full Screen Mode / Accessibility / Keyboard Navigation and Focus Indicators (Windows 11)",
                "010: Full Screen Mode / Accessibility / Touch Access with VoiceOver (iPad)",
            ]
        );
        assert_eq!(drafts[1].steps[1].action, "PRE-REQ: VoiceOver is installed");
        assert!(!drafts[0].steps.iter().any(|s| s.action.starts_with("PRE-REQ: V")));
        assert_shape(&drafts);
    }

    #[test]
    fn accessibility_gated_by_story_type() {
        let mut f = facts("Rotate", Some("Tools Menu"));
        f.platform_requirements.push(PlatformRequirement {
            platform: "iPad".into(),
            interaction_model: "touch".into(),
            accessibility_tool: None,
            evidence_ref: "AC2".into(),
        });
        let mut seq = IdSequence::default();
        let synth = ScenarioSynthesizer::default();
        assert!(synth.accessibility(StoryType::Tool, &f, &mut seq).is_empty());

        let drafts = synth.accessibility(StoryType::Menu, &f, &mut seq);
        assert_eq!(
            titles(&drafts),
            vec!["AC1: Rotate / Accessibility / Touch Access (iPad)"]
        );
    }
}
