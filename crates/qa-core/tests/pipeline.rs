//! End-to-end pipeline runs over sample requirement documents

use pretty_assertions::assert_eq;
use qa_core::{RequirementInput, ScenarioPipeline, SynthesisOutput};
use qa_model::{RuleTables, SequenceConfig, StoryType, UNSPECIFIED_ENTRY_POINT};
use qa_test_utils::{
    diameter_story, fullscreen_story, init_tracing, rotate_tool_story, setup_test_pipeline,
    ungrounded_story, FULLSCREEN_BULLET,
};

fn run(input: &RequirementInput) -> SynthesisOutput {
    init_tracing();
    setup_test_pipeline().run(input).unwrap()
}

fn titles(output: &SynthesisOutput) -> Vec<&str> {
    output.drafts.iter().map(|d| d.title.as_str()).collect()
}

#[test]
fn fullscreen_story_end_to_end() {
    let output = run(&fullscreen_story());

    assert_eq!(output.story_type, StoryType::ModeLayout);
    assert_eq!(output.facts.primary_entry_point(), Some("View Menu"));
    assert_eq!(
        output.drafts[0].title,
        "272265-AC1: Full Screen Mode / View Menu / Enter fullscreen mode"
    );
    assert_eq!(
        output.drafts[1].title,
        "272265-005: Full Screen Mode / View Menu / Exit fullscreen mode"
    );
    assert!(output.report.is_valid, "{:?}", output.report.violations);
}

#[test]
fn cancelled_bullet_consumes_no_id() {
    let output = run(&fullscreen_story());

    assert_eq!(
        output.cancelled,
        vec!["Landscape presentation layout is out of scope."]
    );
    let ids: Vec<_> = output.drafts.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "272265-AC1",
            "272265-005",
            "272265-010",
            "272265-100",
            "272265-105",
            "272265-015",
        ]
    );
}

#[test]
fn out_of_scope_items_never_drafted() {
    let output = run(&fullscreen_story());

    assert!(output.facts.is_out_of_scope("landscape mode"));
    for draft in &output.drafts {
        assert!(
            draft.texts().all(|t| !t.to_lowercase().contains("landscape")),
            "{} mentions landscape",
            draft.id
        );
    }
}

#[test]
fn accessibility_draft_per_platform() {
    let output = run(&fullscreen_story());
    let access = output.draft("272265-015").unwrap();

    assert_eq!(
        access.title,
        "272265-015: Full Screen Mode / Accessibility / \
         Keyboard Navigation and Focus Indicators (Windows 11)"
    );
    assert!(access.steps[0].action.starts_with("PRE-REQ:"));
}

#[test]
fn primary_outcome_is_verified() {
    let output = run(&RequirementInput::new("Full Screen Mode").with_bullet(FULLSCREEN_BULLET));
    let draft = &output.drafts[0];

    assert!(draft
        .steps
        .iter()
        .any(|s| s.action == "Verify OS-level UI (taskbar, title bar) is hidden."));
    assert!(draft
        .steps
        .iter()
        .any(|s| s.action == "Open the View menu."));
}

#[test]
fn ungrounded_story_uses_sentinel_and_fails_validation() {
    let output = run(&ungrounded_story());

    assert!(output.facts.entry_points.is_empty());
    assert!(!output.report.is_valid);
    for draft in &output.drafts {
        assert_eq!(draft.area(), Some(UNSPECIFIED_ENTRY_POINT));
        let expected = format!(
            "{}: Title area '{UNSPECIFIED_ENTRY_POINT}' is not grounded in evidence. \
             Available surfaces: None",
            draft.id
        );
        assert!(
            output.report.violations.contains(&expected),
            "missing violation for {}",
            draft.id
        );
    }
}

#[test]
fn rotate_tool_story_drafts() {
    let output = run(&rotate_tool_story());

    assert_eq!(output.story_type, StoryType::Tool);
    assert_eq!(output.facts.primary_entry_point(), Some("Tools"));
    assert_eq!(output.drafts[0].area(), Some("Tools"));

    let remains = output.draft("005").unwrap();
    assert!(remains
        .steps
        .iter()
        .any(|s| s.action == "Verify Tool remains active." && s.expected == "Tool remains active."));

    let undo = output.draft("010").unwrap();
    assert_eq!(undo.area(), Some("Undo/Redo"));
    assert!(undo.steps.iter().any(|s| s.action == "Trigger Undo (Ctrl+Z)."));
    assert!(undo.steps.iter().any(|s| s.action == "Trigger Redo (Ctrl+Y)."));

    assert!(output.drafts.iter().all(|d| d.area() != Some("Accessibility")));
}

#[test]
fn diameter_story_expansions() {
    let output = run(&diameter_story());

    assert_eq!(output.story_type, StoryType::Measurement);
    assert!(!output.facts.has_surface("VoiceOver"));

    let titles = titles(&output);
    assert!(titles
        .iter()
        .any(|t| t.ends_with("/ Accessibility / Touch Access with VoiceOver (iPad)")));
    assert!(titles.iter().any(|t| t.contains("/ Units / ")));
    assert!(titles.iter().any(|t| t.ends_with("/ Wrong object type (rectangle)")));
    // notes already cover the no-selection case
    assert!(titles.iter().all(|t| !t.contains("no selection")));
}

#[test]
fn every_draft_has_setup_and_teardown() {
    for input in [
        fullscreen_story(),
        rotate_tool_story(),
        diameter_story(),
        ungrounded_story(),
    ] {
        let output = run(&input);
        for draft in &output.drafts {
            let first = draft.steps.first().unwrap();
            let last = draft.steps.last().unwrap();
            assert!(first.action.starts_with("PRE-REQ:"), "{}", draft.title);
            assert!(last.action.starts_with("Close/Exit the "), "{}", draft.title);
            assert!(last.expected.is_empty());
            for step in &draft.steps {
                assert_eq!(
                    step.is_verification(),
                    !step.expected.is_empty(),
                    "{}: {}",
                    draft.id,
                    step.action
                );
            }
        }
    }
}

#[test]
fn custom_sequence_settings() {
    let pipeline = ScenarioPipeline::new(RuleTables::default())
        .unwrap()
        .with_sequence(SequenceConfig {
            sentinel_id: "TC1".to_string(),
            start: 10,
            step: 10,
            ..SequenceConfig::default()
        })
        .unwrap();
    let input = RequirementInput::new("Rotate").with_bullets([
        "User can rotate the object.",
        "User can move the object.",
    ]);

    let output = pipeline.run(&input).unwrap();
    assert_eq!(output.drafts[0].id, "TC1");
    assert_eq!(output.drafts[1].id, "010");
}

#[test]
fn configured_forbidden_phrase_is_reported() {
    let tables = RuleTables::default().with_forbidden_phrases(vec!["taskbar".to_string()]);
    let pipeline = ScenarioPipeline::new(tables).unwrap();
    let output = pipeline
        .run(&RequirementInput::new("Full Screen Mode").with_bullet(FULLSCREEN_BULLET))
        .unwrap();

    assert!(!output.report.is_valid);
    assert!(output
        .report
        .violations
        .iter()
        .any(|v| v.starts_with("AC1: Step ") && v.ends_with("action contains forbidden word: 'taskbar'")));
}

#[test]
fn output_serializes_to_json() {
    let output = run(&fullscreen_story());
    let value = serde_json::to_value(&output).unwrap();

    assert_eq!(value["story_type"], "mode_layout");
    assert_eq!(value["report"]["is_valid"], true);
    assert_eq!(value["drafts"][0]["id"], "272265-AC1");
    assert!(value["drafts"][0]["steps"].is_array());
}
