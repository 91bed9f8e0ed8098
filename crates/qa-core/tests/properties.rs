//! Properties that hold for any requirement text

use proptest::prelude::*;
use qa_core::RequirementInput;
use qa_model::{RuleTables, StoryType};
use qa_test_utils::setup_test_pipeline;

fn bullet() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Select View → Full Screen Mode to enter an immersive view.".to_string()),
        Just("User can rotate the ellipse by dragging the rotation handle.".to_string()),
        Just("Undo reverts the last change.".to_string()),
        Just("Diameter measurement shows a line and a label.".to_string()),
        Just("Open the Layers Panel to rename a layer.".to_string()),
        Just("Export to PDF is out of scope.".to_string()),
        Just("Supported on iPad with VoiceOver.".to_string()),
        "[A-Za-z ]{0,40}",
    ]
}

fn input() -> impl Strategy<Value = RequirementInput> {
    (
        "[A-Z][a-z]{2,10}( [A-Z][a-z]{2,10})?",
        prop::collection::vec(bullet(), 0..6),
    )
        .prop_map(|(title, bullets)| RequirementInput::new(title).with_bullets(bullets))
}

proptest! {
    #[test]
    fn runs_are_deterministic(input in input()) {
        let pipeline = setup_test_pipeline();
        let first = pipeline.run(&input).unwrap();
        let second = pipeline.run(&input).unwrap();
        prop_assert_eq!(first.drafts, second.drafts);
        prop_assert_eq!(first.report, second.report);
        prop_assert_eq!(first.story_type, second.story_type);
    }

    #[test]
    fn valid_reports_only_use_grounded_areas(input in input()) {
        let output = setup_test_pipeline().run(&input).unwrap();
        if output.report.is_valid {
            let tables = RuleTables::default();
            for draft in &output.drafts {
                let area = draft.area().unwrap_or_default();
                prop_assert!(tables.is_generic_area(area) || output.facts.has_surface(area));
            }
        }
    }

    #[test]
    fn no_invented_entry_point(input in input()) {
        let output = setup_test_pipeline().run(&input).unwrap();
        if output.facts.entry_points.is_empty() {
            for draft in &output.drafts {
                let area = draft.area().unwrap_or_default();
                prop_assert!(
                    area == qa_model::UNSPECIFIED_ENTRY_POINT
                        || RuleTables::default().is_generic_area(area)
                );
            }
        }
    }

    #[test]
    fn ids_are_unique(input in input()) {
        let output = setup_test_pipeline().run(&input).unwrap();
        let mut ids: Vec<_> = output.drafts.iter().map(|d| d.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    #[test]
    fn help_stories_get_no_edge_cases(input in input()) {
        let output = setup_test_pipeline().run(&input).unwrap();
        if output.story_type == StoryType::HelpDocumentation {
            let drafted = input.bullets.len() - output.cancelled.len();
            let platforms = output.facts.platform_requirements.len();
            prop_assert_eq!(output.drafts.len(), drafted + platforms);
        }
    }
}
