//! Testing utilities for the QA scenario workspace
//!
//! Sample requirement documents and tracing setup shared by integration
//! tests.

#![allow(missing_docs)]

use qa_core::{RequirementInput, ScenarioPipeline};
use qa_model::RuleTables;
use tracing_subscriber::EnvFilter;

pub const FULLSCREEN_BULLET: &str = "Select View → Full Screen Mode to enter an immersive view. \
                                     OS-level UI (taskbar, title bar) is hidden.";

/// Install a test subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

pub fn setup_test_pipeline() -> ScenarioPipeline {
    ScenarioPipeline::new(RuleTables::default()).unwrap()
}

pub fn fullscreen_story() -> RequirementInput {
    RequirementInput::new("Full Screen Mode")
        .with_story_id("272265")
        .with_bullets([
            FULLSCREEN_BULLET,
            "Press ESC to exit fullscreen mode and restore the previous layout.",
            "Landscape presentation layout is out of scope.",
            "Supported on Windows 11 with keyboard navigation.",
        ])
}

pub fn rotate_tool_story() -> RequirementInput {
    RequirementInput::new("As a designer, I want a Rotate Tool so that I can angle shapes")
        .with_description("Location: Tools → Rotate")
        .with_bullets([
            "User can rotate the object by dragging the rotation handle.",
            "Tool remains active until another tool is selected.",
            "Undo reverts the last rotation.",
        ])
}

pub fn diameter_story() -> RequirementInput {
    RequirementInput::new("Diameter Measurement")
        .with_bullets([
            "Select Dimensions → Diameter to measure an ellipse.",
            "Diameter measurement shows a line and a label with the value.",
            "Values are displayed in metric units.",
        ])
        .with_notes("- Verify on iPad with VoiceOver\n- No selection shows a hint")
}

/// Requirement text naming no whitelisted container and no location marker
pub fn ungrounded_story() -> RequirementInput {
    RequirementInput::new("Grid Snapping")
        .with_bullets([
            "User can enable grid snapping.",
            "Snapped objects align to the nearest grid line.",
        ])
}
