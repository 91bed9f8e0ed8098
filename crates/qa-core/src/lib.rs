//! QA Core - Scenario Pipeline
//!
//! Drives one requirement document through evidence extraction,
//! classification, observable extraction, synthesis and grounding
//! validation.
//!
//! # Example
//!
//! ```rust
//! use qa_core::{RequirementInput, ScenarioPipeline};
//! use qa_model::RuleTables;
//!
//! let pipeline = ScenarioPipeline::new(RuleTables::default()).unwrap();
//! let input = RequirementInput::new("Full Screen Mode").with_bullet(
//!     "Select View → Full Screen Mode to enter an immersive view. \
//!      OS-level UI (taskbar, title bar) is hidden.",
//! );
//!
//! let output = pipeline.run(&input).unwrap();
//! assert_eq!(
//!     output.drafts[0].title,
//!     "AC1: Full Screen Mode / View Menu / Enter fullscreen mode"
//! );
//! assert!(output.report.is_valid);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod input;
pub mod pipeline;
pub mod session;

pub use error::{PipelineError, PipelineResult};
pub use input::RequirementInput;
pub use pipeline::ScenarioPipeline;
pub use session::{SynthesisOutput, SynthesisSession};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running the scenario pipeline
    pub use crate::{
        PipelineError, PipelineResult, RequirementInput, ScenarioPipeline, SynthesisOutput,
    };
    pub use qa_model::prelude::*;
}
