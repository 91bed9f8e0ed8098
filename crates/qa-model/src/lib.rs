//! QA Scenario Model
//!
//! Shared vocabulary for evidence-grounded test scenario synthesis.
//!
//! # Core Types
//!
//! - **FactBase**: Facts read from a requirement, each traceable to evidence
//! - **StoryType**: Feature category gating which templates may apply
//! - **Observable**: Action/target/outcome triple read from one bullet
//! - **TestCaseDraft**: Generated test case awaiting validation
//! - **RuleTables**: Static configuration shared by every stage
//!
//! # Data Flow
//!
//! ```text
//! Requirement text → FactBase ─┬→ Observable → TestCaseDraft → ValidationReport
//!                  → StoryType ┘
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod draft;
pub mod error;
pub mod fact_base;
pub mod observable;
pub mod story_type;
pub mod tables;

pub use draft::{TestCaseDraft, TestStep, ValidationReport, TITLE_SEPARATOR};
pub use error::{ConfigError, ConfigResult};
pub use fact_base::{
    Control, ControlType, EntryPoint, FactBase, PlatformRequirement, DESCRIPTION_REF,
    UNSPECIFIED_ENTRY_POINT,
};
pub use observable::{Action, Observable};
pub use story_type::{ScenarioTemplate, StoryType};
pub use tables::{RuleTables, SequenceConfig, StoryKeywords};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the scenario model
    pub use crate::draft::{TestCaseDraft, TestStep, ValidationReport};
    pub use crate::fact_base::{EntryPoint, FactBase, UNSPECIFIED_ENTRY_POINT};
    pub use crate::observable::{Action, Observable};
    pub use crate::story_type::{ScenarioTemplate, StoryType};
    pub use crate::tables::{RuleTables, SequenceConfig};
}
