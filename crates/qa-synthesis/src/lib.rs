//! QA Scenario Synthesis
//!
//! Turns observables and a fact base into test case drafts.
//!
//! # Components
//!
//! - **TitleBuilder**: `<id>: <feature> / <area> / <scenario>` titles
//! - **StepBuilder**: Prologue, navigation, action, verification, teardown
//! - **ObjectiveBuilder**: One-sentence objectives
//! - **IdSequence**: Sentinel-then-counter draft ids, owned per session
//! - **ScenarioSynthesizer**: Bullet drafts plus undo/redo, edge-case and
//!   accessibility expansions
//!
//! # Example
//!
//! ```rust
//! use qa_model::{Action, EntryPoint, FactBase, Observable};
//! use qa_synthesis::{IdSequence, ScenarioSynthesizer};
//!
//! let mut facts = FactBase::new("Full Screen Mode");
//! facts.entry_points.push(EntryPoint::new("View → Full Screen Mode", "View Menu", "AC1"));
//!
//! let observable = Observable {
//!     action: Action::Enter,
//!     target: "fullscreen mode".to_string(),
//!     outcomes: vec!["toolbar is hidden".to_string()],
//!     constraints: vec![],
//!     requires_object: false,
//!     source_text: String::new(),
//! };
//!
//! let mut ids = IdSequence::default();
//! let draft = ScenarioSynthesizer::default().draft(ids.next_id(), &observable, &facts);
//! assert_eq!(draft.title, "AC1: Full Screen Mode / View Menu / Enter fullscreen mode");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod expansion;
pub mod objective;
pub mod sequence;
pub mod steps;
pub mod synthesizer;
pub mod title;

mod text;

pub use expansion::{ACCESSIBILITY_AREA, UNITS_AREA};
pub use objective::ObjectiveBuilder;
pub use sequence::IdSequence;
pub use steps::{option_name, StepBuilder};
pub use synthesizer::{ScenarioSynthesizer, UNDO_REDO_AREA};
pub use title::{format_title, TitleBuilder};
