//! QA Observable Extraction
//!
//! Reads a single requirement bullet into an action/target/outcome triple.
//!
//! # Components
//!
//! - **ActionRegistry**: Priority-ordered verb matchers resolving the action
//! - **ObservableExtractor**: Target, outcome and constraint rules
//!
//! # Example
//!
//! ```rust
//! use qa_model::{Action, StoryType};
//! use qa_observable::ObservableExtractor;
//!
//! let obs = ObservableExtractor::default().extract(
//!     "Select View → Full Screen Mode to enter an immersive view. \
//!      OS-level UI (taskbar, title bar) is hidden.",
//!     StoryType::ModeLayout,
//! );
//! assert_eq!(obs.action, Action::Enter);
//! assert_eq!(obs.target, "fullscreen mode");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod extractor;
pub mod registry;

mod outcome;
mod target;

pub use extractor::ObservableExtractor;
pub use registry::{default_actions, ActionMatcher, ActionRegistry, VerbRule};
