//! QA Evidence Layer
//!
//! Turns raw requirement text into the facts and category every later
//! stage depends on.
//!
//! # Components
//!
//! - **EvidenceExtractor**: Pattern-based extraction into a [`FactBase`]
//! - **StoryTypeClassifier**: Keyword presence scoring into a [`StoryType`]
//!
//! # Example
//!
//! ```rust
//! use qa_evidence::{EvidenceExtractor, StoryTypeClassifier};
//! use qa_model::{RuleTables, StoryType};
//!
//! let tables = RuleTables::default();
//! let extractor = EvidenceExtractor::new(&tables).unwrap();
//! let bullets = ["Select View → Full Screen Mode to enter an immersive view."];
//!
//! let facts = extractor.build("Full Screen Mode", "", &bullets, None);
//! assert_eq!(facts.primary_entry_point(), Some("View Menu"));
//!
//! let story = StoryTypeClassifier::from_tables(&tables)
//!     .classify("Full Screen Mode", &bullets, "", "");
//! assert_eq!(story, StoryType::ModeLayout);
//! ```
//!
//! [`FactBase`]: qa_model::FactBase
//! [`StoryType`]: qa_model::StoryType

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod classifier;
pub mod extractor;

pub use classifier::StoryTypeClassifier;
pub use extractor::{feature_name, split_notes, EvidenceExtractor};
