//! QA Grounding Validation
//!
//! Rejects drafts that reference anything the evidence does not support.
//! Validation is pure: it reads a fact base and drafts and returns every
//! violation as data. Whether a failed report blocks delivery is the
//! caller's policy.
//!
//! # Example
//!
//! ```rust
//! use qa_grounding::GroundingValidator;
//! use qa_model::{FactBase, RuleTables, TestCaseDraft};
//!
//! let mut facts = FactBase::new("Feature");
//! facts.surfaces.insert("Tools Menu".to_string());
//!
//! let draft = TestCaseDraft {
//!     id: "005".to_string(),
//!     title: "005: Feature / Edit Menu / Some scenario".to_string(),
//!     ..TestCaseDraft::default()
//! };
//!
//! let report = GroundingValidator::new(&RuleTables::default())
//!     .unwrap()
//!     .validate(&facts, &[draft]);
//! assert!(!report.is_valid);
//! assert!(report.violations[0].contains("'Edit Menu'"));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod validator;

pub use validator::GroundingValidator;
