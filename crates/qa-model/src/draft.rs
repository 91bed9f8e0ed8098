//! Test case drafts and validation reports

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Separator between title segments: `<id>: <feature> / <area> / <scenario>`
pub const TITLE_SEPARATOR: &str = " / ";

/// One ordered test step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestStep {
    /// What the tester does
    pub action: String,
    /// Expected result; empty for every non-verification step
    pub expected: String,
}

impl TestStep {
    /// Non-verification step with an empty expected result
    #[must_use]
    pub fn action(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            expected: String::new(),
        }
    }

    /// Verification step
    #[must_use]
    pub fn verify(action: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            expected: expected.into(),
        }
    }

    /// Whether this is a verification step
    #[must_use]
    pub fn is_verification(&self) -> bool {
        self.action.contains("Verify")
    }
}

/// Generated, not-yet-accepted test case.
///
/// Missing fields deserialize as empty so the validator can inspect
/// partially formed drafts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestCaseDraft {
    /// Draft id, e.g. `AC1`, `272265-005`
    pub id: String,
    /// `<id>: <feature> / <area> / <scenario>`
    pub title: String,
    /// Setup, action, verification, teardown
    pub steps: Vec<TestStep>,
    /// One-sentence objective
    pub objective: String,
}

impl TestCaseDraft {
    /// Area segment of the title, if present
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        self.title.split(TITLE_SEPARATOR).nth(1).map(str::trim)
    }

    /// Every step text and the objective, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.steps
            .iter()
            .flat_map(|s| [s.action.as_str(), s.expected.as_str()])
            .chain(std::iter::once(self.objective.as_str()))
    }
}

/// Outcome of grounding validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when no violation was found
    pub is_valid: bool,
    /// Every problem found, each naming its draft id
    pub violations: Vec<String>,
}

impl ValidationReport {
    /// Build report from accumulated violations
    #[must_use]
    pub fn from_violations(violations: Vec<String>) -> Self {
        Self {
            is_valid: violations.is_empty(),
            violations,
        }
    }

    /// Violations mentioning a draft id
    pub fn violations_for<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.violations
            .iter()
            .map(String::as_str)
            .filter(move |v| v.starts_with(id))
    }

    /// Plain-text report
    #[must_use]
    pub fn render(&self, draft_count: usize) -> String {
        let mut out = String::from("GROUNDING VALIDATION REPORT\n");
        let _ = writeln!(out, "Total test cases: {draft_count}");
        let _ = writeln!(
            out,
            "Validation status: {}",
            if self.is_valid { "PASSED" } else { "FAILED" }
        );
        let _ = writeln!(out, "Total errors: {}", self.violations.len());
        for violation in &self.violations {
            let _ = writeln!(out, "  - {violation}");
        }
        out
    }
}
