//! Grounding validation
//!
//! Checks each draft against the fact base it was built from:
//! - the title area is a generic area or a grounded surface
//! - no step text or objective uses a forbidden phrase
//! - no step text or objective mentions an out-of-scope item
//!
//! Every violation is collected; nothing short-circuits.

use qa_model::{ConfigError, ConfigResult, FactBase, RuleTables, TestCaseDraft, ValidationReport};
use regex::Regex;
use std::fmt::Write as _;

/// Forbidden phrase with its word-bounded, case-insensitive pattern
#[derive(Debug, Clone)]
struct ForbiddenPhrase {
    phrase: String,
    pattern: Regex,
}

/// Validates drafts against a fact base
#[derive(Debug, Clone)]
pub struct GroundingValidator {
    forbidden: Vec<ForbiddenPhrase>,
    generic_areas: Vec<String>,
}

impl GroundingValidator {
    /// Create validator from rule tables
    ///
    /// # Errors
    /// Returns [`ConfigError::Pattern`] when a forbidden phrase cannot be
    /// compiled into a pattern.
    pub fn new(tables: &RuleTables) -> ConfigResult<Self> {
        let forbidden = tables
            .forbidden_phrases
            .iter()
            .map(|phrase| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(phrase.trim()));
                Regex::new(&pattern)
                    .map(|pattern| ForbiddenPhrase {
                        phrase: phrase.trim().to_string(),
                        pattern,
                    })
                    .map_err(|e| ConfigError::pattern("forbidden_phrases", e.to_string()))
            })
            .collect::<ConfigResult<Vec<_>>>()?;

        Ok(Self {
            forbidden,
            generic_areas: tables.generic_areas.clone(),
        })
    }

    /// Validate every draft; pure and total
    #[must_use]
    pub fn validate(&self, facts: &FactBase, drafts: &[TestCaseDraft]) -> ValidationReport {
        let mut violations = Vec::new();
        for draft in drafts {
            self.check_area(facts, draft, &mut violations);
            self.check_text(facts, draft, &mut violations);
        }

        let report = ValidationReport::from_violations(violations);
        if report.is_valid {
            tracing::info!("Grounding validation passed for {} drafts", drafts.len());
        } else {
            tracing::warn!(
                "Grounding validation failed: {} violations across {} drafts",
                report.violations.len(),
                drafts.len()
            );
        }
        report
    }

    fn check_area(&self, facts: &FactBase, draft: &TestCaseDraft, out: &mut Vec<String>) {
        let id = &draft.id;
        let Some(area) = draft.area() else {
            out.push(format!("{id}: Title has no area segment: '{}'", draft.title));
            return;
        };

        if self.generic_areas.iter().any(|a| a == area) || facts.has_surface(area) {
            return;
        }

        let known = facts.known_surfaces();
        let available = if known.is_empty() {
            "None".to_string()
        } else {
            known.join(", ")
        };
        let mut message = format!(
            "{id}: Title area '{area}' is not grounded in evidence. Available surfaces: {available}"
        );
        let suggestions = suggest(area, &known);
        if !suggestions.is_empty() {
            let _ = write!(message, " (Did you mean: {}?)", suggestions.join(", "));
        }
        out.push(message);
    }

    fn check_text(&self, facts: &FactBase, draft: &TestCaseDraft, out: &mut Vec<String>) {
        let id = &draft.id;
        for (n, step) in draft.steps.iter().enumerate() {
            let n = n + 1;
            for (field, text) in [("action", &step.action), ("expected result", &step.expected)] {
                for phrase in self.forbidden_in(text) {
                    out.push(format!(
                        "{id}: Step {n} {field} contains forbidden word: '{phrase}'"
                    ));
                }
                for item in out_of_scope_in(facts, text) {
                    out.push(format!(
                        "{id}: Step {n} {field} mentions out-of-scope item: '{item}'"
                    ));
                }
            }
        }

        for phrase in self.forbidden_in(&draft.objective) {
            out.push(format!("{id}: Objective contains forbidden word: '{phrase}'"));
        }
        for item in out_of_scope_in(facts, &draft.objective) {
            out.push(format!("{id}: Objective mentions out-of-scope item: '{item}'"));
        }
    }

    fn forbidden_in<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.forbidden
            .iter()
            .filter(move |f| f.pattern.is_match(text))
            .map(|f| f.phrase.as_str())
    }
}

fn out_of_scope_in<'a>(facts: &'a FactBase, text: &str) -> Vec<&'a str> {
    if facts.out_of_scope.is_empty() || text.is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();
    facts
        .out_of_scope
        .iter()
        .filter(|item| lower.contains(&item.to_lowercase()))
        .map(String::as_str)
        .collect()
}

/// Known surfaces related to `area` by substring containment either way
fn suggest<'a>(area: &str, known: &[&'a str]) -> Vec<&'a str> {
    let area = area.trim().to_lowercase();
    if area.is_empty() {
        return Vec::new();
    }
    known
        .iter()
        .filter(|surface| {
            let surface = surface.to_lowercase();
            surface.contains(&area) || area.contains(&surface)
        })
        .copied()
        .collect()
}
