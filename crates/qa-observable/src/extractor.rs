//! Observable extraction
//!
//! Reads one bullet into an [`Observable`]: the action comes from the
//! [`ActionRegistry`], the target and outcomes from ordered text rules.

use crate::outcome::{self, OutcomeContext};
use crate::registry::ActionRegistry;
use crate::target;
use once_cell::sync::Lazy;
use qa_model::{Observable, RuleTables, StoryType};
use regex::Regex;

static PHASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bphase\s+(\d+)").unwrap());

const REQUIRES_OBJECT_SIGNALS: [&str; 11] = [
    "selected",
    "existing",
    "current",
    "active",
    "for ellipse",
    "for circle",
    "for shape",
    "for object",
    "to object",
    "on object",
    "with object",
];

const CONSTRAINT_SIGNALS: [(&str, &str); 6] = [
    ("windows", "on Windows"),
    ("ipad", "on iPad"),
    ("android", "on Android"),
    ("ellipse", "for ellipse"),
    ("circle", "for circle"),
    ("selected", "for selected object"),
];

/// Extracts observables from requirement bullets
#[derive(Debug)]
pub struct ObservableExtractor {
    registry: ActionRegistry,
    plural_nouns: Vec<String>,
}

impl Default for ObservableExtractor {
    fn default() -> Self {
        Self::new(&RuleTables::default())
    }
}

impl ObservableExtractor {
    /// Create extractor with the built-in action families
    #[must_use]
    pub fn new(tables: &RuleTables) -> Self {
        Self {
            registry: ActionRegistry::default(),
            plural_nouns: tables.plural_nouns.clone(),
        }
    }

    /// With a custom action registry
    #[must_use]
    pub fn with_registry(mut self, registry: ActionRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Action registry, for registering extra matchers
    pub fn registry_mut(&mut self) -> &mut ActionRegistry {
        &mut self.registry
    }

    /// Extract the observable of one bullet.
    ///
    /// Deterministic: the same text and story type always yield the same
    /// observable. Outcomes are never empty.
    #[must_use]
    pub fn extract(&self, text: &str, story_type: StoryType) -> Observable {
        let lower = text.to_lowercase();
        let action = self.registry.resolve(&lower);
        let target = target::resolve(text, &lower, action, story_type);
        let outcomes = outcome::derive(&OutcomeContext {
            text,
            lower: &lower,
            action,
            target: &target,
            plural_nouns: &self.plural_nouns,
        });
        let requires_object = matches!(story_type, StoryType::Measurement | StoryType::Tool)
            || REQUIRES_OBJECT_SIGNALS.iter().any(|s| lower.contains(s));

        tracing::debug!(
            "Observable: {} '{}' -> {} outcome(s)",
            action,
            target,
            outcomes.len()
        );

        Observable {
            action,
            target,
            outcomes,
            constraints: constraints(&lower),
            requires_object,
            source_text: text.to_string(),
        }
    }

    /// Whether an outcome reads as plural
    #[must_use]
    pub fn is_plural(&self, outcome: &str) -> bool {
        outcome::is_plural(outcome, &self.plural_nouns)
    }
}

fn constraints(lower: &str) -> Vec<String> {
    let mut out: Vec<String> = CONSTRAINT_SIGNALS
        .iter()
        .filter(|(signal, _)| lower.contains(signal))
        .map(|(_, constraint)| (*constraint).to_string())
        .collect();
    if let Some(caps) = PHASE.captures(lower) {
        out.push(format!("for phase {}", &caps[1]));
    }
    out
}
