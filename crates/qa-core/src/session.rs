//! Per-story synthesis session
//!
//! Owns everything that is mutable while one requirement document is
//! processed: the fact base, the story type, the id sequence and the drafts
//! produced so far. Sessions are never shared between documents.

use qa_model::{FactBase, RuleTables, ScenarioTemplate, StoryType, TestCaseDraft, ValidationReport};
use qa_observable::ObservableExtractor;
use qa_synthesis::{IdSequence, ScenarioSynthesizer};
use serde::Serialize;

/// Result of one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisOutput {
    /// Drafts in id order of generation
    pub drafts: Vec<TestCaseDraft>,
    /// Grounding validation of `drafts`
    pub report: ValidationReport,
    /// Story type of the document
    pub story_type: StoryType,
    /// Facts the drafts were built from
    pub facts: FactBase,
    /// Bullets skipped as cancelled
    pub cancelled: Vec<String>,
}

impl SynthesisOutput {
    /// Draft with the given id
    #[must_use]
    pub fn draft(&self, id: &str) -> Option<&TestCaseDraft> {
        self.drafts.iter().find(|d| d.id == id)
    }
}

/// Mutable state of one document's synthesis
#[derive(Debug)]
pub struct SynthesisSession {
    facts: FactBase,
    story_type: StoryType,
    ids: IdSequence,
    drafts: Vec<TestCaseDraft>,
    cancelled: Vec<String>,
}

impl SynthesisSession {
    /// Create session
    #[must_use]
    pub fn new(facts: FactBase, story_type: StoryType, ids: IdSequence) -> Self {
        Self {
            facts,
            story_type,
            ids,
            drafts: Vec::new(),
            cancelled: Vec::new(),
        }
    }

    /// Facts of the document
    #[must_use]
    pub fn facts(&self) -> &FactBase {
        &self.facts
    }

    /// Story type of the document
    #[must_use]
    pub fn story_type(&self) -> StoryType {
        self.story_type
    }

    /// Drafts produced so far
    #[must_use]
    pub fn drafts(&self) -> &[TestCaseDraft] {
        &self.drafts
    }

    /// Draft one bullet.
    ///
    /// Cancelled bullets produce nothing and consume no id. Bullets that
    /// mention undo or redo produce an undo/redo draft when the story type
    /// allows one.
    pub fn draft_bullet(
        &mut self,
        text: &str,
        tables: &RuleTables,
        observables: &ObservableExtractor,
        synthesizer: &ScenarioSynthesizer,
    ) -> Option<&TestCaseDraft> {
        if tables.is_cancelled(text) {
            tracing::info!("Skipping cancelled bullet: {}", text);
            self.cancelled.push(text.to_string());
            return None;
        }

        let observable = observables.extract(text, self.story_type);
        let id = self.ids.next_id();
        let lower = text.to_lowercase();
        let draft = if (lower.contains("undo") || lower.contains("redo"))
            && self.story_type.allows(ScenarioTemplate::UndoRedo)
        {
            synthesizer.undo_redo_draft(id, &observable, &self.facts)
        } else {
            synthesizer.draft(id, &observable, &self.facts)
        };

        tracing::debug!("Drafted {}", draft.title);
        self.drafts.push(draft);
        self.drafts.last()
    }

    /// Append edge-case and accessibility drafts
    pub fn expand(&mut self, synthesizer: &ScenarioSynthesizer) {
        let edge_cases = synthesizer.edge_cases(self.story_type, &self.facts, &mut self.ids);
        let accessibility = synthesizer.accessibility(self.story_type, &self.facts, &mut self.ids);
        tracing::info!(
            "Expanded with {} edge-case and {} accessibility drafts",
            edge_cases.len(),
            accessibility.len()
        );
        self.drafts.extend(edge_cases);
        self.drafts.extend(accessibility);
    }

    /// Close the session with its validation report
    #[must_use]
    pub fn finish(self, report: ValidationReport) -> SynthesisOutput {
        SynthesisOutput {
            drafts: self.drafts,
            report,
            story_type: self.story_type,
            facts: self.facts,
            cancelled: self.cancelled,
        }
    }
}
