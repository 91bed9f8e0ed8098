//! Scenario pipeline
//!
//! Runs the stages in order for one requirement document:
//!
//! ```text
//! input → EvidenceExtractor → FactBase
//!       → StoryTypeClassifier → StoryType
//!       → per bullet: ObservableExtractor → ScenarioSynthesizer → draft
//!       → expansions → GroundingValidator → SynthesisOutput
//! ```
//!
//! The pipeline holds only immutable configuration and compiled patterns;
//! each run owns a fresh [`SynthesisSession`].

use crate::error::PipelineResult;
use crate::input::RequirementInput;
use crate::session::{SynthesisOutput, SynthesisSession};
use qa_evidence::{split_notes, EvidenceExtractor, StoryTypeClassifier};
use qa_grounding::GroundingValidator;
use qa_model::{RuleTables, SequenceConfig};
use qa_observable::ObservableExtractor;
use qa_synthesis::{IdSequence, ScenarioSynthesizer};

/// Evidence-grounded scenario pipeline
#[derive(Debug)]
pub struct ScenarioPipeline {
    tables: RuleTables,
    sequence: SequenceConfig,
    evidence: EvidenceExtractor,
    classifier: StoryTypeClassifier,
    observables: ObservableExtractor,
    synthesizer: ScenarioSynthesizer,
    validator: GroundingValidator,
}

impl ScenarioPipeline {
    /// Create pipeline from rule tables
    ///
    /// # Errors
    /// Returns [`crate::PipelineError::Config`] when the tables fail
    /// validation or a pattern built from them does not compile.
    pub fn new(tables: RuleTables) -> PipelineResult<Self> {
        tables.validate()?;
        Ok(Self {
            evidence: EvidenceExtractor::new(&tables)?,
            classifier: StoryTypeClassifier::from_tables(&tables),
            observables: ObservableExtractor::new(&tables),
            synthesizer: ScenarioSynthesizer::new(&tables),
            validator: GroundingValidator::new(&tables)?,
            sequence: SequenceConfig::default(),
            tables,
        })
    }

    /// Create pipeline from TOML rule tables
    ///
    /// # Errors
    /// Returns [`crate::PipelineError::Config`] for invalid TOML or tables.
    pub fn from_toml_str(text: &str) -> PipelineResult<Self> {
        Self::new(RuleTables::from_toml_str(text)?)
    }

    /// With id sequence settings
    ///
    /// # Errors
    /// Returns [`crate::PipelineError::Config`] for a sequence that cannot
    /// produce increasing ids.
    pub fn with_sequence(mut self, sequence: SequenceConfig) -> PipelineResult<Self> {
        sequence.validate()?;
        self.sequence = sequence;
        Ok(self)
    }

    /// Rule tables in use
    #[must_use]
    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    /// Observable extractor, for registering extra action matchers
    pub fn observables_mut(&mut self) -> &mut ObservableExtractor {
        &mut self.observables
    }

    /// Extract facts and classify without drafting
    ///
    /// # Errors
    /// Returns [`crate::PipelineError::InvalidInput`] for a blank title.
    pub fn session(&self, input: &RequirementInput) -> PipelineResult<SynthesisSession> {
        input.validate()?;
        tracing::info!("Processing requirement: {}", input.title);

        let facts = self.evidence.build(
            &input.title,
            &input.description,
            &input.bullets,
            input.notes.as_deref(),
        );
        tracing::debug!("{}", facts.summary());

        let notes = input
            .notes
            .as_deref()
            .map(|n| split_notes(n).join(" "))
            .unwrap_or_default();
        let story_type =
            self.classifier
                .classify(&input.title, &input.bullets, &notes, &input.description);

        let mut ids = IdSequence::new(self.sequence.clone())?;
        if let Some(story_id) = &input.story_id {
            ids = ids.with_prefix(story_id.as_str());
        }

        Ok(SynthesisSession::new(facts, story_type, ids))
    }

    /// Run every stage for one document
    ///
    /// # Errors
    /// Returns [`crate::PipelineError::InvalidInput`] for a blank title.
    /// Validation failures are reported in the output, not as errors.
    pub fn run(&self, input: &RequirementInput) -> PipelineResult<SynthesisOutput> {
        let mut session = self.session(input)?;

        for bullet in &input.bullets {
            session.draft_bullet(bullet, &self.tables, &self.observables, &self.synthesizer);
        }
        session.expand(&self.synthesizer);

        let report = self.validator.validate(session.facts(), session.drafts());
        let output = session.finish(report);
        tracing::info!(
            "Generated {} drafts ({} cancelled bullets), validation {}",
            output.drafts.len(),
            output.cancelled.len(),
            if output.report.is_valid { "passed" } else { "failed" }
        );
        Ok(output)
    }
}
