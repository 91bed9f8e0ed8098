//! Story type classification
//!
//! Keyword presence scoring over the whole requirement text. Each category
//! scores the number of its distinct keywords present; repeats of one
//! keyword count once.

use qa_model::{RuleTables, StoryKeywords, StoryType};

/// Scores requirement text against the keyword set of every category
#[derive(Debug, Clone, Default)]
pub struct StoryTypeClassifier {
    keywords: StoryKeywords,
}

impl StoryTypeClassifier {
    /// Create classifier over a keyword table
    #[must_use]
    pub fn new(keywords: StoryKeywords) -> Self {
        Self { keywords }
    }

    /// Create classifier from rule tables
    #[must_use]
    pub fn from_tables(tables: &RuleTables) -> Self {
        Self::new(tables.story_keywords.clone())
    }

    /// Classify a story.
    ///
    /// The highest score wins. Ties go to the category evaluated first in
    /// [`StoryType::EVALUATION_ORDER`]; all-zero scores yield
    /// [`StoryType::Unknown`].
    #[must_use]
    pub fn classify<S: AsRef<str>>(
        &self,
        title: &str,
        bullets: &[S],
        notes: &str,
        description: &str,
    ) -> StoryType {
        let scores = self.scores(title, bullets, notes, description);

        let mut best = StoryType::Unknown;
        let mut best_score = 0;
        for (story_type, score) in &scores {
            if *score > best_score {
                best = *story_type;
                best_score = *score;
            }
        }

        tracing::info!("Classified story as {} (score {})", best, best_score);
        tracing::debug!("Category scores: {:?}", scores);
        best
    }

    /// Score of every category, in evaluation order
    #[must_use]
    pub fn scores<S: AsRef<str>>(
        &self,
        title: &str,
        bullets: &[S],
        notes: &str,
        description: &str,
    ) -> Vec<(StoryType, usize)> {
        let mut text = title.to_lowercase();
        for part in std::iter::once(description)
            .chain(bullets.iter().map(AsRef::as_ref))
            .chain(std::iter::once(notes))
            .filter(|p| !p.is_empty())
        {
            text.push(' ');
            text.push_str(&part.to_lowercase());
        }

        StoryType::EVALUATION_ORDER
            .iter()
            .map(|&story_type| {
                let score = self
                    .keywords
                    .get(story_type)
                    .iter()
                    .filter(|kw| text.contains(kw.as_str()))
                    .count();
                (story_type, score)
            })
            .collect()
    }
}
