use super::{ScoreMap, Scorer, ScoringInput};
use crate::category::Category;
use crate::error::ClassifierResult;
use crate::patterns::{PatternKind, PatternSet};

const NEWSLETTER_MARKERS: [&str; 3] = ["newsletter", "unsubscribe", "edition"];

/// Pattern signal: fixed deltas per pattern that matches at least once.
/// Totals are left unclamped.
pub struct PatternScorer {
    patterns: PatternSet,
}

impl PatternScorer {
    pub fn new() -> ClassifierResult<Self> {
        Ok(Self {
            patterns: PatternSet::new()?,
        })
    }
}

impl Scorer for PatternScorer {
    fn score(&self, input: &ScoringInput<'_>) -> ScoreMap {
        let text = input.lowered_text;
        let mut scores = ScoreMap::default();

        if self.patterns.is_match(PatternKind::MoneyAmounts, text) {
            scores.add(Category::Spam, 0.4);
            scores.add(Category::Promotional, 0.2);
        }

        if self.patterns.is_match(PatternKind::Urgency, text) {
            scores.add(Category::Spam, 0.5);
            scores.add(Category::Phishing, 0.6);
        }

        if self.patterns.is_match(PatternKind::MultipleExclamation, text) {
            scores.add(Category::Spam, 0.3);
            scores.add(Category::Promotional, 0.2);
        }

        if self.patterns.is_match(PatternKind::BusinessFormal, text) {
            scores.add(Category::NotSpam, 0.4);
            scores.add(Category::Newsletter, 0.2);
        }

        if self.patterns.is_match(PatternKind::SocialWords, text) {
            scores.add(Category::Social, 0.5);
        }

        if NEWSLETTER_MARKERS.iter().any(|marker| text.contains(marker)) {
            scores.add(Category::Newsletter, 0.4);
        }

        log::debug!("Pattern scores: {:?}", scores);
        scores
    }

    fn name(&self) -> &str {
        "pattern"
    }

    fn weight(&self) -> f64 {
        0.4
    }
}
