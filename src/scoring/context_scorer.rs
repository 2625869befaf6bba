use super::{ScoreMap, Scorer, ScoringInput};
use crate::category::Category;

const PROFESSIONAL_PHRASES: [&str; 5] = ["dear", "sincerely", "regards", "best wishes", "thank you"];
const SOCIAL_TERMS: [&str; 5] = ["notification", "friend", "like", "share", "follow"];

/// Structural signal: layout measurements combined with a few literal
/// substring checks on the lowercased text.
pub struct ContextScorer;

impl Default for ContextScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextScorer {
    pub fn new() -> Self {
        Self
    }

    fn present(text: &str, terms: &[&str]) -> usize {
        terms.iter().filter(|term| text.contains(*term)).count()
    }
}

impl Scorer for ContextScorer {
    fn score(&self, input: &ScoringInput<'_>) -> ScoreMap {
        let text = input.lowered_text;
        let features = input.features;
        let mut scores = ScoreMap::default();

        match Self::present(text, &PROFESSIONAL_PHRASES) {
            0 => {}
            1 => scores.add(Category::NotSpam, 0.2),
            _ => scores.add(Category::NotSpam, 0.4),
        }

        if features.exclamation_count > 5 || features.caps_ratio > 0.3 {
            scores.add(Category::Spam, 0.4);
        }

        if features.money_mentions > 0 {
            scores.add(Category::Spam, 0.3);
            scores.add(Category::Promotional, 0.2);
        }

        if features.word_count > 100 && text.contains("unsubscribe") {
            scores.add(Category::Newsletter, 0.5);
        }

        if Self::present(text, &SOCIAL_TERMS) >= 2 {
            scores.add(Category::Social, 0.4);
        }

        log::debug!("Context scores: {:?}", scores);
        scores
    }

    fn name(&self) -> &str {
        "context"
    }

    fn weight(&self) -> f64 {
        0.2
    }
}
