use super::{ScoreMap, Scorer, ScoringInput};
use crate::category::{Category, CategoryInfo};

/// Raw keyword totals are divided by this before clamping to [0, 1].
const KEYWORD_SCALE: f64 = 20.0;
const PHRASE_BONUS: f64 = 1.5;

/// Lexical signal: weighted keyword occurrence counts per category.
pub struct KeywordScorer;

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordScorer {
    pub fn new() -> Self {
        Self
    }

    fn category_total(category: Category, clean_text: &str) -> f64 {
        let weight = category.weight();
        let mut total = 0.0;

        for keyword in category.keywords() {
            let frequency = clean_text.matches(keyword).count();
            if frequency == 0 {
                continue;
            }
            let bonus = if CategoryInfo::is_phrase(keyword) {
                PHRASE_BONUS
            } else {
                1.0
            };
            total += weight * frequency as f64 * bonus;
        }

        total
    }
}

impl Scorer for KeywordScorer {
    fn score(&self, input: &ScoringInput<'_>) -> ScoreMap {
        let mut scores = ScoreMap::default();
        for category in Category::ALL {
            let raw = Self::category_total(category, input.clean_text);
            scores.set(category, (raw / KEYWORD_SCALE).min(1.0));
        }
        log::debug!("Keyword scores: {:?}", scores);
        scores
    }

    fn name(&self) -> &str {
        "keyword"
    }

    fn weight(&self) -> f64 {
        0.4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::clean_text;
    use crate::text_features::Features;

    fn score(text: &str) -> ScoreMap {
        let clean = clean_text(text);
        let features = Features::default();
        KeywordScorer::new().score(&ScoringInput {
            clean_text: &clean,
            lowered_text: &clean,
            features: &features,
        })
    }

    #[test]
    fn test_single_keyword_uses_category_weight() {
        // lottery: 3.0 * 1 / 20
        let scores = score("The lottery results are in");
        assert!((scores.get(Category::Spam) - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_phrase_bonus_and_substring_counts() {
        // "act now" (3.0 * 1.5) and "now" is not a keyword; "act now" twice
        let scores = score("ACT  NOW, act now");
        assert!((scores.get(Category::Spam) - 9.0 / 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_scores_are_clamped() {
        let text = "free money cash winner lottery prize claim bonus ".repeat(5);
        let scores = score(&text);
        assert_eq!(scores.get(Category::Spam), 1.0);
    }

    #[test]
    fn test_no_keywords_scores_zero() {
        let scores = score("xyzzy plugh");
        assert_eq!(scores.total(), 0.0);
    }
}
