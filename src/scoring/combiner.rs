use super::ScoreMap;
use crate::category::Category;
use crate::text_features::Features;

/// When every blended score sits below this, the floor rule fires.
const FLOOR_THRESHOLD: f64 = 0.2;
const FLOOR_NOT_SPAM: f64 = 0.7;

/// Blends weighted scorer outputs into one normalized distribution.
pub struct ScoreCombiner;

impl Default for ScoreCombiner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreCombiner {
    pub fn new() -> Self {
        Self
    }

    /// `signals` pairs each scorer's weight with its output.
    pub fn combine(&self, signals: &[(f64, ScoreMap)], features: &Features) -> ScoreMap {
        let mut combined = ScoreMap::default();
        for category in Category::ALL {
            let blended = signals
                .iter()
                .fold(0.0, |acc, (weight, scores)| acc + scores.get(category) * weight);
            combined.set(category, blended);
        }

        Self::apply_structural_multipliers(&mut combined, features);
        Self::apply_floor(&mut combined);
        Self::normalize(&mut combined);
        combined
    }

    fn apply_structural_multipliers(scores: &mut ScoreMap, features: &Features) {
        if features.word_count < 20 && features.exclamation_count > 3 {
            scores.scale(Category::Spam, 1.5);
        }
        if features.word_count > 50 && features.exclamation_count <= 2 {
            scores.scale(Category::NotSpam, 1.3);
        }
        if features.word_count > 80 {
            scores.scale(Category::Newsletter, 1.2);
        }
    }

    fn apply_floor(scores: &mut ScoreMap) {
        if scores.iter().all(|(_, score)| score < FLOOR_THRESHOLD) {
            log::debug!("All categories below {FLOOR_THRESHOLD}, defaulting to not_spam");
            scores.set(Category::NotSpam, FLOOR_NOT_SPAM);
        }
    }

    fn normalize(scores: &mut ScoreMap) {
        let total = scores.total();
        if total <= 0.0 {
            return;
        }
        for category in Category::ALL {
            scores.set(category, scores.get(category) / total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(Category, f64)]) -> ScoreMap {
        let mut scores = ScoreMap::default();
        for (category, value) in entries {
            scores.set(*category, *value);
        }
        scores
    }

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn test_weighted_blend_is_normalized() {
        let keyword = map(&[(Category::Spam, 1.0), (Category::Promotional, 0.5)]);
        let pattern = map(&[(Category::Spam, 0.5)]);
        let context = map(&[(Category::Promotional, 1.0)]);
        let combined = ScoreCombiner::new().combine(
            &[(0.4, keyword), (0.4, pattern), (0.2, context)],
            &Features::default(),
        );

        // spam 0.6, promotional 0.4
        assert!(approx(combined.get(Category::Spam), 0.6));
        assert!(approx(combined.get(Category::Promotional), 0.4));
        assert!(approx(combined.total(), 1.0));
    }

    #[test]
    fn test_floor_defaults_to_not_spam() {
        let keyword = map(&[(Category::Social, 0.1)]);
        let combined = ScoreCombiner::new().combine(&[(0.4, keyword)], &Features::default());

        // social 0.04 against the forced not_spam 0.7
        assert!(approx(combined.get(Category::NotSpam), 0.7 / 0.74));
        assert!(approx(combined.get(Category::Social), 0.04 / 0.74));
        assert_eq!(combined.top().0, Category::NotSpam);
    }

    #[test]
    fn test_floor_on_silent_input() {
        let combined = ScoreCombiner::new().combine(&[], &Features::default());
        assert!(approx(combined.get(Category::NotSpam), 1.0));
    }

    #[test]
    fn test_short_shouty_text_boosts_spam() {
        let signal = map(&[(Category::Spam, 0.5), (Category::Phishing, 0.5)]);
        let features = Features {
            word_count: 10,
            exclamation_count: 4,
            ..Features::default()
        };
        let combined = ScoreCombiner::new().combine(&[(1.0, signal)], &features);
        assert!(approx(combined.get(Category::Spam), 0.6));
        assert!(approx(combined.get(Category::Phishing), 0.4));
    }

    #[test]
    fn test_long_calm_text_boosts_not_spam_and_newsletter() {
        let signal = map(&[(Category::NotSpam, 0.5), (Category::Newsletter, 0.5)]);
        let features = Features {
            word_count: 90,
            exclamation_count: 2,
            ..Features::default()
        };
        let combined = ScoreCombiner::new().combine(&[(1.0, signal)], &features);
        assert!(approx(combined.get(Category::NotSpam), 0.65 / 1.25));
        assert!(approx(combined.get(Category::Newsletter), 0.6 / 1.25));
    }
}
