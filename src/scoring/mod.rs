pub mod combiner;
pub mod context_scorer;
pub mod keyword_scorer;
pub mod pattern_scorer;

pub use combiner::ScoreCombiner;
pub use context_scorer::ContextScorer;
pub use keyword_scorer::KeywordScorer;
pub use pattern_scorer::PatternScorer;

use crate::category::Category;
use crate::text_features::Features;

/// One real-valued score per category, indexed in declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreMap {
    values: [f64; Category::COUNT],
}

impl ScoreMap {
    pub fn get(&self, category: Category) -> f64 {
        self.values[category.index()]
    }

    pub fn set(&mut self, category: Category, value: f64) {
        self.values[category.index()] = value;
    }

    pub fn add(&mut self, category: Category, delta: f64) {
        self.values[category.index()] += delta;
    }

    pub fn scale(&mut self, category: Category, factor: f64) {
        self.values[category.index()] *= factor;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().zip(self.values.iter().copied())
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Highest-scoring category; the earliest declared category wins ties.
    pub fn top(&self) -> (Category, f64) {
        self.iter()
            .fold((Category::ALL[0], self.values[0]), |best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            })
    }
}

/// Everything a scorer may look at for one analysis.
pub struct ScoringInput<'a> {
    /// Lowercased text with whitespace runs collapsed to single spaces.
    pub clean_text: &'a str,
    /// Lowercased original text.
    pub lowered_text: &'a str,
    pub features: &'a Features,
}

/// Lowercases and collapses whitespace runs to single spaces.
pub fn clean_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// An independent signal source feeding the combiner.
pub trait Scorer: Send + Sync {
    fn score(&self, input: &ScoringInput<'_>) -> ScoreMap;
    fn name(&self) -> &str;
    /// Share of this scorer in the weighted blend.
    fn weight(&self) -> f64;
}
