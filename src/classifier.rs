//! Classification pipeline
//!
//! Runs feature extraction, the three independent scorers, the combiner,
//! risk assessment and the indicator scan over one email body.

use crate::category::{Category, UNKNOWN_CATEGORY};
use crate::error::ClassifierResult;
use crate::indicators::{Indicator, IndicatorFinder};
use crate::patterns::PatternSet;
use crate::risk::{RiskAssessor, RiskLevel, RiskPolicy};
use crate::scoring::{
    clean_text, ContextScorer, KeywordScorer, PatternScorer, ScoreCombiner, ScoreMap, Scorer,
    ScoringInput,
};
use crate::text_features::{FeatureExtractor, Features};
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// One row of the per-category breakdown, as a percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub display_name: &'static str,
    pub score: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// `None` only for blank input, serialized as `unknown`.
    #[serde(serialize_with = "serialize_category")]
    pub category: Option<Category>,
    pub display_name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    /// Winning category's share, 0-100 with two decimals.
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub indicators: BTreeSet<Indicator>,
    /// Every category, highest score first.
    pub scores: Vec<CategoryScore>,
    pub features: Option<Features>,
}

fn serialize_category<S: Serializer>(
    value: &Option<Category>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.map_or(UNKNOWN_CATEGORY.id, Category::id))
}

impl AnalysisResult {
    /// The degenerate result for empty or whitespace-only input.
    pub fn unknown() -> Self {
        let info = &UNKNOWN_CATEGORY;
        Self {
            category: None,
            display_name: info.display_name,
            color: info.color,
            icon: info.icon,
            confidence: 0.0,
            risk_level: RiskLevel::Low,
            indicators: BTreeSet::new(),
            scores: Vec::new(),
            features: None,
        }
    }

    pub fn category_id(&self) -> &'static str {
        self.category.map_or(UNKNOWN_CATEGORY.id, Category::id)
    }

    pub fn is_unknown(&self) -> bool {
        self.category.is_none()
    }

    pub fn score_for(&self, category: Category) -> Option<f64> {
        self.scores
            .iter()
            .find(|row| row.category == category)
            .map(|row| row.score)
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// The classification engine.
///
/// All tables are compiled in [`Classifier::new`] and never mutated
/// afterwards, so one instance can be shared by reference across threads.
pub struct Classifier {
    extractor: FeatureExtractor,
    scorers: Vec<Box<dyn Scorer>>,
    combiner: ScoreCombiner,
    risk: RiskAssessor,
    indicators: IndicatorFinder,
    diagnostics: PatternSet,
}

impl Classifier {
    pub fn new() -> ClassifierResult<Self> {
        Self::with_risk_policy(RiskPolicy::default())
    }

    pub fn with_risk_policy(policy: RiskPolicy) -> ClassifierResult<Self> {
        let scorers: Vec<Box<dyn Scorer>> = vec![
            Box::new(KeywordScorer::new()),
            Box::new(PatternScorer::new()?),
            Box::new(ContextScorer::new()),
        ];

        log::info!(
            "Classifier ready: {} categories, {} scorers, {:?} risk policy",
            Category::COUNT,
            scorers.len(),
            policy
        );

        Ok(Self {
            extractor: FeatureExtractor::new()?,
            scorers,
            combiner: ScoreCombiner::new(),
            risk: RiskAssessor::new(policy),
            indicators: IndicatorFinder::new()?,
            diagnostics: PatternSet::new()?,
        })
    }

    pub fn risk_policy(&self) -> RiskPolicy {
        self.risk.policy()
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            log::debug!("Blank input, returning unknown result");
            return AnalysisResult::unknown();
        }

        let clean = clean_text(text);
        let lowered = text.to_lowercase();
        let features = self.extractor.extract(text);

        if log::log_enabled!(log::Level::Debug) {
            let hits: Vec<&str> = self
                .diagnostics
                .hits(&lowered)
                .into_iter()
                .map(|kind| kind.name())
                .collect();
            log::debug!("Pattern hits: {:?}", hits);
        }

        let input = ScoringInput {
            clean_text: &clean,
            lowered_text: &lowered,
            features: &features,
        };
        let signals: Vec<(f64, ScoreMap)> = self
            .scorers
            .iter()
            .map(|scorer| {
                let scores = scorer.score(&input);
                log::debug!(
                    "{} scorer (weight {}): {:?}",
                    scorer.name(),
                    scorer.weight(),
                    scores
                );
                (scorer.weight(), scores)
            })
            .collect();

        let combined = self.combiner.combine(&signals, &features);
        let (category, share) = combined.top();
        let percent = share * 100.0;

        let risk_level = self.risk.assess(Some(category), percent, &features);
        let indicators = self.indicators.find(text);

        log::debug!(
            "Classified as {} ({:.2}%), risk {}, {} indicators",
            category,
            percent,
            risk_level,
            indicators.len()
        );

        let info = category.info();
        AnalysisResult {
            category: Some(category),
            display_name: info.display_name,
            color: info.color,
            icon: info.icon,
            confidence: round_to(percent, 2),
            risk_level,
            indicators,
            scores: Self::breakdown(&combined),
            features: Some(features),
        }
    }

    fn breakdown(combined: &ScoreMap) -> Vec<CategoryScore> {
        let mut rows: Vec<CategoryScore> = combined
            .iter()
            .map(|(category, share)| {
                let info = category.info();
                CategoryScore {
                    category,
                    display_name: info.display_name,
                    score: round_to(share * 100.0, 2),
                    color: info.color,
                }
            })
            .collect();
        // Stable sort keeps declaration order among equal scores.
        rows.sort_by(|a, b| b.score.total_cmp(&a.score));
        rows
    }
}
