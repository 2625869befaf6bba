use crate::category::Category;
use crate::text_features::Features;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        f.write_str(label)
    }
}

/// How the risk tier is derived from a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskPolicy {
    /// Counts high-risk signals from the category and the structural features.
    #[default]
    Signals,
    /// Per-category confidence cut-offs.
    Thresholds,
}

/// Confidence percentages at which a category escalates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    pub high: f64,
    pub medium: f64,
}

impl RiskThresholds {
    /// Unclassified input is held to the spam cut-offs.
    pub fn for_category(category: Option<Category>) -> Self {
        let (high, medium) = match category.unwrap_or(Category::Spam) {
            Category::Spam => (70.0, 40.0),
            Category::Phishing => (60.0, 30.0),
            Category::Promotional => (85.0, 50.0),
            Category::NotSpam => (95.0, 80.0),
            Category::Newsletter => (90.0, 60.0),
            Category::Social => (80.0, 50.0),
        };
        Self { high, medium }
    }
}

pub struct RiskAssessor {
    policy: RiskPolicy,
}

impl Default for RiskAssessor {
    fn default() -> Self {
        Self::new(RiskPolicy::default())
    }
}

impl RiskAssessor {
    pub fn new(policy: RiskPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RiskPolicy {
        self.policy
    }

    /// `confidence` is the winning category's share on the 0-100 scale.
    pub fn assess(
        &self,
        category: Option<Category>,
        confidence: f64,
        features: &Features,
    ) -> RiskLevel {
        match self.policy {
            RiskPolicy::Thresholds => Self::by_thresholds(category, confidence),
            RiskPolicy::Signals => Self::by_signals(category, confidence, features),
        }
    }

    fn by_thresholds(category: Option<Category>, confidence: f64) -> RiskLevel {
        let thresholds = RiskThresholds::for_category(category);
        if confidence >= thresholds.high {
            RiskLevel::High
        } else if confidence >= thresholds.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    fn by_signals(category: Option<Category>, confidence: f64, features: &Features) -> RiskLevel {
        let hostile = matches!(category, Some(Category::Spam | Category::Phishing));

        let high_signals = [
            hostile,
            features.money_mentions > 0,
            features.exclamation_count > 8,
            features.caps_ratio > 0.5,
        ];
        if count(&high_signals) >= 2 || (hostile && confidence > 70.0) {
            return RiskLevel::High;
        }

        let medium_signals = [
            category == Some(Category::Promotional),
            features.url_count > 3,
            features.exclamation_count > 4,
        ];
        if count(&medium_signals) >= 2 || confidence > 60.0 {
            return RiskLevel::Medium;
        }

        RiskLevel::Low
    }
}

fn count(signals: &[bool]) -> usize {
    signals.iter().filter(|fired| **fired).count()
}
