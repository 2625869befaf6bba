use crate::error::{ClassifierError, ClassifierResult};
use regex::Regex;

/// Named regular expressions shared by the scorers and the indicator scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    MoneyAmounts,
    Percentages,
    Urgency,
    CapsWords,
    MultipleExclamation,
    SuspiciousPhrases,
    BusinessFormal,
    SocialWords,
}

impl PatternKind {
    pub const ALL: [PatternKind; 8] = [
        PatternKind::MoneyAmounts,
        PatternKind::Percentages,
        PatternKind::Urgency,
        PatternKind::CapsWords,
        PatternKind::MultipleExclamation,
        PatternKind::SuspiciousPhrases,
        PatternKind::BusinessFormal,
        PatternKind::SocialWords,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::MoneyAmounts => "money_amounts",
            PatternKind::Percentages => "percentages",
            PatternKind::Urgency => "urgency",
            PatternKind::CapsWords => "caps_words",
            PatternKind::MultipleExclamation => "multiple_exclamation",
            PatternKind::SuspiciousPhrases => "suspicious_phrases",
            PatternKind::BusinessFormal => "business_formal",
            PatternKind::SocialWords => "social_words",
        }
    }

    pub fn source(self) -> &'static str {
        match self {
            PatternKind::MoneyAmounts => r"\$\d{1,3}(?:,\d{3})*(?:\.\d{2})?",
            PatternKind::Percentages => r"\d+%\s*(?:off|discount|save)",
            PatternKind::Urgency => {
                r"\b(?:urgent|immediate|expires?|hurry|act now|limited time|final notice)\b"
            }
            PatternKind::CapsWords => r"\b[A-Z]{4,}\b",
            PatternKind::MultipleExclamation => r"!{2,}",
            PatternKind::SuspiciousPhrases => {
                r"\b(?:click here|act now|limited time|expires today|verify now)\b"
            }
            PatternKind::BusinessFormal => {
                r"\b(?:dear|sincerely|regards|meeting|schedule|attached)\b"
            }
            PatternKind::SocialWords => r"\b(?:like|share|follow|friend|connect|tag)\b",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

pub(crate) fn compile_named(name: &'static str, pattern: &str) -> ClassifierResult<Regex> {
    Regex::new(pattern).map_err(|source| ClassifierError::InvalidPattern { name, source })
}

/// The full pattern table, compiled once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct PatternSet {
    compiled: Vec<Regex>,
}

impl PatternSet {
    /// Compiles every pattern exactly as written.
    pub fn new() -> ClassifierResult<Self> {
        Self::compile(false)
    }

    /// Compiles every pattern with the `(?i)` flag.
    pub fn case_insensitive() -> ClassifierResult<Self> {
        Self::compile(true)
    }

    fn compile(ignore_case: bool) -> ClassifierResult<Self> {
        let compiled = PatternKind::ALL
            .iter()
            .map(|kind| {
                let pattern = if ignore_case {
                    format!("(?i){}", kind.source())
                } else {
                    kind.source().to_string()
                };
                compile_named(kind.name(), &pattern)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { compiled })
    }

    pub fn get(&self, kind: PatternKind) -> &Regex {
        &self.compiled[kind.index()]
    }

    pub fn is_match(&self, kind: PatternKind, text: &str) -> bool {
        self.get(kind).is_match(text)
    }

    pub fn count(&self, kind: PatternKind, text: &str) -> usize {
        self.get(kind).find_iter(text).count()
    }

    /// Every pattern that matches somewhere in `text`, in table order.
    pub fn hits(&self, text: &str) -> Vec<PatternKind> {
        PatternKind::ALL
            .into_iter()
            .filter(|kind| self.is_match(*kind, text))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert!(PatternSet::new().is_ok());
        assert!(PatternSet::case_insensitive().is_ok());
    }

    #[test]
    fn test_money_amounts() {
        let patterns = PatternSet::new().unwrap();
        assert!(patterns.is_match(PatternKind::MoneyAmounts, "you won $1,000,000"));
        assert!(patterns.is_match(PatternKind::MoneyAmounts, "only $19.99 today"));
        assert!(!patterns.is_match(PatternKind::MoneyAmounts, "about 1000 dollars"));
        assert_eq!(patterns.count(PatternKind::MoneyAmounts, "$5 and $50"), 2);
    }

    #[test]
    fn test_urgency_requires_word_boundary() {
        let patterns = PatternSet::new().unwrap();
        assert!(patterns.is_match(PatternKind::Urgency, "this offer expires tonight"));
        assert!(patterns.is_match(PatternKind::Urgency, "final notice"));
        assert!(!patterns.is_match(PatternKind::Urgency, "respond immediately"));
    }

    #[test]
    fn test_caps_words_case_sensitivity() {
        let exact = PatternSet::new().unwrap();
        let folded = PatternSet::case_insensitive().unwrap();
        assert!(exact.is_match(PatternKind::CapsWords, "CONGRATULATIONS winner"));
        assert!(!exact.is_match(PatternKind::CapsWords, "hello world ACT NOW"));
        assert!(folded.is_match(PatternKind::CapsWords, "hello world"));
    }

    #[test]
    fn test_hits_in_table_order() {
        let patterns = PatternSet::new().unwrap();
        let hits = patterns.hits("dear team, 50% off!! like and share");
        assert_eq!(
            hits,
            vec![
                PatternKind::Percentages,
                PatternKind::MultipleExclamation,
                PatternKind::BusinessFormal,
                PatternKind::SocialWords,
            ]
        );
    }
}
