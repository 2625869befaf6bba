use crate::error::ClassifierResult;
use crate::patterns::{compile_named, PatternKind, PatternSet};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

const EXCESSIVE_PUNCTUATION_OVER: usize = 5;
const MULTIPLE_URLS_OVER: usize = 2;
/// Scattered exclamation marks count as "multiple" from this many on.
const MULTIPLE_EXCLAMATIONS_MIN: usize = 3;

/// A human-readable warning signal found in the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Indicator {
    MoneyAmount,
    UrgencyWords,
    ExcessiveCaps,
    MultipleExclamations,
    SuspiciousLinks,
    ExcessivePunctuation,
    MultipleUrls,
}

impl Indicator {
    pub fn label(self) -> &'static str {
        match self {
            Indicator::MoneyAmount => "Money Amount",
            Indicator::UrgencyWords => "Urgency Words",
            Indicator::ExcessiveCaps => "Excessive Caps",
            Indicator::MultipleExclamations => "Multiple Exclamations",
            Indicator::SuspiciousLinks => "Suspicious Links",
            Indicator::ExcessivePunctuation => "Excessive Punctuation",
            Indicator::MultipleUrls => "Multiple URLs",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Indicator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

pub struct IndicatorFinder {
    folded: PatternSet,
    caps_words: Regex,
    linked_url: Regex,
}

impl IndicatorFinder {
    pub fn new() -> ClassifierResult<Self> {
        Ok(Self {
            folded: PatternSet::case_insensitive()?,
            // Caps detection is the one scan that must see the original casing.
            caps_words: compile_named(
                PatternKind::CapsWords.name(),
                PatternKind::CapsWords.source(),
            )?,
            linked_url: compile_named("linked_url", r"https?://\S+")?,
        })
    }

    pub fn find(&self, text: &str) -> BTreeSet<Indicator> {
        let mut found = BTreeSet::new();

        let scans = [
            (PatternKind::MoneyAmounts, Indicator::MoneyAmount),
            (PatternKind::Urgency, Indicator::UrgencyWords),
            (PatternKind::SuspiciousPhrases, Indicator::SuspiciousLinks),
        ];
        for (kind, indicator) in scans {
            if self.folded.is_match(kind, text) {
                found.insert(indicator);
            }
        }

        if self.caps_words.is_match(text) {
            found.insert(Indicator::ExcessiveCaps);
        }

        let exclamations = text.matches('!').count();
        if self.folded.is_match(PatternKind::MultipleExclamation, text)
            || exclamations >= MULTIPLE_EXCLAMATIONS_MIN
        {
            found.insert(Indicator::MultipleExclamations);
        }
        if exclamations > EXCESSIVE_PUNCTUATION_OVER {
            found.insert(Indicator::ExcessivePunctuation);
        }

        if self.linked_url.find_iter(text).count() > MULTIPLE_URLS_OVER {
            found.insert(Indicator::MultipleUrls);
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(text: &str) -> BTreeSet<Indicator> {
        IndicatorFinder::new().unwrap().find(text)
    }

    #[test]
    fn test_scan_is_case_insensitive() {
        let found = find("Final Notice: CLICK HERE to claim $250");
        assert!(found.contains(&Indicator::UrgencyWords));
        assert!(found.contains(&Indicator::SuspiciousLinks));
        assert!(found.contains(&Indicator::MoneyAmount));
        assert!(found.contains(&Indicator::ExcessiveCaps));
    }

    #[test]
    fn test_caps_requires_real_capitals() {
        assert!(!find("a perfectly ordinary sentence").contains(&Indicator::ExcessiveCaps));
        assert!(find("this is AMAZING").contains(&Indicator::ExcessiveCaps));
    }

    #[test]
    fn test_exclamation_tiers() {
        assert!(find("wow!").is_empty());
        assert!(find("wow!! great").contains(&Indicator::MultipleExclamations));
        assert!(find("one! two! three!").contains(&Indicator::MultipleExclamations));

        let loud = find("a! b! c! d! e! f!");
        assert!(loud.contains(&Indicator::ExcessivePunctuation));

        let five = find("a! b! c! d! e!");
        assert!(!five.contains(&Indicator::ExcessivePunctuation));
    }

    #[test]
    fn test_multiple_urls_counts_linked_urls_only() {
        let three = "http://a.example https://b.example http://c.example";
        assert!(find(three).contains(&Indicator::MultipleUrls));
        let two = "http://a.example https://b.example www.c.example";
        assert!(!find(two).contains(&Indicator::MultipleUrls));
    }

    #[test]
    fn test_labels_serialize_as_strings() {
        let found = find("hurry!!");
        let json = serde_json::to_string(&found).unwrap();
        assert_eq!(json, r#"["Urgency Words","Multiple Exclamations"]"#);
    }
}
