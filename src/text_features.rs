use crate::error::ClassifierResult;
use crate::patterns::{compile_named, PatternKind};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Structural measurements of one email body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub char_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_word_length: f64,
    pub exclamation_count: usize,
    pub question_count: usize,
    /// Uppercase characters over all characters.
    pub caps_ratio: f64,
    pub url_count: usize,
    pub email_addresses: usize,
    pub phone_numbers: usize,
    pub money_mentions: usize,
}

pub struct FeatureExtractor {
    sentence_break: Regex,
    url: Regex,
    email_address: Regex,
    phone_number: Regex,
    money_amount: Regex,
}

impl FeatureExtractor {
    pub fn new() -> ClassifierResult<Self> {
        Ok(Self {
            sentence_break: compile_named("sentence_break", r"[.!?]+")?,
            url: compile_named("url", r"https?://\S+|www\.\S+")?,
            email_address: compile_named(
                "email_address",
                r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
            )?,
            phone_number: compile_named("phone_number", r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b")?,
            money_amount: compile_named(
                PatternKind::MoneyAmounts.name(),
                PatternKind::MoneyAmounts.source(),
            )?,
        })
    }

    /// Measures the raw, un-normalized text. Empty input yields zeroes.
    pub fn extract(&self, text: &str) -> Features {
        let words: Vec<&str> = text.split_whitespace().collect();
        let char_count = text.chars().count();
        let letters_in_words: usize = words.iter().map(|word| word.chars().count()).sum();
        let uppercase = text.chars().filter(|c| c.is_uppercase()).count();

        let sentence_count = self
            .sentence_break
            .split(text)
            .filter(|fragment| !fragment.trim().is_empty())
            .count();

        Features {
            char_count,
            word_count: words.len(),
            sentence_count,
            avg_word_length: letters_in_words as f64 / words.len().max(1) as f64,
            exclamation_count: text.matches('!').count(),
            question_count: text.matches('?').count(),
            caps_ratio: uppercase as f64 / char_count.max(1) as f64,
            url_count: self.url.find_iter(text).count(),
            email_addresses: self.email_address.find_iter(text).count(),
            phone_numbers: self.phone_number.find_iter(text).count(),
            money_mentions: self.money_amount.find_iter(text).count(),
        }
    }
}
