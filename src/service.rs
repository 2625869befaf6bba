//! Request-handling boundary
//!
//! Validates raw input before it reaches the classifier and shapes results
//! into the JSON payloads a transport layer sends back.

use crate::category::Category;
use crate::classifier::{AnalysisResult, Classifier};
use crate::config::AnalysisConfig;
use crate::error::ServiceError;
use crate::samples::sample_for;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub email_content: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Success { success: bool, result: AnalysisResult },
    Failure { error: String },
}

impl AnalyzeResponse {
    pub fn status(&self) -> u16 {
        match self {
            AnalyzeResponse::Success { .. } => 200,
            AnalyzeResponse::Failure { .. } => 400,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Result<AnalysisResult, ServiceError>> for AnalyzeResponse {
    fn from(outcome: Result<AnalysisResult, ServiceError>) -> Self {
        match outcome {
            Ok(result) => AnalyzeResponse::Success {
                success: true,
                result,
            },
            Err(e) => AnalyzeResponse::Failure {
                error: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleResponse {
    pub category: Category,
    pub content: &'static str,
}

/// Thin front for a shared [`Classifier`].
pub struct AnalysisService<'a> {
    classifier: &'a Classifier,
    min_content_length: usize,
}

impl<'a> AnalysisService<'a> {
    pub fn new(classifier: &'a Classifier, config: &AnalysisConfig) -> Self {
        Self {
            classifier,
            min_content_length: config.min_content_length,
        }
    }

    /// Handles a `{"email_content": "..."}` JSON body.
    pub fn analyze_payload(&self, payload: &str) -> AnalyzeResponse {
        let outcome = serde_json::from_str::<AnalyzeRequest>(payload)
            .map_err(|e| {
                log::debug!("Rejecting unparseable request body: {e}");
                ServiceError::NoData
            })
            .and_then(|request| self.analyze_request(&request));
        outcome.into()
    }

    pub fn analyze_request(
        &self,
        request: &AnalyzeRequest,
    ) -> Result<AnalysisResult, ServiceError> {
        let content = request.email_content.as_deref().unwrap_or("");
        self.analyze_content(content)
    }

    pub fn analyze_content(&self, content: &str) -> Result<AnalysisResult, ServiceError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ServiceError::EmptyContent);
        }
        if content.chars().count() < self.min_content_length {
            return Err(ServiceError::TooShort);
        }

        let result = self.classifier.analyze(content);
        log::info!(
            "Analyzed {} chars: {} ({:.2}%, {} risk)",
            content.chars().count(),
            result.category_id(),
            result.confidence,
            result.risk_level
        );
        Ok(result)
    }

    pub fn sample(&self, category: &str) -> Result<SampleResponse, ServiceError> {
        let category: Category = category
            .parse()
            .map_err(|_| ServiceError::InvalidCategory(category.to_string()))?;
        Ok(SampleResponse {
            category,
            content: sample_for(category),
        })
    }
}
