use thiserror::Error;

/// Failures while building the classifier's static tables.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("pattern '{name}' failed to compile: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Rejections raised by the request-handling boundary before the core runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("No data provided")]
    NoData,
    #[error("Email content cannot be empty")]
    EmptyContent,
    #[error("Email content too short for meaningful analysis")]
    TooShort,
    #[error("Invalid category")]
    InvalidCategory(String),
}

impl ServiceError {
    /// HTTP-style status code the transport should answer with.
    pub fn status(&self) -> u16 {
        400
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

pub type ClassifierResult<T> = Result<T, ClassifierError>;
