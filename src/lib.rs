pub mod category;
pub mod classifier;
pub mod config;
pub mod error;
pub mod indicators;
pub mod patterns;
pub mod risk;
pub mod samples;
pub mod scoring;
pub mod service;
pub mod text_features;

pub use category::Category;
pub use classifier::{AnalysisResult, CategoryScore, Classifier};
pub use config::Config;
pub use error::{ClassifierError, ServiceError};
pub use indicators::Indicator;
pub use risk::{RiskLevel, RiskPolicy};
pub use service::{AnalysisService, AnalyzeResponse};
pub use text_features::Features;
