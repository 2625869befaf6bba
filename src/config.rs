use crate::risk::RiskPolicy;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "/etc/mail-classifier.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Shorter input is rejected before it reaches the classifier.
    #[serde(default = "default_min_content_length")]
    pub min_content_length: usize,
    #[serde(default)]
    pub risk_policy: RiskPolicy,
}

fn default_min_content_length() -> usize {
    10
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_content_length: default_min_content_length(),
            risk_policy: RiskPolicy::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            logging: Some(LoggingConfig {
                level: "info".to_string(),
            }),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Configured log level, if one is set and recognised.
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        let level = self.logging.as_ref()?.level.parse();
        match level {
            Ok(level) => Some(level),
            Err(_) => {
                log::warn!("Ignoring unrecognised log level in configuration");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("mail-classifier-{}-{}", std::process::id(), name))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analysis.min_content_length, 10);
        assert_eq!(config.analysis.risk_policy, RiskPolicy::Signals);
        assert_eq!(config.log_level(), Some(log::LevelFilter::Info));
    }

    #[test]
    fn test_file_round_trip() {
        let path = temp_path("round-trip.yaml");
        let mut config = Config::default();
        config.analysis.risk_policy = RiskPolicy::Thresholds;
        config.analysis.min_content_length = 25;

        config.to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("analysis:\n  risk_policy: thresholds\n").unwrap();
        assert_eq!(config.analysis.risk_policy, RiskPolicy::Thresholds);
        assert_eq!(config.analysis.min_content_length, 10);
        assert!(config.logging.is_none());
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = temp_path("malformed.yaml");
        std::fs::write(&path, "analysis: [unterminated").unwrap();
        let result = Config::from_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Config::from_file(&temp_path("does-not-exist.yaml")).is_err());
    }

    #[test]
    fn test_unrecognised_level_is_ignored() {
        let config = Config {
            logging: Some(LoggingConfig {
                level: "chatty".to_string(),
            }),
            ..Config::default()
        };
        assert_eq!(config.log_level(), None);
    }
}
