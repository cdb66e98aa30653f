pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{
    invalid_value, validate_path, validate_positive_number, validate_required_field,
    validate_url, PathRule, Validate,
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    /// Non-physical placeholder, uniform in [-100, 100)
    #[default]
    Random,
    /// Forward to an external HTTP scoring service
    Remote,
}

/// Fully resolved server settings (defaults, then TOML, then CLI flags).
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub manifest_dir: PathBuf,
    pub plugin_manifest: String,
    pub api_schema: String,
    pub scorer: ScorerKind,
    pub scorer_endpoint: Option<String>,
    pub scorer_timeout_ms: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            manifest_dir: PathBuf::from("./manifests"),
            plugin_manifest: "ai-plugin.json".to_string(),
            api_schema: "openapi.yaml".to_string(),
            scorer: ScorerKind::Random,
            scorer_endpoint: None,
            scorer_timeout_ms: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn scorer_timeout(&self) -> Option<Duration> {
        self.scorer_timeout_ms.map(Duration::from_millis)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(invalid_value("host", &self.host, "Host cannot be empty"));
        }
        validate_positive_number("port", self.port, 1)?;
        validate_path(
            "manifest_dir",
            &self.manifest_dir.to_string_lossy(),
            PathRule::Any,
        )?;
        validate_path("plugin_manifest", &self.plugin_manifest, PathRule::FileName)?;
        validate_path("api_schema", &self.api_schema, PathRule::FileName)?;

        if let Some(timeout_ms) = self.scorer_timeout_ms {
            validate_positive_number("scorer_timeout_ms", timeout_ms, 1)?;
        }

        if self.scorer == ScorerKind::Remote {
            let endpoint = validate_required_field("scorer_endpoint", &self.scorer_endpoint)?;
            validate_url("scorer_endpoint", endpoint)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DockError;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.scorer_timeout(), None);
    }

    #[test]
    fn test_remote_scorer_requires_endpoint() {
        let mut config = ServerConfig {
            scorer: ScorerKind::Remote,
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DockError::MissingConfigError { .. })
        ));

        config.scorer_endpoint = Some("ftp://scores.local".to_string());
        assert!(config.validate().is_err());

        config.scorer_endpoint = Some("http://scores.local/score".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        let zero_port = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(zero_port.validate().is_err());

        let zero_timeout = ServerConfig {
            scorer_timeout_ms: Some(0),
            ..ServerConfig::default()
        };
        assert!(zero_timeout.validate().is_err());

        let blank_host = ServerConfig {
            host: "  ".to_string(),
            ..ServerConfig::default()
        };
        assert!(blank_host.validate().is_err());

        let escaping = ServerConfig {
            api_schema: "../openapi.yaml".to_string(),
            ..ServerConfig::default()
        };
        assert!(escaping.validate().is_err());
    }
}
