use crate::config::{ScorerKind, ServerConfig};
use crate::utils::error::{DockError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// On-disk configuration. Every table and key is optional; whatever is
/// present overrides the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub manifests: Option<ManifestSection>,
    pub scorer: Option<ScorerSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestSection {
    pub directory: Option<PathBuf>,
    pub plugin_manifest: Option<String>,
    pub api_schema: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorerSection {
    pub kind: Option<ScorerKind>,
    pub endpoint: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DockError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DockError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SCORER_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DockError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply_to(&self, config: &mut ServerConfig) {
        if let Some(server) = &self.server {
            if let Some(host) = &server.host {
                config.host = host.clone();
            }
            if let Some(port) = server.port {
                config.port = port;
            }
        }

        if let Some(manifests) = &self.manifests {
            if let Some(directory) = &manifests.directory {
                config.manifest_dir = directory.clone();
            }
            if let Some(plugin_manifest) = &manifests.plugin_manifest {
                config.plugin_manifest = plugin_manifest.clone();
            }
            if let Some(api_schema) = &manifests.api_schema {
                config.api_schema = api_schema.clone();
            }
        }

        if let Some(scorer) = &self.scorer {
            if let Some(kind) = scorer.kind {
                config.scorer = kind;
            }
            if scorer.endpoint.is_some() {
                config.scorer_endpoint = scorer.endpoint.clone();
            }
            if scorer.timeout_ms.is_some() {
                config.scorer_timeout_ms = scorer.timeout_ms;
            }
        }
    }
}
