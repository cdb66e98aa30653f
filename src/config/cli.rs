use crate::config::toml_config::TomlConfig;
use crate::config::{ScorerKind, ServerConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dock-plugin")]
#[command(about = "Serves the dock plugin manifest, its OpenAPI schema and the /dock scoring endpoint")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind (default 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default 8080)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding the plugin manifest and API schema
    #[arg(long)]
    pub manifest_dir: Option<PathBuf>,

    /// File name of the plugin manifest inside the manifest directory
    #[arg(long)]
    pub plugin_manifest: Option<String>,

    /// File name of the API schema inside the manifest directory
    #[arg(long)]
    pub api_schema: Option<String>,

    /// Scorer backend
    #[arg(long, value_enum)]
    pub scorer: Option<ScorerKind>,

    /// Endpoint of the remote scorer
    #[arg(long)]
    pub scorer_endpoint: Option<String>,

    /// Fail a scoring call that takes longer than this many milliseconds
    #[arg(long)]
    pub scorer_timeout_ms: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    /// Check configuration and manifests without starting the server
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// 合併預設值、TOML 檔案與命令列參數（命令列優先）
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let mut config = ServerConfig::default();

        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = &self.manifest_dir {
            config.manifest_dir = dir.clone();
        }
        if let Some(name) = &self.plugin_manifest {
            config.plugin_manifest = name.clone();
        }
        if let Some(name) = &self.api_schema {
            config.api_schema = name.clone();
        }
        if let Some(kind) = self.scorer {
            config.scorer = kind;
        }
        if self.scorer_endpoint.is_some() {
            config.scorer_endpoint = self.scorer_endpoint.clone();
        }
        if self.scorer_timeout_ms.is_some() {
            config.scorer_timeout_ms = self.scorer_timeout_ms;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_flags() {
        let args = CliArgs::parse_from(["dock-plugin"]);
        assert_eq!(args.to_server_config().unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_cli_overrides_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("dock.toml");
        std::fs::write(
            &config_path,
            "[server]\nport = 9000\nhost = \"127.0.0.1\"\n\n[scorer]\ntimeout_ms = 500\n",
        )
        .unwrap();

        let args = CliArgs::parse_from([
            "dock-plugin",
            "--config",
            config_path.to_str().unwrap(),
            "--port",
            "9100",
            "--scorer",
            "remote",
            "--scorer-endpoint",
            "http://localhost:7000/score",
        ]);
        let config = args.to_server_config().unwrap();

        assert_eq!(config.port, 9100);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.scorer, ScorerKind::Remote);
        assert_eq!(config.scorer_timeout_ms, Some(500));
    }

    #[test]
    fn test_missing_config_file() {
        let args = CliArgs::parse_from(["dock-plugin", "--config", "/nonexistent/dock.toml"]);
        assert!(args.to_server_config().is_err());
    }
}
