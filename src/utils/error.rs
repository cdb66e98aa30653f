use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 評分器回報的錯誤，訊息原樣回傳給客戶端
    #[error("{0}")]
    ScorerError(String),

    #[error("Scorer timed out after {0:?}")]
    ScorerTimeout(Duration),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid manifest '{path}': {message}")]
    InvalidManifestError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Failed to bind {addr}: {source}")]
    BindError {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Scoring,
    Network,
}

impl DockError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DockError::ConfigError { .. }
            | DockError::InvalidConfigValueError { .. }
            | DockError::MissingConfigError { .. }
            | DockError::InvalidManifestError { .. } => ErrorCategory::Configuration,
            DockError::NotFound { .. } | DockError::IoError(_) => ErrorCategory::Io,
            DockError::ScorerError(_) | DockError::ScorerTimeout(_) => ErrorCategory::Scoring,
            DockError::HttpError(_) | DockError::BindError { .. } => ErrorCategory::Network,
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            DockError::NotFound { .. } => true,
            DockError::IoError(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("Could not read a required file: {}", self),
            ErrorCategory::Scoring => format!("Scoring failed: {}", self),
            ErrorCategory::Network => format!("Network problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the command line flags and the TOML config file",
            ErrorCategory::Io => "Make sure --manifest-dir points at a directory holding both manifest files",
            ErrorCategory::Scoring => "Check that the scorer backend is reachable and responding",
            ErrorCategory::Network => "Check that the port is free and the host address is valid",
        }
    }

    /// 給 CLI 使用的退出碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Io => 2,
            ErrorCategory::Scoring => 2,
            ErrorCategory::Network => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DockError>;
