pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{LocalManifestStore, RandomScorer, RemoteScorer};
pub use config::{cli::CliArgs, ScorerKind, ServerConfig};
pub use crate::core::context::AppContext;
pub use crate::core::server::{router, serve, serve_on};
pub use domain::model::{Energy, ErrorResult, ManifestKind, ScoreRequest, ScoreResult};
pub use domain::ports::{ManifestStore, Scorer};
pub use utils::error::{DockError, Result};
