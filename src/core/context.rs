use crate::adapters::{LocalManifestStore, RandomScorer, RemoteScorer};
use crate::config::{ScorerKind, ServerConfig};
use crate::domain::model::Energy;
use crate::domain::ports::{ManifestStore, Scorer};
use crate::utils::error::{DockError, Result};
use crate::utils::validation::validate_required_field;
use std::sync::Arc;
use std::time::Duration;

/// Everything a request handler needs, built once and shared read-only.
#[derive(Clone)]
pub struct AppContext {
    scorer: Arc<dyn Scorer>,
    manifests: Arc<dyn ManifestStore>,
    scorer_timeout: Option<Duration>,
}

impl AppContext {
    pub fn new(scorer: Arc<dyn Scorer>, manifests: Arc<dyn ManifestStore>) -> Self {
        Self {
            scorer,
            manifests,
            scorer_timeout: None,
        }
    }

    pub fn with_scorer_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.scorer_timeout = timeout;
        self
    }

    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let scorer: Arc<dyn Scorer> = match config.scorer {
            ScorerKind::Random => Arc::new(RandomScorer::new()),
            ScorerKind::Remote => {
                let endpoint = validate_required_field("scorer_endpoint", &config.scorer_endpoint)?;
                Arc::new(RemoteScorer::new(endpoint.clone(), config.scorer_timeout())?)
            }
        };

        let manifests = LocalManifestStore::new(config.manifest_dir.clone())
            .with_file_names(config.plugin_manifest.clone(), config.api_schema.clone());

        Ok(Self::new(scorer, Arc::new(manifests)).with_scorer_timeout(config.scorer_timeout()))
    }

    pub fn scorer(&self) -> &dyn Scorer {
        self.scorer.as_ref()
    }

    pub fn manifests(&self) -> &dyn ManifestStore {
        self.manifests.as_ref()
    }

    pub fn scorer_timeout(&self) -> Option<Duration> {
        self.scorer_timeout
    }

    /// Runs the scorer, bounded by the configured timeout if there is one.
    ///
    /// A NaN or infinite score is a scorer failure; it cannot be written as a
    /// JSON number.
    pub async fn score(&self, sequence: Option<&str>) -> Result<Energy> {
        let energy = match self.scorer_timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.scorer.score(sequence))
                .await
                .map_err(|_| DockError::ScorerTimeout(timeout))??,
            None => self.scorer.score(sequence).await?,
        };

        if !energy.value.is_finite() {
            return Err(DockError::ScorerError(format!(
                "Scorer {} returned a non-finite value",
                self.scorer.name()
            )));
        }
        Ok(energy)
    }
}
