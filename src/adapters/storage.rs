use crate::domain::model::ManifestKind;
use crate::domain::ports::ManifestStore;
use crate::utils::error::{DockError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Serves the discovery documents from files in one directory.
///
/// Files are read on every call, nothing is cached.
#[derive(Debug, Clone)]
pub struct LocalManifestStore {
    base_path: PathBuf,
    plugin_manifest: String,
    api_schema: String,
}

impl LocalManifestStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            plugin_manifest: ManifestKind::PluginManifest.default_file_name().to_string(),
            api_schema: ManifestKind::ApiSchema.default_file_name().to_string(),
        }
    }

    pub fn with_file_names(
        mut self,
        plugin_manifest: impl Into<String>,
        api_schema: impl Into<String>,
    ) -> Self {
        self.plugin_manifest = plugin_manifest.into();
        self.api_schema = api_schema.into();
        self
    }

    pub fn path_for(&self, kind: ManifestKind) -> PathBuf {
        let file_name = match kind {
            ManifestKind::PluginManifest => &self.plugin_manifest,
            ManifestKind::ApiSchema => &self.api_schema,
        };
        self.base_path.join(file_name)
    }
}

#[async_trait]
impl ManifestStore for LocalManifestStore {
    async fn read(&self, kind: ManifestKind) -> Result<Vec<u8>> {
        let full_path = self.path_for(kind);
        tracing::debug!("Reading {:?} from {}", kind, full_path.display());

        match tokio::fs::read(&full_path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(DockError::NotFound {
                path: full_path.display().to_string(),
            }),
            Err(e) => Err(DockError::IoError(e)),
        }
    }

    fn location(&self, kind: ManifestKind) -> String {
        self.path_for(kind).display().to_string()
    }
}
