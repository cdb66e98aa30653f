use crate::domain::model::ManifestKind;
use crate::domain::ports::ManifestStore;
use crate::utils::error::{DockError, Result};

#[derive(Debug, Clone)]
pub struct ManifestStatus {
    pub kind: ManifestKind,
    pub location: String,
    pub size_bytes: usize,
}

/// 啟動前檢查：兩份 manifest 都要讀得到，且格式正確
pub async fn check_manifests(store: &dyn ManifestStore) -> Result<Vec<ManifestStatus>> {
    let mut statuses = Vec::with_capacity(ManifestKind::ALL.len());

    for kind in ManifestKind::ALL {
        let location = store.location(kind);
        let bytes = store.read(kind).await?;
        parse_manifest(kind, &bytes).map_err(|message| DockError::InvalidManifestError {
            path: location.clone(),
            message,
        })?;

        tracing::debug!("✅ {} ok ({} bytes)", location, bytes.len());
        statuses.push(ManifestStatus {
            kind,
            location,
            size_bytes: bytes.len(),
        });
    }

    Ok(statuses)
}

fn parse_manifest(kind: ManifestKind, bytes: &[u8]) -> std::result::Result<(), String> {
    match kind {
        ManifestKind::PluginManifest => {
            let value: serde_json::Value =
                serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
            if !value.is_object() {
                return Err("plugin manifest must be a JSON object".to_string());
            }
        }
        ManifestKind::ApiSchema => {
            let value: serde_yaml::Value =
                serde_yaml::from_slice(bytes).map_err(|e| e.to_string())?;
            if !value.is_mapping() {
                return Err("API schema must be a YAML mapping".to_string());
            }
        }
    }
    Ok(())
}
