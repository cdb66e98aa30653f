use crate::domain::model::{Energy, ManifestKind};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Computes a score for a sequence.
///
/// Implementations own any validation of the input. The HTTP layer passes the
/// extracted value through untouched, including `None` when the parameter was
/// absent.
#[async_trait]
pub trait Scorer: Send + Sync {
    async fn score(&self, sequence: Option<&str>) -> Result<Energy>;

    fn name(&self) -> &str;
}

/// Read access to the discovery documents.
#[async_trait]
pub trait ManifestStore: Send + Sync {
    async fn read(&self, kind: ManifestKind) -> Result<Vec<u8>>;

    /// Human readable location, used in logs and preflight output.
    fn location(&self, kind: ManifestKind) -> String;
}
