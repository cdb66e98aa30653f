use serde::{Deserialize, Serialize};

/// `/dock` 的輸入，`sequence` 原樣取自 query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreRequest {
    pub sequence: Option<String>,
}

impl ScoreRequest {
    /// Pulls `sequence` out of a raw query string.
    ///
    /// The first occurrence wins and no validation is applied. An absent
    /// parameter stays `None`; `sequence=` yields `Some("")`.
    pub fn from_query(query: Option<&str>) -> Self {
        let sequence = query.and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "sequence")
                .map(|(_, value)| value.into_owned())
        });
        Self { sequence }
    }
}

/// The score object. Named `energy` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Energy {
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub sequence: Option<String>,
    pub energy: Energy,
}

impl ScoreResult {
    pub fn new(sequence: Option<String>, energy: Energy) -> Self {
        Self { sequence, energy }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

impl<E: std::error::Error> From<&E> for ErrorResult {
    fn from(err: &E) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// The two discovery documents served under `/.well-known/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    PluginManifest,
    ApiSchema,
}

impl ManifestKind {
    pub const ALL: [ManifestKind; 2] = [ManifestKind::PluginManifest, ManifestKind::ApiSchema];

    pub const fn well_known_path(self) -> &'static str {
        match self {
            ManifestKind::PluginManifest => "/.well-known/ai-plugin.json",
            ManifestKind::ApiSchema => "/.well-known/openapi.yaml",
        }
    }

    pub const fn default_file_name(self) -> &'static str {
        match self {
            ManifestKind::PluginManifest => "ai-plugin.json",
            ManifestKind::ApiSchema => "openapi.yaml",
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            ManifestKind::PluginManifest => "application/json",
            ManifestKind::ApiSchema => "text/yaml",
        }
    }
}
