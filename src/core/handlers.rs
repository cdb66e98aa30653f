use crate::core::context::AppContext;
use crate::domain::model::{ErrorResult, ManifestKind, ScoreRequest, ScoreResult};
use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};

pub async fn plugin_manifest(State(ctx): State<AppContext>) -> Response {
    serve_manifest(&ctx, ManifestKind::PluginManifest).await
}

pub async fn api_schema(State(ctx): State<AppContext>) -> Response {
    serve_manifest(&ctx, ManifestKind::ApiSchema).await
}

async fn serve_manifest(ctx: &AppContext, kind: ManifestKind) -> Response {
    match ctx.manifests().read(kind).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, kind.content_type())],
            bytes,
        )
            .into_response(),
        Err(e) if e.is_not_found() => {
            tracing::warn!("{} requested but missing: {}", kind.well_known_path(), e);
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
        Err(e) => {
            tracing::error!("❌ Failed to read {}: {}", ctx.manifests().location(kind), e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// `GET /dock?sequence=...`
///
/// Every scorer failure becomes a 400 with `{"error": ...}`; nothing from the
/// scorer can turn into a 500.
pub async fn dock(State(ctx): State<AppContext>, RawQuery(query): RawQuery) -> Response {
    let request = ScoreRequest::from_query(query.as_deref());

    match ctx.score(request.sequence.as_deref()).await {
        Ok(energy) => {
            tracing::debug!(
                "Scored sequence ({} chars) with {}: {}",
                request.sequence.as_deref().map_or(0, str::len),
                ctx.scorer().name(),
                energy.value
            );
            (
                StatusCode::OK,
                Json(ScoreResult::new(request.sequence, energy)),
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!("Scorer {} failed: {}", ctx.scorer().name(), e);
            (StatusCode::BAD_REQUEST, Json(ErrorResult::from(&e))).into_response()
        }
    }
}
