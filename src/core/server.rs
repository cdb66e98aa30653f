use crate::config::ServerConfig;
use crate::core::context::AppContext;
use crate::core::handlers;
use crate::domain::model::ManifestKind;
use crate::utils::error::{DockError, Result};
use axum::{routing::get, Router};
use std::future::Future;
use tokio::net::TcpListener;

/// Build the Axum router
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        // Discovery documents
        .route(
            ManifestKind::PluginManifest.well_known_path(),
            get(handlers::plugin_manifest),
        )
        .route(
            ManifestKind::ApiSchema.well_known_path(),
            get(handlers::api_schema),
        )
        // Scoring
        .route("/dock", get(handlers::dock))
        .with_state(ctx)
}

/// Binds `host:port` from the config and serves until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let ctx = AppContext::from_config(config)?;
    let addr = config.bind_addr();

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| DockError::BindError {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!("🌐 Listening on http://{}", addr);
    tracing::info!("🧪 Scorer: {}", ctx.scorer().name());

    serve_on(listener, ctx, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, ctx: AppContext, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(ctx))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown requested");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{LocalManifestStore, RandomScorer};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let ctx = AppContext::new(
            Arc::new(RandomScorer::new()),
            Arc::new(LocalManifestStore::new("/nonexistent/manifests")),
        );
        router(ctx)
    }

    #[tokio::test]
    async fn test_dock_route() {
        let response = test_router()
            .oneshot(Request::builder().uri("/dock?sequence=ABC").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = test_router()
            .oneshot(Request::builder().uri("/score").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_manifest_dir() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/.well-known/ai-plugin.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
