use super::shutdown::{ShutdownCoordinator, coordinated_shutdown};
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::security::security_headers;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Assemble the application router.
///
/// - OpenAPI UIs: `/swagger-ui`, `/redoc`, `/rapidoc`, `/scalar`, with the
///   document served at `/api-docs/openapi.json`
/// - `apis` nested under `/api`
/// - `root` merged as-is (landing, diagnostics, health)
/// - JSON 404 and 405 fallbacks, request tracing, security headers, `cors`, compression
///
/// State must already be applied to both routers.
///
/// ```ignore
/// let router = create_router::<ApiDoc>(
///     domain_content::router(service),
///     api::root_routes(state),
///     create_permissive_cors_layer(),
/// );
/// ```
pub fn create_router<T>(apis: Router, root: Router, cors: CorsLayer) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .merge(root)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new())
}

/// Bind, serve until SIGINT/SIGTERM, then run `cleanup` under `shutdown_timeout`.
///
/// ```ignore
/// let cleanup = async move { drop(client) };
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    serve_with_cleanup(
        listener,
        router,
        ShutdownCoordinator::default(),
        shutdown_timeout,
        cleanup,
    )
    .await
}

async fn serve_with_cleanup<F>(
    listener: TcpListener,
    router: Router,
    coordinator: ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let shutdown_handle = coordinator.clone();
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        shutdown_handle.wait_for_signal().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinated_shutdown(coordinator))
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    cleanup_handle.await.ok();

    serve_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::create_permissive_cors_layer;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct EmptyDoc;

    fn router() -> Router {
        create_router::<EmptyDoc>(
            Router::new().route("/items", get(|| async { "[]" })),
            Router::new().route("/", get(|| async { "root" })),
            create_permissive_cors_layer(),
        )
    }

    async fn get_path(router: Router, uri: &str) -> axum::response::Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_api_routes_are_nested_and_root_is_merged() {
        assert_eq!(get_path(router(), "/api/items").await.status(), StatusCode::OK);
        assert_eq!(get_path(router(), "/").await.status(), StatusCode::OK);
        assert_eq!(get_path(router(), "/items").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_fallback_is_json_not_found() {
        let response = get_path(router(), "/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_wrong_method_is_json_method_not_allowed() {
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "METHOD_NOT_ALLOWED");
        assert_eq!(body["code"], 1010);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let response = get_path(router(), "/api-docs/openapi.json").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cleanup_runs_after_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let coordinator = ShutdownCoordinator::default();
        let cleaned = Arc::new(AtomicBool::new(false));
        let flag = cleaned.clone();

        let server = tokio::spawn(serve_with_cleanup(
            listener,
            router(),
            coordinator.clone(),
            Duration::from_secs(1),
            async move { flag.store(true, Ordering::SeqCst) },
        ));

        tokio::time::sleep(Duration::from_millis(50)).await;
        coordinator.shutdown();

        tokio::time::timeout(Duration::from_secs(2), server)
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        assert!(cleaned.load(Ordering::SeqCst));
    }
}
