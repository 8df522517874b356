use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// CORS restricted to `allowed_origins`, with credentials.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// CORS accepting any origin, method and header, with credentials.
///
/// Browsers reject `*` together with credentials, so the request's own
/// origin, method and headers are echoed back instead.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    async fn preflight(layer: CorsLayer, origin: &str) -> axum::response::Response {
        Router::new()
            .route("/events", get(|| async { "[]" }))
            .layer(layer)
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/events")
                    .header(header::ORIGIN, origin)
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-client-build")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_permissive_mirrors_origin_with_credentials() {
        let response = preflight(create_permissive_cors_layer(), "https://club.example.edu").await;
        let headers = response.headers();

        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://club.example.edu"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "x-client-build");
    }

    #[tokio::test]
    async fn test_restricted_layer_ignores_unknown_origin() {
        let layer = create_cors_layer(vec![HeaderValue::from_static("https://club.example.edu")]);
        let response = preflight(layer, "https://elsewhere.example.com").await;

        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }
}
