//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::{diagnostics, root};

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Esports Committee API",
        version = "1.0.0",
        description = "Events, gallery and team listings for the campus esports committee"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(root::root, diagnostics::test_database),
    components(schemas(root::RootResponse, diagnostics::DiagnosticsResponse)),
    nest(
        (path = "/api", api = domain_content::ApiDoc)
    ),
    tags(
        (name = "Content", description = "Events, gallery and team listings"),
        (name = "System", description = "Landing and diagnostic endpoints")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Esports Committee API");

        let paths: Vec<_> = doc.paths.paths.keys().map(String::as_str).collect();
        for path in ["/", "/test", "/api/events", "/api/gallery", "/api/team"] {
            assert!(paths.contains(&path), "missing {path} in {paths:?}");
        }
    }
}
