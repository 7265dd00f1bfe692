use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `utoipa` annotations on the REST
/// handlers.
///
/// # Endpoints
/// - Greeting: `GET /`
/// - Health Check: `GET /health`
///
/// # Schemas
/// - `HealthStatus`: Service liveness payload
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::greeting::hello,
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::models::health::HealthStatus
        )
    ),
    tags(
        (name = "Greeting", description = "Service greeting"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "Greeting and liveness API, with a GraphQL mirror at /graphql",
        title = "Hello Service API",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_both_endpoints() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn test_openapi_includes_health_schema() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components should be generated");

        assert!(components.schemas.contains_key("HealthStatus"));
    }
}
