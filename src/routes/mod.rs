use actix_web::web;

/// # Greeting Endpoint
///
/// `GET /` returns the fixed service greeting as plain text.
pub mod greeting;

/// # Health Check Endpoint
///
/// Returns the liveness of the service with a timestamp and the process uptime.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2023-10-05T12:34:56.789+00:00",
///   "uptime": 12.5
/// }
/// ```
pub mod health;

/// # GraphQL Endpoints
///
/// GraphQL queries for the greeting and health check, plus the Playground.
pub mod graphql;

/// # API Route Configuration
///
/// ## Mounted Services
/// - Greeting endpoint (see [`greeting::configure_routes`])
/// - Health check endpoint (see [`health::configure_routes`])
/// - GraphQL endpoints (see [`graphql::configure_routes`])
///
/// ## Endpoints
///
/// ```text
/// GET  /            - Service greeting
/// GET  /health      - Service health status
/// POST /graphql     - GraphQL endpoint
/// GET  /playground  - GraphQL Playground
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(greeting::configure_routes)
        .configure(health::configure_routes)
        .configure(graphql::configure_routes);
}
