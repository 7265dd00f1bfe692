use crate::handlers::health as health_handler;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Returns the liveness of the service with a timestamp and the process
/// uptime.
///
/// ## Response
///
/// - **200 OK**: Service is running
///   - Body: JSON object with `status` ("ok"), `timestamp` in ISO 8601 format
///     and `uptime` in seconds
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
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = crate::models::health::HealthStatus)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(health_handler::check())
}

/// # Route Configuration
///
/// - `GET /health`: Health check endpoint
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}
