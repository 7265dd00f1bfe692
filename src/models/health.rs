use crate::clock::ProcessClock;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Value of `status` for a live process.
pub const STATUS_OK: &str = "ok";

/// # Health Status Response
///
/// Represents the liveness of the service at the moment of the request.
/// Built fresh for every health check.
///
/// ## Fields
/// - `status`: `"ok"`
/// - `timestamp`: ISO 8601 (RFC 3339) timestamp of the check, in UTC
/// - `uptime`: seconds since process start, as a float
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00",
///   "uptime": 42.137
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "2024-03-10T15:30:45.123456789+00:00")]
    pub timestamp: String,
    #[schema(example = 42.137)]
    pub uptime: f64,
}

impl HealthStatus {
    pub fn ok(clock: &ProcessClock) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            uptime: clock.uptime_secs(),
        }
    }
}
