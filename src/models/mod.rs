/// # Health Status Response
///
/// Liveness record returned by the health check endpoints.
///
/// ## Fields
/// - `status`: always `"ok"` while the process can answer
/// - `timestamp`: ISO 8601 formatted time of the check
/// - `uptime`: seconds elapsed since process start
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00",
///   "uptime": 42.137
/// }
/// ```
pub mod health;
