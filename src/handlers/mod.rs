/// # Greeting
///
/// Returns the fixed greeting served at the service root.
pub mod greeting;

/// # Service Health Check
///
/// Builds the liveness record for the running process.
///
/// ## Result
///
/// A [`HealthStatus`] containing:
/// - `status`: `"ok"`
/// - `timestamp`: ISO 8601 timestamp of the check
/// - `uptime`: seconds since the process started
///
/// [`HealthStatus`]: crate::models::health::HealthStatus
pub mod health;
