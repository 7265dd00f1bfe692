use crate::clock::{self, ProcessClock};
use crate::models::health::HealthStatus;

/// # Service Health Check
///
/// Liveness probe for the service. Reports `"ok"` along with the time of the
/// check and the seconds elapsed since the process started.
///
/// Uptime is measured against the process-wide clock recorded at startup
/// (see [`clock::init`]).
pub fn check() -> HealthStatus {
    check_with(clock::process())
}

/// Same as [`check`], measured against an explicit clock.
pub fn check_with(clock: &ProcessClock) -> HealthStatus {
    HealthStatus::ok(clock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_check_reports_ok() {
        let health = check();

        assert_eq!(health.status, "ok");
        assert!(health.uptime >= 0.0);
    }

    #[test]
    fn test_check_timestamp_after_process_start() {
        let health = check();

        let timestamp = DateTime::parse_from_rfc3339(&health.timestamp)
            .expect("Timestamp should be a valid RFC 3339 / ISO 8601 date")
            .with_timezone(&Utc);
        assert!(timestamp >= clock::process().started_at());
    }

    #[test]
    fn test_check_uptime_is_monotonic() {
        let first = check();
        sleep(Duration::from_millis(10));
        let second = check();

        assert!(
            second.uptime >= first.uptime,
            "uptime went backwards: {} -> {}",
            first.uptime,
            second.uptime
        );
    }

    #[test]
    fn test_check_five_seconds_after_start() {
        let clock = ProcessClock::started_ago(Duration::from_secs(5));
        let health = check_with(&clock);

        assert_eq!(health.status, "ok");
        assert!(
            (health.uptime - 5.0).abs() < 0.5,
            "expected uptime near 5s, got {}",
            health.uptime
        );
    }
}
