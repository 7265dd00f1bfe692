use crate::handlers::health;
use crate::models::health::HealthStatus;
use async_graphql::{Context, Object, Result};

/// GraphQL representation of service health status
///
/// Mirrors the REST health response for GraphQL clients.
///
/// # Fields
/// - `status`: `"ok"` while the process is live
/// - `timestamp`: ISO-8601 timestamp of the check
/// - `uptime`: seconds since process start
#[derive(Debug)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    pub uptime: f64,
}

impl From<HealthStatus> for Health {
    fn from(response: HealthStatus) -> Self {
        Self {
            status: response.status,
            timestamp: response.timestamp,
            uptime: response.uptime,
        }
    }
}

#[Object]
impl Health {
    /// Service liveness indicator, always `"ok"`
    async fn status(&self) -> &str {
        &self.status
    }

    /// ISO-8601 timestamp of the check, in UTC
    async fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Seconds elapsed since the process started
    async fn uptime(&self) -> f64 {
        self.uptime
    }
}

/// Root query type for health-related GraphQL operations
#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Checks service health status
    ///
    /// # Errors
    /// Never fails; the `Result` return keeps resolver signatures uniform.
    async fn health(&self, _ctx: &Context<'_>) -> Result<Health> {
        Ok(Health::from(health::check()))
    }
}
