use crate::handlers::greeting;
use async_graphql::Object;

/// Root query type exposing the service greeting
#[derive(Default)]
pub struct GreetingQuery;

#[Object]
impl GreetingQuery {
    /// The fixed greeting also served at `GET /`
    async fn hello(&self) -> &'static str {
        greeting::hello()
    }
}
