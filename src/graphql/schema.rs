use super::greeting::GreetingQuery;
use super::health::HealthQuery;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

/// Root query combining every query type the service exposes.
#[derive(MergedObject, Default)]
pub struct QueryRoot(GreetingQuery, HealthQuery);

/// Main GraphQL Schema Definition
///
/// # Type Parameters
/// - `QueryRoot`: greeting and health queries
/// - `EmptyMutation`: the service has no mutations
/// - `EmptySubscription`: the service has no subscriptions
pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Creates the GraphQL schema served at `/graphql`.
///
/// # Example
///
/// ```rust,no_run
/// use hello_service::graphql::schema::create_schema;
///
/// let schema = create_schema();
/// ```
pub fn create_schema() -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        EmptyMutation::default(),
        EmptySubscription::default(),
    )
    .finish()
}
