use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use hello_service::config::Config;
use hello_service::graphql::schema::create_schema;
use hello_service::openapi::ApiDoc;
use std::io;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Hello Service Entry Point
///
/// Records the process start, then launches the Actix-web HTTP server with:
/// - Greeting at `/` and health check at `/health`
/// - GraphQL endpoint at `/graphql` with the Playground at `/playground`
/// - Swagger UI at `/swagger-ui/`, OpenAPI spec at `/api-docs/openapi.json`
///
/// # Configuration
/// - `HOST` / `PORT` select the bind address (default `0.0.0.0:3000`)
/// - `RUST_LOG` sets the log filter (default `info`)
/// - Environment variables are also loaded from a `.env` file, if present
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    let started = hello_service::clock::init();

    let config =
        Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    tracing::info!(started_at = %started.started_at().to_rfc3339(), "Process clock recorded");

    let schema = create_schema();

    tracing::info!(host = %config.host, port = config.port, "Starting HTTP server");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(schema.clone()))
            .configure(hello_service::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(config.bind_address())?
    .run()
    .await
}
