use crate::handlers::greeting;
use actix_web::{HttpResponse, Responder, get};

/// # Greeting Endpoint
///
/// Returns the service greeting as plain text.
///
/// ## Response
///
/// - **200 OK**: `text/plain` body with the greeting
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service greeting", body = String, content_type = "text/plain")
    ),
    tag = "Greeting"
)]
#[get("/")]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(greeting::hello())
}

/// # Route Configuration
///
/// - `GET /`: Greeting endpoint
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(hello);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_hello_endpoint() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200, "Status code should be 200 OK");

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "text/plain; charset=utf-8");

        let body = test::read_body(resp).await;
        assert_eq!(
            body,
            "Hello World! This is a dockerized NestJS application."
        );
    }

    #[actix_web::test]
    async fn test_hello_rejects_post() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::post().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_client_error());
    }
}
