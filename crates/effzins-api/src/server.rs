//! Server configuration and startup.

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::routes;

/// Create the API router.
pub fn create_router(config: &ServerConfig) -> Router {
    let router = Router::new().route("/rate/effZins", post(routes::rate::effective_rate));

    with_middleware(router, config.cors_enabled)
}

fn with_middleware(router: Router, cors_enabled: bool) -> Router {
    let router = router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}

/// Run the server.
pub async fn run_server(config: &ServerConfig) -> anyhow::Result<()> {
    let app = create_router(config);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Effzins server listening on http://{}", addr);
    tracing::info!("  POST /rate/effZins");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    use crate::error::GENERIC_ERROR_MESSAGE;

    async fn explode() -> &'static str {
        panic!("Test Error")
    }

    #[tokio::test]
    async fn test_panic_becomes_generic_server_error() {
        let app = with_middleware(Router::new().route("/boom", get(explode)), false);

        let response = app
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], GENERIC_ERROR_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn test_cors_headers_when_enabled() {
        let app = create_router(&ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/rate/effZins")
                    .header("origin", "http://localhost:5173")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = create_router(&ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
