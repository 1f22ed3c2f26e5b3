use axum::{
    Router,
    routing::{get, post},
};
use event_admin_domain::app::AppState;
use log::info;
use tokio::net::TcpListener;

mod category;
mod error;
mod event;

pub use error::ApiError;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .nest(
            "/api",
            Router::new()
                .route("/events", post(event::create_event))
                .route("/categories", get(category::get_categories)),
        )
        .with_state(app_state)
}

async fn root() -> &'static str {
    "Event admin API is running"
}

pub async fn run(
    app_state: AppState,
    bind_address: &str,
    port: u16,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(format!("{}:{}", bind_address, port)).await?;
    info!("API server listening on {}:{}", bind_address, port);
    serve(listener, app_state, shutdown_signal).await
}

pub async fn serve(
    listener: TcpListener,
    app_state: AppState,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    axum::serve(listener, router(app_state))
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("HTTP API shut down gracefully");
    Ok(())
}
