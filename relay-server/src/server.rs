use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::room::RoomRegistry;
use crate::signaling::{create_room, health, ws_handler};
use axum::Router;
use axum::routing::get;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub registry: RoomRegistry,
    pub config: RelayConfig,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            registry: RoomRegistry::new(),
            config,
        }
    }
}

/// HTTP routes of the relay with a permissive CORS policy.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/create-room", get(create_room))
        .route("/ws/{room_id}", get(ws_handler))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn serve<F>(state: AppState, shutdown: F) -> Result<(), RelayError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = state.config.listen_addr;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| RelayError::Bind { addr, source })?;

    serve_on(listener, state, shutdown).await
}

pub async fn serve_on<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), RelayError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("Signaling relay listening on http://{}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
