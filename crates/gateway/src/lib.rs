//! HTTP API gateway for the Frontdesk browser widget.
//!
//! Serves one shared [`SessionManager`] over REST, with an SSE stream of
//! domain events so the page can render turns and speak replies as they
//! happen. Camera readings come in through `POST /v1/perception`.
//!
//! Built on Axum.

pub mod api_v1;
pub mod speech;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::{Router, extract::State, response::Json, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing::info;

use frontdesk_agent::SessionManager;
use frontdesk_config::AppConfig;
use frontdesk_core::WatchPerception;

pub use speech::BrowserSpeech;

/// Request bodies are a sentence or a detector reading; 64 KiB is plenty.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared application state for the gateway.
pub struct GatewayState {
    pub session: Arc<SessionManager>,
    /// Publish handle for the session's perception source
    pub perception: WatchPerception,
    pub started_at: DateTime<Utc>,
}

impl GatewayState {
    /// `perception` must be the same source the session was built with.
    pub fn new(session: Arc<SessionManager>, perception: WatchPerception) -> Self {
        Self {
            session,
            perception,
            started_at: Utc::now(),
        }
    }
}

pub type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/v1", api_v1::v1_router())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}

/// [`build_router`] plus CORS for the widget's origin.
pub fn build_full_router(state: SharedState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::AllowOrigin::exact(allowed_origin))
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600));

    build_router(state).layer(cors)
}

/// Start the gateway HTTP server.
///
/// The host's welcome is spoken once the listener is bound, so a widget that
/// connects right away sees it on the event stream.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let allowed_origin: HeaderValue = config.gateway.allowed_origin.parse()?;

    let perception = WatchPerception::new();
    let speech = Arc::new(BrowserSpeech::from_config(&config.speech));
    let session = Arc::new(
        SessionManager::from_config(&config, speech)?
            .with_perception(Arc::new(perception.clone())),
    );
    let state = Arc::new(GatewayState::new(session.clone(), perception));
    let app = build_full_router(state, allowed_origin);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, origin = %config.gateway.allowed_origin, "Gateway listening");

    tokio::spawn(async move { session.start().await });
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_secs: i64,
}

async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
    })
}
