//! The v1 API consumed by the browser widget.
//!
//! Endpoints:
//! - `GET  /v1/session`                  Session snapshot
//! - `GET  /v1/render`                   Avatar render state
//! - `GET  /v1/agents`                   Persona profiles with session status
//! - `POST /v1/agents/{agent}/activate`  Explicit agent switch
//! - `GET  /v1/threads/{agent}`          One persona's conversation
//! - `POST /v1/messages`                 Submit a guest message or voice transcript
//! - `POST /v1/language`                 Change the reply language
//! - `POST /v1/perception`               Latest face/emotion reading
//! - `GET  /v1/quick-actions`            One-tap prompts
//! - `POST /v1/quick-actions/{index}`    Submit a quick action
//! - `GET  /v1/events`                   SSE stream of domain events

use std::convert::Infallible;
use std::future::Future;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio_stream::StreamExt;
use tracing::{error, info};

use frontdesk_agent::{RenderState, SessionSnapshot, TurnOutcome, quick_actions};
use frontdesk_core::error::SessionError;
use frontdesk_core::event::DomainEvent;
use frontdesk_core::{AgeCategory, Agent, AgentProfile, Context, Emotion, Language, Turn};

use crate::SharedState;

/// Routes mounted under `/v1`.
pub fn v1_router() -> Router<SharedState> {
    Router::new()
        .route("/session", get(session_handler))
        .route("/render", get(render_handler))
        .route("/agents", get(list_agents_handler))
        .route("/agents/{agent}/activate", post(activate_handler))
        .route("/threads/{agent}", get(thread_handler))
        .route("/messages", post(submit_handler))
        .route("/language", post(language_handler))
        .route("/perception", post(perception_handler))
        .route("/quick-actions", get(list_quick_actions_handler))
        .route("/quick-actions/{index}", post(quick_action_handler))
        .route("/events", get(event_stream_handler))
}

// ── DTOs ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

#[derive(Serialize)]
struct AgentEntry {
    #[serde(flatten)]
    profile: &'static AgentProfile,
    active: bool,
    greeted: bool,
    thread_length: usize,
}

#[derive(Serialize)]
struct ActivateResponse {
    active_agent: Agent,
    greeted: bool,
}

#[derive(Serialize)]
struct ThreadResponse {
    agent: Agent,
    turns: Vec<Turn>,
}

#[derive(Deserialize)]
struct SubmitRequest {
    text: String,
    /// Set when the text is a speech-recognition transcript
    #[serde(default)]
    voice: bool,
}

#[derive(Deserialize)]
struct LanguageRequest {
    language: String,
}

#[derive(Serialize)]
struct LanguageResponse {
    language: Language,
    changed: bool,
}

/// A detector reading. An explicit `age` wins over `age_category`.
#[derive(Deserialize)]
struct PerceptionRequest {
    #[serde(default)]
    age: Option<u32>,
    #[serde(default)]
    age_category: Option<AgeCategory>,
    #[serde(default)]
    emotion: Option<Emotion>,
}

impl PerceptionRequest {
    fn into_context(self) -> Context {
        let age_category = self
            .age
            .map(AgeCategory::from_age)
            .or(self.age_category)
            .unwrap_or(AgeCategory::Adult);
        Context::new(age_category, self.emotion.unwrap_or_default())
    }
}

#[derive(Serialize)]
struct PerceptionResponse {
    context: Option<Context>,
}

#[derive(Serialize)]
struct QuickActionEntry {
    index: usize,
    label: &'static str,
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn session_handler(State(state): State<SharedState>) -> Json<SessionSnapshot> {
    Json(state.session.snapshot())
}

async fn render_handler(State(state): State<SharedState>) -> Json<RenderState> {
    Json(state.session.render_state())
}

async fn list_agents_handler(State(state): State<SharedState>) -> Json<Vec<AgentEntry>> {
    let active = state.session.active_agent();
    let agents = Agent::ALL
        .iter()
        .map(|agent| AgentEntry {
            profile: agent.profile(),
            active: *agent == active,
            greeted: state.session.is_greeted(*agent),
            thread_length: state.session.thread(*agent).len(),
        })
        .collect();
    Json(agents)
}

async fn activate_handler(
    State(state): State<SharedState>,
    Path(agent): Path<String>,
) -> Result<Json<ActivateResponse>, ApiError> {
    let agent = parse_agent(&agent)?;
    let session = state.session.clone();
    let greeted = detached(async move { session.switch_agent(agent).await }).await?;
    Ok(Json(ActivateResponse {
        active_agent: agent,
        greeted,
    }))
}

async fn thread_handler(
    State(state): State<SharedState>,
    Path(agent): Path<String>,
) -> Result<Json<ThreadResponse>, ApiError> {
    let agent = parse_agent(&agent)?;
    let thread = state.session.thread(agent);
    Ok(Json(ThreadResponse {
        agent,
        turns: thread.turns().to_vec(),
    }))
}

async fn submit_handler(
    State(state): State<SharedState>,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<TurnOutcome>, ApiError> {
    info!(text_len = payload.text.len(), voice = payload.voice, "v1/messages request");
    if payload.voice && state.session.is_speaking() {
        // The microphone picked up the avatar's own voice
        return Err(api_error(
            StatusCode::CONFLICT,
            "transcript dropped while the agent is speaking",
        ));
    }
    submit(&state, payload.text).await
}

async fn language_handler(
    State(state): State<SharedState>,
    Json(payload): Json<LanguageRequest>,
) -> Result<Json<LanguageResponse>, ApiError> {
    let language: Language = payload
        .language
        .parse()
        .map_err(|e: String| api_error(StatusCode::BAD_REQUEST, e))?;
    let session = state.session.clone();
    let changed = detached(async move { session.change_language(language).await }).await?;
    Ok(Json(LanguageResponse { language, changed }))
}

/// A `null` body means nobody is in front of the camera.
async fn perception_handler(
    State(state): State<SharedState>,
    Json(payload): Json<Option<PerceptionRequest>>,
) -> Json<PerceptionResponse> {
    let context = payload.map(PerceptionRequest::into_context);
    state.perception.publish(context);
    Json(PerceptionResponse { context })
}

async fn list_quick_actions_handler() -> Json<Vec<QuickActionEntry>> {
    Json(
        quick_actions()
            .iter()
            .enumerate()
            .map(|(index, label)| QuickActionEntry {
                index,
                label: *label,
            })
            .collect(),
    )
}

async fn quick_action_handler(
    State(state): State<SharedState>,
    Path(index): Path<usize>,
) -> Result<Json<TurnOutcome>, ApiError> {
    let label = quick_actions().get(index).ok_or_else(|| {
        api_error(
            StatusCode::NOT_FOUND,
            format!("no quick action at index {index}"),
        )
    })?;
    submit(&state, (*label).to_string()).await
}

/// `GET /v1/events`: every domain event, named by its type.
///
/// `speech_requested` events carry the text and voice hint the browser
/// should speak with.
async fn event_stream_handler(
    State(state): State<SharedState>,
) -> Sse<impl futures::Stream<Item = Result<SseEvent, Infallible>>> {
    let rx = state.session.event_bus().subscribe();
    let stream = tokio_stream::wrappers::BroadcastStream::new(rx)
        .filter_map(|result| result.ok())
        .map(|event| {
            let data = serde_json::to_string(event.as_ref()).unwrap_or_default();
            Ok(SseEvent::default().event(event_name(&event)).data(data))
        });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

// ── Helpers ───────────────────────────────────────────────────────────────

pub(crate) fn event_name(event: &DomainEvent) -> &'static str {
    match event {
        DomainEvent::TurnAppended { .. } => "turn_appended",
        DomainEvent::AgentSwitched { .. } => "agent_switched",
        DomainEvent::LanguageChanged { .. } => "language_changed",
        DomainEvent::SpeechRequested { .. } => "speech_requested",
        DomainEvent::SpeakingChanged { .. } => "speaking_changed",
        DomainEvent::ErrorOccurred { .. } => "error_occurred",
    }
}

fn parse_agent(raw: &str) -> Result<Agent, ApiError> {
    raw.parse()
        .map_err(|e: String| api_error(StatusCode::NOT_FOUND, e))
}

async fn submit(state: &SharedState, text: String) -> Result<Json<TurnOutcome>, ApiError> {
    let session = state.session.clone();
    let outcome = detached(async move { session.submit(&text).await }).await?;
    match outcome {
        Ok(outcome) => Ok(Json(outcome)),
        Err(e) => {
            let status = match e {
                SessionError::Busy => StatusCode::CONFLICT,
                SessionError::EmptyInput => StatusCode::BAD_REQUEST,
            };
            Err(api_error(status, e.to_string()))
        }
    }
}

/// Run session work on its own task so a client hanging up mid-reply does
/// not cut the turn short.
async fn detached<F>(work: F) -> Result<F::Output, ApiError>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::spawn(work).await.map_err(|e| {
        error!(error = %e, "Session task failed");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "session task failed")
    })
}
