//! HTTP routes and middleware.

use crate::config::ServerConfig;
use crate::dto::{
    CharacterRow, CharacterSummary, CreateCharacterRequest, CreateResponse, CreatedRecord,
    ListResponse, CREATED_MESSAGE,
};
use crate::error::ApiError;
use crate::sink::{LogSink, RecordSink, SinkError};
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chargen_core::{DomainEvent, Observer, Roster, TracingObserver};
use std::any::Any;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{error, info, Level};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    roster: Arc<RwLock<Roster>>,
    observer: Arc<dyn Observer>,
    sink: Arc<dyn RecordSink>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Empty roster, tracing observer and log sink.
    pub fn new() -> Self {
        Self {
            roster: Arc::new(RwLock::new(Roster::new())),
            observer: Arc::new(TracingObserver),
            sink: Arc::new(LogSink),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn RecordSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn roster(&self) -> &Arc<RwLock<Roster>> {
        &self.roster
    }

    fn send_record(&self, summary: &CharacterSummary) {
        let record = CreatedRecord {
            message: CREATED_MESSAGE,
            character: summary,
        };
        let result = serde_json::to_string_pretty(&record)
            .map_err(SinkError::from)
            .and_then(|json| self.sink.send(&json));
        if let Err(e) = result {
            error!(id = %summary.id, "failed to send character record: {e}");
        }
    }
}

/// Build the application with routes and middleware.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let routes = Router::new()
        .route("/create-character", post(create_characters))
        .route("/get-chars", get(list_characters))
        .route("/health", get(health_check))
        .with_state(state);
    with_middleware(routes, config)
}

/// Request logging, panic recovery, timeout and body limit.
pub fn with_middleware(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(%details, "panic while handling request");
    (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
}

// ============================================================================
// Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Create each character in the batch in order.
///
/// Stops at the first invalid entry; entries before it stay stored.
async fn create_characters(
    State(state): State<AppState>,
    payload: Result<Json<Vec<CreateCharacterRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateResponse>), ApiError> {
    let Json(requests) = payload?;
    let mut created = Vec::with_capacity(requests.len());

    let mut roster = state.roster.write().await;
    for request in requests {
        let character = request.into_character(state.observer.as_ref())?;
        let summary = CharacterSummary::from(&character);

        let id = roster.insert(character);
        state.observer.notify(&DomainEvent::CharacterStored {
            id,
            count: roster.len(),
        });

        state.send_record(&summary);
        created.push(summary);
    }

    Ok((
        StatusCode::CREATED,
        Json(CreateResponse {
            message: CREATED_MESSAGE.to_string(),
            characters: created,
        }),
    ))
}

async fn list_characters(State(state): State<AppState>) -> Json<ListResponse> {
    let roster = state.roster.read().await;
    let listing = roster.listing();

    info!("Returning {} characters", listing.count);
    Json(ListResponse {
        count: listing.count,
        characters: listing.rows.into_iter().map(CharacterRow::from).collect(),
    })
}
