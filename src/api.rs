//! REST API server for the contact chat agent
//!
//! Exposes the dialogue engine via HTTP endpoints for the site frontend.
//! Pacing is the frontend's job here, so each reply line carries the
//! typing duration the renderer should simulate.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::delivery::PacingConfig;
use crate::models::{SubmissionPayload, Step};
use crate::policy;
use crate::state::SessionStore;
use crate::submit::SubmissionSink;

/// =============================
/// Request Models
/// =============================

#[derive(Debug, Deserialize)]
pub struct OpenRequest {
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub session_id: Option<String>,
    pub text: String,
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).ok(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<SessionStore>,
    pub sink: Arc<dyn SubmissionSink>,
    pub page_origin: String,
    pub pacing: PacingConfig,
}

/// =============================
/// Helpers — Session Ids
/// =============================

fn stable_uuid_from_string(input: &str) -> uuid::Uuid {
    use sha2::{Digest, Sha256};

    let hash = Sha256::digest(input.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash[..16]);

    // Set UUID version (4) and variant (RFC4122) bits.
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    uuid::Uuid::from_bytes(bytes)
}

fn parse_or_stable_uuid(value: Option<&str>) -> uuid::Uuid {
    match value {
        Some(v) if !v.trim().is_empty() => {
            uuid::Uuid::parse_str(v).unwrap_or_else(|_| stable_uuid_from_string(v))
        }
        _ => uuid::Uuid::new_v4(),
    }
}

fn lines_json(state: &ApiState, lines: &[crate::models::ReplyLine]) -> serde_json::Value {
    let rendered: Vec<serde_json::Value> = lines
        .iter()
        .map(|line| {
            serde_json::json!({
                "text": line.text,
                "is_first_in_group": line.is_first_in_group,
                "is_last_in_group": line.is_last_in_group,
                "typing_ms": state.pacing.typing_duration(&line.text).as_millis() as u64,
            })
        })
        .collect();
    serde_json::Value::Array(rendered)
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Open Endpoint
/// =============================

/// Create (or re-greet) a session and return the scripted opener.
async fn open_handler(
    State(state): State<ApiState>,
    Json(req): Json<OpenRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    let session_id = parse_or_stable_uuid(req.session_id.as_deref());
    let session = state.store.get_or_create(session_id).await;
    info!("Opened session {} at step {}", session_id, session.step);

    let lines = crate::models::group_lines(policy::opening_lines());

    (
        StatusCode::OK,
        Json(ApiResponse::success(serde_json::json!({
            "session_id": session_id.to_string(),
            "step": session.step,
            "lines": lines_json(&state, &lines),
        }))),
    )
}

/// =============================
/// Chat Endpoint
/// =============================

async fn chat_handler(
    State(state): State<ApiState>,
    Json(req): Json<ChatRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    if req.text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Empty message".into())),
        );
    }

    let session_id = parse_or_stable_uuid(req.session_id.as_deref());

    // One turn at a time per session: the policy runs under the store's
    // write lock, so parallel requests cannot both see pre-completion state.
    let (reply, step) = state
        .store
        .with_session(session_id, |session| {
            let reply = policy::respond(session, &req.text);
            (reply, session.step)
        })
        .await;

    if let Some(record) = &reply.completed {
        let payload = SubmissionPayload::new(record.clone(), state.page_origin.clone());
        if let Err(e) = state.sink.submit(&payload).await {
            // the visitor already saw the closing lines; log and move on
            warn!("Contact submission failed for session {}: {}", session_id, e);
        }
    }

    info!("Session {} => step {}", session_id, step);

    (
        StatusCode::OK,
        Json(ApiResponse::success(serde_json::json!({
            "session_id": session_id.to_string(),
            "step": step,
            "complete": step == Step::Complete,
            "lines": lines_json(&state, &reply.lines),
        }))),
    )
}

/// =============================
/// Router
/// =============================

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health))
        .route("/api/chat/open", post(open_handler))
        .route("/api/chat", post(chat_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    state: ApiState,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_uuid_is_deterministic() {
        let a = stable_uuid_from_string("visitor-42");
        let b = stable_uuid_from_string("visitor-42");
        assert_eq!(a, b);
        assert_eq!(a.get_version_num(), 4);
    }

    #[test]
    fn test_parse_or_stable_uuid_accepts_valid_uuid() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(parse_or_stable_uuid(Some(&id.to_string())), id);
    }

    #[test]
    fn test_non_uuid_session_ids_map_stably() {
        let a = parse_or_stable_uuid(Some("my-browser-tab"));
        let b = parse_or_stable_uuid(Some("my-browser-tab"));
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_parallel_turns_submit_once() {
        use crate::state::ConversationState;
        use crate::submit::RecordingSink;

        // A session one turn away from completion.
        let session_id = uuid::Uuid::new_v4();
        let store = Arc::new(SessionStore::new());
        let mut session = ConversationState::new();
        session.step = Step::AskWhatsapp;
        session.fields.name = Some("Maya".into());
        session.fields.topic = Some("a website".into());
        session.fields.email = Some("maya@example.com".into());
        store.save(session_id, session).await;

        let sink = Arc::new(RecordingSink::new());
        let api_state = ApiState {
            store,
            sink: sink.clone(),
            page_origin: "https://example.com".to_string(),
            pacing: PacingConfig::default(),
        };

        // A double-pressed Enter: two requests for the same session racing.
        let request = |s: &ApiState| {
            let s = s.clone();
            let id = session_id.to_string();
            async move {
                chat_handler(
                    State(s),
                    Json(ChatRequest {
                        session_id: Some(id),
                        text: "skip".to_string(),
                    }),
                )
                .await
            }
        };
        let (a, b) = tokio::join!(
            tokio::spawn(request(&api_state)),
            tokio::spawn(request(&api_state))
        );
        a.unwrap();
        b.unwrap();

        assert_eq!(sink.count(), 1);
    }
}
