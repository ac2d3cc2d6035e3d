//! HTTP endpoints
//!
//! REST boundary over the conversation engine. Typed engine errors map onto
//! transport codes here; the engine itself never sees HTTP.

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tourbot_core::{Error, GuideId, Language, TurnReply};

use crate::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Session lifecycle
        .route("/api/sessions", post(create_session))
        .route(
            "/api/sessions/:id",
            get(get_session).delete(delete_session),
        )
        .route("/api/sessions/:id/language", post(set_language))
        .route("/api/sessions/:id/guide", post(set_guide))
        // The per-turn contract
        .route("/api/chat/:session_id", post(chat))
        // Static capability listings
        .route("/api/languages", get(list_languages))
        .route("/api/guides", get(list_guides))
        // Health check
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http());

    if state.settings.server.cors_permissive {
        tracing::warn!("CORS is permissive - not for production");
        router = router.layer(CorsLayer::permissive());
    }

    router.with_state(state)
}

/// Transport-level error wrapper around the engine's typed errors
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match err {
            Error::InvalidInput(_)
            | Error::UnsupportedLanguage(_)
            | Error::UnknownGuide(_) => StatusCode::BAD_REQUEST,
            Error::SessionNotFound(_) => StatusCode::NOT_FOUND,
            Error::SessionLimitReached(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

fn parse_language(value: &str) -> Result<Language, ApiError> {
    Language::from_str_loose(value)
        .ok_or_else(|| ApiError::from(Error::UnsupportedLanguage(value.to_string())))
}

fn parse_guide(value: &str) -> Result<GuideId, ApiError> {
    GuideId::from_str_loose(value)
        .ok_or_else(|| ApiError::from(Error::UnknownGuide(value.to_string())))
}

#[derive(Debug, Deserialize)]
struct CreateSessionRequest {
    user_id: String,
    language: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateSessionResponse {
    session_id: String,
    language: Language,
    guide: GuideId,
}

async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<CreateSessionResponse>), ApiError> {
    let language = request
        .language
        .as_deref()
        .map(parse_language)
        .transpose()?;

    let session_id = state.engine.create_session(&request.user_id, language)?;
    let session = state.engine.session(&session_id)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id,
            language: session.language,
            guide: session.guide,
        }),
    ))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let session = state.engine.session(&id)?;

    Ok(Json(serde_json::json!({
        "session_id": session.id,
        "user_id": session.user_id,
        "language": session.language,
        "guide": session.guide,
        "turn_count": session.turn_count(),
        "created_at": session.created_at,
        "last_interaction": session.last_interaction,
    })))
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.engine.reset(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::from(Error::SessionNotFound(id)))
    }
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
    /// Optional explicit language override for this turn
    language: Option<String>,
}

async fn chat(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<TurnReply>, ApiError> {
    let language_override = request
        .language
        .as_deref()
        .map(parse_language)
        .transpose()?;

    let reply = state
        .engine
        .process_turn(&session_id, &request.message, language_override)?;

    Ok(Json(reply))
}

#[derive(Debug, Deserialize)]
struct SetLanguageRequest {
    language: String,
}

async fn set_language(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SetLanguageRequest>,
) -> Result<StatusCode, ApiError> {
    let language = parse_language(&request.language)?;
    state.engine.set_language(&id, language)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
struct SetGuideRequest {
    guide: String,
}

async fn set_guide(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SetGuideRequest>,
) -> Result<StatusCode, ApiError> {
    let guide = parse_guide(&request.guide)?;
    state.engine.set_guide(&id, guide)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_languages() -> Json<serde_json::Value> {
    let languages: Vec<_> = Language::all()
        .iter()
        .map(|language| {
            serde_json::json!({
                "code": language.code(),
                "name": language.name(),
            })
        })
        .collect();
    Json(serde_json::json!({ "languages": languages }))
}

async fn list_guides() -> Json<serde_json::Value> {
    let guides: Vec<_> = GuideId::all()
        .iter()
        .map(|id| {
            let guide = id.profile();
            serde_json::json!({
                "id": guide.id,
                "name": guide.display_name,
                "personality": guide.personality,
                "specialties": guide.specialties,
            })
        })
        .collect();
    Json(serde_json::json!({ "guides": guides }))
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "active_sessions": state.engine.active_sessions(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourbot_config::Settings;

    fn state() -> AppState {
        let mut settings = Settings::default();
        settings.personalization.seed = Some(3);
        AppState::new(settings)
    }

    #[tokio::test]
    async fn test_create_and_chat_flow() {
        let state = state();

        let (status, created) = create_session(
            State(state.clone()),
            Json(CreateSessionRequest {
                user_id: "u1".into(),
                language: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.language, Language::English);

        let reply = chat(
            State(state.clone()),
            Path(created.session_id.clone()),
            Json(ChatRequest {
                message: "Hello".into(),
                language: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(reply.0.intent, tourbot_core::IntentKind::Greeting);

        let snapshot = get_session(State(state), Path(created.session_id.clone()))
            .await
            .unwrap();
        assert_eq!(snapshot.0["turn_count"], 1);
    }

    #[tokio::test]
    async fn test_chat_missing_session_is_404() {
        let err = chat(
            State(state()),
            Path("ghost".into()),
            Json(ChatRequest {
                message: "hello".into(),
                language: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bad_language_is_400() {
        let state = state();
        let (_, created) = create_session(
            State(state.clone()),
            Json(CreateSessionRequest {
                user_id: "u2".into(),
                language: None,
            }),
        )
        .await
        .unwrap();

        let err = set_language(
            State(state),
            Path(created.session_id.clone()),
            Json(SetLanguageRequest {
                language: "klingon".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_message_is_400() {
        let state = state();
        let (_, created) = create_session(
            State(state.clone()),
            Json(CreateSessionRequest {
                user_id: "u3".into(),
                language: None,
            }),
        )
        .await
        .unwrap();

        let err = chat(
            State(state),
            Path(created.session_id.clone()),
            Json(ChatRequest {
                message: "   ".into(),
                language: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_session() {
        let state = state();
        let (_, created) = create_session(
            State(state.clone()),
            Json(CreateSessionRequest {
                user_id: "u4".into(),
                language: Some("ta".into()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(created.language, Language::Tamil);

        let status = delete_session(State(state.clone()), Path(created.session_id.clone()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = delete_session(State(state), Path(created.session_id.clone()))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
