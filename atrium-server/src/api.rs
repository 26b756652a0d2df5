//! Workspace settings endpoints.
//!
//! Every response body is JSON. Update endpoints always answer with the
//! `{"errors": ...}` / `{"data": ...}` envelope, whatever the status, so the
//! settings page can surface the messages directly.

use atrium_common::{
    NameUpdated, SettingsProps, SlugUpdated, UpdateNameRequest, UpdateResponse, UpdateSlugRequest,
};
use atrium_core::workspace::SharedWorkspaceManager;
use atrium_core::{Session, WorkspaceError};
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use tracing::{error, warn};

/// Cookie carrying the session token when no `Authorization` header is sent.
pub const SESSION_COOKIE: &str = "atrium_session";

#[derive(Clone)]
pub struct ApiState {
    pub manager: SharedWorkspaceManager,
}

pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/workspace/:slug/settings", get(general_settings))
        .route("/api/workspace/:slug/name", put(update_name))
        .route("/api/workspace/:slug/slug", put(update_slug))
        .with_state(state)
}

/// Session token from `Authorization: Bearer <token>`, falling back to the
/// session cookie.
fn session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

async fn current_session(
    state: &ApiState,
    headers: &HeaderMap,
) -> Result<Option<Session>, WorkspaceError> {
    let Some(token) = session_token(headers) else {
        return Ok(None);
    };
    Ok(state.manager.database().find_session(&token).await?)
}

fn envelope_error(status: StatusCode, field: &str, msg: &str) -> Response {
    (
        status,
        Json(UpdateResponse::<()>::field_error(field, msg)),
    )
        .into_response()
}

fn unauthorized() -> Response {
    envelope_error(StatusCode::UNAUTHORIZED, "session", "You must be signed in")
}

fn workspace_error_to_response(err: WorkspaceError) -> Response {
    match err {
        WorkspaceError::Validation(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(UpdateResponse::<()>::failed(errors)),
        )
            .into_response(),
        WorkspaceError::NotFound => {
            envelope_error(StatusCode::NOT_FOUND, "workspace", "Workspace not found")
        }
        WorkspaceError::Database(e) => {
            error!("database error: {e}");
            envelope_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "server",
                "Something went wrong, please try again",
            )
        }
    }
}

/// GET /api/workspace/:slug/settings -- initial props for the settings page.
///
/// Answers `{"workspace": null}` rather than an error when there is no
/// session or the workspace is not visible.
async fn general_settings(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
) -> Response {
    let session = match current_session(&state, &headers).await {
        Ok(session) => session,
        Err(err) => return workspace_error_to_response(err),
    };

    match state
        .manager
        .load_general_settings(session.as_ref(), &slug)
        .await
    {
        Ok(workspace) => Json(SettingsProps { workspace }).into_response(),
        Err(err) => workspace_error_to_response(err),
    }
}

/// PUT /api/workspace/:slug/name
async fn update_name(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(body): Json<UpdateNameRequest>,
) -> Response {
    let session = match current_session(&state, &headers).await {
        Ok(Some(session)) => session,
        Ok(None) => {
            warn!("rejected name update for {slug:?}: no session");
            return unauthorized();
        }
        Err(err) => return workspace_error_to_response(err),
    };

    match state
        .manager
        .update_name(&session.user_id, &slug, &body.name)
        .await
    {
        Ok(name) => Json(UpdateResponse::ok(NameUpdated { name })).into_response(),
        Err(err) => workspace_error_to_response(err),
    }
}

/// PUT /api/workspace/:slug/slug -- answers with the slug actually stored.
async fn update_slug(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(slug): Path<String>,
    Json(body): Json<UpdateSlugRequest>,
) -> Response {
    let session = match current_session(&state, &headers).await {
        Ok(Some(session)) => session,
        Ok(None) => {
            warn!("rejected slug update for {slug:?}: no session");
            return unauthorized();
        }
        Err(err) => return workspace_error_to_response(err),
    };

    match state
        .manager
        .update_slug(&session.user_id, &slug, &body.slug)
        .await
    {
        Ok(slug) => Json(UpdateResponse::ok(SlugUpdated { slug })).into_response(),
        Err(err) => workspace_error_to_response(err),
    }
}
