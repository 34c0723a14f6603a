//! Playground session API.

use std::sync::Arc;

use academy_playground::{SessionSnapshot, TEMPLATES, Template};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ServerError;
use crate::state::AppState;

/// Body for POST /api/playground/sessions.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CreateSessionRequest {
    /// Template to load (default: the first template).
    template: Option<String>,
}

/// Body for PUT /api/playground/sessions/{id}/template.
#[derive(Debug, Deserialize)]
pub(crate) struct SelectTemplateRequest {
    template: String,
}

/// Body for PUT /api/playground/sessions/{id}/source.
#[derive(Debug, Deserialize)]
pub(crate) struct EditSourceRequest {
    source: String,
}

/// Response for GET /api/playground/templates.
#[derive(Serialize)]
pub(crate) struct TemplatesResponse {
    templates: &'static [Template],
}

/// Handle GET /api/playground/templates.
pub(crate) async fn list_templates() -> Json<TemplatesResponse> {
    Json(TemplatesResponse {
        templates: TEMPLATES,
    })
}

/// Handle POST /api/playground/sessions.
pub(crate) async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionSnapshot>), ServerError> {
    let session = state.sessions.create(request.template.as_deref())?;
    Ok((StatusCode::CREATED, Json(session.snapshot())))
}

/// Handle GET /api/playground/sessions/{id}.
pub(crate) async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ServerError> {
    Ok(Json(state.sessions.get(id)?.snapshot()))
}

/// Handle DELETE /api/playground/sessions/{id}.
pub(crate) async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ServerError> {
    state.sessions.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handle PUT /api/playground/sessions/{id}/template.
pub(crate) async fn select_template(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectTemplateRequest>,
) -> Result<Json<SessionSnapshot>, ServerError> {
    let session = state.sessions.get(id)?;
    Ok(Json(session.select_template(&request.template)?))
}

/// Handle PUT /api/playground/sessions/{id}/source.
pub(crate) async fn edit_source(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(request): Json<EditSourceRequest>,
) -> Result<Json<SessionSnapshot>, ServerError> {
    let session = state.sessions.get(id)?;
    Ok(Json(session.edit_source(request.source)))
}

/// Handle POST /api/playground/sessions/{id}/compile.
///
/// Starts a compile and returns immediately; poll the session for the result.
pub(crate) async fn compile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<SessionSnapshot>), ServerError> {
    let session = state.sessions.get(id)?;
    if !session.compile() {
        return Err(ServerError::CompileInProgress);
    }
    Ok((StatusCode::ACCEPTED, Json(session.snapshot())))
}

/// Handle POST /api/playground/sessions/{id}/reset.
pub(crate) async fn reset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ServerError> {
    Ok(Json(state.sessions.get(id)?.reset()))
}

/// Handle GET /api/playground/sessions/{id}/download.
pub(crate) async fn download(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServerError> {
    let download = state.sessions.get(id)?.download();
    Ok((
        [
            (header::CONTENT_TYPE, download.content_type.to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", download.filename),
            ),
        ],
        download.content,
    )
        .into_response())
}
