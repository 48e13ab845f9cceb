use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Form, Json,
};

use super::AppState;
use crate::models::SubmitForm;
use crate::render;

// ============================================================
// Error Handling
// ============================================================

/// Log a rendering failure and return a generic 500 to the client.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "items": state.store.len() }))
}

// ============================================================
// List
// ============================================================

pub async fn index(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let todos = state.store.snapshot();
    render::render_list(state.templates.as_deref(), &todos)
        .map(Html)
        .map_err(internal_error)
}

// ============================================================
// Mutations
// ============================================================

/// Validate and append. Every outcome redirects back to the list.
///
/// The body is decoded as raw pairs so a repeated key resolves to its first
/// value instead of failing the whole form.
pub async fn submit(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Redirect {
    let form = match form {
        Ok(Form(pairs)) => SubmitForm::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!("Unreadable submit body: {}", rejection);
            SubmitForm::default()
        }
    };

    match form.validate() {
        Ok(item) => {
            tracing::info!("Adding task {:?} ({})", item.task, item.priority);
            state.store.push(item);
        }
        Err(reason) => {
            tracing::debug!("Dropping submission: {}", reason);
        }
    }

    Redirect::to("/")
}

pub async fn clear(State(state): State<AppState>) -> Redirect {
    state.store.clear();
    tracing::info!("Cleared todo list");
    Redirect::to("/")
}
