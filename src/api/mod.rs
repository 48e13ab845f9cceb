mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::render::TemplateRenderer;
use crate::store::TodoStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: TodoStore,
    /// `None` means every list view uses the inline page.
    pub templates: Option<Arc<TemplateRenderer>>,
}

impl AppState {
    pub fn new(store: TodoStore, templates: Option<TemplateRenderer>) -> Self {
        Self {
            store,
            templates: templates.map(Arc::new),
        }
    }

    /// Seeded list, inline rendering only.
    pub fn inline() -> Self {
        Self::new(TodoStore::seeded(), None)
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/submit", post(handlers::submit))
        .route("/clear", get(handlers::clear))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
