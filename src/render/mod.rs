//! HTML rendering for the list view.
//!
//! The list view is drawn by an external `index.html` template when one is
//! available. Whether it is available is an explicit check that yields a
//! [`RenderOutcome`]; the caller falls back to [`fallback_page`] on
//! [`RenderOutcome::NotConfigured`].

mod fallback;

use std::path::{Path, PathBuf};

use minijinja::{context, Environment, ErrorKind};

use crate::models::TodoItem;

pub use fallback::fallback_page;

/// Name of the view rendered for `/`.
pub const INDEX_TEMPLATE: &str = "index.html";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("fallback page error: {0}")]
    Fallback(#[from] askama::Error),
}

/// Result of asking the template collaborator to draw the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered(String),
    /// No renderer is configured, or it has no index template.
    NotConfigured,
}

/// Jinja-style templates loaded from a directory at runtime.
///
/// Templates are read on first use, so a directory that gains an `index.html`
/// after startup is picked up on the next request.
pub struct TemplateRenderer {
    env: Environment<'static>,
    dir: PathBuf,
}

impl TemplateRenderer {
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(dir.clone()));
        Self { env, dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Render the index view with the list bound as `todos`.
    pub fn render_index(&self, todos: &[TodoItem]) -> Result<RenderOutcome, RenderError> {
        let template = match self.env.get_template(INDEX_TEMPLATE) {
            Ok(template) => template,
            Err(e) if e.kind() == ErrorKind::TemplateNotFound => {
                tracing::debug!(
                    "No {} in {}, using inline page",
                    INDEX_TEMPLATE,
                    self.dir.display()
                );
                return Ok(RenderOutcome::NotConfigured);
            }
            Err(e) => return Err(e.into()),
        };

        let html = template.render(context! { todos => todos })?;
        Ok(RenderOutcome::Rendered(html))
    }
}

/// Capability check: render through `templates` if one is configured.
pub fn index_page(
    templates: Option<&TemplateRenderer>,
    todos: &[TodoItem],
) -> Result<RenderOutcome, RenderError> {
    match templates {
        Some(renderer) => renderer.render_index(todos),
        None => Ok(RenderOutcome::NotConfigured),
    }
}

/// The HTML served for `/`: the template output, or the inline page.
pub fn render_list(
    templates: Option<&TemplateRenderer>,
    todos: &[TodoItem],
) -> Result<String, RenderError> {
    match index_page(templates, todos)? {
        RenderOutcome::Rendered(html) => Ok(html),
        RenderOutcome::NotConfigured => fallback_page(todos),
    }
}
