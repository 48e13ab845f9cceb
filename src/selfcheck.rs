//! Behavioral checks run against an in-process router, no socket involved.
//!
//! Each check starts from a fresh seeded list with inline rendering.

use anyhow::{ensure, Context, Result};
use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use crate::api::{create_router, AppState};

const BODY_LIMIT: usize = 1024 * 1024;

/// Outcome of one named check.
#[derive(Debug)]
pub struct CheckReport {
    pub name: &'static str,
    pub result: Result<()>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

struct Reply {
    status: StatusCode,
    location: Option<String>,
    body: String,
}

fn fresh_app() -> Router {
    create_router(AppState::inline())
}

async fn send(app: &Router, method: Method, uri: &str, form: Option<&str>) -> Result<Reply> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match form {
        Some(encoded) => {
            builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            Body::from(encoded.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body)?;

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = body::to_bytes(response.into_body(), BODY_LIMIT).await?;

    Ok(Reply {
        status,
        location,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Send a request and, if it redirects, fetch the target with GET.
async fn send_following(
    app: &Router,
    method: Method,
    uri: &str,
    form: Option<&str>,
) -> Result<Reply> {
    let reply = send(app, method, uri, form).await?;
    if !reply.status.is_redirection() {
        return Ok(reply);
    }
    let target = reply
        .location
        .context("redirect without a Location header")?;
    send(app, Method::GET, &target, None).await
}

fn data_rows(html: &str) -> usize {
    html.matches("<tr><td>").count()
}

async fn index_shows_seed_item(app: Router) -> Result<()> {
    let reply = send(&app, Method::GET, "/", None).await?;
    ensure!(reply.status == StatusCode::OK, "status was {}", reply.status);
    for needle in ["Buy Milk", "antchrobiaka@gmail.com", "Medium"] {
        ensure!(reply.body.contains(needle), "body is missing {needle:?}");
    }
    Ok(())
}

async fn submit_adds_item(app: Router) -> Result<()> {
    let reply = send_following(
        &app,
        Method::POST,
        "/submit",
        Some("task=Test+Task&email=tester%40example.com&priority=High"),
    )
    .await?;
    ensure!(reply.status == StatusCode::OK, "status was {}", reply.status);
    for needle in ["Test Task", "tester@example.com", "High"] {
        ensure!(reply.body.contains(needle), "body is missing {needle:?}");
    }
    ensure!(data_rows(&reply.body) == 2, "expected 2 rows");
    Ok(())
}

async fn invalid_submissions_are_dropped(app: Router) -> Result<()> {
    for form in [
        "task=++&email=a%40b&priority=Low",
        "task=Nope&email=no-at-sign&priority=Low",
        "",
    ] {
        let reply = send(&app, Method::POST, "/submit", Some(form)).await?;
        ensure!(
            reply.status.is_redirection(),
            "submit {form:?} answered {}",
            reply.status
        );
    }
    let reply = send(&app, Method::GET, "/", None).await?;
    ensure!(data_rows(&reply.body) == 1, "list changed after invalid submits");
    Ok(())
}

async fn unknown_priority_becomes_low(app: Router) -> Result<()> {
    let reply = send_following(
        &app,
        Method::POST,
        "/submit",
        Some("task=Odd&email=odd%40example.com&priority=urgent"),
    )
    .await?;
    ensure!(
        reply.body.contains("<td>Odd</td><td>odd@example.com</td><td>Low</td>"),
        "item was not stored with Low priority"
    );
    Ok(())
}

async fn clear_empties_list(app: Router) -> Result<()> {
    for _ in 0..2 {
        let reply = send_following(&app, Method::GET, "/clear", None).await?;
        ensure!(reply.status == StatusCode::OK, "status was {}", reply.status);
        ensure!(!reply.body.contains("Buy Milk"), "seed item survived clear");
        ensure!(data_rows(&reply.body) == 0, "rows remain after clear");
    }
    Ok(())
}

/// Run every check in order against its own fresh app.
pub async fn run_all() -> Vec<CheckReport> {
    vec![
        CheckReport {
            name: "index shows the seed item",
            result: index_shows_seed_item(fresh_app()).await,
        },
        CheckReport {
            name: "submit adds an item",
            result: submit_adds_item(fresh_app()).await,
        },
        CheckReport {
            name: "invalid submissions are dropped",
            result: invalid_submissions_are_dropped(fresh_app()).await,
        },
        CheckReport {
            name: "unknown priority becomes Low",
            result: unknown_priority_becomes_low(fresh_app()).await,
        },
        CheckReport {
            name: "clear empties the list",
            result: clear_empties_list(fresh_app()).await,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn all_checks_pass() {
        for report in run_all().await {
            assert!(report.passed(), "{}: {:?}", report.name, report.result);
        }
    }
}
