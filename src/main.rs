use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todolist::{api, render::TemplateRenderer, selfcheck, store::TodoStore};

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "A small in-memory to-do list served over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server on 127.0.0.1:5000
    Serve,
    /// Run the behavioral checks in-process instead of serving
    #[command(alias = "test")]
    Check,
}

/// Fixed settings for the `serve` command.
#[derive(Debug, Clone)]
struct ServeConfig {
    host: String,
    port: u16,
    /// Directory searched for `index.html`.
    templates: PathBuf,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            templates: PathBuf::from("templates"),
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "todolist=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: ServeConfig) -> anyhow::Result<()> {
    let templates = TemplateRenderer::from_dir(config.templates);
    tracing::info!("Using templates from {}", templates.dir().display());

    let app = api::create_router(api::AppState::new(TodoStore::seeded(), Some(templates)));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("To-do list listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn check() -> anyhow::Result<()> {
    let reports = selfcheck::run_all().await;
    let failed = reports.iter().filter(|r| !r.passed()).count();

    for report in &reports {
        match &report.result {
            Ok(()) => println!("ok      {}", report.name),
            Err(e) => println!("FAILED  {}: {:#}", report.name, e),
        }
    }
    println!("{} passed, {} failed", reports.len() - failed, failed);

    if failed > 0 {
        anyhow::bail!("{} check(s) failed", failed);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve) | None => serve(ServeConfig::default()).await?,
        Some(Commands::Check) => check().await?,
    }

    Ok(())
}
