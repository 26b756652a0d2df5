mod api;
mod seed;

use api::{api_router, ApiState, SESSION_COOKIE};
use atrium_common::routes::general_settings_path;
use atrium_core::{Database, WorkspaceManager};
use axum::Router;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info};

/// atrium server: workspace settings API plus the built web app.
#[derive(Parser)]
#[command(name = "atrium-server")]
struct Args {
    /// Path to the SQLite database file. Created if missing.
    #[arg(long, default_value = "atrium.db", env = "ATRIUM_DATABASE")]
    database: PathBuf,

    /// Port for the HTTP server.
    #[arg(long, default_value = "4540", env = "ATRIUM_PORT")]
    port: u16,

    /// Address to bind the server to.
    #[arg(long, default_value = "127.0.0.1", env = "ATRIUM_BIND")]
    bind: String,

    /// Path to the built atrium-web dist directory.
    #[arg(long, env = "ATRIUM_WEB_DIR")]
    web_dir: Option<PathBuf>,

    /// Create a demo user, workspace and session, then keep serving.
    #[arg(long)]
    seed_demo: bool,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn with_web_app(router: Router, web_dir: Option<&PathBuf>) -> Router {
    match web_dir {
        Some(web_dir) => {
            info!("Serving web app from {}", web_dir.display());
            let spa_fallback =
                ServeDir::new(web_dir).fallback(ServeFile::new(web_dir.join("index.html")));
            router.fallback_service(spa_fallback)
        }
        None => router,
    }
}

#[tokio::main]
async fn main() {
    // .env first so RUST_LOG and ATRIUM_* from it are honored
    let dotenv = dotenvy::dotenv();
    configure_logging();
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }
    let args = Args::parse();

    info!("atrium-server starting");

    info!("Opening database at {}", args.database.display());
    let database = Database::open(&args.database).await.unwrap_or_else(|e| {
        error!("Failed to open database: {e}");
        std::process::exit(1);
    });

    if args.seed_demo {
        let session = seed::seed_demo(&database).await.unwrap_or_else(|e| {
            error!("Failed to seed demo data: {e}");
            std::process::exit(1);
        });
        info!(
            "Demo session token: {} (send as 'Authorization: Bearer <token>' or cookie {SESSION_COOKIE})",
            session.token
        );
        info!("Demo settings page: {}", general_settings_path(seed::DEMO_SLUG));
    }

    let state = ApiState {
        manager: Arc::new(WorkspaceManager::new(database)),
    };
    let app = with_web_app(api_router(state), args.web_dir.as_ref());
    let addr = format!("{}:{}", args.bind, args.port);

    info!("Binding to {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    info!("atrium-server listening on http://{addr}");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
