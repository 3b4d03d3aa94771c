//! lyrical-web - GraphQL gateway for the song/lyric catalog
//!
//! Opens the entity store once at startup, binds the GraphQL schema to
//! POST /graphql, and serves the bundled single-page UI.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;

use lyrical_common::{config, db};
use lyrical_web::{build_router, graphql};

/// Command-line arguments for lyrical-web
#[derive(Parser, Debug)]
#[command(name = "lyrical-web")]
#[command(about = "GraphQL gateway for the Lyrical song catalog")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "LYRICAL_PORT")]
    port: Option<u16>,

    /// Entity store connection string (e.g. sqlite://lyrical.db or a file path)
    #[arg(short, long)]
    database_url: Option<String>,

    /// Optional TOML config file providing database_url and port
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lyrical_web=debug,tower_http=info".into()),
        )
        .init();

    let args = Args::parse();

    // The database URL is required; startup is refused without one
    let database_url = config::resolve_database_url(
        args.database_url.as_deref(),
        "LYRICAL_DATABASE_URL",
        args.config.as_deref(),
    )?;
    let port = config::resolve_port(args.port, args.config.as_deref(), 4000);

    info!("Starting Lyrical gateway on port {}", port);

    // Open the entity store; held for the whole process lifetime
    let pool = if database_url.starts_with("sqlite:") {
        let pool = db::connect(&database_url)
            .await
            .context("Failed to connect to entity store")?;
        db::create_schema(&pool).await?;
        pool
    } else {
        db::init_database(Path::new(&database_url))
            .await
            .context("Failed to initialize entity store")?
    };
    info!("Connected to entity store");

    let schema = graphql::build_schema(pool);
    let app = build_router(schema);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Listening on http://{}", addr);
    info!("GraphiQL playground: http://{}/graphql", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
