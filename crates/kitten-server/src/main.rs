use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kitten_config::KittenConfig;
use kitten_db::service::KittenService;
use kitten_server::{AppState, build_router};
use tokio::net::TcpListener;

/// Kitten Weights server.
#[derive(Debug, Parser)]
#[command(name = "kittend", version, about = "Kitten Weights - rescue weight tracker")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Extra TOML config file, layered above ./kitten.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Migrate, then serve HTTP until Ctrl-C (default).
    Serve,
    /// Apply schema migrations and exit.
    Migrate,
    /// Migrate and insert the sample kittens.
    Seed,
    /// Migrate and delete every kitten and measurement.
    Clear,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("kittend error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = KittenConfig::load_with_dotenv(cli.config.as_deref())
        .context("failed to load configuration")?;
    let service = KittenService::new_local(&config.database.path)
        .await
        .with_context(|| format!("failed to open database '{}'", config.database.path))?;

    service.migrate().await.context("failed to migrate database")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => return serve(service, &config).await,
        Command::Migrate => {}
        Command::Seed => {
            let report = service
                .seed_sample_data(chrono::Utc::now())
                .await
                .context("failed to seed sample data")?;
            println!("{}", serde_json::to_string(&report)?);
        }
        Command::Clear => {
            let removed = service
                .clear_all_data()
                .await
                .context("failed to clear data")?;
            println!("removed {removed} kittens");
        }
    }

    service.close();
    Ok(())
}

async fn serve(service: KittenService, config: &KittenConfig) -> anyhow::Result<()> {
    let service = Arc::new(service);
    let state = AppState::shared(Arc::clone(&service), config.general.recent_weights_limit);
    let router = build_router(state, &config.server);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, database = %config.database.path, "kittend listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shutting down");
    // The router and its state are gone once serve returns.
    match Arc::try_unwrap(service) {
        Ok(service) => service.close(),
        Err(_) => tracing::warn!("service still shared at shutdown; dropping without close"),
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("KITTEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
