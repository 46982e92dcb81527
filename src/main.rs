use crate::config::{Config, ConfigError, INDEX_FILE};
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use warp::{Filter, Rejection, Reply};

mod config;
mod handler;

#[derive(Error, Debug)]
enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to install the tracing subscriber: {0}")]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = Config::parse();
    // Dropping the guard flushes and stops the log writer
    let _guard = init_tracing(&config)?;

    if let Err(err) = config.validate() {
        error!("{}", err);
        return Err(err.into());
    }
    info!(
        "serving {} on {}",
        config.dist_dir.display(),
        config.addr
    );

    warp::serve(routes(config.dist_dir.clone())).run(config.addr).await;
    Ok(())
}

fn init_tracing(config: &Config) -> Result<WorkerGuard, StartupError> {
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "server.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(guard)
}

// Paths that match no bundle file get index.html so the app can load.
fn routes(dist_dir: PathBuf) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health_route = warp::path!("health").and_then(handler::health_handler);

    let index = dist_dir.join(INDEX_FILE);
    let static_route = warp::get()
        .and(warp::fs::dir(dist_dir))
        .or(warp::get().and(warp::fs::file(index)));

    health_route
        .or(static_route)
        .with(warp::trace::request())
}
