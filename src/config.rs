use clap::Parser;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const INDEX_FILE: &str = "index.html";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Bundle directory {} does not exist; build the frontend with `trunk build` first", .0.display())]
    MissingDistDir(PathBuf),
    #[error("Bundle directory {} has no index.html", .0.display())]
    MissingIndex(PathBuf),
}

/// Serves the Tic Tac Toe frontend bundle
#[derive(Parser, Debug, Clone)]
#[command(name = "tictactoe-web")]
#[command(version, long_about = None)]
pub struct Config {
    /// Address to bind to
    #[arg(long, env = "TICTACTOE_ADDR", default_value = "127.0.0.1:8000")]
    pub addr: SocketAddr,

    /// Directory holding the built frontend (index.html, wasm and js)
    #[arg(long, env = "TICTACTOE_DIST_DIR", default_value = "frontend/dist")]
    pub dist_dir: PathBuf,

    /// Directory for the rolling server log
    #[arg(long, env = "TICTACTOE_LOG_DIR", default_value = "./logs")]
    pub log_dir: PathBuf,
}

impl Config {
    // The fallback route hands out index.html for every unknown path, so the
    // bundle is unusable without it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dist_dir(&self.dist_dir)
    }
}

fn check_dist_dir(dist_dir: &Path) -> Result<(), ConfigError> {
    if !dist_dir.is_dir() {
        return Err(ConfigError::MissingDistDir(dist_dir.to_path_buf()));
    }
    if !dist_dir.join(INDEX_FILE).is_file() {
        return Err(ConfigError::MissingIndex(dist_dir.to_path_buf()));
    }
    Ok(())
}
