//! Application state
//!
//! Holds all shared components and state

use crate::board_store::BoardStore;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Static frontend directory
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
        }
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// BoardStore (single source of truth for points)
    pub board: Arc<BoardStore>,
    /// Process start time, for /healthz uptime
    pub started_at: Instant,
}

impl AppState {
    /// Create state with a fresh empty board
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            board: Arc::new(BoardStore::new()),
            started_at: Instant::now(),
        }
    }
}
