//! Application State
//!
//! Shared state accessible by all site handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::ServerConfig;

/// Shared application state for all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            start_time: Instant::now(),
        }
    }

    /// Directory holding the UI bundle
    pub fn dist_dir(&self) -> &Path {
        &self.config.dist_dir
    }

    /// Path of the bundle's entry document
    pub fn index_path(&self) -> PathBuf {
        self.config.dist_dir.join("index.html")
    }

    /// Whether the UI bundle has been built into `dist_dir`
    pub fn has_ui_bundle(&self) -> bool {
        self.index_path().is_file()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
