//! # NeuroLens
//!
//! Marketing site and demo console for an emotion-aware browsing extension.
//!
//! The pages themselves live in the `neurolens-ui` crate (Leptos, WASM). This
//! crate holds everything they share with native tooling, plus the native
//! site host and CLI.
//!
//! ## Modules
//!
//! - [`simulator`]: Text-preview simulator behind the dashboard demo
//! - [`notification`]: Toast notification model
//! - [`site`]: Route table and navigation state
//! - [`landing`]: Landing page catalogue
//! - [`dashboard`]: Static dashboard readings and actions
//! - [`portal`]: Developer portal mock data
//! - [`config`]: TOML + environment configuration (native only)
//! - [`logging`]: `tracing` subscriber setup (native only)
//! - [`api`]: Axum site host (native only)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neurolens::simulator::{DashboardSession, RngSource, Simulator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = DashboardSession::new();
//!     session.set_text("Paste your article, email, or any text content here");
//!
//!     let (simulator, mut notices) = Simulator::new(session, RngSource::from_entropy());
//!     let output = simulator.run().await?;
//!
//!     println!("{} ({})", output.preview, output.sentiment);
//!     if let Some(notice) = notices.recv().await {
//!         println!("{}", notice);
//!     }
//!     Ok(())
//! }
//! ```

pub mod dashboard;
pub mod landing;
pub mod notification;
pub mod portal;
pub mod simulator;
pub mod site;

#[cfg(not(target_arch = "wasm32"))]
pub mod api;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

// Re-export top-level types for convenience
pub use notification::{Notification, NotificationVariant, ToastSlot};

pub use simulator::{
    truncate_preview, DashboardSession, PendingRun, RandomSource, RetentionPercent,
    ScriptedDraws, Sentiment, SimulationError, SimulationOutput, PROCESSING_DELAY,
};

pub use site::{MobileMenu, Route};

#[cfg(not(target_arch = "wasm32"))]
pub use simulator::{RngSource, Simulator};

#[cfg(not(target_arch = "wasm32"))]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(not(target_arch = "wasm32"))]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig, SimulatorConfig};
