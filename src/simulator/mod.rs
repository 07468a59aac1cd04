//! Text-Preview Simulator
//!
//! The dashboard's "AI processing" demo. Given some text and a retention
//! percentage it waits a fixed delay, then produces a truncated preview and a
//! randomly drawn sentiment label.
//!
//! - **preview**: retention percentage and the truncation rule
//! - **sentiment**: sentiment labels and injectable random sources
//! - **session**: the dashboard view state and the two halves of a run
//! - **runner**: tokio driver for native targets
//! - **error**: error types
//!
//! # Example
//!
//! ```rust
//! use neurolens::simulator::{DashboardSession, RetentionPercent, ScriptedDraws, Sentiment};
//!
//! let mut session = DashboardSession::with_retention(RetentionPercent::new(50).unwrap());
//! session.set_text("Hello World");
//!
//! let pending = session.begin().unwrap();
//! // ... the caller waits PROCESSING_DELAY here ...
//! let output = pending.resolve(&mut ScriptedDraws::new([0.7]));
//! session.complete(output);
//!
//! let output = session.output().unwrap();
//! assert_eq!(output.preview, "Hello...");
//! assert_eq!(output.sentiment, Sentiment::Positive);
//! ```

use std::time::Duration;

pub mod error;
pub mod preview;
pub mod sentiment;
pub mod session;

#[cfg(not(target_arch = "wasm32"))]
pub mod runner;

/// Fixed processing delay in milliseconds
pub const PROCESSING_DELAY_MS: u32 = 2000;

/// Fixed processing delay
pub const PROCESSING_DELAY: Duration = Duration::from_millis(PROCESSING_DELAY_MS as u64);

pub use error::{SimulationError, SimulationResult};
pub use preview::{retained_chars, truncate_preview, RetentionPercent, ELLIPSIS};
pub use sentiment::{RandomSource, ScriptedDraws, Sentiment};
pub use session::{DashboardSession, PendingRun, SimulationOutput};

#[cfg(not(target_arch = "wasm32"))]
pub use runner::{SharedSession, Simulator};

#[cfg(not(target_arch = "wasm32"))]
pub use sentiment::RngSource;
