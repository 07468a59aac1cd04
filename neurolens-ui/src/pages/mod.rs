//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod developer;
pub mod landing;

pub use dashboard::Dashboard;
pub use developer::Developer;
pub use landing::Landing;
