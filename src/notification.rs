//! User Notifications
//!
//! The toast model shared by the dashboard simulator and the developer portal.
//! Producers return a [`Notification`]; the UI decides how to display it.

use serde::{Deserialize, Serialize};

/// Milliseconds a default toast stays on screen
pub const DEFAULT_TOAST_MS: u32 = 3000;

/// Milliseconds a destructive toast stays on screen
pub const DESTRUCTIVE_TOAST_MS: u32 = 5000;

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    /// Informational or success message
    #[default]
    Default,
    /// Blocking problem the user has to fix
    Destructive,
}

/// A single user-facing notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: NotificationVariant,
}

impl Notification {
    /// Create a default (non-destructive) notification
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    /// Create a destructive notification
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    /// Raised when the simulator is triggered without text
    pub fn input_required() -> Self {
        Self::destructive("Input required", "Please enter some text to summarize")
    }

    /// Raised when a simulator run finishes
    pub fn processing_complete() -> Self {
        Self::new(
            "Processing complete",
            "Your text has been analyzed and summarized",
        )
    }

    /// Raised by the developer portal's connection test
    pub fn api_test_successful() -> Self {
        Self::new(
            "API Test Successful",
            "Connection established and authenticated",
        )
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }

    /// How long the toast should stay visible
    pub fn display_ms(&self) -> u32 {
        match self.variant {
            NotificationVariant::Default => DEFAULT_TOAST_MS,
            NotificationVariant::Destructive => DESTRUCTIVE_TOAST_MS,
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// The single on-screen toast.
///
/// Each [`show`](ToastSlot::show) returns a ticket; dismissing with a stale
/// ticket is ignored, so an older timer never hides a newer toast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<Notification>,
    ticket: u64,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible toast and return its dismissal ticket
    pub fn show(&mut self, notification: Notification) -> u64 {
        self.ticket = self.ticket.wrapping_add(1);
        self.current = Some(notification);
        self.ticket
    }

    /// Hide the toast if `ticket` still identifies it
    pub fn dismiss(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    /// Hide the toast regardless of ticket
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
