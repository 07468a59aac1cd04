//! Simulator error types

use thiserror::Error;

use crate::notification::Notification;

/// Errors raised when a simulator run cannot start
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Source text is empty or whitespace-only
    #[error("Input required: please enter some text to summarize")]
    InputRequired,

    /// Retention percentage is outside 10..=90 or off the step of 10
    #[error("Invalid retention percentage: {0} (expected 10-90 in steps of 10)")]
    InvalidRetention(u8),
}

impl SimulationError {
    /// The notification shown to the user for this error
    pub fn notification(&self) -> Notification {
        match self {
            SimulationError::InputRequired => Notification::input_required(),
            SimulationError::InvalidRetention(_) => {
                Notification::destructive("Invalid summary length", self.to_string())
            }
        }
    }
}

/// Result type alias for simulator operations
pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimulationError::InvalidRetention(95);
        assert_eq!(
            err.to_string(),
            "Invalid retention percentage: 95 (expected 10-90 in steps of 10)"
        );
    }

    #[test]
    fn test_input_required_notification() {
        let n = SimulationError::InputRequired.notification();
        assert_eq!(n, Notification::input_required());
    }
}
