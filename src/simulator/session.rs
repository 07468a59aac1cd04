//! Dashboard view state
//!
//! [`DashboardSession`] owns everything the dashboard page mutates. A run is
//! split in two halves so the caller can put its own timer in between:
//!
//! ```text
//! begin()  ── validate, set processing, snapshot input ──▶ PendingRun
//!    ... fixed delay ...
//! PendingRun::resolve(rng) ──▶ SimulationOutput
//! complete(output) ── store output, clear processing ──▶ Notification
//! ```

use serde::{Deserialize, Serialize};

use super::error::{SimulationError, SimulationResult};
use super::preview::{truncate_preview, RetentionPercent};
use super::sentiment::{RandomSource, Sentiment};
use crate::notification::Notification;

/// Result of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub preview: String,
    pub sentiment: Sentiment,
}

/// Input captured when a run starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRun {
    text: String,
    retention: RetentionPercent,
}

impl PendingRun {
    pub fn new(text: impl Into<String>, retention: RetentionPercent) -> Self {
        Self {
            text: text.into(),
            retention,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn retention(&self) -> RetentionPercent {
        self.retention
    }

    /// Compute the preview and draw a sentiment
    pub fn resolve<R: RandomSource + ?Sized>(self, rng: &mut R) -> SimulationOutput {
        SimulationOutput {
            preview: truncate_preview(&self.text, self.retention),
            sentiment: Sentiment::sample(rng),
        }
    }
}

/// View state of the dashboard page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSession {
    text: String,
    retention: RetentionPercent,
    processing: bool,
    output: Option<SimulationOutput>,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retention(retention: RetentionPercent) -> Self {
        Self {
            retention,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn retention(&self) -> RetentionPercent {
        self.retention
    }

    pub fn set_retention(&mut self, retention: RetentionPercent) {
        self.retention = retention;
    }

    /// True between `begin` and the first `complete`
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn output(&self) -> Option<&SimulationOutput> {
        self.output.as_ref()
    }

    /// Validate the input and start a run.
    ///
    /// Empty or whitespace-only text fails with
    /// [`SimulationError::InputRequired`] and leaves the session untouched.
    /// Runs are not guarded against re-entry.
    pub fn begin(&mut self) -> SimulationResult<PendingRun> {
        if self.text.trim().is_empty() {
            tracing::debug!("Simulator triggered without input");
            return Err(SimulationError::InputRequired);
        }

        self.processing = true;
        tracing::debug!(
            chars = self.text.chars().count(),
            retention = self.retention.get(),
            "Simulator run started"
        );

        Ok(PendingRun::new(self.text.clone(), self.retention))
    }

    /// Store a finished run. The latest call wins.
    pub fn complete(&mut self, output: SimulationOutput) -> Notification {
        tracing::debug!(sentiment = %output.sentiment, "Simulator run finished");
        self.output = Some(output);
        self.processing = false;
        Notification::processing_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::sentiment::ScriptedDraws;

    fn session_with(text: &str, pct: u8) -> DashboardSession {
        let mut session = DashboardSession::with_retention(RetentionPercent::new(pct).unwrap());
        session.set_text(text);
        session
    }

    #[test]
    fn test_empty_input_is_rejected_without_mutation() {
        for text in ["", "   ", "\n\t  \r\n"] {
            let mut session = session_with(text, 50);
            let before = session.clone();

            assert_eq!(session.begin(), Err(SimulationError::InputRequired));
            assert_eq!(session, before);
            assert!(!session.is_processing());
            assert!(session.output().is_none());
        }
    }

    #[test]
    fn test_full_run() {
        let mut session = session_with("Hello World", 50);

        let pending = session.begin().unwrap();
        assert!(session.is_processing());
        assert!(session.output().is_none());

        let output = pending.resolve(&mut ScriptedDraws::new([0.7]));
        let notice = session.complete(output);

        assert!(!session.is_processing());
        assert_eq!(notice, Notification::processing_complete());
        assert_eq!(
            session.output(),
            Some(&SimulationOutput {
                preview: "Hello...".to_string(),
                sentiment: Sentiment::Positive,
            })
        );
    }

    #[test]
    fn test_pending_run_snapshots_input() {
        let mut session = session_with("first text", 50);
        let pending = session.begin().unwrap();

        session.set_text("something else entirely");
        session.set_retention(RetentionPercent::new(90).unwrap());

        assert_eq!(pending.text(), "first text");
        assert_eq!(pending.retention().get(), 50);
        let output = pending.resolve(&mut ScriptedDraws::new([0.1]));
        assert_eq!(output.preview, "first...");
    }

    #[test]
    fn test_later_completion_wins() {
        let mut session = session_with("abcdefghij", 20);
        let first = session.begin().unwrap();
        session.set_retention(RetentionPercent::new(80).unwrap());
        let second = session.begin().unwrap();

        let mut rng = ScriptedDraws::new([0.9, 0.1]);
        let first_out = first.resolve(&mut rng);
        let second_out = second.resolve(&mut rng);

        session.complete(first_out);
        assert_eq!(session.output().unwrap().preview, "ab...");
        // first completion already cleared the flag
        assert!(!session.is_processing());

        session.complete(second_out);
        let output = session.output().unwrap();
        assert_eq!(output.preview, "abcdefgh...");
        assert_eq!(output.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_rerun_overwrites_output() {
        let mut session = session_with("Hello World", 50);
        let out = session.begin().unwrap().resolve(&mut ScriptedDraws::new([0.5]));
        session.complete(out);

        session.set_text("Goodbye");
        let out = session.begin().unwrap().resolve(&mut ScriptedDraws::new([0.5]));
        session.complete(out);

        assert_eq!(session.output().unwrap().preview, "Goo...");
    }
}
