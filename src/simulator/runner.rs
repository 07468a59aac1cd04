//! Async simulator runner
//!
//! Drives a [`DashboardSession`] on the tokio runtime. Each trigger spawns one
//! task that sleeps for the processing delay, resolves the run and stores the
//! result. Tasks are never cancelled; overlapping runs both write, and the one
//! that finishes last is what the session shows.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

use super::error::SimulationResult;
use super::session::{DashboardSession, PendingRun, SimulationOutput};
use super::sentiment::RandomSource;
use super::PROCESSING_DELAY;
use crate::notification::Notification;

/// Shared handle to a session
pub type SharedSession = Arc<Mutex<DashboardSession>>;

/// Runs simulator passes against a shared session
pub struct Simulator<R> {
    session: SharedSession,
    rng: Arc<Mutex<R>>,
    delay: Duration,
    notices: mpsc::UnboundedSender<Notification>,
}

impl<R> Clone for Simulator<R> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            rng: Arc::clone(&self.rng),
            delay: self.delay,
            notices: self.notices.clone(),
        }
    }
}

impl<R: RandomSource + Send + 'static> Simulator<R> {
    /// Create a simulator with the standard two-second delay.
    ///
    /// Returns the receiving end of the notification channel.
    pub fn new(
        session: DashboardSession,
        rng: R,
    ) -> (Self, mpsc::UnboundedReceiver<Notification>) {
        Self::with_delay(session, rng, PROCESSING_DELAY)
    }

    /// Create a simulator with a custom processing delay
    pub fn with_delay(
        session: DashboardSession,
        rng: R,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let simulator = Self {
            session: Arc::new(Mutex::new(session)),
            rng: Arc::new(Mutex::new(rng)),
            delay,
            notices: tx,
        };
        (simulator, rx)
    }

    pub fn session(&self) -> SharedSession {
        Arc::clone(&self.session)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start a run.
    ///
    /// On invalid input the validation notification is sent and the error is
    /// returned; nothing is spawned. Otherwise the returned handle resolves to
    /// the output this run stored.
    pub async fn trigger(&self) -> SimulationResult<JoinHandle<SimulationOutput>> {
        let pending = self.begin().await?;
        let this = self.clone();
        Ok(tokio::spawn(async move { this.finish(pending).await }))
    }

    /// Start a run and wait for it on the current task
    pub async fn run(&self) -> SimulationResult<SimulationOutput> {
        let pending = self.begin().await?;
        Ok(self.finish(pending).await)
    }

    async fn begin(&self) -> SimulationResult<PendingRun> {
        let mut session = self.session.lock().await;
        session.begin().map_err(|e| {
            self.notify(e.notification());
            e
        })
    }

    async fn finish(&self, pending: PendingRun) -> SimulationOutput {
        tokio::time::sleep(self.delay).await;

        let output = {
            let mut rng = self.rng.lock().await;
            pending.resolve(&mut *rng)
        };

        let notice = self.session.lock().await.complete(output.clone());
        self.notify(notice);
        output
    }

    fn notify(&self, notice: Notification) {
        if self.notices.send(notice).is_err() {
            tracing::debug!("Notification receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::preview::RetentionPercent;
    use crate::simulator::sentiment::{ScriptedDraws, Sentiment};

    fn session_with(text: &str, pct: u8) -> DashboardSession {
        let mut session = DashboardSession::with_retention(RetentionPercent::new(pct).unwrap());
        session.set_text(text);
        session
    }

    #[tokio::test(start_paused = true)]
    async fn test_output_appears_after_delay() {
        let (sim, mut notices) =
            Simulator::new(session_with("Hello World", 50), ScriptedDraws::new([0.5]));

        let handle = sim.trigger().await.unwrap();
        assert!(sim.session().lock().await.is_processing());

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(sim.session().lock().await.output().is_none());
        assert!(notices.try_recv().is_err());

        let output = handle.await.unwrap();
        assert_eq!(output.preview, "Hello...");
        assert_eq!(output.sentiment, Sentiment::Neutral);

        let session = sim.session();
        let session = session.lock().await;
        assert!(!session.is_processing());
        assert_eq!(session.output(), Some(&output));
        assert_eq!(notices.recv().await, Some(Notification::processing_complete()));
        assert!(notices.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input_sends_one_notification() {
        let (sim, mut notices) = Simulator::new(session_with("  \n ", 50), ScriptedDraws::default());

        let err = sim.trigger().await.unwrap_err();
        assert_eq!(err, crate::simulator::SimulationError::InputRequired);

        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(notices.recv().await, Some(Notification::input_required()));
        assert!(notices.try_recv().is_err());

        let session = sim.session();
        let session = session.lock().await;
        assert!(session.output().is_none());
        assert!(!session.is_processing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_runs_last_write_wins() {
        let (sim, mut notices) =
            Simulator::new(session_with("abcdefghij", 20), ScriptedDraws::new([0.9, 0.1]));

        let first = sim.trigger().await.unwrap();
        tokio::time::sleep(Duration::from_millis(500)).await;
        sim.session()
            .lock()
            .await
            .set_retention(RetentionPercent::new(80).unwrap());
        let second = sim.trigger().await.unwrap();

        let first_out = first.await.unwrap();
        assert_eq!(first_out.preview, "ab...");
        assert_eq!(sim.session().lock().await.output(), Some(&first_out));

        let second_out = second.await.unwrap();
        assert_eq!(second_out.preview, "abcdefgh...");
        assert_eq!(second_out.sentiment, Sentiment::Negative);
        assert_eq!(sim.session().lock().await.output(), Some(&second_out));

        assert_eq!(notices.recv().await, Some(Notification::processing_complete()));
        assert_eq!(notices.recv().await, Some(Notification::processing_complete()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_delay() {
        let (sim, _notices) = Simulator::with_delay(
            session_with("Hello World", 90),
            ScriptedDraws::new([0.95]),
            Duration::from_millis(10),
        );
        assert_eq!(sim.delay(), Duration::from_millis(10));

        let output = sim.run().await.unwrap();
        assert_eq!(output.preview, "Hello Wor...");
        assert_eq!(output.sentiment, Sentiment::Positive);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_receiver_does_not_fail_run() {
        let (sim, notices) = Simulator::new(session_with("text", 50), ScriptedDraws::default());
        drop(notices);

        let output = sim.run().await.unwrap();
        assert_eq!(output.preview, "te...");
    }
}
