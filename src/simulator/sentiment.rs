//! Sentiment labels and random sources
//!
//! The label is drawn from a single uniform sample in `[0, 1)` and is unrelated
//! to the text being previewed.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Draws above this value are positive
pub const POSITIVE_THRESHOLD: f64 = 0.6;

/// Draws above this value (and not positive) are neutral
pub const NEUTRAL_THRESHOLD: f64 = 0.3;

/// Sentiment label attached to a preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Map a uniform draw in `[0, 1)` onto a label
    pub fn from_draw(draw: f64) -> Self {
        if draw > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if draw > NEUTRAL_THRESHOLD {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    }

    /// Sample a label from a random source
    pub fn sample<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::from_draw(rng.next_unit())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Face shown next to the badge
    pub fn icon(&self) -> &'static str {
        match self {
            Sentiment::Positive => "😊",
            Sentiment::Neutral => "😐",
            Sentiment::Negative => "☹️",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapter from any `rand` generator
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

#[cfg(not(target_arch = "wasm32"))]
impl RngSource<rand_chacha::ChaCha8Rng> {
    /// Reproducible source for a given seed
    pub fn seeded(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand_chacha::ChaCha8Rng::seed_from_u64(seed))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RngSource<rand::rngs::StdRng> {
    /// Source seeded from the operating system
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl<R: rand::RngCore> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        use rand::Rng;
        self.0.gen::<f64>()
    }
}

/// Replays a fixed list of draws, then repeats the last one.
///
/// Yields `0.0` when constructed empty.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    draws: VecDeque<f64>,
    last: f64,
}

impl ScriptedDraws {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            last: 0.0,
        }
    }
}

impl RandomSource for ScriptedDraws {
    fn next_unit(&mut self) -> f64 {
        if let Some(draw) = self.draws.pop_front() {
            self.last = draw;
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(Sentiment::from_draw(0.0), Sentiment::Negative);
        assert_eq!(Sentiment::from_draw(0.3), Sentiment::Negative);
        assert_eq!(Sentiment::from_draw(0.3000001), Sentiment::Neutral);
        assert_eq!(Sentiment::from_draw(0.6), Sentiment::Neutral);
        assert_eq!(Sentiment::from_draw(0.6000001), Sentiment::Positive);
        assert_eq!(Sentiment::from_draw(0.999), Sentiment::Positive);
    }

    #[test]
    fn test_scripted_draws() {
        let mut rng = ScriptedDraws::new([0.9, 0.5, 0.1]);
        assert_eq!(Sentiment::sample(&mut rng), Sentiment::Positive);
        assert_eq!(Sentiment::sample(&mut rng), Sentiment::Neutral);
        assert_eq!(Sentiment::sample(&mut rng), Sentiment::Negative);
        // exhausted: repeats the last draw
        assert_eq!(Sentiment::sample(&mut rng), Sentiment::Negative);
    }

    #[test]
    fn test_distribution_matches_thresholds() {
        let mut rng = RngSource::seeded(42);
        let runs = 100_000;
        let mut counts = [0usize; 3];

        for _ in 0..runs {
            match Sentiment::sample(&mut rng) {
                Sentiment::Positive => counts[0] += 1,
                Sentiment::Neutral => counts[1] += 1,
                Sentiment::Negative => counts[2] += 1,
            }
        }

        let share = |n: usize| n as f64 / runs as f64;
        assert!((share(counts[0]) - 0.4).abs() < 0.01, "positive {}", share(counts[0]));
        assert!((share(counts[1]) - 0.3).abs() < 0.01, "neutral {}", share(counts[1]));
        assert!((share(counts[2]) - 0.3).abs() < 0.01, "negative {}", share(counts[2]));
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = Sentiment::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, vec!["positive", "neutral", "negative"]);
        assert_eq!(
            serde_json::to_string(&Sentiment::Neutral).unwrap(),
            r#""neutral""#
        );
    }
}
