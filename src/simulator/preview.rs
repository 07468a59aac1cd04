//! Preview truncation
//!
//! The retention percentage and the prefix rule that turns source text into a
//! preview.

use serde::{Deserialize, Serialize};

use super::error::{SimulationError, SimulationResult};

/// Suffix appended to every preview
pub const ELLIPSIS: &str = "...";

/// Share of the source text kept in the preview, in percent.
///
/// Always one of 10, 20, ..., 90.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RetentionPercent(u8);

impl RetentionPercent {
    pub const MIN: u8 = 10;
    pub const MAX: u8 = 90;
    pub const STEP: u8 = 10;

    /// Strict constructor: rejects values off the 10-step grid
    pub fn new(value: u8) -> SimulationResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) && value % Self::STEP == 0 {
            Ok(Self(value))
        } else {
            Err(SimulationError::InvalidRetention(value))
        }
    }

    /// Lenient constructor for slider input: clamps to the range and rounds
    /// to the nearest step.
    pub fn snapped(raw: i64) -> Self {
        let clamped = raw.clamp(Self::MIN as i64, Self::MAX as i64);
        let step = Self::STEP as i64;
        let rounded = (clamped + step / 2) / step * step;
        Self(rounded.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Next step up, saturating at 90
    pub fn step_up(self) -> Self {
        Self((self.0 + Self::STEP).min(Self::MAX))
    }

    /// Next step down, saturating at 10
    pub fn step_down(self) -> Self {
        Self(self.0.saturating_sub(Self::STEP).max(Self::MIN))
    }

    /// Every selectable value, ascending
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).step_by(Self::STEP as usize).map(Self)
    }
}

impl Default for RetentionPercent {
    fn default() -> Self {
        Self(50)
    }
}

impl TryFrom<u8> for RetentionPercent {
    type Error = SimulationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RetentionPercent> for u8 {
    fn from(value: RetentionPercent) -> Self {
        value.0
    }
}

impl std::fmt::Display for RetentionPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Number of characters kept for a text of `len` characters
pub fn retained_chars(len: usize, retention: RetentionPercent) -> usize {
    len * retention.get() as usize / 100
}

/// First `floor(len * pct / 100)` characters of `text`, followed by `...`.
///
/// Length is counted in Unicode scalar values. The text is not trimmed.
pub fn truncate_preview(text: &str, retention: RetentionPercent) -> String {
    let keep = retained_chars(text.chars().count(), retention);
    let mut preview: String = text.chars().take(keep).collect();
    preview.push_str(ELLIPSIS);
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(v: u8) -> RetentionPercent {
        RetentionPercent::new(v).unwrap()
    }

    #[test]
    fn test_hello_world_half() {
        assert_eq!(truncate_preview("Hello World", pct(50)), "Hello...");
    }

    #[test]
    fn test_floor_rounding() {
        // 7 * 30 / 100 = 2.1
        assert_eq!(truncate_preview("abcdefg", pct(30)), "ab...");
        // 9 * 10 / 100 = 0.9
        assert_eq!(truncate_preview("abcdefghi", pct(10)), "...");
        assert_eq!(truncate_preview("abcdefghij", pct(90)), "abcdefghi...");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(truncate_preview("ééééé", pct(40)), "éé...");
        assert_eq!(truncate_preview("😀😀😀😀😀😀😀😀😀😀", pct(20)), "😀😀...");
    }

    #[test]
    fn test_whitespace_is_kept() {
        assert_eq!(truncate_preview("  ab  cd  ", pct(50)), "  ab ...");
    }

    #[test]
    fn test_strict_constructor() {
        assert!(RetentionPercent::new(10).is_ok());
        assert!(RetentionPercent::new(90).is_ok());
        assert_eq!(
            RetentionPercent::new(0),
            Err(SimulationError::InvalidRetention(0))
        );
        assert!(RetentionPercent::new(100).is_err());
        assert!(RetentionPercent::new(55).is_err());
        assert!(RetentionPercent::new(5).is_err());
    }

    #[test]
    fn test_snapped_stays_on_grid() {
        assert_eq!(RetentionPercent::snapped(-40).get(), 10);
        assert_eq!(RetentionPercent::snapped(0).get(), 10);
        assert_eq!(RetentionPercent::snapped(14).get(), 10);
        assert_eq!(RetentionPercent::snapped(15).get(), 20);
        assert_eq!(RetentionPercent::snapped(86).get(), 90);
        assert_eq!(RetentionPercent::snapped(1000).get(), 90);

        for raw in -20..=120 {
            let v = RetentionPercent::snapped(raw).get();
            assert!((10..=90).contains(&v), "{raw} snapped to {v}");
            assert_eq!(v % 10, 0);
        }
    }

    #[test]
    fn test_steps_saturate() {
        assert_eq!(pct(90).step_up(), pct(90));
        assert_eq!(pct(10).step_down(), pct(10));
        assert_eq!(pct(50).step_up(), pct(60));
        assert_eq!(pct(50).step_down(), pct(40));
    }

    #[test]
    fn test_all_values() {
        let values: Vec<u8> = RetentionPercent::all().map(RetentionPercent::get).collect();
        assert_eq!(values, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);
        assert_eq!(RetentionPercent::default().get(), 50);
    }

    #[test]
    fn test_deserialize_rejects_off_grid() {
        assert!(serde_json::from_str::<RetentionPercent>("70").is_ok());
        assert!(serde_json::from_str::<RetentionPercent>("75").is_err());
    }
}
