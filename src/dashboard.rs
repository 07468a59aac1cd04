//! Dashboard Extras
//!
//! The static emotional-state readings shown above the simulator and the
//! follow-up actions offered under a preview.

use serde::Serialize;

/// Kind of emotional-state reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingKind {
    Stress,
    Focus,
    Engagement,
}

impl ReadingKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReadingKind::Stress => "Stress Level",
            ReadingKind::Focus => "Focus",
            ReadingKind::Engagement => "Engagement",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ReadingKind::Stress => "📈",
            ReadingKind::Focus => "⚡",
            ReadingKind::Engagement => "✨",
        }
    }

    /// Tailwind background class for the bar fill
    pub fn bar_class(&self) -> &'static str {
        match self {
            ReadingKind::Stress => "bg-red-500",
            ReadingKind::Focus => "bg-primary-500",
            ReadingKind::Engagement => "bg-emerald-500",
        }
    }
}

/// A percentage reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmotionalReading {
    pub kind: ReadingKind,
    pub percent: u8,
}

impl EmotionalReading {
    /// CSS width for the bar, capped at 100%
    pub fn bar_width(&self) -> String {
        format!("width: {}%", self.percent.min(100))
    }
}

/// Readings shown on page load
pub fn emotional_state() -> [EmotionalReading; 3] {
    [
        EmotionalReading { kind: ReadingKind::Stress, percent: 20 },
        EmotionalReading { kind: ReadingKind::Focus, percent: 75 },
        EmotionalReading { kind: ReadingKind::Engagement, percent: 60 },
    ]
}

/// Actions listed under a preview. They have no behaviour yet.
pub const FOLLOW_UP_ACTIONS: [&str; 3] = ["Adjust Tone", "Translate", "Proofread"];

/// The three "How It Works" steps
pub fn how_it_works() -> [(&'static str, &'static str); 3] {
    [
        (
            "1. Emotion Detection:",
            "Analyzes your emotional state through engagement patterns",
        ),
        (
            "2. Smart Summarization:",
            "Condenses content based on your cognitive load",
        ),
        (
            "3. Adaptive Response:",
            "Adjusts tone and complexity to match your needs",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_readings() {
        let readings = emotional_state();
        assert_eq!(readings[0].kind, ReadingKind::Stress);
        assert_eq!(readings[0].percent, 20);
        assert_eq!(readings[1].bar_width(), "width: 75%");
        assert_eq!(readings[2].kind.label(), "Engagement");
    }

    #[test]
    fn test_bar_width_is_capped() {
        let reading = EmotionalReading { kind: ReadingKind::Focus, percent: 140 };
        assert_eq!(reading.bar_width(), "width: 100%");
    }
}
