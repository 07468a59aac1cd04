//! Landing Page Content
//!
//! Static marketing catalogue rendered by the landing page.

use serde::Serialize;

/// Headline figure under the hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadlineStat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Accent used for a card icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Primary,
    Secondary,
    Accent,
}

impl Accent {
    pub fn text_class(&self) -> &'static str {
        match self {
            Accent::Primary => "text-primary-400",
            Accent::Secondary => "text-emerald-400",
            Accent::Accent => "text-fuchsia-400",
        }
    }
}

/// Product capability card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

/// Problem the product addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UseCase {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Browser AI capability listed in the technology section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StackEntry {
    pub name: &'static str,
    pub purpose: &'static str,
}

pub const PRODUCT_NAME: &str = "NeuroLens";
pub const TAGLINE: &str = "Emotion-Aware Browsing";
pub const HERO_BADGE: &str = "Chrome Extension with Gemini Nano AI";
pub const HERO_COPY: &str = "Transform your web experience with AI-powered emotional intelligence. \
    Real-time emotion detection, mindful summarization, and privacy-first design \
    to protect your mental wellbeing while browsing.";
pub const FOOTER_NOTE: &str = "Powered by Chrome's Gemini Nano • Built for the Chrome Challenge";

pub fn headline_stats() -> [HeadlineStat; 4] {
    [
        HeadlineStat { value: "100%", label: "Privacy-First" },
        HeadlineStat { value: "0ms", label: "Cloud Latency" },
        HeadlineStat { value: "24/7", label: "Active Protection" },
        HeadlineStat { value: "∞", label: "Offline Capable" },
    ]
}

pub fn features() -> [Feature; 6] {
    [
        Feature {
            icon: "👁",
            title: "Facial Expression Analysis",
            description: "Real-time emotion detection through micro-expression analysis using your camera",
            accent: Accent::Primary,
        },
        Feature {
            icon: "🎙",
            title: "Voice Tone Detection",
            description: "Analyze emotional states through voice modulation and acoustic patterns",
            accent: Accent::Secondary,
        },
        Feature {
            icon: "📄",
            title: "Smart Summarization",
            description: "AI-powered content condensation based on your cognitive load and focus level",
            accent: Accent::Accent,
        },
        Feature {
            icon: "🎨",
            title: "Tone Adjustment",
            description: "Transform negative sentiment into neutral, empathetic phrasing automatically",
            accent: Accent::Primary,
        },
        Feature {
            icon: "🌐",
            title: "Instant Translation",
            description: "Break language barriers with seamless cross-cultural understanding",
            accent: Accent::Secondary,
        },
        Feature {
            icon: "❤",
            title: "Mindfulness Interventions",
            description: "Detect stress and offer mental reset recommendations for better wellbeing",
            accent: Accent::Accent,
        },
    ]
}

pub fn use_cases() -> [UseCase; 4] {
    [
        UseCase {
            icon: "📈",
            title: "Information Overload",
            description: "Automatically summarize lengthy articles when stress is detected",
        },
        UseCase {
            icon: "🛡",
            title: "Toxic Content Filter",
            description: "Transform negative online communication into constructive dialogue",
        },
        UseCase {
            icon: "⚡",
            title: "Focus Enhancement",
            description: "Adapt content complexity based on your current cognitive capacity",
        },
        UseCase {
            icon: "❤",
            title: "Mental Wellness",
            description: "Prevent digital burnout with mindful browsing recommendations",
        },
    ]
}

pub fn privacy_points() -> [&'static str; 4] {
    [
        "100% on-device AI processing with Gemini Nano",
        "Zero data transmission to external servers",
        "Local emotion and sentiment analysis",
        "Full user control over all features",
    ]
}

pub fn ai_stack() -> [StackEntry; 4] {
    [
        StackEntry { name: "Prompt API", purpose: "Multimodal query orchestration" },
        StackEntry { name: "Summarizer API", purpose: "Cognitive load-aware compression" },
        StackEntry { name: "Writer/Rewriter APIs", purpose: "Tone and sentiment adjustment" },
        StackEntry { name: "Translator API", purpose: "Multilingual comprehension" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_sizes() {
        assert_eq!(features().len(), 6);
        assert_eq!(use_cases().len(), 4);
        assert_eq!(headline_stats()[1].value, "0ms");
        assert_eq!(ai_stack()[1].name, "Summarizer API");
    }

    #[test]
    fn test_feature_titles_unique() {
        let mut titles: Vec<_> = features().iter().map(|f| f.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 6);
    }
}
