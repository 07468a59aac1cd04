//! Developer Portal
//!
//! Mock console data for the developer page. Nothing here talks to a real
//! service: the stats and activity are fixed, and the connection test always
//! succeeds.

use serde::Serialize;

use crate::notification::Notification;

/// Endpoint pre-filled in the test form
pub const DEFAULT_TEST_ENDPOINT: &str = "/api/summarize";

/// Usage figure with its period-over-period change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortalStat {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    /// Signed change, e.g. `+12.3%`
    pub change: &'static str,
}

impl PortalStat {
    /// Positive changes get the "up" badge
    pub fn is_increase(&self) -> bool {
        self.change.starts_with('+')
    }
}

/// Outcome of a logged API call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    Success,
    Error,
}

impl CallStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, CallStatus::Success)
    }
}

/// One row of the recent activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub endpoint: &'static str,
    pub status: CallStatus,
    pub age: &'static str,
    pub response_time: &'static str,
}

/// Portal tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortalTab {
    #[default]
    Test,
    Config,
    Analytics,
}

impl PortalTab {
    pub const ALL: [PortalTab; 3] = [PortalTab::Test, PortalTab::Config, PortalTab::Analytics];

    pub fn label(&self) -> &'static str {
        match self {
            PortalTab::Test => "API Testing",
            PortalTab::Config => "Configuration",
            PortalTab::Analytics => "Analytics",
        }
    }
}

/// Configuration row on the Configuration tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureToggle {
    pub name: &'static str,
    pub description: &'static str,
    pub state: &'static str,
}

/// Figure on the Analytics tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnalyticsHighlight {
    pub label: &'static str,
    pub value: &'static str,
}

/// External link in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickLink {
    pub label: &'static str,
}

/// The API Testing form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiTestForm {
    pub api_key: String,
    pub endpoint: String,
}

impl Default for ApiTestForm {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_TEST_ENDPOINT.to_string(),
        }
    }
}

impl ApiTestForm {
    /// Run the connection test. Always reports success.
    pub fn test_connection(&self) -> Notification {
        tracing::debug!(
            endpoint = %self.endpoint,
            has_key = !self.api_key.is_empty(),
            "API connection test"
        );
        Notification::api_test_successful()
    }
}

pub fn stats() -> [PortalStat; 4] {
    [
        PortalStat { icon: "📊", label: "Total Requests", value: "124.5K", change: "+12.3%" },
        PortalStat { icon: "👥", label: "Active Users", value: "2,847", change: "+8.1%" },
        PortalStat { icon: "⚡", label: "Avg Response Time", value: "142ms", change: "-5.2%" },
        PortalStat { icon: "📈", label: "Success Rate", value: "99.8%", change: "+0.2%" },
    ]
}

pub fn recent_activity() -> [ActivityEntry; 5] {
    use CallStatus::{Error, Success};
    [
        ActivityEntry { endpoint: "/api/summarize", status: Success, age: "2m ago", response_time: "134ms" },
        ActivityEntry { endpoint: "/api/sentiment", status: Success, age: "5m ago", response_time: "98ms" },
        ActivityEntry { endpoint: "/api/translate", status: Success, age: "8m ago", response_time: "156ms" },
        ActivityEntry { endpoint: "/api/rewrite", status: Error, age: "12m ago", response_time: "timeout" },
        ActivityEntry { endpoint: "/api/summarize", status: Success, age: "15m ago", response_time: "121ms" },
    ]
}

pub fn feature_toggles() -> [FeatureToggle; 4] {
    [
        FeatureToggle {
            name: "Emotion Detection",
            description: "Enable facial and voice analysis",
            state: "Active",
        },
        FeatureToggle {
            name: "Auto-Summarization",
            description: "Automatically condense long content",
            state: "Active",
        },
        FeatureToggle {
            name: "Privacy Mode",
            description: "All processing happens locally",
            state: "Enabled",
        },
        FeatureToggle {
            name: "Mindfulness Alerts",
            description: "Notify on stress detection",
            state: "Active",
        },
    ]
}

pub fn analytics_highlights() -> [AnalyticsHighlight; 2] {
    [
        AnalyticsHighlight { label: "Peak Usage", value: "2:00 PM - 4:00 PM" },
        AnalyticsHighlight { label: "Most Used API", value: "/summarize" },
    ]
}

pub fn quick_links() -> [QuickLink; 4] {
    [
        QuickLink { label: "API Documentation" },
        QuickLink { label: "GitHub Repository" },
        QuickLink { label: "Chrome Web Store" },
        QuickLink { label: "Community Discord" },
    ]
}

/// Sample request body shown on the API Testing tab
pub fn request_example() -> String {
    let body = serde_json::json!({
        "text": "Your content here",
        "options": {
            "length": "medium",
            "sentiment": "neutral"
        }
    });
    serde_json::to_string_pretty(&body).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_direction() {
        let stats = stats();
        let up: Vec<_> = stats.iter().filter(|s| s.is_increase()).map(|s| s.label).collect();
        assert_eq!(up, vec!["Total Requests", "Active Users", "Success Rate"]);
        assert!(!stats[2].is_increase());
    }

    #[test]
    fn test_activity_has_one_failure() {
        let failures: Vec<_> = recent_activity()
            .into_iter()
            .filter(|a| !a.status.is_success())
            .collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].endpoint, "/api/rewrite");
        assert_eq!(failures[0].response_time, "timeout");
    }

    #[test]
    fn test_form_defaults_and_connection_test() {
        let form = ApiTestForm::default();
        assert_eq!(form.endpoint, "/api/summarize");
        assert!(form.api_key.is_empty());
        assert_eq!(form.test_connection(), Notification::api_test_successful());

        let form = ApiTestForm {
            api_key: "sk-test".to_string(),
            endpoint: "/api/nowhere".to_string(),
        };
        assert_eq!(form.test_connection(), Notification::api_test_successful());
    }

    #[test]
    fn test_default_tab() {
        assert_eq!(PortalTab::default(), PortalTab::Test);
        assert_eq!(PortalTab::Analytics.label(), "Analytics");
    }

    #[test]
    fn test_request_example_is_json() {
        let value: serde_json::Value = serde_json::from_str(&request_example()).unwrap();
        assert_eq!(value["text"], "Your content here");
        assert_eq!(value["options"]["length"], "medium");
    }
}
