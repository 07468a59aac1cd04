//! Loading Component
//!
//! Spinner shown while the simulator is processing.

use leptos::*;

/// Inline spinner for buttons
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}
