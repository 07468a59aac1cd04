//! Toast Notification Component
//!
//! Renders the notification held in global state.

use leptos::*;
use neurolens::Notification;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || {
                state.current_toast().map(|notification| view! {
                    <ToastMessage notification=notification on_close=move |_| state.dismiss_toast() />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(
    notification: Notification,
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let (icon, bg_class) = if notification.is_destructive() {
        ("✕", "bg-red-600")
    } else {
        ("✓", "bg-gray-800 border border-gray-700")
    };

    view! {
        <div
            role="status"
            class=format!(
                "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                 max-w-sm transform transition-all duration-300 ease-out",
                bg_class
            )
        >
            <span class="text-lg">{icon}</span>
            <div class="flex-1">
                <p class="text-sm font-semibold">{notification.title}</p>
                <p class="text-sm opacity-90">{notification.description}</p>
            </div>
            <button
                class="text-white/70 hover:text-white"
                aria-label="Dismiss"
                on:click=move |_| on_close.call(())
            >
                "×"
            </button>
        </div>
    }
}
