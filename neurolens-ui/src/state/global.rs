//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use neurolens::{MobileMenu, Notification, ToastSlot};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// The toast currently on screen
    pub toast: RwSignal<ToastSlot>,
    /// Mobile navigation menu
    pub menu: RwSignal<MobileMenu>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        toast: create_rw_signal(ToastSlot::new()),
        menu: create_rw_signal(MobileMenu::default()),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a notification (auto-clears after its display time)
    pub fn notify(&self, notification: Notification) {
        let delay = notification.display_ms();
        let Some(ticket) = self.toast.try_update(|slot| slot.show(notification)) else {
            return;
        };

        let toast = self.toast;
        gloo_timers::callback::Timeout::new(delay, move || {
            toast.try_update(|slot| slot.dismiss(ticket));
        })
        .forget();
    }

    /// The visible notification, if any
    pub fn current_toast(&self) -> Option<Notification> {
        self.toast.with(|slot| slot.current().cloned())
    }

    /// Hide the visible toast
    pub fn dismiss_toast(&self) {
        self.toast.update(ToastSlot::clear);
    }
}
