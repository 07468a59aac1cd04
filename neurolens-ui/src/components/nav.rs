//! Navigation Component
//!
//! Fixed header with logo, route links and the mobile menu.

use leptos::*;
use leptos_router::*;
use neurolens::landing::PRODUCT_NAME;
use neurolens::site::{is_active, MobileMenu};
use neurolens::Route;

use crate::state::global::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let location = use_location();

    // Close the mobile menu whenever the route changes
    create_effect(move |_| {
        location.pathname.track();
        state.menu.update(MobileMenu::close);
    });

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 glass border-b border-gray-800">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href=Route::Landing.path() class="flex items-center space-x-2">
                        <span class="text-2xl">"🧠"</span>
                        <span class="text-xl font-bold gradient-text">{PRODUCT_NAME}</span>
                    </A>

                    // Desktop links
                    <div class="hidden md:flex items-center space-x-8">
                        {Route::ALL.into_iter().map(|route| view! { <NavLink route=route /> }).collect_view()}
                        <GetStarted />
                    </div>

                    <button
                        class="md:hidden p-2 text-gray-300 hover:text-primary-400 transition-colors"
                        aria-label="Toggle menu"
                        on:click=move |_| state.menu.update(MobileMenu::toggle)
                    >
                        {move || if state.menu.get().is_open() { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show when=move || state.menu.get().is_open()>
                    <div class="md:hidden py-4 border-t border-gray-800">
                        <div class="flex flex-col space-y-4">
                            {Route::ALL.into_iter().map(|route| view! { <MobileLink route=route /> }).collect_view()}
                            <div class="px-4">
                                <GetStarted />
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

/// Desktop navigation link with an underline when active
#[component]
fn NavLink(route: Route) -> impl IntoView {
    let location = use_location();
    let active = move || is_active(route, &location.pathname.get());

    view! {
        <A
            href=route.path()
            class=move || {
                if active() {
                    "relative py-2 text-primary-400 font-medium border-b-2 border-primary-500"
                } else {
                    "relative py-2 text-gray-400 hover:text-white transition-colors"
                }
            }
        >
            {route.label()}
        </A>
    }
}

/// Mobile menu entry; clicking it closes the menu
#[component]
fn MobileLink(route: Route) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let location = use_location();
    let active = move || is_active(route, &location.pathname.get());

    view! {
        <div on:click=move |_| state.menu.update(MobileMenu::close)>
            <A
                href=route.path()
                class=move || {
                    if active() {
                        "block px-4 py-2 rounded-lg bg-primary-500/10 text-primary-400 font-medium"
                    } else {
                        "block px-4 py-2 rounded-lg text-gray-400 hover:bg-gray-800 hover:text-white transition-colors"
                    }
                }
            >
                {route.label()}
            </A>
        </div>
    }
}

#[component]
fn GetStarted() -> impl IntoView {
    view! {
        <button class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm font-medium transition-colors">
            "Get Started"
        </button>
    }
}
