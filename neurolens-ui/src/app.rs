//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, Developer, Landing};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-950 text-white flex flex-col">
                <Nav />

                <main class="flex-1 pt-16">
                    <Routes>
                        <Route path="/" view=Landing />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/developer" view=Developer />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center px-4">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">
                "No page at "
                <code class="text-primary-400">{move || location.pathname.get()}</code>
            </p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Return to Home"
            </A>
        </div>
    }
}
