//! Developer Portal Page
//!
//! Usage stats, the API testing / configuration / analytics tabs, recent
//! activity and quick links. All data is mock content.

use leptos::*;
use neurolens::portal::{
    analytics_highlights, feature_toggles, quick_links, recent_activity, request_example, stats,
    ApiTestForm, PortalTab,
};

use crate::state::global::GlobalState;

/// Developer portal page component
#[component]
pub fn Developer() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-12 max-w-7xl">
            <div class="mb-12">
                <h1 class="text-4xl md:text-5xl font-bold gradient-text mb-4">"Developer Portal"</h1>
                <p class="text-gray-400 text-lg">
                    "Monitor, test, and configure your NeuroLens AI integration"
                </p>
            </div>

            <StatsGrid />

            <div class="grid lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2">
                    <PortalTabs />
                </div>
                <div class="space-y-6">
                    <RecentActivity />
                    <QuickLinks />
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatsGrid() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
            {stats().into_iter().map(|stat| {
                let badge = if stat.is_increase() {
                    "border-emerald-500/30 text-emerald-400"
                } else {
                    "border-red-500/30 text-red-400"
                };
                view! {
                    <div class="p-6 rounded-xl glass border border-gray-800">
                        <div class="flex items-start justify-between mb-4">
                            <span class="text-xl">{stat.icon}</span>
                            <span class=format!("px-2 py-0.5 rounded-full text-xs border {}", badge)>
                                {stat.change}
                            </span>
                        </div>
                        <p class="text-2xl font-bold mb-1">{stat.value}</p>
                        <p class="text-sm text-gray-400">{stat.label}</p>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn PortalTabs() -> impl IntoView {
    let (tab, set_tab) = create_signal(PortalTab::default());

    view! {
        <section class="rounded-xl glass border border-gray-800">
            <div class="border-b border-gray-800 px-6 pt-6">
                <div class="inline-flex rounded-lg bg-gray-800/60 p-1" role="tablist">
                    {PortalTab::ALL.into_iter().map(|t| view! {
                        <button
                            role="tab"
                            on:click=move |_| set_tab.set(t)
                            class=move || {
                                if tab.get() == t {
                                    "px-4 py-2 rounded-md text-sm bg-primary-500/20 text-white"
                                } else {
                                    "px-4 py-2 rounded-md text-sm text-gray-400 hover:text-white"
                                }
                            }
                        >
                            {t.label()}
                        </button>
                    }).collect_view()}
                </div>
            </div>

            {move || match tab.get() {
                PortalTab::Test => view! { <ApiTesting /> }.into_view(),
                PortalTab::Config => view! { <Configuration /> }.into_view(),
                PortalTab::Analytics => view! { <Analytics /> }.into_view(),
            }}
        </section>
    }
}

#[component]
fn ApiTesting() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let form = create_rw_signal(ApiTestForm::default());

    let on_test = move |_| {
        let notice = form.with(|f| f.test_connection());
        state.notify(notice);
    };

    view! {
        <div class="p-6 space-y-4">
            <div>
                <label for="api-key" class="block text-sm text-gray-300">"API Key"</label>
                <input
                    id="api-key"
                    type="password"
                    placeholder="Enter your API key"
                    prop:value=move || form.with(|f| f.api_key.clone())
                    on:input=move |ev| form.update(|f| f.api_key = event_target_value(&ev))
                    class="w-full mt-2 bg-gray-900/60 rounded-lg px-4 py-2
                           border border-gray-700 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label for="endpoint" class="block text-sm text-gray-300">"Test Endpoint"</label>
                <input
                    id="endpoint"
                    type="text"
                    placeholder=neurolens::portal::DEFAULT_TEST_ENDPOINT
                    prop:value=move || form.with(|f| f.endpoint.clone())
                    on:input=move |ev| form.update(|f| f.endpoint = event_target_value(&ev))
                    class="w-full mt-2 bg-gray-900/60 rounded-lg px-4 py-2
                           border border-gray-700 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div class="bg-gray-900/60 border border-gray-800 rounded-lg p-4">
                <p class="text-sm font-mono text-gray-400 mb-2">"Request Example:"</p>
                <pre class="text-xs overflow-x-auto">{request_example()}</pre>
            </div>

            <button
                on:click=on_test
                class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "⚡ Test API Connection"
            </button>
        </div>
    }
}

#[component]
fn Configuration() -> impl IntoView {
    view! {
        <div class="p-6 space-y-4">
            {feature_toggles().into_iter().map(|toggle| {
                let badge = if toggle.state == "Enabled" {
                    "border-primary-500/30 text-primary-400"
                } else {
                    "border-emerald-500/30 text-emerald-400"
                };
                view! {
                <div class="flex items-center justify-between p-4 bg-gray-900/60 rounded-lg border border-gray-800">
                    <div>
                        <p class="font-semibold">{toggle.name}</p>
                        <p class="text-sm text-gray-400">{toggle.description}</p>
                    </div>
                    <span class=format!("px-2 py-0.5 rounded-full text-xs border {}", badge)>
                        {toggle.state}
                    </span>
                </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn Analytics() -> impl IntoView {
    view! {
        <div class="p-6 space-y-4">
            <div class="h-64 flex items-center justify-center border-2 border-dashed border-gray-800 rounded-lg">
                <div class="text-center">
                    <div class="text-5xl text-gray-600 mb-3">"📊"</div>
                    <p class="text-gray-400">"Analytics Dashboard"</p>
                    <p class="text-sm text-gray-500">"Visual charts coming soon"</p>
                </div>
            </div>
            <div class="grid grid-cols-2 gap-4">
                {analytics_highlights().into_iter().map(|item| view! {
                    <div class="p-4 bg-gray-900/60 rounded-lg border border-gray-800">
                        <p class="text-sm text-gray-400 mb-1">{item.label}</p>
                        <p class="text-2xl font-bold">{item.value}</p>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn RecentActivity() -> impl IntoView {
    view! {
        <section class="p-6 rounded-xl glass border border-gray-800">
            <h3 class="text-lg font-semibold mb-4">"Recent Activity"</h3>
            <div class="space-y-3">
                {recent_activity().into_iter().map(|entry| {
                    let (icon, tone) = if entry.status.is_success() {
                        ("✓", "text-emerald-400")
                    } else {
                        ("⚠", "text-red-400")
                    };
                    view! {
                        <div class="p-3 bg-gray-900/40 rounded-lg border border-gray-800">
                            <div class="flex items-start justify-between mb-2">
                                <code class="text-xs text-primary-400">{entry.endpoint}</code>
                                <span class=tone>{icon}</span>
                            </div>
                            <div class="flex items-center justify-between text-xs text-gray-400">
                                <span>{entry.age}</span>
                                <span class=tone>{entry.response_time}</span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn QuickLinks() -> impl IntoView {
    view! {
        <section class="p-6 rounded-xl glass border border-gray-800">
            <h3 class="text-lg font-semibold mb-4">"Quick Links"</h3>
            <div class="space-y-2">
                {quick_links().into_iter().map(|link| view! {
                    <button class="w-full flex items-center justify-between px-4 py-2 border border-gray-700 hover:bg-gray-800 rounded-lg transition-colors">
                        <span>{link.label}</span>
                        <span>"↗"</span>
                    </button>
                }).collect_view()}
            </div>
        </section>
    }
}
