//! Dashboard Page
//!
//! Emotional-state readings, the text-preview simulator and the
//! "How It Works" panel.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use neurolens::dashboard::{emotional_state, how_it_works, FOLLOW_UP_ACTIONS};
use neurolens::simulator::PROCESSING_DELAY_MS;
use neurolens::{DashboardSession, RetentionPercent, Sentiment, SimulationOutput};

use crate::components::InlineLoading;
use crate::random::BrowserRandom;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    // Page-scoped: disposed with the page, which drops any late completion
    let session = create_rw_signal(DashboardSession::new());

    view! {
        <div class="container mx-auto px-4 py-12 max-w-6xl">
            <div class="text-center mb-12">
                <h1 class="text-4xl md:text-5xl font-bold gradient-text mb-4">
                    "Interactive AI Dashboard"
                </h1>
                <p class="text-gray-400 text-lg">
                    "Experience emotion-aware text processing and mindful content summarization"
                </p>
            </div>

            <EmotionalState />

            <div class="grid md:grid-cols-2 gap-6">
                <InputPanel session=session />
                <OutputPanel session=session />
            </div>

            <HowItWorks />
        </div>
    }
}

/// The three static reading cards
#[component]
fn EmotionalState() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-6 mb-8">
            {emotional_state().into_iter().map(|reading| view! {
                <div class="p-6 rounded-xl glass border border-gray-800">
                    <div class="flex items-center justify-between mb-4">
                        <div class="flex items-center space-x-2">
                            <span>{reading.kind.icon()}</span>
                            <h3 class="font-semibold">{reading.kind.label()}</h3>
                        </div>
                        <span class="px-2 py-0.5 rounded-full text-xs border border-gray-700">
                            {format!("{}%", reading.percent)}
                        </span>
                    </div>
                    <div class="h-2 bg-gray-800 rounded-full overflow-hidden">
                        <div
                            class=format!("h-full transition-all duration-1000 {}", reading.kind.bar_class())
                            style=reading.bar_width()
                        />
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn InputPanel(session: RwSignal<DashboardSession>) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let processing = create_memo(move |_| session.with(|s| s.is_processing()));
    let retention = create_memo(move |_| session.with(|s| s.retention()));

    let on_run = move |_| {
        let pending = match session.try_update(|s| s.begin()) {
            Some(Ok(pending)) => pending,
            Some(Err(e)) => {
                state.notify(e.notification());
                return;
            }
            None => return,
        };

        spawn_local(async move {
            TimeoutFuture::new(PROCESSING_DELAY_MS).await;
            let output = pending.resolve(&mut BrowserRandom);
            web_sys::console::debug_1(
                &format!("preview ready: {} ({})", output.preview, output.sentiment).into(),
            );
            if let Some(notice) = session.try_update(|s| s.complete(output)) {
                state.notify(notice);
            }
        });
    };

    view! {
        <section class="p-6 rounded-xl glass border border-gray-800">
            <div class="flex items-center space-x-2 mb-4">
                <span class="text-primary-400">"📄"</span>
                <h2 class="text-xl font-semibold">"Input Text"</h2>
            </div>

            <div class="space-y-4">
                <div>
                    <label for="input-text" class="block text-sm text-gray-300">
                        "Enter content to analyze"
                    </label>
                    <textarea
                        id="input-text"
                        placeholder="Paste your article, email, or any text content here..."
                        prop:value=move || session.with(|s| s.text().to_string())
                        on:input=move |ev| session.update(|s| s.set_text(event_target_value(&ev)))
                        class="w-full min-h-[200px] mt-2 bg-gray-900/60 rounded-lg px-4 py-3
                               border border-gray-700 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label for="summary-length" class="block text-sm text-gray-300">
                        {move || format!("Summary Length: {}", retention.get())}
                    </label>
                    <input
                        id="summary-length"
                        type="range"
                        min=RetentionPercent::MIN.to_string()
                        max=RetentionPercent::MAX.to_string()
                        step=RetentionPercent::STEP.to_string()
                        prop:value=move || retention.get().get().to_string()
                        on:input=move |ev| {
                            let raw = event_target_value(&ev).parse::<i64>().unwrap_or_default();
                            session.update(|s| s.set_retention(RetentionPercent::snapped(raw)));
                        }
                        class="w-full mt-2 accent-primary-500"
                    />
                </div>

                <button
                    on:click=on_run
                    disabled=move || processing.get()
                    class="w-full flex items-center justify-center space-x-2 px-4 py-3
                           bg-primary-600 hover:bg-primary-700 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || {
                        if processing.get() {
                            view! {
                                <InlineLoading />
                                <span>"Processing..."</span>
                            }.into_view()
                        } else {
                            view! { <span>"✨ Analyze & Summarize"</span> }.into_view()
                        }
                    }}
                </button>
            </div>
        </section>
    }
}

#[component]
fn OutputPanel(session: RwSignal<DashboardSession>) -> impl IntoView {
    let output = create_memo(move |_| session.with(|s| s.output().cloned()));

    view! {
        <section class="p-6 rounded-xl glass border border-gray-800">
            <div class="flex items-center justify-between mb-4">
                <div class="flex items-center space-x-2">
                    <span class="text-emerald-400">"✨"</span>
                    <h2 class="text-xl font-semibold">"AI-Processed Output"</h2>
                </div>
                {move || output.get().map(|out| view! { <SentimentBadge sentiment=out.sentiment /> })}
            </div>

            {move || match output.get() {
                Some(out) => view! { <PreviewResult output=out /> }.into_view(),
                None => view! {
                    <div class="flex items-center justify-center min-h-[200px] border-2 border-dashed border-gray-800 rounded-lg">
                        <div class="text-center">
                            <div class="text-5xl text-gray-600 mb-3">"✨"</div>
                            <p class="text-gray-400">"Your processed content will appear here"</p>
                        </div>
                    </div>
                }.into_view(),
            }}
        </section>
    }
}

#[component]
fn PreviewResult(output: SimulationOutput) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div class="p-4 rounded-lg bg-gray-900/60 border border-gray-800 min-h-[200px]">
                <p class="leading-relaxed whitespace-pre-wrap">{output.preview}</p>
            </div>
            <div class="flex gap-2">
                {FOLLOW_UP_ACTIONS.into_iter().map(|action| view! {
                    <button class="flex-1 px-3 py-2 text-sm border border-gray-700 hover:bg-gray-800 rounded-lg transition-colors">
                        {action}
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SentimentBadge(sentiment: Sentiment) -> impl IntoView {
    let tone = match sentiment {
        Sentiment::Positive => "text-emerald-400",
        Sentiment::Neutral => "text-gray-400",
        Sentiment::Negative => "text-red-400",
    };

    view! {
        <div class="flex items-center space-x-2">
            <span class=format!("text-xl {}", tone)>{sentiment.icon()}</span>
            <span class="px-2 py-0.5 rounded-full text-xs border border-gray-700 capitalize">
                {sentiment.label()}
            </span>
        </div>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section class="mt-6 p-6 rounded-xl glass border border-gray-800">
            <h3 class="text-lg font-semibold mb-3">"How It Works"</h3>
            <div class="grid md:grid-cols-3 gap-4 text-sm text-gray-400">
                {how_it_works().into_iter().map(|(step, detail)| view! {
                    <div>
                        <span class="font-semibold text-white">{step}</span>
                        " "
                        {detail}
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
