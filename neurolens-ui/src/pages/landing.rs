//! Landing Page
//!
//! Hero, feature catalogue, use cases, privacy section and call to action.

use leptos::*;
use leptos_router::*;
use neurolens::landing::{
    ai_stack, features, headline_stats, privacy_points, use_cases, FOOTER_NOTE, HERO_BADGE,
    HERO_COPY, PRODUCT_NAME, TAGLINE,
};
use neurolens::Route;

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div>
            <Hero />
            <Features />
            <UseCases />
            <Privacy />
            <CallToAction />
            <Footer />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="pt-24 pb-20">
            <div class="container mx-auto px-4 max-w-4xl text-center">
                <span class="inline-block mb-6 px-3 py-1 rounded-full text-sm bg-primary-500/10 text-primary-400 border border-primary-500/20">
                    "✨ " {HERO_BADGE}
                </span>
                <h1 class="text-5xl md:text-7xl font-bold mb-6">
                    <span class="gradient-text">{PRODUCT_NAME}</span>
                    <br />
                    <span>{TAGLINE}</span>
                </h1>
                <p class="text-xl text-gray-400 mb-8 leading-relaxed">{HERO_COPY}</p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                    <PrimaryLink href=Route::Dashboard.path() label="Try Live Demo →" />
                    <OutlineLink href=Route::Developer.path() label="Developer Portal" />
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-6 max-w-3xl mx-auto">
                    {headline_stats().into_iter().map(|stat| view! {
                        <div class="text-center">
                            <div class="text-3xl font-bold gradient-text mb-1">{stat.value}</div>
                            <div class="text-sm text-gray-400">{stat.label}</div>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="container mx-auto px-4">
                <SectionHeading
                    lead="Multimodal AI "
                    highlight="Intelligence"
                    sub="Powered by Chrome's Gemini Nano, running entirely on your device"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 max-w-6xl mx-auto">
                    {features().into_iter().map(|feature| view! {
                        <div class="p-6 rounded-xl glass border border-gray-800 hover:border-primary-500/40 transition-colors">
                            <div class=format!("text-3xl mb-4 {}", feature.accent.text_class())>
                                {feature.icon}
                            </div>
                            <h3 class="text-xl font-semibold mb-2">{feature.title}</h3>
                            <p class="text-gray-400">{feature.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn UseCases() -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="container mx-auto px-4">
                <SectionHeading
                    lead="Real-World "
                    highlight="Impact"
                    sub="Solving digital wellness challenges for millions of users"
                />
                <div class="grid md:grid-cols-2 gap-6 max-w-4xl mx-auto">
                    {use_cases().into_iter().map(|case| view! {
                        <div class="p-8 rounded-xl glass border border-gray-800">
                            <div class="text-3xl mb-4">{case.icon}</div>
                            <h3 class="text-2xl font-semibold mb-3">{case.title}</h3>
                            <p class="text-gray-400">{case.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Privacy() -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="container mx-auto px-4">
                <div class="max-w-5xl mx-auto p-12 rounded-xl glass border border-gray-800 grid md:grid-cols-2 gap-12">
                    <div>
                        <div class="text-5xl mb-6">"🛡"</div>
                        <h3 class="text-3xl font-bold mb-4">
                            "Privacy-First " <span class="gradient-text">"Architecture"</span>
                        </h3>
                        <ul class="space-y-3">
                            {privacy_points().into_iter().map(|point| view! {
                                <li class="flex items-start space-x-3">
                                    <span class="text-emerald-400">"✓"</span>
                                    <span class="text-gray-400">{point}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                    <div>
                        <div class="text-5xl mb-6">"⚡"</div>
                        <h3 class="text-3xl font-bold mb-4">
                            "Built-in " <span class="gradient-text">"AI Stack"</span>
                        </h3>
                        <div class="space-y-4">
                            {ai_stack().into_iter().map(|entry| view! {
                                <div class="p-4 rounded-lg bg-gray-900/60 border border-gray-800">
                                    <p class="font-semibold mb-1">{entry.name}</p>
                                    <p class="text-sm text-gray-400">{entry.purpose}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto p-12 text-center rounded-xl glass border border-gray-800">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "Ready to Transform Your " <span class="gradient-text">"Browsing?"</span>
                    </h2>
                    <p class="text-xl text-gray-400 mb-8">
                        "Experience the future of emotion-aware, mindful web browsing"
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <PrimaryLink href=Route::Dashboard.path() label="✨ Try Interactive Demo" />
                        <OutlineLink href=Route::Developer.path() label="🧠 Explore API" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-gray-800">
            <div class="container mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-4">
                <div class="flex items-center space-x-2">
                    <span class="text-xl">"🧠"</span>
                    <span class="font-bold gradient-text">{PRODUCT_NAME}</span>
                </div>
                <p class="text-sm text-gray-400">{FOOTER_NOTE}</p>
            </div>
        </footer>
    }
}

#[component]
fn SectionHeading(lead: &'static str, highlight: &'static str, sub: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-4">
                {lead} <span class="gradient-text">{highlight}</span>
            </h2>
            <p class="text-xl text-gray-400 max-w-2xl mx-auto">{sub}</p>
        </div>
    }
}

#[component]
fn PrimaryLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-8 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg text-lg font-medium transition-colors"
        >
            {label}
        </A>
    }
}

#[component]
fn OutlineLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-8 py-3 border border-gray-700 hover:bg-gray-800 rounded-lg text-lg font-medium transition-colors"
        >
            {label}
        </A>
    }
}
