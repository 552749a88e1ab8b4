//! Landing page component
//!
//! Marketing page for Lingua:
//! - SEO meta tags
//! - Hero section with the primary call to action
//! - Feature cards
//! - "How it works" steps
//! - Closing call to action and footer
//!
//! The page also hosts the email capture modal, which reveals itself on a
//! timer or once the visitor scrolls past the hero.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::email_capture::EmailCaptureModal;
use crate::ui::icon::{Icon, icons};
use crate::ui::locale::use_locale;

const FEATURE_ICONS: [&str; 3] = [icons::LIGHTNING, icons::CHAT, icons::REPEAT];

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let locale = use_locale();

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Header />

            // Hero Section
            <section class="min-h-screen flex items-center justify-center relative pt-16">
                <div class="text-center px-4 max-w-4xl mx-auto">
                    <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight landing-fade-in-up">
                        {move || locale.landing_copy().hero_title}
                    </h1>
                    <p class="text-xl sm:text-2xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed
                              landing-fade-in-up landing-delay-200">
                        {move || locale.landing_copy().hero_lead}
                    </p>
                    <a href="#start" class="landing-btn-primary landing-fade-in-up landing-delay-400">
                        {move || locale.landing_copy().cta}
                    </a>

                    // Scroll indicator
                    <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                        <Icon name=icons::CHEVRON_DOWN class="w-6 h-6" />
                    </div>
                </div>
            </section>

            // Features Section
            <section class="py-20 px-4 bg-theme-secondary/10">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary text-center mb-16">
                        {move || locale.landing_copy().features_heading}
                    </h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        {(0..FEATURE_ICONS.len()).map(|i| view! {
                            <FeatureCard
                                icon=FEATURE_ICONS[i]
                                title=Signal::derive(move || locale.landing_copy().features[i].0)
                                description=Signal::derive(move || locale.landing_copy().features[i].1)
                            />
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // How it works
            <section class="py-20 px-4">
                <div class="max-w-3xl mx-auto">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary text-center mb-12">
                        {move || locale.landing_copy().steps_heading}
                    </h2>
                    <ol class="space-y-6">
                        {(0..3).map(|i| view! {
                            <li class="flex items-start gap-4">
                                <span class="w-10 h-10 shrink-0 rounded-full bg-accent-primary/10 flex items-center justify-center font-semibold">
                                    {i + 1}
                                </span>
                                <p class="text-lg text-theme-secondary pt-1.5">
                                    {move || locale.landing_copy().steps[i]}
                                </p>
                            </li>
                        }).collect_view()}
                    </ol>
                </div>
            </section>

            // Closing call to action
            <section id="start" class="py-24 px-4 bg-theme-secondary/10 text-center">
                <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-8">
                    {move || locale.landing_copy().closing_heading}
                </h2>
                <a href="#" class="landing-btn-primary">
                    {move || locale.landing_copy().cta}
                </a>
            </section>

            <Footer />
        </div>

        <EmailCaptureModal />
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="fixed top-0 inset-x-0 z-40 backdrop-blur bg-theme-primary/80 border-b border-theme">
            <div class="max-w-7xl mx-auto px-4 h-16 flex items-center justify-between">
                <a href="/" class="text-xl font-bold text-theme-primary">"Lingua"</a>
                <a href="#start" class="text-sm font-medium text-theme-secondary hover:text-accent-primary">
                    <Icon name=icons::MAIL class="w-5 h-5" />
                </a>
            </div>
        </header>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: Signal<&'static str>,
    description: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-theme-primary p-6 rounded-xl border border-theme transition-all duration-300 hover:shadow-lg">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4">
                <Icon name=icon class="w-6 h-6" />
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{move || title.get()}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{move || description.get()}</p>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Lingua - Learn a language a little every day" />
        <Meta name="description" content="Bite-sized language lessons, real conversations and a study plan that adapts to you." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Lingua - Learn a language a little every day" />
        <Meta property="og:description" content="Bite-sized language lessons, real conversations and a study plan that adapts to you." />
        <Meta property="twitter:card" content="summary_large_image" />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let locale = use_locale();

    view! {
        <footer class="py-12 border-t border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 text-center">
                <span class="text-sm text-theme-tertiary">
                    "© 2025 " {move || locale.landing_copy().footer}
                </span>
            </div>
        </footer>
    }
}
