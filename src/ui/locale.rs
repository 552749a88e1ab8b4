//! Locale context
//!
//! The server always renders English. After hydration the browser's
//! preferred languages pick the table used from then on.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::i18n::{CaptureCopy, LandingCopy, Locale};

/// Reactive UI locale
#[derive(Clone, Copy)]
pub struct LocaleContext {
    pub locale: RwSignal<Locale>,
}

impl LocaleContext {
    pub fn capture_copy(&self) -> &'static CaptureCopy {
        self.locale.get().capture_copy()
    }

    pub fn landing_copy(&self) -> &'static LandingCopy {
        self.locale.get().landing_copy()
    }
}

/// Browser language preferences, most preferred first
fn browser_language_tags() -> Vec<String> {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            let navigator = window.navigator();
            let tags: Vec<String> = navigator
                .languages()
                .iter()
                .filter_map(|v| v.as_string())
                .collect();
            if !tags.is_empty() {
                return tags;
            }
            if let Some(tag) = navigator.language() {
                return vec![tag];
            }
        }
    }
    Vec::new()
}

/// Provide locale context to the application
pub fn provide_locale_context() -> LocaleContext {
    let ctx = LocaleContext {
        locale: RwSignal::new(Locale::default()),
    };

    // Effects only run in the browser, after hydration
    Effect::new(move |_| {
        let preferred = Locale::negotiate(browser_language_tags());
        ctx.locale.set(preferred);
    });

    provide_context(ctx);
    ctx
}

/// Use locale context from anywhere in the component tree
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("LocaleContext should be provided")
}
