//! Language context for the component tree.
//!
//! `LanguageProvider` owns the [`LanguageStore`] in a signal and exposes it as
//! a [`LanguageContext`]. The store is initialized after mount, so the first
//! render always uses the default language and switch controls render a
//! placeholder until then.

use dioxus::prelude::*;

use crate::core::error::LanguageError;
use crate::core::language::{Hydration, LanguageStore};
use crate::core::platform::CookieHost;
use crate::i18n::Language;
use crate::t;

/// Copyable handle to the language store.
#[derive(Clone, Copy, PartialEq)]
pub struct LanguageContext {
    store: Signal<LanguageStore<CookieHost>>,
}

impl LanguageContext {
    pub fn hydration(&self) -> Hydration<Language> {
        self.store.read().state()
    }

    /// Active language (the default until hydrated). Subscribes the caller.
    pub fn current(&self) -> Language {
        self.store.read().current()
    }

    pub fn is_ready(&self) -> bool {
        self.store.read().is_ready()
    }

    pub fn set_language(&mut self, code: &str) -> Result<Language, LanguageError> {
        let lang = self.store.write().set_language(code)?;
        tracing::info!(lang = %lang, "language switched");
        Ok(lang)
    }
}

pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>()
}

#[component]
pub fn LanguageProvider(children: Element) -> Element {
    let mut store = use_signal(|| LanguageStore::new(CookieHost));
    use_context_provider(|| LanguageContext { store });

    use_effect(move || {
        store.write().initialize();
    });

    rsx! { {children} }
}

/// `EN | ID` toggle. Inert until the preference has been read.
#[component]
pub fn LanguageSwitcher(#[props(default)] class: String) -> Element {
    let mut language = use_language();

    let Hydration::Ready(current) = language.hydration() else {
        return rsx! {
            div { class: "lang-switcher lang-switcher--pending {class}", aria_hidden: "true",
                for lang in Language::ALL {
                    span { key: "{lang}", class: "lang-switcher__option", {lang.label()} }
                }
            }
        };
    };

    rsx! {
        div {
            class: "lang-switcher {class}",
            role: "group",
            aria_label: t!(current, "header-language"),
            for lang in Language::ALL {
                button {
                    key: "{lang}",
                    r#type: "button",
                    class: if lang == current { "lang-switcher__option lang-switcher__option--active" } else { "lang-switcher__option" },
                    aria_pressed: if lang == current { "true" } else { "false" },
                    title: match lang {
                        Language::En => t!(current, "header-switchEn"),
                        Language::Id => t!(current, "header-switchId"),
                    },
                    onclick: move |_| {
                        if let Err(err) = language.set_language(lang.code()) {
                            tracing::warn!(%err, "language switch rejected");
                        }
                    },
                    {lang.label()}
                }
            }
        }
    }
}
