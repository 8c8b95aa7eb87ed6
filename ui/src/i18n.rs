//! Internationalization (i18n) support for `megals-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed` (one `FluentLanguageLoader` per supported language)
//! - `i18n-embed-fl` (`fl!` macro: message ids checked at compile time)
//! - `fluent` (the dotted-path [`lookup`] service)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/megals-ui.ftl   (fallback/reference)
//!   id/megals-ui.ftl
//! ```
//!
//! Two ways to get a string:
//! ```ignore
//! use crate::t;
//! let lang = use_language().current();
//! let label = t!(lang, "header-home");            // checked at compile time
//! let label = i18n::lookup(lang, "header.home");  // dynamic, never fails
//! ```
//!
//! Dictionary paths use `.` between segments (`hero.cards.webDesc`); the
//! matching Fluent message id joins the same segments with `-`
//! (`hero-cards-webDesc`). A path that does not resolve to a message comes back
//! unchanged, so a missing string is visible on the page instead of blank.
//!
//! There is no process-wide "current language" here: callers pass the
//! language they got from the language store.
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use fluent::{FluentBundle, FluentResource};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::core::error::LanguageError;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Compile-time checked translation macro.
/// Example:
///     t!(lang, "header-home")
///
/// Expands to `fl!` against the loader of `lang`; unknown ids fail the build.
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the FTL filename).
const DOMAIN: &str = "megals-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Languages the page is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Id];

    /// Wire code used in the cookie and the `<html lang>` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Id => "id",
        }
    }

    /// Short label for the switcher.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Id => "ID",
        }
    }

    /// Parse an exact wire code (`"en"` / `"id"`).
    pub fn from_code(code: &str) -> Result<Self, LanguageError> {
        match code {
            "en" => Ok(Language::En),
            "id" => Ok(Language::Id),
            other => Err(LanguageError::Unsupported(other.to_string())),
        }
    }

    pub fn identifier(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }

    fn index(self) -> usize {
        match self {
            Language::En => 0,
            Language::Id => 1,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

/// One loader per language, used by the `t!` macro.
static LOADERS: Lazy<[FluentLanguageLoader; 2]> =
    Lazy::new(|| Language::ALL.map(build_loader));

fn build_loader(lang: Language) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, Language::default().identifier());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[lang.identifier()]) {
        tracing::warn!(%err, lang = %lang, "failed selecting language; continuing with fallback");
    }
    loader
}

/// Loader for `lang` (consumed by `t!`).
pub fn loader(lang: Language) -> &'static FluentLanguageLoader {
    &LOADERS[lang.index()]
}

type Bundle = FluentBundle<FluentResource>;

thread_local! {
    // Bundles are not `Sync`; the page runs on one thread anyway.
    static BUNDLES: HashMap<Language, Bundle> = Language::ALL
        .into_iter()
        .filter_map(|lang| load_bundle(lang).map(|bundle| (lang, bundle)))
        .collect();
}

fn load_bundle(lang: Language) -> Option<Bundle> {
    let path = format!("{}/{DOMAIN}.ftl", lang.code());
    let Some(file) = Localizations::get(&path) else {
        tracing::warn!(%path, "dictionary not embedded");
        return None;
    };
    let source = String::from_utf8(file.data.into_owned()).ok()?;
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(%path, count = errors.len(), "dictionary has syntax errors");
            resource
        }
    };

    let mut bundle = FluentBundle::new(vec![lang.identifier()]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%path, count = errors.len(), "dictionary has conflicting entries");
    }
    Some(bundle)
}

/// Map a dotted dictionary path to its Fluent message id.
///
/// Returns `None` when any segment is empty or not an identifier
/// (`[A-Za-z][A-Za-z0-9_]*`).
pub fn message_id(path: &str) -> Option<String> {
    let mut id = String::with_capacity(path.len());
    for (index, segment) in path.split('.').enumerate() {
        let mut chars = segment.chars();
        let first = chars.next()?;
        if !first.is_ascii_alphabetic() || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }
        if index > 0 {
            id.push('-');
        }
        id.push_str(segment);
    }
    Some(id)
}

/// Resolve `path` in the dictionary of `lang`, or return `path` unchanged.
pub fn lookup(lang: Language, path: &str) -> String {
    let Some(id) = message_id(path) else {
        return path.to_string();
    };
    BUNDLES
        .with(|bundles| bundles.get(&lang).and_then(|bundle| format_message(bundle, &id)))
        .unwrap_or_else(|| path.to_string())
}

/// Same as [`lookup`] but takes a raw language code; unknown codes return `path`.
pub fn lookup_code(code: &str, path: &str) -> String {
    match Language::from_code(code) {
        Ok(lang) => lookup(lang, path),
        Err(_) => path.to_string(),
    }
}

fn format_message(bundle: &Bundle, id: &str) -> Option<String> {
    let message = bundle.get_message(id)?;
    let pattern = message.value()?;
    let mut errors = Vec::new();
    let text = bundle.format_pattern(pattern, None, &mut errors);
    if !errors.is_empty() {
        tracing::debug!(%id, count = errors.len(), "message formatted with errors");
    }
    Some(text.into_owned())
}

/// List available (embedded) language folders.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_is_embedded() {
        let embedded = available_languages();
        for lang in Language::ALL {
            assert!(embedded.iter().any(|l| l == lang.code()), "missing {lang}");
        }
    }

    #[test]
    fn lookup_resolves_both_languages() {
        assert_eq!(lookup(Language::En, "header.home"), "Home");
        assert_eq!(lookup(Language::Id, "header.home"), "Beranda");
        assert_eq!(lookup(Language::Id, "hero.cards.webDesc"), "Pengembangan Website & Web App");
    }

    #[test]
    fn missing_path_falls_back_to_itself() {
        assert_eq!(lookup(Language::En, "nonexistent.path"), "nonexistent.path");
        assert_eq!(lookup(Language::En, "header.home.extra"), "header.home.extra");
    }

    #[test]
    fn branch_paths_are_not_strings() {
        assert_eq!(lookup(Language::En, "hero.cards"), "hero.cards");
        assert_eq!(lookup(Language::En, "header"), "header");
    }

    #[test]
    fn malformed_paths_fall_back() {
        for path in ["", ".", "header..home", "header.home.", "header-home", "9lives"] {
            assert_eq!(lookup(Language::En, path), path);
        }
    }

    #[test]
    fn lookup_code_rejects_unknown_languages() {
        assert_eq!(lookup_code("id", "header.tech"), "Teknologi");
        assert_eq!(lookup_code("fr", "header.tech"), "header.tech");
    }

    #[test]
    fn message_ids_join_segments_with_dashes() {
        assert_eq!(message_id("hero.cards.webDesc").as_deref(), Some("hero-cards-webDesc"));
        assert_eq!(message_id("footer.send").as_deref(), Some("footer-send"));
        assert_eq!(message_id("a.b-c"), None);
    }

    #[test]
    fn compile_checked_macro_uses_requested_language() {
        assert_eq!(crate::t!(Language::En, "header-contact"), "Contact Us");
        assert_eq!(crate::t!(Language::Id, "header-contact"), "Hubungi Kami");
    }

    #[test]
    fn language_codes_are_exact() {
        assert_eq!(Language::from_code("en"), Ok(Language::En));
        assert_eq!("id".parse::<Language>(), Ok(Language::Id));
        assert!(Language::from_code("EN").is_err());
        assert!(Language::from_code("en-US").is_err());
        assert_eq!(serde_json::to_string(&Language::Id).unwrap(), "\"id\"");
    }
}
