//! Language preference store.
//!
//! The store starts [`Hydration::Uninitialized`] so the first render matches
//! what a server would produce; [`LanguageStore::initialize`] then reads the
//! persisted preference and flips it to `Ready`. Persistence goes through a
//! [`PreferenceHost`] (a cookie in the browser, [`MemoryHost`] in tests).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::error::{LanguageError, StorageError};
use crate::config::{LANGUAGE_COOKIE, LANGUAGE_COOKIE_MAX_AGE_SECS};
use crate::i18n::Language;

/// Value that only becomes meaningful after the client has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hydration<T> {
    #[default]
    Uninitialized,
    Ready(T),
}

impl<T: Copy> Hydration<T> {
    pub fn ready(&self) -> Option<T> {
        match self {
            Hydration::Ready(value) => Some(*value),
            Hydration::Uninitialized => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Hydration::Ready(_))
    }
}

/// Durable storage for small string preferences plus the document language.
pub trait PreferenceHost {
    fn read_preference(&self, name: &str) -> Result<Option<String>, StorageError>;

    fn write_preference(&self, name: &str, value: &str, max_age_secs: u64) -> Result<(), StorageError>;

    /// Reflect the active language on the root element (`<html lang>`).
    fn apply_document_language(&self, lang: Language);
}

#[derive(Debug, Clone)]
pub struct LanguageStore<H> {
    host: H,
    state: Hydration<Language>,
}

impl<H: PreferenceHost> LanguageStore<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: Hydration::Uninitialized,
        }
    }

    pub fn state(&self) -> Hydration<Language> {
        self.state
    }

    /// Active language; the default while uninitialized.
    pub fn current(&self) -> Language {
        self.state.ready().unwrap_or_default()
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Load the persisted preference. Idempotent: later calls return the
    /// current language untouched.
    pub fn initialize(&mut self) -> Language {
        if let Hydration::Ready(lang) = self.state {
            return lang;
        }
        let lang = match self.host.read_preference(LANGUAGE_COOKIE) {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|err| {
                tracing::debug!(%err, "ignoring stored language");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(err) => {
                tracing::warn!(%err, "language preference unreadable");
                Language::default()
            }
        };
        self.state = Hydration::Ready(lang);
        self.host.apply_document_language(lang);
        tracing::debug!(lang = %lang, "language initialized");
        lang
    }

    /// Switch to `code` and persist it. Unsupported codes leave the state
    /// unchanged. A storage failure is logged; the switch still applies.
    pub fn set_language(&mut self, code: &str) -> Result<Language, LanguageError> {
        let lang = Language::from_code(code)?;
        self.state = Hydration::Ready(lang);
        if let Err(err) =
            self.host
                .write_preference(LANGUAGE_COOKIE, lang.code(), LANGUAGE_COOKIE_MAX_AGE_SECS)
        {
            tracing::warn!(%err, lang = %lang, "language preference not persisted");
        }
        self.host.apply_document_language(lang);
        Ok(lang)
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

/// Value of cookie `name` in a `document.cookie` string.
pub fn parse_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// `document.cookie` assignment persisting `name` site-wide.
pub fn format_cookie(name: &str, value: &str, max_age_secs: u64) -> String {
    format!("{name}={value}; path=/; max-age={max_age_secs}")
}

/// In-memory host. Clones share storage, which lets a test simulate a reload
/// by building a second store over the same host.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    values: Rc<RefCell<HashMap<String, String>>>,
    document_language: Rc<RefCell<Option<Language>>>,
    unavailable: bool,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose reads and writes always fail.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_value(name: &str, value: &str) -> Self {
        let host = Self::default();
        host.values.borrow_mut().insert(name.to_string(), value.to_string());
        host
    }

    pub fn value(&self, name: &str) -> Option<String> {
        self.values.borrow().get(name).cloned()
    }

    pub fn document_language(&self) -> Option<Language> {
        *self.document_language.borrow()
    }
}

impl PreferenceHost for MemoryHost {
    fn read_preference(&self, name: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.value(name))
    }

    fn write_preference(&self, name: &str, value: &str, _max_age_secs: u64) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.values.borrow_mut().insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn apply_document_language(&self, lang: Language) {
        *self.document_language.borrow_mut() = Some(lang);
    }
}
