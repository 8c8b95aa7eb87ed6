//! Shared UI crate for the MegaLS landing page. Core logic, localization,
//! components and page sections live here; `web` only launches it.

pub mod config;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Language store wiring + EN/ID switcher (components/language.rs)
    pub mod language;
    pub use language::{use_language, LanguageContext, LanguageProvider, LanguageSwitcher};

    // Smooth scroll wrapper exposing the navigator (components/smooth_scroll.rs)
    pub mod smooth_scroll;
    pub use smooth_scroll::{ScrollContext, SmoothScroll};

    // Fixed header with active-section tracking (components/header.rs)
    pub mod header;
    pub use header::SiteHeader;

    // Device-width switcher shown in the web section
    pub mod responsive_preview;
    pub use responsive_preview::ResponsivePreview;

    pub mod custom_cursor;
    pub use custom_cursor::CustomCursor;

    pub mod hooks;
}
