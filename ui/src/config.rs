//! Tunables for scrolling, localization and decorative effects.
//!
//! Every magic number the page depends on lives here so components never
//! hard-code pixel margins or timings. All structs are `Copy` and cheap to pass
//! into hooks and browser callbacks.

use serde::{Deserialize, Serialize};

pub const BRAND: &str = "MegaLS";
pub const COMPANY_NAME: &str = "PT Mega Lentera Solusi";
pub const CONTACT_EMAIL: &str = "hello@megalenterasolusi.id";
pub const CONTACT_PHONE: &str = "+62 812 3456 7890";
pub const CONTACT_WHATSAPP_URL: &str = "https://wa.me/6281234567890";

/// Cookie holding the persisted language preference.
pub const LANGUAGE_COOKIE: &str = "lang";

/// One year, in seconds.
pub const LANGUAGE_COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// Scroll tracking and navigation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Gap between the header's bottom edge and the detection line (px).
    pub detection_margin: f64,
    /// Tolerance for the bottom-of-document override (px).
    pub bottom_epsilon: f64,
    /// Extra space added below the measured header height (px).
    pub header_margin: f64,
    /// Header height assumed when no `<header>` is rendered (px).
    pub header_fallback_height: f64,
    /// Scroll distance after which the header turns opaque (px).
    pub scrolled_threshold: f64,
    /// Default navigation duration (seconds).
    pub default_duration_secs: f64,
    /// Duration used by header menu clicks (seconds).
    pub menu_duration_secs: f64,
    /// Duration used by the deep-link navigation on load (seconds).
    pub deep_link_duration_secs: f64,
    /// Delay before the deep-link navigation so layout can settle (ms).
    pub deep_link_delay_ms: u32,
    /// Idle time after the last scroll event before `is-scrolling` is removed (ms).
    pub scroll_idle_ms: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            detection_margin: 4.0,
            bottom_epsilon: 2.0,
            header_margin: 8.0,
            header_fallback_height: 80.0,
            scrolled_threshold: 20.0,
            default_duration_secs: 1.6,
            menu_duration_secs: 1.1,
            deep_link_duration_secs: 1.2,
            deep_link_delay_ms: 50,
            scroll_idle_ms: 240,
        }
    }
}

impl ScrollConfig {
    /// Offset that keeps content clear of the fixed header, given its measured
    /// height (`None` when the header is not in the document).
    pub fn header_offset(&self, header_height: Option<f64>) -> f64 {
        header_height.unwrap_or(self.header_fallback_height) + self.header_margin
    }
}

/// Decorative effect settings (cursor, hero tilt, carousels, flash messages).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Lerp factor for the cursor ring.
    pub cursor_follow: f64,
    /// Degrees of tilt per pixel of pointer distance from the viewport centre.
    pub tilt_factor: f64,
    /// CSS perspective applied to tilted cards (px).
    pub perspective_px: f64,
    /// Interval between phone screens in the mobile section (ms).
    pub carousel_interval_ms: u32,
    /// Lifetime of the newsletter success/error message (ms).
    pub flash_message_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            cursor_follow: 0.18,
            tilt_factor: 0.01,
            perspective_px: 1000.0,
            carousel_interval_ms: 3200,
            flash_message_ms: 3000,
        }
    }
}

impl EffectsConfig {
    /// Ring follow factor; reduced motion snaps the ring onto the pointer.
    pub fn cursor_follow_for(&self, prefers_reduced_motion: bool) -> f64 {
        if prefers_reduced_motion {
            1.0
        } else {
            self.cursor_follow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_offset_uses_fallback_height() {
        let cfg = ScrollConfig::default();
        assert_eq!(cfg.header_offset(None), 88.0);
        assert_eq!(cfg.header_offset(Some(64.0)), 72.0);
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let cfg: ScrollConfig = serde_json::from_str(r#"{ "detection_margin": 10.0 }"#).unwrap();
        assert_eq!(cfg.detection_margin, 10.0);
        assert_eq!(cfg.bottom_epsilon, ScrollConfig::default().bottom_epsilon);
    }

    #[test]
    fn reduced_motion_snaps_cursor() {
        let cfg = EffectsConfig::default();
        assert_eq!(cfg.cursor_follow_for(true), 1.0);
        assert_eq!(cfg.cursor_follow_for(false), 0.18);
    }
}
