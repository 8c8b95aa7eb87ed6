//! Device switcher state for the web section's responsive mock-up.

use serde::{Deserialize, Serialize};

/// Simulated device width in the preview canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewViewport {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl PreviewViewport {
    /// Toolbar order.
    pub const ALL: [PreviewViewport; 3] = [
        PreviewViewport::Desktop,
        PreviewViewport::Tablet,
        PreviewViewport::Mobile,
    ];

    /// Dictionary path of the toolbar label.
    pub fn label_path(self) -> &'static str {
        match self {
            PreviewViewport::Desktop => "web.preview.desktop",
            PreviewViewport::Tablet => "web.preview.tablet",
            PreviewViewport::Mobile => "web.preview.mobile",
        }
    }

    /// Class fixing the canvas width (full, 768px, 360px).
    pub fn width_class(self) -> &'static str {
        match self {
            PreviewViewport::Desktop => "preview__frame preview__frame--desktop",
            PreviewViewport::Tablet => "preview__frame preview__frame--tablet",
            PreviewViewport::Mobile => "preview__frame preview__frame--mobile",
        }
    }

    /// Grid layout of the placeholder cards (3, 2 and 1 columns).
    pub fn grid_class(self) -> &'static str {
        match self {
            PreviewViewport::Desktop => "preview__grid preview__grid--3",
            PreviewViewport::Tablet => "preview__grid preview__grid--2",
            PreviewViewport::Mobile => "preview__grid preview__grid--1",
        }
    }

    pub fn card_count(self) -> usize {
        match self {
            PreviewViewport::Desktop => 12,
            PreviewViewport::Tablet => 8,
            PreviewViewport::Mobile => 10,
        }
    }

    pub fn toggle_class(self, selected: PreviewViewport) -> &'static str {
        if self == selected {
            "preview__toggle preview__toggle--active"
        } else {
            "preview__toggle"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{lookup, Language};

    #[test]
    fn starts_on_desktop() {
        assert_eq!(PreviewViewport::default(), PreviewViewport::Desktop);
        assert_eq!(PreviewViewport::ALL[0], PreviewViewport::Desktop);
    }

    #[test]
    fn each_device_has_its_own_layout() {
        let counts: Vec<_> = PreviewViewport::ALL.iter().map(|v| v.card_count()).collect();
        assert_eq!(counts, [12, 8, 10]);
        assert!(PreviewViewport::Tablet.width_class().ends_with("--tablet"));
        assert!(PreviewViewport::Mobile.grid_class().ends_with("--1"));
    }

    #[test]
    fn only_selected_toggle_is_active() {
        let selected = PreviewViewport::Tablet;
        let active: Vec<_> = PreviewViewport::ALL
            .into_iter()
            .filter(|v| v.toggle_class(selected).contains("--active"))
            .collect();
        assert_eq!(active, [PreviewViewport::Tablet]);
    }

    #[test]
    fn labels_are_translated() {
        for viewport in PreviewViewport::ALL {
            for lang in Language::ALL {
                assert_ne!(lookup(lang, viewport.label_path()), viewport.label_path());
            }
        }
        assert_eq!(lookup(Language::Id, PreviewViewport::Mobile.label_path()), "Ponsel");
    }
}
