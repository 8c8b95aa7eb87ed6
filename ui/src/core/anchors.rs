//! Named page sections the header can navigate to.

use serde::{Deserialize, Serialize};

/// Navigable sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorId {
    #[default]
    Home,
    Web,
    Mobile,
    Digital,
    Tech,
}

impl AnchorId {
    /// Declared order; the tracker scans anchors in this order.
    pub const ALL: [AnchorId; 5] = [
        AnchorId::Home,
        AnchorId::Web,
        AnchorId::Mobile,
        AnchorId::Digital,
        AnchorId::Tech,
    ];

    /// Element id (and URL fragment without `#`).
    pub fn id(self) -> &'static str {
        match self {
            AnchorId::Home => "home",
            AnchorId::Web => "web",
            AnchorId::Mobile => "mobile",
            AnchorId::Digital => "digital",
            AnchorId::Tech => "tech",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Dictionary path of the menu label.
    pub fn label_path(self) -> String {
        format!("header.{}", self.id())
    }

    /// Parse a fragment such as `#web` or `web`.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        AnchorId::ALL.into_iter().find(|anchor| anchor.id() == id)
    }
}

/// Vertical extent of a rendered section, relative to the viewport
/// (the shape `getBoundingClientRect` reports).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub top: f64,
    pub bottom: f64,
}

impl AnchorRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// `top <= y < bottom`.
    pub fn straddles(&self, y: f64) -> bool {
        self.top <= y && y < self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_resolve_with_or_without_hash() {
        assert_eq!(AnchorId::from_fragment("#digital"), Some(AnchorId::Digital));
        assert_eq!(AnchorId::from_fragment("tech"), Some(AnchorId::Tech));
        assert_eq!(AnchorId::from_fragment("#contact"), None);
        assert_eq!(AnchorId::from_fragment(""), None);
    }

    #[test]
    fn straddle_is_half_open() {
        let rect = AnchorRect::new(100.0, 200.0);
        assert!(rect.straddles(100.0));
        assert!(rect.straddles(199.9));
        assert!(!rect.straddles(200.0));
        assert!(!rect.straddles(99.9));
    }

    #[test]
    fn menu_labels_resolve_in_both_languages() {
        use crate::i18n::{lookup, Language};
        for anchor in AnchorId::ALL {
            for lang in Language::ALL {
                let path = anchor.label_path();
                assert_ne!(lookup(lang, &path), path, "{lang} lacks {path}");
            }
        }
    }
}
