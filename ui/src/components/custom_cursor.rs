use dioxus::prelude::*;

use super::hooks::use_browser_resource;
use crate::config::EffectsConfig;
use crate::core::platform::{self, CursorDriver, CURSOR_DOT_ID, CURSOR_RING_ID};

/// Dot + trailing ring cursor. Only mounted on fine pointers, after hydration.
#[component]
pub fn CustomCursor() -> Element {
    let mut enabled = use_signal(|| false);
    use_effect(move || {
        if platform::has_fine_pointer() {
            enabled.set(true);
        }
    });

    rsx! {
        if enabled() {
            CursorLayers {}
        }
    }
}

#[component]
fn CursorLayers() -> Element {
    use_browser_resource("custom-cursor", || {
        let follow = EffectsConfig::default().cursor_follow_for(platform::prefers_reduced_motion());
        CursorDriver::attach(follow)
    });

    rsx! {
        div { id: CURSOR_RING_ID, class: "cursor-ring", aria_hidden: "true" }
        div { id: CURSOR_DOT_ID, class: "cursor-dot", aria_hidden: "true" }
    }
}
