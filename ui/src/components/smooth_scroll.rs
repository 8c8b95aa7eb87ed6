//! Page-wide smooth scrolling.
//!
//! `SmoothScroll` creates one [`PageNavigator`] for the lifetime of the page,
//! shares it through [`ScrollContext`], honours a `#section` deep link on load
//! and tears the navigator down on unmount. Components that render outside the
//! wrapper get no context and fall back to native scrolling.

use dioxus::prelude::*;

use super::custom_cursor::CustomCursor;
use super::hooks::use_browser_resource;
use crate::config::ScrollConfig;
use crate::core::navigator::NavigateOptions;
use crate::core::platform::{self, BrowserFrames, DomViewport, PageNavigator, ScrollActivity};
use crate::core::timing;

#[derive(Clone)]
pub struct ScrollContext {
    navigator: PageNavigator,
}

impl ScrollContext {
    pub fn navigator(&self) -> &PageNavigator {
        &self.navigator
    }

    /// See [`PageNavigator::navigate`]; `false` when nothing was started.
    pub fn navigate(&self, target: &str, options: NavigateOptions) -> bool {
        self.navigator.navigate(target, options)
    }
}

#[component]
pub fn SmoothScroll(children: Element) -> Element {
    let config = ScrollConfig::default();
    let navigator = use_hook(|| PageNavigator::new(BrowserFrames::default(), DomViewport::new(config), config));
    use_context_provider({
        let navigator = navigator.clone();
        move || ScrollContext { navigator }
    });

    use_browser_resource("scroll-activity", move || ScrollActivity::attach(config.scroll_idle_ms));

    {
        let navigator = navigator.clone();
        use_effect(move || {
            let Some(fragment) = platform::location_fragment() else {
                return;
            };
            let navigator = navigator.clone();
            spawn(async move {
                // Let the sections lay out before measuring them.
                timing::sleep_ms(config.deep_link_delay_ms).await;
                if navigator.deep_link(&fragment) {
                    tracing::debug!(%fragment, "deep link followed");
                }
            });
        });
    }

    use_drop(move || navigator.teardown());

    rsx! {
        {children}
        CustomCursor {}
    }
}
