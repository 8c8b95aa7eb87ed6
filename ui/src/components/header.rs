//! Fixed site header: brand, section menu, language switcher, contact link.
//!
//! The highlighted item follows the scroll position (see
//! [`crate::core::tracker`]). Clicking an item navigates through the
//! [`ScrollContext`] when one is provided, otherwise through the browser's
//! native smooth scrolling with the same header offset.

use dioxus::prelude::*;
use futures_util::StreamExt;

use super::hooks::use_browser_resource;
use super::language::{use_language, LanguageSwitcher};
use super::smooth_scroll::ScrollContext;
use crate::config::{ScrollConfig, BRAND, CONTACT_EMAIL};
use crate::core::anchors::AnchorId;
use crate::core::navigator::{NavigateOptions, Viewport};
use crate::core::platform::{self, DomViewport, ScrollTracker};
use crate::core::tracker::{ActiveAnchor, TrackerFrame};
use crate::i18n::lookup;
use crate::t;

/// Active anchor and the "scrolled" flag, both written only on change.
fn use_scroll_tracker() -> (Signal<ActiveAnchor>, Signal<bool>) {
    let mut active = use_signal(ActiveAnchor::default);
    let mut scrolled = use_signal(|| false);

    let frames = use_coroutine(move |mut rx: UnboundedReceiver<TrackerFrame>| async move {
        while let Some(frame) = rx.next().await {
            let mut next = *active.peek();
            if next.apply(frame.active) {
                active.set(next);
            }
            if *scrolled.peek() != frame.scrolled {
                scrolled.set(frame.scrolled);
            }
        }
    });

    use_browser_resource("scroll-tracker", move || {
        let tx = frames.tx();
        ScrollTracker::attach(ScrollConfig::default(), move |frame| {
            let _ = tx.unbounded_send(frame);
        })
    });

    (active, scrolled)
}

#[component]
pub fn SiteHeader() -> Element {
    let lang = use_language().current();
    let scroll = try_use_context::<ScrollContext>();
    let (mut active, scrolled) = use_scroll_tracker();
    let mut menu_open = use_signal(|| false);

    let go_to = {
        let scroll = scroll.clone();
        use_callback(move |anchor: AnchorId| {
            let mut next = *active.peek();
            if next.apply(Some(anchor)) {
                active.set(next);
            }
            menu_open.set(false);

            let config = ScrollConfig::default();
            match &scroll {
                Some(ctx) => {
                    ctx.navigator().set_locked(false);
                    ctx.navigate(
                        anchor.id(),
                        NavigateOptions::with_duration(config.menu_duration_secs),
                    );
                }
                None => {
                    let viewport = DomViewport::new(config);
                    if platform::native_scroll_to(anchor.id(), -viewport.header_offset()) {
                        viewport.set_fragment(anchor.id());
                    }
                }
            }
        })
    };

    let toggle_menu = use_callback(move |_: ()| {
        let open = !*menu_open.peek();
        menu_open.set(open);
        if let Some(ctx) = &scroll {
            ctx.navigator().set_locked(open);
        }
    });

    let current = active().get();
    let open = menu_open();
    let contact_href = format!("mailto:{CONTACT_EMAIL}");

    rsx! {
        header { class: if scrolled() { "site-header site-header--scrolled" } else { "site-header" },
            div { class: "site-header__bar",
                a {
                    class: "site-header__brand",
                    href: AnchorId::Home.href(),
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        go_to.call(AnchorId::Home);
                    },
                    span { class: "site-header__brand-text", {BRAND} }
                    span { class: "site-header__brand-dot" }
                }

                nav { class: "site-header__nav",
                    for anchor in AnchorId::ALL {
                        a {
                            key: "{anchor:?}",
                            href: anchor.href(),
                            class: if anchor == current { "site-header__link site-header__link--active" } else { "site-header__link" },
                            aria_current: if anchor == current { "true" } else { "false" },
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                go_to.call(anchor);
                            },
                            {lookup(lang, &anchor.label_path())}
                        }
                    }
                }

                div { class: "site-header__controls",
                    LanguageSwitcher {}
                    a { class: "button button--primary site-header__contact", href: "{contact_href}",
                        {t!(lang, "header-contact")}
                    }
                    button {
                        class: if open { "site-header__toggle site-header__toggle--open" } else { "site-header__toggle" },
                        r#type: "button",
                        aria_label: t!(lang, "header-menuToggle"),
                        aria_expanded: if open { "true" } else { "false" },
                        onclick: move |_| toggle_menu.call(()),
                        span {}
                        span {}
                        span {}
                    }
                }
            }

            div { class: if open { "site-header__drawer site-header__drawer--open" } else { "site-header__drawer" },
                for anchor in AnchorId::ALL {
                    a {
                        key: "drawer-{anchor:?}",
                        href: anchor.href(),
                        class: if anchor == current { "site-header__drawer-link site-header__drawer-link--active" } else { "site-header__drawer-link" },
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            go_to.call(anchor);
                        },
                        {lookup(lang, &anchor.label_path())}
                    }
                }
                LanguageSwitcher { class: "site-header__drawer-lang" }
                a { class: "button button--primary button--block", href: "{contact_href}",
                    {t!(lang, "header-contact")}
                }
            }
        }
    }
}
