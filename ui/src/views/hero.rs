use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::components::hooks::{use_browser_resource, use_header_height};
use crate::components::use_language;
use crate::config::EffectsConfig;
use crate::core::anchors::AnchorId;
use crate::core::platform;
use crate::core::tilt::{card_flex, card_tilt, PointerTrail};
use crate::t;

struct HeroCard {
    label: &'static str,
    image: &'static str,
    tone: &'static str,
}

const CARDS: [HeroCard; 3] = [
    HeroCard {
        label: "Web",
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800&h=1200&fit=crop&crop=center",
        tone: "hero-card--web",
    },
    HeroCard {
        label: "Mobile",
        image: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=800&h=1200&fit=crop&crop=center",
        tone: "hero-card--mobile",
    },
    HeroCard {
        label: "Digital",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=1200&fit=crop&crop=center",
        tone: "hero-card--digital",
    },
];

/// `#home`: headline, email capture and the three expanding service cards.
#[component]
pub fn Hero() -> Element {
    let lang = use_language().current();
    let effects = EffectsConfig::default();
    let header_height = use_header_height();
    let mut hovered = use_signal(|| None::<usize>);
    let mut pointer = use_signal(|| (0.0_f64, 0.0_f64));
    let trail = use_hook(|| Rc::new(Cell::new(PointerTrail::default())));

    let moves = use_coroutine({
        let trail = Rc::clone(&trail);
        move |mut rx: UnboundedReceiver<(f64, f64)>| {
            let trail = Rc::clone(&trail);
            async move {
                while let Some(position) = rx.next().await {
                    let mut next = trail.get();
                    // Only the hovered card reacts to the pointer.
                    if next.record(position, hovered.peek().is_some()) {
                        pointer.set(position);
                    }
                    trail.set(next);
                }
            }
        }
    });
    use_browser_resource("hero-pointer", move || {
        let tx = moves.tx();
        platform::on_pointer_move(move |x, y| {
            let _ = tx.unbounded_send((x, y));
        })
    });

    let padding = header_height().unwrap_or(0.0);
    let hovered_card = hovered();
    let viewport = if hovered_card.is_some() {
        platform::viewport_size()
    } else {
        (0.0, 0.0)
    };
    let descriptions = [
        t!(lang, "hero-cards-webDesc"),
        t!(lang, "hero-cards-mobileDesc"),
        t!(lang, "hero-cards-digitalDesc"),
    ];

    let tilt_source = pointer();
    let cards = CARDS.iter().zip(descriptions).enumerate().map(|(index, (card, description))| {
        let is_hovered = hovered_card == Some(index);
        let tilt = card_tilt(tilt_source, viewport, is_hovered, &effects);
        let class = if is_hovered {
            format!("hero-card hero-card--hovered {}", card.tone)
        } else {
            format!("hero-card {}", card.tone)
        };
        let style = format!(
            "flex: {}; transform: {};",
            card_flex(index, hovered_card),
            tilt.transform(effects.perspective_px)
        );
        let trail = Rc::clone(&trail);
        rsx! {
            div {
                key: "{index}",
                class,
                style,
                onmouseenter: move |_| {
                    pointer.set(trail.get().latest());
                    hovered.set(Some(index));
                },
                onmouseleave: move |_| hovered.set(None),
                img {
                    class: "hero-card__image",
                    src: card.image,
                    alt: card.label,
                    loading: if index == 0 { "eager" } else { "lazy" },
                }
                div { class: "hero-card__label", {card.label} }
                div { class: "hero-card__caption",
                    strong { {card.label} }
                    span { {description} }
                }
            }
        }
    });

    rsx! {
        section {
            id: AnchorId::Home.id(),
            class: "hero",
            style: "padding-top: {padding}px; scroll-margin-top: {padding}px;",
            div { class: "hero__glow", aria_hidden: "true" }
            div { class: "container hero__grid",
                div { class: "hero__copy",
                    h1 { class: "hero__headline",
                        span { class: "hero__line hero__line--1", {t!(lang, "hero-build")} }
                        span { class: "hero__line hero__line--2", {t!(lang, "hero-innovate")} }
                        span { class: "hero__line hero__line--3", {t!(lang, "hero-transform")} }
                    }
                    div { class: "hero__capture",
                        input {
                            class: "input",
                            r#type: "email",
                            placeholder: t!(lang, "hero-emailPlaceholder"),
                        }
                        a { class: "button button--primary", href: "#footer", {t!(lang, "header-contact")} }
                    }
                    div { class: "hero__features",
                        div { class: "hero__feature",
                            strong { {t!(lang, "hero-features-aiTop")} }
                            small { {t!(lang, "hero-features-aiBottom")} }
                        }
                        div { class: "hero__feature",
                            strong { {t!(lang, "hero-features-smartTop")} }
                            small { {t!(lang, "hero-features-smartBottom")} }
                        }
                        div { class: "hero__feature",
                            strong { {t!(lang, "hero-features-futureTop")} }
                            small { {t!(lang, "hero-features-futureBottom")} }
                        }
                    }
                }

                div { class: "hero__cards",
                    {cards}
                }
            }
        }
    }
}
