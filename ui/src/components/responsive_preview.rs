use dioxus::prelude::*;

use crate::components::use_language;
use crate::core::preview::PreviewViewport;
use crate::i18n;
use crate::t;

/// Browser-window mock-up whose canvas switches between desktop, tablet and
/// mobile widths.
#[component]
pub fn ResponsivePreview(#[props(default)] class: String) -> Element {
    let lang = use_language().current();
    let mut viewport = use_signal(PreviewViewport::default);
    let selected = viewport();

    let card_label = t!(lang, "web-preview-card");
    let primary = t!(lang, "web-preview-primary");
    let ghost = t!(lang, "web-preview-ghost");
    let cards = (1..=selected.card_count()).map(|index| {
        let title = format!("{card_label} {index}");
        rsx! {
            div { key: "{index}", class: "preview-card",
                div { class: "preview-card__media",
                    div { class: "preview-card__chip" }
                }
                div { class: "preview-card__line preview-card__line--title" }
                div { class: "preview-card__line" }
                div { class: "preview-card__actions",
                    button { r#type: "button", class: "preview-card__button", tabindex: "-1", {primary.clone()} }
                    button {
                        r#type: "button",
                        class: "preview-card__button preview-card__button--ghost",
                        tabindex: "-1",
                        {ghost.clone()}
                    }
                }
                span { class: "sr-only", {title} }
            }
        }
    });

    rsx! {
        div { class: "preview {class}",
            div { class: "preview__toolbar",
                div { class: "preview__dots",
                    span { class: "preview__dot preview__dot--red" }
                    span { class: "preview__dot preview__dot--yellow" }
                    span { class: "preview__dot preview__dot--green" }
                }
                div { class: "preview__toggles", role: "group",
                    for option in PreviewViewport::ALL {
                        button {
                            key: "{option:?}",
                            r#type: "button",
                            class: option.toggle_class(selected),
                            aria_pressed: option == selected,
                            onclick: move |_| viewport.set(option),
                            {i18n::lookup(lang, option.label_path())}
                        }
                    }
                }
            }
            div { class: "preview__canvas",
                div { class: selected.width_class(),
                    div { class: selected.grid_class(), {cards} }
                }
            }
        }
    }
}
