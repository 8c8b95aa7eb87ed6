use dioxus::prelude::*;

use crate::components::{use_language, ResponsivePreview};
use crate::core::anchors::AnchorId;
use crate::t;

#[component]
pub fn WebSection() -> Element {
    let lang = use_language().current();
    let features = [
        ("01", t!(lang, "web-features-customTitle"), t!(lang, "web-features-customDesc")),
        ("02", t!(lang, "web-features-seoTitle"), t!(lang, "web-features-seoDesc")),
        ("03", t!(lang, "web-features-uiTitle"), t!(lang, "web-features-uiDesc")),
    ];

    rsx! {
        section { id: AnchorId::Web.id(), class: "section section--web",
            div { class: "container section__split",
                div { class: "section__column",
                    div { class: "section__intro",
                        span { class: "pill", {t!(lang, "web-pill")} }
                        h2 { class: "section__title", {t!(lang, "web-title")} }
                        p { class: "section__desc", {t!(lang, "web-desc")} }
                    }
                    div { class: "feature-list",
                        for (marker, title, desc) in features {
                            article { key: "{marker}", class: "feature-card",
                                span { class: "feature-card__marker", {marker} }
                                h3 { class: "feature-card__title", {title} }
                                p { class: "feature-card__desc", {desc} }
                            }
                        }
                    }
                }
                div { class: "preview-stage",
                    ResponsivePreview {}
                }
            }
        }
    }
}
