use dioxus::prelude::*;

use crate::components::use_language;
use crate::core::anchors::AnchorId;
use crate::t;

#[component]
pub fn DigitalSection() -> Element {
    let lang = use_language().current();
    let features = [
        (t!(lang, "digital-features-automationTitle"), t!(lang, "digital-features-automationDesc")),
        (t!(lang, "digital-features-aiAssistTitle"), t!(lang, "digital-features-aiAssistDesc")),
        (t!(lang, "digital-features-integrationTitle"), t!(lang, "digital-features-integrationDesc")),
        (t!(lang, "digital-features-analyticsTitle"), t!(lang, "digital-features-analyticsDesc")),
    ];
    let steps = [
        (t!(lang, "digital-steps-mapTitle"), t!(lang, "digital-steps-mapDesc")),
        (t!(lang, "digital-steps-designTitle"), t!(lang, "digital-steps-designDesc")),
        (t!(lang, "digital-steps-automateTitle"), t!(lang, "digital-steps-automateDesc")),
        (t!(lang, "digital-steps-orchestrateTitle"), t!(lang, "digital-steps-orchestrateDesc")),
    ];

    rsx! {
        section { id: AnchorId::Digital.id(), class: "section section--digital",
            div { class: "container",
                div { class: "section__split",
                    div { class: "section__intro",
                        span { class: "pill", {t!(lang, "digital-pill")} }
                        h2 { class: "section__title", {t!(lang, "digital-title")} }
                        p { class: "section__desc", {t!(lang, "digital-desc")} }
                    }
                    div { class: "feature-grid",
                        for (title, desc) in features {
                            article { key: "{title}", class: "feature-card",
                                h3 { class: "feature-card__title", {title} }
                                p { class: "feature-card__desc", {desc} }
                            }
                        }
                    }
                }
                ol { class: "flow",
                    for (step, (title, desc)) in steps.into_iter().enumerate() {
                        li { key: "{step}", class: "flow__step",
                            span { class: "flow__index", {(step + 1).to_string()} }
                            h4 { class: "flow__title", {title} }
                            p { class: "flow__desc", {desc} }
                        }
                    }
                }
            }
        }
    }
}
