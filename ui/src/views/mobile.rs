use dioxus::prelude::*;

use crate::components::use_language;
use crate::config::EffectsConfig;
use crate::core::anchors::AnchorId;
use crate::core::timing;
use crate::t;

/// Phone mock-up screens cycled by the carousel.
const SCREENS: usize = 3;

fn page_class(index: usize, active: usize) -> String {
    if index == active {
        format!("phone__page phone__page--{index} phone__page--active")
    } else {
        format!("phone__page phone__page--{index}")
    }
}

#[component]
pub fn MobileSection() -> Element {
    let lang = use_language().current();
    let mut screen = use_signal(|| 0_usize);

    use_future(move || async move {
        let interval = EffectsConfig::default().carousel_interval_ms;
        loop {
            timing::sleep_ms(interval).await;
            let next = (*screen.peek() + 1) % SCREENS;
            screen.set(next);
        }
    });

    let capabilities = [
        (t!(lang, "mobile-caps-offlineTitle"), t!(lang, "mobile-caps-offlineDesc")),
        (t!(lang, "mobile-caps-pushTitle"), t!(lang, "mobile-caps-pushDesc")),
        (t!(lang, "mobile-caps-securityTitle"), t!(lang, "mobile-caps-securityDesc")),
        (t!(lang, "mobile-caps-biometricTitle"), t!(lang, "mobile-caps-biometricDesc")),
        (t!(lang, "mobile-caps-perfTitle"), t!(lang, "mobile-caps-perfDesc")),
        (t!(lang, "mobile-caps-releaseTitle"), t!(lang, "mobile-caps-releaseDesc")),
    ];
    let active = screen();

    rsx! {
        section { id: AnchorId::Mobile.id(), class: "section section--mobile",
            div { class: "container",
                div { class: "section__intro section__intro--center",
                    span { class: "pill", {t!(lang, "mobile-pill")} }
                    h2 { class: "section__title", {t!(lang, "mobile-title")} }
                    p { class: "section__desc", {t!(lang, "mobile-desc")} }
                }
                div { class: "section__split",
                    div { class: "phone", aria_hidden: "true",
                        div { class: "phone__notch" }
                        div { class: "phone__screen",
                            for index in 0..SCREENS {
                                div {
                                    key: "{index}",
                                    class: page_class(index, active),
                                    div { class: "phone__bar" }
                                    div { class: "phone__tiles",
                                        for tile in 0..4 {
                                            div { key: "{tile}", class: "phone__tile" }
                                        }
                                    }
                                    if index == SCREENS - 1 {
                                        div { class: "phone__cta", {t!(lang, "mobile-checkout")} }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "section__body",
                        h3 { class: "section__subtitle", {t!(lang, "mobile-contentTitle")} }
                        p { class: "section__desc", {t!(lang, "mobile-contentDesc")} }
                        div { class: "capability-grid",
                            for (title, desc) in capabilities {
                                article { key: "{title}", class: "capability",
                                    h4 { class: "capability__title", {title} }
                                    p { class: "capability__desc", {desc} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
