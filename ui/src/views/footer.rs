use dioxus::prelude::*;

use crate::components::use_language;
use crate::config::{
    EffectsConfig, COMPANY_NAME, CONTACT_EMAIL, CONTACT_PHONE, CONTACT_WHATSAPP_URL,
};
use crate::core::newsletter::{self, Flash};
use crate::core::timing;
use crate::i18n::lookup;
use crate::t;

/// Company blurb, newsletter sign-up, contact and legal links.
#[component]
pub fn SiteFooter() -> Element {
    let lang = use_language().current();
    let mut email = use_signal(String::new);
    let mut flash = use_signal(|| None::<Flash>);
    // Bumped per submission so an older timer cannot hide a newer message.
    let mut generation = use_signal(|| 0_u32);
    let year = use_hook(|| time::OffsetDateTime::now_utc().year());

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = newsletter::submit(&email.peek());
        if outcome == Flash::Success {
            email.set(String::new());
        }
        flash.set(Some(outcome));

        let ticket = *generation.peek() + 1;
        generation.set(ticket);
        spawn(async move {
            timing::sleep_ms(EffectsConfig::default().flash_message_ms).await;
            if *generation.peek() == ticket {
                flash.set(None);
            }
        });
    };

    rsx! {
        footer { id: "footer", class: "site-footer",
            div { class: "container site-footer__grid",
                div { class: "site-footer__company",
                    h3 { class: "site-footer__name", {COMPANY_NAME} }
                    p { class: "site-footer__desc", {t!(lang, "footer-companyDesc")} }

                    div { class: "newsletter",
                        h4 { {t!(lang, "footer-newsletterTitle")} }
                        p { {t!(lang, "footer-newsletterDesc")} }
                        form { class: "newsletter__form", onsubmit: submit,
                            input {
                                class: "input input--dark",
                                r#type: "email",
                                value: "{email}",
                                placeholder: t!(lang, "footer-emailPlaceholder"),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                            button { class: "button button--primary", r#type: "submit",
                                {t!(lang, "footer-send")}
                            }
                        }
                        if let Some(outcome) = flash() {
                            p {
                                class: if outcome == Flash::Success { "newsletter__flash newsletter__flash--success" } else { "newsletter__flash newsletter__flash--error" },
                                role: "status",
                                {lookup(lang, outcome.label_path())}
                            }
                        }
                    }
                }

                div { class: "site-footer__column",
                    h4 { {t!(lang, "footer-contact")} }
                    ul { class: "site-footer__links",
                        li { a { href: "mailto:{CONTACT_EMAIL}", {CONTACT_EMAIL} } }
                        li { a { href: CONTACT_WHATSAPP_URL, target: "_blank", rel: "noopener noreferrer", {CONTACT_PHONE} } }
                    }
                }

                div { class: "site-footer__column",
                    h4 { {t!(lang, "footer-social")} }
                    p { {t!(lang, "footer-followUs")} }
                    div { class: "site-footer__social",
                        a { href: "#", aria_label: "LinkedIn", "in" }
                        a { href: "#", aria_label: "Instagram", "ig" }
                    }
                }
            }

            div { class: "container site-footer__legal",
                p { "© {year} {COMPANY_NAME}. All rights reserved." }
                nav { class: "site-footer__legal-links",
                    a { href: "#", {t!(lang, "footer-privacy")} }
                    a { href: "#", {t!(lang, "footer-terms")} }
                    a { href: "#", {t!(lang, "footer-cookie")} }
                }
            }
        }
    }
}
