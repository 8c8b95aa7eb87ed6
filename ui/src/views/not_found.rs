use dioxus::prelude::*;

use crate::components::use_language;
use crate::t;

/// Any path other than `/`.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let lang = use_language().current();
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "unknown route");

    rsx! {
        main { class: "not-found",
            h1 { class: "not-found__code", "404" }
            p { class: "not-found__title", {t!(lang, "notfound-title")} }
            code { class: "not-found__path", {path} }
            a { class: "button button--primary", href: "/", {t!(lang, "notfound-back")} }
        }
    }
}
