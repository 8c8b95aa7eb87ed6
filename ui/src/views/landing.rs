use dioxus::prelude::*;

use super::{DigitalSection, Hero, MobileSection, SiteFooter, TechSection, WebSection};
use crate::components::{use_language, SiteHeader};

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

/// The one-page site. Entrance animations are held back (`landing--pending`)
/// until the language preference has been read.
#[component]
pub fn Landing() -> Element {
    let ready = use_language().is_ready();

    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }
        div { class: if ready { "landing" } else { "landing landing--pending" },
            SiteHeader {}
            main {
                Hero {}
                WebSection {}
                MobileSection {}
                DigitalSection {}
                TechSection {}
            }
            SiteFooter {}
        }
    }
}
