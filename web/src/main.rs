use dioxus::prelude::*;

use ui::components::{LanguageProvider, SmoothScroll};
use ui::views::{Landing, PageNotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global page resources
        document::Title { "MegaLS - Modern Solutions" }
        document::Meta {
            name: "description",
            content: "Web, mobile and digital transformation solutions by PT Mega Lentera Solusi.",
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        // Language outermost so the scroll wrapper and every route share it.
        LanguageProvider {
            SmoothScroll {
                Router::<Route> {}
            }
        }
    }
}
