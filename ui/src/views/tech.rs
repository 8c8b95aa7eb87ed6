use dioxus::prelude::*;

use crate::components::use_language;
use crate::core::anchors::AnchorId;
use crate::t;

/// Badges grouped mobile, web, backend, cloud, data, containers, automation.
const STACK: [&str; 24] = [
    "Android",
    "iOS",
    "Flutter",
    "React Native",
    "Kotlin",
    "Swift",
    "TypeScript",
    "Next.js",
    "React",
    "Tailwind CSS",
    "Node.js",
    "Vercel",
    "Heroku",
    "AWS",
    "Google Cloud",
    "PostgreSQL",
    "MongoDB",
    "Supabase",
    "Neon",
    "Prisma",
    "Docker",
    "Kubernetes",
    "n8n",
    "LlamaIndex",
];

#[component]
pub fn TechSection() -> Element {
    let lang = use_language().current();

    rsx! {
        section { id: AnchorId::Tech.id(), class: "section section--tech",
            div { class: "container",
                div { class: "section__intro section__intro--center",
                    span { class: "pill", {t!(lang, "tech-pill")} }
                    h2 { class: "section__title", {t!(lang, "tech-title")} }
                    p { class: "section__desc", {t!(lang, "tech-desc")} }
                }
                ul { class: "tech-grid",
                    for name in STACK {
                        li { key: "{name}", class: "tech-badge",
                            span { class: "tech-badge__mark", aria_hidden: "true", {name.chars().next().map(String::from).unwrap_or_default()} }
                            span { class: "tech-badge__name", {name} }
                        }
                    }
                }
            }
        }
    }
}
