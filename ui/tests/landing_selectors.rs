#![cfg(test)]
/*!
Selector lint for the landing stylesheet.

- Every class the components toggle at runtime must have a rule in
  `ui/assets/styling/landing.css`.
- While the stored language is still being read (`landing--pending`), every
  block of translated text is hidden so a visitor with `id` saved never sees
  the English defaults flash first.

Substring checks only; rename a selector here when renaming it in the markup.
*/

const LANDING_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/styling/landing.css"));

const REQUIRED_SELECTORS: &[&str] = &[
    ".landing--pending main",
    ".site-header__nav",
    ".site-header__drawer--open",
    ".site-footer",
    ".sr-only {",
    // Responsive preview
    ".preview__toggle--active",
    ".preview__frame--desktop",
    ".preview__frame--tablet",
    ".preview__frame--mobile",
    ".preview__grid--3",
    ".preview__grid--2",
    ".preview__grid--1",
    ".preview-card {",
];

/// Containers of translated copy outside `main`.
const TRANSLATED_CHROME: &[&str] = &[
    ".site-header__nav",
    ".site-header__contact",
    ".site-header__drawer",
    ".site-footer",
];

#[test]
fn landing_css_has_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|selector| !LANDING_CSS.contains(*selector))
        .collect();
    assert!(missing.is_empty(), "landing.css is missing selectors: {missing:?}");
}

#[test]
fn pending_language_hides_header_and_footer_copy() {
    let start = LANDING_CSS
        .find(".landing--pending main")
        .expect("pending rule present");
    let end = start + LANDING_CSS[start..].find('}').expect("pending rule closed");
    let rule = &LANDING_CSS[start..end];
    assert!(rule.contains("opacity: 0"), "pending rule must hide content: {rule}");

    for container in TRANSLATED_CHROME {
        let selector = format!(".landing--pending {container}");
        assert!(rule.contains(&selector), "{selector} not hidden while language loads");
    }
}
