use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Every key of the fallback (`en`) dictionary must exist in `id` and vice
/// versa, and neither file may define a key twice.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` as a message definition
/// - Skips blank / attribute / continuation lines
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<code>/megals-ui.ftl`
/// 2. Copy all keys from `en/megals-ui.ftl`
/// 3. Register it in `LOCALES` below and in `ui::i18n::Language`.
const EN: &str = include_str!("../i18n/en/megals-ui.ftl");
const ID: &str = include_str!("../i18n/id/megals-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("id", ID)];

#[test]
fn fallback_is_well_formed() {
    assert!(!extract_keys(EN).is_empty(), "Fallback (en) contains no keys.");
    assert_no_dup_keys(EN, "en");
}

#[test]
fn all_locales_match_fallback_keys() {
    let fallback_keys = extract_keys(EN);
    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);
        let keys = extract_keys(src);

        let missing: BTreeSet<_> = fallback_keys.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }

        let extra: BTreeSet<_> = keys.difference(&fallback_keys).cloned().collect();
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} defines {} key(s) unknown to en:\n  {}",
                extra.len(),
                extra.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: keep en and every locale in lockstep.",
            failures.join("\n\n")
        );
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    message_lines(src).map(|(key, _)| key.to_string()).collect()
}

fn message_lines(src: &str) -> impl Iterator<Item = (&str, &str)> {
    src.lines().filter_map(|raw| {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            return None;
        }
        // Continuation lines are indented.
        if raw.starts_with(' ') || raw.starts_with('\t') {
            return None;
        }
        let (left, _) = line.split_once('=')?;
        let key = left.trim();
        let plain = !key.is_empty()
            && !key.contains(' ')
            && !key.starts_with('[')
            && !key.starts_with('-');
        plain.then_some((key, raw))
    })
}

/// Assert no duplicate key definitions in a single FTL file.
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for (key, raw) in message_lines(src) {
        if !seen.insert(key) {
            dups.insert(format!("{key}  (line: \"{raw}\")"));
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
