//! Internationalization (i18n) module.
//!
//! Reply texts are embedded JSON catalogs, looked up by dotted key with an
//! English fallback.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

/// Locale used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Global translation store: LangCode -> Key -> Text
static TRANSLATIONS: Lazy<HashMap<&'static str, Value>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (lang, json) in [("en", include_str!("en.json")), ("fa", include_str!("fa.json"))] {
        match serde_json::from_str(json) {
            Ok(val) => {
                map.insert(lang, val);
            }
            Err(e) => tracing::error!("Invalid {} translation catalog: {}", lang, e),
        }
    }
    map
});

/// Whether a catalog exists for this language code.
pub fn is_supported(lang: &str) -> bool {
    TRANSLATIONS.contains_key(lang)
}

/// Get text for a key in a specific language.
/// Supports nested keys via dot notation, e.g., "words.added".
/// Falls back to English, then to the key itself.
pub fn get_text(lang: &str, key: &str) -> String {
    [lang, DEFAULT_LOCALE]
        .into_iter()
        .filter_map(|l| TRANSLATIONS.get(l))
        .find_map(|val| resolve_key(val, key))
        .unwrap_or_else(|| key.to_string())
}

fn resolve_key(val: &Value, key: &str) -> Option<String> {
    let mut current = val;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    current.as_str().map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(prefix: &str, val: &Value, out: &mut Vec<String>) {
        match val {
            Value::Object(map) => {
                for (k, v) in map {
                    let path = if prefix.is_empty() { k.clone() } else { format!("{prefix}.{k}") };
                    keys(&path, v, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn both_catalogs_parse() {
        assert!(is_supported("en"));
        assert!(is_supported("fa"));
        assert!(!is_supported("xx"));
    }

    #[test]
    fn nested_lookup_and_fallbacks() {
        assert_eq!(get_text("en", "links.locked"), "Links are now locked 🔒");
        // fa has no summary template, falls back to en
        assert!(get_text("fa", "settings.summary").starts_with("Welcome:"));
        assert_eq!(get_text("xx", "ban.done"), "User banned 🚫");
        assert_eq!(get_text("en", "no.such.key"), "no.such.key");
    }

    #[test]
    fn every_fa_key_exists_in_en() {
        let mut fa = Vec::new();
        keys("", &TRANSLATIONS["fa"], &mut fa);
        for key in fa {
            assert_ne!(get_text("en", &key), key, "en catalog missing {key}");
        }
    }
}
