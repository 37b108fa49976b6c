//! Localized string lookup.
//!
//! Labels are keyed by dotted identifiers (e.g. `gui.settings.jvm.ram`).
//! Tables are embedded at compile time; lookups fall back to English and
//! finally to the raw key so a missing translation never hides a control.

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

static EN: Lazy<Map<String, Value>> = Lazy::new(|| {
    serde_json::from_str(include_str!("assets/lang/en.json"))
        .expect("embedded en.json is valid JSON")
});

static ZH: Lazy<Map<String, Value>> = Lazy::new(|| {
    serde_json::from_str(include_str!("assets/lang/zh.json"))
        .expect("embedded zh.json is valid JSON")
});

/// Languages the launcher ships tables for.
pub const LANGUAGES: &[&str] = &["en", "zh"];

/// A resolved string table for one language.
pub struct Lang {
    code: String,
    table: &'static Map<String, Value>,
}

impl Lang {
    /// Unknown codes resolve to English.
    pub fn new(code: &str) -> Self {
        let table = match code {
            "zh" => &*ZH,
            _ => &*EN,
        };
        Self {
            code: code.to_string(),
            table,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Look up a label by its dotted key.
    pub fn get(&self, key: &str) -> String {
        self.table
            .get(key)
            .or_else(|| EN.get(key))
            .and_then(Value::as_str)
            .unwrap_or(key)
            .to_string()
    }

    /// Look up a label and substitute `{}` with `arg`.
    pub fn format(&self, key: &str, arg: &str) -> String {
        self.get(key).replace("{}", arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_in_selected_language() {
        let lang = Lang::new("zh");
        assert_ne!(lang.get("gui.settings.title"), "gui.settings.title");
        assert_ne!(lang.get("gui.settings.title"), Lang::new("en").get("gui.settings.title"));
    }

    #[test]
    fn test_missing_key_falls_back_to_raw_key() {
        let lang = Lang::new("en");
        assert_eq!(lang.get("gui.no.such.key"), "gui.no.such.key");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let lang = Lang::new("tlh");
        assert_eq!(lang.get("gui.settings.title"), Lang::new("en").get("gui.settings.title"));
    }

    #[test]
    fn test_format_substitutes_argument() {
        let lang = Lang::new("en");
        let text = lang.format("gui.settings.jvm.jre.success", "/usr/bin/java");
        assert!(text.contains("/usr/bin/java"));
    }

    #[test]
    fn test_every_english_key_has_a_chinese_entry() {
        let zh = Lang::new("zh");
        for key in EN.keys() {
            assert!(zh.table.contains_key(key), "zh.json is missing {key}");
        }
    }
}
