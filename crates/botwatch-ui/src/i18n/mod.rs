//! Lightweight JSON-backed translations with per-locale bundles.
//!
//! Lookups walk the active locale, then English, then return the key itself,
//! so rendering never fails on a missing translation.

use serde::Deserialize;
use serde_json::Value;
use std::fmt::Display;
use std::sync::LazyLock;

/// Supported dashboard locales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English.
    En,
    /// Russian.
    Ru,
    /// Hindi.
    Hi,
    /// Arabic.
    Ar,
}

impl LocaleCode {
    #[must_use]
    /// All supported locales in display order.
    pub const fn all() -> [Self; 4] {
        [Self::En, Self::Ru, Self::Hi, Self::Ar]
    }

    /// Two-letter code used in storage and the `lang` attribute.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Hi => "hi",
            Self::Ar => "ar",
        }
    }

    /// Human-friendly label for dropdowns.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Русский",
            Self::Hi => "हिन्दी",
            Self::Ar => "العربية",
        }
    }

    /// Map an arbitrary browser language tag to a supported locale, falling back to None.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
    rtl: bool,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl Default for TranslationBundle {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale.
    ///
    /// Keys missing from the locale degrade to English, then to the key itself.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        let rtl = tree
            .get("meta")
            .and_then(|meta| meta.get("rtl"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Self { locale, tree, rtl }
    }

    /// Resolve a dotted key (`section.key`) with English fallback, then the key.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        resolve(&self.tree, key)
            .or_else(|| {
                if self.locale == DEFAULT_LOCALE {
                    None
                } else {
                    resolve(&EN_FALLBACK.tree, key)
                }
            })
            .unwrap_or_else(|| key.to_string())
    }

    /// Resolve `key` and substitute `{token}` placeholders from `bindings`.
    #[must_use]
    pub fn format(&self, key: &str, bindings: &[(&str, &dyn Display)]) -> String {
        substitute(&self.text(key), bindings)
    }

    /// Whether the locale prefers RTL layout (bidi).
    #[must_use]
    pub const fn rtl(&self) -> bool {
        self.rtl
    }

    /// Value for the `dir` attribute of the document root.
    #[must_use]
    pub const fn dir(&self) -> &'static str {
        if self.rtl { "rtl" } else { "ltr" }
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

/// Replace every bound `{token}` in `template`; unbound tokens stay literal.
///
/// Substitution is a single left-to-right pass, so a bound value that itself
/// contains braces is never re-expanded.
#[must_use]
pub fn substitute(template: &str, bindings: &[(&str, &dyn Display)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let token = &after[..close];
        match bindings.iter().find(|(name, _)| *name == token) {
            Some((_, value)) => out.push_str(&value.to_string()),
            None => {
                out.push('{');
                out.push_str(token);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Ru => include_str!("../../i18n/ru.json"),
        LocaleCode::Hi => include_str!("../../i18n/hi.json"),
        LocaleCode::Ar => include_str!("../../i18n/ar.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_keys(prefix: &str, node: &Value, out: &mut Vec<String>) {
        if let Value::Object(map) = node {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                leaf_keys(&path, child, out);
            }
        } else if node.is_string() {
            out.push(prefix.to_string());
        }
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let bundle = TranslationBundle::new(LocaleCode::Ru);
        assert_eq!(bundle.text("nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn partial_locale_falls_back_to_english() {
        let hindi = TranslationBundle::new(LocaleCode::Hi);
        assert_eq!(hindi.text("buttons.show_all"), "Show all");
        assert_eq!(hindi.text("status.online"), "ऑनलाइन");
    }

    #[test]
    fn every_english_key_resolves_in_every_locale() {
        let mut keys = Vec::new();
        leaf_keys("", &EN_FALLBACK.tree, &mut keys);
        assert!(!keys.is_empty());
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            for key in &keys {
                assert_ne!(bundle.text(key), *key, "{key} unresolved in {locale:?}");
            }
        }
    }

    #[test]
    fn rtl_flag_respects_meta() {
        assert!(TranslationBundle::new(LocaleCode::Ar).rtl());
        assert_eq!(TranslationBundle::new(LocaleCode::Ar).dir(), "rtl");
        assert!(!TranslationBundle::new(LocaleCode::En).rtl());
    }

    #[test]
    fn substitute_binds_repeated_tokens() {
        assert_eq!(substitute("{minutes} min ago", &[("minutes", &5)]), "5 min ago");
        assert_eq!(substitute("{a}-{a}", &[("a", &"x")]), "x-x");
    }

    #[test]
    fn substitute_leaves_unbound_tokens_literal() {
        assert_eq!(substitute("{x}", &[]), "{x}");
        assert_eq!(substitute("open { brace", &[("x", &1)]), "open { brace");
        assert_eq!(substitute("{v}", &[("v", &"{v}")]), "{v}");
    }

    #[test]
    fn format_resolves_then_substitutes() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.format("modals.block_confirm", &[("id", &42)]), "Block user 42?");
    }

    #[test]
    fn lang_tags_map_to_locales() {
        assert_eq!(LocaleCode::from_lang_tag("ru-RU"), Some(LocaleCode::Ru));
        assert_eq!(LocaleCode::from_lang_tag("AR"), Some(LocaleCode::Ar));
        assert_eq!(LocaleCode::from_lang_tag("fr-FR"), None);
    }
}
