//! Same-page links for every supported locale (language switcher, hreflang).

use crate::i18n::LocaleRegistry;
use serde::Serialize;
use std::collections::BTreeMap;

/// Links to the current page in every supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateLinks {
    /// Link for the active locale
    pub current: String,

    /// One link per supported locale code
    pub alternates: BTreeMap<&'static str, String>,
}

/// Remove a leading locale segment from a path.
///
/// Only a whole segment naming a supported locale is removed, so
/// `/french` is left untouched. Leading slashes collapse to one, matching
/// how `resolve_locale` skips empty segments. The result always starts with
/// `/` and is `/` for the root.
pub fn strip_locale_prefix(path: &str) -> String {
    let normalized = format!("/{}", path.trim_start_matches('/'));

    for code in LocaleRegistry::get().codes() {
        let prefix = format!("/{}", code);
        if normalized == prefix {
            return "/".to_string();
        }
        if let Some(rest) = normalized.strip_prefix(&prefix) {
            if rest.starts_with('/') {
                return rest.to_string();
            }
        }
    }

    normalized
}

/// Build the links to `current_path` in every supported locale.
///
/// `current` is the link for `locale`, or for the default locale when
/// `locale` is not supported.
pub fn alternate_links(current_path: &str, locale: &str) -> AlternateLinks {
    let registry = LocaleRegistry::get();
    let path = strip_locale_prefix(current_path);

    let alternates: BTreeMap<&'static str, String> = registry
        .codes()
        .into_iter()
        .map(|code| (code, format!("/{}{}", code, path)))
        .collect();

    let current_code = registry.get_or_default(locale).code;
    let current = alternates
        .get(current_code)
        .cloned()
        .unwrap_or_else(|| format!("/{}{}", current_code, path));

    AlternateLinks {
        current,
        alternates,
    }
}
