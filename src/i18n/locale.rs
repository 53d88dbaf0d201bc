//! Locale type and path-based locale resolution.
//!
//! `Locale` is a validated handle onto a registry entry. It can only be
//! built from a registered code, so holding one means the locale has both
//! a content folder and a translation dictionary.

use crate::i18n::{LocaleConfig, LocaleRegistry, Translations};
use anyhow::{bail, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    /// Locale code (e.g., "fr", "en")
    code: &'static str,
}

impl Locale {
    pub const FRENCH: Locale = Locale { code: "fr" };

    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered
    /// * `Err` otherwise
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) => Ok(Locale { code: config.code }),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Parse a code, falling back to the default locale instead of failing.
    pub fn from_code_or_default(code: &str) -> Locale {
        Locale {
            code: LocaleRegistry::get().get_or_default(code).code,
        }
    }

    /// All supported locales, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .codes()
            .into_iter()
            .map(|code| Locale { code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not registered, which cannot happen for a
    /// Locale built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// UI strings for this locale.
    pub fn translations(&self) -> &'static Translations {
        self.config().translations
    }

    /// Folder prefix under which this locale's content lives (e.g., "fr/").
    pub fn folder_prefix(&self) -> String {
        format!("{}/", self.code)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Locale::from_code(&code).map_err(serde::de::Error::custom)
    }
}

/// Extract the locale from a request path.
///
/// The first non-empty `/`-separated segment is used when it names a
/// supported locale. Anything else, including an empty path, yields the
/// default locale.
pub fn resolve_locale(path: &str) -> Locale {
    path.split('/')
        .find(|segment| !segment.is_empty())
        .and_then(|segment| Locale::from_code(segment).ok())
        .unwrap_or_default()
}
