//! Locale registry: Single source of truth for all supported locales.
//!
//! The site is published in a closed set of locales. Each entry ties a locale
//! code to its display names and to its translation dictionary, so adding a
//! locale means adding one entry here plus its `Translations`.
//!
//! The registry is built once behind a `OnceLock` and never written to again.

use crate::i18n::strings::{Translations, ENGLISH_TRANSLATIONS, FRENCH_TRANSLATIONS};
use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale code used as URL prefix and content folder (e.g., "fr", "en")
    pub code: &'static str,

    /// English name of the locale (e.g., "French")
    pub name: &'static str,

    /// Native name of the locale (e.g., "Français")
    pub native_name: &'static str,

    /// Whether this is the fallback locale (only one should be true)
    pub is_default: bool,

    /// UI strings for this locale
    pub translations: &'static Translations,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its exact code.
    ///
    /// Matching is case-sensitive: URL segments and content folders are
    /// always lowercase.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All supported locales, in registry order.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Supported locale codes, in registry order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.locales.iter().map(|locale| locale.code).collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if the static table declares zero or several default locales.
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Look up a locale, falling back to the default one for unknown codes.
    pub fn get_or_default(&self, code: &str) -> &LocaleConfig {
        self.get_by_code(code)
            .unwrap_or_else(|| self.default_locale())
    }
}

/// The locales the site is published in. French is the default.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: true,
            translations: &FRENCH_TRANSLATIONS,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            translations: &ENGLISH_TRANSLATIONS,
        },
    ]
}
