//! Internationalization (i18n) for the portfolio site.
//!
//! Every page is published once per supported locale under a `/<code>/`
//! URL prefix, with content stored under a matching `<code>/` folder.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported locales
//! - `locale`: Validated `Locale` type and path-based resolution
//! - `strings`: Per-locale UI dictionaries, including plural rules
//! - `links`: Same-page links for the language switcher
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_content::i18n::{alternate_links, resolve_locale, translate};
//!
//! let locale = resolve_locale("/en/projects");
//! let t = translate(locale.code());
//! let title = t.projects.title;
//! let switcher = alternate_links("/en/projects", locale.code());
//! ```

mod links;
mod locale;
mod registry;
mod strings;

pub use links::{alternate_links, strip_locale_prefix, AlternateLinks};
pub use locale::{resolve_locale, Locale};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::{translate, Translations, ENGLISH_TRANSLATIONS, FRENCH_TRANSLATIONS};
