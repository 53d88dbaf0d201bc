//! Locale-aware selection of content entries.
//!
//! Entries are addressed by their storage identifier `<locale>/<slug>.md`.
//! Selecting a locale is a prefix match on that identifier, and looking up a
//! translation is a match on the identifier with prefix and suffix removed.

use crate::content::schema::TypedRecord;
use crate::i18n::Locale;
use serde::Serialize;

/// File suffix carried by content identifiers
pub const CONTENT_SUFFIX: &str = ".md";

/// A validated record together with its storage identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Identifier relative to the collection folder (e.g., "fr/kv-store.md")
    pub id: String,
    pub record: TypedRecord,
}

impl Entry {
    pub fn new(id: impl Into<String>, record: TypedRecord) -> Self {
        Self {
            id: id.into(),
            record,
        }
    }

    /// Identifier with the `<locale>/` prefix and content suffix removed, or
    /// `None` when the entry is not stored under `locale`.
    pub fn slug_in(&self, locale: Locale) -> Option<&str> {
        entry_slug(&self.id, locale)
    }
}

/// Strip `"<locale>/"` and the content suffix from an identifier.
pub fn entry_slug(id: &str, locale: Locale) -> Option<&str> {
    let rest = id.strip_prefix(locale.code())?.strip_prefix('/')?;
    Some(rest.strip_suffix(CONTENT_SUFFIX).unwrap_or(rest))
}

/// Every entry stored under `locale`, in enumeration order.
pub fn list_by_locale(entries: &[Entry], locale: Locale) -> Vec<&Entry> {
    let prefix = locale.folder_prefix();
    entries
        .iter()
        .filter(|entry| entry.id.starts_with(&prefix))
        .collect()
}

/// The first entry stored under `locale` whose stripped identifier is
/// `base_slug`. Later duplicates are never returned.
pub fn find_by_base_slug<'a>(
    entries: &'a [Entry],
    locale: Locale,
    base_slug: &str,
) -> Option<&'a Entry> {
    entries
        .iter()
        .find(|entry| entry_slug(&entry.id, locale) == Some(base_slug))
}

/// Sort entries by their `order` key, ascending. Equal keys keep their
/// relative position.
pub fn sort_by_order(entries: &mut [&Entry]) {
    entries.sort_by(|a, b| a.record.order().total_cmp(&b.record.order()));
}
