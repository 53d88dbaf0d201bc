//! Validated content, ready for page generation.
//!
//! `ContentStore::build` is the single validation pass of the build: it
//! checks every record of every collection, then the rules that span
//! records, and refuses to produce a store while any error remains.

use crate::content::loader::RawContent;
use crate::content::locator::{self, entry_slug, Entry};
use crate::content::report::{RecordError, RecordProblem, ValidationReport};
use crate::content::schema::Collection;
use crate::content::validator::validate;
use crate::i18n::Locale;
use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

/// Validated entries of every collection.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    collections: HashMap<Collection, Vec<Entry>>,
    report: ValidationReport,
}

impl ContentStore {
    /// Validate raw content and build the store.
    ///
    /// # Returns
    /// * `Ok(store)` when no record has an error; warnings are kept in
    ///   `store.report()`
    /// * `Err(report)` listing every error of every record otherwise
    pub fn build(raw: &RawContent) -> Result<ContentStore, ValidationReport> {
        let mut report = ValidationReport::new();

        for failure in raw.failures() {
            report.errors.push(RecordError::new(
                failure.collection,
                failure.id.clone(),
                RecordProblem::Frontmatter(failure.error.clone()),
            ));
        }

        let mut collections = HashMap::new();
        for collection in Collection::ALL {
            let entries = validate_collection(collection, raw, &mut report);
            debug!("Validated {} {} entries", entries.len(), collection);
            collections.insert(collection, entries);
        }

        check_translations(&collections, &mut report);
        check_related_projects(&collections, &mut report);

        if report.has_errors() {
            return Err(report);
        }

        info!(
            "Content validated: {} entries, {} warning(s)",
            collections.values().map(Vec::len).sum::<usize>(),
            report.warnings.len()
        );

        Ok(ContentStore {
            collections,
            report,
        })
    }

    /// All entries of a collection, in enumeration order.
    pub fn entries(&self, collection: Collection) -> &[Entry] {
        self.collections
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn list_by_locale(&self, collection: Collection, locale: Locale) -> Vec<&Entry> {
        locator::list_by_locale(self.entries(collection), locale)
    }

    pub fn find_by_base_slug(
        &self,
        collection: Collection,
        locale: Locale,
        base_slug: &str,
    ) -> Option<&Entry> {
        locator::find_by_base_slug(self.entries(collection), locale, base_slug)
    }

    /// Entries of a locale sorted by their `order` key.
    pub fn sorted_by_locale(&self, collection: Collection, locale: Locale) -> Vec<&Entry> {
        let mut entries = self.list_by_locale(collection, locale);
        locator::sort_by_order(&mut entries);
        entries
    }

    /// Warnings gathered while building.
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Validate each record of one collection and apply the per-record
/// identifier rules.
fn validate_collection(
    collection: Collection,
    raw: &RawContent,
    report: &mut ValidationReport,
) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut first_ids: HashMap<(Locale, String), String> = HashMap::new();

    for raw_entry in raw.entries(collection) {
        let record = match validate(collection, &raw_entry.data) {
            Ok(record) => record,
            Err(errors) => {
                report.errors.push(RecordError::new(
                    collection,
                    raw_entry.id.clone(),
                    RecordProblem::Schema(errors),
                ));
                continue;
            }
        };

        let lang = record.lang();
        match entry_slug(&raw_entry.id, lang) {
            None => report.errors.push(RecordError::new(
                collection,
                raw_entry.id.clone(),
                RecordProblem::LocaleMismatch { lang },
            )),
            Some(stem) if stem != record.base_slug() => report.warnings.push(format!(
                "{}/{}: baseSlug {:?} differs from file name {:?}",
                collection,
                raw_entry.id,
                record.base_slug(),
                stem
            )),
            Some(_) => {}
        }

        match first_ids.entry((lang, record.base_slug().to_string())) {
            MapEntry::Occupied(first) => report.errors.push(RecordError::new(
                collection,
                raw_entry.id.clone(),
                RecordProblem::DuplicateBaseSlug {
                    base_slug: record.base_slug().to_string(),
                    first_id: first.get().clone(),
                },
            )),
            MapEntry::Vacant(slot) => {
                slot.insert(raw_entry.id.clone());
            }
        }

        entries.push(Entry::new(raw_entry.id.clone(), record));
    }

    entries
}

fn base_slugs(entries: &[Entry], locale: Locale) -> BTreeSet<&str> {
    entries
        .iter()
        .filter(|entry| entry.record.lang() == locale)
        .map(|entry| entry.record.base_slug())
        .collect()
}

/// Warn about records missing in some supported locale.
fn check_translations(
    collections: &HashMap<Collection, Vec<Entry>>,
    report: &mut ValidationReport,
) {
    let locales = Locale::all();

    for collection in Collection::ALL {
        let entries = match collections.get(&collection) {
            Some(entries) => entries,
            None => continue,
        };

        let per_locale: Vec<(Locale, BTreeSet<&str>)> = locales
            .iter()
            .map(|locale| (*locale, base_slugs(entries, *locale)))
            .collect();
        let all_slugs: BTreeSet<&str> = per_locale
            .iter()
            .flat_map(|(_, slugs)| slugs.iter().copied())
            .collect();

        for slug in all_slugs {
            for (locale, slugs) in &per_locale {
                if !slugs.contains(slug) {
                    report.warnings.push(format!(
                        "{}: {:?} has no {} translation",
                        collection, slug, locale
                    ));
                }
            }
        }
    }
}

/// Warn about `relatedProjects` entries naming no project of the same locale.
fn check_related_projects(
    collections: &HashMap<Collection, Vec<Entry>>,
    report: &mut ValidationReport,
) {
    let projects = collections
        .get(&Collection::Projects)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    let experiences = collections
        .get(&Collection::Experiences)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    for entry in experiences {
        let Some(experience) = entry.record.as_experience() else {
            continue;
        };
        let Some(related) = &experience.related_projects else {
            continue;
        };

        let known = base_slugs(projects, experience.lang);
        for slug in related {
            if !known.contains(slug.as_str()) {
                report.warnings.push(format!(
                    "{}/{}: related project {:?} does not exist in {}",
                    Collection::Experiences,
                    entry.id,
                    slug,
                    experience.lang
                ));
            }
        }
    }
}
