//! Property-based tests for locale resolution and content selection.

use portfolio_content::content::{
    find_by_base_slug, list_by_locale, EducationRecord, Entry, TypedRecord,
};
use portfolio_content::i18n::{
    alternate_links, resolve_locale, strip_locale_prefix, translate, Locale,
};
use proptest::prelude::*;

fn education_entry(id: String, lang: Locale, slug: String) -> Entry {
    Entry::new(
        id,
        TypedRecord::Education(EducationRecord {
            lang,
            base_slug: slug,
            school: "School".to_string(),
            degree: "Degree".to_string(),
            field: None,
            start_date: "2019".to_string(),
            end_date: None,
            location: "Paris".to_string(),
            highlights: None,
            order: 1.0,
        }),
    )
}

fn any_locale() -> impl Strategy<Value = Locale> {
    prop_oneof![Just(Locale::FRENCH), Just(Locale::ENGLISH)]
}

fn entries() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec((any_locale(), "[a-z][a-z0-9-]{0,12}"), 0..20).prop_map(|items| {
        items
            .into_iter()
            .map(|(lang, slug)| education_entry(format!("{}/{}.md", lang, slug), lang, slug))
            .collect()
    })
}

proptest! {
    #[test]
    fn resolve_locale_always_returns_supported_locale(path in ".*") {
        let locale = resolve_locale(&path);
        prop_assert!(Locale::all().contains(&locale));
    }

    #[test]
    fn resolve_locale_reads_locale_prefix(locale in any_locale(), rest in "[a-z/]{0,20}") {
        let path = format!("/{}/{}", locale, rest);
        prop_assert_eq!(resolve_locale(&path), locale);
    }

    #[test]
    fn translate_never_fails(code in ".{0,5}") {
        let t = translate(&code);
        prop_assert!(!t.nav.home.is_empty());
    }

    #[test]
    fn list_by_locale_only_returns_prefixed_ids(entries in entries(), locale in any_locale()) {
        let prefix = format!("{}/", locale);
        let listed = list_by_locale(&entries, locale);
        for entry in &listed {
            prop_assert!(entry.id.starts_with(&prefix));
        }
        let expected = entries.iter().filter(|entry| entry.id.starts_with(&prefix)).count();
        prop_assert_eq!(listed.len(), expected);
    }

    #[test]
    fn find_by_base_slug_returns_first_matching_entry(entries in entries()) {
        for entry in &entries {
            let lang = entry.record.lang();
            let slug = entry.record.base_slug();
            let found = find_by_base_slug(&entries, lang, slug);
            let first = entries
                .iter()
                .find(|candidate| candidate.id == entry.id)
                .map(|candidate| candidate.id.as_str());
            prop_assert_eq!(found.map(|e| e.id.as_str()), first);
        }
    }

    #[test]
    fn alternate_links_cover_every_locale(path in "(/[a-z]{1,8}){0,4}/?", locale in any_locale()) {
        let links = alternate_links(&path, locale.code());
        let stripped = strip_locale_prefix(&path);

        prop_assert_eq!(links.alternates.len(), Locale::all().len());
        for other in Locale::all() {
            prop_assert_eq!(&links.alternates[other.code()], &format!("/{}{}", other, stripped));
        }
        prop_assert_eq!(&links.current, &links.alternates[locale.code()]);
    }

    #[test]
    fn alternate_links_ignore_existing_locale_prefix(rest in "(/[a-z]{3,8}){1,4}", from in any_locale(), to in any_locale()) {
        let unprefixed = alternate_links(&rest, to.code());
        let prefixed = alternate_links(&format!("/{}{}", from, rest), to.code());
        prop_assert_eq!(unprefixed, prefixed);
    }
}
