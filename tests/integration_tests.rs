//! Integration tests for the portfolio content layer
//!
//! These tests write a content tree to disk, load and validate it, then
//! drive the locale helpers the way page generation does.

use portfolio_content::content::{
    load_content, Category, Collection, ContentStore, RecordProblem,
};
use portfolio_content::i18n::{alternate_links, resolve_locale, translate, Locale};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ==================== Test Helpers ====================

/// Write a content file under `<root>/<collection>/<id>`
fn write_entry(root: &Path, collection: &str, id: &str, frontmatter: &str) {
    let path = root.join(collection).join(id);
    fs::create_dir_all(path.parent().expect("parent")).expect("Failed to create dir");
    fs::write(&path, format!("---\n{}---\n\nBody text.\n", frontmatter))
        .expect("Failed to write content file");
}

fn project_frontmatter(lang: &str, slug: &str, title: &str, extra: &str) -> String {
    format!(
        "lang: {lang}\nbaseSlug: {slug}\ntitle: {title}\nshortDesc:\n  - First line\n  - Second line\ntech:\n  - Rust\n  - PostgreSQL\n{extra}"
    )
}

/// A complete, valid bilingual content tree
fn create_valid_site() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    for (lang, title) in [("fr", "Moteur KV"), ("en", "KV engine")] {
        write_entry(
            root,
            "projects",
            &format!("{}/kv-store.md", lang),
            &project_frontmatter(
                lang,
                "kv-store",
                title,
                "category: professional\nfeatured: true\norder: 1\ncompany: Acme\nlinks:\n  github: https://github.com/me/kv-store\n",
            ),
        );
        write_entry(
            root,
            "projects",
            &format!("{}/chatbot.md", lang),
            &project_frontmatter(lang, "chatbot", "Chatbot", ""),
        );
        write_entry(
            root,
            "experiences",
            &format!("{}/acme.md", lang),
            &format!(
                "lang: {lang}\nbaseSlug: acme\ncompany: Acme\nrole: Backend engineer\nstartDate: 2022-01\nlocation: Paris\ndescription: Platform team\nachievements:\n  - Shipped it\nskills:\n  - Rust\norder: 1\nrelatedProjects:\n  - kv-store\n"
            ),
        );
        write_entry(
            root,
            "education",
            &format!("{}/master.md", lang),
            &format!(
                "lang: {lang}\nbaseSlug: master\nschool: Université Lyon 1\ndegree: Master\nfield: Informatique\nstartDate: 2018-09\nendDate: 2020-06\nlocation: Lyon\nhighlights:\n  - Thesis on storage engines\norder: 1\n"
            ),
        );
    }

    temp_dir
}

fn build_store(root: &Path) -> ContentStore {
    let raw = load_content(root).expect("Failed to load content");
    ContentStore::build(&raw).unwrap_or_else(|report| panic!("Invalid content:\n{}", report))
}

// ==================== Valid Content Tests ====================

#[test]
fn test_valid_site_builds_cleanly() {
    let temp_dir = create_valid_site();
    let store = build_store(temp_dir.path());

    assert_eq!(store.len(), 8);
    assert!(store.report().is_clean(), "{}", store.report());
}

#[test]
fn test_list_by_locale_only_returns_locale_entries() {
    let temp_dir = create_valid_site();
    let store = build_store(temp_dir.path());

    for locale in Locale::all() {
        for collection in Collection::ALL {
            for entry in store.list_by_locale(collection, locale) {
                assert!(entry.id.starts_with(&format!("{}/", locale)));
                assert_eq!(entry.record.lang(), locale);
            }
        }
    }

    assert_eq!(
        store
            .list_by_locale(Collection::Projects, Locale::ENGLISH)
            .len(),
        2
    );
}

#[test]
fn test_find_by_base_slug_every_record() {
    let temp_dir = create_valid_site();
    let store = build_store(temp_dir.path());

    for collection in Collection::ALL {
        for entry in store.entries(collection) {
            let locale = entry.record.lang();
            let slug = entry.slug_in(locale).expect("slug");
            let found = store
                .find_by_base_slug(collection, locale, slug)
                .expect("record should be found");
            assert_eq!(found.id, entry.id);
        }
    }
}

#[test]
fn test_find_by_base_slug_absent() {
    let temp_dir = create_valid_site();
    let store = build_store(temp_dir.path());

    assert!(store
        .find_by_base_slug(Collection::Projects, Locale::FRENCH, "nonexistent")
        .is_none());
}

#[test]
fn test_project_fields_and_defaults() {
    let temp_dir = create_valid_site();
    let store = build_store(temp_dir.path());

    let kv = store
        .find_by_base_slug(Collection::Projects, Locale::ENGLISH, "kv-store")
        .and_then(|entry| entry.record.as_project())
        .expect("kv-store project");
    assert_eq!(kv.category, Category::Professional);
    assert!(kv.featured);
    assert_eq!(kv.company.as_deref(), Some("Acme"));

    let chatbot = store
        .find_by_base_slug(Collection::Projects, Locale::ENGLISH, "chatbot")
        .and_then(|entry| entry.record.as_project())
        .expect("chatbot project");
    assert_eq!(chatbot.category, Category::Personal);
    assert!(!chatbot.featured);
    assert_eq!(chatbot.order, 999.0);
    assert_eq!(chatbot.short_desc, vec!["First line", "Second line"]);
}

#[test]
fn test_sorted_by_locale_puts_default_order_last() {
    let temp_dir = create_valid_site();
    let store = build_store(temp_dir.path());

    let sorted = store.sorted_by_locale(Collection::Projects, Locale::FRENCH);
    let slugs: Vec<_> = sorted.iter().map(|entry| entry.record.base_slug()).collect();
    assert_eq!(slugs, vec!["kv-store", "chatbot"]);
}

#[test]
fn test_education_dates_stay_strings() {
    let temp_dir = create_valid_site();
    let store = build_store(temp_dir.path());

    let master = store
        .find_by_base_slug(Collection::Education, Locale::FRENCH, "master")
        .and_then(|entry| entry.record.as_education())
        .expect("master");
    assert_eq!(master.start_date, "2018-09");
    assert_eq!(master.end_date.as_deref(), Some("2020-06"));
}

// ==================== Invalid Content Tests ====================

#[test]
fn test_invalid_site_reports_every_problem() {
    let temp_dir = create_valid_site();
    let root = temp_dir.path();

    // Two schema violations in one record
    write_entry(
        root,
        "experiences",
        "fr/broken.md",
        "lang: fr\nbaseSlug: broken\ncompany: Acme\nrole: Dev\nstartDate: '2020'\nlocation: Paris\ndescription: x\nachievements: []\nskills: []\nteam: core\n",
    );
    // Wrong folder for its lang
    write_entry(
        root,
        "education",
        "en/licence.md",
        "lang: fr\nbaseSlug: licence\nschool: U\ndegree: Licence\nstartDate: '2015'\nlocation: Lyon\norder: 2\n",
    );
    // No front matter at all
    fs::write(root.join("projects").join("fr").join("draft.md"), "# TODO\n")
        .expect("Failed to write");

    let raw = load_content(root).expect("Failed to load content");
    let report = ContentStore::build(&raw).expect_err("content should be rejected");

    assert_eq!(report.errors.len(), 3);

    let broken = report.errors_for(Collection::Experiences, "fr/broken.md");
    match broken.as_slice() {
        [RecordProblem::Schema(fields)] => {
            assert_eq!(fields.len(), 2);
            assert!(fields.get("order").is_some());
            assert!(fields.get("team").is_some());
        }
        other => panic!("unexpected problems: {:?}", other),
    }

    assert!(matches!(
        report.errors_for(Collection::Education, "en/licence.md").as_slice(),
        [RecordProblem::LocaleMismatch { .. }]
    ));
    assert!(matches!(
        report.errors_for(Collection::Projects, "fr/draft.md").as_slice(),
        [RecordProblem::Frontmatter(_)]
    ));
}

#[test]
fn test_duplicate_base_slug_is_rejected() {
    let temp_dir = create_valid_site();
    write_entry(
        temp_dir.path(),
        "projects",
        "en/kv-store-v2.md",
        &project_frontmatter("en", "kv-store", "KV engine v2", ""),
    );

    let raw = load_content(temp_dir.path()).expect("Failed to load content");
    let report = ContentStore::build(&raw).expect_err("duplicate should be rejected");

    // "kv-store-v2.md" sorts before "kv-store.md" ('-' < '.'), so it is seen first
    assert_eq!(
        report.errors_for(Collection::Projects, "en/kv-store.md"),
        vec![&RecordProblem::DuplicateBaseSlug {
            base_slug: "kv-store".to_string(),
            first_id: "en/kv-store-v2.md".to_string(),
        }]
    );
    assert!(report
        .errors_for(Collection::Projects, "en/kv-store-v2.md")
        .is_empty());
}

#[test]
fn test_missing_translation_is_only_a_warning() {
    let temp_dir = create_valid_site();
    write_entry(
        temp_dir.path(),
        "projects",
        "fr/solo.md",
        &project_frontmatter("fr", "solo", "Solo", ""),
    );

    let store = build_store(temp_dir.path());
    assert!(store.report().has_warnings());
    assert!(store.report().warnings[0].contains("\"solo\" has no en translation"));
}

// ==================== Page Rendering Workflow Tests ====================

#[test]
fn test_page_workflow_for_english_project_page() {
    let temp_dir = create_valid_site();
    let store = build_store(temp_dir.path());

    let path = "/en/projects/kv-store";
    let locale = resolve_locale(path);
    assert_eq!(locale, Locale::ENGLISH);

    let t = translate(locale.code());
    let projects = store.list_by_locale(Collection::Projects, locale);
    assert_eq!((t.projects.count)(projects.len()), "💼 2 projects");

    let links = alternate_links(path, locale.code());
    assert_eq!(links.current, "/en/projects/kv-store");
    assert_eq!(links.alternates["fr"], "/fr/projects/kv-store");

    let french = store
        .find_by_base_slug(Collection::Projects, Locale::FRENCH, "kv-store")
        .and_then(|entry| entry.record.as_project())
        .expect("french translation");
    assert_eq!(french.title, "Moteur KV");
}

#[test]
fn test_unknown_locale_path_falls_back_to_french() {
    let locale = resolve_locale("/de/projects");
    assert_eq!(locale, Locale::FRENCH);
    assert_eq!(translate("de").nav.projects, translate("fr").nav.projects);
    assert_eq!(alternate_links("/de/projects", "de").current, "/fr/de/projects");
}

#[test]
fn test_validated_records_revalidate_after_loading() {
    let temp_dir = create_valid_site();
    let store = build_store(temp_dir.path());

    for collection in Collection::ALL {
        for entry in store.entries(collection) {
            let raw = entry.record.to_raw().expect("serialize");
            let again = portfolio_content::content::validate(collection, &raw)
                .expect("record should revalidate");
            assert_eq!(again, entry.record);
        }
    }
}
