//! Preview binary - prints what each localized page would list
//!
//! Usage:
//!   cargo run --bin preview
//!
//! Optional:
//! - CONTENT_DIR (defaults to src/content)

use anyhow::{anyhow, Result};
use portfolio_content::config::{Config, LOG_DIRECTIVE};
use portfolio_content::content::{load_content, Category, Collection, ContentStore, Entry};
use portfolio_content::i18n::{alternate_links, Locale};
use tracing::info;

fn print_parcours(entries: &[&Entry], present: &str) {
    for entry in entries {
        if let Some(experience) = entry.record.as_experience() {
            println!(
                "  - {} @ {} ({} → {})",
                experience.role,
                experience.company,
                experience.start_date,
                experience.end_date.as_deref().unwrap_or(present)
            );
        } else if let Some(education) = entry.record.as_education() {
            println!(
                "  - {}, {} ({} → {})",
                education.degree,
                education.school,
                education.start_date,
                education.end_date.as_deref().unwrap_or(present)
            );
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse()?)
                .add_directive("preview=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let raw = load_content(&config.content_dir)?;
    let store = ContentStore::build(&raw).map_err(|report| anyhow!("{}", report))?;
    info!("Previewing {} records", store.len());

    for locale in Locale::all() {
        let t = locale.translations();
        let links = alternate_links(&format!("/{}/projects", locale), locale.code());

        println!("\n==================== {} ====================", locale.native_name());
        println!("{} ({})", t.projects.title, links.current);

        let projects = store.sorted_by_locale(Collection::Projects, locale);
        println!("{}", (t.projects.count)(projects.len()));

        for (category, section) in [
            (Category::Professional, &t.projects.professional),
            (Category::Personal, &t.projects.personal),
        ] {
            println!("\n{}", section.title);
            for entry in &projects {
                let Some(project) = entry.record.as_project() else {
                    continue;
                };
                if project.category != category {
                    continue;
                }
                let marker = if project.featured { "★" } else { "-" };
                println!("  {} {} [{}]", marker, project.title, project.tech.join(", "));
            }
        }

        println!("\n{}", t.parcours.experiences_title);
        print_parcours(
            &store.sorted_by_locale(Collection::Experiences, locale),
            t.parcours.present,
        );

        println!("\n{}", t.parcours.education_title);
        print_parcours(
            &store.sorted_by_locale(Collection::Education, locale),
            t.parcours.present,
        );
    }

    Ok(())
}
