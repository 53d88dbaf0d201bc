use anyhow::{bail, Result};
use portfolio_content::config::{Config, LOG_DIRECTIVE};
use portfolio_content::content::{load_content, ContentStore, RecordProblem};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored in CI)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!("Checking content in {}", config.content_dir.display());

    let raw = load_content(&config.content_dir)?;
    info!("Read {} content files", raw.len());

    let store = match ContentStore::build(&raw) {
        Ok(store) => store,
        Err(report) => {
            for record_error in &report.errors {
                match &record_error.problem {
                    RecordProblem::Schema(fields) => {
                        for field in fields.errors() {
                            error!(
                                "{}/{}: {}",
                                record_error.collection, record_error.id, field
                            );
                        }
                    }
                    _ => error!("{}", record_error),
                }
            }
            for warning in &report.warnings {
                warn!("{}", warning);
            }
            bail!(
                "Content validation failed: {} invalid record(s), {} invalid field(s)",
                report.errors.len(),
                report.field_error_count()
            );
        }
    };

    for warning in &store.report().warnings {
        warn!("{}", warning);
    }

    if config.fail_on_warnings && store.report().has_warnings() {
        bail!(
            "Content validation failed: {} warning(s) with FAIL_ON_WARNINGS set",
            store.report().warnings.len()
        );
    }

    info!("✓ {} records valid", store.len());
    Ok(())
}
