//! Content collections: projects, experiences and education.
//!
//! Content is authored offline as Markdown files with YAML front matter,
//! one folder per locale. This module turns those files into typed,
//! validated records and selects them per locale.
//!
//! # Architecture
//!
//! - `schema`: Typed records and their declared schemas
//! - `validator`: Field-level schema validation with aggregated errors
//! - `loader`: Reads front matter from a content directory
//! - `locator`: Locale prefix filtering and lookup by `baseSlug`
//! - `report`: Errors and warnings gathered over the whole tree
//! - `store`: Validated content ready for page generation
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_content::content::{load_content, Collection, ContentStore};
//! use portfolio_content::i18n::Locale;
//!
//! let raw = load_content(Path::new("src/content"))?;
//! let store = ContentStore::build(&raw).map_err(|report| anyhow!("{report}"))?;
//! let projects = store.sorted_by_locale(Collection::Projects, Locale::ENGLISH);
//! ```

mod loader;
mod locator;
mod report;
mod schema;
mod store;
mod validator;

pub use loader::{
    load_content, parse_frontmatter, FrontmatterError, LoadFailure, RawContent, RawEntry,
};
pub use locator::{
    entry_slug, find_by_base_slug, list_by_locale, sort_by_order, Entry, CONTENT_SUFFIX,
};
pub use report::{RecordError, RecordProblem, ValidationReport};
pub use schema::{
    Category, Collection, EducationRecord, ExperienceRecord, ProjectLinks, ProjectRecord,
    TypedRecord, DEFAULT_PROJECT_ORDER,
};
pub use store::ContentStore;
pub use validator::{
    check_schema, validate, FieldError, FieldErrorKind, FieldKind, FieldSpec, Schema,
    ValidationErrors,
};
