//! Aggregated results of validating a whole content tree.

use crate::content::loader::FrontmatterError;
use crate::content::schema::Collection;
use crate::content::validator::ValidationErrors;
use crate::i18n::Locale;
use std::fmt;
use thiserror::Error;

/// Why a record is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordProblem {
    #[error("{0}")]
    Schema(ValidationErrors),

    #[error("front matter: {0}")]
    Frontmatter(FrontmatterError),

    #[error("identifier must start with \"{lang}/\"")]
    LocaleMismatch { lang: Locale },

    #[error("baseSlug {base_slug:?} is already used by {first_id}")]
    DuplicateBaseSlug { base_slug: String, first_id: String },
}

/// A rejected record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{collection}/{id}: {problem}")]
pub struct RecordError {
    pub collection: Collection,
    pub id: String,
    pub problem: RecordProblem,
}

impl RecordError {
    pub fn new(collection: Collection, id: impl Into<String>, problem: RecordProblem) -> Self {
        Self {
            collection,
            id: id.into(),
            problem,
        }
    }
}

/// Validation report containing errors and warnings about the content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that must fail the build
    pub errors: Vec<RecordError>,

    /// Suspicious but renderable content
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Total number of invalid fields across all schema errors.
    pub fn field_error_count(&self) -> usize {
        self.errors
            .iter()
            .map(|error| match &error.problem {
                RecordProblem::Schema(errors) => errors.len(),
                _ => 0,
            })
            .sum()
    }

    /// Errors about one record, by collection and identifier.
    pub fn errors_for(&self, collection: Collection, id: &str) -> Vec<&RecordProblem> {
        self.errors
            .iter()
            .filter(|error| error.collection == collection && error.id == id)
            .map(|error| &error.problem)
            .collect()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} error(s), {} warning(s)",
            self.errors.len(),
            self.warnings.len()
        )?;
        for error in &self.errors {
            match &error.problem {
                RecordProblem::Schema(fields) => {
                    writeln!(f, "  error {}/{}:", error.collection, error.id)?;
                    for field in fields.errors() {
                        writeln!(f, "    - {}", field)?;
                    }
                }
                _ => writeln!(f, "  error {}", error)?,
            }
        }
        for warning in &self.warnings {
            writeln!(f, "  warning {}", warning)?;
        }
        Ok(())
    }
}
