//! Reading raw records from a content directory.
//!
//! Layout: `<root>/<collection>/<locale>/<slug>.md`, where each file starts
//! with a YAML front matter block delimited by `---` lines. The loader only
//! reads; it does not validate.

use crate::content::locator::CONTENT_SUFFIX;
use crate::content::schema::Collection;
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Why a content file has no usable front matter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontmatterError {
    #[error("file does not start with a `---` line")]
    Missing,

    #[error("no closing `---` line")]
    Unterminated,

    #[error("invalid YAML: {0}")]
    Yaml(String),
}

/// Unvalidated front matter of one content file.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    /// Identifier relative to the collection folder (e.g., "en/kv-store.md")
    pub id: String,
    pub data: Value,
}

impl RawEntry {
    pub fn new(id: impl Into<String>, data: Value) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

/// A content file whose front matter could not be read.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub collection: Collection,
    pub id: String,
    pub error: FrontmatterError,
}

/// Raw records of every collection, in enumeration order.
#[derive(Debug, Clone, Default)]
pub struct RawContent {
    collections: HashMap<Collection, Vec<RawEntry>>,
    failures: Vec<LoadFailure>,
}

impl RawContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, collection: Collection, entry: RawEntry) {
        self.collections.entry(collection).or_default().push(entry);
    }

    pub fn push_failure(&mut self, failure: LoadFailure) {
        self.failures.push(failure);
    }

    pub fn entries(&self, collection: Collection) -> &[RawEntry] {
        self.collections
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }

    /// Number of files read, including those with broken front matter.
    pub fn len(&self) -> usize {
        self.collections.values().map(Vec::len).sum::<usize>() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extract the YAML front matter of a content file.
///
/// An empty block yields an empty map.
pub fn parse_frontmatter(text: &str) -> Result<Value, FrontmatterError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines();

    match lines.next() {
        Some(line) if line.trim_end() == "---" => {}
        _ => return Err(FrontmatterError::Missing),
    }

    let mut yaml = String::new();
    let mut closed = false;
    for line in lines {
        if line.trim_end() == "---" {
            closed = true;
            break;
        }
        yaml.push_str(line);
        yaml.push('\n');
    }

    if !closed {
        return Err(FrontmatterError::Unterminated);
    }
    if yaml.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    serde_yaml::from_str(&yaml).map_err(|e| FrontmatterError::Yaml(e.to_string()))
}

/// Build the identifier of `path` relative to its collection folder.
fn content_id(collection_dir: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(collection_dir)
        .with_context(|| format!("{} is outside {}", path.display(), collection_dir.display()))?;

    let parts: Vec<String> = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}

/// Read every collection under `root`.
///
/// Files are enumerated in file-name order. A missing collection folder is
/// an empty collection; unreadable front matter is recorded as a failure.
pub fn load_content(root: &Path) -> Result<RawContent> {
    let mut content = RawContent::new();
    let extension = CONTENT_SUFFIX.trim_start_matches('.');

    for collection in Collection::ALL {
        let dir = root.join(collection.name());
        if !dir.is_dir() {
            warn!(
                "Collection folder {} not found, treating as empty",
                dir.display()
            );
            continue;
        }

        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(extension)
            {
                continue;
            }

            let id = content_id(&dir, path)?;
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;

            match parse_frontmatter(&text) {
                Ok(data) => content.push(collection, RawEntry::new(id, data)),
                Err(error) => content.push_failure(LoadFailure {
                    collection,
                    id,
                    error,
                }),
            }
        }

        debug!(
            "Loaded {} {} entries",
            content.entries(collection).len(),
            collection
        );
    }

    Ok(content)
}
