//! Typed content records and their declared schemas.
//!
//! Each collection has a typed struct (what page code consumes) and a static
//! `Schema` (what the validator checks raw front matter against). The two are
//! kept side by side so a field change touches one file.

use crate::content::validator::{FieldKind, FieldSpec, Schema};
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default display position for projects without an explicit `order`
pub const DEFAULT_PROJECT_ORDER: f64 = 999.0;

/// The three content collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Projects,
    Experiences,
    Education,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Projects,
        Collection::Experiences,
        Collection::Education,
    ];

    /// Collection name, also the name of its content folder.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Experiences => "experiences",
            Collection::Education => "education",
        }
    }

    pub fn schema(&self) -> &'static Schema {
        match self {
            Collection::Projects => &PROJECT_SCHEMA,
            Collection::Experiences => &EXPERIENCE_SCHEMA,
            Collection::Education => &EDUCATION_SCHEMA,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ==================== Projects ====================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Personal,
    Professional,
}

impl Category {
    pub const VALUES: &'static [&'static str] = &["personal", "professional"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Professional => "professional",
        }
    }
}

/// External links shown on a project page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npm: Option<String>,
}

/// A project. Unknown top-level keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub lang: Locale,
    pub base_slug: String,
    pub title: String,
    pub short_desc: Vec<String>,
    pub tech: Vec<String>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_project_order")]
    pub order: f64,
    /// Employer, for professional projects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ProjectLinks>,
}

fn default_project_order() -> f64 {
    DEFAULT_PROJECT_ORDER
}

static LINKS_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::optional("github", FieldKind::Url),
        FieldSpec::optional("demo", FieldKind::Url),
        FieldSpec::optional("npm", FieldKind::Url),
    ],
    closed: true,
};

pub static PROJECT_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::required("lang", FieldKind::Locale),
        FieldSpec::required("baseSlug", FieldKind::Text),
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::required("shortDesc", FieldKind::TextList),
        FieldSpec::required("tech", FieldKind::TextList),
        FieldSpec::optional("category", FieldKind::Choice(Category::VALUES)),
        FieldSpec::optional("featured", FieldKind::Boolean),
        FieldSpec::optional("order", FieldKind::Number),
        FieldSpec::optional("company", FieldKind::Text),
        FieldSpec::optional("links", FieldKind::Object(&LINKS_SCHEMA)),
    ],
    closed: false,
};

// ==================== Experiences ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExperienceRecord {
    pub lang: Locale,
    pub base_slug: String,
    pub company: String,
    pub role: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub location: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub skills: Vec<String>,
    pub order: f64,
    /// `baseSlug`s of projects built during this experience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_projects: Option<Vec<String>>,
}

impl ExperienceRecord {
    /// An experience without an end date is still running.
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }
}

pub static EXPERIENCE_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::required("lang", FieldKind::Locale),
        FieldSpec::required("baseSlug", FieldKind::Text),
        FieldSpec::required("company", FieldKind::Text),
        FieldSpec::required("role", FieldKind::Text),
        FieldSpec::required("startDate", FieldKind::Text),
        FieldSpec::optional("endDate", FieldKind::Text),
        FieldSpec::required("location", FieldKind::Text),
        FieldSpec::required("description", FieldKind::Text),
        FieldSpec::required("achievements", FieldKind::TextList),
        FieldSpec::required("skills", FieldKind::TextList),
        FieldSpec::required("order", FieldKind::Number),
        FieldSpec::optional("relatedProjects", FieldKind::TextList),
    ],
    closed: true,
};

// ==================== Education ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EducationRecord {
    pub lang: Locale,
    pub base_slug: String,
    pub school: String,
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    pub order: f64,
}

pub static EDUCATION_SCHEMA: Schema = Schema {
    fields: &[
        FieldSpec::required("lang", FieldKind::Locale),
        FieldSpec::required("baseSlug", FieldKind::Text),
        FieldSpec::required("school", FieldKind::Text),
        FieldSpec::required("degree", FieldKind::Text),
        FieldSpec::optional("field", FieldKind::Text),
        FieldSpec::required("startDate", FieldKind::Text),
        FieldSpec::optional("endDate", FieldKind::Text),
        FieldSpec::required("location", FieldKind::Text),
        FieldSpec::optional("highlights", FieldKind::TextList),
        FieldSpec::required("order", FieldKind::Number),
    ],
    closed: true,
};

// ==================== Typed Record ====================

/// A validated record of any collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedRecord {
    Project(ProjectRecord),
    Experience(ExperienceRecord),
    Education(EducationRecord),
}

impl TypedRecord {
    pub fn collection(&self) -> Collection {
        match self {
            TypedRecord::Project(_) => Collection::Projects,
            TypedRecord::Experience(_) => Collection::Experiences,
            TypedRecord::Education(_) => Collection::Education,
        }
    }

    pub fn lang(&self) -> Locale {
        match self {
            TypedRecord::Project(record) => record.lang,
            TypedRecord::Experience(record) => record.lang,
            TypedRecord::Education(record) => record.lang,
        }
    }

    pub fn base_slug(&self) -> &str {
        match self {
            TypedRecord::Project(record) => &record.base_slug,
            TypedRecord::Experience(record) => &record.base_slug,
            TypedRecord::Education(record) => &record.base_slug,
        }
    }

    /// Display sort key. Ties have no defined order.
    pub fn order(&self) -> f64 {
        match self {
            TypedRecord::Project(record) => record.order,
            TypedRecord::Experience(record) => record.order,
            TypedRecord::Education(record) => record.order,
        }
    }

    pub fn as_project(&self) -> Option<&ProjectRecord> {
        match self {
            TypedRecord::Project(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_experience(&self) -> Option<&ExperienceRecord> {
        match self {
            TypedRecord::Experience(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_education(&self) -> Option<&EducationRecord> {
        match self {
            TypedRecord::Education(record) => Some(record),
            _ => None,
        }
    }

    /// Raw front matter form of this record (camelCase keys, absent
    /// optionals omitted).
    pub fn to_raw(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
