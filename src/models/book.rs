//! Book (catalog entry) model and related types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A single catalog entry with bibliographic and availability metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Raw ISBN, separators included
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published_year: Option<i32>,
    pub available: bool,
    pub available_copies: u32,
    pub total_copies: u32,
    #[serde(default)]
    pub cover_image: Option<String>,
}

impl Book {
    /// True when `0 <= available_copies <= total_copies`
    pub fn copies_consistent(&self) -> bool {
        self.available_copies <= self.total_copies
    }

    pub fn cover_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.cover_image.as_deref() {
            Some(uri) if !uri.is_empty() => uri,
            _ => placeholder,
        }
    }

    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Not Available"
        }
    }

    pub fn copies_label(&self) -> String {
        format!(
            "{} of {} copies available",
            self.available_copies, self.total_copies
        )
    }
}

/// Admin form payload for adding a book.
/// Copies start fully available and the cover falls back to a generated placeholder.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "ISBN is required"))]
    pub isbn: String,
    /// Defaults to the first selectable category
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published_year: Option<i32>,
    #[validate(range(min = 1, message = "A book needs at least one copy"))]
    #[serde(default = "default_total_copies")]
    pub total_copies: u32,
    #[serde(default)]
    pub cover_image: Option<String>,
}

fn default_total_copies() -> u32 {
    1
}

/// Catalog search criteria. Absent values mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SearchCriteria {
    /// Free text matched against title, author and ISBN
    pub q: Option<String>,
    /// Exact category label, or the "All Categories" sentinel
    pub category: Option<String>,
}

impl SearchCriteria {
    pub fn new(query: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            q: Some(query.into()),
            category: Some(category.into()),
        }
    }

    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }
}
