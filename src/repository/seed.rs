//! Seed dataset: the fixed collection the catalog starts from.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BorrowedBook, Categories},
};

const BUILTIN_SEED: &str = include_str!("../../data/seed.json");

/// Raw seed document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    pub categories: Vec<String>,
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub borrowed_books: Vec<BorrowedBook>,
}

/// Seed after validation
#[derive(Debug, Clone)]
pub struct Seed {
    pub categories: Categories,
    pub books: Vec<Book>,
    pub borrowed_books: Vec<BorrowedBook>,
}

impl SeedData {
    pub fn builtin() -> AppResult<Self> {
        Self::from_json(BUILTIN_SEED)
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Seed(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Load `path` when given, the built-in dataset otherwise
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        match path {
            Some(p) => {
                tracing::info!("Loading catalog seed from {}", p);
                Self::from_path(Path::new(p))
            }
            None => {
                tracing::info!("Loading built-in catalog seed");
                Self::builtin()
            }
        }
    }

    pub fn validate(self) -> AppResult<Seed> {
        let categories = Categories::new(self.categories);
        if categories.selectable().is_empty() {
            return Err(AppError::Seed("no book categories defined".to_string()));
        }

        let mut ids = HashSet::new();
        for book in &self.books {
            if !ids.insert(book.id) {
                return Err(AppError::Seed(format!("duplicate book id {}", book.id)));
            }
            if !book.copies_consistent() {
                return Err(AppError::Seed(format!(
                    "book {} has {} available copies out of {}",
                    book.id, book.available_copies, book.total_copies
                )));
            }
            if Categories::is_sentinel(&book.category) || !categories.contains(&book.category) {
                return Err(AppError::Seed(format!(
                    "book {} has unknown category \"{}\"",
                    book.id, book.category
                )));
            }
        }

        for borrowed in &self.borrowed_books {
            if borrowed.due_date < borrowed.borrow_date {
                return Err(AppError::Seed(format!(
                    "borrowed book {} is due before it was borrowed",
                    borrowed.id
                )));
            }
            if !ids.contains(&borrowed.book_id) {
                return Err(AppError::Seed(format!(
                    "borrowed book {} refers to unknown book id {}",
                    borrowed.id, borrowed.book_id
                )));
            }
        }

        Ok(Seed {
            categories,
            books: self.books,
            borrowed_books: self.borrowed_books,
        })
    }
}
