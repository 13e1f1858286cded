//! Repository layer over the in-memory catalog

pub mod books;
pub mod borrowed;
pub mod seed;

use std::sync::Arc;

use crate::models::Categories;

pub use seed::{Seed, SeedData};

/// Main repository struct holding the loaded collections
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub borrowed: borrowed::BorrowedRepository,
    pub categories: Arc<Categories>,
}

impl Repository {
    /// Create a repository from a validated seed
    pub fn new(seed: Seed, placeholder_cover: &str) -> Self {
        tracing::info!(
            books = seed.books.len(),
            borrowed = seed.borrowed_books.len(),
            categories = seed.categories.selectable().len(),
            "Catalog loaded"
        );
        Self {
            books: books::BooksRepository::new(seed.books, placeholder_cover),
            borrowed: borrowed::BorrowedRepository::new(seed.borrowed_books),
            categories: Arc::new(seed.categories),
        }
    }
}
