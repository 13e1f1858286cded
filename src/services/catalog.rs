//! Catalog browsing service

use crate::{
    error::{AppError, AppResult},
    filter::FilterState,
    models::{Book, Categories, SearchCriteria},
    repository::Repository,
};

/// Result of one catalog search
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub books: Vec<Book>,
    pub total: usize,
    pub summary: String,
    pub query: String,
    pub category: String,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn categories(&self) -> &Categories {
        &self.repository.categories
    }

    /// Filter the current collection by query and category
    pub async fn search(&self, criteria: &SearchCriteria) -> SearchResults {
        self.repository
            .books
            .with_records(|records| {
                let state = FilterState::with_criteria(records, criteria);
                SearchResults {
                    books: state.results().cloned().collect(),
                    total: state.count(),
                    summary: state.summary(),
                    query: state.query().to_string(),
                    category: state.category().to_string(),
                }
            })
            .await
    }

    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: u32) -> AppResult<Book> {
        self.repository.books.get(id).await
    }

    /// Borrowing needs a circulation backend; only the book lookup happens here
    pub async fn borrow(&self, id: u32) -> AppResult<()> {
        let book = self.get_book(id).await?;
        if !book.available {
            return Err(AppError::BadRequest(
                "This book is currently not available for borrowing.".to_string(),
            ));
        }
        tracing::info!("Borrow requested for book id={} ({})", book.id, book.title);
        Err(AppError::NotImplemented(
            "Borrow functionality would be implemented with backend integration".to_string(),
        ))
    }

    pub async fn reserve(&self, id: u32) -> AppResult<()> {
        let book = self.get_book(id).await?;
        tracing::info!("Reservation requested for book id={} ({})", book.id, book.title);
        Err(AppError::NotImplemented(
            "Reserve functionality would be implemented with backend integration".to_string(),
        ))
    }
}
