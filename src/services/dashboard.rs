//! Borrowed-books dashboard

use chrono::{NaiveDate, Utc};

use crate::{
    error::{AppError, AppResult},
    models::{BorrowedBookView, DashboardSummary},
    repository::Repository,
};

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
    placeholder_cover: String,
}

impl DashboardService {
    pub fn new(repository: Repository, placeholder_cover: &str) -> Self {
        Self {
            repository,
            placeholder_cover: placeholder_cover.to_string(),
        }
    }

    /// Summary as of today (UTC)
    pub fn summary(&self) -> DashboardSummary {
        self.summary_on(Utc::now().date_naive())
    }

    pub fn summary_on(&self, today: NaiveDate) -> DashboardSummary {
        let books: Vec<BorrowedBookView> = self
            .repository
            .borrowed
            .list()
            .iter()
            .map(|b| BorrowedBookView::new(b, today, &self.placeholder_cover))
            .collect();
        let overdue_count = books.iter().filter(|b| b.is_overdue).count();

        DashboardSummary {
            total_borrowed: books.len(),
            overdue_count,
            books,
        }
    }

    pub fn renew(&self) -> AppResult<()> {
        Err(AppError::NotImplemented(
            "Renew functionality would be implemented with backend".to_string(),
        ))
    }

    pub fn history(&self) -> AppResult<()> {
        Err(AppError::NotImplemented(
            "History functionality would be implemented with backend".to_string(),
        ))
    }
}
