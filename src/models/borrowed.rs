//! Borrowed book model (dashboard)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dates on the dashboard read like "Mar 5, 2025"
const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// A book currently on loan, as listed on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowedBook {
    pub id: u32,
    pub book_id: u32,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl BorrowedBook {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today
    }
}

/// Borrowed book with display fields for the dashboard
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowedBookView {
    pub id: u32,
    pub book_id: u32,
    pub title: String,
    pub author: String,
    pub cover_image: String,
    pub borrow_date: NaiveDate,
    pub due_date: NaiveDate,
    /// e.g. "Mar 5, 2025"
    pub borrowed_on: String,
    pub due_on: String,
    pub is_overdue: bool,
}

impl BorrowedBookView {
    pub fn new(book: &BorrowedBook, today: NaiveDate, placeholder: &str) -> Self {
        Self {
            id: book.id,
            book_id: book.book_id,
            title: book.title.clone(),
            author: book.author.clone(),
            cover_image: book
                .cover_image
                .clone()
                .filter(|uri| !uri.is_empty())
                .unwrap_or_else(|| placeholder.to_string()),
            borrow_date: book.borrow_date,
            due_date: book.due_date,
            borrowed_on: format_date(book.borrow_date),
            due_on: format_date(book.due_date),
            is_overdue: book.is_overdue(today),
        }
    }
}

/// Dashboard overview
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_borrowed: usize,
    pub overdue_count: usize,
    pub books: Vec<BorrowedBookView>,
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}
