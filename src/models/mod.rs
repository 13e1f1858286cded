//! Data models for the eLibrary catalog

pub mod book;
pub mod borrowed;
pub mod category;

// Re-export commonly used types
pub use book::{Book, NewBook, SearchCriteria};
pub use borrowed::{BorrowedBook, BorrowedBookView, DashboardSummary};
pub use category::{Categories, ALL_CATEGORIES};
