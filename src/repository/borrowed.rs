//! Borrowed books shown on the dashboard (read-only)

use std::sync::Arc;

use crate::models::BorrowedBook;

#[derive(Clone)]
pub struct BorrowedRepository {
    books: Arc<[BorrowedBook]>,
}

impl BorrowedRepository {
    pub fn new(books: Vec<BorrowedBook>) -> Self {
        Self {
            books: books.into(),
        }
    }

    pub fn list(&self) -> &[BorrowedBook] {
        &self.books
    }
}
