//! Catalog administration: adding and removing books

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, Categories, NewBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct AdminService {
    repository: Repository,
}

impl AdminService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    /// Validate the form and append the book. Returns the created book and a confirmation message.
    pub async fn add_book(&self, mut new_book: NewBook) -> AppResult<(Book, String)> {
        new_book.validate()?;

        let category = self.resolve_category(new_book.category.take())?;
        let book = self.repository.books.create(new_book, category).await;
        tracing::info!("Admin: added book id={} ({})", book.id, book.title);

        let message = format!("\"{}\" has been added to the library!", book.title);
        Ok((book, message))
    }

    /// Remove a book. Returns the removed book and a confirmation message.
    pub async fn delete_book(&self, id: u32) -> AppResult<(Book, String)> {
        let book = self.repository.books.delete(id).await?;
        tracing::info!("Admin: removed book id={} ({})", book.id, book.title);

        let message = format!("\"{}\" has been removed from the library.", book.title);
        Ok((book, message))
    }

    fn resolve_category(&self, requested: Option<String>) -> AppResult<String> {
        let categories = &self.repository.categories;
        match requested {
            None => categories
                .default_selectable()
                .map(str::to_string)
                .ok_or_else(|| AppError::Internal("no selectable category".to_string())),
            Some(c) if Categories::is_sentinel(&c) => Err(AppError::Validation(
                "A book must belong to a specific category".to_string(),
            )),
            Some(c) if categories.contains(&c) => Ok(c),
            Some(c) => Err(AppError::Validation(format!("Unknown category \"{}\"", c))),
        }
    }
}
