//! In-memory book collection

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Book, NewBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
    placeholder_cover: Arc<str>,
}

impl BooksRepository {
    pub fn new(books: Vec<Book>, placeholder_cover: &str) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
            placeholder_cover: Arc::from(placeholder_cover),
        }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Snapshot of all books, in collection order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn get(&self, id: u32) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Run `f` against the current records without copying them
    pub async fn with_records<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Book]) -> R,
    {
        let books = self.books.read().await;
        f(&books)
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Append a book. `category` must already be resolved and checked.
    pub async fn create(&self, new_book: NewBook, category: String) -> Book {
        let mut books = self.books.write().await;
        let id = books.iter().map(|b| b.id).max().map_or(1, |max| max + 1);

        let cover_image = match new_book.cover_image {
            Some(uri) if !uri.is_empty() => uri,
            _ => self.generated_cover(&new_book.title),
        };

        let book = Book {
            id,
            title: new_book.title,
            author: new_book.author,
            isbn: new_book.isbn,
            category,
            description: new_book.description,
            published_year: new_book.published_year,
            available: true,
            available_copies: new_book.total_copies,
            total_copies: new_book.total_copies,
            cover_image: Some(cover_image),
        };
        books.push(book.clone());
        book
    }

    /// Remove a book and return it
    pub async fn delete(&self, id: u32) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let position = books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;
        Ok(books.remove(position))
    }

    fn generated_cover(&self, title: &str) -> String {
        format!(
            "{}?height=300&width=200&query={}",
            self.placeholder_cover,
            urlencoding::encode(&format!("{} book cover", title))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str, copies: u32) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "Author".to_string(),
            isbn: "123".to_string(),
            category: None,
            description: String::new(),
            published_year: Some(2020),
            total_copies: copies,
            cover_image: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_next_id_and_full_availability() {
        let repo = BooksRepository::new(Vec::new(), "/placeholder.svg");
        let first = repo.create(new_book("First", 2), "Fiction".to_string()).await;
        let second = repo.create(new_book("Second", 1), "Fiction".to_string()).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.available);
        assert_eq!(first.available_copies, 2);
        assert_eq!(first.total_copies, 2);
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn test_id_follows_max_not_len() {
        let repo = BooksRepository::new(Vec::new(), "/placeholder.svg");
        for title in ["A", "B", "C"] {
            repo.create(new_book(title, 1), "Fiction".to_string()).await;
        }
        repo.delete(1).await.unwrap();
        let next = repo.create(new_book("D", 1), "Fiction".to_string()).await;
        assert_eq!(next.id, 4);
    }

    #[tokio::test]
    async fn test_generated_cover() {
        let repo = BooksRepository::new(Vec::new(), "/placeholder.svg");
        let book = repo.create(new_book("Dune Messiah", 1), "Fiction".to_string()).await;
        assert_eq!(
            book.cover_image.as_deref(),
            Some("/placeholder.svg?height=300&width=200&query=Dune%20Messiah%20book%20cover")
        );
    }

    #[tokio::test]
    async fn test_delete_and_get() {
        let repo = BooksRepository::new(Vec::new(), "/placeholder.svg");
        let created = repo.create(new_book("Gone", 1), "Fiction".to_string()).await;
        assert_eq!(repo.get(created.id).await.unwrap().title, "Gone");

        let removed = repo.delete(created.id).await.unwrap();
        assert_eq!(removed.title, "Gone");
        assert!(matches!(repo.get(created.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(repo.delete(created.id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_new_books_are_appended() {
        let repo = BooksRepository::new(Vec::new(), "/placeholder.svg");
        for title in ["A", "B", "C"] {
            repo.create(new_book(title, 1), "Fiction".to_string()).await;
        }
        let titles: Vec<String> = repo.with_records(|r| r.iter().map(|b| b.title.clone()).collect()).await;
        assert_eq!(titles, vec!["A", "B", "C"]);
    }
}
