pub use in_memory_books_repository::InMemoryBooksRepository;

use crate::api::Book;

mod in_memory_books_repository;

/// Storage of books keyed by their id.
/// Performs no validation, ids are treated as opaque strings.
/// Every call is atomic on its own, there is no cross-call transaction.
#[async_trait::async_trait]
pub trait BooksRepository: Send + Sync {
    /// Retrieves the book stored under the id, None if there is no such book
    async fn get_by_id(&self, book_id: &str) -> Option<Book>;
    /// Stores the book under its id and returns the stored book
    async fn add(&self, book: Book) -> Book;
    /// Removes the book stored under the id, returns it or None if it was not found
    async fn delete_by_id(&self, book_id: &str) -> Option<Book>;
    /// Lists all books in insertion order
    async fn list_all(&self) -> Vec<Book>;
}
