use indexmap::IndexMap;

use crate::api::{Book, BookId};
use crate::books_repository::BooksRepository;

#[derive(Default)]
pub struct InMemoryBooksRepository {
    books: parking_lot::RwLock<IndexMap<BookId, Book>>,
}

impl InMemoryBooksRepository {
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: parking_lot::RwLock::new(
                books
                    .into_iter()
                    .map(|book| (book.book_id.clone(), book))
                    .collect(),
            ),
        }
    }
}

#[async_trait::async_trait]
impl BooksRepository for InMemoryBooksRepository {
    async fn get_by_id(&self, book_id: &str) -> Option<Book> {
        self.books.read().get(book_id).cloned()
    }

    async fn add(&self, book: Book) -> Book {
        // insert keeps the original position when the id is already present
        self.books.write().insert(book.book_id.clone(), book.clone());
        book
    }

    async fn delete_by_id(&self, book_id: &str) -> Option<Book> {
        self.books.write().shift_remove(book_id)
    }

    async fn list_all(&self) -> Vec<Book> {
        self.books.read().values().cloned().collect()
    }
}
