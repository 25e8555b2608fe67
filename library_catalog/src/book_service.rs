use std::sync::Arc;

use crate::api::{Book, CreateBookDto};
use crate::books_repository::BooksRepository;

/// Upper bound on the number of characters of a trimmed book name
pub const MAX_BOOK_NAME_LENGTH: usize = 1000;

#[derive(thiserror::Error, Debug, Eq, PartialEq)]
pub enum BookServiceError {
    #[error("Book id is missing or blank")]
    BadId,

    #[error("Book name is missing")]
    NameIsNull,

    #[error("Book name is too long: {length} characters, at most {max} allowed")]
    NameIsTooLong { length: usize, max: usize },
}

/// Checks that the id is present and not blank, returns it unchanged
pub fn validate_id(book_id: Option<&str>) -> Result<&str, BookServiceError> {
    match book_id {
        Some(book_id) if !book_id.trim().is_empty() => Ok(book_id),
        _ => Err(BookServiceError::BadId),
    }
}

/// Checks that the name is present, not blank and not longer than MAX_BOOK_NAME_LENGTH
/// once trimmed. The name is returned as supplied.
pub fn get_validated_book_name(name: Option<&str>) -> Result<&str, BookServiceError> {
    let name = name.ok_or(BookServiceError::NameIsNull)?;
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BookServiceError::NameIsNull);
    }
    let length = trimmed.chars().count();
    if length > MAX_BOOK_NAME_LENGTH {
        return Err(BookServiceError::NameIsTooLong {
            length,
            max: MAX_BOOK_NAME_LENGTH,
        });
    }
    Ok(name)
}

/// Validates requests and forwards them to the books repository.
/// Validation always happens before the repository is touched.
#[derive(Clone)]
pub struct BookService {
    books_repository: Arc<dyn BooksRepository>,
}

impl BookService {
    pub fn new(books_repository: Arc<dyn BooksRepository>) -> Self {
        Self { books_repository }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_all(&self) -> Vec<Book> {
        self.books_repository.list_all().await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, book_id: Option<&str>) -> Result<Option<Book>, BookServiceError> {
        let book_id = validate_id(book_id).inspect_err(|err| tracing::warn!("{err}"))?;
        Ok(self.books_repository.get_by_id(book_id).await)
    }

    #[tracing::instrument(skip_all)]
    pub async fn create_book(&self, dto: CreateBookDto) -> Result<Book, BookServiceError> {
        let name = get_validated_book_name(dto.name.as_deref())
            .inspect_err(|err| tracing::warn!("{err}"))?
            .to_string();

        let book = Book {
            book_id: uuid::Uuid::new_v4().to_string(),
            name,
            description: dto.description,
            authors: dto.authors,
            year_of_publication: dto.year_of_publication,
            number_of_words: dto.number_of_words,
            rating: dto.rating,
        };
        let book = self.books_repository.add(book).await;
        tracing::info!(book_id = %book.book_id, "Book created");
        Ok(book)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_book(
        &self,
        book_id: Option<&str>,
    ) -> Result<Option<Book>, BookServiceError> {
        let book_id = validate_id(book_id).inspect_err(|err| tracing::warn!("{err}"))?;
        let deleted = self.books_repository.delete_by_id(book_id).await;
        if deleted.is_some() {
            tracing::info!(book_id, "Book deleted");
        }
        Ok(deleted)
    }
}
