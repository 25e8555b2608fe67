use crate::api::{Book, CreateBookDto};
use crate::book_service::{BookService, BookServiceError};

fn sample_book(
    name: &str,
    description: &str,
    authors: &[&str],
    year_of_publication: i32,
    number_of_words: i32,
    rating: i32,
) -> CreateBookDto {
    CreateBookDto {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        authors: Some(authors.iter().map(|author| author.to_string()).collect()),
        year_of_publication,
        number_of_words,
        rating,
    }
}

/// Demo catalog used when the server starts with `seed_sample_books`
pub fn sample_books() -> Vec<CreateBookDto> {
    vec![
        sample_book(
            "The Rust Programming Language",
            "Official book on the Rust language",
            &["Steve Klabnik", "Carol Nichols"],
            2018,
            180_000,
            9,
        ),
        sample_book(
            "Programming Rust",
            "Fast, safe systems development",
            &["Jim Blandy", "Jason Orendorff", "Leonora Tindall"],
            2021,
            260_000,
            8,
        ),
        sample_book(
            "Zero To Production In Rust",
            "An introduction to backend development",
            &["Luca Palmieri"],
            2022,
            150_000,
            9,
        ),
    ]
}

/// Creates the books through the service so they get ids and pass validation
pub async fn seed_catalog(
    book_service: &BookService,
    books: Vec<CreateBookDto>,
) -> Result<Vec<Book>, BookServiceError> {
    let mut created = Vec::with_capacity(books.len());
    for dto in books {
        created.push(book_service.create_book(dto).await?);
    }
    tracing::info!("Seeded catalog with {} books", created.len());
    Ok(created)
}
