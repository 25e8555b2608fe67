use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Identifier of a book, generated by the service as a hyphenated UUID v4
pub type BookId = String;

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
/// Catalog entry as stored in the repository and returned by the api
pub struct Book {
    pub book_id: BookId,
    pub name: String,
    pub description: Option<String>,
    pub authors: Option<Vec<String>>,
    pub year_of_publication: i32,
    pub number_of_words: i32,
    pub rating: i32,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
/// Payload of POST /books. Carries no id, the service assigns one on creation
pub struct CreateBookDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub year_of_publication: i32,
    #[serde(default)]
    pub number_of_words: i32,
    #[serde(default)]
    pub rating: i32,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
/// Query parameters accepted by GET /books.
/// They are parsed and logged but do not change the listing.
pub struct BooksQuery {
    pub sort_by: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub rating_more_than: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, Apiv2Schema)]
/// Body returned together with 4xx statuses caused by invalid input
pub struct ErrorResponse {
    pub error: String,
}
