use actix_web::web::Data;
use actix_web::Error;
use actix_web::HttpResponse;
use paperclip::actix::{
    api_v2_operation,
    web::{self},
};

use crate::api::{BooksQuery, CreateBookDto, ErrorResponse};
use crate::book_service::{BookService, BookServiceError};

fn client_error(err: BookServiceError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: err.to_string(),
    })
}

#[api_v2_operation]
pub async fn health() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok().finish())
}

#[api_v2_operation]
/// Lists all books, 204 when the catalog is empty.
/// Query parameters are accepted but not applied.
pub async fn get_all_books(
    book_service: Data<BookService>,
    query: web::Query<BooksQuery>,
) -> Result<HttpResponse, Error> {
    tracing::debug!("Listing books, ignored query {:?}", query.into_inner());
    let books = book_service.get_all().await;
    Ok(if books.is_empty() {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::Ok().json(books)
    })
}

#[api_v2_operation]
pub async fn create_book(
    book_service: Data<BookService>,
    dto: web::Json<CreateBookDto>,
) -> Result<HttpResponse, Error> {
    Ok(match book_service.create_book(dto.into_inner()).await {
        Ok(book) if book.book_id.trim().is_empty() => {
            tracing::error!("Created book has no id");
            HttpResponse::NotModified().finish()
        }
        Ok(book) => HttpResponse::Created().json(book),
        Err(err) => client_error(err),
    })
}

#[api_v2_operation]
pub async fn get_book(
    book_service: Data<BookService>,
    book_id: web::Path<String>,
) -> Result<HttpResponse, Error> {
    Ok(match book_service.get_by_id(Some(book_id.as_str())).await {
        Ok(Some(book)) => HttpResponse::Ok().json(book),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => client_error(err),
    })
}

#[api_v2_operation]
pub async fn delete_book(
    book_service: Data<BookService>,
    book_id: web::Path<String>,
) -> Result<HttpResponse, Error> {
    Ok(match book_service.delete_book(Some(book_id.as_str())).await {
        Ok(Some(book)) => HttpResponse::Ok().json(book),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(err) => client_error(err),
    })
}

#[cfg(test)]
mod handler_tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::web::Data;
    use actix_web::{test, App};
    use paperclip::actix::OpenApiExt;
    use serde_json::json;

    use crate::api::{Book, CreateBookDto, ErrorResponse};
    use crate::app_config::config_app;
    use crate::book_service::BookService;
    use crate::books_repository::InMemoryBooksRepository;

    macro_rules! init_app {
        ($books:expr) => {
            test::init_service(
                App::new()
                    .wrap_api()
                    .app_data(Data::new(BookService::new(Arc::new(
                        InMemoryBooksRepository::with_books($books),
                    ))))
                    .configure(config_app)
                    .build(),
            )
            .await
        };
    }

    fn create_book_dto() -> CreateBookDto {
        CreateBookDto {
            name: Some("Cool new Book".to_string()),
            description: Some("Cool description".to_string()),
            authors: Some(vec!["author1".to_string(), "author2".to_string()]),
            year_of_publication: 2020,
            number_of_words: 100500,
            rating: 10,
        }
    }

    fn stored_book(book_id: &str) -> Book {
        Book {
            book_id: book_id.to_string(),
            name: "Stored".to_string(),
            description: None,
            authors: Some(vec!["writer".to_string()]),
            year_of_publication: 1990,
            number_of_words: 10,
            rating: 3,
        }
    }

    #[actix_web::test]
    async fn test_health() {
        let app = init_app!(Vec::<Book>::new());
        let request = test::TestRequest::get().uri("/health").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_get_all_books_empty_catalog_returns_no_content() {
        let app = init_app!(Vec::<Book>::new());
        let request = test::TestRequest::get().uri("/books").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    /// Query parameters are accepted and do not change the listing
    async fn test_get_all_books_ignores_query_parameters() {
        let books = vec![stored_book("b"), stored_book("a")];
        let app = init_app!(books.clone());

        let request = test::TestRequest::get()
            .uri("/books?sortBy=byName&limit=1&offset=1&name=x&description=y&ratingMoreThan=9")
            .to_request();
        let response: Vec<Book> = test::call_and_read_body_json(&app, request).await;

        assert_eq!(response, books);
    }

    #[actix_web::test]
    /// Creates a book, fetches it by the returned id, deletes it, then checks it is gone
    async fn test_book_lifecycle() {
        let app = init_app!(Vec::<Book>::new());

        let request = test::TestRequest::post()
            .uri("/books")
            .set_json(create_book_dto())
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Book = test::read_body_json(response).await;

        let dto = create_book_dto();
        assert!(!created.book_id.is_empty());
        assert_eq!(Some(created.name.clone()), dto.name);
        assert_eq!(created.description, dto.description);
        assert_eq!(created.authors, dto.authors);
        assert_eq!(created.year_of_publication, 2020);
        assert_eq!(created.number_of_words, 100500);
        assert_eq!(created.rating, 10);

        let request = test::TestRequest::get()
            .uri(&format!("/books/{}", created.book_id))
            .to_request();
        let fetched: Book = test::call_and_read_body_json(&app, request).await;
        assert_eq!(fetched, created);

        let request = test::TestRequest::delete()
            .uri(&format!("/books/{}", created.book_id))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let deleted: Book = test::read_body_json(response).await;
        assert_eq!(deleted, created);

        let request = test::TestRequest::get()
            .uri(&format!("/books/{}", created.book_id))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_book_serializes_camel_case_fields() {
        let app = init_app!(Vec::<Book>::new());
        let request = test::TestRequest::post()
            .uri("/books")
            .set_json(json!({
                "name": "Cool new Book",
                "yearOfPublication": 2020,
                "numberOfWords": 100500,
                "rating": 10
            }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert!(body["bookId"].is_string());
        assert_eq!(body["name"], "Cool new Book");
        assert_eq!(body["yearOfPublication"], 2020);
        assert_eq!(body["numberOfWords"], 100500);
        assert!(body["description"].is_null());
        assert!(body["authors"].is_null());
    }

    #[actix_web::test]
    async fn test_create_book_with_invalid_name_returns_bad_request() {
        let app = init_app!(Vec::<Book>::new());

        let too_long = CreateBookDto {
            name: Some("Awesome book".repeat(120)),
            ..create_book_dto()
        };
        for body in [json!(too_long), json!({ "name": null }), json!({})] {
            let request = test::TestRequest::post()
                .uri("/books")
                .set_json(body)
                .to_request();
            let response = test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let error: ErrorResponse = test::read_body_json(response).await;
            assert!(error.error.starts_with("Book name"));
        }

        let request = test::TestRequest::get().uri("/books").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_missing_book_returns_not_found() {
        let app = init_app!(vec![stored_book("existing")]);
        let missing = uuid::Uuid::new_v4();

        let request = test::TestRequest::get()
            .uri(&format!("/books/{missing}"))
            .to_request();
        assert_eq!(
            test::call_service(&app, request).await.status(),
            StatusCode::NOT_FOUND
        );

        let request = test::TestRequest::delete()
            .uri(&format!("/books/{missing}"))
            .to_request();
        assert_eq!(
            test::call_service(&app, request).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    /// Blank id is a client error distinguishable from not found
    async fn test_blank_id_returns_bad_request() {
        let app = init_app!(vec![stored_book("existing")]);

        let request = test::TestRequest::get().uri("/books/%20%20%20").to_request();
        assert_eq!(
            test::call_service(&app, request).await.status(),
            StatusCode::BAD_REQUEST
        );

        let request = test::TestRequest::delete()
            .uri("/books/%20%20%20")
            .to_request();
        assert_eq!(
            test::call_service(&app, request).await.status(),
            StatusCode::BAD_REQUEST
        );
    }
}
