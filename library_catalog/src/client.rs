use anyhow::{anyhow, bail, Context};
use reqwest::{StatusCode, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use reqwest_tracing::TracingMiddleware;

use crate::api::{Book, CreateBookDto, ErrorResponse};

const MAX_RETRIES: u32 = 3;

pub struct LibraryCatalogClient {
    url: Url,
    client: ClientWithMiddleware,
    // POST /books is not idempotent, a retried create would add a second book
    non_retrying_client: ClientWithMiddleware,
}

async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    response
        .json::<ErrorResponse>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| status.to_string())
}

impl LibraryCatalogClient {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let reqwest_client = reqwest::Client::builder()
            .build()
            .context("Failed to build reqwest client")?;
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES);
        let client = ClientBuilder::new(reqwest_client.clone())
            // Insert the tracing middleware
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();
        let non_retrying_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(Self {
            url: Url::parse(url).context("Invalid catalog url")?,
            client,
            non_retrying_client,
        })
    }

    /// Appends path segments to the catalog url, each one percent-encoded as a whole
    fn endpoint(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Catalog url {} cannot be a base", self.url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Calls GET /books endpoint
    /// Returns empty list when server answers with no content
    pub async fn list_books(&self) -> anyhow::Result<Vec<Book>> {
        let response = self
            .client
            .get(self.endpoint(&["books"])?)
            .send()
            .await?;
        if response.status() == StatusCode::NO_CONTENT {
            Ok(vec![])
        } else if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            bail!("Failed to list books {}", error_message(response).await)
        }
    }

    /// Calls POST /books endpoint
    /// Returns created book, None if server did not create it
    pub async fn create_book(&self, dto: &CreateBookDto) -> anyhow::Result<Option<Book>> {
        let response = self
            .non_retrying_client
            .post(self.endpoint(&["books"])?)
            .json(dto)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_MODIFIED {
            Ok(None)
        } else if response.status().is_success() {
            Ok(Some(response.json().await?))
        } else {
            bail!("Failed to create book {}", error_message(response).await)
        }
    }

    /// Calls GET /books/{book_id} endpoint
    /// Returns book if present
    /// None if book was not in the catalog
    /// and error in case of any other failure
    pub async fn get_book(&self, book_id: &str) -> anyhow::Result<Option<Book>> {
        let response = self
            .client
            .get(self.endpoint(&["books", book_id])?)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            Ok(None)
        } else if response.status().is_success() {
            Ok(Some(response.json().await?))
        } else {
            bail!("Failed to get book {}", error_message(response).await)
        }
    }

    /// Calls DELETE /books/{book_id} endpoint
    /// Returns removed book, None if book was not in the catalog
    pub async fn delete_book(&self, book_id: &str) -> anyhow::Result<Option<Book>> {
        let response = self
            .client
            .delete(self.endpoint(&["books", book_id])?)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            Ok(None)
        } else if response.status().is_success() {
            Ok(Some(response.json().await?))
        } else {
            bail!("Failed to delete book {}", error_message(response).await)
        }
    }
}
