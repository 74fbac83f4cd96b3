//! reqwest implementation of [`AdminApi`]

use async_trait::async_trait;
use reqwest::{Client, Response, Url};

use super::AdminApi;
use crate::{
    config::ApiConfig,
    error::{AppError, AppResult},
    models::{
        book::{BookId, Quantity},
        search::SearchResult,
        selected::NewBook,
    },
};

#[derive(Clone)]
pub struct HttpAdminApi {
    client: Client,
    base_url: Url,
    config: ApiConfig,
}

impl HttpAdminApi {
    /// Build a client for the admin endpoints below `config.base_url`.
    ///
    /// No request timeout is set; calls rely on the transport defaults.
    pub fn new(config: ApiConfig) -> AppResult<Self> {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ApiConfig) -> AppResult<Self> {
        // Endpoint paths are relative; the base must end with '/' to keep its path
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| AppError::Config(format!("Invalid base URL {}: {}", config.base_url, e)))?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::Config(format!("Invalid endpoint path {}: {}", path, e)))
    }

    /// Body of a successful response, or the body as an opaque server error
    async fn read_body(response: Response) -> AppResult<String> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            tracing::debug!("Server responded {}: {}", status, body);
            Err(AppError::Server {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl AdminApi for HttpAdminApi {
    async fn update_quantity(&self, book_id: BookId, quantity: &Quantity) -> AppResult<String> {
        let url = self.endpoint(&self.config.quantity_route.path(book_id))?;
        tracing::debug!("PUT {} quantity={}", url, quantity.as_str());

        let response = self
            .client
            .put(url)
            .query(&[("quantity", quantity.as_str())])
            .send()
            .await?;

        Self::read_body(response).await
    }

    async fn delete_book(&self, book_id: BookId) -> AppResult<String> {
        let url = self.endpoint(&format!("admin/books/{}", book_id))?;
        tracing::debug!("DELETE {}", url);

        let response = self.client.delete(url).send().await?;

        Self::read_body(response).await
    }

    async fn search_books(&self, keyword: &str) -> AppResult<SearchResult> {
        let url = self.endpoint(&self.config.search_path)?;
        tracing::debug!("GET {} keyword={}", url, keyword);

        let response = self
            .client
            .get(url)
            .query(&[("keyword", keyword)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(AppError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        SearchResult::from_slice(&body)
    }

    async fn register_book(&self, book: &NewBook) -> AppResult<String> {
        let url = self.endpoint(&self.config.register_path)?;
        tracing::debug!("POST {} isbn={}", url, book.book.isbn);

        let response = self
            .client
            .post(url)
            .form(&book.form_fields())
            .send()
            .await?;

        Self::read_body(response).await
    }
}
