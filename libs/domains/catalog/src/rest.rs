//! REST implementation of the catalog API
//!
//! Thin wrapper over `reqwest` against a single product collection
//! resource: GET/POST on the base path, GET/PUT/DELETE on `{base}/{id}`.
//! All bodies are JSON.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::client::CatalogApi;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{DeleteReceipt, Product, ProductInput};

/// Default collection resource when no configuration is supplied
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone)]
pub struct RestCatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestCatalogClient {
    /// Client against the given collection resource base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Client reusing a preconfigured `reqwest::Client` (timeouts etc.)
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: Uuid) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Pass successful responses through; turn anything else into an
    /// `Api` error carrying the backend's message when it sent one.
    async fn check(response: reqwest::Response) -> CatalogResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str().map(str::to_string)))
            .unwrap_or_else(|| {
                if body.is_empty() {
                    status.to_string()
                } else {
                    body
                }
            });
        Err(CatalogError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> CatalogResult<T> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CatalogApi for RestCatalogClient {
    #[instrument(skip(self))]
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let response = self.http.get(&self.base_url).send().await?;
        let response = Self::check(response).await?;
        let products: Vec<Product> = Self::decode(response).await?;
        debug!(count = products.len(), "fetched catalog");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        let response = self.http.get(self.item_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check(response).await?;
        Ok(Some(Self::decode(response).await?))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: ProductInput) -> CatalogResult<Product> {
        let response = self.http.post(&self.base_url).json(&input).send().await?;
        let response = Self::check(response).await?;
        let product: Product = Self::decode(response).await?;
        debug!(id = %product.id, "created product");
        Ok(product)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: ProductInput) -> CatalogResult<Product> {
        let response = self
            .http
            .put(self.item_url(id))
            .json(&input)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Self::decode(response).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> CatalogResult<DeleteReceipt> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        let response = Self::check(response).await?;
        Self::decode(response).await
    }
}
