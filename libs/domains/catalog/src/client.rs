use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{DeleteReceipt, Product, ProductInput};

/// Remote catalog API
///
/// The four REST operations the dashboard needs, behind a trait so the
/// service and view layers stay independently testable without a backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full catalog
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    /// Fetch a single product; `None` when the backend has no such id
    async fn get(&self, id: Uuid) -> CatalogResult<Option<Product>>;

    /// Create a product; the backend assigns the id
    async fn create(&self, input: ProductInput) -> CatalogResult<Product>;

    /// Replace an existing product's fields
    async fn update(&self, id: Uuid, input: ProductInput) -> CatalogResult<Product>;

    /// Delete a product
    async fn delete(&self, id: Uuid) -> CatalogResult<DeleteReceipt>;
}
