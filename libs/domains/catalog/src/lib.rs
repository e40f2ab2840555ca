//! Catalog Domain
//!
//! Client-side domain for a product catalog managed over a REST backend:
//! draft validation, in-memory filtering, and the four collection
//! operations (list, create, update, delete) plus point lookup.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │    View     │  ← catalog + filtered view + form state
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← validation gate, orchestration
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Client    │  ← remote API (trait + reqwest implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← entities, drafts, filters
//! └─────────────┘
//! ```
//!
//! The validation and filter engines are pure and never touch the network,
//! so they are testable without any backend. The presentation layer loads
//! the catalog once and narrows it locally.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{CatalogService, CatalogView, ProductFilter, RestCatalogClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = RestCatalogClient::new("http://localhost:8080/api");
//! let service = CatalogService::new(client);
//!
//! let mut view = CatalogView::new();
//! view.set_catalog(service.load_catalog().await?);
//! view.apply_filter(ProductFilter {
//!     min_price: Some(8.0),
//!     ..Default::default()
//! });
//! for product in view.products() {
//!     println!("{} — {}", product.name, product.display_price());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod filter;
pub mod models;
pub mod rest;
pub mod service;
pub mod validate;
pub mod view;

// Re-export commonly used types
pub use client::CatalogApi;
pub use error::{CatalogError, CatalogResult};
pub use models::{
    AvailabilityFilter, DeleteReceipt, DraftProduct, Product, ProductFilter, ProductInput,
};
pub use rest::{RestCatalogClient, DEFAULT_BASE_URL};
pub use service::CatalogService;
pub use validate::{fields, validate_draft, FieldErrors};
pub use view::{CatalogView, ProductForm};
