//! Catalog service - orchestration between form state and the remote API
//!
//! Create and update are gated on the validation engine: a draft that fails
//! any field rule never reaches the network.

use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::client::CatalogApi;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{DeleteReceipt, DraftProduct, Product};
use crate::validate::validate_draft;

pub struct CatalogService<C: CatalogApi> {
    client: Arc<C>,
}

impl<C: CatalogApi> CatalogService<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Fetch the full catalog
    #[instrument(skip(self))]
    pub async fn load_catalog(&self) -> CatalogResult<Vec<Product>> {
        self.client.list().await
    }

    /// Fetch a single product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> CatalogResult<Product> {
        self.client
            .get(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    /// Validate a draft and create it on the backend
    #[instrument(skip(self, draft), fields(product_name = %draft.name))]
    pub async fn create_product(&self, draft: &DraftProduct) -> CatalogResult<Product> {
        let errors = validate_draft(draft);
        if !errors.is_empty() {
            return Err(CatalogError::Validation(errors));
        }
        self.client.create(draft.to_input()).await
    }

    /// Validate a draft and replace an existing product's fields.
    ///
    /// The id is never part of the payload; it stays whatever the backend
    /// assigned at creation.
    #[instrument(skip(self, draft))]
    pub async fn update_product(&self, id: Uuid, draft: &DraftProduct) -> CatalogResult<Product> {
        let errors = validate_draft(draft);
        if !errors.is_empty() {
            return Err(CatalogError::Validation(errors));
        }
        self.client.update(id, draft.to_input()).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> CatalogResult<DeleteReceipt> {
        self.client.delete(id).await
    }
}

impl<C: CatalogApi> Clone for CatalogService<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockCatalogApi;
    use crate::models::ProductInput;
    use crate::validate::fields;

    fn draft() -> DraftProduct {
        DraftProduct {
            name: "Apple".to_string(),
            price: "5".to_string(),
            category: "Fruit".to_string(),
            description: String::new(),
            available: true,
        }
    }

    fn created(input: &ProductInput) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            price: input.price,
            category: input.category.clone(),
            description: input.description.clone(),
            available: input.available,
        }
    }

    #[tokio::test]
    async fn create_submits_validated_draft() {
        let mut client = MockCatalogApi::new();
        client
            .expect_create()
            .withf(|input| input.name == "Apple" && input.price == 5.0 && input.available)
            .times(1)
            .returning(|input| Ok(created(&input)));

        let service = CatalogService::new(client);
        let product = service.create_product(&draft()).await.unwrap();
        assert_eq!(product.name, "Apple");
        assert_eq!(product.price, 5.0);
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_network() {
        let mut client = MockCatalogApi::new();
        client.expect_create().times(0);
        client.expect_update().times(0);

        let service = CatalogService::new(client);

        let bad = DraftProduct {
            price: "-1".to_string(),
            ..draft()
        };
        let err = service.create_product(&bad).await.unwrap_err();
        let errors = err.field_errors().expect("validation error");
        assert!(errors.first(fields::PRICE).is_some());

        let err = service
            .update_product(Uuid::new_v4(), &bad)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }

    #[tokio::test]
    async fn update_keeps_the_id_out_of_the_payload() {
        let id = Uuid::new_v4();
        let mut client = MockCatalogApi::new();
        client
            .expect_update()
            .withf(move |got_id, input| *got_id == id && input.name == "Apple")
            .times(1)
            .returning(|id, input| {
                let mut product = created(&input);
                product.id = id;
                Ok(product)
            });

        let service = CatalogService::new(client);
        let updated = service.update_product(id, &draft()).await.unwrap();
        assert_eq!(updated.id, id);
    }

    #[tokio::test]
    async fn get_maps_missing_product_to_not_found() {
        let id = Uuid::new_v4();
        let mut client = MockCatalogApi::new();
        client.expect_get().times(1).returning(|_| Ok(None));

        let service = CatalogService::new(client);
        let err = service.get_product(id).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(got) if got == id));
    }

    #[tokio::test]
    async fn delete_passes_the_receipt_through() {
        let mut client = MockCatalogApi::new();
        client.expect_delete().times(1).returning(|_| {
            Ok(DeleteReceipt {
                deleted: true,
                message: None,
            })
        });

        let service = CatalogService::new(client);
        let receipt = service.delete_product(Uuid::new_v4()).await.unwrap();
        assert!(receipt.deleted);
    }
}
