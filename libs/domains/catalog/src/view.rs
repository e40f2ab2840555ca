//! Dashboard state: the in-memory catalog with its derived filtered view,
//! and the draft form with its error mapping.
//!
//! Nothing here is reactive. The filtered view is recomputed only by the
//! explicit calls below, so state transitions stay easy to follow and test.

use uuid::Uuid;

use crate::models::{DraftProduct, Product, ProductFilter};
use crate::validate::{validate_draft, FieldErrors};

/// The full catalog plus the currently displayed subset
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    catalog: Vec<Product>,
    filter: ProductFilter,
    filtered: Vec<Product>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog after a (re)fetch; the displayed view resets to
    /// the full collection
    pub fn set_catalog(&mut self, catalog: Vec<Product>) {
        self.filtered = catalog.clone();
        self.catalog = catalog;
    }

    /// Store a filter query and recompute the displayed view
    pub fn apply_filter(&mut self, filter: ProductFilter) {
        self.filtered = filter.apply(&self.catalog);
        self.filter = filter;
    }

    /// Clear all filter state and restore the full collection
    pub fn reset_filters(&mut self) {
        self.filter = ProductFilter::default();
        self.filtered = self.catalog.clone();
    }

    /// Insert a created product, or replace the entry with the same id
    /// after an update; the view is recomputed against the active filter
    pub fn upsert(&mut self, product: Product) {
        match self.catalog.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => self.catalog.push(product),
        }
        self.recompute();
    }

    /// Drop a deleted product from the collection and the view
    pub fn remove(&mut self, id: Uuid) {
        self.catalog.retain(|p| p.id != id);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = self.filter.apply(&self.catalog);
    }

    /// The full in-memory collection
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// The currently displayed subset
    pub fn products(&self) -> &[Product] {
        &self.filtered
    }

    /// The active filter query
    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }
}

/// Add/edit form state: a draft plus the error mapping rendered next to it
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub draft: DraftProduct,
    errors: FieldErrors,
    editing: Option<Uuid>,
}

impl ProductForm {
    /// Blank add form (empty fields, available on)
    pub fn create() -> Self {
        Self::default()
    }

    /// Edit form preloaded with an existing product's values
    pub fn edit(product: &Product) -> Self {
        Self {
            draft: DraftProduct::from_product(product),
            errors: FieldErrors::default(),
            editing: Some(product.id),
        }
    }

    /// Id of the product being edited; `None` on the add form
    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    /// Run the validation engine over the draft, replacing any previous
    /// errors (including a stale backend message). True when submittable.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_draft(&self.draft);
        self.errors.is_empty()
    }

    /// Merge the single message from a failed remote call so the form
    /// renders it alongside any field errors
    pub fn record_backend_error(&mut self, message: impl Into<String>) {
        self.errors.set_backend(message);
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AvailabilityFilter;
    use crate::validate::fields;

    fn product(name: &str, price: f64, category: &str, available: bool) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            category: category.to_string(),
            description: String::new(),
            available,
        }
    }

    fn seeded_view() -> CatalogView {
        let mut view = CatalogView::new();
        view.set_catalog(vec![
            product("Apple", 5.0, "Fruit", true),
            product("Juice", 10.0, "fruit juice", true),
            product("Hammer", 15.0, "Tools", false),
        ]);
        view
    }

    #[test]
    fn set_catalog_shows_everything() {
        let view = seeded_view();
        assert_eq!(view.products().len(), 3);
        assert_eq!(view.products(), view.catalog());
    }

    #[test]
    fn apply_then_reset_restores_full_collection() {
        let mut view = seeded_view();
        let full = view.catalog().to_vec();

        view.apply_filter(ProductFilter {
            min_price: Some(8.0),
            ..Default::default()
        });
        assert_eq!(view.products().len(), 2);

        view.apply_filter(ProductFilter {
            category: Some("fruit".to_string()),
            availability: AvailabilityFilter::Available,
            ..Default::default()
        });
        assert_eq!(view.products().len(), 2);

        view.reset_filters();
        assert_eq!(view.products(), full.as_slice());
        assert_eq!(view.filter(), &ProductFilter::default());
    }

    #[test]
    fn upsert_respects_the_active_filter() {
        let mut view = seeded_view();
        view.apply_filter(ProductFilter {
            category: Some("fruit".to_string()),
            ..Default::default()
        });
        assert_eq!(view.products().len(), 2);

        // new product outside the filter joins the catalog, not the view
        view.upsert(product("Saw", 20.0, "Tools", true));
        assert_eq!(view.catalog().len(), 4);
        assert_eq!(view.products().len(), 2);

        // updating an entry in place replaces rather than duplicates
        let mut updated = view.catalog()[0].clone();
        updated.price = 6.0;
        view.upsert(updated.clone());
        assert_eq!(view.catalog().len(), 4);
        assert_eq!(view.products()[0], updated);
    }

    #[test]
    fn remove_drops_from_catalog_and_view() {
        let mut view = seeded_view();
        let id = view.catalog()[1].id;
        view.remove(id);
        assert_eq!(view.catalog().len(), 2);
        assert!(view.products().iter().all(|p| p.id != id));
    }

    #[test]
    fn blank_form_defaults_to_available() {
        let form = ProductForm::create();
        assert!(form.draft.available);
        assert!(form.draft.name.is_empty());
        assert!(form.editing().is_none());
    }

    #[test]
    fn edit_form_loads_existing_values() {
        let existing = product("Apple", 5.0, "Fruit", false);
        let form = ProductForm::edit(&existing);
        assert_eq!(form.editing(), Some(existing.id));
        assert_eq!(form.draft.name, "Apple");
        assert_eq!(form.draft.price, "5");
        assert!(!form.draft.available);
    }

    #[test]
    fn validate_populates_and_clears_errors() {
        let mut form = ProductForm::create();
        assert!(!form.validate());
        assert!(form.errors().first(fields::NAME).is_some());

        form.draft.name = "Apple".to_string();
        form.draft.price = "5".to_string();
        form.draft.category = "Fruit".to_string();
        assert!(form.validate());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn backend_error_is_cleared_by_the_next_validate() {
        let mut form = ProductForm::create();
        form.draft.name = "Apple".to_string();
        form.draft.price = "5".to_string();
        form.draft.category = "Fruit".to_string();
        assert!(form.validate());

        form.record_backend_error("An error occurred. Please try again.");
        assert!(form.errors().first(fields::BACKEND).is_some());

        assert!(form.validate());
        assert!(form.errors().is_empty());
    }
}
