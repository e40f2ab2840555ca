//! Filter engine for the in-memory catalog
//!
//! The catalog is fetched once and narrowed locally; nothing here touches
//! the network. All active criteria combine with AND and narrowing order
//! does not change the result.

use crate::models::{Product, ProductFilter};

impl ProductFilter {
    /// Active category query, if any. Blank or whitespace-only input means
    /// the category criterion is off.
    fn category_query(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Whether a single product satisfies every active criterion
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        if let Some(query) = self.category_query() {
            if !product
                .category
                .to_lowercase()
                .contains(&query.to_lowercase())
            {
                return false;
            }
        }
        self.availability.matches(product.available)
    }

    /// Narrow the catalog to the products matching every active criterion.
    ///
    /// Sequential narrowing: each active predicate is applied in turn over
    /// the previous subset. Input order is preserved.
    pub fn apply(&self, catalog: &[Product]) -> Vec<Product> {
        let mut filtered: Vec<Product> = catalog.to_vec();

        if let Some(min) = self.min_price {
            filtered.retain(|p| p.price >= min);
        }
        if let Some(max) = self.max_price {
            filtered.retain(|p| p.price <= max);
        }
        if let Some(query) = self.category_query() {
            let query = query.to_lowercase();
            filtered.retain(|p| p.category.to_lowercase().contains(&query));
        }
        filtered.retain(|p| self.availability.matches(p.available));

        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AvailabilityFilter;
    use uuid::Uuid;

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

    fn catalog() -> Vec<Product> {
        vec![
            product("Apple", 5.0, "Fruit", true),
            product("Orange Juice", 10.0, "fruit juice", true),
            product("Hammer", 15.0, "Tools", false),
        ]
    }

    #[test]
    fn default_filter_returns_catalog_unchanged() {
        let catalog = catalog();
        let filtered = ProductFilter::default().apply(&catalog);
        assert_eq!(filtered, catalog);
    }

    #[test]
    fn min_price_zero_returns_full_collection_in_order() {
        let catalog = catalog();
        let filter = ProductFilter {
            min_price: Some(0.0),
            ..Default::default()
        };
        assert_eq!(filter.apply(&catalog), catalog);
    }

    #[test]
    fn price_range_is_inclusive() {
        let catalog = catalog();
        let filter = ProductFilter {
            min_price: Some(8.0),
            max_price: Some(12.0),
            ..Default::default()
        };
        let filtered = filter.apply(&catalog);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].price, 10.0);

        // bounds themselves match
        let filter = ProductFilter {
            min_price: Some(5.0),
            max_price: Some(15.0),
            ..Default::default()
        };
        assert_eq!(filter.apply(&catalog).len(), 3);
    }

    #[test]
    fn category_substring_match_is_case_insensitive() {
        let catalog = catalog();
        let filter = ProductFilter {
            category: Some("fruit".to_string()),
            ..Default::default()
        };
        let filtered = filter.apply(&catalog);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].category, "Fruit");
        assert_eq!(filtered[1].category, "fruit juice");

        let filter = ProductFilter {
            category: Some("FRUIT".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&catalog).len(), 2);
    }

    #[test]
    fn blank_category_is_inactive() {
        let catalog = catalog();
        for blank in ["", "   "] {
            let filter = ProductFilter {
                category: Some(blank.to_string()),
                ..Default::default()
            };
            assert_eq!(filter.apply(&catalog), catalog);
        }
    }

    #[test]
    fn availability_tri_state() {
        let catalog = catalog();

        let any = ProductFilter::default();
        assert_eq!(any.apply(&catalog).len(), 3);

        let available = ProductFilter {
            availability: AvailabilityFilter::Available,
            ..Default::default()
        };
        assert_eq!(available.apply(&catalog).len(), 2);

        let unavailable = ProductFilter {
            availability: AvailabilityFilter::Unavailable,
            ..Default::default()
        };
        let filtered = unavailable.apply(&catalog);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Hammer");
    }

    #[test]
    fn criteria_combine_with_and() {
        let catalog = catalog();
        let filter = ProductFilter {
            min_price: Some(6.0),
            category: Some("fruit".to_string()),
            availability: AvailabilityFilter::Available,
            ..Default::default()
        };
        let filtered = filter.apply(&catalog);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Orange Juice");
    }

    #[test]
    fn matches_agrees_with_apply() {
        let catalog = catalog();
        let filter = ProductFilter {
            min_price: Some(6.0),
            max_price: Some(20.0),
            category: Some("o".to_string()),
            availability: AvailabilityFilter::Unavailable,
        };
        let via_apply = filter.apply(&catalog);
        let via_matches: Vec<Product> = catalog
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        assert_eq!(via_apply, via_matches);
    }
}
