use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;
use validator::Validate;

use crate::validate::{
    validate_letters_digits_spaces, validate_letters_spaces, validate_optional_text,
};

/// Catalog entry as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the backend and immutable afterwards
    pub id: Uuid,
    /// Product name (letters and whitespace only)
    pub name: String,
    /// Positive price, rendered with two decimals
    pub price: f64,
    /// Category (letters, digits and whitespace only)
    pub category: String,
    /// Optional free-text description
    #[serde(default)]
    pub description: String,
    /// Whether the product is currently available
    pub available: bool,
}

impl Product {
    /// Price formatted for display with two-decimal rounding
    pub fn display_price(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// Write payload for create/update requests (no id; the backend assigns it)
///
/// Carries wire-level guards mirroring the draft rules. Construct it from a
/// `DraftProduct` that already passed `validate_draft`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductInput {
    #[validate(length(min = 1), custom(function = "validate_letters_spaces"))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1), custom(function = "validate_letters_digits_spaces"))]
    pub category: String,
    #[serde(default)]
    #[validate(custom(function = "validate_optional_text"))]
    pub description: String,
    pub available: bool,
}

/// In-progress form state before validation and submission
///
/// All text fields are carried as raw strings the way the form inputs hold
/// them; `price` is only parsed to a number at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftProduct {
    pub name: String,
    pub price: String,
    pub category: String,
    pub description: String,
    pub available: bool,
}

impl Default for DraftProduct {
    /// Blank draft for the add form: empty fields, available on
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            category: String::new(),
            description: String::new(),
            available: true,
        }
    }
}

impl DraftProduct {
    /// Load an existing product into a draft for editing
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            description: product.description.clone(),
            available: product.available,
        }
    }

    /// Convert a validated draft into the wire payload.
    ///
    /// Callers must run `validate_draft` first; the price parse here relies
    /// on the draft having passed the price rules.
    pub fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            price: self.price.trim().parse().unwrap_or(0.0),
            category: self.category.clone(),
            description: self.description.clone(),
            available: self.available,
        }
    }
}

/// Availability filter with an explicit "no filter" state
///
/// A plain boolean cannot distinguish "don't filter" from "must be
/// unavailable", so the filter carries all three states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AvailabilityFilter {
    /// No availability constraint
    #[default]
    Any,
    /// Only products with `available == true`
    Available,
    /// Only products with `available == false`
    Unavailable,
}

impl AvailabilityFilter {
    /// Whether a product's availability flag satisfies this filter
    pub fn matches(&self, available: bool) -> bool {
        match self {
            AvailabilityFilter::Any => true,
            AvailabilityFilter::Available => available,
            AvailabilityFilter::Unavailable => !available,
        }
    }
}

/// Filter query over the in-memory catalog
///
/// Every field is independently optional; active criteria combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Inclusive lower bound on price
    pub min_price: Option<f64>,
    /// Inclusive upper bound on price
    pub max_price: Option<f64>,
    /// Case-insensitive substring match against the category
    pub category: Option<String>,
    /// Availability constraint
    #[serde(default)]
    pub availability: AvailabilityFilter,
}

/// Confirmation payload returned by a DELETE
///
/// Backends vary in what they return here; every field is defaulted so any
/// JSON confirmation object decodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteReceipt {
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub message: Option<String>,
}
