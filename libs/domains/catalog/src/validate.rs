//! Validation engine for draft products
//!
//! Pure, network-free field checks. `validate_draft` evaluates every rule
//! for every field and returns the complete field → message mapping; an
//! empty mapping means the draft may be submitted.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

use crate::models::DraftProduct;

/// Letters and whitespace only
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

/// Digits and whitespace only (the form carries price as text)
static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9\s]+$").unwrap());

/// Letters, digits and whitespace only
static TEXT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s]+$").unwrap());

/// Field keys used in the error mapping
pub mod fields {
    pub const NAME: &str = "name";
    pub const PRICE: &str = "price";
    pub const CATEGORY: &str = "category";
    pub const DESCRIPTION: &str = "description";
    /// Sentinel key for a backend failure message merged in by the caller
    pub const BACKEND: &str = "backend";
}

pub const MSG_NAME_REQUIRED: &str = "Product name is required.";
pub const MSG_NAME_LETTERS: &str = "Product name should only contain letters.";
pub const MSG_PRICE_REQUIRED: &str = "Product price is required.";
pub const MSG_PRICE_DIGITS: &str = "Price should contain only positive numbers.";
pub const MSG_CATEGORY_REQUIRED: &str = "Category is required.";
pub const MSG_CATEGORY_CHARS: &str = "Category should contain only letters and numbers.";
pub const MSG_DESCRIPTION_CHARS: &str = "Description should only contain letters and numbers.";

/// Ordered mapping of field name → error messages
///
/// Produced by `validate_draft`; the presentation layer may additionally
/// merge a single backend failure message under the `backend` key so the
/// form renders every problem through one mapping. That merge is a display
/// concern and never originates from validation itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors {
    #[serde(flatten)]
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl FieldErrors {
    /// True when the draft passed every rule
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields carrying at least one error
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Record a failed rule for a field
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    /// All messages recorded for a field
    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First message for a field, the one the form renders
    pub fn first(&self, field: &str) -> Option<&str> {
        self.messages(field).first().map(String::as_str)
    }

    /// Merge a backend failure message under the sentinel key, replacing
    /// any previous one
    pub fn set_backend(&mut self, message: impl Into<String>) {
        self.errors.insert(fields::BACKEND, vec![message.into()]);
    }

    /// Iterate fields in stable order with their messages
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.errors.iter().map(|(f, m)| (*f, m.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Check a draft against every field rule
///
/// Rules are evaluated independently per field and all failures are
/// recorded, so several fields (or several rules on one field) can report
/// at once. Character-set rules look for offending characters and therefore
/// never fire on empty input; the required rules cover that case.
pub fn validate_draft(draft: &DraftProduct) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.name.trim().is_empty() {
        errors.push(fields::NAME, MSG_NAME_REQUIRED);
    }
    if !draft.name.is_empty() && !NAME_RE.is_match(&draft.name) {
        errors.push(fields::NAME, MSG_NAME_LETTERS);
    }

    let price = draft.price.trim();
    let positive = price.parse::<f64>().map(|p| p > 0.0).unwrap_or(false);
    if price.is_empty() || !positive {
        errors.push(fields::PRICE, MSG_PRICE_REQUIRED);
    }
    if !draft.price.is_empty() && !PRICE_RE.is_match(&draft.price) {
        errors.push(fields::PRICE, MSG_PRICE_DIGITS);
    }

    if draft.category.trim().is_empty() {
        errors.push(fields::CATEGORY, MSG_CATEGORY_REQUIRED);
    }
    if !draft.category.is_empty() && !TEXT_RE.is_match(&draft.category) {
        errors.push(fields::CATEGORY, MSG_CATEGORY_CHARS);
    }

    if !draft.description.is_empty() && !TEXT_RE.is_match(&draft.description) {
        errors.push(fields::DESCRIPTION, MSG_DESCRIPTION_CHARS);
    }

    errors
}

/// Custom validator for name-like fields on the wire payload
pub(crate) fn validate_letters_spaces(value: &str) -> Result<(), ValidationError> {
    if NAME_RE.is_match(value) {
        return Ok(());
    }
    Err(ValidationError::new("letters_and_spaces"))
}

/// Custom validator for category-like fields on the wire payload
pub(crate) fn validate_letters_digits_spaces(value: &str) -> Result<(), ValidationError> {
    if TEXT_RE.is_match(value) {
        return Ok(());
    }
    Err(ValidationError::new("letters_digits_spaces"))
}

/// Custom validator for optional text: empty is fine, otherwise the
/// category character set applies
pub(crate) fn validate_optional_text(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || TEXT_RE.is_match(value) {
        return Ok(());
    }
    Err(ValidationError::new("letters_digits_spaces"))
}
