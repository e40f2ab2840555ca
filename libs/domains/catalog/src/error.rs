use thiserror::Error;
use uuid::Uuid;

use crate::validate::FieldErrors;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid product: {0}")]
    Validation(FieldErrors),

    #[error("Backend rejected the request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// The single human-readable message the form or dialog displays after
    /// a failed remote call
    pub fn display_message(&self) -> String {
        match self {
            CatalogError::Api { message, .. } => message.clone(),
            CatalogError::Validation(errors) => errors.to_string(),
            other => other.to_string(),
        }
    }

    /// Field errors when this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            CatalogError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
