// ⚠️ Registry Errors - every condition the registry can report
//
// None of these are fatal. Each operation either succeeds or returns exactly
// one of these on the first attempt, and the collection is left untouched.

use crate::entities::Category;
use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// A client with this id is already stored
    #[error("a client with id {id} already exists")]
    DuplicateId { id: u32 },

    /// No client with this id is stored
    #[error("no client found with id {id}")]
    NotFound { id: u32 },

    /// Label does not name a member of the category set
    #[error("invalid category '{label}' (expected one of: Regular, Frequent, VIP, Unassigned)")]
    InvalidCategory { label: String },

    /// VIP clients keep the VIP category for their whole lifetime
    #[error("client {id} is VIP; category cannot be changed to {requested}")]
    CategoryLocked { id: u32, requested: Category },

    /// Discount rate outside [0, 1)
    #[error("invalid discount rate {rate} (expected a fraction in [0, 1))")]
    InvalidDiscount { rate: f64 },

    #[error("no clients registered")]
    EmptyRegistry,

    #[error("no clients in category {category}")]
    EmptyResult { category: Category },

    #[error("failed to serialize registry: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RegistryError {
    /// Empty listings are reported, not failures
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            RegistryError::EmptyRegistry | RegistryError::EmptyResult { .. }
        )
    }
}
