//! Ledger error model.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type used across the ledger crates.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant is an expected outcome that the caller handles; none of them
/// indicate a bug. The `Display` impl is the human-readable diagnostic.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    /// Item name was empty or not text.
    #[error("invalid item name: {0}")]
    InvalidName(String),

    /// Quantity was not a finite number, or arithmetic on it overflowed.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Removal requested for an item the ledger does not hold.
    #[error("item '{0}' not found in inventory")]
    ItemNotFound(String),

    /// The ledger file could not be read, parsed or written.
    #[error("persistence failed for {}: {reason}", .path.display())]
    Persistence { path: PathBuf, reason: String },
}

impl LedgerError {
    pub fn invalid_name(msg: impl Into<String>) -> Self {
        Self::InvalidName(msg.into())
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ItemNotFound(name.into())
    }

    pub fn persistence(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::Persistence {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_message_names_the_path() {
        let err = LedgerError::persistence("data/inventory.json", "permission denied");
        assert_eq!(
            err.to_string(),
            "persistence failed for data/inventory.json: permission denied"
        );
    }

    #[test]
    fn not_found_message_quotes_the_item() {
        assert_eq!(
            LedgerError::not_found("kiwi").to_string(),
            "item 'kiwi' not found in inventory"
        );
    }
}
