//! Error types for tfinv-inventory

use thiserror::Error;

/// Errors that can occur when producing the inventory document
#[derive(Error, Debug, Clone)]
pub enum InventoryError {
    /// Document could not be serialized to JSON
    #[error("failed to serialize inventory: {0}")]
    Serialize(String),
}
