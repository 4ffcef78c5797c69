//! Error handling and result types for BTree operations.
//!
//! Lookups, insertions and deletions are total and never fail. Errors only
//! come from configuring a tree with an unusable order, or from the
//! validation layer when it finds that an invariant has lapsed.

/// Error type for B-tree configuration and validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BTreeError {
    /// Order (maximum fanout) is too small.
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
    /// Minimum occupancy does not fit the order.
    #[error("Invalid minimum occupancy: {0}")]
    InvalidMinKeys(String),
    /// A node violates an ordering or occupancy invariant.
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),
    /// The shape of the tree itself is broken.
    #[error("Corrupted tree: {0}")]
    CorruptedTree(String),
}

impl BTreeError {
    /// Create an InvalidOrder error with context
    pub fn invalid_order(order: usize, min_required: usize) -> Self {
        Self::InvalidOrder(format!(
            "Order {} is invalid (minimum required: {})",
            order, min_required
        ))
    }

    /// Create an InvalidMinKeys error with context
    pub fn invalid_min_keys(min_keys: usize, low: usize, high: usize) -> Self {
        Self::InvalidMinKeys(format!(
            "Minimum of {} keys is outside the allowed range {}..={}",
            min_keys, low, high
        ))
    }

    /// Create a DataIntegrity error with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrity(format!("{}: {}", context, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error came from tree configuration
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidOrder(_) | Self::InvalidMinKeys(_))
    }
}

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for tree construction and configuration
pub type InitResult<T> = Result<T, BTreeError>;

/// Result type for checked tree modifications
pub type ModifyResult<T> = Result<T, BTreeError>;
