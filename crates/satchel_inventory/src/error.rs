//! Error types for checked inventory operations

use thiserror::Error;

/// Inventory errors
///
/// Only the checked operations produce these. The unchecked primitives
/// (`increase_size`, `add_item_stack_no_check`) never fail, and a missing
/// stack is reported as `None` rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Every slot is taken and the item has no existing stack
    #[error("Inventory full: capacity {capacity}")]
    CapacityExceeded {
        /// Inventory capacity
        capacity: usize,
    },
    /// The item already occupies a slot
    #[error("Item type already occupies slot {slot}")]
    DuplicateItemType {
        /// Slot holding the existing stack
        slot: usize,
    },
    /// A non-stackable stack would grow past one unit
    #[error("Stack is not stackable (current size {size})")]
    NotStackable {
        /// Current stack size
        size: u32,
    },
    /// Stack size would not fit in a `u32`
    #[error("Stack size overflow: {size} + {amount}")]
    SizeOverflow {
        /// Current stack size
        size: u32,
        /// Amount that was being added
        amount: u32,
    },
    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;
