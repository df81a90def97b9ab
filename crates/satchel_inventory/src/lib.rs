//! Satchel Inventory - Slot-Based Item Inventory
//!
//! This crate provides a fixed-capacity inventory where each slot holds a
//! stack of one distinct item type.
//!
//! # Features
//!
//! - Inventory with a fixed number of slots (default 10)
//! - Stack lookup by item type, in slot order
//! - Stack merging, with optional stackability enforcement
//! - Unchecked primitives plus a checked add layer
//! - Lock-protected inventory for sharing across threads
//!
//! # Example
//!
//! ```
//! use satchel_inventory::prelude::*;
//!
//! let wood = Item::new("wood", "Wood");
//!
//! let mut inventory = Inventory::new(20);
//! inventory.try_add_item(wood.clone(), 5).unwrap();
//!
//! // Same item type merges into the existing slot
//! inventory.try_add_item(wood.clone(), 3).unwrap();
//! assert_eq!(inventory.utilized_slots(), 1);
//! assert_eq!(inventory.count_item(&wood), 8);
//! ```

pub mod config;
pub mod error;
pub mod inventory;
pub mod item;
pub mod shared;

pub mod prelude {
    pub use crate::config::InventoryConfig;
    pub use crate::error::{InventoryError, InventoryResult};
    pub use crate::inventory::{Inventory, InventoryEvent, DEFAULT_CAPACITY};
    pub use crate::item::{merge_stacks, Item, ItemId, ItemStack};
    pub use crate::shared::SharedInventory;
}

pub use prelude::*;
