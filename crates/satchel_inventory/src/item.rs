//! Items and item stacks

use crate::error::{InventoryError, InventoryResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for an item type
pub type ItemId = String;

/// An item type
///
/// Two items are the same type when they compare equal. Inventories are
/// generic over the item type, so any `PartialEq` value works in place of this
/// one; `Item` is the default used when no other type is given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Display name
    pub name: String,
}

impl Item {
    /// Create a new item
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Create an item whose display name is its id
    pub fn named(id: impl Into<ItemId>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A quantity of one item type, occupying one inventory slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack<I = Item> {
    /// Item type; fixed for the lifetime of the stack
    item: I,
    /// Number of units
    size: u32,
    /// Whether more than one unit may accumulate
    stackable: bool,
}

impl<I> ItemStack<I> {
    /// Create a stackable stack
    pub fn new(item: I, size: u32) -> Self {
        Self {
            item,
            size,
            stackable: true,
        }
    }

    /// Create a single stackable item
    pub fn single(item: I) -> Self {
        Self::new(item, 1)
    }

    /// Create a single item that never stacks
    pub fn unstackable(item: I) -> Self {
        Self::new(item, 1).with_stackable(false)
    }

    /// Set stackability
    pub fn with_stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    /// Get the item type
    pub fn item(&self) -> &I {
        &self.item
    }

    /// Get the number of units
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Check if more than one unit may accumulate
    pub fn is_stackable(&self) -> bool {
        self.stackable
    }

    /// Take the item back out of the stack
    pub fn into_item(self) -> I {
        self.item
    }

    /// Grow the stack by `amount`
    ///
    /// Trusted primitive: stackability is not enforced here, and the size
    /// saturates at `u32::MAX` instead of wrapping. Use
    /// [`try_increase_size`](Self::try_increase_size) when the caller has not
    /// already checked.
    pub fn increase_size(&mut self, amount: u32) {
        self.size = self.size.saturating_add(amount);
    }

    /// Grow the stack by `amount`, returning the new size
    ///
    /// On error the stack is left unchanged.
    pub fn try_increase_size(&mut self, amount: u32) -> InventoryResult<u32> {
        self.try_increase_size_with(amount, true)
    }

    /// Grow the stack by `amount`, checking stackability only when
    /// `enforce_stackable` is set
    ///
    /// Overflow is always reported. On error the stack is left unchanged.
    pub fn try_increase_size_with(
        &mut self,
        amount: u32,
        enforce_stackable: bool,
    ) -> InventoryResult<u32> {
        let new_size = self
            .size
            .checked_add(amount)
            .ok_or(InventoryError::SizeOverflow {
                size: self.size,
                amount,
            })?;
        if enforce_stackable && !self.stackable && new_size > 1 {
            return Err(InventoryError::NotStackable { size: self.size });
        }
        self.size = new_size;
        Ok(new_size)
    }
}

/// Add the number of units in `rhs` to `lhs`
///
/// `rhs` is not modified. The items are not compared; callers pair stacks
/// through [`find_matching_item_stack_mut`].
///
/// [`find_matching_item_stack_mut`]: crate::Inventory::find_matching_item_stack_mut
pub fn merge_stacks<I>(lhs: &mut ItemStack<I>, rhs: &ItemStack<I>) {
    lhs.increase_size(rhs.size());
}
