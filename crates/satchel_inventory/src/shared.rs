//! Inventory shared between threads
//!
//! [`Inventory`] itself has no synchronization, and a "check `is_full`, then
//! add" sequence made of separate calls is not atomic. [`SharedInventory`]
//! holds the inventory behind a lock so each checked add runs as one
//! transaction.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::InventoryResult;
use crate::inventory::{Inventory, InventoryEvent};
use crate::item::{Item, ItemStack};

/// Cloneable handle to an inventory behind a read/write lock
pub struct SharedInventory<I = Item> {
    inner: Arc<RwLock<Inventory<I>>>,
}

impl<I> Clone for SharedInventory<I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I> SharedInventory<I> {
    /// Wrap an inventory
    pub fn new(inventory: Inventory<I>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inventory)),
        }
    }

    /// Run `f` with shared access
    pub fn with<R>(&self, f: impl FnOnce(&Inventory<I>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access
    ///
    /// Everything inside `f` is one transaction with respect to other handles.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Inventory<I>) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Number of slots holding a stack
    pub fn utilized_slots(&self) -> usize {
        self.inner.read().utilized_slots()
    }

    /// Check if no new item type can be added
    pub fn is_full(&self) -> bool {
        self.inner.read().is_full()
    }
}

impl<I: PartialEq> SharedInventory<I> {
    /// Add a stack under the lock, merging into an existing stack if present
    pub fn try_add_stack(&self, stack: ItemStack<I>) -> InventoryResult<InventoryEvent> {
        self.inner.write().try_add_stack(stack)
    }

    /// Add `quantity` units of `item` under the lock
    pub fn try_add_item(&self, item: I, quantity: u32) -> InventoryResult<InventoryEvent> {
        self.inner.write().try_add_item(item, quantity)
    }

    /// Count units of `item`
    pub fn count_item(&self, item: &I) -> u32 {
        self.inner.read().count_item(item)
    }
}

impl<I> From<Inventory<I>> for SharedInventory<I> {
    fn from(inventory: Inventory<I>) -> Self {
        Self::new(inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared: SharedInventory = Inventory::new(4).into();
        let other = shared.clone();

        other.try_add_item(Item::named("wood"), 3).unwrap();
        assert_eq!(shared.count_item(&Item::named("wood")), 3);
        assert_eq!(shared.utilized_slots(), 1);
    }

    #[test]
    fn test_concurrent_adds_respect_capacity() {
        let shared = SharedInventory::new(Inventory::new(4));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || shared.try_add_item(Item::named(format!("item_{i}")), 1))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let added = results.iter().filter(|r| r.is_ok()).count();
        let refused = results
            .iter()
            .filter(|r| matches!(r, Err(InventoryError::CapacityExceeded { capacity: 4 })))
            .count();

        assert_eq!(added, 4);
        assert_eq!(refused, 4);
        assert!(shared.is_full());
        assert_eq!(shared.with(|inv| inv.utilized_slots()), 4);
    }

    #[test]
    fn test_concurrent_merges() {
        let shared = SharedInventory::new(Inventory::new(1));

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        shared.try_add_item(Item::named("gold"), 1).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.count_item(&Item::named("gold")), 1000);
        assert_eq!(shared.utilized_slots(), 1);
    }

    #[test]
    fn test_with_mut_transaction() {
        let shared = SharedInventory::new(Inventory::new(2));

        let added = shared.with_mut(|inv| {
            if inv.is_full() {
                return false;
            }
            inv.add_item_stack_no_check(ItemStack::new(Item::named("stone"), 5));
            true
        });

        assert!(added);
        assert_eq!(shared.count_item(&Item::named("stone")), 5);
    }
}
