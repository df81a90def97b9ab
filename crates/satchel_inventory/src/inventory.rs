//! Slot inventory

use crate::config::InventoryConfig;
use crate::error::{InventoryError, InventoryResult};
use crate::item::ItemStack;

/// Number of slots when no capacity is given
pub const DEFAULT_CAPACITY: usize = 10;

/// Outcome of a checked add
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryEvent {
    /// A new stack took a free slot
    StackAdded {
        slot: usize,
        quantity: u32,
    },
    /// The quantity was merged into an existing stack
    StackMerged {
        slot: usize,
        added: u32,
        new_size: u32,
    },
}

impl InventoryEvent {
    /// Slot touched by the add
    pub fn slot(&self) -> usize {
        match self {
            Self::StackAdded { slot, .. } | Self::StackMerged { slot, .. } => *slot,
        }
    }
}

/// A fixed number of slots, each holding a stack of a distinct item type
///
/// Slots are kept in insertion order, which is also the order lookups scan
/// in. There is no slot removal; stacks only grow.
///
/// Two layers of insertion are provided:
///
/// - [`add_item_stack_no_check`](Self::add_item_stack_no_check) appends
///   without verifying capacity or uniqueness. Callers check
///   [`is_full`](Self::is_full) and
///   [`find_matching_item_stack`](Self::find_matching_item_stack) first.
/// - [`try_add_stack`](Self::try_add_stack) and
///   [`try_add_item`](Self::try_add_item) do those checks and merge into an
///   existing stack when there is one.
#[derive(Debug, Clone)]
pub struct Inventory<I = crate::item::Item> {
    /// Occupied slots, in insertion order
    slots: Vec<ItemStack<I>>,
    /// Maximum number of distinct item types
    capacity: usize,
    /// Checked adds refuse to grow non-stackable stacks
    enforce_stackable: bool,
}

impl<I> Inventory<I> {
    /// Create an inventory with `capacity` slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
            enforce_stackable: true,
        }
    }

    /// Create an inventory with [`DEFAULT_CAPACITY`] slots
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Create an inventory from configuration
    pub fn from_config(config: &InventoryConfig) -> Self {
        Self {
            enforce_stackable: config.enforce_stackable,
            ..Self::new(config.capacity)
        }
    }

    /// Number of slots holding a stack
    pub fn utilized_slots(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots, fixed at construction
    pub fn total_slots(&self) -> usize {
        self.capacity
    }

    /// Number of free slots
    ///
    /// Zero, not negative, if the inventory was overfilled through
    /// [`add_item_stack_no_check`](Self::add_item_stack_no_check).
    pub fn empty_slots(&self) -> usize {
        self.total_slots().saturating_sub(self.utilized_slots())
    }

    /// Check if no new item type can be added
    pub fn is_full(&self) -> bool {
        self.utilized_slots() >= self.capacity
    }

    /// Check if no slot is in use
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check if checked adds enforce stackability
    pub fn enforces_stackable(&self) -> bool {
        self.enforce_stackable
    }

    /// Get the stack in a slot
    pub fn slot(&self, index: usize) -> Option<&ItemStack<I>> {
        self.slots.get(index)
    }

    /// Iterate over occupied slots in insertion order
    pub fn slots(&self) -> std::slice::Iter<'_, ItemStack<I>> {
        self.slots.iter()
    }
}

impl<I: PartialEq> Inventory<I> {
    /// Find the stack holding `item`
    ///
    /// Scans slots in insertion order and returns the first match.
    pub fn find_matching_item_stack(&self, item: &I) -> Option<&ItemStack<I>> {
        let found = self.slots.iter().find(|stack| stack.item() == item);
        if found.is_none() {
            log::trace!("No stack matches item among {} slots", self.slots.len());
        }
        found
    }

    /// Find the stack holding `item`, mutably
    pub fn find_matching_item_stack_mut(&mut self, item: &I) -> Option<&mut ItemStack<I>> {
        self.slots.iter_mut().find(|stack| stack.item() == item)
    }

    /// Find the slot index holding `item`
    pub fn find_slot(&self, item: &I) -> Option<usize> {
        self.slots.iter().position(|stack| stack.item() == item)
    }

    /// Count units of `item`
    pub fn count_item(&self, item: &I) -> u32 {
        self.find_matching_item_stack(item)
            .map(ItemStack::size)
            .unwrap_or(0)
    }

    /// Append a stack to a new slot without any checks
    ///
    /// Neither capacity nor item uniqueness is verified; an inventory
    /// overfilled this way reports [`empty_slots`](Self::empty_slots) as 0.
    pub fn add_item_stack_no_check(&mut self, stack: ItemStack<I>) {
        if log::log_enabled!(log::Level::Warn) {
            if self.is_full() {
                log::warn!(
                    "Unchecked add exceeds capacity {} (slot {})",
                    self.capacity,
                    self.slots.len()
                );
            }
            if let Some(slot) = self.find_slot(stack.item()) {
                log::warn!("Unchecked add duplicates the item type in slot {}", slot);
            }
        }
        log::trace!("Appending stack of {} to slot {}", stack.size(), self.slots.len());
        self.slots.push(stack);
    }

    /// Add a stack, merging into an existing stack of the same item
    ///
    /// A new slot is only used when no stack matches. On error the inventory
    /// is unchanged.
    pub fn try_add_stack(&mut self, stack: ItemStack<I>) -> InventoryResult<InventoryEvent> {
        let enforce = self.enforce_stackable;
        self.check_stackable(&stack)?;

        if let Some((slot, existing)) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, existing)| existing.item() == stack.item())
        {
            let added = stack.size();
            let new_size = existing
                .try_increase_size_with(added, enforce)
                .map_err(|e| {
                    log::warn!("Refused merge into slot {}: {}", slot, e);
                    e
                })?;
            log::debug!("Merged {} into slot {} (now {})", added, slot, new_size);
            return Ok(InventoryEvent::StackMerged {
                slot,
                added,
                new_size,
            });
        }

        self.check_insert(&stack)?;

        let slot = self.slots.len();
        let quantity = stack.size();
        self.slots.push(stack);
        log::debug!("Added stack of {} to slot {}", quantity, slot);
        Ok(InventoryEvent::StackAdded { slot, quantity })
    }

    /// Add `quantity` units of `item` as a stackable stack
    pub fn try_add_item(&mut self, item: I, quantity: u32) -> InventoryResult<InventoryEvent> {
        self.try_add_stack(ItemStack::new(item, quantity))
    }

    /// Put a stack into a new slot, never merging
    ///
    /// Returns the new slot index.
    pub fn try_insert_stack(&mut self, stack: ItemStack<I>) -> InventoryResult<usize> {
        if let Some(slot) = self.find_slot(stack.item()) {
            log::warn!("Refused insert: item type already in slot {}", slot);
            return Err(InventoryError::DuplicateItemType { slot });
        }
        self.check_stackable(&stack)?;
        self.check_insert(&stack)?;

        let slot = self.slots.len();
        log::debug!("Inserted stack of {} into slot {}", stack.size(), slot);
        self.slots.push(stack);
        Ok(slot)
    }

    fn check_insert(&self, stack: &ItemStack<I>) -> InventoryResult<()> {
        if self.is_full() {
            log::warn!(
                "Refused add of {}: inventory full (capacity {})",
                stack.size(),
                self.capacity
            );
            return Err(InventoryError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// A non-stackable incoming stack may carry at most one unit
    fn check_stackable(&self, stack: &ItemStack<I>) -> InventoryResult<()> {
        if self.enforce_stackable && !stack.is_stackable() && stack.size() > 1 {
            log::warn!("Refused add: non-stackable stack of {}", stack.size());
            return Err(InventoryError::NotStackable { size: stack.size() });
        }
        Ok(())
    }
}

impl<I> Default for Inventory<I> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
