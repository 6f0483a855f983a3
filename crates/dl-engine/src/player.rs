//! Player state management.

use std::collections::BTreeSet;

use dl_core::{Item, LocationId, same_name};

/// Items the player is carrying, in pick-up order, bounded by a capacity.
#[derive(Debug, Clone)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of carried items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another item would exceed the capacity.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Whether an item with this exact name is carried.
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    /// Find a carried item by case-insensitive name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.is_named(name))
    }

    /// Add an item. Hands it back if the inventory is full or already
    /// holds an item of that name.
    pub fn insert(&mut self, item: Item) -> Result<(), Item> {
        if self.is_full() || self.contains(&item.name) {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove an item by case-insensitive name.
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.is_named(name))?;
        Some(self.items.remove(pos))
    }

    /// Names of carried items in pick-up order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }
}

/// The player's state for one session.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Current location.
    pub location: LocationId,
    /// Moves made so far.
    pub moves: u32,
    /// Points earned so far.
    pub score: u32,
    /// Carried items.
    pub inventory: Inventory,
    /// Names of items handed in at the deposit site.
    deposited: BTreeSet<String>,
}

impl PlayerState {
    /// Create a fresh player at the given location.
    pub fn new(location: LocationId, capacity: usize) -> Self {
        Self {
            location,
            moves: 0,
            score: 0,
            inventory: Inventory::new(capacity),
            deposited: BTreeSet::new(),
        }
    }

    /// Whether an item has been deposited.
    pub fn has_deposited(&self, name: &str) -> bool {
        self.deposited.iter().any(|d| same_name(d, name))
    }

    /// Record a deposit. Returns `false` if the name was already recorded.
    pub fn record_deposit(&mut self, name: impl Into<String>) -> bool {
        self.deposited.insert(name.into())
    }

    /// Number of deposited items.
    pub fn deposited_count(&self) -> usize {
        self.deposited.len()
    }
}
