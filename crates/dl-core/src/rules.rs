use serde::{Deserialize, Serialize};

use crate::item::same_name;
use crate::location::LocationId;

/// A location that can only be entered while a key item is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    /// The gated location.
    pub location: LocationId,
    /// Name of the item that opens it.
    pub key: String,
}

impl Gate {
    /// Create a new gate.
    pub fn new(location: LocationId, key: impl Into<String>) -> Self {
        Self {
            location,
            key: key.into(),
        }
    }
}

/// The fixed constants of a game.
///
/// Read from the optional `rules` object of a data file. Every field falls
/// back to the campus game when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Where a new session starts.
    pub start_location: LocationId,
    /// A session is lost once this many moves have been made.
    pub max_moves: u32,
    /// How many items the player can carry.
    pub inventory_capacity: usize,
    /// The only location where items can be deposited.
    pub deposit_site: LocationId,
    /// Items that must all be deposited to win.
    pub required_items: Vec<String>,
    /// Locked locations and their keys.
    pub gates: Vec<Gate>,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            start_location: LocationId(1),
            max_moves: 50,
            inventory_capacity: 2,
            deposit_site: LocationId(15),
            required_items: vec![
                "USB Drive".to_string(),
                "Laptop Charger".to_string(),
                "Lucky Mug".to_string(),
            ],
            gates: vec![
                Gate::new(LocationId(13), "T-card"),
                Gate::new(LocationId(15), "Dorm Key"),
            ],
        }
    }
}

impl GameRules {
    /// Set the start location.
    pub fn with_start_location(mut self, id: LocationId) -> Self {
        self.start_location = id;
        self
    }

    /// Set the move ceiling.
    pub fn with_max_moves(mut self, max: u32) -> Self {
        self.max_moves = max;
        self
    }

    /// Set the inventory capacity.
    pub fn with_inventory_capacity(mut self, capacity: usize) -> Self {
        self.inventory_capacity = capacity;
        self
    }

    /// Set the deposit site.
    pub fn with_deposit_site(mut self, id: LocationId) -> Self {
        self.deposit_site = id;
        self
    }

    /// Replace the required item set.
    pub fn with_required_items<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_items = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace all gates.
    pub fn with_gates(mut self, gates: Vec<Gate>) -> Self {
        self.gates = gates;
        self
    }

    /// The gate guarding a location, if any.
    pub fn gate_at(&self, location: LocationId) -> Option<&Gate> {
        self.gates.iter().find(|g| g.location == location)
    }

    /// Whether an item is part of the win condition.
    pub fn is_required(&self, name: &str) -> bool {
        self.required_items
            .iter()
            .any(|r| same_name(r, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_describe_campus_game() {
        let rules = GameRules::default();
        assert_eq!(rules.start_location, LocationId(1));
        assert_eq!(rules.max_moves, 50);
        assert_eq!(rules.inventory_capacity, 2);
        assert_eq!(rules.deposit_site, LocationId(15));
        assert_eq!(rules.required_items.len(), 3);
        assert_eq!(rules.gates.len(), 2);
    }

    #[test]
    fn builder_methods() {
        let rules = GameRules::default()
            .with_start_location(LocationId(5))
            .with_max_moves(10)
            .with_inventory_capacity(3)
            .with_deposit_site(LocationId(2))
            .with_required_items(["Lamp"])
            .with_gates(vec![]);
        assert_eq!(rules.start_location, LocationId(5));
        assert_eq!(rules.max_moves, 10);
        assert_eq!(rules.inventory_capacity, 3);
        assert_eq!(rules.deposit_site, LocationId(2));
        assert_eq!(rules.required_items, vec!["Lamp".to_string()]);
        assert!(rules.gates.is_empty());
    }

    #[test]
    fn gate_lookup() {
        let rules = GameRules::default();
        assert_eq!(rules.gate_at(LocationId(13)).map(|g| g.key.as_str()), Some("T-card"));
        assert_eq!(rules.gate_at(LocationId(15)).map(|g| g.key.as_str()), Some("Dorm Key"));
        assert!(rules.gate_at(LocationId(1)).is_none());
    }

    #[test]
    fn required_items_ignore_case() {
        let rules = GameRules::default();
        assert!(rules.is_required("usb drive"));
        assert!(!rules.is_required("T-card"));
    }

    #[test]
    fn partial_rules_fill_defaults() {
        let rules: GameRules = serde_json::from_str(r#"{"max_moves": 20}"#).unwrap();
        assert_eq!(rules.max_moves, 20);
        assert_eq!(rules.deposit_site, LocationId(15));
        assert_eq!(rules.gates.len(), 2);
    }
}
