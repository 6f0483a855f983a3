use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::item::same_name;

/// Unique identifier for every location in the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub u32);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LocationId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Prefix shared by every movement command in a command table.
pub const GO_PREFIX: &str = "go ";

/// A place the player can stand in.
///
/// The shape of a location (its descriptions and command table) never
/// changes after load. Only the visited flag and the set of items lying
/// here are mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Stable identifier.
    pub id: LocationId,
    /// Display name.
    pub name: String,
    /// Text shown on repeat visits.
    pub brief_description: String,
    /// Text shown on the first visit and on `look`.
    pub long_description: String,
    /// Command string to effect. `go ...` entries point at a destination;
    /// every other entry points back at this location.
    #[serde(rename = "available_commands")]
    pub commands: BTreeMap<String, LocationId>,
    #[serde(rename = "items")]
    present: BTreeSet<String>,
    /// Whether the long description has been shown.
    pub visited: bool,
}

impl Location {
    /// Create an empty location with no exits and no items.
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            brief_description: String::new(),
            long_description: String::new(),
            commands: BTreeMap::new(),
            present: BTreeSet::new(),
            visited: false,
        }
    }

    /// Builder: set both descriptions.
    pub fn with_descriptions(mut self, brief: impl Into<String>, long: impl Into<String>) -> Self {
        self.brief_description = brief.into();
        self.long_description = long.into();
        self
    }

    /// Builder: add a command table entry.
    pub fn with_command(mut self, command: impl Into<String>, effect: LocationId) -> Self {
        self.commands.insert(command.into(), effect);
        self
    }

    /// Builder: place an item here.
    pub fn with_item(mut self, name: impl Into<String>) -> Self {
        self.present.insert(name.into());
        self
    }

    /// Resolve a movement command such as `go south` to its destination.
    pub fn exit(&self, command: &str) -> Option<LocationId> {
        if !command.starts_with(GO_PREFIX) {
            return None;
        }
        self.commands.get(command).copied()
    }

    /// All movement commands with their destinations.
    pub fn exits(&self) -> impl Iterator<Item = (&str, LocationId)> {
        self.commands
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(GO_PREFIX))
            .map(|(cmd, dest)| (cmd.as_str(), *dest))
    }

    /// Names of the items lying here, in sorted order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.present.iter().map(String::as_str)
    }

    /// Number of items lying here.
    pub fn item_count(&self) -> usize {
        self.present.len()
    }

    /// Find an item lying here by case-insensitive name. Returns the
    /// canonical spelling.
    pub fn find_item(&self, name: &str) -> Option<&str> {
        self.present
            .iter()
            .find(|n| same_name(n, name))
            .map(String::as_str)
    }

    /// Whether an item with this exact name lies here.
    pub fn has_item(&self, name: &str) -> bool {
        self.present.contains(name)
    }

    /// Remove an item by case-insensitive name, returning its canonical name.
    pub fn take_item(&mut self, name: &str) -> Option<String> {
        let canonical = self.find_item(name)?.to_string();
        self.present.remove(&canonical);
        Some(canonical)
    }

    /// Put an item down here. Returns `false` if it was already present.
    pub fn put_item(&mut self, name: impl Into<String>) -> bool {
        self.present.insert(name.into())
    }

    /// Record that the long description has been shown.
    pub fn mark_visited(&mut self) {
        self.visited = true;
    }
}
