use serde::{Deserialize, Serialize};

use crate::location::LocationId;

/// A portable object. Items are identified by name and never change after
/// load; where an item currently is lives in the locations and the player
/// state, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique name (case-insensitive).
    pub name: String,
    /// Where the item lies when the game starts.
    #[serde(rename = "start_position")]
    pub start: LocationId,
    /// Where the item must be deposited to score.
    #[serde(rename = "target_position")]
    pub target: LocationId,
    /// Points awarded for a deposit at the target.
    #[serde(rename = "target_points")]
    pub points: u32,
    /// Flavour text.
    pub description: String,
}

impl Item {
    /// Create a new item.
    pub fn new(
        name: impl Into<String>,
        start: LocationId,
        target: LocationId,
        points: u32,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            target,
            points,
            description: String::new(),
        }
    }

    /// Whether `name` refers to this item, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        same_name(&self.name, name)
    }
}

/// Compare two item names the way player input is matched: full Unicode
/// lower-casing on both sides.
pub fn same_name(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
