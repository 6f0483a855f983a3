use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::error::{MapError, MapResult};
use crate::item::Item;
use crate::location::{Location, LocationId};
use crate::rules::GameRules;

/// The data file of the campus game, embedded at build time.
const CAMPUS_JSON: &str = include_str!("../data/campus.json");

/// Top-level shape of a data file.
#[derive(Deserialize)]
struct MapDocument {
    locations: Vec<Location>,
    items: Vec<Item>,
    #[serde(default)]
    rules: GameRules,
}

/// The map definition. Owns all locations, items, and rules.
#[derive(Debug, Clone)]
pub struct GameMap {
    /// Constants of the game played on this map.
    pub rules: GameRules,
    locations: BTreeMap<LocationId, Location>,
    items: Vec<Item>,
}

impl GameMap {
    /// Create an empty map with the given rules.
    pub fn new(rules: GameRules) -> Self {
        Self {
            rules,
            locations: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    /// The built-in campus map.
    pub fn campus() -> MapResult<Self> {
        Self::from_json(CAMPUS_JSON)
    }

    /// Read and validate a data file.
    pub fn load(path: &Path) -> MapResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> MapResult<Self> {
        let doc: MapDocument = serde_json::from_str(json)?;

        let mut map = Self::new(doc.rules);
        for location in doc.locations {
            map.add_location(location)?;
        }
        for item in doc.items {
            map.add_item(item)?;
        }
        map.validate()?;
        Ok(map)
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Add a location. Fails if its ID is already taken.
    pub fn add_location(&mut self, location: Location) -> MapResult<()> {
        if self.locations.contains_key(&location.id) {
            return Err(MapError::MalformedData(format!(
                "duplicate location id {}",
                location.id
            )));
        }
        self.locations.insert(location.id, location);
        Ok(())
    }

    /// Add an item definition. Fails if the name is already taken.
    pub fn add_item(&mut self, item: Item) -> MapResult<()> {
        if self.find_item(&item.name).is_some() {
            return Err(MapError::MalformedData(format!(
                "duplicate item \"{}\"",
                item.name
            )));
        }
        self.items.push(item);
        Ok(())
    }

    /// Check cross references between locations, items, and rules.
    pub fn validate(&self) -> MapResult<()> {
        for location in self.locations.values() {
            for dest in location.commands.values() {
                self.lookup(*dest)?;
            }
        }

        for item in &self.items {
            self.lookup(item.start)?;
            self.lookup(item.target)?;
        }

        let mut placed = HashMap::new();
        for location in self.locations.values() {
            for name in location.items() {
                let item = self.find_item(name).ok_or_else(|| {
                    MapError::MalformedData(format!(
                        "location {} lists unknown item \"{name}\"",
                        location.id
                    ))
                })?;
                if placed.insert(item.name.as_str(), location.id).is_some() {
                    return Err(MapError::MalformedData(format!(
                        "item \"{}\" is placed at more than one location",
                        item.name
                    )));
                }
            }
        }

        // Every item starts out in exactly one location: its start position.
        for item in &self.items {
            match placed.get(item.name.as_str()) {
                None => {
                    return Err(MapError::MalformedData(format!(
                        "item \"{}\" is not placed at any location",
                        item.name
                    )));
                }
                Some(&at) if at != item.start => {
                    return Err(MapError::MalformedData(format!(
                        "item \"{}\" lies at location {at} but starts at {}",
                        item.name, item.start
                    )));
                }
                Some(_) => {}
            }
        }

        self.lookup(self.rules.start_location)?;
        self.lookup(self.rules.deposit_site)?;
        for gate in &self.rules.gates {
            self.lookup(gate.location)?;
            self.require_item(&gate.key, "gate key")?;
        }
        for name in &self.rules.required_items {
            self.require_item(name, "required item")?;
        }

        Ok(())
    }

    fn require_item(&self, name: &str, role: &str) -> MapResult<()> {
        if self.find_item(name).is_none() {
            return Err(MapError::MalformedData(format!(
                "{role} \"{name}\" is not a known item"
            )));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Get a location by ID.
    pub fn lookup(&self, id: LocationId) -> MapResult<&Location> {
        self.locations.get(&id).ok_or(MapError::UnknownLocation(id))
    }

    /// Get a mutable location by ID.
    pub fn lookup_mut(&mut self, id: LocationId) -> MapResult<&mut Location> {
        self.locations
            .get_mut(&id)
            .ok_or(MapError::UnknownLocation(id))
    }

    /// Find an item definition by case-insensitive name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.is_named(name))
    }

    /// Where an item currently lies, if it lies anywhere on the map.
    pub fn item_location(&self, name: &str) -> Option<LocationId> {
        self.locations
            .values()
            .find(|loc| loc.find_item(name).is_some())
            .map(|loc| loc.id)
    }

    /// All locations in ID order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// All item definitions in load order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }
}
