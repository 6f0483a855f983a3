//! Core types for Deadline: locations, items, rules, and the game map.
//!
//! This crate defines the static map definition that a game session plays
//! on. It is independent of the transition engine: you can construct a
//! [`GameMap`] from JSON, load one from disk, or use the built-in campus map.

/// Error types used throughout the crate.
pub mod error;
/// Item definitions.
pub mod item;
/// Locations, location identifiers, and command tables.
pub mod location;
/// The game map that owns every location and item.
pub mod map;
/// Fixed game constants: gates, deposit site, move ceiling.
pub mod rules;

/// Re-export error types.
pub use error::{MapError, MapResult};
/// Re-export item types.
pub use item::{Item, same_name};
/// Re-export location types.
pub use location::{Location, LocationId};
/// Re-export map types.
pub use map::GameMap;
/// Re-export rule types.
pub use rules::{Gate, GameRules};
