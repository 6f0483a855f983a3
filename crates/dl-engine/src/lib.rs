//! Game-state transition engine for Deadline.
//!
//! A [`GameSession`] owns the map and the player state of one playthrough
//! and advances them one command at a time. Every accepted command is
//! recorded in an [`EventLog`]; the [`Simulation`] driver feeds a scripted
//! command list through a session so that the resulting trace can be
//! compared against an expected one.

/// Session configuration.
pub mod config;
/// Error types for the engine.
pub mod error;
/// Ordered log of visited-location events.
pub mod event;
/// Text rendering for arrivals, queries, and the mission briefing.
pub mod narrator;
/// Command parsing and suggestion.
pub mod parser;
/// Player state: position, inventory, score, deposits.
pub mod player;
/// Deposit scoring and win/lose evaluation.
pub mod scoring;
/// The transition engine.
pub mod session;
/// Scripted replay of a command list.
pub mod simulation;

pub use config::SessionConfig;
pub use error::{GameError, GameResult};
pub use event::{Event, EventLog, ReplayStep};
pub use parser::{Command, Query, parse_command};
pub use player::{Inventory, PlayerState};
pub use scoring::{Outcome, check_outcome, deposit_award};
pub use session::{Denial, GameSession, Turn};
pub use simulation::Simulation;
