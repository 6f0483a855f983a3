//! Deposit scoring and win/lose evaluation.

use std::fmt;

use dl_core::{GameRules, Item, LocationId};
use serde::Serialize;

use crate::player::PlayerState;

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Still accepting commands.
    #[default]
    Ongoing,
    /// Every required item was deposited.
    Won,
    /// The move ceiling was reached.
    Lost,
    /// The player quit.
    Quit,
}

impl Outcome {
    /// Whether the session has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ongoing => "ongoing",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Quit => "quit",
        })
    }
}

/// Points for depositing `item` at `location`.
///
/// Pure in its inputs: the item's points when `location` is its target and
/// the player has not already deposited it, otherwise zero. Callers evaluate
/// this before recording the deposit.
pub fn deposit_award(item: &Item, location: LocationId, player: &PlayerState) -> u32 {
    if player.has_deposited(&item.name) {
        return 0;
    }
    if location == item.target {
        item.points
    } else {
        0
    }
}

/// Evaluate the win and lose conditions, win first.
///
/// A map without required items can never be won.
pub fn check_outcome(player: &PlayerState, rules: &GameRules) -> Outcome {
    let won = !rules.required_items.is_empty()
        && rules
            .required_items
            .iter()
            .all(|name| player.has_deposited(name));
    if won {
        return Outcome::Won;
    }
    if player.moves >= rules.max_moves {
        return Outcome::Lost;
    }
    Outcome::Ongoing
}
