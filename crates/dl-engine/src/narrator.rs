//! Text rendering for arrivals, queries, and the mission briefing.
//!
//! Everything here is display-only; nothing in the engine reads these
//! strings back.

use dl_core::{GameMap, GameRules, Location};

use crate::parser::MENU;
use crate::player::{Inventory, PlayerState};

/// Marker in a long description that flips when the gate key is carried.
pub const LOCKED_MARKER: &str = "(LOCKED)";
const UNLOCKED_MARKER: &str = "(UNLOCKED)";

/// The long description, with the lock marker flipped when the player
/// carries the key for this location.
pub fn describe(location: &Location, rules: &GameRules, inventory: &Inventory) -> String {
    match rules.gate_at(location.id) {
        Some(gate) if inventory.find(&gate.key).is_some() => location
            .long_description
            .replace(LOCKED_MARKER, UNLOCKED_MARKER),
        _ => location.long_description.clone(),
    }
}

/// Text shown when the player arrives somewhere: the long description on
/// the first visit, the brief one afterwards, then the gate banner if the
/// location is gated.
pub fn arrival(location: &Location, rules: &GameRules, inventory: &Inventory) -> String {
    let mut out = if location.visited {
        location.brief_description.clone()
    } else {
        describe(location, rules, inventory)
    };
    if let Some(banner) = gate_banner(location, rules, inventory) {
        out.push('\n');
        out.push_str(&banner);
    }
    out
}

/// Lock status line for a gated location.
pub fn gate_banner(location: &Location, rules: &GameRules, inventory: &Inventory) -> Option<String> {
    let gate = rules.gate_at(location.id)?;
    let banner = if inventory.find(&gate.key).is_some() {
        format!("[{}: UNLOCKED - {} in your inventory]", location.name, gate.key)
    } else {
        format!("[{}: LOCKED - {} required to enter]", location.name, gate.key)
    };
    Some(banner)
}

/// Announcement when a gate opens for the player.
pub fn unlocked(location_name: &str) -> String {
    format!("{location_name} unlocks!")
}

/// Reminder shown on entering the deposit site.
pub fn deposit_hint(location_name: &str) -> String {
    format!("This is {location_name}, use the deposit command to earn points!")
}

/// Inventory listing.
pub fn inventory(inventory: &Inventory) -> String {
    let mut out = format!(
        "Your inventory: {} / {}",
        inventory.len(),
        inventory.capacity()
    );
    for name in inventory.names() {
        out.push_str(&format!("\n - {name}"));
    }
    out
}

/// Score, moves, and delivery progress.
pub fn score(player: &PlayerState, rules: &GameRules) -> String {
    let delivered = rules
        .required_items
        .iter()
        .filter(|name| player.has_deposited(name))
        .count();
    format!(
        "Score: {}\nMoves: {} / {}\nDeposited: {} / {}",
        player.score,
        player.moves,
        rules.max_moves,
        delivered,
        rules.required_items.len()
    )
}

/// The menu prompt shown every turn.
pub fn menu() -> String {
    format!("What to do? Choose from: {}", MENU.join(", "))
}

/// Closing line for a won session.
pub fn victory(score: u32) -> String {
    format!("You win! Final score: {score}")
}

/// Closing line for a lost session.
pub fn defeat(score: u32) -> String {
    format!("Game Over! You ran out of moves. Final score: {score}")
}

/// The mission briefing printed before the first turn.
pub fn briefing(map: &GameMap, rules: &GameRules) -> String {
    let site = map
        .lookup(rules.deposit_site)
        .map(|loc| loc.name.as_str())
        .unwrap_or("the deposit site");

    let mut out = format!("MISSION: Find and deposit these items at {site}:\n");
    for (i, name) in rules.required_items.iter().enumerate() {
        out.push_str(&format!("    {}. {name}\n", i + 1));
    }
    out.push_str(&format!(
        "\n*** You can only carry {} items at a time! ***\n",
        rules.inventory_capacity
    ));
    out.push_str(&format!(
        "*** You have {} moves before the deadline. ***\n",
        rules.max_moves
    ));
    out.push_str("\nCommands:\n");
    out.push_str("    drop: leave an item on the ground (you can pick it up later, no points)\n");
    out.push_str(&format!("    deposit: deliver an item at {site} to earn points\n"));

    if !rules.gates.is_empty() {
        out.push_str("\nLocked locations:\n");
        for gate in &rules.gates {
            let name = map
                .lookup(gate.location)
                .map(|loc| loc.name.as_str())
                .unwrap_or("?");
            out.push_str(&format!("    {name} requires the {}", gate.key));
            let hint = map
                .item_location(&gate.key)
                .and_then(|id| map.lookup(id).ok());
            if let Some(at) = hint {
                out.push_str(&format!(" (hint: look in {})", at.name));
            }
            out.push('\n');
        }
        out.push_str("*** Keys never expire! Keep them in your inventory to get in. ***\n");
    }

    out
}
