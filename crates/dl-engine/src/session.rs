//! The transition engine: one player's session on one map.

use std::collections::HashSet;
use std::fmt;

use dl_core::{GameMap, GameRules, Location, MapError, same_name};

use crate::config::SessionConfig;
use crate::error::{GameError, GameResult};
use crate::event::{Event, EventLog};
use crate::narrator;
use crate::parser::{Command, MENU, Query, parse_command, suggest};
use crate::player::PlayerState;
use crate::scoring::{Outcome, check_outcome, deposit_award};

/// A rule that stopped a command. The command becomes a no-op: nothing
/// changes and no move is spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// The destination is gated and its key is not carried.
    Locked {
        /// Name of the gated location.
        location: String,
        /// Name of the missing key.
        key: String,
    },
    /// No such item lies at the current location.
    NotHere {
        /// The item as typed.
        item: String,
    },
    /// The inventory is at capacity.
    InventoryFull {
        /// The capacity.
        capacity: usize,
    },
    /// The item is not carried.
    NotCarrying {
        /// The item as typed.
        item: String,
    },
    /// A key cannot be dropped inside the room it opens.
    ForbiddenDrop {
        /// The key.
        item: String,
        /// The room it opens.
        location: String,
    },
    /// Deposits are only accepted at the deposit site.
    WrongDepositSite {
        /// Name of the deposit site.
        site: String,
    },
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locked { location, key } => {
                write!(f, "{location} is locked! You need the {key}.")
            }
            Self::NotHere { item } => write!(f, "There is no {item} here."),
            Self::InventoryFull { capacity } => {
                write!(f, "Your inventory is full! You can only carry {capacity} items.")
            }
            Self::NotCarrying { item } => write!(f, "You don't have {item}."),
            Self::ForbiddenDrop { item, location } => write!(
                f,
                "You cannot drop the {item} here! You need it to get back into {location}."
            ),
            Self::WrongDepositSite { site } => write!(f, "You can only deposit at {site}!"),
        }
    }
}

/// The result of one accepted command.
#[derive(Debug, Clone)]
pub struct Turn {
    /// The command as parsed.
    pub command: Command,
    /// Lines to show the player.
    pub messages: Vec<String>,
    /// Set when a rule turned the command into a no-op.
    pub denial: Option<Denial>,
    /// Session outcome after this command.
    pub outcome: Outcome,
}

impl Turn {
    fn new(command: Command) -> Self {
        Self {
            command,
            messages: Vec::new(),
            denial: None,
            outcome: Outcome::Ongoing,
        }
    }

    fn say(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    fn deny(&mut self, denial: Denial) {
        tracing::debug!(command = %self.command, %denial, "command denied");
        self.messages.push(denial.to_string());
        self.denial = Some(denial);
    }

    /// Whether a rule stopped the command.
    pub fn is_denied(&self) -> bool {
        self.denial.is_some()
    }

    /// All messages joined into one block of text.
    pub fn text(&self) -> String {
        self.messages.join("\n")
    }
}

/// A game session: the single owner of the player state, the mutable map,
/// and the event log of one playthrough.
pub struct GameSession {
    map: GameMap,
    rules: GameRules,
    player: PlayerState,
    log: EventLog,
    outcome: Outcome,
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("location", &self.player.location)
            .field("moves", &self.player.moves)
            .field("score", &self.player.score)
            .field("events", &self.log.len())
            .field("outcome", &self.outcome)
            .finish()
    }
}

impl GameSession {
    /// Start a session on a map.
    ///
    /// Fails with [`MapError::UnknownLocation`] if the start location does
    /// not exist. The opening event is recorded immediately.
    pub fn new(map: GameMap, config: &SessionConfig) -> GameResult<Self> {
        let rules = config.apply(&map.rules);
        let start = map.lookup(rules.start_location)?;

        let mut log = EventLog::new();
        log.append(Event::new(start.id, start.long_description.clone()), None);

        tracing::info!(start = %start.id, max_moves = rules.max_moves, "session started");

        let player = PlayerState::new(start.id, rules.inventory_capacity);
        Ok(Self {
            map,
            rules,
            player,
            log,
            outcome: Outcome::Ongoing,
        })
    }

    /// The map in its current state.
    pub fn map(&self) -> &GameMap {
        &self.map
    }

    /// The rules this session plays by.
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// The player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The event log so far.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Where the session stands.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The location the player is standing in.
    pub fn current_location(&self) -> GameResult<&Location> {
        Ok(self.map.lookup(self.player.location)?)
    }

    /// Describe the current location as if the player had just arrived,
    /// marking it visited.
    pub fn arrive(&mut self) -> GameResult<String> {
        let location = self.map.lookup_mut(self.player.location)?;
        let text = narrator::arrival(location, &self.rules, &self.player.inventory);
        location.mark_visited();
        Ok(text)
    }

    /// Parse and execute one line of player input.
    pub fn process(&mut self, input: &str) -> GameResult<Turn> {
        self.execute(parse_command(input))
    }

    /// Execute a parsed command.
    ///
    /// Input that is not available here fails with
    /// [`GameError::InvalidCommand`] and leaves the session untouched. Every
    /// other command, including queries and denied commands, is recorded
    /// as one event.
    pub fn execute(&mut self, command: Command) -> GameResult<Turn> {
        if self.outcome.is_terminal() {
            return Err(GameError::SessionOver(self.outcome));
        }

        let mut turn = Turn::new(command.clone());
        match &command {
            Command::Go { direction } => self.do_move(direction, &mut turn)?,
            Command::PickUp { item } => self.do_pick_up(item, &mut turn)?,
            Command::Drop { item } => self.do_drop(item, &mut turn)?,
            Command::Deposit { item } => self.do_deposit(item, &mut turn)?,
            Command::Query(query) => self.do_query(*query, &mut turn)?,
            Command::Quit => {
                self.outcome = Outcome::Quit;
                turn.say("Game Over!");
            }
            Command::Unknown { input } => return Err(self.reject(input)),
        }

        let here = self.map.lookup(self.player.location)?;
        self.log.append(
            Event::new(here.id, here.long_description.clone()),
            Some(command.to_string()),
        );
        tracing::debug!(
            %command,
            location = %self.player.location,
            moves = self.player.moves,
            score = self.player.score,
            "command accepted"
        );

        if !self.outcome.is_terminal() && !command.is_query() {
            self.outcome = check_outcome(&self.player, &self.rules);
            match self.outcome {
                Outcome::Won => {
                    tracing::info!(score = self.player.score, moves = self.player.moves, "session won");
                    turn.say(narrator::victory(self.player.score));
                }
                Outcome::Lost => {
                    tracing::info!(score = self.player.score, moves = self.player.moves, "session lost");
                    turn.say(narrator::defeat(self.player.score));
                }
                Outcome::Ongoing | Outcome::Quit => {}
            }
        }

        turn.outcome = self.outcome;
        Ok(turn)
    }

    /// Commands worth offering at the current location.
    ///
    /// Exits are always listed. Item commands from the location's table are
    /// listed only while they can apply, and every item lying here or
    /// carried gets a `pick up` or `drop` entry.
    pub fn available_actions(&self) -> Vec<String> {
        let Ok(location) = self.map.lookup(self.player.location) else {
            return Vec::new();
        };
        let inventory = &self.player.inventory;

        let mut actions = Vec::new();
        let mut listed_pickups = HashSet::new();
        let mut listed_drops = HashSet::new();

        for command in location.commands.keys() {
            if command.starts_with("go ") {
                actions.push(command.clone());
            } else if let Some(item) = command.strip_prefix("pick up ") {
                listed_pickups.insert(item.to_string());
                if location.find_item(item).is_some() {
                    actions.push(command.clone());
                }
            } else if let Some(item) = command.strip_prefix("drop ") {
                listed_drops.insert(item.to_string());
                if inventory.find(item).is_some() {
                    actions.push(command.clone());
                }
            } else if let Some(item) = command.strip_prefix("deposit ") {
                if inventory.find(item).is_some() {
                    actions.push(command.clone());
                }
            }
        }

        for name in location.items() {
            let lower = name.to_lowercase();
            if !listed_pickups.contains(&lower) {
                actions.push(format!("pick up {lower}"));
            }
        }
        for name in inventory.names() {
            let lower = name.to_lowercase();
            if !listed_drops.contains(&lower) {
                actions.push(format!("drop {lower}"));
            }
        }

        actions
    }

    // -----------------------------------------------------------------------
    // Rules
    // -----------------------------------------------------------------------

    fn do_move(&mut self, direction: &str, turn: &mut Turn) -> GameResult<()> {
        let command = format!("go {direction}");
        let Some(destination) = self.current_location()?.exit(&command) else {
            return Err(self.reject(&command));
        };
        let target = self.map.lookup(destination)?;

        // Re-checked on every entry: a dropped key locks the door again.
        let gate = self.rules.gate_at(destination);
        if let Some(gate) = gate {
            if self.player.inventory.find(&gate.key).is_none() {
                turn.deny(Denial::Locked {
                    location: target.name.clone(),
                    key: gate.key.clone(),
                });
                return Ok(());
            }
        }

        let name = target.name.clone();
        let from = self.player.location;
        self.player.location = destination;
        self.player.moves += 1;
        tracing::debug!(%from, to = %destination, moves = self.player.moves, "moved");

        if gate.is_some() {
            turn.say(narrator::unlocked(&name));
        }
        if destination == self.rules.deposit_site {
            turn.say(narrator::deposit_hint(&name));
        }
        let arrival = self.arrive()?;
        turn.say(arrival);
        Ok(())
    }

    fn do_pick_up(&mut self, item: &str, turn: &mut Turn) -> GameResult<()> {
        let here = self.player.location;
        let Some(name) = self.current_location()?.find_item(item).map(str::to_string) else {
            turn.deny(Denial::NotHere {
                item: item.to_string(),
            });
            return Ok(());
        };
        if self.player.inventory.is_full() {
            turn.deny(Denial::InventoryFull {
                capacity: self.player.inventory.capacity(),
            });
            return Ok(());
        }
        let definition = self
            .map
            .find_item(&name)
            .cloned()
            .ok_or_else(|| MapError::MalformedData(format!("item \"{name}\" has no definition")))?;

        let location = self.map.lookup_mut(here)?;
        location.take_item(&name);
        if let Err(definition) = self.player.inventory.insert(definition) {
            location.put_item(definition.name);
            turn.deny(Denial::InventoryFull {
                capacity: self.player.inventory.capacity(),
            });
            return Ok(());
        }

        turn.say(format!("Picked up: {name}"));
        Ok(())
    }

    fn do_drop(&mut self, item: &str, turn: &mut Turn) -> GameResult<()> {
        let here = self.player.location;
        let Some(name) = self.player.inventory.find(item).map(|i| i.name.clone()) else {
            turn.deny(Denial::NotCarrying {
                item: item.to_string(),
            });
            return Ok(());
        };

        if let Some(gate) = self.rules.gate_at(here) {
            if same_name(&gate.key, &name) {
                let location = self.current_location()?.name.clone();
                turn.deny(Denial::ForbiddenDrop {
                    item: name,
                    location,
                });
                return Ok(());
            }
        }

        let location = self.map.lookup_mut(here)?;
        if let Some(dropped) = self.player.inventory.remove(&name) {
            location.put_item(dropped.name);
        }

        turn.say(format!("Dropped: {name}"));
        Ok(())
    }

    fn do_deposit(&mut self, item: &str, turn: &mut Turn) -> GameResult<()> {
        let here = self.player.location;
        if here != self.rules.deposit_site {
            let site = self.map.lookup(self.rules.deposit_site)?.name.clone();
            turn.deny(Denial::WrongDepositSite { site });
            return Ok(());
        }
        let Some(held) = self.player.inventory.find(item) else {
            turn.deny(Denial::NotCarrying {
                item: item.to_string(),
            });
            return Ok(());
        };

        // Scored before the deposit is recorded.
        let points = deposit_award(held, here, &self.player);
        let name = held.name.clone();

        if let Some(deposited) = self.player.inventory.remove(&name) {
            self.player.record_deposit(deposited.name);
        }
        self.player.score = self.player.score.saturating_add(points);
        tracing::debug!(item = %name, points, score = self.player.score, "deposited");

        turn.say(format!("Deposited: {name}"));
        if points > 0 {
            turn.say(format!(
                "Earned {points} points! Score: {}",
                self.player.score
            ));
        }
        Ok(())
    }

    fn do_query(&self, query: Query, turn: &mut Turn) -> GameResult<()> {
        let text = match query {
            Query::Look => {
                narrator::describe(self.current_location()?, &self.rules, &self.player.inventory)
            }
            Query::Inventory => narrator::inventory(&self.player.inventory),
            Query::Score => narrator::score(&self.player, &self.rules),
            Query::Log => self.log.render_replay(),
        };
        turn.say(text);
        Ok(())
    }

    fn reject(&self, input: &str) -> GameError {
        let actions = self.available_actions();
        let candidates = actions
            .iter()
            .map(String::as_str)
            .chain(MENU.iter().copied());
        let suggestion = suggest(input, candidates);
        tracing::debug!(input, ?suggestion, "command rejected");
        GameError::InvalidCommand {
            input: input.to_string(),
            suggestion,
        }
    }

    #[cfg(test)]
    fn place_player(&mut self, location: dl_core::LocationId) {
        self.player.location = location;
    }
}
