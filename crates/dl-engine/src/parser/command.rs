//! Command parsing for player input.

use std::fmt;

/// A read-only menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Show the long description of the current location.
    Look,
    /// List carried items.
    Inventory,
    /// Show score, moves, and deposits.
    Score,
    /// Replay the event log.
    Log,
}

impl Query {
    /// The menu token for this query.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Look => "look",
            Self::Inventory => "inventory",
            Self::Score => "score",
            Self::Log => "log",
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move along an exit of the current location.
    Go {
        /// The direction phrase after `go `.
        direction: String,
    },
    /// Pick up an item lying here.
    PickUp {
        /// The item name as typed (lower-cased).
        item: String,
    },
    /// Put a carried item down here.
    Drop {
        /// The item name as typed (lower-cased).
        item: String,
    },
    /// Hand in a carried item at the deposit site.
    Deposit {
        /// The item name as typed (lower-cased).
        item: String,
    },
    /// A read-only menu action.
    Query(Query),
    /// End the session.
    Quit,
    /// Input that matches no command class.
    Unknown {
        /// The normalised input.
        input: String,
    },
}

/// Menu tokens accepted at every location.
pub const MENU: &[&str] = &["look", "inventory", "score", "log", "quit"];

const GO: &str = "go ";
const PICK_UP: &str = "pick up ";
const DROP: &str = "drop ";
const DEPOSIT: &str = "deposit ";

impl Command {
    /// Whether this command can never change game state.
    pub fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Go { direction } => write!(f, "{GO}{direction}"),
            Self::PickUp { item } => write!(f, "{PICK_UP}{item}"),
            Self::Drop { item } => write!(f, "{DROP}{item}"),
            Self::Deposit { item } => write!(f, "{DEPOSIT}{item}"),
            Self::Query(query) => f.write_str(query.token()),
            Self::Quit => f.write_str("quit"),
            Self::Unknown { input } => f.write_str(input),
        }
    }
}

/// Parse a player input string into a command.
///
/// Input is trimmed and lower-cased before matching, so `Pick Up USB Drive`
/// and `pick up usb drive` parse the same way.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "look" => return Command::Query(Query::Look),
        "inventory" => return Command::Query(Query::Inventory),
        "score" => return Command::Query(Query::Score),
        "log" => return Command::Query(Query::Log),
        "quit" => return Command::Quit,
        _ => {}
    }

    if let Some(direction) = remainder(&input, GO) {
        return Command::Go { direction };
    }
    if let Some(item) = remainder(&input, PICK_UP) {
        return Command::PickUp { item };
    }
    if let Some(item) = remainder(&input, DROP) {
        return Command::Drop { item };
    }
    if let Some(item) = remainder(&input, DEPOSIT) {
        return Command::Deposit { item };
    }

    Command::Unknown { input }
}

fn remainder(input: &str, prefix: &str) -> Option<String> {
    let rest = input.strip_prefix(prefix)?.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}
