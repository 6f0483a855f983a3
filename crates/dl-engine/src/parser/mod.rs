//! Command parsing and suggestion.

mod command;
mod resolver;

pub use command::{Command, MENU, Query, parse_command};
pub use resolver::{SUGGESTION_THRESHOLD, suggest};
