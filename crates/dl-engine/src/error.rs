//! Error types for the transition engine.

use dl_core::MapError;
use thiserror::Error;

use crate::scoring::Outcome;

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while running a session.
///
/// Rule violations such as a locked door or a full inventory are not
/// errors; they come back as a [`crate::Denial`] on an otherwise
/// successful turn.
#[derive(Debug, Error)]
pub enum GameError {
    /// The map is invalid or refers to a missing location.
    #[error(transparent)]
    Map(#[from] MapError),

    /// The input is not a command available at the current location.
    #[error("invalid command: {input}")]
    InvalidCommand {
        /// The rejected input, normalised.
        input: String,
        /// The closest available command, if any is close enough.
        suggestion: Option<String>,
    },

    /// A command arrived after the session reached a terminal state.
    #[error("the session is over ({0})")]
    SessionOver(Outcome),
}
