use dl_core::{GameMap, LocationId};

use crate::config::SessionConfig;
use crate::error::GameResult;
use crate::event::EventLog;
use crate::scoring::Outcome;
use crate::session::{GameSession, Turn};

/// A finished scripted run: the session it drove and every turn it took.
///
/// The command list is expected to be valid; the first rejected command
/// aborts the run.
pub struct Simulation {
    session: GameSession,
    turns: Vec<Turn>,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("turns", &self.turns.len())
            .field("events", &self.session.log().len())
            .field("outcome", &self.session.outcome())
            .finish()
    }
}

impl Simulation {
    /// Run a command list on a fresh session.
    pub fn run<I, S>(map: GameMap, config: &SessionConfig, commands: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut session = GameSession::new(map, config)?;
        let mut turns = Vec::new();

        for (step, command) in commands.into_iter().enumerate() {
            let command = command.as_ref();
            match session.process(command) {
                Ok(turn) => turns.push(turn),
                Err(err) => {
                    tracing::warn!(step = step + 1, command, error = %err, "simulation aborted");
                    return Err(err);
                }
            }
        }

        Ok(Self { session, turns })
    }

    /// The visited location IDs, one per event.
    pub fn id_log(&self) -> Vec<LocationId> {
        self.session.log().id_log()
    }

    /// The event log.
    pub fn log(&self) -> &EventLog {
        self.session.log()
    }

    /// Where the session ended up.
    pub fn outcome(&self) -> Outcome {
        self.session.outcome()
    }

    /// Every turn, in order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The driven session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The replay text of the event log.
    pub fn render_replay(&self) -> String {
        self.session.log().render_replay()
    }
}
