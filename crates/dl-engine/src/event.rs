use dl_core::LocationId;
use serde::Serialize;

/// A record of where the player stood after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// The location the player was in.
    pub location: LocationId,
    /// That location's long description.
    pub description: String,
    /// The command that produced this event. `None` for the opening event.
    pub command: Option<String>,
}

impl Event {
    /// Create an event not yet tied to a command.
    pub fn new(location: LocationId, description: impl Into<String>) -> Self {
        Self {
            location,
            description: description.into(),
            command: None,
        }
    }
}

/// One step of a replay: an event and the command that led away from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStep<'a> {
    /// The location of this event.
    pub location: LocationId,
    /// The description recorded with this event.
    pub description: &'a str,
    /// The command that produced the next event, `None` for the last one.
    pub next_command: Option<&'a str>,
}

/// Append-only log of events in visitation order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, labelled with the command that produced it.
    pub fn append(&mut self, mut event: Event, command: Option<String>) {
        event.command = command;
        self.events.push(event);
    }

    /// All events in order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// The opening event.
    pub fn first(&self) -> Option<&Event> {
        self.events.first()
    }

    /// The most recent event.
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The visited location IDs in order.
    pub fn id_log(&self) -> Vec<LocationId> {
        self.events.iter().map(|e| e.location).collect()
    }

    /// Walk the log front to back, pairing each event with the command
    /// that led to the next one.
    pub fn replay(&self) -> impl Iterator<Item = ReplayStep<'_>> {
        self.events.iter().enumerate().map(|(i, event)| ReplayStep {
            location: event.location,
            description: &event.description,
            next_command: self
                .events
                .get(i + 1)
                .and_then(|next| next.command.as_deref()),
        })
    }

    /// Render the replay as text: each description followed by the choice
    /// that led onward.
    pub fn render_replay(&self) -> String {
        let mut out = String::new();
        for step in self.replay() {
            out.push_str(step.description);
            out.push('\n');
            if let Some(command) = step.next_command {
                out.push_str(&format!("You choose: {command}\n"));
            }
        }
        out
    }
}
