//! Configuration for a game session.

use dl_core::{GameRules, LocationId};

/// Per-session overrides on top of a map's [`GameRules`].
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Start location. `None` uses the map's start location.
    pub start: Option<LocationId>,
    /// Move ceiling. `None` uses the map's ceiling.
    pub max_moves: Option<u32>,
}

impl SessionConfig {
    /// Create a config that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the session somewhere else.
    pub fn with_start(mut self, id: LocationId) -> Self {
        self.start = Some(id);
        self
    }

    /// Override the move ceiling.
    pub fn with_max_moves(mut self, max: u32) -> Self {
        self.max_moves = Some(max);
        self
    }

    /// The rules a session actually plays by.
    pub fn apply(&self, rules: &GameRules) -> GameRules {
        let mut rules = rules.clone();
        if let Some(start) = self.start {
            rules.start_location = start;
        }
        if let Some(max) = self.max_moves {
            rules.max_moves = max;
        }
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_keeps_rules() {
        let rules = GameRules::default();
        assert_eq!(SessionConfig::default().apply(&rules), rules);
    }

    #[test]
    fn builder_overrides() {
        let rules = SessionConfig::new()
            .with_start(LocationId(4))
            .with_max_moves(12)
            .apply(&GameRules::default());
        assert_eq!(rules.start_location, LocationId(4));
        assert_eq!(rules.max_moves, 12);
        assert_eq!(rules.deposit_site, LocationId(15));
    }
}
