pub mod check;
pub mod play;
pub mod simulate;

use std::path::Path;

use dl_core::{GameMap, LocationId};
use dl_engine::SessionConfig;

/// Load a map, falling back to the built-in campus.
fn load_map(data: Option<&Path>) -> Result<GameMap, String> {
    match data {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading map");
            GameMap::load(path)
        }
        None => GameMap::campus(),
    }
    .map_err(|e| format!("failed to load map: {e}"))
}

fn session_config(start: Option<u32>, max_moves: Option<u32>) -> SessionConfig {
    let mut config = SessionConfig::new();
    if let Some(start) = start {
        config = config.with_start(LocationId::from(start));
    }
    if let Some(max) = max_moves {
        config = config.with_max_moves(max);
    }
    config
}
