//! Invariants that hold over arbitrary command sequences on the campus map.

use dl_core::GameMap;
use dl_engine::{GameError, GameSession, SessionConfig};
use proptest::prelude::*;

const ITEMS: &[&str] = &["usb drive", "laptop charger", "lucky mug", "t-card", "dorm key"];
const DIRECTIONS: &[&str] = &["north", "south", "east", "west"];
const QUERIES: &[&str] = &["look", "inventory", "score", "log"];

fn command() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(DIRECTIONS).prop_map(|d| format!("go {d}")),
        2 => prop::sample::select(ITEMS).prop_map(|i| format!("pick up {i}")),
        1 => prop::sample::select(ITEMS).prop_map(|i| format!("drop {i}")),
        1 => prop::sample::select(ITEMS).prop_map(|i| format!("deposit {i}")),
        1 => prop::sample::select(QUERIES).prop_map(str::to_string),
    ]
}

fn item_total(session: &GameSession) -> usize {
    let on_map: usize = session.map().locations().map(|l| l.item_count()).sum();
    on_map + session.player().inventory.len() + session.player().deposited_count()
}

/// Number of containers holding each item: locations, the inventory, and
/// the deposited set.
fn homes(session: &GameSession) -> Vec<(String, usize)> {
    session
        .map()
        .items()
        .iter()
        .map(|item| {
            let on_map = session
                .map()
                .locations()
                .filter(|l| l.has_item(&item.name))
                .count();
            let carried = usize::from(session.player().inventory.contains(&item.name));
            let deposited = usize::from(session.player().has_deposited(&item.name));
            (item.name.clone(), on_map + carried + deposited)
        })
        .collect()
}

proptest! {
    #[test]
    fn session_invariants(commands in prop::collection::vec(command(), 0..120)) {
        let mut session =
            GameSession::new(GameMap::campus().unwrap(), &SessionConfig::default()).unwrap();
        let total = item_total(&session);
        let mut moves = 0;
        let mut score = 0;
        let mut events = session.log().len();

        for cmd in &commands {
            match session.process(cmd) {
                Ok(turn) => {
                    events += 1;
                    if turn.is_denied() {
                        prop_assert_eq!(session.player().moves, moves);
                    }
                }
                Err(GameError::InvalidCommand { .. }) => {}
                Err(GameError::SessionOver(_)) => break,
                Err(other) => return Err(TestCaseError::fail(other.to_string())),
            }

            let player = session.player();
            prop_assert_eq!(item_total(&session), total);
            for (name, count) in homes(&session) {
                prop_assert_eq!(count, 1, "{} is in {} containers", name, count);
            }
            prop_assert!(player.inventory.len() <= 2);
            prop_assert!(player.moves >= moves);
            prop_assert!(player.moves <= moves + 1);
            prop_assert!(player.score >= score);
            prop_assert!(player.moves <= 50);
            prop_assert_eq!(session.log().len(), events);
            moves = player.moves;
            score = player.score;
        }
    }

    #[test]
    fn every_item_scores_at_most_once(commands in prop::collection::vec(command(), 0..200)) {
        let mut session =
            GameSession::new(GameMap::campus().unwrap(), &SessionConfig::default()).unwrap();
        for cmd in &commands {
            if let Err(GameError::SessionOver(_)) = session.process(cmd) {
                break;
            }
        }
        // 30 + 20 + 10, the zero-point keys add nothing
        prop_assert!(session.player().score <= 60);
    }
}
