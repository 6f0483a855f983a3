//! End-to-end walkthroughs of the campus map.

use dl_core::{GameMap, LocationId};
use dl_engine::{Denial, GameError, GameSession, Outcome, SessionConfig, Simulation};

const WIN: &[&str] = &[
    "go south",
    "go south",
    "go east",
    "go east",
    "go east",
    "go north",
    "go north",
    "pick up lucky mug",
    "pick up t-card",
    "go south",
    "go south",
    "go west",
    "go west",
    "go south",
    "drop lucky mug",
    "go west",
    "pick up dorm key",
    "go east",
    "drop t-card",
    "pick up lucky mug",
    "go east",
    "deposit lucky mug",
    "go north",
    "pick up laptop charger",
    "go south",
    "deposit laptop charger",
    "go north",
    "pick up usb drive",
    "go south",
    "deposit usb drive",
];

fn ids(raw: &[u32]) -> Vec<LocationId> {
    raw.iter().copied().map(LocationId).collect()
}

fn run(commands: &[&str]) -> Simulation {
    Simulation::run(
        GameMap::campus().unwrap(),
        &SessionConfig::default(),
        commands.iter().copied(),
    )
    .unwrap()
}

fn session() -> GameSession {
    GameSession::new(GameMap::campus().unwrap(), &SessionConfig::default()).unwrap()
}

/// Total number of item instances on the map plus the player's hands and
/// the deposited set.
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

#[test]
fn inventory_walkthrough() {
    let sim = run(&[
        "go south",
        "go south",
        "go east",
        "go east",
        "pick up usb drive",
        "inventory",
    ]);
    assert_eq!(sim.id_log(), ids(&[1, 5, 9, 10, 11, 11, 11]));
    assert_eq!(
        sim.turns().last().unwrap().text(),
        "Your inventory: 1 / 2\n - USB Drive"
    );
}

#[test]
fn winning_walkthrough() {
    let sim = run(WIN);

    assert_eq!(
        sim.id_log(),
        ids(&[
            1, 5, 9, 10, 11, 12, 8, 4, 4, 4, 8, 12, 11, 10, 14, 14, 13, 13, 14, 14, 14, 15, 15,
            11, 11, 15, 15, 11, 11, 15, 15
        ])
    );
    assert_eq!(sim.outcome(), Outcome::Won);
    assert_eq!(sim.session().player().score, 60);
    assert!(sim.turns().iter().all(|t| !t.is_denied()));
    assert!(
        sim.turns()
            .last()
            .unwrap()
            .text()
            .ends_with("You win! Final score: 60")
    );
}

#[test]
fn running_out_of_moves() {
    let commands: Vec<&str> = (0..50)
        .map(|i| if i % 2 == 0 { "go south" } else { "go north" })
        .collect();
    let sim = run(&commands);

    let expected: Vec<LocationId> = (0..51)
        .map(|i| LocationId(if i % 2 == 0 { 1 } else { 5 }))
        .collect();
    assert_eq!(sim.id_log(), expected);
    assert_eq!(sim.outcome(), Outcome::Lost);
    assert_eq!(sim.session().player().moves, 50);
    assert_eq!(sim.turns()[48].outcome, Outcome::Ongoing);
    assert!(sim.turns()[49].text().contains("Game Over!"));
}

#[test]
fn command_after_loss_is_rejected() {
    let mut commands: Vec<&str> = (0..50)
        .map(|i| if i % 2 == 0 { "go south" } else { "go north" })
        .collect();
    commands.push("look");

    let err = Simulation::run(
        GameMap::campus().unwrap(),
        &SessionConfig::default(),
        commands,
    )
    .unwrap_err();
    assert!(matches!(err, GameError::SessionOver(Outcome::Lost)));
}

#[test]
fn locked_library_without_card() {
    let sim = run(&["go south", "go south", "go south"]);

    assert_eq!(sim.id_log(), ids(&[1, 5, 9, 9]));
    assert_eq!(sim.session().player().moves, 2);
    assert_eq!(
        sim.turns()[2].denial,
        Some(Denial::Locked {
            location: "Robarts Library".to_string(),
            key: "T-card".to_string(),
        })
    );
}

#[test]
fn locked_dorm_then_unlocked() {
    let sim = run(&[
        "go south",
        "go south",
        "go east",
        "go east",
        "go east",
        "go north",
        "go north",
        "pick up lucky mug",
        "pick up t-card",
        "go south",
        "go south",
        "go south",
        "go west",
        "go north",
        "go west",
        "go west",
        "go south",
        "drop lucky mug",
        "go west",
        "pick up dorm key",
        "go east",
        "go east",
    ]);

    assert_eq!(
        sim.id_log(),
        ids(&[
            1, 5, 9, 10, 11, 12, 8, 4, 4, 4, 8, 12, 16, 16, 12, 11, 10, 14, 14, 13, 13, 14, 15
        ])
    );
    assert!(matches!(sim.turns()[12].denial, Some(Denial::Locked { .. })));
    assert!(sim.turns()[21].text().contains("Oak House unlocks!"));
}

#[test]
fn dropping_the_key_relocks_the_door() {
    let mut session = session();
    for cmd in &WIN[..18] {
        session.process(cmd).unwrap();
    }
    // Standing in Robarts Plaza, holding the T-card and the Dorm Key
    assert_eq!(session.player().location, LocationId(14));

    session.process("drop t-card").unwrap();
    let turn = session.process("go west").unwrap();
    assert!(matches!(turn.denial, Some(Denial::Locked { ref key, .. }) if key == "T-card"));
    assert_eq!(session.player().location, LocationId(14));

    session.process("pick up t-card").unwrap();
    let turn = session.process("go west").unwrap();
    assert!(!turn.is_denied());
    assert_eq!(session.player().location, LocationId(13));
}

#[test]
fn key_stays_in_hand_inside_its_room() {
    let mut session = session();
    for cmd in &WIN[..16] {
        session.process(cmd).unwrap();
    }
    assert_eq!(session.player().location, LocationId(13));

    let turn = session.process("drop t-card").unwrap();
    assert!(matches!(turn.denial, Some(Denial::ForbiddenDrop { .. })));
    assert!(session.player().inventory.contains("T-card"));
}

#[test]
fn third_item_does_not_fit() {
    let mut session = session();
    for cmd in &WIN[..9] {
        session.process(cmd).unwrap();
    }
    session.process("go south").unwrap();
    session.process("go south").unwrap();
    session.process("go west").unwrap();
    let turn = session.process("pick up usb drive").unwrap();

    assert_eq!(turn.denial, Some(Denial::InventoryFull { capacity: 2 }));
    assert!(session.current_location().unwrap().has_item("USB Drive"));
}

#[test]
fn items_are_conserved_through_a_win() {
    let mut session = session();
    let total = item_total(&session);
    for cmd in WIN {
        session.process(cmd).unwrap();
        assert_eq!(item_total(&session), total);
        for (name, count) in homes(&session) {
            assert_eq!(count, 1, "{name} after {cmd}");
        }
    }
}

#[test]
fn off_target_deposit_scores_nothing() {
    // The T-card belongs in Robarts Library, not Oak House
    let mut session = session();
    for cmd in &WIN[..18] {
        session.process(cmd).unwrap();
    }
    session.process("go east").unwrap();
    let turn = session.process("deposit t-card").unwrap();

    assert!(!turn.is_denied());
    assert_eq!(session.player().score, 0);
    assert!(session.player().has_deposited("T-card"));
}

#[test]
fn deposit_away_from_oak_house() {
    let mut session = session();
    for cmd in &WIN[..8] {
        session.process(cmd).unwrap();
    }
    let turn = session.process("deposit lucky mug").unwrap();
    assert_eq!(
        turn.denial,
        Some(Denial::WrongDepositSite {
            site: "Oak House".to_string()
        })
    );
    assert!(session.player().inventory.contains("Lucky Mug"));
}

#[test]
fn custom_move_ceiling() {
    let config = SessionConfig::new().with_max_moves(3);
    let sim = Simulation::run(
        GameMap::campus().unwrap(),
        &config,
        ["go south", "go south", "go east"],
    )
    .unwrap();
    assert_eq!(sim.outcome(), Outcome::Lost);
}
