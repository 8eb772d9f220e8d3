use navalgrid::{
    board::{CannotPlaceReason, MIN_SIZE},
    game::CannotFireReason,
    player::{CannotPutReason, CannotTakeOffReason},
    Game, GameOptions, OptionKey, Orientation, Role, Ship, ShipKind, ShipsFleet, Shot,
};

const FLEET: [ShipKind; 2] = [ShipKind::Destroyer, ShipKind::Cruiser];

fn ready_game() -> Game<&'static str, u32> {
    let options = GameOptions::from_pairs(vec![("shots-per-round", "1"), ("grid-size", "10")])
        .unwrap();
    let mut game = Game::new("scenario", options);
    for pid in &["alice", "bob"] {
        assert!(game.add_player(*pid));
        let grid = game.new_grid().unwrap();
        let player = game.player_mut(*pid).unwrap();
        player.set_grid(Role::Mine, grid);
        player.set_fleet(Role::Mine, ShipsFleet::new(FLEET.to_vec()).unwrap());
        player
            .put_ship(Ship::new(1, ShipKind::Destroyer, Orientation::Horizontal, 0, 0))
            .unwrap();
        player
            .put_ship(Ship::new(2, ShipKind::Cruiser, Orientation::Vertical, 5, 5))
            .unwrap();
        assert!(!player.fleet(Role::Mine).unwrap().any_available_ships());
    }
    game
}

fn fire(game: &mut Game<&'static str, u32>, target: &'static str, row: usize, col: usize) -> bool {
    let salvo = game.discharge_salvo(target, vec![Shot::new(row, col)]).unwrap();
    salvo.shots()[0].result().unwrap().is_hit()
}

fn deployed(game: &Game<&'static str, u32>, pid: &str) -> usize {
    game.player(pid)
        .unwrap()
        .fleet(Role::Mine)
        .unwrap()
        .ships()
        .count()
}

#[test]
fn play_until_one_fleet_is_sunk() {
    let mut game = ready_game();

    let bob_targets = [(0, 0), (0, 1), (5, 5), (6, 5), (7, 5)];
    let alice_targets = [(9, 9), (9, 8), (9, 7), (9, 6), (9, 5)];
    for (bob, alice) in bob_targets.iter().zip(alice_targets.iter()) {
        assert!(fire(&mut game, "bob", bob.0, bob.1));
        assert!(!fire(&mut game, "alice", alice.0, alice.1));
    }

    assert_eq!(deployed(&game, "bob"), 0);
    assert_eq!(deployed(&game, "alice"), 2);
    assert_eq!(game.history().len(), 10);
    assert_eq!(game.last_target(), Some(&"alice"));

    let bob_grid = game.player("bob").unwrap().grid(Role::Mine).unwrap();
    assert!(bob_grid.items().iter().all(|ship| ship.is_destroyed()));
    let destroyed: Vec<_> = game
        .history()
        .iter()
        .flat_map(|salvo| salvo.destroyed())
        .map(|ship| (*ship.id(), ship.kind()))
        .collect();
    assert_eq!(
        destroyed,
        vec![(1, ShipKind::Destroyer), (2, ShipKind::Cruiser)]
    );
}

#[test]
fn repeated_target_is_rejected_mid_game() {
    let mut game = ready_game();
    assert!(fire(&mut game, "bob", 0, 0));

    let err = game
        .discharge_salvo("bob", vec![Shot::new(0, 1)])
        .unwrap_err();
    assert_eq!(err.reason(), CannotFireReason::ConsecutiveTarget);
    let bob_grid = game.player("bob").unwrap().grid(Role::Mine).unwrap();
    assert!(!bob_grid.cell((0, 1).into()).unwrap().was_shot());
    assert_eq!(game.history().len(), 1);
}

#[test]
fn ships_can_be_moved_before_the_first_salvo() {
    let mut game = ready_game();
    let player = game.player_mut("alice").unwrap();

    let blocked = Ship::new(3, ShipKind::Cruiser, Orientation::Horizontal, 0, 7);
    let err = player.put_ship(blocked).unwrap_err();
    assert!(matches!(err.reason(), CannotPutReason::CallUp(_)));

    let mut cruiser = player.take_off_ship(&2).unwrap();
    assert_eq!(player.fleet(Role::Mine).unwrap().available(), &[ShipKind::Cruiser]);
    assert_eq!(
        player.take_off_ship(&2).unwrap_err().reason(),
        CannotTakeOffReason::NotPlaced
    );

    // Right next to the destroyer lies inside its buffer zone.
    cruiser.set_position(1, 1);
    let err = player.put_ship(cruiser).unwrap_err();
    assert_eq!(
        err.reason(),
        CannotPutReason::Place(CannotPlaceReason::Collides)
    );
    assert_eq!(player.fleet(Role::Mine).unwrap().available(), &[ShipKind::Cruiser]);

    let mut cruiser = err.into_ship();
    cruiser.set_orientation(Orientation::Horizontal);
    cruiser.set_position(MIN_SIZE - 1, MIN_SIZE - 3);
    player.put_ship(cruiser).unwrap();
    assert!(!player.fleet(Role::Mine).unwrap().any_available_ships());
}

#[test]
fn options_round_trip_through_the_game() {
    let mut game = Game::<u32, u32>::new("options", GameOptions::default());
    game.set_option(OptionKey::ShotsPerRound, 2).unwrap();
    assert_eq!(game.option(OptionKey::ShotsPerRound), 2);
    assert!(GameOptions::default()
        .set_str(OptionKey::GridSize, "twelve")
        .is_err());
}
