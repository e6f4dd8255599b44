//! Resolution tests for the seven action kinds.
//!
//! These drive the engine directly against a small hand-built board so
//! each precondition and commit can be pinned down exactly.

use terra_rules::{
    Board, CultTrackId, Faction, GameConfig, GameRng, GameState, Outcome, Player, PlayerId,
    PlayerMap, Resolver, Structure, StructureType, Terrain, TerrainId, TerrainType,
};

fn id(n: u16) -> TerrainId {
    TerrainId::new(n)
}

fn link(board: &mut Board, a: TerrainId, b: TerrainId) {
    board.get_mut(a).unwrap().neighbors.push(b);
    board.get_mut(b).unwrap().neighbors.push(a);
}

/// A 4-player state already past setup, on a row of cells:
/// plains(0) - plains(1) - swamp(2) - river(3) - lake(4).
fn scored_state() -> (Resolver, GameState) {
    let mut config = GameConfig::standard();
    config.setup_dwellings_per_player = 0;

    let mut board = Board::new();
    board.insert(Terrain::land(id(0), TerrainType::Plains));
    board.insert(Terrain::land(id(1), TerrainType::Plains));
    board.insert(Terrain::land(id(2), TerrainType::Swamp));
    board.insert(Terrain::river(id(3)));
    board.insert(Terrain::land(id(4), TerrainType::Lake));
    link(&mut board, id(0), id(1));
    link(&mut board, id(1), id(2));
    link(&mut board, id(2), id(3));
    link(&mut board, id(3), id(4));

    let catalog = Faction::catalog();
    let players = PlayerMap::new(4, |p| Player::new(catalog[p.index()].clone()));

    let state = GameState::new(board, players, &config, GameRng::new(1));
    (Resolver::new(config), state)
}

fn occupy(state: &mut GameState, at: TerrainId, owner: PlayerId, tier: StructureType) {
    state.board.get_mut(at).unwrap().structure = Some(Structure { owner, tier });
}

/// Player 0 (plains native) with a dwelling on cell 0.
fn with_home_dwelling() -> (Resolver, GameState) {
    let (resolver, mut state) = scored_state();
    occupy(&mut state, id(0), PlayerId::new(0), StructureType::Dwelling);
    (resolver, state)
}

// === transform_terrain ===

#[test]
fn test_transform_charges_distance_times_rate() {
    let (resolver, mut state) = scored_state();
    let p0 = PlayerId::new(0);
    state.players[p0].resources.workers = 10;

    // plains -> swamp is wheel distance 1, rate 3.
    let outcome = resolver.transform_terrain(&mut state, id(1), TerrainType::Swamp);

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(state.players[p0].resources.workers, 7);
    assert_eq!(
        state.board.get(id(1)).unwrap().terrain_type(),
        Some(TerrainType::Swamp)
    );
}

#[test]
fn test_transform_same_type_is_code_4() {
    let (resolver, mut state) = scored_state();
    let before = state.board.clone();

    let outcome = resolver.transform_terrain(&mut state, id(1), TerrainType::Plains);

    assert_eq!(outcome, Outcome::TerrainBlocked);
    assert_eq!(state.board, before);
}

#[test]
fn test_transform_occupied_or_river_or_missing_is_code_4() {
    let (resolver, mut state) = with_home_dwelling();

    assert_eq!(
        resolver.transform_terrain(&mut state, id(0), TerrainType::Swamp),
        Outcome::TerrainBlocked
    );
    assert_eq!(
        resolver.transform_terrain(&mut state, id(3), TerrainType::Swamp),
        Outcome::TerrainBlocked
    );
    assert_eq!(
        resolver.transform_terrain(&mut state, id(99), TerrainType::Swamp),
        Outcome::TerrainBlocked
    );
}

#[test]
fn test_transform_with_zero_workers_is_code_2_and_changes_nothing() {
    let (resolver, mut state) = scored_state();
    let p0 = PlayerId::new(0);
    state.players[p0].resources.workers = 0;

    let outcome = resolver.transform_terrain(&mut state, id(1), TerrainType::Swamp);

    assert_eq!(outcome, Outcome::ShortWorkers);
    assert_eq!(
        state.board.get(id(1)).unwrap().terrain_type(),
        Some(TerrainType::Plains)
    );
    assert_eq!(state.players[p0].resources.workers, 0);
}

#[test]
fn test_improved_rate_makes_transform_cheaper() {
    let (resolver, mut state) = scored_state();
    let p0 = PlayerId::new(0);
    state.players[p0].resources.workers = 2;
    state.players[p0].dig_rate = 1;

    // Distance 2 at rate 1 costs exactly 2 workers.
    let outcome = resolver.transform_terrain(&mut state, id(1), TerrainType::Lake);

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(state.players[p0].resources.workers, 0);
}

// === build_dwelling ===

#[test]
fn test_build_requires_native_terrain() {
    let (resolver, mut state) = with_home_dwelling();

    // Cell 2 is swamp; player 0 is plains native.
    let outcome = resolver.build_dwelling(&mut state, id(2));

    assert_eq!(outcome, Outcome::TerrainBlocked);
    assert!(state.board.get(id(2)).unwrap().structure.is_none());
}

#[test]
fn test_build_requires_adjacency_outside_setup() {
    let (resolver, mut state) = scored_state();

    // No structure anywhere: nothing is adjacent.
    let outcome = resolver.build_dwelling(&mut state, id(1));

    assert_eq!(outcome, Outcome::NotAdjacent);
    assert!(state.board.get(id(1)).unwrap().structure.is_none());
}

#[test]
fn test_build_charges_cost_and_credits_income() {
    let (resolver, mut state) = with_home_dwelling();
    let p0 = PlayerId::new(0);
    let before = state.players[p0].resources;

    let outcome = resolver.build_dwelling(&mut state, id(1));

    assert_eq!(outcome, Outcome::Success);
    let s = state.board.get(id(1)).unwrap().structure.unwrap();
    assert_eq!(s.owner, p0);
    assert_eq!(s.tier, StructureType::Dwelling);

    // Paid 1 worker 2 coins, earned 1 worker income and the round-0
    // dwelling tile's 2 build points.
    let after = state.players[p0].resources;
    assert_eq!(after.workers, before.workers);
    assert_eq!(after.coins, before.coins - 2);
    assert_eq!(after.victory_points, before.victory_points + 2);
}

#[test]
fn test_build_without_coins_is_code_1_and_changes_nothing() {
    let (resolver, mut state) = with_home_dwelling();
    let p0 = PlayerId::new(0);
    state.players[p0].resources.coins = 1;
    let resources_before = state.players[p0].resources;
    let board_before = state.board.clone();

    let outcome = resolver.build_dwelling(&mut state, id(1));

    assert_eq!(outcome, Outcome::ShortCoins);
    assert_eq!(state.players[p0].resources, resources_before);
    assert_eq!(state.board, board_before);
}

// === improve_shipping ===

#[test]
fn test_shipping_levels_up_to_the_limit() {
    let (resolver, mut state) = scored_state();
    let p0 = PlayerId::new(0);
    state.players[p0].resources.coins = 20;
    state.players[p0].resources.priests = 5;

    for expected in 1..=3u8 {
        assert_eq!(resolver.improve_shipping(&mut state), Outcome::Success);
        assert_eq!(state.players[p0].shipping, expected);
    }

    let before = state.players[p0].resources;
    assert_eq!(resolver.improve_shipping(&mut state), Outcome::LimitReached);
    assert_eq!(state.players[p0].shipping, 3);
    assert_eq!(state.players[p0].resources, before);
}

#[test]
fn test_shipping_without_priests_is_code_3() {
    let (resolver, mut state) = scored_state();
    let p0 = PlayerId::new(0);
    assert_eq!(state.players[p0].resources.priests, 0);

    let outcome = resolver.improve_shipping(&mut state);

    assert_eq!(outcome, Outcome::ShortPriests);
    assert_eq!(state.players[p0].shipping, 0);
}

// === improve_terraforming ===

#[test]
fn test_terraforming_improves_down_to_best_rate() {
    let (resolver, mut state) = scored_state();
    let p0 = PlayerId::new(0);
    state.players[p0].resources.workers = 10;
    state.players[p0].resources.coins = 20;
    state.players[p0].resources.priests = 5;

    assert_eq!(state.players[p0].dig_rate, 3);
    assert_eq!(resolver.improve_terraforming(&mut state), Outcome::Success);
    assert_eq!(state.players[p0].dig_rate, 2);
    assert_eq!(resolver.improve_terraforming(&mut state), Outcome::Success);
    assert_eq!(state.players[p0].dig_rate, 1);

    assert_eq!(
        resolver.improve_terraforming(&mut state),
        Outcome::LimitReached
    );
    assert_eq!(state.players[p0].dig_rate, 1);
}

// === upgrade_structure ===

#[test]
fn test_upgrade_replaces_tier_in_place() {
    let (resolver, mut state) = with_home_dwelling();
    let p0 = PlayerId::new(0);
    state.players[p0].resources.workers = 10;
    state.players[p0].resources.coins = 20;

    let outcome = resolver.upgrade_structure(&mut state, id(0));

    assert_eq!(outcome, Outcome::Success);
    let s = state.board.get(id(0)).unwrap().structure.unwrap();
    assert_eq!(s.tier, StructureType::TradingHouse);
    assert_eq!(s.owner, p0);
    // Trading house income: 2 coins, 1 power. Cost: 2 workers 6 coins.
    assert_eq!(state.players[p0].resources.workers, 8);
    assert_eq!(state.players[p0].resources.coins, 16);
    assert_eq!(state.players[p0].resources.power, 6);
}

#[test]
fn test_upgrade_empty_terrain_is_code_4() {
    let (resolver, mut state) = scored_state();

    assert_eq!(
        resolver.upgrade_structure(&mut state, id(1)),
        Outcome::TerrainBlocked
    );
    assert_eq!(
        resolver.upgrade_structure(&mut state, id(99)),
        Outcome::TerrainBlocked
    );
}

#[test]
fn test_upgrade_foreign_structure_is_code_4() {
    let (resolver, mut state) = scored_state();
    occupy(&mut state, id(0), PlayerId::new(1), StructureType::Dwelling);

    let outcome = resolver.upgrade_structure(&mut state, id(0));

    assert_eq!(outcome, Outcome::TerrainBlocked);
    assert_eq!(
        state.board.get(id(0)).unwrap().structure.unwrap().tier,
        StructureType::Dwelling
    );
}

#[test]
fn test_upgrade_top_tier_is_code_6() {
    let (resolver, mut state) = scored_state();
    occupy(&mut state, id(0), PlayerId::new(0), StructureType::Sanctuary);

    assert_eq!(
        resolver.upgrade_structure(&mut state, id(0)),
        Outcome::LimitReached
    );
}

#[test]
fn test_upgrade_short_on_coins_keeps_old_tier() {
    let (resolver, mut state) = with_home_dwelling();
    let p0 = PlayerId::new(0);
    state.players[p0].resources.coins = 0;

    let outcome = resolver.upgrade_structure(&mut state, id(0));

    assert_eq!(outcome, Outcome::ShortCoins);
    assert_eq!(
        state.board.get(id(0)).unwrap().structure.unwrap().tier,
        StructureType::Dwelling
    );
}

// === send_priest ===

#[test]
fn test_send_priest_with_none_is_code_3() {
    let (resolver, mut state) = scored_state();
    let p0 = PlayerId::new(0);
    assert_eq!(state.players[p0].resources.priests, 0);

    let outcome = resolver.send_priest(&mut state, CultTrackId::Fire);

    assert_eq!(outcome, Outcome::ShortPriests);
    assert_eq!(state.cults.track(CultTrackId::Fire).position(p0), 0);
}

#[test]
fn test_send_priest_advances_and_consumes() {
    let (resolver, mut state) = scored_state();
    let p0 = PlayerId::new(0);
    state.players[p0].resources.priests = 2;

    let outcome = resolver.send_priest(&mut state, CultTrackId::Water);

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(state.players[p0].resources.priests, 1);
    assert_eq!(state.cults.track(CultTrackId::Water).position(p0), 2);
    // Other tracks and players untouched.
    assert_eq!(state.cults.track(CultTrackId::Fire).position(p0), 0);
    assert_eq!(
        state.cults.track(CultTrackId::Water).position(PlayerId::new(1)),
        0
    );
}

#[test]
fn test_send_priest_at_ceiling_is_code_7_and_keeps_priest() {
    let (resolver, mut state) = scored_state();
    let p0 = PlayerId::new(0);
    state.players[p0].resources.priests = 10;

    // Ceiling 10, 2 steps per priest: five sends reach the top.
    for _ in 0..5 {
        assert_eq!(
            resolver.send_priest(&mut state, CultTrackId::Earth),
            Outcome::Success
        );
    }
    assert_eq!(state.cults.track(CultTrackId::Earth).position(p0), 10);
    assert_eq!(state.players[p0].resources.priests, 5);

    let outcome = resolver.send_priest(&mut state, CultTrackId::Earth);

    assert_eq!(outcome, Outcome::CultBlocked);
    assert_eq!(state.players[p0].resources.priests, 5);
    assert_eq!(state.cults.track(CultTrackId::Earth).position(p0), 10);
}

// === pass ===

#[test]
fn test_pass_credits_round_end_income() {
    let (resolver, mut state) = with_home_dwelling();
    let p0 = PlayerId::new(0);
    let before = state.players[p0].resources;

    let outcome = resolver.pass(&mut state);

    assert_eq!(outcome, Outcome::Success);
    assert!(state.players[p0].passed);
    // Round-0 tile: 1 point per owned dwelling; structure income: 1
    // worker per dwelling.
    assert_eq!(
        state.players[p0].resources.victory_points,
        before.victory_points + 1
    );
    assert_eq!(state.players[p0].resources.workers, before.workers + 1);
}

// === history ===

#[test]
fn test_every_attempt_is_recorded() {
    let (resolver, mut state) = scored_state();

    resolver.transform_terrain(&mut state, id(1), TerrainType::Plains); // code 4
    resolver.improve_shipping(&mut state); // code 3
    resolver.pass(&mut state); // code 0

    let history = state.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].outcome, Outcome::TerrainBlocked);
    assert_eq!(history[1].outcome, Outcome::ShortPriests);
    assert_eq!(history[2].outcome, Outcome::Success);
    assert!(history.iter().all(|r| r.player == PlayerId::new(0)));
    assert!(history.iter().all(|r| r.round == 0));
}
