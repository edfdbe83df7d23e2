//! Whole-run tests through the [`Game`] entry points: scrolling, jumping,
//! attacking, pausing, game over, restart, rescues and sensed contacts.

use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;

use castlerun::components::damagedealer::{DamageDealer, Team};
use castlerun::components::environment::ScrollRoot;
use castlerun::components::group::Group;
use castlerun::components::health::Health;
use castlerun::components::mapposition::MapPosition;
use castlerun::components::partymember::CharacterType;
use castlerun::components::spawned::RescueSpawn;
use castlerun::events::input::InputAction;
use castlerun::game::{Game, GameOptions};
use castlerun::resources::eventhub::GameEvent;
use castlerun::resources::gameconfig::GameConfig;
use castlerun::resources::gamestate::GameStates;
use castlerun::resources::rescuetable::{RescueSpawnEntry, RescueSpawnTable};
use castlerun::resources::unlocks::{CharacterUnlocks, MemoryPrefs, UNLOCKED_CHARACTERS_KEY};

const FRAME: f32 = 1.0 / 60.0;
const STEP: f32 = 0.02;

fn new_game() -> Game {
    Game::new(GameOptions::default().with_seed(3))
}

fn root_x(game: &mut Game) -> f32 {
    let world = game.world_mut();
    world
        .query_filtered::<&MapPosition, With<ScrollRoot>>()
        .iter(world)
        .next()
        .map(|p| p.pos.x)
        .unwrap_or(0.0)
}

fn active_y(game: &Game) -> f32 {
    game.active_member()
        .and_then(|e| game.world().get::<MapPosition>(e))
        .map(|p| p.pos.y)
        .unwrap_or(f32::NAN)
}

fn drain(events: &Receiver<GameEvent>) -> Vec<GameEvent> {
    events.try_iter().collect()
}

#[test]
fn new_run_starts_on_the_ground_with_walls_laid() {
    let mut game = new_game();
    let walls = game.config().walls;

    assert_eq!(game.state(), GameStates::Playing);
    assert_eq!(game.party().len(), 1);
    assert_eq!(game.count_group(Group::WALL), walls.initial_segments);
    assert_eq!(game.count_group(Group::PARTY), 1);
    assert!((active_y(&game) - (walls.wall_y + walls.surface_offset)).abs() < 1e-4);
}

#[test]
fn world_scrolls_and_distance_grows() {
    let mut game = new_game();
    for _ in 0..60 {
        game.update(FRAME);
    }
    let stats = game.stats();
    assert!(stats.distance() > 5.0);
    assert!(stats.time_alive() > 0.9);
    assert!(root_x(&mut game) < -5.0);
    // the party stays at the origin
    let active = game.active_member();
    let x = active
        .and_then(|e| game.world().get::<MapPosition>(e))
        .map(|p| p.pos.x);
    assert_eq!(x, Some(0.0));
}

#[test]
fn grounded_jump_leaves_the_surface() {
    let mut game = new_game();
    let ground = active_y(&game);

    game.update(FRAME);
    game.fixed_update(STEP);
    assert!((active_y(&game) - ground).abs() < 1e-4);

    game.input(InputAction::Jump);
    game.fixed_update(STEP);
    game.fixed_update(STEP);
    assert!(active_y(&game) > ground + 0.1);

    // gravity brings the body back down onto the segment
    for _ in 0..200 {
        game.update(FRAME);
        game.fixed_update(STEP);
    }
    assert!((active_y(&game) - ground).abs() < 1e-3);
}

#[test]
fn attacks_respect_the_cooldown() {
    let mut game = new_game();
    let (_id, events) = game.subscribe();

    game.input(InputAction::Attack);
    game.input(InputAction::Attack);
    let performed = drain(&events)
        .iter()
        .filter(|e| matches!(e, GameEvent::ActionPerformed { .. }))
        .count();
    assert_eq!(performed, 1);
    assert_eq!(game.count_group(Group::HITBOX), 1);

    let cooldown = game.config().knight.attack_cooldown;
    let frames = (cooldown / FRAME).ceil() as usize + 2;
    for _ in 0..frames {
        game.update(FRAME);
    }
    game.input(InputAction::Attack);
    let performed = drain(&events)
        .iter()
        .filter(|e| matches!(e, GameEvent::ActionPerformed { .. }))
        .count();
    assert_eq!(performed, 1);
}

#[test]
fn pause_freezes_the_run_until_resumed() {
    let mut game = new_game();
    game.update(FRAME);

    game.input(InputAction::TogglePause);
    assert_eq!(game.state(), GameStates::Paused);
    let frozen = game.stats().distance();
    for _ in 0..30 {
        game.update(FRAME);
    }
    assert_eq!(game.stats().distance(), frozen);

    // jumps and attacks are ignored while paused
    let (_id, events) = game.subscribe();
    game.input(InputAction::Attack);
    assert!(
        !drain(&events)
            .iter()
            .any(|e| matches!(e, GameEvent::ActionPerformed { .. }))
    );

    game.input(InputAction::TogglePause);
    assert_eq!(game.state(), GameStates::Playing);
    game.update(FRAME);
    assert!(game.stats().distance() > frozen);
}

#[test]
fn losing_the_last_member_ends_the_run_once() {
    let mut game = new_game();
    let (_id, events) = game.subscribe();
    for _ in 0..30 {
        game.update(FRAME);
    }
    let Some(knight) = game.active_member() else {
        panic!("a new run has an active member");
    };

    game.deal_damage(knight, 1);
    assert_eq!(game.state(), GameStates::Playing);
    game.deal_damage(knight, 5);

    assert_eq!(game.state(), GameStates::GameOver);
    assert!(game.party().is_wiped());
    assert!(!game.spawn_director().is_enabled());
    assert!(!game.rescue_director().is_enabled());

    game.input(InputAction::TogglePause);
    game.deal_damage(knight, 5);
    assert_eq!(game.state(), GameStates::GameOver);

    let received = drain(&events);
    let game_overs = received
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .count();
    assert_eq!(game_overs, 1);
    assert!(received.iter().any(|e| matches!(e, GameEvent::PartyWiped)));
    assert!(
        received
            .iter()
            .any(|e| matches!(e, GameEvent::Damaged { remaining: 2, .. }))
    );

    let distance = game.stats().distance();
    game.update(FRAME);
    assert_eq!(game.stats().distance(), distance);
}

#[test]
fn healing_is_capped_at_max_health() {
    let mut game = new_game();
    let Some(knight) = game.active_member() else {
        panic!("a new run has an active member");
    };
    game.deal_damage(knight, 2);
    game.heal(knight, 10);
    let health = game.world().get::<Health>(knight).copied();
    assert_eq!(health.map(|h| h.current()), health.map(|h| h.max()));
}

#[test]
fn restart_clears_the_run_but_keeps_subscriptions() {
    let mut game = new_game();
    let (_id, events) = game.subscribe();
    for _ in 0..120 {
        game.update(FRAME);
    }
    if let Some(knight) = game.active_member() {
        game.deal_damage(knight, 10);
    }
    assert_eq!(game.state(), GameStates::GameOver);

    game.restart();
    let walls = game.config().walls;
    assert_eq!(game.state(), GameStates::Playing);
    assert_eq!(game.stats().distance(), 0.0);
    assert!(game.spawn_director().is_enabled());
    assert_eq!(game.count_group(Group::PARTY), 1);
    assert_eq!(game.count_group(Group::SCROLL_ROOT), 1);
    assert_eq!(game.count_group(Group::WALL), walls.initial_segments);
    assert_eq!(root_x(&mut game), 0.0);

    drain(&events);
    game.update(FRAME);
    assert!(
        drain(&events)
            .iter()
            .any(|e| matches!(e, GameEvent::DistanceChanged(_)))
    );
}

#[test]
fn collecting_a_rescue_unlocks_the_character_for_the_next_run() {
    let mut config = GameConfig::new();
    config.rescue.spawn_interval = 0.5;
    config.rescue.min_spawn_distance = 0.0;
    let table = RescueSpawnTable::new(vec![RescueSpawnEntry::new(CharacterType::Mage, 0.0)]);
    let mut game = Game::new(
        GameOptions::default()
            .with_seed(5)
            .with_config(config)
            .with_rescue_table(Some(table)),
    );
    let (_id, events) = game.subscribe();

    let mut pickup = None;
    for _ in 0..120 {
        game.update(FRAME);
        let world = game.world_mut();
        pickup = world
            .query_filtered::<Entity, With<RescueSpawn>>()
            .iter(world)
            .next();
        if pickup.is_some() {
            break;
        }
    }
    let Some(pickup) = pickup else {
        panic!("no rescue spawned");
    };
    assert_eq!(game.rescue_registry().live(&CharacterType::Mage), 1);

    let Some(knight) = game.active_member() else {
        panic!("a new run has an active member");
    };
    game.contact(knight, pickup);

    assert!(game.unlocks().is_unlocked(CharacterType::Mage));
    assert!(game.world().get_entity(pickup).is_err());
    assert_eq!(game.rescue_registry().live(&CharacterType::Mage), 0);
    let received = drain(&events);
    assert!(
        received
            .iter()
            .any(|e| matches!(e, GameEvent::CharacterRescued(CharacterType::Mage)))
    );
    // the current roster is unchanged until the next run
    assert_eq!(game.party().len(), 1);

    game.restart();
    assert_eq!(game.party().len(), 2);
    assert_eq!(game.count_group(Group::PARTY), 2);

    game.input(InputAction::SwitchTo(1));
    assert_eq!(game.party().active_index(), Some(1));
}

fn health_of(game: &Game, entity: Entity) -> Option<i32> {
    game.world().get::<Health>(entity).map(|h| h.current())
}

fn damaged_count(events: &Receiver<GameEvent>) -> usize {
    drain(events)
        .iter()
        .filter(|e| matches!(e, GameEvent::Damaged { .. }))
        .count()
}

#[test]
fn an_obstacle_resting_on_the_party_hurts_once() {
    let mut game = new_game();
    let (_id, events) = game.subscribe();
    let ground = active_y(&game);
    let Some(knight) = game.active_member() else {
        panic!("a new run has an active member");
    };
    // not parented to the scroll root, so it stays on top of the knight
    let spike = game
        .world_mut()
        .spawn((
            Group::OBSTACLE,
            DamageDealer::new(1, Team::Neutral),
            MapPosition::new(0.0, ground),
        ))
        .id();

    for _ in 0..10 {
        game.update(FRAME);
        game.sense_contacts();
    }
    assert_eq!(damaged_count(&events), 1);
    assert_eq!(health_of(&game, knight), Some(2));

    // stepping off and back on is a new contact
    if let Some(mut pos) = game.world_mut().get_mut::<MapPosition>(spike) {
        pos.pos.x = 5.0;
    }
    game.sense_contacts();
    if let Some(mut pos) = game.world_mut().get_mut::<MapPosition>(spike) {
        pos.pos.x = 0.0;
    }
    game.sense_contacts();
    game.sense_contacts();
    assert_eq!(damaged_count(&events), 1);
    assert_eq!(health_of(&game, knight), Some(1));
}

#[test]
fn benched_members_are_out_of_reach() {
    let prefs = MemoryPrefs::new().with_value(UNLOCKED_CHARACTERS_KEY, "Knight,Mage");
    let mut game = Game::new(
        GameOptions::default()
            .with_seed(3)
            .with_unlocks(CharacterUnlocks::new(prefs)),
    );
    assert_eq!(game.party().len(), 2);
    let ground = active_y(&game);
    let Some(knight) = game.active_member() else {
        panic!("a new run has an active member");
    };
    let Some(&benched) = game.party().roster().iter().find(|&&e| e != knight) else {
        panic!("two members on the roster");
    };
    game.world_mut().spawn((
        Group::OBSTACLE,
        DamageDealer::new(1, Team::Neutral),
        MapPosition::new(0.0, ground),
    ));

    game.sense_contacts();
    assert_eq!(health_of(&game, knight), Some(2));
    assert_eq!(health_of(&game, benched), Some(3));
}

#[test]
fn a_melee_slash_reaches_past_the_body_radius() {
    let mut game = new_game();
    let ground = active_y(&game);
    let enemy = game
        .world_mut()
        .spawn((Group::ENEMY, Health::new(5), MapPosition::new(0.78, ground)))
        .id();

    // too far for the knight's body to touch
    game.sense_contacts();
    assert_eq!(health_of(&game, enemy), Some(5));

    game.input(InputAction::Attack);
    game.sense_contacts();
    assert_eq!(health_of(&game, enemy), Some(4));
}
