//! Spawn integration tests: the enemy director against its live-instance
//! caps, the rescue director against unlocks, and the wall generator window.

use bevy_ecs::prelude::*;
use glam::Vec2;

use castlerun::components::environment::ScrollRoot;
use castlerun::components::mapposition::MapPosition;
use castlerun::components::partymember::{ActiveMember, CharacterType};
use castlerun::components::spawned::{RescueSpawn, SpawnedFrom};
use castlerun::components::wallsegment::WallSegment;
use castlerun::resources::camera2d::Camera2DRes;
use castlerun::resources::gameconfig::GameConfig;
use castlerun::resources::registry::InstanceRegistry;
use castlerun::resources::rescuedirector::RescueDirector;
use castlerun::resources::rescuetable::{RescueSpawnEntry, RescueSpawnTable};
use castlerun::resources::rng::GameRng;
use castlerun::resources::runstats::RunStats;
use castlerun::resources::spawndirector::SpawnDirector;
use castlerun::resources::spawntable::{Lane, SpawnEntry, SpawnTable, SpawnTemplate, TemplateId};
use castlerun::resources::unlocks::CharacterUnlocks;
use castlerun::resources::wallgenerator::WallGenerator;
use castlerun::resources::worldtime::WorldTime;
use castlerun::systems::rescuedirector::rescue_director;
use castlerun::systems::spawndirector::spawn_director;
use castlerun::systems::wallgenerator::wall_generator;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn make_world() -> World {
    let mut config = GameConfig::new();
    config.tuning.base_spawn_interval = 5.0;
    config.tuning.spawn_interval_min = 5.0;

    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(config);
    world.insert_resource(GameRng::seeded(7));
    world.insert_resource(InstanceRegistry::<TemplateId>::new());
    world.insert_resource(InstanceRegistry::<CharacterType>::new());
    world.insert_resource(RunStats::default());
    world.insert_resource(Camera2DRes::new(Vec2::ZERO));
    world.insert_resource(CharacterUnlocks::default());
    world
}

fn tick_at(world: &mut World, schedule: &mut Schedule, elapsed: f32) {
    world.resource_mut::<WorldTime>().elapsed = elapsed;
    schedule.run(world);
}

fn spawned_enemies(world: &mut World) -> Vec<Entity> {
    world
        .query_filtered::<Entity, With<SpawnedFrom>>()
        .iter(world)
        .collect()
}

#[test]
fn capped_template_waits_for_a_free_slot() {
    let mut world = make_world();
    let goblin = SpawnEntry::new(SpawnTemplate::new("goblin"), 1.0).with_cap(2);
    world.insert_resource(SpawnDirector::new(Some(SpawnTable::new(vec![goblin])), None));
    let mut schedule = Schedule::default();
    schedule.add_systems(spawn_director);

    // the first pass only arms the cadence
    tick_at(&mut world, &mut schedule, 0.0);
    assert!(spawned_enemies(&mut world).is_empty());

    tick_at(&mut world, &mut schedule, 5.0);
    tick_at(&mut world, &mut schedule, 10.0);
    assert_eq!(spawned_enemies(&mut world).len(), 2);

    tick_at(&mut world, &mut schedule, 15.0);
    let goblins = spawned_enemies(&mut world);
    assert_eq!(goblins.len(), 2);
    let director = world.resource::<SpawnDirector>();
    assert_eq!(director.capped_attempts(), 1);
    assert_eq!(director.spawned_total(), 2);
    assert_eq!(director.next_spawn_time(), Some(20.0));

    world.despawn(goblins[0]);
    let key = TemplateId::new("goblin");
    assert_eq!(world.resource::<InstanceRegistry<TemplateId>>().live(&key), 1);

    tick_at(&mut world, &mut schedule, 20.0);
    assert_eq!(spawned_enemies(&mut world).len(), 2);
    assert_eq!(world.resource::<InstanceRegistry<TemplateId>>().live(&key), 2);
    assert_eq!(world.resource::<SpawnDirector>().spawned_total(), 3);
}

#[test]
fn spawns_appear_ahead_of_the_camera_on_their_lane() {
    let mut world = make_world();
    world.resource_mut::<Camera2DRes>().target = Vec2::new(12.0, 0.0);
    let bat = SpawnEntry::new(
        SpawnTemplate {
            lane: Some(Lane::Air),
            ..SpawnTemplate::new("bat")
        },
        1.0,
    );
    world.insert_resource(SpawnDirector::new(Some(SpawnTable::new(vec![bat])), None));
    let mut schedule = Schedule::default();
    schedule.add_systems(spawn_director);

    tick_at(&mut world, &mut schedule, 0.0);
    tick_at(&mut world, &mut schedule, 5.0);

    let config = world.resource::<GameConfig>().clone();
    let positions: Vec<Vec2> = world
        .query_filtered::<&MapPosition, With<SpawnedFrom>>()
        .iter(&world)
        .map(|p| p.pos)
        .collect();
    assert_eq!(positions.len(), 1);
    assert!(approx_eq(positions[0].x, 12.0 + config.tuning.spawn_distance_ahead));
    assert!(approx_eq(positions[0].y, config.tuning.air_lane_y));
}

#[test]
fn entries_wait_for_their_distance() {
    let mut world = make_world();
    let ogre = SpawnEntry::new(SpawnTemplate::new("ogre"), 1.0).with_min_distance(50.0);
    world.insert_resource(SpawnDirector::new(Some(SpawnTable::new(vec![ogre])), None));
    let mut schedule = Schedule::default();
    schedule.add_systems(spawn_director);

    tick_at(&mut world, &mut schedule, 0.0);
    tick_at(&mut world, &mut schedule, 5.0);
    assert!(spawned_enemies(&mut world).is_empty());
    // the attempt still moved the schedule on
    assert_eq!(world.resource::<SpawnDirector>().next_spawn_time(), Some(10.0));

    world.resource_mut::<RunStats>().advance(60.0, 1.0, 1.0);
    tick_at(&mut world, &mut schedule, 10.0);
    assert_eq!(spawned_enemies(&mut world).len(), 1);
}

#[test]
fn disabled_director_stays_quiet() {
    let mut world = make_world();
    let goblin = SpawnEntry::new(SpawnTemplate::new("goblin"), 1.0);
    let mut director = SpawnDirector::new(Some(SpawnTable::new(vec![goblin])), None);
    director.set_enabled(false);
    world.insert_resource(director);
    let mut schedule = Schedule::default();
    schedule.add_systems(spawn_director);

    for step in 0..10 {
        tick_at(&mut world, &mut schedule, step as f32 * 5.0);
    }
    assert!(spawned_enemies(&mut world).is_empty());
    assert_eq!(world.resource::<SpawnDirector>().next_spawn_time(), None);
}

fn rescue_table() -> RescueSpawnTable {
    let mut knight = RescueSpawnEntry::new(CharacterType::Knight, 0.0);
    knight.spawn_weight = 100.0;
    let mage = RescueSpawnEntry::new(CharacterType::Mage, 0.0);
    RescueSpawnTable::new(vec![knight, mage])
}

fn rescue_pickups(world: &mut World) -> Vec<(Entity, CharacterType)> {
    world
        .query::<(Entity, &RescueSpawn)>()
        .iter(world)
        .map(|(entity, rescue)| (entity, rescue.character))
        .collect()
}

#[test]
fn rescues_skip_unlocked_and_live_characters() {
    let mut world = make_world();
    world.insert_resource(RescueDirector::new(Some(rescue_table())));
    let mut schedule = Schedule::default();
    schedule.add_systems(rescue_director);
    let interval = world.resource::<GameConfig>().rescue.spawn_interval;

    tick_at(&mut world, &mut schedule, 0.0);
    // due, but the run is still short of the minimum distance
    tick_at(&mut world, &mut schedule, interval);
    assert!(rescue_pickups(&mut world).is_empty());

    world.resource_mut::<RunStats>().advance(200.0, 1.0, 1.0);
    tick_at(&mut world, &mut schedule, interval * 2.0);
    let pickups = rescue_pickups(&mut world);
    assert_eq!(pickups.len(), 1);
    assert_eq!(pickups[0].1, CharacterType::Mage);

    // the Mage is already on the field
    tick_at(&mut world, &mut schedule, interval * 3.0);
    assert_eq!(rescue_pickups(&mut world).len(), 1);

    world.despawn(pickups[0].0);
    assert_eq!(
        world
            .resource::<InstanceRegistry<CharacterType>>()
            .live(&CharacterType::Mage),
        0
    );
    world
        .resource_mut::<CharacterUnlocks>()
        .rescue(CharacterType::Mage);

    tick_at(&mut world, &mut schedule, interval * 4.0);
    assert!(rescue_pickups(&mut world).is_empty());
    assert_eq!(world.resource::<RescueDirector>().spawned_total(), 1);
}

fn make_wall_world(with_player: bool) -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(GameConfig::new());
    world.insert_resource(WallGenerator::new());
    let root = world.spawn((ScrollRoot, MapPosition::default())).id();
    if with_player {
        world.spawn((ActiveMember, MapPosition::new(0.0, 0.0)));
    }
    (world, root)
}

fn wall_xs(world: &mut World, root: Entity) -> Vec<f32> {
    let root_pos = world
        .get::<MapPosition>(root)
        .map(|p| p.pos)
        .unwrap_or(Vec2::ZERO);
    let mut xs: Vec<f32> = world
        .query_filtered::<&MapPosition, With<WallSegment>>()
        .iter(world)
        .map(|p| p.to_world(root_pos).x)
        .collect();
    xs.sort_by(f32::total_cmp);
    xs
}

#[test]
fn wall_window_lays_tops_up_and_retires() {
    let (mut world, root) = make_wall_world(true);
    let settings = world.resource::<GameConfig>().walls;
    let mut schedule = Schedule::default();
    schedule.add_systems(wall_generator);

    tick_at(&mut world, &mut schedule, 0.0);
    let xs = wall_xs(&mut world, root);
    assert_eq!(xs.len(), settings.initial_segments);
    assert!(approx_eq(xs[0], settings.initial_offset));
    assert!(xs.windows(2).all(|w| approx_eq(w[1] - w[0], settings.spacing)));
    assert!(world.resource::<WallGenerator>().is_initialized());

    // second pass arms the timed cadence, nothing new yet
    tick_at(&mut world, &mut schedule, 0.0);
    assert_eq!(wall_xs(&mut world, root).len(), settings.initial_segments);

    tick_at(&mut world, &mut schedule, settings.spawn_interval);
    let xs = wall_xs(&mut world, root);
    assert_eq!(xs.len(), 15);
    assert!(approx_eq(xs[14], settings.spawn_distance_ahead));

    // the world scrolls 20 units back
    world.entity_mut(root).insert(MapPosition::new(-20.0, 0.0));
    tick_at(&mut world, &mut schedule, settings.spawn_interval + 0.1);
    let xs = wall_xs(&mut world, root);
    assert!(xs.len() <= settings.max_segments);
    assert!(xs.iter().all(|x| *x >= settings.destroy_distance_behind));
    let generator = world.resource::<WallGenerator>();
    assert_eq!(generator.retired_total(), 2);
    assert_eq!(generator.live_segments(), xs.len());
    assert_eq!(xs.len(), 17);
}

#[test]
fn wall_count_never_exceeds_the_maximum() {
    let (mut world, root) = make_wall_world(true);
    world.resource_mut::<GameConfig>().walls.max_segments = 12;
    let mut schedule = Schedule::default();
    schedule.add_systems(wall_generator);

    for step in 0..40 {
        let x = -(step as f32) * 2.0;
        world.entity_mut(root).insert(MapPosition::new(x, 0.0));
        tick_at(&mut world, &mut schedule, step as f32 * 0.5);
        assert!(wall_xs(&mut world, root).len() <= 12);
    }
}

#[test]
fn wall_generator_is_inert_without_a_player() {
    let (mut world, root) = make_wall_world(false);
    let mut schedule = Schedule::default();
    schedule.add_systems(wall_generator);

    for step in 0..5 {
        tick_at(&mut world, &mut schedule, step as f32);
    }
    assert!(wall_xs(&mut world, root).is_empty());
    assert!(!world.resource::<WallGenerator>().is_initialized());
}
