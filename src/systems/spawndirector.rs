//! Enemy and obstacle spawning.
//!
//! [`spawn_director`] performs one attempt whenever the director's cadence
//! comes due. [`cull_passed_spawns`] retires spawned instances that scrolled
//! out behind the party, which also gives their registry slots back.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::damagedealer::DamageDealer;
use crate::components::environment::ScrollRoot;
use crate::components::group::Group;
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::partymember::ActiveMember;
use crate::components::rigidbody::RigidBody;
use crate::components::spawned::{RescueSpawn, SpawnedFrom};
use crate::events::spawn::{SpawnKind, SpawnedEvent};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::registry::InstanceRegistry;
use crate::resources::rng::GameRng;
use crate::resources::runstats::RunStats;
use crate::resources::spawndirector::{SpawnDirector, spawn_interval};
use crate::resources::spawntable::{Lane, SpawnEntry, TemplateId};
use crate::resources::worldtime::WorldTime;
use crate::systems::environment::world_position;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Category {
    Enemy,
    Obstacle,
}

#[allow(clippy::too_many_arguments)]
pub fn spawn_director(
    mut commands: Commands,
    time: Res<WorldTime>,
    config: Option<Res<GameConfig>>,
    mut director: ResMut<SpawnDirector>,
    mut rng: ResMut<GameRng>,
    registry: Res<InstanceRegistry<TemplateId>>,
    stats: Option<Res<RunStats>>,
    camera: Option<Res<Camera2DRes>>,
    roots: Query<(Entity, &MapPosition), With<ScrollRoot>>,
) {
    let now = time.elapsed;
    let first_wait = director.current_interval;
    if !director.cadence.is_due(now, first_wait) {
        return;
    }
    let tuning = config.map(|c| c.tuning).unwrap_or_default();
    let distance = stats.map(|s| s.distance()).unwrap_or(0.0);

    let picked = pick_entry(&director, distance, &mut rng.0);

    let interval = spawn_interval(&tuning, now);
    director.current_interval = interval;
    director.cadence.schedule_next(now, interval);

    let Some((category, entry)) = picked else {
        return;
    };
    let template = entry.template;
    if !registry.try_acquire(&template.id, entry.max_instances_alive) {
        director.capped_attempts += 1;
        debug!(
            "{} at cap ({}), attempt skipped",
            template.id, entry.max_instances_alive
        );
        return;
    }

    let anchor = camera.map(|c| c.target).unwrap_or(Vec2::ZERO);
    let lane_y = match template.lane() {
        Lane::Ground => tuning.ground_lane_y,
        Lane::Air => tuning.air_lane_y,
    };
    let world = Vec2::new(anchor.x + tuning.spawn_distance_ahead, lane_y);

    let group = match category {
        Category::Enemy => Group::ENEMY,
        Category::Obstacle => Group::OBSTACLE,
    };
    let mut spawned = commands.spawn((
        group,
        SpawnedFrom {
            template: template.id.clone(),
        },
        DamageDealer::new(template.touch_damage, template.team),
    ));
    match roots.single() {
        Ok((root, root_pos)) => {
            spawned.insert((MapPosition::from_world(world, root_pos.pos), ChildOf(root)));
        }
        Err(_) => {
            spawned.insert(MapPosition { pos: world });
        }
    }
    if let Some(max_health) = template.max_health {
        spawned.insert(Health::new(max_health));
    }
    if let Some(roll_speed) = template.roll_speed {
        spawned.insert(RigidBody::with_velocity(Vec2::new(-roll_speed, 0.0)));
    }
    let entity = spawned.id();
    director.spawned_total += 1;

    debug!(
        "Spawned {} at ({:.1}, {:.1}), next attempt in {:.2}s",
        template.id, world.x, world.y, interval
    );
    let kind = match category {
        Category::Enemy => SpawnKind::Enemy(template.id),
        Category::Obstacle => SpawnKind::Obstacle(template.id),
    };
    commands.trigger(SpawnedEvent { entity, kind });
}

/// Flip a coin between the configured tables, then draw from the winner.
fn pick_entry(
    director: &SpawnDirector,
    distance: f32,
    rng: &mut fastrand::Rng,
) -> Option<(Category, SpawnEntry)> {
    let category = match (&director.enemy_table, &director.obstacle_table) {
        (Some(_), Some(_)) => {
            if rng.bool() {
                Category::Enemy
            } else {
                Category::Obstacle
            }
        }
        (Some(_), None) => Category::Enemy,
        (None, Some(_)) => Category::Obstacle,
        (None, None) => return None,
    };
    let table = match category {
        Category::Enemy => director.enemy_table.as_ref(),
        Category::Obstacle => director.obstacle_table.as_ref(),
    }?;
    table
        .pick(distance, rng)
        .map(|entry| (category, entry.clone()))
}

/// Despawn enemies, obstacles and rescue pickups that scrolled past the
/// trailing threshold used for wall segments.
pub fn cull_passed_spawns(
    mut commands: Commands,
    config: Option<Res<GameConfig>>,
    players: Query<&MapPosition, With<ActiveMember>>,
    roots: Query<&MapPosition, With<ScrollRoot>>,
    spawned: Query<
        (Entity, &MapPosition, Option<&ChildOf>),
        Or<(With<SpawnedFrom>, With<RescueSpawn>)>,
    >,
) {
    let Ok(player) = players.single() else {
        return;
    };
    let walls = config.map(|c| c.walls).unwrap_or_default();
    let trailing = player.pos.x + walls.destroy_distance_behind;
    for (entity, position, parent) in spawned.iter() {
        if world_position(position, parent, &roots).x < trailing {
            commands.entity(entity).try_despawn();
        }
    }
}
