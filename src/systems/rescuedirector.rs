//! Rescue pickup spawning.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, info};

use crate::components::environment::ScrollRoot;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::partymember::CharacterType;
use crate::components::pickup::Pickup;
use crate::components::spawned::RescueSpawn;
use crate::events::spawn::{SpawnKind, SpawnedEvent};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::registry::InstanceRegistry;
use crate::resources::rescuedirector::RescueDirector;
use crate::resources::rng::GameRng;
use crate::resources::runstats::RunStats;
use crate::resources::unlocks::CharacterUnlocks;
use crate::resources::worldtime::WorldTime;

/// Spawn a rescue pickup when the cadence comes due.
///
/// Characters that are already unlocked, or whose pickup is already alive up
/// to its cap, are removed from the draw before the weighted pick. Nothing
/// spawns before the run covers `min_spawn_distance`.
#[allow(clippy::too_many_arguments)]
pub fn rescue_director(
    mut commands: Commands,
    time: Res<WorldTime>,
    config: Option<Res<GameConfig>>,
    mut director: ResMut<RescueDirector>,
    mut rng: ResMut<GameRng>,
    registry: Res<InstanceRegistry<CharacterType>>,
    unlocks: Option<Res<CharacterUnlocks>>,
    stats: Option<Res<RunStats>>,
    camera: Option<Res<Camera2DRes>>,
    roots: Query<(Entity, &MapPosition), With<ScrollRoot>>,
) {
    let settings = config.map(|c| c.rescue).unwrap_or_default();
    let now = time.elapsed;
    if !director.cadence.is_due(now, settings.spawn_interval) {
        return;
    }
    director.cadence.schedule_next(now, settings.spawn_interval);

    let (Some(unlocks), Some(stats)) = (unlocks, stats) else {
        return;
    };
    let distance = stats.distance();
    if distance < settings.min_spawn_distance {
        debug!(
            "Rescue skipped: {:.1} of {:.1} distance covered",
            distance, settings.min_spawn_distance
        );
        return;
    }
    let Some(table) = director.table.as_ref() else {
        return;
    };

    let picked = table
        .pick(
            distance,
            |entry| {
                !unlocks.is_unlocked(entry.character)
                    && registry.live(&entry.character) < entry.max_instances
            },
            &mut rng.0,
        )
        .cloned();
    let Some(entry) = picked else {
        return;
    };
    if !registry.try_acquire(&entry.character, entry.max_instances) {
        return;
    }

    let anchor = camera.map(|c| c.target).unwrap_or(Vec2::ZERO);
    let world = Vec2::new(anchor.x + table.spawn_distance_ahead, table.spawn_y);
    let mut spawned = commands.spawn((
        Group::RESCUE,
        RescueSpawn {
            character: entry.character,
        },
        Pickup::rescue(entry.character),
    ));
    match roots.single() {
        Ok((root, root_pos)) => {
            spawned.insert((MapPosition::from_world(world, root_pos.pos), ChildOf(root)));
        }
        Err(_) => {
            spawned.insert(MapPosition { pos: world });
        }
    }
    let entity = spawned.id();
    director.spawned_total += 1;
    info!(
        "Rescue for {} spawned at {:.1} after {:.1} distance",
        entry.display_name(),
        world.x,
        distance
    );
    commands.trigger(SpawnedEvent {
        entity,
        kind: SpawnKind::Rescue(entry.character),
    });
}
