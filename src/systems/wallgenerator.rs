//! Rolling window of ground segments under the party.
//!
//! The [`wall_generator`] system keeps segments parented to the
//! [`ScrollRoot`] so they scroll with the world:
//!
//! 1. On the first pass it lays down the configured number of starting
//!    segments, beginning `initial_offset` from the player.
//! 2. Every pass it retires segments whose world x fell behind
//!    `player_x + destroy_distance_behind`.
//! 3. When the timed cadence comes due, or right after a retirement, it
//!    tops the window up: new segments go one `spacing` past the frontmost
//!    one for as long as the count is under `max_segments` and the next
//!    slot is within `spawn_distance_ahead` of the player.
//!
//! Without an active member or a scroll root the generator does nothing.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::environment::ScrollRoot;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::partymember::ActiveMember;
use crate::components::wallsegment::WallSegment;
use crate::resources::gameconfig::{GameConfig, WallSettings};
use crate::resources::wallgenerator::WallGenerator;
use crate::resources::worldtime::WorldTime;

pub fn wall_generator(
    mut commands: Commands,
    time: Res<WorldTime>,
    config: Option<Res<GameConfig>>,
    mut generator: ResMut<WallGenerator>,
    players: Query<&MapPosition, With<ActiveMember>>,
    roots: Query<(Entity, &MapPosition), With<ScrollRoot>>,
    walls: Query<(Entity, &MapPosition), (With<WallSegment>, Without<ScrollRoot>)>,
) {
    if !generator.is_enabled() {
        return;
    }
    let Ok(player) = players.single() else {
        return;
    };
    let Ok((root, root_pos)) = roots.single() else {
        return;
    };
    let settings = config.map(|c| c.walls).unwrap_or_default();
    let player_x = player.pos.x;
    let root_pos = root_pos.pos;

    if !generator.initialized {
        for i in 0..settings.initial_segments {
            let x = player_x + settings.initial_offset + i as f32 * settings.spacing;
            spawn_segment(&mut commands, root, root_pos, x, &settings);
        }
        generator.initialized = true;
        generator.live_segments = settings.initial_segments;
        generator.spawned_total += settings.initial_segments as u64;
        debug!("Laid {} starting wall segments", settings.initial_segments);
        return;
    }

    let trailing = player_x + settings.destroy_distance_behind;
    let mut live = 0usize;
    let mut retired = 0u64;
    let mut frontmost: Option<f32> = None;
    for (entity, position) in walls.iter() {
        let x = position.to_world(root_pos).x;
        if x < trailing {
            commands.entity(entity).try_despawn();
            retired += 1;
        } else {
            live += 1;
            frontmost = Some(frontmost.map_or(x, |f| f.max(x)));
        }
    }
    generator.retired_total += retired;

    let now = time.elapsed;
    let due = generator.cadence.is_due(now, settings.spawn_interval);
    if due {
        generator.cadence.schedule_next(now, settings.spawn_interval);
    }

    if due || retired > 0 {
        let limit = player_x + settings.spawn_distance_ahead;
        let mut next_x = frontmost.map_or(player_x + settings.initial_offset, |x| {
            x + settings.spacing
        });
        let mut spawned = 0u64;
        while live < settings.max_segments && next_x <= limit {
            spawn_segment(&mut commands, root, root_pos, next_x, &settings);
            live += 1;
            spawned += 1;
            next_x += settings.spacing;
        }
        generator.spawned_total += spawned;
        if spawned > 0 || retired > 0 {
            debug!(
                "Walls: +{} -{} ({} live)",
                spawned, retired, live
            );
        }
    }
    generator.live_segments = live;
}

fn spawn_segment(
    commands: &mut Commands,
    root: Entity,
    root_pos: Vec2,
    world_x: f32,
    settings: &WallSettings,
) -> Entity {
    commands
        .spawn((
            Group::WALL,
            WallSegment {
                half_width: settings.segment_half_width,
                surface_offset: settings.surface_offset,
                yaw_degrees: settings.yaw_degrees,
            },
            MapPosition::from_world(Vec2::new(world_x, settings.wall_y), root_pos),
            ChildOf(root),
        ))
        .id()
}
