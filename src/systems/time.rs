//! Time update functions.
//!
//! Update the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource before each frame and each fixed step, applying `time_scale` to
//! the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance the frame clock.
///
/// `dt` is expected to be the unscaled frame delta in seconds. Elapsed time
/// advances only here, so the fixed step never double-counts it.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt.max(0.0) * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Set the scaled delta of the upcoming fixed step.
pub fn update_fixed_time(world: &mut World, fixed_dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.fixed_delta = fixed_dt.max(0.0) * wt.time_scale;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_scale_applies_to_both_clocks() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(0.5));
        update_world_time(&mut world, 0.2);
        update_fixed_time(&mut world, 0.02);
        let wt = world.resource::<WorldTime>();
        assert!((wt.delta - 0.1).abs() < 1e-6);
        assert!((wt.elapsed - 0.1).abs() < 1e-6);
        assert!((wt.fixed_delta - 0.01).abs() < 1e-6);
        assert_eq!(wt.frame_count, 1);
    }
}
