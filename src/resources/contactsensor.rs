//! Touch tracking for hosts that sense contacts by distance.
//!
//! A host without a physics engine can only tell which bodies overlap right
//! now. [`ContactSensor`] remembers the pairs that overlapped on the previous
//! pass and hands back only the ones that just started touching, so a body
//! resting inside another one counts as a single contact.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

/// Distance under which two bodies touch when neither carries its own reach.
pub const BODY_RADIUS: f32 = 0.75;

#[derive(Resource, Debug, Default)]
pub struct ContactSensor {
    touching: FxHashSet<(Entity, Entity)>,
}

impl ContactSensor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the remembered overlaps with `overlapping` and return the pairs
    /// that were not touching on the previous pass. Pair order is ignored.
    pub fn begins(
        &mut self,
        overlapping: impl IntoIterator<Item = (Entity, Entity)>,
    ) -> Vec<(Entity, Entity)> {
        let current: FxHashSet<(Entity, Entity)> =
            overlapping.into_iter().map(unordered).collect();
        let mut began: Vec<(Entity, Entity)> =
            current.difference(&self.touching).copied().collect();
        began.sort();
        self.touching = current;
        began
    }

    /// Pairs touching as of the last pass.
    pub fn touching(&self) -> usize {
        self.touching.len()
    }

    pub fn is_touching(&self, a: Entity, b: Entity) -> bool {
        self.touching.contains(&unordered((a, b)))
    }

    pub fn clear(&mut self) {
        self.touching.clear();
    }
}

fn unordered((a, b): (Entity, Entity)) -> (Entity, Entity) {
    if a <= b { (a, b) } else { (b, a) }
}
