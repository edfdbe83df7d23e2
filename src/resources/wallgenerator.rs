//! Ground segment generator state.

use bevy_ecs::prelude::Resource;

use crate::resources::spawndirector::SpawnCadence;

#[derive(Resource, Debug, Clone, Default)]
pub struct WallGenerator {
    pub(crate) cadence: SpawnCadence,
    pub(crate) initialized: bool,
    pub(crate) live_segments: usize,
    pub(crate) spawned_total: u64,
    pub(crate) retired_total: u64,
}

impl WallGenerator {
    pub fn new() -> Self {
        WallGenerator {
            cadence: SpawnCadence::new(),
            ..Self::default()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.cadence.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.cadence.set_enabled(enabled);
    }

    /// Whether the starting segments have been laid down.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Segment count seen by the last generator pass.
    pub fn live_segments(&self) -> usize {
        self.live_segments
    }

    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    pub fn retired_total(&self) -> u64 {
        self.retired_total
    }
}
