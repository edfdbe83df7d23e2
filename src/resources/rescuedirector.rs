//! Rescue pickup director state.

use bevy_ecs::prelude::Resource;

use crate::resources::rescuetable::RescueSpawnTable;
use crate::resources::spawndirector::SpawnCadence;

#[derive(Resource, Debug, Clone)]
pub struct RescueDirector {
    pub table: Option<RescueSpawnTable>,
    pub(crate) cadence: SpawnCadence,
    pub(crate) spawned_total: u64,
}

impl Default for RescueDirector {
    fn default() -> Self {
        Self::new(None)
    }
}

impl RescueDirector {
    pub fn new(table: Option<RescueSpawnTable>) -> Self {
        RescueDirector {
            table,
            cadence: SpawnCadence::new(),
            spawned_total: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.cadence.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.cadence.set_enabled(enabled);
    }

    pub fn next_spawn_time(&self) -> Option<f32> {
        self.cadence.next_spawn_time()
    }

    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.table.take());
    }
}
