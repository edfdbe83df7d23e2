use bevy_ecs::prelude::Resource;

/// Simulation clock.
///
/// `delta` and `fixed_delta` are already scaled by `time_scale`; a paused or
/// finished run has a time scale of zero, which freezes every countdown.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub fixed_delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            fixed_delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn is_frozen(&self) -> bool {
        self.time_scale <= 0.0
    }
}
