//! Enemy and obstacle spawn director state.
//!
//! The [`spawn_director`](crate::systems::spawndirector::spawn_director)
//! system drives this resource: every time the cadence comes due it flips a
//! coin between the enemy and the obstacle table, draws a weighted entry,
//! and spawns it unless the template is at its live-instance cap.

use bevy_ecs::prelude::Resource;

use crate::resources::gameconfig::GameTuning;
use crate::resources::spawntable::SpawnTable;

/// Intervals never drop below this, whatever the tuning says.
pub const MIN_SPAWN_INTERVAL: f32 = 0.05;

/// Seconds between spawn attempts after `elapsed` seconds of play.
///
/// Interpolates linearly from the base interval to the minimum as
/// `elapsed * ramp * 0.1` goes from 0 to 1, then stays at the minimum.
pub fn spawn_interval(tuning: &GameTuning, elapsed: f32) -> f32 {
    let floor = tuning.spawn_interval_min.max(MIN_SPAWN_INTERVAL);
    let base = tuning.base_spawn_interval.max(floor);
    let t = (elapsed.max(0.0) * tuning.speed_ramp_per_second * 0.1).clamp(0.0, 1.0);
    (base * (1.0 - t) + floor * t).max(floor)
}

/// Countdown shared by the directors.
///
/// Disabling keeps the schedule untouched; enabling again clears it so the
/// next tick starts a fresh wait, exactly like a first start.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnCadence {
    enabled: bool,
    next_spawn_time: Option<f32>,
}

impl SpawnCadence {
    pub fn new() -> Self {
        SpawnCadence {
            enabled: true,
            next_spawn_time: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled && !self.enabled {
            self.next_spawn_time = None;
        }
        self.enabled = enabled;
    }

    pub fn next_spawn_time(&self) -> Option<f32> {
        self.next_spawn_time
    }

    /// Whether an attempt is due at `now`. An unarmed cadence arms itself
    /// `first_wait` seconds out and reports not due.
    pub fn is_due(&mut self, now: f32, first_wait: f32) -> bool {
        if !self.enabled {
            return false;
        }
        match self.next_spawn_time {
            None => {
                self.next_spawn_time = Some(now + first_wait);
                false
            }
            Some(at) => now >= at,
        }
    }

    pub fn schedule_next(&mut self, now: f32, interval: f32) {
        self.next_spawn_time = Some(now + interval);
    }
}

#[derive(Resource, Debug, Clone)]
pub struct SpawnDirector {
    pub enemy_table: Option<SpawnTable>,
    pub obstacle_table: Option<SpawnTable>,
    pub(crate) cadence: SpawnCadence,
    pub(crate) current_interval: f32,
    pub(crate) spawned_total: u64,
    pub(crate) capped_attempts: u64,
}

impl Default for SpawnDirector {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl SpawnDirector {
    pub fn new(enemy_table: Option<SpawnTable>, obstacle_table: Option<SpawnTable>) -> Self {
        SpawnDirector {
            enemy_table,
            obstacle_table,
            cadence: SpawnCadence::new(),
            current_interval: GameTuning::default().base_spawn_interval,
            spawned_total: 0,
            capped_attempts: 0,
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

    /// Interval chosen after the most recent attempt.
    pub fn current_interval(&self) -> f32 {
        self.current_interval
    }

    pub fn spawned_total(&self) -> u64 {
        self.spawned_total
    }

    /// Attempts dropped because the drawn template was at its cap.
    pub fn capped_attempts(&self) -> u64 {
        self.capped_attempts
    }

    /// Rewind counters and the schedule for a new run. Tables are kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.enemy_table.take(), self.obstacle_table.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_never_increases_and_stops_at_min() {
        let tuning = GameTuning::default();
        let mut previous = f32::INFINITY;
        for step in 0..400 {
            let interval = spawn_interval(&tuning, step as f32 * 0.25);
            assert!(interval <= previous);
            assert!(interval >= tuning.spawn_interval_min);
            previous = interval;
        }
        assert_eq!(spawn_interval(&tuning, 0.0), tuning.base_spawn_interval);
        assert_eq!(spawn_interval(&tuning, 1_000.0), tuning.spawn_interval_min);
    }

    #[test]
    fn interval_stays_positive_with_bad_tuning() {
        let tuning = GameTuning {
            spawn_interval_min: -1.0,
            base_spawn_interval: 0.0,
            ..GameTuning::default()
        };
        assert!(spawn_interval(&tuning, 0.0) > 0.0);
        assert!(spawn_interval(&tuning, 1_000.0) > 0.0);
    }

    #[test]
    fn reenabling_starts_a_fresh_wait() {
        let mut cadence = SpawnCadence::new();
        assert!(!cadence.is_due(0.0, 1.0));
        assert!(cadence.is_due(1.0, 1.0));

        cadence.set_enabled(false);
        assert!(!cadence.is_due(5.0, 1.0));
        cadence.set_enabled(true);
        assert!(!cadence.is_due(5.0, 1.0));
        assert_eq!(cadence.next_spawn_time(), Some(6.0));
        assert!(cadence.is_due(6.0, 1.0));
    }
}
