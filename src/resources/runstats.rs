//! Distance, time alive and score for the current run.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct RunStats {
    distance: f32,
    time_alive: f32,
    score: i64,
}

/// What changed during one [`RunStats::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsUpdate {
    pub distance: f32,
    /// Present only when the rounded score moved.
    pub score: Option<i64>,
}

impl RunStats {
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn time_alive(&self) -> f32 {
        self.time_alive
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Integrate one frame at the given scroll speed.
    ///
    /// The score is the distance scaled by `distance_per_point`, rounded
    /// half to even.
    pub fn advance(&mut self, speed: f32, dt: f32, distance_per_point: f32) -> StatsUpdate {
        self.time_alive += dt;
        self.distance += speed.max(0.0) * dt;

        let new_score = (self.distance * distance_per_point).round_ties_even() as i64;
        let score = if new_score != self.score {
            self.score = new_score;
            Some(new_score)
        } else {
            None
        };
        StatsUpdate {
            distance: self.distance,
            score,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_reported_only_when_it_moves() {
        let mut stats = RunStats::default();
        let update = stats.advance(6.0, 0.05, 1.0);
        assert!((update.distance - 0.3).abs() < 1e-6);
        assert_eq!(update.score, None);

        let update = stats.advance(6.0, 0.1, 1.0);
        assert_eq!(update.score, Some(1));
        assert_eq!(stats.advance(0.0, 0.1, 1.0).score, None);
        assert!((stats.time_alive() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn reset_clears_everything() {
        let mut stats = RunStats::default();
        stats.advance(10.0, 2.0, 0.5);
        assert_eq!(stats.score(), 10);
        stats.reset();
        assert_eq!(stats, RunStats::default());
    }
}
