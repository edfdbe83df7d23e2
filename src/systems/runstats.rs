use bevy_ecs::prelude::*;

use crate::components::environment::{EnvironmentMover, ScrollRoot};
use crate::events::progress::{DistanceChangedEvent, ScoreChangedEvent};
use crate::resources::gameconfig::{GameConfig, GameTuning};
use crate::resources::runstats::RunStats;
use crate::resources::worldtime::WorldTime;

/// Integrate distance from the speed the world actually scrolled at this
/// frame. Runs after the environment mover.
pub fn run_stats(
    mut commands: Commands,
    time: Res<WorldTime>,
    config: Option<Res<GameConfig>>,
    mut stats: ResMut<RunStats>,
    movers: Query<&EnvironmentMover, With<ScrollRoot>>,
) {
    let speed = movers.single().map(|m| m.current_speed()).unwrap_or(0.0);
    let tuning: GameTuning = config.map(|c| c.tuning).unwrap_or_default();
    let update = stats.advance(speed, time.delta, tuning.distance_per_point);
    commands.trigger(DistanceChangedEvent {
        distance: update.distance,
    });
    if let Some(score) = update.score {
        commands.trigger(ScoreChangedEvent { score });
    }
}
