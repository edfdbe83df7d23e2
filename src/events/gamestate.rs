//! Run state transition event and observer.
//!
//! Systems and observers request a change to the high-level [`GameStates`]
//! by updating [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then
//! triggers [`observe_gamestate_change_event`], which applies the transition
//! to [`GameState`] and performs the enter work for the new state:
//!
//! - `Paused`: time scale 0, [`PauseChangedEvent`] with `paused = true`;
//! - `Playing` (from `Paused`): time scale 1, [`PauseChangedEvent`] with
//!   `paused = false`;
//! - `GameOver`: time scale 0, both spawn directors disabled, one
//!   [`GameOverEvent`].
//!
//! `GameOver` is terminal: only a restart leaves it.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::rescuedirector::RescueDirector;
use crate::resources::runstats::RunStats;
use crate::resources::spawndirector::SpawnDirector;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending state transition should be applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PauseChangedEvent {
    pub paused: bool,
}

/// The run ended. Fired once per run.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GameOverEvent {
    pub distance: f32,
    pub score: i64,
}

/// Observer that applies a pending state transition.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    mut world_time: ResMut<WorldTime>,
    mut spawn_director: Option<ResMut<SpawnDirector>>,
    mut rescue_director: Option<ResMut<RescueDirector>>,
    run_stats: Option<Res<RunStats>>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!("GameState or NextGameState missing in observe_gamestate_change_event");
        return;
    };

    let new_state = match next_game_state.get() {
        Pending(new_state) => new_state,
        Unchanged => {
            debug!("No state change pending.");
            return;
        }
    };
    next_game_state.reset();

    let old_state = game_state.get();
    if old_state == new_state {
        return;
    }
    if old_state == GameStates::GameOver {
        debug!("Ignoring {:?} request after game over", new_state);
        return;
    }

    info!("Transitioning from {:?} to {:?}", old_state, new_state);
    game_state.set(new_state);

    match new_state {
        GameStates::Paused => {
            world_time.time_scale = 0.0;
            commands.trigger(PauseChangedEvent { paused: true });
        }
        GameStates::Playing => {
            world_time.time_scale = 1.0;
            commands.trigger(PauseChangedEvent { paused: false });
        }
        GameStates::GameOver => {
            world_time.time_scale = 0.0;
            if let Some(director) = spawn_director.as_deref_mut() {
                director.set_enabled(false);
            }
            if let Some(director) = rescue_director.as_deref_mut() {
                director.set_enabled(false);
            }
            let stats = run_stats.as_deref().copied().unwrap_or_default();
            info!(
                "Game over: distance {:.1}, score {}",
                stats.distance(),
                stats.score()
            );
            commands.trigger(GameOverEvent {
                distance: stats.distance(),
                score: stats.score(),
            });
        }
    }
}
