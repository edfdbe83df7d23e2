//! High-level run state resources.
//!
//! These resources track the authoritative current state of the run and any
//! pending transition requested by systems or observers. See
//! `crate::events::gamestate::observe_gamestate_change_event` for how a
//! transition is applied.

use bevy_ecs::prelude::Resource;

/// Discrete states a run can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Playing,
    Paused,
    /// Terminal until the run is restarted.
    GameOver,
}

/// Representation of a requested next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current run state.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> GameStates {
        self.current
    }

    /// Update the current state immediately, without running enter/exit work.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }

    pub fn is_paused(&self) -> bool {
        self.current == GameStates::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.current == GameStates::GameOver
    }
}

/// Intent to change to a new state.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> NextGameStates {
        self.next
    }

    /// Request a transition to `next`. An observer applies it and clears
    /// the request.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}
