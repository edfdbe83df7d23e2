//! Run state requests.
//!
//! Pause toggles and the party wipe only write [`NextGameState`] and fire
//! [`GameStateChangedEvent`]; the transition itself is applied by
//! [`observe_gamestate_change_event`](crate::events::gamestate::observe_gamestate_change_event).

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::gamestate::GameStateChangedEvent;
use crate::events::input::{InputAction, InputEvent};
use crate::events::party::PartyWipedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};

/// Apply a transition a host requested by writing [`NextGameState`]
/// directly.
pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(_new_state) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_playing(state: Option<Res<GameState>>) -> bool {
    state.is_none_or(|s| matches!(s.get(), GameStates::Playing))
}

pub fn pause_input_observer(
    trigger: On<InputEvent>,
    mut commands: Commands,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
) {
    let event = trigger.event();
    if event.action != InputAction::TogglePause || !event.pressed {
        return;
    }
    let target = match state.get() {
        GameStates::Playing => GameStates::Paused,
        GameStates::Paused => GameStates::Playing,
        GameStates::GameOver => {
            debug!("Pause ignored after game over");
            return;
        }
    };
    next_state.set(target);
    commands.trigger(GameStateChangedEvent {});
}

pub fn party_wiped_observer(
    _trigger: On<PartyWipedEvent>,
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
) {
    next_state.set(GameStates::GameOver);
    commands.trigger(GameStateChangedEvent {});
}
