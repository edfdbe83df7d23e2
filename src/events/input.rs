//! Input action events.
//!
//! The host maps its devices to [`InputAction`]s and triggers an
//! [`InputEvent`] per press or release (see
//! [`Game::input`](crate::game::Game::input)). Jump, attack, ability,
//! party switching and pause observers react to presses only.

use bevy_ecs::prelude::*;

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Jump,
    Attack,
    Ability,
    /// Make the roster slot at this index the active member.
    SwitchTo(usize),
    /// Toggle pause (default: Escape).
    TogglePause,
}

/// Event emitted when an input action is pressed or released.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    /// The input action that triggered this event.
    pub action: InputAction,
    /// Whether the action was pressed (true) or released (false).
    pub pressed: bool,
}

impl InputEvent {
    pub fn pressed(action: InputAction) -> Self {
        InputEvent {
            action,
            pressed: true,
        }
    }
}
