//! Player motor systems.
//!
//! - [`player_motor_frame`] ramps the scroll speed at display rate.
//! - [`player_motor_fixed`] runs the vertical model at the fixed rate:
//!   coyote/buffer jump resolution, asymmetric gravity and landing on the
//!   sampled ground.
//! - [`jump_input_observer`] timestamps jump presses.
//!
//! Only the [`ActiveMember`] body is simulated; benched members keep their
//! last state until they take over.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::groundcheck::GroundContact;
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::partymember::ActiveMember;
use crate::components::playermotor::PlayerMotor;
use crate::components::rigidbody::RigidBody;
use crate::events::input::{InputAction, InputEvent};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::worldtime::WorldTime;

pub fn player_motor_frame(
    time: Res<WorldTime>,
    config: Option<Res<GameConfig>>,
    mut motors: Query<&mut PlayerMotor, With<ActiveMember>>,
) {
    let player = config.map(|c| c.player).unwrap_or_default();
    for mut motor in motors.iter_mut() {
        motor.ramp_speed(&player, time.delta);
    }
}

pub fn player_motor_fixed(
    time: Res<WorldTime>,
    config: Option<Res<GameConfig>>,
    mut bodies: Query<
        (
            &mut PlayerMotor,
            &mut RigidBody,
            &mut MapPosition,
            &GroundContact,
            &Health,
        ),
        With<ActiveMember>,
    >,
) {
    let dt = time.fixed_delta;
    if dt <= 0.0 {
        return;
    }
    let player = config.map(|c| c.player).unwrap_or_default();
    let now = time.elapsed;

    for (mut motor, mut body, mut position, contact, health) in bodies.iter_mut() {
        if health.is_dead() {
            continue;
        }
        motor.record_ground(contact.grounded, now);
        // the world scrolls instead
        body.velocity.x = 0.0;

        let step = motor.step_vertical(&player, body.velocity.y, now, dt);
        if step.jumped {
            debug!("Jump at {:.2}s", now);
        }

        match contact.surface_y {
            Some(surface) if !step.jumped && step.velocity <= 0.0 => {
                body.velocity.y = 0.0;
                position.pos.y = surface;
            }
            _ => {
                body.velocity.y = step.velocity;
                position.pos.y += step.velocity * dt;
            }
        }
    }
}

pub fn jump_input_observer(
    trigger: On<InputEvent>,
    time: Res<WorldTime>,
    state: Option<Res<GameState>>,
    mut motors: Query<&mut PlayerMotor, With<ActiveMember>>,
) {
    let event = trigger.event();
    if event.action != InputAction::Jump || !event.pressed {
        return;
    }
    if state.is_some_and(|s| s.get() != GameStates::Playing) {
        return;
    }
    if let Ok(mut motor) = motors.single_mut() {
        motor.request_jump(time.elapsed);
    }
}
