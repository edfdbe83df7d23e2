//! Auto-run and jump state for a party member's body.
//!
//! The body never moves horizontally: [`PlayerMotor::target_speed`] is read
//! by the environment mover as the world scroll speed. Vertically the motor
//! integrates gravity (steeper while falling) and turns buffered jump
//! requests into an upward impulse when both the jump-buffer and coyote-time
//! windows are open.

use bevy_ecs::prelude::Component;

use crate::resources::gameconfig::PlayerConfig;

/// Gravity the host physics applies before the motor's extra pull.
pub const BASE_GRAVITY: f32 = -9.81;

/// Outcome of one fixed step of vertical integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalStep {
    pub velocity: f32,
    pub jumped: bool,
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerMotor {
    target_speed: f32,
    last_grounded_time: f32,
    last_jump_pressed_time: f32,
    jump_queued: bool,
}

impl Default for PlayerMotor {
    fn default() -> Self {
        Self::new(PlayerConfig::default().start_speed)
    }
}

impl PlayerMotor {
    pub fn new(start_speed: f32) -> Self {
        PlayerMotor {
            target_speed: start_speed,
            last_grounded_time: f32::NEG_INFINITY,
            last_jump_pressed_time: f32::NEG_INFINITY,
            jump_queued: false,
        }
    }

    /// Current scroll speed for the world.
    pub fn target_speed(&self) -> f32 {
        self.target_speed
    }

    pub fn jump_queued(&self) -> bool {
        self.jump_queued
    }

    pub fn last_grounded_time(&self) -> f32 {
        self.last_grounded_time
    }

    pub fn request_jump(&mut self, now: f32) {
        self.last_jump_pressed_time = now;
        self.jump_queued = true;
    }

    /// Per-frame ground bookkeeping.
    pub fn record_ground(&mut self, grounded: bool, now: f32) {
        if grounded {
            self.last_grounded_time = now;
        }
    }

    /// Ramp toward `max_speed`; never exceeds it.
    pub fn ramp_speed(&mut self, config: &PlayerConfig, dt: f32) {
        self.target_speed = (self.target_speed + config.acceleration * dt).min(config.max_speed);
    }

    pub fn gravity(config: &PlayerConfig, vertical_velocity: f32) -> f32 {
        let multiplier = if vertical_velocity <= 0.0 {
            config.fall_gravity_multiplier
        } else {
            1.0
        };
        BASE_GRAVITY - config.extra_gravity * multiplier
    }

    /// Integrate gravity and resolve a pending jump for one fixed step.
    ///
    /// A queued request is consumed when it is inside the buffer window and
    /// the body touched ground inside the coyote window. A request older
    /// than the buffer window is dropped.
    pub fn step_vertical(
        &mut self,
        config: &PlayerConfig,
        vertical_velocity: f32,
        now: f32,
        dt: f32,
    ) -> VerticalStep {
        let mut velocity = vertical_velocity + Self::gravity(config, vertical_velocity) * dt;
        let mut jumped = false;

        if self.jump_queued {
            let within_buffer = now - self.last_jump_pressed_time <= config.jump_buffer;
            let within_coyote = now - self.last_grounded_time <= config.coyote_time;
            if within_buffer && within_coyote {
                velocity = config.jump_force;
                self.jump_queued = false;
                // a single ground contact buys a single jump
                self.last_grounded_time = f32::NEG_INFINITY;
                jumped = true;
            } else if !within_buffer {
                self.jump_queued = false;
            }
        }

        VerticalStep { velocity, jumped }
    }

    /// Continue from another member's motor so a party switch does not reset
    /// the run speed or drop a pending jump.
    pub fn take_over(&mut self, previous: &PlayerMotor) {
        *self = *previous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.02;

    fn config() -> PlayerConfig {
        PlayerConfig {
            coyote_time: 0.12,
            jump_buffer: 0.15,
            ..PlayerConfig::default()
        }
    }

    #[test]
    fn request_just_before_leaving_ground_jumps() {
        let cfg = config();
        let mut motor = PlayerMotor::new(cfg.start_speed);
        motor.record_ground(true, 1.0);
        motor.request_jump(0.95);

        let step = motor.step_vertical(&cfg, 0.0, 1.05, DT);
        assert!(step.jumped);
        assert_eq!(step.velocity, cfg.jump_force);
        assert!(!motor.jump_queued());
    }

    #[test]
    fn request_after_coyote_window_is_dropped() {
        let cfg = config();
        let mut motor = PlayerMotor::new(cfg.start_speed);
        motor.record_ground(true, 1.0);
        motor.request_jump(1.2);

        let step = motor.step_vertical(&cfg, -1.0, 1.2, DT);
        assert!(!step.jumped);
        assert!(motor.jump_queued());

        let step = motor.step_vertical(&cfg, step.velocity, 1.4, DT);
        assert!(!step.jumped);
        assert!(!motor.jump_queued(), "request must not wait forever");
    }

    #[test]
    fn buffered_request_fires_on_landing() {
        let cfg = config();
        let mut motor = PlayerMotor::new(cfg.start_speed);
        motor.request_jump(2.0);
        assert!(!motor.step_vertical(&cfg, -3.0, 2.05, DT).jumped);
        motor.record_ground(true, 2.1);
        assert!(motor.step_vertical(&cfg, 0.0, 2.1, DT).jumped);
    }

    #[test]
    fn falling_gravity_is_steeper() {
        let cfg = config();
        let rising = PlayerMotor::gravity(&cfg, 1.0);
        let falling = PlayerMotor::gravity(&cfg, -1.0);
        assert!(falling < rising);
        assert_eq!(PlayerMotor::gravity(&cfg, 0.0), falling);
    }

    #[test]
    fn speed_ramps_and_caps() {
        let cfg = config();
        let mut motor = PlayerMotor::new(cfg.start_speed);
        motor.ramp_speed(&cfg, 1.0);
        assert!((motor.target_speed() - (cfg.start_speed + cfg.acceleration)).abs() < 1e-5);
        for _ in 0..100 {
            motor.ramp_speed(&cfg, 1.0);
        }
        assert_eq!(motor.target_speed(), cfg.max_speed);
    }
}
