//! Hit points for characters, enemies and obstacles.
//!
//! [`Health`] keeps `0 <= current <= max` after every call. Reaching zero
//! flips the component into a terminal dead state exactly once; the
//! mutation methods report what happened so the
//! [`damage observer`](crate::systems::health::damage_observer) can trigger
//! the matching events.

use bevy_ecs::prelude::Component;

/// Result of a [`Health::damage`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Nothing changed: the entity was already dead or the amount was not positive.
    Ignored,
    /// Health dropped but the entity survived.
    Damaged { amount: i32 },
    /// This hit killed the entity. Only returned once per life.
    Killed { amount: i32 },
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    max: i32,
    current: i32,
    dead: bool,
}

impl Health {
    /// Full health with the given maximum (at least 1).
    pub fn new(max: i32) -> Self {
        let max = max.max(1);
        Health {
            max,
            current: max,
            dead: false,
        }
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    pub fn fraction(&self) -> f32 {
        self.current as f32 / self.max as f32
    }

    pub fn damage(&mut self, amount: i32) -> DamageOutcome {
        if self.dead || amount <= 0 {
            return DamageOutcome::Ignored;
        }
        self.current = (self.current - amount).max(0);
        if self.current == 0 {
            self.dead = true;
            DamageOutcome::Killed { amount }
        } else {
            DamageOutcome::Damaged { amount }
        }
    }

    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if self.dead || amount <= 0 {
            return 0;
        }
        let before = self.current;
        self.current = (self.current + amount).min(self.max);
        self.current - before
    }

    /// Restore to full and leave the dead state. Used when a pooled member
    /// starts a new run.
    pub fn reset_to_full(&mut self) {
        self.current = self.max;
        self.dead = false;
    }

    /// Change the maximum (at least 1) and re-clamp the current value.
    pub fn set_max(&mut self, new_max: i32) {
        self.max = new_max.max(1);
        self.current = self.current.min(self.max);
    }
}

impl Default for Health {
    fn default() -> Self {
        Health::new(3)
    }
}
