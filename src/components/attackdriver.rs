//! Attack and ability cooldowns plus the short-lived entities attacks spawn.
//!
//! [`AttackDriver`] holds two countdowns per party member. The
//! [`attack_cooldowns`](crate::systems::attack::attack_cooldowns) system
//! ticks them down; the input observer accepts an action only when the
//! matching countdown is at zero and the member is alive, then hands the
//! effect to the [`AttackStyles`](crate::resources::attackstyles::AttackStyles)
//! registered for the member's character.

use bevy_ecs::prelude::{Component, Entity};

use crate::components::partymember::CharacterStats;

/// The two action slots every character has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionKind {
    Attack,
    Ability,
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct AttackDriver {
    attack_timer: f32,
    ability_timer: f32,
}

impl AttackDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self, kind: ActionKind) -> f32 {
        match kind {
            ActionKind::Attack => self.attack_timer,
            ActionKind::Ability => self.ability_timer,
        }
    }

    pub fn is_ready(&self, kind: ActionKind) -> bool {
        self.remaining(kind) <= 0.0
    }

    /// Fraction of the cooldown still to run, 0 when ready.
    pub fn cooldown_fraction(&self, kind: ActionKind, stats: &CharacterStats) -> f32 {
        let duration = cooldown_of(kind, stats);
        if duration <= 0.0 {
            0.0
        } else {
            (self.remaining(kind) / duration).clamp(0.0, 1.0)
        }
    }

    /// Count both timers down, clamped at zero. Returns the kinds whose
    /// remaining time changed.
    pub fn tick(&mut self, dt: f32) -> [Option<ActionKind>; 2] {
        let mut changed = [None, None];
        if self.attack_timer > 0.0 {
            self.attack_timer = (self.attack_timer - dt).max(0.0);
            changed[0] = Some(ActionKind::Attack);
        }
        if self.ability_timer > 0.0 {
            self.ability_timer = (self.ability_timer - dt).max(0.0);
            changed[1] = Some(ActionKind::Ability);
        }
        changed
    }

    /// Accept the action if its timer is ready and the member is alive.
    /// Acceptance restarts the timer from the member's cooldown.
    pub fn try_begin(&mut self, kind: ActionKind, stats: &CharacterStats, alive: bool) -> bool {
        if !alive || !self.is_ready(kind) {
            return false;
        }
        let duration = cooldown_of(kind, stats);
        match kind {
            ActionKind::Attack => self.attack_timer = duration,
            ActionKind::Ability => self.ability_timer = duration,
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn cooldown_of(kind: ActionKind, stats: &CharacterStats) -> f32 {
    match kind {
        ActionKind::Attack => stats.attack_cooldown,
        ActionKind::Ability => stats.ability_cooldown,
    }
}

/// Melee damage volume. Lives for a fraction of a second.
#[derive(Component, Debug, Clone, Copy)]
pub struct Hitbox {
    pub owner: Entity,
    pub radius: f32,
}

/// Ranged attack body. Destroyed on its first contact or when its TTL ends.
#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile {
    pub owner: Entity,
}
