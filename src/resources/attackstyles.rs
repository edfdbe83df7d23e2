//! Character-specific attack effects.
//!
//! Accepted actions are dispatched through [`AttackStyles`], an open
//! registry keyed by character and action slot. Hosts can register their
//! own [`AttackStyle`] for new characters or replace the built-in ones.

use bevy_ecs::prelude::*;
use glam::Vec2;
use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::components::attackdriver::{ActionKind, Hitbox, Projectile};
use crate::components::damagedealer::{DamageDealer, Team};
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::partymember::CharacterType;
use crate::components::rigidbody::RigidBody;
use crate::components::ttl::Ttl;

/// Everything an effect needs to know about the accepted action.
#[derive(Debug, Clone, Copy)]
pub struct AttackContext {
    pub attacker: Entity,
    pub character: CharacterType,
    pub kind: ActionKind,
    /// World position the effect starts from.
    pub origin: Vec2,
}

pub trait AttackStyle: Send + Sync {
    fn name(&self) -> &'static str;

    /// Spawn whatever the action produces.
    fn perform(&self, commands: &mut Commands, context: &AttackContext);
}

/// Short-lived damage volume around the attacker.
#[derive(Debug, Clone, Copy)]
pub struct MeleeSlash {
    pub range: f32,
    pub duration: f32,
    pub damage: i32,
}

impl Default for MeleeSlash {
    fn default() -> Self {
        MeleeSlash {
            range: 0.8,
            duration: 0.2,
            damage: 1,
        }
    }
}

impl AttackStyle for MeleeSlash {
    fn name(&self) -> &'static str {
        "melee_slash"
    }

    fn perform(&self, commands: &mut Commands, context: &AttackContext) {
        commands.spawn((
            Group::HITBOX,
            Hitbox {
                owner: context.attacker,
                radius: self.range,
            },
            DamageDealer::new(self.damage, Team::Player),
            MapPosition { pos: context.origin },
            Ttl::new(self.duration),
        ));
    }
}

/// Projectile fired forward along the run direction.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileBlast {
    pub speed: f32,
    pub lifetime: f32,
    pub damage: i32,
}

impl Default for ProjectileBlast {
    fn default() -> Self {
        ProjectileBlast {
            speed: 10.0,
            lifetime: 3.0,
            damage: 1,
        }
    }
}

impl AttackStyle for ProjectileBlast {
    fn name(&self) -> &'static str {
        "projectile_blast"
    }

    fn perform(&self, commands: &mut Commands, context: &AttackContext) {
        commands.spawn((
            Group::PROJECTILE,
            Projectile {
                owner: context.attacker,
            },
            DamageDealer::new(self.damage, Team::Player),
            MapPosition { pos: context.origin },
            RigidBody::with_velocity(Vec2::new(self.speed, 0.0)),
            Ttl::new(self.lifetime),
        ));
    }
}

#[derive(Resource, Clone, Default)]
pub struct AttackStyles {
    styles: FxHashMap<(CharacterType, ActionKind), Arc<dyn AttackStyle>>,
}

impl AttackStyles {
    /// Knight slashes, Mage blasts. Abilities currently reuse the basic
    /// attack of each character.
    pub fn with_defaults() -> Self {
        let mut styles = Self::default();
        let slash: Arc<dyn AttackStyle> = Arc::new(MeleeSlash::default());
        let blast: Arc<dyn AttackStyle> = Arc::new(ProjectileBlast::default());
        styles.register_shared(CharacterType::Knight, ActionKind::Attack, slash.clone());
        styles.register_shared(CharacterType::Knight, ActionKind::Ability, slash);
        styles.register_shared(CharacterType::Mage, ActionKind::Attack, blast.clone());
        styles.register_shared(CharacterType::Mage, ActionKind::Ability, blast);
        styles
    }

    pub fn register(
        &mut self,
        character: CharacterType,
        kind: ActionKind,
        style: impl AttackStyle + 'static,
    ) {
        self.register_shared(character, kind, Arc::new(style));
    }

    pub fn register_shared(
        &mut self,
        character: CharacterType,
        kind: ActionKind,
        style: Arc<dyn AttackStyle>,
    ) {
        self.styles.insert((character, kind), style);
    }

    pub fn get(&self, character: CharacterType, kind: ActionKind) -> Option<Arc<dyn AttackStyle>> {
        self.styles.get(&(character, kind)).cloned()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
