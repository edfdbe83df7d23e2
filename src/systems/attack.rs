//! Attack cooldowns and action dispatch.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::attackdriver::{ActionKind, AttackDriver};
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::partymember::{ActiveMember, PartyMember};
use crate::events::combat::{ActionPerformedEvent, CooldownChangedEvent};
use crate::events::input::{InputAction, InputEvent};
use crate::resources::attackstyles::{AttackContext, AttackStyles};
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::worldtime::WorldTime;

/// Tick every member's timers, benched ones included, and announce each
/// change.
pub fn attack_cooldowns(
    mut commands: Commands,
    time: Res<WorldTime>,
    mut drivers: Query<(Entity, &mut AttackDriver, &PartyMember)>,
) {
    if time.delta <= 0.0 {
        return;
    }
    for (entity, mut driver, member) in drivers.iter_mut() {
        for kind in driver.tick(time.delta).into_iter().flatten() {
            commands.trigger(CooldownChangedEvent {
                entity,
                kind,
                remaining: driver.remaining(kind),
                fraction: driver.cooldown_fraction(kind, &member.stats),
            });
        }
    }
}

pub fn attack_input_observer(
    trigger: On<InputEvent>,
    mut commands: Commands,
    state: Option<Res<GameState>>,
    styles: Option<Res<AttackStyles>>,
    mut attackers: Query<
        (Entity, &mut AttackDriver, &PartyMember, &Health, &MapPosition),
        With<ActiveMember>,
    >,
) {
    let event = trigger.event();
    let kind = match event.action {
        InputAction::Attack => ActionKind::Attack,
        InputAction::Ability => ActionKind::Ability,
        _ => return,
    };
    if !event.pressed || state.is_some_and(|s| s.get() != GameStates::Playing) {
        return;
    }
    let Ok((entity, mut driver, member, health, position)) = attackers.single_mut() else {
        return;
    };
    if !driver.try_begin(kind, &member.stats, health.is_alive()) {
        debug!("{:?} on cooldown ({:.2}s)", kind, driver.remaining(kind));
        return;
    }

    let character = member.character_type();
    commands.trigger(ActionPerformedEvent {
        entity,
        character,
        kind,
    });
    commands.trigger(CooldownChangedEvent {
        entity,
        kind,
        remaining: driver.remaining(kind),
        fraction: driver.cooldown_fraction(kind, &member.stats),
    });

    let Some(style) = styles.and_then(|s| s.get(character, kind)) else {
        return;
    };
    debug!("{} performs {}", character, style.name());
    style.perform(
        &mut commands,
        &AttackContext {
            attacker: entity,
            character,
            kind,
            origin: position.pos,
        },
    );
}
