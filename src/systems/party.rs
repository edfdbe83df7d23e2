//! Party switching and failover.
//!
//! The [`Party`] resource decides; these observers apply the decision to the
//! world and announce it. Only one member carries [`ActiveMember`] at a
//! time. Handing over moves the tag and copies the body state (motor,
//! position, velocity, ground contact) to the incoming member so the run
//! continues seamlessly.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::groundcheck::GroundContact;
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::partymember::{ActiveMember, PartyMember};
use crate::components::playermotor::PlayerMotor;
use crate::components::rigidbody::RigidBody;
use crate::events::health::DiedEvent;
use crate::events::input::{InputAction, InputEvent};
use crate::events::party::{ActiveMemberChangedEvent, MemberDiedEvent, PartyWipedEvent};
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::party::{Party, PartyDeathOutcome};

fn is_alive(members: &Query<(&PartyMember, &Health)>, entity: Entity) -> bool {
    members
        .get(entity)
        .map(|(_, health)| health.is_alive())
        .unwrap_or(false)
}

pub fn party_death_observer(
    trigger: On<DiedEvent>,
    mut commands: Commands,
    party: Option<ResMut<Party>>,
    members: Query<(&PartyMember, &Health)>,
) {
    let dead = trigger.event().entity;
    let Ok((member, _)) = members.get(dead) else {
        return;
    };
    let character = member.character_type();
    commands.trigger(MemberDiedEvent {
        entity: dead,
        character,
        roster_index: member.roster_index,
    });

    let Some(mut party) = party else {
        return;
    };
    match party.on_member_died(dead, |e| is_alive(&members, e)) {
        PartyDeathOutcome::Ignored => {}
        PartyDeathOutcome::BenchLost { index } => {
            debug!("Benched {} (slot {}) died", character, index);
        }
        PartyDeathOutcome::Failover { from, to } => {
            let Some(next) = party.member(to) else {
                return;
            };
            let Ok((next_member, _)) = members.get(next) else {
                return;
            };
            info!(
                "{} fell, {} takes over (slot {} -> {})",
                character,
                next_member.character_type(),
                from,
                to
            );
            hand_over(&mut commands, dead, next);
            commands.trigger(ActiveMemberChangedEvent {
                previous: Some(from),
                index: to,
                entity: next,
                character: next_member.character_type(),
            });
        }
        PartyDeathOutcome::Wiped { index } => {
            info!("Party wiped ({} in slot {} was the last)", character, index);
            commands.trigger(PartyWipedEvent);
        }
    }
}

/// Explicit switch requests. Dead or missing targets are ignored.
pub fn party_input_observer(
    trigger: On<InputEvent>,
    mut commands: Commands,
    state: Option<Res<GameState>>,
    party: Option<ResMut<Party>>,
    members: Query<(&PartyMember, &Health)>,
) {
    let event = trigger.event();
    let InputAction::SwitchTo(index) = event.action else {
        return;
    };
    if !event.pressed || state.is_some_and(|s| s.get() != GameStates::Playing) {
        return;
    }
    let Some(mut party) = party else {
        return;
    };
    let Some(previous) = party.switch_to(index, |e| is_alive(&members, e)) else {
        debug!("Switch to slot {} rejected", index);
        return;
    };
    let (Some(from), Some(to)) = (party.member(previous), party.member(index)) else {
        return;
    };
    let Ok((member, _)) = members.get(to) else {
        return;
    };
    info!("Switched to {} (slot {})", member.character_type(), index);
    hand_over(&mut commands, from, to);
    commands.trigger(ActiveMemberChangedEvent {
        previous: Some(previous),
        index,
        entity: to,
        character: member.character_type(),
    });
}

/// Move the active tag and the body state from `from` to `to`.
pub fn hand_over(commands: &mut Commands, from: Entity, to: Entity) {
    commands.queue(move |world: &mut World| {
        let carried = world.get_entity(from).ok().map(|entity| {
            (
                entity.get::<PlayerMotor>().copied(),
                entity.get::<MapPosition>().copied(),
                entity.get::<RigidBody>().copied(),
                entity.get::<GroundContact>().copied(),
            )
        });
        if let Ok(mut previous) = world.get_entity_mut(from) {
            previous.remove::<ActiveMember>();
        }
        let Ok(mut next) = world.get_entity_mut(to) else {
            return;
        };
        next.insert(ActiveMember);
        let Some((motor, position, body, contact)) = carried else {
            return;
        };
        if let (Some(motor), Some(mut own)) = (motor, next.get_mut::<PlayerMotor>()) {
            own.take_over(&motor);
        }
        if let Some(position) = position {
            next.insert(position);
        }
        if let Some(body) = body {
            next.insert(body);
        }
        if let Some(contact) = contact {
            next.insert(contact);
        }
    });
}
