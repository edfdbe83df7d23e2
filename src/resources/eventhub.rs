//! Fan-out of gameplay events to code outside the ECS world.
//!
//! UI and audio glue call [`EventHub::subscribe`] and drain their
//! [`Receiver`] at their own pace; every subscriber gets its own unbounded
//! channel and a copy of each [`GameEvent`]. [`EventHub::unsubscribe`] ends a
//! subscription explicitly, and dropping the receiver ends it on the next
//! publish.
//!
//! Events reach the hub through the generic
//! [`forward_to_hub`](crate::systems::eventhub::forward_to_hub) observer,
//! registered once per event type by [`Game`](crate::game::Game).

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use rustc_hash::FxHashMap;

use crate::components::attackdriver::ActionKind;
use crate::components::partymember::CharacterType;
use crate::components::pickup::PickupKind;
use crate::events::combat::{ActionPerformedEvent, CooldownChangedEvent};
use crate::events::gamestate::{GameOverEvent, PauseChangedEvent};
use crate::events::health::{DamagedEvent, HealedEvent};
use crate::events::party::{ActiveMemberChangedEvent, MemberDiedEvent, PartyWipedEvent};
use crate::events::pickup::PickupCollectedEvent;
use crate::events::progress::{
    CharacterRescuedEvent, DistanceChangedEvent, ScoreChangedEvent, UnlocksChangedEvent,
};
use crate::events::spawn::{SpawnKind, SpawnedEvent};

/// Owned copy of an event for consumers outside the world.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Damaged {
        entity: Entity,
        amount: i32,
        remaining: i32,
    },
    Healed {
        entity: Entity,
        amount: i32,
        current: i32,
    },
    MemberDied {
        entity: Entity,
        character: CharacterType,
        roster_index: usize,
    },
    PartyWiped,
    ActiveMemberChanged {
        previous: Option<usize>,
        index: usize,
        character: CharacterType,
    },
    DistanceChanged(f32),
    ScoreChanged(i64),
    CharacterRescued(CharacterType),
    UnlocksChanged(Vec<CharacterType>),
    GameOver {
        distance: f32,
        score: i64,
    },
    PauseChanged(bool),
    Spawned {
        entity: Entity,
        kind: SpawnKind,
    },
    ActionPerformed {
        entity: Entity,
        character: CharacterType,
        kind: ActionKind,
    },
    CooldownChanged {
        entity: Entity,
        kind: ActionKind,
        fraction: f32,
    },
    PickupCollected {
        collector: Entity,
        kind: PickupKind,
    },
}

impl From<DamagedEvent> for GameEvent {
    fn from(e: DamagedEvent) -> Self {
        GameEvent::Damaged {
            entity: e.entity,
            amount: e.amount,
            remaining: e.remaining,
        }
    }
}

impl From<HealedEvent> for GameEvent {
    fn from(e: HealedEvent) -> Self {
        GameEvent::Healed {
            entity: e.entity,
            amount: e.amount,
            current: e.current,
        }
    }
}

impl From<MemberDiedEvent> for GameEvent {
    fn from(e: MemberDiedEvent) -> Self {
        GameEvent::MemberDied {
            entity: e.entity,
            character: e.character,
            roster_index: e.roster_index,
        }
    }
}

impl From<PartyWipedEvent> for GameEvent {
    fn from(_: PartyWipedEvent) -> Self {
        GameEvent::PartyWiped
    }
}

impl From<ActiveMemberChangedEvent> for GameEvent {
    fn from(e: ActiveMemberChangedEvent) -> Self {
        GameEvent::ActiveMemberChanged {
            previous: e.previous,
            index: e.index,
            character: e.character,
        }
    }
}

impl From<DistanceChangedEvent> for GameEvent {
    fn from(e: DistanceChangedEvent) -> Self {
        GameEvent::DistanceChanged(e.distance)
    }
}

impl From<ScoreChangedEvent> for GameEvent {
    fn from(e: ScoreChangedEvent) -> Self {
        GameEvent::ScoreChanged(e.score)
    }
}

impl From<CharacterRescuedEvent> for GameEvent {
    fn from(e: CharacterRescuedEvent) -> Self {
        GameEvent::CharacterRescued(e.character)
    }
}

impl From<UnlocksChangedEvent> for GameEvent {
    fn from(e: UnlocksChangedEvent) -> Self {
        GameEvent::UnlocksChanged(e.unlocked)
    }
}

impl From<GameOverEvent> for GameEvent {
    fn from(e: GameOverEvent) -> Self {
        GameEvent::GameOver {
            distance: e.distance,
            score: e.score,
        }
    }
}

impl From<PauseChangedEvent> for GameEvent {
    fn from(e: PauseChangedEvent) -> Self {
        GameEvent::PauseChanged(e.paused)
    }
}

impl From<SpawnedEvent> for GameEvent {
    fn from(e: SpawnedEvent) -> Self {
        GameEvent::Spawned {
            entity: e.entity,
            kind: e.kind,
        }
    }
}

impl From<ActionPerformedEvent> for GameEvent {
    fn from(e: ActionPerformedEvent) -> Self {
        GameEvent::ActionPerformed {
            entity: e.entity,
            character: e.character,
            kind: e.kind,
        }
    }
}

impl From<CooldownChangedEvent> for GameEvent {
    fn from(e: CooldownChangedEvent) -> Self {
        GameEvent::CooldownChanged {
            entity: e.entity,
            kind: e.kind,
            fraction: e.fraction,
        }
    }
}

impl From<PickupCollectedEvent> for GameEvent {
    fn from(e: PickupCollectedEvent) -> Self {
        GameEvent::PickupCollected {
            collector: e.collector,
            kind: e.kind,
        }
    }
}

/// Handle returned by [`EventHub::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Resource, Debug, Default)]
pub struct EventHub {
    subscribers: FxHashMap<SubscriptionId, Sender<GameEvent>>,
    next_id: u64,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> (SubscriptionId, Receiver<GameEvent>) {
        let (tx, rx) = unbounded::<GameEvent>();
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.insert(id, tx);
        (id, rx)
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Send a copy to every subscriber, dropping those whose receiver is gone.
    pub fn publish(&mut self, event: GameEvent) {
        self.subscribers
            .retain(|_, tx| tx.send(event.clone()).is_ok());
    }
}
