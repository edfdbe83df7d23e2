//! Party roster and active-member bookkeeping.
//!
//! [`Party`] owns the ordered roster of member entities and the active index.
//! It never reads `Health` itself: callers pass an `alive` predicate, which
//! keeps the switching and failover rules testable without a world.
//!
//! Rules:
//! - an explicit switch is rejected when the target is out of range, dead,
//!   or already active;
//! - when the active member dies, the roster is scanned from the slot after
//!   it, wrapping once, and the first living member takes over;
//! - when nobody is left the party is wiped. That happens once; later
//!   deaths are ignored.

use bevy_ecs::prelude::{Entity, Resource};
use smallvec::SmallVec;

pub type Roster = SmallVec<[Entity; 4]>;

/// Result of reporting a death to the party.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyDeathOutcome {
    /// Not a roster member, or the party was already wiped.
    Ignored,
    /// A benched member died; the active member is unchanged.
    BenchLost { index: usize },
    /// The active member died and `to` took over.
    Failover { from: usize, to: usize },
    /// The last living member died.
    Wiped { index: usize },
}

#[derive(Resource, Debug, Clone, Default)]
pub struct Party {
    roster: Roster,
    active_index: usize,
    wiped: bool,
}

impl Party {
    pub fn new(roster: impl IntoIterator<Item = Entity>) -> Self {
        Party {
            roster: roster.into_iter().collect(),
            active_index: 0,
            wiped: false,
        }
    }

    pub fn roster(&self) -> &[Entity] {
        &self.roster
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn is_wiped(&self) -> bool {
        self.wiped
    }

    pub fn active_index(&self) -> Option<usize> {
        if self.roster.is_empty() {
            None
        } else {
            Some(self.active_index)
        }
    }

    pub fn active_entity(&self) -> Option<Entity> {
        self.roster.get(self.active_index).copied()
    }

    pub fn member(&self, index: usize) -> Option<Entity> {
        self.roster.get(index).copied()
    }

    pub fn index_of(&self, entity: Entity) -> Option<usize> {
        self.roster.iter().position(|e| *e == entity)
    }

    /// First living member after `index`, wrapping once around the roster.
    pub fn next_alive_after(&self, index: usize, alive: impl Fn(Entity) -> bool) -> Option<usize> {
        let n = self.roster.len();
        (0..n)
            .map(|i| (index + 1 + i) % n)
            .find(|candidate| alive(self.roster[*candidate]))
    }

    /// Make `index` the active member. Returns the previous index when the
    /// switch happened.
    pub fn switch_to(&mut self, index: usize, alive: impl Fn(Entity) -> bool) -> Option<usize> {
        if self.wiped || index == self.active_index {
            return None;
        }
        let target = self.member(index)?;
        if !alive(target) {
            return None;
        }
        let previous = self.active_index;
        self.active_index = index;
        Some(previous)
    }

    /// Apply the failover/wipe rules for a member that just died. `alive`
    /// must already report `dead` as dead.
    pub fn on_member_died(
        &mut self,
        dead: Entity,
        alive: impl Fn(Entity) -> bool,
    ) -> PartyDeathOutcome {
        if self.wiped {
            return PartyDeathOutcome::Ignored;
        }
        let Some(index) = self.index_of(dead) else {
            return PartyDeathOutcome::Ignored;
        };

        if !self.roster.iter().any(|e| alive(*e)) {
            self.wiped = true;
            return PartyDeathOutcome::Wiped { index };
        }
        if index != self.active_index {
            return PartyDeathOutcome::BenchLost { index };
        }
        match self.next_alive_after(index, &alive) {
            Some(to) => {
                self.active_index = to;
                PartyDeathOutcome::Failover { from: index, to }
            }
            None => {
                self.wiped = true;
                PartyDeathOutcome::Wiped { index }
            }
        }
    }
}
