//! Contact damage and team membership.
//!
//! When the host reports a contact between two entities, a [`DamageDealer`]
//! on one side hurts the [`Health`](crate::components::health::Health) on the
//! other side unless both sides belong to the same [`Team`]. An entity's team
//! is its `Team` component, or the team of its own `DamageDealer`.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Player,
    Enemy,
    Neutral,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageDealer {
    pub amount: i32,
    pub team: Team,
}

impl DamageDealer {
    pub fn new(amount: i32, team: Team) -> Self {
        DamageDealer { amount, team }
    }

    /// Whether this dealer may hurt a target that belongs to `target_team`.
    /// Targets without any team are always fair game.
    pub fn can_hurt(&self, target_team: Option<Team>) -> bool {
        self.amount > 0 && target_team != Some(self.team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_team_is_spared() {
        let slash = DamageDealer::new(1, Team::Player);
        assert!(!slash.can_hurt(Some(Team::Player)));
        assert!(slash.can_hurt(Some(Team::Enemy)));
        assert!(slash.can_hurt(None));
        assert!(!DamageDealer::new(0, Team::Enemy).can_hurt(None));
    }
}
