use bevy_ecs::prelude::Resource;
use fastrand::Rng;

/// Random source shared by the directors. Seed it for reproducible runs.
#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub Rng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        GameRng(Rng::with_seed(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        GameRng(Rng::new())
    }
}
