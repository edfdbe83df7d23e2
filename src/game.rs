//! World assembly and the host-facing entry points.
//!
//! [`Game`] owns the ECS [`World`] and two schedules:
//!
//! - the frame schedule, run by [`Game::update`] at display rate: state
//!   transitions, speed ramp, scrolling, run stats, wall generation,
//!   directors, cooldowns, free-body movement and lifetimes;
//! - the fixed schedule, run by [`Game::fixed_update`] at the physics rate:
//!   ground probing and the vertical motor.
//!
//! Input, contacts and damage enter through triggered events
//! ([`Game::input`], [`Game::contact`], [`Game::deal_damage`]). Observers
//! are spawned once at construction and tagged [`Persistent`], so
//! [`Game::restart`] only tears down the run itself.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use crossbeam_channel::Receiver;
use glam::Vec2;
use log::{info, warn};

use crate::components::attackdriver::AttackDriver;
use crate::components::damagedealer::Team;
use crate::components::environment::{EnvironmentMover, ScrollRoot};
use crate::components::groundcheck::{GroundCheck, GroundContact};
use crate::components::group::Group;
use crate::components::health::Health;
use crate::components::mapposition::MapPosition;
use crate::components::partymember::{ActiveMember, CharacterType, PartyMember};
use crate::components::persistent::Persistent;
use crate::components::playermotor::PlayerMotor;
use crate::components::rigidbody::RigidBody;
use crate::events::collision::CollisionEvent;
use crate::events::combat::{ActionPerformedEvent, CooldownChangedEvent};
use crate::events::gamestate::{GameOverEvent, PauseChangedEvent, observe_gamestate_change_event};
use crate::events::health::{DamagedEvent, DealDamageEvent, HealEvent, HealedEvent};
use crate::events::input::{InputAction, InputEvent};
use crate::events::party::{ActiveMemberChangedEvent, MemberDiedEvent, PartyWipedEvent};
use crate::events::pickup::PickupCollectedEvent;
use crate::events::progress::{
    CharacterRescuedEvent, DistanceChangedEvent, ScoreChangedEvent, UnlocksChangedEvent,
};
use crate::events::spawn::SpawnedEvent;
use crate::resources::attackstyles::AttackStyles;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::contactsensor::ContactSensor;
use crate::resources::eventhub::{EventHub, GameEvent, SubscriptionId};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::party::Party;
use crate::resources::registry::InstanceRegistry;
use crate::resources::rescuedirector::RescueDirector;
use crate::resources::rescuetable::RescueSpawnTable;
use crate::resources::rng::GameRng;
use crate::resources::runstats::RunStats;
use crate::resources::spawndirector::SpawnDirector;
use crate::resources::spawntable::{SpawnTable, TemplateId};
use crate::resources::unlocks::CharacterUnlocks;
use crate::resources::wallgenerator::WallGenerator;
use crate::resources::worldtime::WorldTime;
use crate::systems::attack::{attack_cooldowns, attack_input_observer};
use crate::systems::camera::camera_follow;
use crate::systems::collision::collision_observer;
use crate::systems::contacts::sense_contacts;
use crate::systems::environment::environment_mover;
use crate::systems::eventhub::forward_to_hub;
use crate::systems::gamestate::{
    check_pending_state, party_wiped_observer, pause_input_observer, state_is_playing,
};
use crate::systems::groundcheck::ground_check;
use crate::systems::health::{damage_observer, despawn_dead_spawns, heal_observer};
use crate::systems::movement::movement;
use crate::systems::party::{party_death_observer, party_input_observer};
use crate::systems::pickup::pickup_observer;
use crate::systems::playermotor::{jump_input_observer, player_motor_fixed, player_motor_frame};
use crate::systems::rescuedirector::rescue_director;
use crate::systems::runstats::run_stats;
use crate::systems::spawndirector::{cull_passed_spawns, spawn_director};
use crate::systems::time::{update_fixed_time, update_world_time};
use crate::systems::ttl::ttl_system;
use crate::systems::wallgenerator::wall_generator;

/// Everything a run is built from.
pub struct GameOptions {
    pub config: GameConfig,
    pub enemy_table: Option<SpawnTable>,
    pub obstacle_table: Option<SpawnTable>,
    pub rescue_table: Option<RescueSpawnTable>,
    pub unlocks: CharacterUnlocks,
    /// Seed for spawn selection. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            config: GameConfig::new(),
            enemy_table: None,
            obstacle_table: None,
            rescue_table: None,
            unlocks: CharacterUnlocks::default(),
            seed: None,
        }
    }
}

impl GameOptions {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_tables(
        mut self,
        enemy_table: Option<SpawnTable>,
        obstacle_table: Option<SpawnTable>,
    ) -> Self {
        self.enemy_table = enemy_table;
        self.obstacle_table = obstacle_table;
        self
    }

    pub fn with_rescue_table(mut self, rescue_table: Option<RescueSpawnTable>) -> Self {
        self.rescue_table = rescue_table;
        self
    }

    pub fn with_unlocks(mut self, unlocks: CharacterUnlocks) -> Self {
        self.unlocks = unlocks;
        self
    }
}

pub struct Game {
    world: World,
    frame: Schedule,
    fixed: Schedule,
}

impl Game {
    pub fn new(options: GameOptions) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(1.0));
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.insert_resource(options.config);
        world.insert_resource(SpawnDirector::new(
            options.enemy_table,
            options.obstacle_table,
        ));
        world.insert_resource(RescueDirector::new(options.rescue_table));
        world.insert_resource(WallGenerator::new());
        world.insert_resource(InstanceRegistry::<TemplateId>::new());
        world.insert_resource(InstanceRegistry::<CharacterType>::new());
        world.insert_resource(match options.seed {
            Some(seed) => GameRng::seeded(seed),
            None => GameRng::default(),
        });
        world.insert_resource(RunStats::default());
        world.insert_resource(Camera2DRes::default());
        world.insert_resource(ContactSensor::new());
        world.insert_resource(AttackStyles::with_defaults());
        world.insert_resource(EventHub::new());
        world.insert_resource(options.unlocks);

        register_observers(&mut world);
        // Observers must exist before anything can trigger.
        world.flush();

        let mut game = Game {
            world,
            frame: frame_schedule(),
            fixed: fixed_schedule(),
        };
        game.spawn_run();
        game
    }

    /// Advance one display frame. `dt` is unscaled.
    pub fn update(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.frame.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Advance one physics step. `fixed_dt` is unscaled.
    pub fn fixed_update(&mut self, fixed_dt: f32) {
        update_fixed_time(&mut self.world, fixed_dt);
        self.fixed.run(&mut self.world);
    }

    /// Report a press of `action`.
    pub fn input(&mut self, action: InputAction) {
        self.world.trigger(InputEvent::pressed(action));
    }

    pub fn release(&mut self, action: InputAction) {
        self.world.trigger(InputEvent {
            action,
            pressed: false,
        });
    }

    /// Report that the host physics found `a` and `b` touching.
    pub fn contact(&mut self, a: Entity, b: Entity) {
        self.world.trigger(CollisionEvent { a, b });
    }

    /// Sense contacts by distance for hosts without their own physics. Pairs
    /// are reported once when they start touching, not on every call.
    pub fn sense_contacts(&mut self) {
        if let Err(e) = self.world.run_system_once(sense_contacts) {
            warn!("contact sensing failed: {}", e);
        }
    }

    pub fn deal_damage(&mut self, target: Entity, amount: i32) {
        self.world.trigger(DealDamageEvent {
            target,
            amount,
            source: None,
        });
    }

    pub fn heal(&mut self, target: Entity, amount: i32) {
        self.world.trigger(HealEvent { target, amount });
    }

    pub fn subscribe(&mut self) -> (SubscriptionId, Receiver<GameEvent>) {
        self.world.resource_mut::<EventHub>().subscribe()
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.world.resource_mut::<EventHub>().unsubscribe(id)
    }

    /// Throw the current run away and start a new one. Unlocks, tables,
    /// subscriptions and persistent entities are kept.
    pub fn restart(&mut self) {
        let doomed: Vec<Entity> = self
            .world
            .query_filtered::<Entity, (With<Group>, Without<Persistent>)>()
            .iter(&self.world)
            .collect();
        for entity in doomed {
            // children go with their root
            if self.world.get_entity(entity).is_ok() {
                self.world.despawn(entity);
            }
        }
        for leaked in [
            self.world.resource::<InstanceRegistry<TemplateId>>().total(),
            self.world.resource::<InstanceRegistry<CharacterType>>().total(),
        ] {
            if leaked > 0 {
                warn!("{} registry slots survived the restart", leaked);
            }
        }
        self.world.resource::<InstanceRegistry<TemplateId>>().clear();
        self.world.resource::<InstanceRegistry<CharacterType>>().clear();

        *self.world.resource_mut::<WorldTime>() = WorldTime::default().with_time_scale(1.0);
        self.world.resource_mut::<GameState>().set(GameStates::Playing);
        self.world.resource_mut::<NextGameState>().reset();
        self.world.resource_mut::<SpawnDirector>().reset();
        self.world.resource_mut::<RescueDirector>().reset();
        *self.world.resource_mut::<WallGenerator>() = WallGenerator::new();
        self.world.resource_mut::<RunStats>().reset();
        self.world.resource_mut::<ContactSensor>().clear();

        self.spawn_run();
        info!("Run restarted");
    }

    /// Forget every rescue. Takes effect on the next run's roster.
    pub fn reset_unlocks(&mut self) {
        let unlocked = {
            let mut unlocks = self.world.resource_mut::<CharacterUnlocks>();
            unlocks.reset();
            unlocks.unlocked().to_vec()
        };
        self.world.trigger(UnlocksChangedEvent { unlocked });
    }

    fn spawn_run(&mut self) {
        let config = self.world.resource::<GameConfig>().clone();
        let roster = self.world.resource::<CharacterUnlocks>().roster();
        let ground_y = config.walls.wall_y + config.walls.surface_offset;

        self.world.spawn((
            Group::SCROLL_ROOT,
            ScrollRoot,
            EnvironmentMover::new(config.player.start_speed),
            MapPosition::default(),
        ));

        let mut members = Vec::with_capacity(roster.len());
        for (index, character) in roster.into_iter().enumerate() {
            let stats = *config.stats_for(character);
            let mut member = self.world.spawn((
                Group::PARTY,
                PartyMember::new(stats, index),
                Health::new(stats.max_health),
                PlayerMotor::new(config.player.start_speed),
                RigidBody::new(),
                GroundCheck::from_config(&config.player),
                GroundContact::default(),
                AttackDriver::new(),
                Team::Player,
                MapPosition::new(0.0, ground_y),
            ));
            if index == 0 {
                member.insert(ActiveMember);
            }
            members.push(member.id());
        }
        info!("New run with {} party member(s)", members.len());
        self.world.insert_resource(Party::new(members));
        self.world.resource_mut::<Camera2DRes>().target = Vec2::new(0.0, ground_y);

        // lay the starting ground before the first physics step
        if let Err(e) = self.world.run_system_once(wall_generator) {
            warn!("Could not lay the starting walls: {}", e);
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn party(&self) -> &Party {
        self.world.resource::<Party>()
    }

    pub fn active_member(&self) -> Option<Entity> {
        self.party().active_entity()
    }

    pub fn stats(&self) -> RunStats {
        *self.world.resource::<RunStats>()
    }

    pub fn state(&self) -> GameStates {
        self.world.resource::<GameState>().get()
    }

    pub fn spawn_director(&self) -> &SpawnDirector {
        self.world.resource::<SpawnDirector>()
    }

    pub fn spawn_director_mut(&mut self) -> Mut<'_, SpawnDirector> {
        self.world.resource_mut::<SpawnDirector>()
    }

    pub fn rescue_director(&self) -> &RescueDirector {
        self.world.resource::<RescueDirector>()
    }

    pub fn rescue_director_mut(&mut self) -> Mut<'_, RescueDirector> {
        self.world.resource_mut::<RescueDirector>()
    }

    pub fn wall_generator(&self) -> &WallGenerator {
        self.world.resource::<WallGenerator>()
    }

    pub fn unlocks(&self) -> &CharacterUnlocks {
        self.world.resource::<CharacterUnlocks>()
    }

    pub fn template_registry(&self) -> &InstanceRegistry<TemplateId> {
        self.world.resource::<InstanceRegistry<TemplateId>>()
    }

    pub fn rescue_registry(&self) -> &InstanceRegistry<CharacterType> {
        self.world.resource::<InstanceRegistry<CharacterType>>()
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    /// Live entities tagged with `group`.
    pub fn count_group(&mut self, group: Group) -> usize {
        self.world
            .query::<&Group>()
            .iter(&self.world)
            .filter(|g| **g == group)
            .count()
    }
}

fn register_observers(world: &mut World) {
    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(damage_observer), Persistent));
    world.spawn((Observer::new(heal_observer), Persistent));
    world.spawn((Observer::new(despawn_dead_spawns), Persistent));
    world.spawn((Observer::new(party_death_observer), Persistent));
    world.spawn((Observer::new(party_wiped_observer), Persistent));
    world.spawn((Observer::new(party_input_observer), Persistent));
    world.spawn((Observer::new(jump_input_observer), Persistent));
    world.spawn((Observer::new(attack_input_observer), Persistent));
    world.spawn((Observer::new(pause_input_observer), Persistent));
    world.spawn((Observer::new(collision_observer), Persistent));
    world.spawn((Observer::new(pickup_observer), Persistent));

    world.spawn((Observer::new(forward_to_hub::<DamagedEvent>), Persistent));
    world.spawn((Observer::new(forward_to_hub::<HealedEvent>), Persistent));
    world.spawn((Observer::new(forward_to_hub::<MemberDiedEvent>), Persistent));
    world.spawn((Observer::new(forward_to_hub::<PartyWipedEvent>), Persistent));
    world.spawn((
        Observer::new(forward_to_hub::<ActiveMemberChangedEvent>),
        Persistent,
    ));
    world.spawn((
        Observer::new(forward_to_hub::<DistanceChangedEvent>),
        Persistent,
    ));
    world.spawn((Observer::new(forward_to_hub::<ScoreChangedEvent>), Persistent));
    world.spawn((
        Observer::new(forward_to_hub::<CharacterRescuedEvent>),
        Persistent,
    ));
    world.spawn((
        Observer::new(forward_to_hub::<UnlocksChangedEvent>),
        Persistent,
    ));
    world.spawn((Observer::new(forward_to_hub::<GameOverEvent>), Persistent));
    world.spawn((Observer::new(forward_to_hub::<PauseChangedEvent>), Persistent));
    world.spawn((Observer::new(forward_to_hub::<SpawnedEvent>), Persistent));
    world.spawn((
        Observer::new(forward_to_hub::<ActionPerformedEvent>),
        Persistent,
    ));
    world.spawn((
        Observer::new(forward_to_hub::<CooldownChangedEvent>),
        Persistent,
    ));
    world.spawn((
        Observer::new(forward_to_hub::<PickupCollectedEvent>),
        Persistent,
    ));
}

fn frame_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(check_pending_state);
    update.add_systems(player_motor_frame.run_if(state_is_playing));
    update.add_systems(environment_mover.after(player_motor_frame));
    update.add_systems(
        run_stats
            .run_if(state_is_playing)
            .after(environment_mover),
    );
    update.add_systems(camera_follow.after(environment_mover));
    update.add_systems(wall_generator.after(environment_mover));
    update.add_systems(cull_passed_spawns.after(environment_mover));
    update.add_systems(spawn_director.after(camera_follow).after(run_stats));
    update.add_systems(rescue_director.after(spawn_director));
    update.add_systems(attack_cooldowns);
    update.add_systems(movement);
    update.add_systems(ttl_system.after(movement));
    update
}

fn fixed_schedule() -> Schedule {
    let mut fixed = Schedule::default();
    fixed.add_systems(ground_check);
    fixed.add_systems(player_motor_fixed.after(ground_check));
    fixed
}
