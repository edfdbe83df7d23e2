//! Castle Run headless harness.
//!
//! Plays a seeded run without a window: a simple autopilot jumps and
//! attacks on a timer, contacts are sensed by distance in place of host
//! physics, and every gameplay event is logged.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --duration 90 --seed 7 \
//!     --enemies assets/enemies.json --rescues assets/rescues.json
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, warn};

use castlerun::events::input::InputAction;
use castlerun::game::{Game, GameOptions};
use castlerun::resources::eventhub::GameEvent;
use castlerun::resources::gameconfig::GameConfig;
use castlerun::resources::gamestate::GameStates;
use castlerun::resources::rescuetable::RescueSpawnTable;
use castlerun::resources::spawntable::SpawnTable;
use castlerun::resources::unlocks::{CharacterUnlocks, IniPrefs};

/// Castle Run headless simulation
#[derive(Parser)]
#[command(version, about = "Runs a simulated Castle Run session and logs its events.")]
struct Cli {
    /// Tuning file (INI).
    #[arg(long, default_value = "config.ini")]
    config: PathBuf,

    /// Enemy spawn table (JSON).
    #[arg(long, value_name = "PATH")]
    enemies: Option<PathBuf>,

    /// Obstacle spawn table (JSON).
    #[arg(long, value_name = "PATH")]
    obstacles: Option<PathBuf>,

    /// Rescue table (JSON).
    #[arg(long, value_name = "PATH")]
    rescues: Option<PathBuf>,

    /// Preferences file holding the unlocked characters.
    #[arg(long, default_value = "prefs.ini")]
    prefs: PathBuf,

    /// Forget rescued characters before starting.
    #[arg(long)]
    reset_unlocks: bool,

    /// RNG seed for spawn selection.
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds of simulated play.
    #[arg(long, default_value_t = 60.0)]
    duration: f32,

    /// Display frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Physics steps per second.
    #[arg(long, default_value_t = 50.0)]
    physics_hz: f32,

    /// Seconds between autopilot jumps.
    #[arg(long, default_value_t = 1.5)]
    jump_every: f32,

    /// Seconds between autopilot attacks.
    #[arg(long, default_value_t = 0.7)]
    attack_every: f32,
}

fn load_table<T>(path: Option<&PathBuf>, load: impl Fn(&PathBuf) -> Result<T, String>) -> Option<T> {
    let path = path?;
    match load(path) {
        Ok(table) => Some(table),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Periodic inputs for an unattended run.
struct Autopilot {
    jump_every: f32,
    attack_every: f32,
    next_jump: f32,
    next_attack: f32,
    attacks: u32,
}

impl Autopilot {
    fn new(jump_every: f32, attack_every: f32) -> Self {
        Autopilot {
            jump_every: jump_every.max(0.1),
            attack_every: attack_every.max(0.1),
            next_jump: jump_every,
            next_attack: attack_every,
            attacks: 0,
        }
    }

    fn actions(&mut self, now: f32) -> Vec<InputAction> {
        let mut actions = Vec::new();
        if now >= self.next_jump {
            self.next_jump += self.jump_every;
            actions.push(InputAction::Jump);
        }
        if now >= self.next_attack {
            self.next_attack += self.attack_every;
            self.attacks += 1;
            // every fourth swing uses the ability slot
            if self.attacks % 4 == 0 {
                actions.push(InputAction::Ability);
            } else {
                actions.push(InputAction::Attack);
            }
        }
        actions
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::DistanceChanged(_) | GameEvent::CooldownChanged { .. } => {
            debug!("{:?}", event)
        }
        _ => info!("{:?}", event),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}, using defaults", e);
    }

    let mut unlocks = CharacterUnlocks::new(IniPrefs::open(&cli.prefs));
    if cli.reset_unlocks {
        unlocks.reset();
    }

    let mut options = GameOptions::default()
        .with_config(config)
        .with_tables(
            load_table(cli.enemies.as_ref(), |p| SpawnTable::load_from_file(p)),
            load_table(cli.obstacles.as_ref(), |p| SpawnTable::load_from_file(p)),
        )
        .with_rescue_table(load_table(
            cli.rescues.as_ref(),
            |p| RescueSpawnTable::load_from_file(p),
        ))
        .with_unlocks(unlocks);
    if let Some(seed) = cli.seed {
        options = options.with_seed(seed);
    }

    let mut game = Game::new(options);
    let (subscription, events) = game.subscribe();

    let frame_dt = 1.0 / cli.fps.max(1.0);
    let fixed_dt = 1.0 / cli.physics_hz.max(1.0);
    let mut autopilot = Autopilot::new(cli.jump_every, cli.attack_every);
    let mut accumulator = 0.0;
    let mut clock = 0.0;

    info!(
        "Simulating {:.0}s at {:.0} fps / {:.0} Hz",
        cli.duration, cli.fps, cli.physics_hz
    );
    while clock < cli.duration {
        for action in autopilot.actions(clock) {
            game.input(action);
        }

        accumulator += frame_dt;
        while accumulator >= fixed_dt {
            game.fixed_update(fixed_dt);
            accumulator -= fixed_dt;
        }
        game.update(frame_dt);

        game.sense_contacts();
        for event in events.try_iter() {
            log_event(&event);
        }

        clock += frame_dt;
        if game.state() == GameStates::GameOver {
            break;
        }
    }
    game.unsubscribe(subscription);

    let stats = game.stats();
    info!(
        "Finished after {:.1}s: distance {:.1}, score {}, {} spawned, {} capped, {} rescues, unlocked {:?}",
        stats.time_alive(),
        stats.distance(),
        stats.score(),
        game.spawn_director().spawned_total(),
        game.spawn_director().capped_attempts(),
        game.rescue_director().spawned_total(),
        game.unlocks().unlocked()
    );
}
