//! bevy_ecs behaviour the gameplay core depends on.
//!
//! Run after upgrading bevy_ecs to catch semantic changes early:
//!
//! ```sh
//! cargo test --test ecs_compat_integration
//! ```

use bevy_ecs::lifecycle::HookContext;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use bevy_ecs::world::DeferredWorld;

#[derive(Resource, Default)]
struct Released(u32);

#[derive(Component)]
#[component(on_remove = count_release)]
struct Slot;

fn count_release(mut world: DeferredWorld, _context: HookContext) {
    if let Some(mut released) = world.get_resource_mut::<Released>() {
        released.0 += 1;
    }
}

#[derive(Component)]
struct Root;

#[derive(Event, Clone, Copy)]
struct Ping(u32);

#[derive(Event, Clone, Copy)]
struct Pong(u32);

#[derive(Resource, Default)]
struct Log(Vec<String>);

#[test]
fn despawning_a_root_runs_remove_hooks_on_children() {
    let mut world = World::new();
    world.init_resource::<Released>();
    let root = world.spawn(Root).id();
    for _ in 0..3 {
        world.spawn((Slot, ChildOf(root)));
    }
    world.spawn(Slot);

    world.despawn(root);

    assert_eq!(world.resource::<Released>().0, 3);
    assert_eq!(world.query::<&Slot>().iter(&world).count(), 1);
}

#[test]
fn remove_hook_fires_once_for_try_despawn_twice() {
    let mut world = World::new();
    world.init_resource::<Released>();
    let slot = world.spawn(Slot).id();

    let mut schedule = Schedule::default();
    schedule.add_systems(move |mut commands: Commands| {
        commands.entity(slot).try_despawn();
        commands.entity(slot).try_despawn();
    });
    schedule.run(&mut world);

    assert_eq!(world.resource::<Released>().0, 1);
}

#[test]
fn observers_chain_triggers_in_order() {
    let mut world = World::new();
    world.init_resource::<Log>();
    world.spawn(Observer::new(
        |trigger: On<Ping>, mut commands: Commands, mut log: ResMut<Log>| {
            let n = trigger.event().0;
            log.0.push(format!("ping {n}"));
            commands.trigger(Pong(n + 1));
        },
    ));
    world.spawn(Observer::new(|trigger: On<Pong>, mut log: ResMut<Log>| {
        log.0.push(format!("pong {}", trigger.event().0));
    }));
    world.flush();

    world.trigger(Ping(1));
    world.trigger(Ping(10));

    assert_eq!(
        world.resource::<Log>().0,
        vec!["ping 1", "pong 2", "ping 10", "pong 11"]
    );
}

#[test]
fn commands_from_an_observer_are_applied_after_trigger() {
    let mut world = World::new();
    world.spawn(Observer::new(|_trigger: On<Ping>, mut commands: Commands| {
        commands.spawn(Root);
    }));
    world.flush();

    world.trigger(Ping(0));

    assert_eq!(world.query::<&Root>().iter(&world).count(), 1);
}

#[test]
fn single_reports_missing_and_duplicate_matches() {
    let mut world = World::new();
    let count = |world: &mut World| {
        world
            .run_system_once(|roots: Query<Entity, With<Root>>| roots.single().is_ok())
            .unwrap_or(false)
    };

    assert!(!count(&mut world));
    world.spawn(Root);
    assert!(count(&mut world));
    world.spawn(Root);
    assert!(!count(&mut world));
}

#[test]
fn run_if_skips_systems_while_false() {
    #[derive(Resource)]
    struct Enabled(bool);

    let mut world = World::new();
    world.insert_resource(Enabled(false));
    world.init_resource::<Released>();

    let mut schedule = Schedule::default();
    schedule.add_systems(
        (|mut counter: ResMut<Released>| counter.0 += 1)
            .run_if(|enabled: Res<Enabled>| enabled.0),
    );
    schedule.run(&mut world);
    assert_eq!(world.resource::<Released>().0, 0);

    world.resource_mut::<Enabled>().0 = true;
    schedule.run(&mut world);
    assert_eq!(world.resource::<Released>().0, 1);
}
