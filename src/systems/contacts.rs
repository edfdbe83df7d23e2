//! Distance-based contact sensing.
//!
//! Hosts without a physics engine can run [`sense_contacts`] once per frame
//! instead of calling [`Game::contact`](crate::game::Game::contact) themselves.
//! Friendly bodies (the active member, hitboxes, projectiles) are paired with
//! hostile ones (enemies, obstacles, rescues) when they are close enough to
//! touch. Only pairs that start touching on this pass are reported.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::trace;

use crate::components::attackdriver::Hitbox;
use crate::components::environment::ScrollRoot;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::partymember::{ActiveMember, PartyMember};
use crate::events::collision::CollisionEvent;
use crate::resources::contactsensor::{BODY_RADIUS, ContactSensor};
use crate::systems::environment::world_position;

pub fn sense_contacts(
    mut commands: Commands,
    mut sensor: ResMut<ContactSensor>,
    roots: Query<&MapPosition, With<ScrollRoot>>,
    bodies: Query<(
        Entity,
        &Group,
        &MapPosition,
        Option<&ChildOf>,
        Option<&Hitbox>,
    )>,
    benched: Query<(), (With<PartyMember>, Without<ActiveMember>)>,
) {
    let mut friendly: Vec<(Entity, Vec2, f32)> = Vec::new();
    let mut hostile: Vec<(Entity, Vec2)> = Vec::new();
    for (entity, group, position, parent, hitbox) in bodies.iter() {
        let pos = world_position(position, parent, &roots);
        match *group {
            // benched members share the active body's spot but are out of play
            Group::PARTY if benched.contains(entity) => {}
            Group::PARTY | Group::PROJECTILE => friendly.push((entity, pos, BODY_RADIUS)),
            Group::HITBOX => {
                let reach = hitbox.map_or(BODY_RADIUS, |h| h.radius);
                friendly.push((entity, pos, reach));
            }
            Group::ENEMY | Group::OBSTACLE | Group::RESCUE => hostile.push((entity, pos)),
            _ => {}
        }
    }

    let overlapping = friendly.iter().flat_map(|&(a, pa, reach)| {
        hostile
            .iter()
            .filter(move |(_, pb)| pa.distance(*pb) <= reach)
            .map(move |&(b, _)| (a, b))
    });
    for (a, b) in sensor.begins(overlapping) {
        trace!("contact {:?} <-> {:?}", a, b);
        commands.trigger(CollisionEvent { a, b });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::observer::On;
    use crate::components::partymember::{CharacterStats, CharacterType};

    #[derive(Resource, Default)]
    struct Seen(Vec<(Entity, Entity)>);

    fn make_world() -> World {
        let mut world = World::new();
        world.insert_resource(ContactSensor::new());
        world.init_resource::<Seen>();
        world.spawn(Observer::new(|trigger: On<CollisionEvent>, mut seen: ResMut<Seen>| {
            let event = trigger.event();
            seen.0.push((event.a, event.b));
        }));
        world.flush();
        world
    }

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(sense_contacts);
        schedule.run(world);
    }

    #[test]
    fn resting_overlap_is_reported_once() {
        let mut world = make_world();
        world.spawn((
            Group::PARTY,
            PartyMember::new(CharacterStats::new(CharacterType::Knight), 0),
            ActiveMember,
            MapPosition::new(0.0, 0.0),
        ));
        world.spawn((Group::OBSTACLE, MapPosition::new(0.5, 0.0)));

        for _ in 0..10 {
            run(&mut world);
        }
        assert_eq!(world.resource::<Seen>().0.len(), 1);
    }

    #[test]
    fn hitbox_reach_replaces_the_body_radius() {
        let mut world = make_world();
        let owner = world.spawn_empty().id();
        world.spawn((
            Group::HITBOX,
            Hitbox { owner, radius: 0.8 },
            MapPosition::new(0.0, 0.0),
        ));
        world.spawn((Group::PROJECTILE, MapPosition::new(0.0, 5.0)));
        world.spawn((Group::ENEMY, MapPosition::new(0.78, 0.0)));
        world.spawn((Group::ENEMY, MapPosition::new(0.78, 5.0)));

        run(&mut world);
        assert_eq!(world.resource::<Seen>().0.len(), 1);
    }

    #[test]
    fn scrolled_bodies_are_measured_in_world_space() {
        let mut world = make_world();
        let root = world
            .spawn((Group::SCROLL_ROOT, ScrollRoot, MapPosition::new(-10.0, 0.0)))
            .id();
        world.spawn((
            Group::PARTY,
            PartyMember::new(CharacterStats::new(CharacterType::Knight), 0),
            ActiveMember,
            MapPosition::new(0.0, 0.0),
        ));
        // local x 10 sits at world x 0 once the root has scrolled
        world.spawn((Group::ENEMY, MapPosition::new(10.0, 0.0), ChildOf(root)));
        world.spawn((Group::ENEMY, MapPosition::new(0.0, 0.0), ChildOf(root)));

        run(&mut world);
        assert_eq!(world.resource::<Seen>().0.len(), 1);
    }

    #[test]
    fn benched_members_are_not_touched() {
        let mut world = make_world();
        world.spawn((
            Group::PARTY,
            PartyMember::new(CharacterStats::new(CharacterType::Mage), 1),
            MapPosition::new(0.0, 0.0),
        ));
        world.spawn((Group::OBSTACLE, MapPosition::new(0.0, 0.0)));

        run(&mut world);
        assert!(world.resource::<Seen>().0.is_empty());
    }
}
