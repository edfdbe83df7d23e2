//! Back-references from spawned instances to the slot they occupy.
//!
//! Directors reserve a slot in an
//! [`InstanceRegistry`](crate::resources::registry::InstanceRegistry) before
//! spawning and attach one of these components to the new entity. Removing
//! the component (normally by despawning the entity, or when a despawned
//! [`ScrollRoot`](crate::components::environment::ScrollRoot) takes its
//! children with it) releases the slot exactly once through an `on_remove`
//! hook.

use bevy_ecs::lifecycle::HookContext;
use bevy_ecs::prelude::Component;
use bevy_ecs::world::DeferredWorld;
use log::debug;

use crate::components::partymember::CharacterType;
use crate::resources::registry::InstanceRegistry;
use crate::resources::spawntable::TemplateId;

/// Instance of a spawn table template.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
#[component(on_remove = release_template_slot)]
pub struct SpawnedFrom {
    pub template: TemplateId,
}

/// Rescue pickup for a specific character.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
#[component(on_remove = release_rescue_slot)]
pub struct RescueSpawn {
    pub character: CharacterType,
}

fn release_template_slot(world: DeferredWorld, context: HookContext) {
    let Some(spawned) = world.get::<SpawnedFrom>(context.entity) else {
        return;
    };
    if let Some(registry) = world.get_resource::<InstanceRegistry<TemplateId>>() {
        registry.release(&spawned.template);
        debug!(
            "Released {} slot, {} alive",
            spawned.template,
            registry.live(&spawned.template)
        );
    }
}

fn release_rescue_slot(world: DeferredWorld, context: HookContext) {
    let Some(rescue) = world.get::<RescueSpawn>(context.entity) else {
        return;
    };
    if let Some(registry) = world.get_resource::<InstanceRegistry<CharacterType>>() {
        registry.release(&rescue.character);
    }
}
