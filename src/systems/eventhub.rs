use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::resources::eventhub::{EventHub, GameEvent};

/// Copy an in-world event into the [`EventHub`]. Registered once per
/// forwarded event type.
pub fn forward_to_hub<E>(trigger: On<E>, hub: Option<ResMut<EventHub>>)
where
    E: Event + Clone,
    GameEvent: From<E>,
{
    if let Some(mut hub) = hub {
        if hub.subscriber_count() > 0 {
            hub.publish(GameEvent::from(trigger.event().clone()));
        }
    }
}
