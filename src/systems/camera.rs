use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::partymember::ActiveMember;
use crate::resources::camera2d::Camera2DRes;

/// Keep the camera target on the active member.
pub fn camera_follow(
    mut camera: ResMut<Camera2DRes>,
    players: Query<&MapPosition, With<ActiveMember>>,
) {
    if let Ok(player) = players.single() {
        if camera.target != player.pos {
            camera.target = player.pos;
        }
    }
}
