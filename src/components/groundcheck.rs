//! Ground probing for player bodies.
//!
//! [`GroundCheck`] describes the probe (an offset from the body pivot and a
//! radius). The [`ground_check`](crate::systems::groundcheck::ground_check)
//! system samples the live wall segments each fixed step and writes the
//! result into [`GroundContact`]. A host with its own physics may write
//! `GroundContact` directly instead.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::resources::gameconfig::PlayerConfig;

/// How far below a surface the probe may sink and still count as supported.
/// Covers one fast fixed step of penetration before the motor snaps back up.
pub const GROUND_SINK_TOLERANCE: f32 = 1.0;

#[derive(Component, Debug, Clone, Copy)]
pub struct GroundCheck {
    pub offset: Vec2,
    pub radius: f32,
}

impl GroundCheck {
    pub fn from_config(config: &PlayerConfig) -> Self {
        GroundCheck {
            offset: config.ground_check_offset,
            radius: config.ground_check_radius,
        }
    }

    /// Whether a flat surface at `surface_y` spanning
    /// `[center_x - half_width, center_x + half_width]` supports the probe.
    pub fn supports(&self, body: Vec2, center_x: f32, half_width: f32, surface_y: f32) -> bool {
        let probe = body + self.offset;
        let horizontal = (probe.x - center_x).abs() <= half_width + self.radius;
        let above = probe.y - surface_y;
        horizontal && above <= self.radius && above >= -GROUND_SINK_TOLERANCE
    }
}

impl Default for GroundCheck {
    fn default() -> Self {
        Self::from_config(&PlayerConfig::default())
    }
}

/// Latest ground sample for a body.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    pub grounded: bool,
    pub normal: Vec2,
    /// World height of the supporting surface, when grounded.
    pub surface_y: Option<f32>,
}

impl Default for GroundContact {
    fn default() -> Self {
        GroundContact {
            grounded: false,
            normal: Vec2::Y,
            surface_y: None,
        }
    }
}

impl GroundContact {
    pub fn on_surface(surface_y: f32) -> Self {
        GroundContact {
            grounded: true,
            normal: Vec2::Y,
            surface_y: Some(surface_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standing_on_segment_is_supported() {
        let check = GroundCheck::default();
        assert!(check.supports(Vec2::new(0.0, -3.0), 1.0, 2.5, -3.0));
    }

    #[test]
    fn gap_and_height_are_not_supported() {
        let check = GroundCheck::default();
        // beside the segment
        assert!(!check.supports(Vec2::new(10.0, -3.0), 1.0, 2.5, -3.0));
        // mid jump
        assert!(!check.supports(Vec2::new(0.0, -1.0), 1.0, 2.5, -3.0));
        // fell through
        assert!(!check.supports(Vec2::new(0.0, -6.0), 1.0, 2.5, -3.0));
    }
}
