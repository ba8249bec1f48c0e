//! Core domain: camera and window-level setup shared by every plugin.

mod systems;

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera};

/// World units rendered per screen pixel at the default zoom.
pub const CAMERA_SCALE: f32 = 1.0 / 32.0;

/// How quickly the camera closes the gap to the player, per second.
pub const CAMERA_FOLLOW_RATE: f32 = 6.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.08, 0.09, 0.12)))
            .add_systems(Startup, setup_camera)
            .add_systems(PostUpdate, follow_player.before(TransformSystems::Propagate));
    }
}
