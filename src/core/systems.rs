//! Core domain: camera systems.

use bevy::prelude::*;

use crate::core::{CAMERA_FOLLOW_RATE, CAMERA_SCALE};
use crate::motion::Player;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Ease the camera toward the player; z is left untouched.
pub(crate) fn follow_player(
    time: Res<Time>,
    player: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera: Query<&mut Transform, With<Camera2d>>,
) {
    let (Ok(target), Ok(mut camera)) = (player.single(), camera.single_mut()) else {
        return;
    };
    let t = (CAMERA_FOLLOW_RATE * time.delta_secs()).min(1.0);
    let next = camera
        .translation
        .truncate()
        .lerp(target.translation.truncate(), t);
    camera.translation.x = next.x;
    camera.translation.y = next.y;
}
