//! Motion domain: player spawn and the grapple test level.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::motion::{
    BoostCueSprite, BoostState, Facing, GameLayer, GrapplePoint, GrappleState, Ground,
    MotionState, MotionTuning, MovementIntent, Player, RopeVisual,
};

const PLAYER_RADIUS: f32 = 0.4;
const PLAYER_LENGTH: f32 = 0.8;

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MotionTuning>) {
    info!(
        "Spawning player: max_speed={}, jump_power={} (apex {:.2}), grapple_range={}",
        tuning.max_speed,
        tuning.jump_power,
        tuning.jump_power * tuning.jump_power / (2.0 * tuning.fall_acceleration),
        tuning.grapple_max_distance
    );

    commands
        .spawn((
            // Identity & motion state
            (
                Player,
                MotionState::default(),
                GrappleState::default(),
                BoostState::default(),
                Facing::default(),
                MovementIntent::default(),
                RopeVisual::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(Vec2::new(
                    PLAYER_RADIUS * 2.0,
                    PLAYER_LENGTH + PLAYER_RADIUS * 2.0,
                )),
                ..default()
            },
            Transform::from_xyz(0.0, 2.0, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(PLAYER_RADIUS, PLAYER_LENGTH),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // Gravity is integrated by the motion core
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, GameLayer::non_character()),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                BoostCueSprite,
                Sprite {
                    color: Color::srgba(1.0, 0.6, 0.2, 0.8),
                    custom_size: Some(Vec2::new(1.2, 0.2)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, -0.1),
                Visibility::Hidden,
            ));
        });
}

fn spawn_block(commands: &mut Commands, center: Vec2, size: Vec2, grappleable: bool) {
    let (color, layers) = if grappleable {
        (
            Color::srgb(0.35, 0.45, 0.6),
            CollisionLayers::new(
                [GameLayer::Ground, GameLayer::Grappleable],
                [GameLayer::Player],
            ),
        )
    } else {
        (
            Color::srgb(0.4, 0.5, 0.4),
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        )
    };

    let mut block = commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    ));
    if grappleable {
        block.insert(GrapplePoint);
    }
}

pub(crate) fn spawn_test_level(mut commands: Commands) {
    // Floor and side walls
    spawn_block(&mut commands, Vec2::new(0.0, -1.0), Vec2::new(60.0, 2.0), false);
    spawn_block(&mut commands, Vec2::new(-31.0, 8.0), Vec2::new(2.0, 20.0), false);
    spawn_block(&mut commands, Vec2::new(31.0, 8.0), Vec2::new(2.0, 20.0), false);

    // Stepping platforms
    spawn_block(&mut commands, Vec2::new(-12.0, 4.0), Vec2::new(6.0, 0.5), false);
    spawn_block(&mut commands, Vec2::new(12.0, 6.0), Vec2::new(6.0, 0.5), false);

    // Grapple ceiling segments with a gap to swing across
    spawn_block(&mut commands, Vec2::new(-16.0, 16.0), Vec2::new(10.0, 1.0), true);
    spawn_block(&mut commands, Vec2::new(6.0, 17.0), Vec2::new(8.0, 1.0), true);
    spawn_block(&mut commands, Vec2::new(22.0, 14.0), Vec2::new(4.0, 4.0), true);
}
