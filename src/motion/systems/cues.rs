//! Motion domain: presentation cues (rope and boost sprite).

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::motion::{BoostCueSprite, CueCommand, MotionCueEvent, Player};

/// Rope endpoint kept for rendering; cosmetic only.
#[derive(Component, Debug, Default)]
pub struct RopeVisual {
    pub anchor: Option<Vec2>,
}

pub(crate) fn apply_motion_cues(
    mut cues: MessageReader<MotionCueEvent>,
    mut ropes: Query<&mut RopeVisual>,
    mut boost_sprites: Query<(&ChildOf, &mut Transform, &mut Visibility), With<BoostCueSprite>>,
) {
    for MotionCueEvent { entity, cue } in cues.read() {
        match *cue {
            CueCommand::TetherSet { anchor } => {
                if let Ok(mut rope) = ropes.get_mut(*entity) {
                    rope.anchor = Some(anchor);
                }
            }
            CueCommand::TetherClear => {
                if let Ok(mut rope) = ropes.get_mut(*entity) {
                    rope.anchor = None;
                }
            }
            CueCommand::BoostPlay { angle } => {
                for (parent, mut transform, mut visibility) in &mut boost_sprites {
                    if parent.parent() == *entity {
                        transform.rotation = Quat::from_rotation_z(angle);
                        *visibility = Visibility::Visible;
                    }
                }
            }
            CueCommand::BoostStop => {
                for (parent, _, mut visibility) in &mut boost_sprites {
                    if parent.parent() == *entity {
                        *visibility = Visibility::Hidden;
                    }
                }
            }
        }
    }
}

pub(crate) fn draw_rope(mut gizmos: Gizmos, ropes: Query<(&Transform, &RopeVisual), With<Player>>) {
    for (transform, rope) in &ropes {
        if let Some(anchor) = rope.anchor {
            gizmos.line_2d(
                transform.translation.truncate(),
                anchor,
                Color::srgb(0.85, 0.75, 0.5),
            );
        }
    }
}
