//! Debug domain: hotkeys, overlay text and probe gizmos.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::debug::trace::{MotionTrace, TRACE_FILE};
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::motion::step::grapple::Aim;
use crate::motion::{
    Action, BoostState, Facing, GrappleState, InputLatch, MotionState, MotionTuning,
    MovementIntent, Player,
};

/// F3 toggles the overlay and probes, F4 dumps the motion trace
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    trace: Res<MotionTrace>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        debug_state.show_probes = debug_state.show_info;
        let label = if debug_state.show_info { "on" } else { "off" };
        debug_state.set_message(format!("Motion overlay {}", label), 1.5);
    }

    if keyboard.just_pressed(KeyCode::F4) {
        match trace.write_to(std::path::Path::new(TRACE_FILE)) {
            Ok(count) => {
                info!("Wrote {} tick records to {}", count, TRACE_FILE);
                debug_state.set_message(format!("Trace saved ({} ticks)", count), 2.0);
            }
            Err(err) => {
                error!("Failed to write {}: {}", TRACE_FILE, err);
                debug_state.set_message("Trace dump failed", 2.0);
            }
        }
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

pub(crate) fn pending_edges(latch: &InputLatch) -> String {
    let pending: Vec<String> = Action::ALL
        .iter()
        .filter(|action| latch.is_pending(**action))
        .map(|action| format!("{:?}", action))
        .collect();
    if pending.is_empty() {
        "-".to_string()
    } else {
        pending.join(" ")
    }
}

/// Update the debug info overlay with current motion state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    fixed_time: Res<Time<Fixed>>,
    tuning: Res<MotionTuning>,
    latch: Res<InputLatch>,
    player_query: Query<(&Position, &MotionState, &GrappleState, &BoostState, &Facing), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let (Some((position, motion, grapple, boost, facing)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    else {
        return;
    };

    let now = fixed_time.elapsed_secs();
    let status = debug_state
        .status_message
        .as_ref()
        .map(|(message, _)| message.as_str())
        .unwrap_or("");
    **text = format!(
        "Pos: ({:.2}, {:.2})\nVel: ({:.2}, {:.2})\nGrounded: {}  Phase: {:?}\nFacing: {:?}  Early release: {}\nGrapple: {}  Tether: {:.2}\nBoost: usable {} active {}\nPending: {}\n{}",
        position.x,
        position.y,
        motion.velocity.x,
        motion.velocity.y,
        motion.grounded,
        motion.jump_phase(now, tuning.coyote_time),
        facing,
        motion.ended_jump_early,
        grapple.attached,
        grapple.tether_length(),
        boost.usable,
        boost.active,
        pending_edges(&latch),
        status,
    );
}

/// Draw the ground and ceiling probes and the grapple aim ray
pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<MotionTuning>,
    player_query: Query<(&Position, &ColliderAabb, &Facing, &MovementIntent, &MotionState), With<Player>>,
) {
    for (position, aabb, facing, intent, motion) in &player_query {
        let probe = tuning.grounder_distance;
        let bottom = Vec2::new(position.x, aabb.min.y);
        let top = Vec2::new(position.x, aabb.max.y);
        let ground_color = if motion.grounded {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.3, 0.2)
        };
        gizmos.line_2d(bottom, bottom - Vec2::Y * probe, ground_color);
        gizmos.line_2d(top, top + Vec2::Y * probe, Color::srgb(0.4, 0.6, 0.9));

        let aim = Aim::from_intent(position.0, intent.get(), *facing);
        gizmos.line_2d(
            aim.origin,
            aim.origin + *aim.direction * tuning.grapple_max_distance,
            Color::srgba(1.0, 1.0, 1.0, 0.2),
        );
    }
}

