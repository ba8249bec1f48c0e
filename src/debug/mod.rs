//! Debug tooling for tuning the motion core.
//!
//! Features:
//! - Motion state overlay and probe gizmos (F3)
//! - Per-tick motion trace dumped to JSON (F4)

mod state;
mod systems;
mod trace;
mod ui;

#[cfg(test)]
mod tests;

pub use state::DebugState;
pub use trace::MotionTrace;

use bevy::prelude::*;

use crate::debug::systems::{
    draw_probe_gizmos, handle_debug_hotkeys, update_debug_info_overlay, update_status_message,
};
use crate::debug::trace::record_motion_trace;
use crate::motion::MotionSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .init_resource::<MotionTrace>()
            .add_systems(
                Update,
                (handle_debug_hotkeys, update_status_message).chain(),
            )
            .add_systems(
                Update,
                update_debug_info_overlay.after(update_status_message),
            )
            .add_systems(
                Update,
                draw_probe_gizmos.run_if(|state: Res<DebugState>| state.show_probes),
            )
            .add_systems(
                FixedUpdate,
                record_motion_trace
                    .after(MotionSet::Tick)
                    .before(MotionSet::Dispatch),
            );
    }
}
