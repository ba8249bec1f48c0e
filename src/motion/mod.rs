//! Motion domain: character motion core plugin wiring and public exports.

mod bootstrap;
mod components;
mod events;
mod resources;
pub(crate) mod step;
pub(crate) mod systems;


pub use components::{
    BoostCueSprite, BoostState, Facing, GameLayer, GrapplePoint, GrappleState, Ground, JumpPhase,
    MotionState, MovementIntent, Player, TetherConstraint,
};
pub use events::{
    CueCommand, GrappledEvent, GroundedChangedEvent, JumpedEvent, MotionCueEvent,
    MotionNotification, TickOutbox,
};
pub use resources::{
    Action, InputLatch, InputSettings, InputSnapshot, LatchedEdges, MotionTuning,
};
pub use systems::{MotionOutbox, RopeVisual};

use bevy::prelude::*;

use crate::motion::bootstrap::{spawn_player, spawn_test_level};
use crate::motion::systems::{
    apply_motion_cues, dispatch_motion_output, draw_rope, log_motion_events, run_motion_tick,
    sample_input,
};

/// System sets of the fixed tick, for ordering collaborators against it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MotionSet {
    Tick,
    Dispatch,
}

pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionTuning>()
            .init_resource::<InputSettings>()
            .init_resource::<InputSnapshot>()
            .init_resource::<InputLatch>()
            .init_resource::<MotionOutbox>()
            .add_message::<GroundedChangedEvent>()
            .add_message::<JumpedEvent>()
            .add_message::<GrappledEvent>()
            .add_message::<MotionCueEvent>()
            .configure_sets(FixedUpdate, (MotionSet::Tick, MotionSet::Dispatch).chain())
            .add_systems(Startup, (spawn_test_level, spawn_player))
            .add_systems(Update, sample_input)
            .add_systems(FixedUpdate, run_motion_tick.in_set(MotionSet::Tick))
            .add_systems(FixedUpdate, dispatch_motion_output.in_set(MotionSet::Dispatch))
            .add_systems(
                Update,
                (apply_motion_cues, draw_rope, log_motion_events)
                    .chain()
                    .after(sample_input),
            );
    }
}
