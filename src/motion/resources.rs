//! Motion domain: tuning, input snapshot and the pending-edge latch.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionTuning {
    pub max_speed: f32,
    pub acceleration: f32,
    pub ground_deceleration: f32,
    pub air_deceleration: f32,
    /// Constant downward velocity held while grounded; must be negative.
    pub grounding_force: f32,
    pub grounder_distance: f32,
    pub jump_power: f32,
    pub max_fall_speed: f32,
    pub fall_acceleration: f32,
    pub jump_end_early_gravity_modifier: f32,
    pub coyote_time: f32,
    pub jump_buffer: f32,
    pub grapple_max_distance: f32,
    /// Fraction of the attach distance kept as tether length.
    pub tether_slack_ratio: f32,
    /// Share of a tether overshoot corrected per tick.
    pub tether_correction: f32,
    pub boost_force: f32,
    pub boost_once_per_attachment: bool,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            max_speed: 14.0,
            acceleration: 120.0,
            ground_deceleration: 60.0,
            air_deceleration: 30.0,
            grounding_force: -1.5,
            grounder_distance: 0.05,
            jump_power: 36.0,
            max_fall_speed: 40.0,
            fall_acceleration: 110.0,
            jump_end_early_gravity_modifier: 3.0,
            coyote_time: 0.15,
            jump_buffer: 0.2,
            grapple_max_distance: 20.0,
            tether_slack_ratio: 0.8,
            tether_correction: 0.2,
            boost_force: 12.0,
            boost_once_per_attachment: false,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputSettings {
    /// Snap analog axes to -1/0/1 once past the dead zone.
    pub snap_input: bool,
    pub horizontal_dead_zone: f32,
    pub vertical_dead_zone: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            snap_input: true,
            horizontal_dead_zone: 0.1,
            vertical_dead_zone: 0.3,
        }
    }
}

/// Normalized intent for one rendered frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub move_axes: Vec2,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub grapple_pressed: bool,
    pub grapple_released: bool,
    pub boost_pressed: bool,
    pub boost_held: bool,
    pub boost_released: bool,
}

/// Discrete input edges the tick pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
    GrapplePress,
    GrappleRelease,
    BoostPress,
    BoostRelease,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Jump,
        Action::GrapplePress,
        Action::GrappleRelease,
        Action::BoostPress,
        Action::BoostRelease,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Edges drained from the latch for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatchedEdges {
    pending: [bool; 5],
    /// Fixed-clock time of the latest jump press, if one is pending.
    pub jump_pressed_at: Option<f32>,
}

impl LatchedEdges {
    pub fn has(&self, action: Action) -> bool {
        self.pending[action.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.pending.iter().any(|p| *p)
    }
}

/// Pending input edges, set when sampled and cleared when a tick drains them.
///
/// Frames may run zero or several fixed ticks; the latch makes every edge
/// reach exactly one tick.
#[derive(Resource, Debug, Default)]
pub struct InputLatch {
    edges: LatchedEdges,
}

impl InputLatch {
    pub fn latch(&mut self, action: Action) {
        self.edges.pending[action.index()] = true;
    }

    pub fn latch_jump(&mut self, pressed_at: f32) {
        self.latch(Action::Jump);
        self.edges.jump_pressed_at = Some(pressed_at);
    }

    /// Latch every edge present in a frame snapshot.
    pub fn latch_snapshot(&mut self, snapshot: &InputSnapshot, now: f32) {
        if snapshot.jump_pressed {
            self.latch_jump(now);
        }
        if snapshot.grapple_pressed {
            self.latch(Action::GrapplePress);
        }
        if snapshot.grapple_released {
            self.latch(Action::GrappleRelease);
        }
        if snapshot.boost_pressed {
            self.latch(Action::BoostPress);
        }
        if snapshot.boost_released {
            self.latch(Action::BoostRelease);
        }
    }

    pub fn is_pending(&self, action: Action) -> bool {
        self.edges.has(action)
    }

    /// Take all pending edges at once, leaving the latch empty.
    pub fn drain(&mut self) -> LatchedEdges {
        std::mem::take(&mut self.edges)
    }
}
