//! Motion domain: components, state records and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, platforms, ceilings)
    Ground,
    /// Surfaces a grapple can attach to
    Grappleable,
    /// The player character
    Player,
}

impl GameLayer {
    /// Everything the sensor treats as solid: all layers except the character.
    pub fn non_character() -> [GameLayer; 3] {
        [GameLayer::Default, GameLayer::Ground, GameLayer::Grappleable]
    }
}

#[derive(Component, Debug)]
pub struct Player;

/// Grounding, jump timing and the accumulated velocity for one character.
///
/// Owned by the tick pipeline; nothing outside it writes these fields.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MotionState {
    pub velocity: Vec2,
    pub grounded: bool,
    pub last_grounded_time: f32,
    pub last_jump_pressed_time: f32,
    pub coyote_available: bool,
    pub buffered_jump_available: bool,
    pub ended_jump_early: bool,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            grounded: false,
            last_grounded_time: f32::NEG_INFINITY,
            last_jump_pressed_time: f32::NEG_INFINITY,
            coyote_available: false,
            buffered_jump_available: false,
            ended_jump_early: false,
        }
    }
}

/// Coarse jump phase, derived from [`MotionState`] for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    GroundedIdle,
    CoyoteEligible,
    CoyoteExpired,
    Jumping,
}

impl MotionState {
    pub fn jump_phase(&self, now: f32, coyote_time: f32) -> JumpPhase {
        if self.grounded {
            JumpPhase::GroundedIdle
        } else if self.velocity.y > 0.0 && !self.coyote_available {
            JumpPhase::Jumping
        } else if self.coyote_available && now < self.last_grounded_time + coyote_time {
            JumpPhase::CoyoteEligible
        } else {
            JumpPhase::CoyoteExpired
        }
    }
}

/// Slack distance constraint between the character and a grapple anchor.
///
/// Only limits extension beyond `max_length`; never pulls the character in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TetherConstraint {
    pub anchor: Vec2,
    pub max_length: f32,
    /// Set when attached while grounded: the length follows the body inward.
    pub shrink_allowed: bool,
}

#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct GrappleState {
    pub attached: bool,
    pub tether: Option<TetherConstraint>,
    pub jump_locked: bool,
}

impl GrappleState {
    pub fn anchor(&self) -> Option<Vec2> {
        self.tether.map(|t| t.anchor)
    }

    pub fn tether_length(&self) -> f32 {
        self.tether.map_or(0.0, |t| t.max_length)
    }

    /// Grapple can be fired only while nothing is attached.
    pub fn usable(&self) -> bool {
        !self.attached
    }
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoostState {
    pub usable: bool,
    pub active: bool,
    pub fired_this_attachment: bool,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Current movement intent of a character, readable by other systems.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MovementIntent(pub(crate) Vec2);

impl MovementIntent {
    pub fn get(&self) -> Vec2 {
        self.0
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for colliders the grapple can hook into
#[derive(Component, Debug)]
pub struct GrapplePoint;

/// Child sprite showing the boost cue
#[derive(Component, Debug)]
pub struct BoostCueSprite;
