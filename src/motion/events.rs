//! Motion domain: outbound notifications and cue commands.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired on every grounded transition, never on steady state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundedChangedEvent {
    pub entity: Entity,
    pub grounded: bool,
    /// Absolute vertical speed when landing, zero when leaving ground.
    pub impact_speed: f32,
}

impl Message for GroundedChangedEvent {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpedEvent {
    pub entity: Entity,
}

impl Message for JumpedEvent {}

/// Fired on every grapple attempt, whether or not it hooked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrappledEvent {
    pub entity: Entity,
    pub attached: bool,
}

impl Message for GrappledEvent {}

/// Notification produced inside a tick, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionNotification {
    GroundedChanged { grounded: bool, impact_speed: f32 },
    Jumped,
    Grappled { attached: bool },
}

/// Fire-and-forget presentation commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CueCommand {
    BoostPlay { angle: f32 },
    BoostStop,
    TetherSet { anchor: Vec2 },
    TetherClear,
}

/// Targeted cue command, as written to the message queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionCueEvent {
    pub entity: Entity,
    pub cue: CueCommand,
}

impl Message for MotionCueEvent {}

/// Everything a tick wants to tell the outside world.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TickOutbox {
    pub notifications: Vec<MotionNotification>,
    pub cues: Vec<CueCommand>,
}

impl TickOutbox {
    pub fn notify(&mut self, notification: MotionNotification) {
        self.notifications.push(notification);
    }

    pub fn cue(&mut self, cue: CueCommand) {
        self.cues.push(cue);
    }
}
