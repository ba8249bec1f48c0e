//! Motion domain: draining tick outboxes into messages.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::tick::MotionOutbox;
use crate::motion::{
    GroundedChangedEvent, GrappledEvent, JumpedEvent, MotionCueEvent, MotionNotification,
};

pub(crate) fn dispatch_motion_output(
    mut outbox: ResMut<MotionOutbox>,
    mut grounded_events: MessageWriter<GroundedChangedEvent>,
    mut jumped_events: MessageWriter<JumpedEvent>,
    mut grappled_events: MessageWriter<GrappledEvent>,
    mut cue_events: MessageWriter<MotionCueEvent>,
) {
    for (entity, tick) in outbox.pending.drain(..) {
        for notification in tick.notifications {
            match notification {
                MotionNotification::GroundedChanged {
                    grounded,
                    impact_speed,
                } => {
                    grounded_events.write(GroundedChangedEvent {
                        entity,
                        grounded,
                        impact_speed,
                    });
                }
                MotionNotification::Jumped => {
                    jumped_events.write(JumpedEvent { entity });
                }
                MotionNotification::Grappled { attached } => {
                    grappled_events.write(GrappledEvent { entity, attached });
                }
            }
        }

        for cue in tick.cues {
            cue_events.write(MotionCueEvent { entity, cue });
        }
    }
}

pub(crate) fn log_motion_events(
    mut grounded_events: MessageReader<GroundedChangedEvent>,
    mut jumped_events: MessageReader<JumpedEvent>,
    mut grappled_events: MessageReader<GrappledEvent>,
) {
    for event in grounded_events.read() {
        if event.grounded {
            debug!(
                "{:?} grounded (impact speed {:.2})",
                event.entity, event.impact_speed
            );
        } else {
            debug!("{:?} airborne", event.entity);
        }
    }
    for event in jumped_events.read() {
        debug!("{:?} jumped", event.entity);
    }
    for event in grappled_events.read() {
        if event.attached {
            info!("{:?} grapple hooked", event.entity);
        } else {
            debug!("{:?} grapple missed", event.entity);
        }
    }
}
