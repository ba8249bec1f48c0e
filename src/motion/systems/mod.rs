//! Motion domain: system modules for input, the fixed tick and presentation.

pub(crate) mod cues;
pub(crate) mod input;
pub(crate) mod notifications;
pub(crate) mod tick;

pub use cues::RopeVisual;
pub use tick::MotionOutbox;

pub(crate) use cues::{apply_motion_cues, draw_rope};
pub(crate) use input::sample_input;
pub(crate) use notifications::{dispatch_motion_output, log_motion_events};
pub(crate) use tick::run_motion_tick;
