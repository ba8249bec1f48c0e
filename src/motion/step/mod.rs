//! Motion domain: engine-free tick steps over the explicit state records.

pub(crate) mod boost;
pub(crate) mod commit;
pub(crate) mod grapple;
pub(crate) mod integrator;
pub(crate) mod jump;
pub(crate) mod pipeline;
pub(crate) mod queries;
pub(crate) mod sensor;

pub use pipeline::{MotionBody, TickClock, TickInput, TickResult, run_tick};
pub use queries::{MotionQueries, ProbeHit, SpatialMotionQueries};
