//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events
//! after successful record-store mutations. Views that derive data from the
//! deals or the profile subscribe through a sink and recompute on change.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
