//! Power-path derivation.
//!
//! Turns a declarative breaker/subsystem snapshot into "is this wire segment
//! energized" flags and the authoritative load source. The diagram projector
//! consumes these flags verbatim; nothing else in the system mutates them.

pub mod evaluator;
pub mod flows;

pub use evaluator::evaluate;
pub use flows::{ParallelFlow, PowerFlow, SegmentFlags, SingleUnitFlow};
