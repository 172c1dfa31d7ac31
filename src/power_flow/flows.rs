use serde::Serialize;

use crate::domain::LoadSource;

/// Derived render state for one wire segment.
///
/// `energized` means the copper is at potential; `flow` additionally marks the
/// segment as the active current path and drives the animated overlay. A
/// segment can be energized without flow (battery floating on a rectifier-fed
/// DC bus), never the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentFlags {
    pub energized: bool,
    pub flow: bool,
}

impl SegmentFlags {
    /// Energized and carrying current together.
    pub fn live(on: bool) -> Self {
        Self {
            energized: on,
            flow: on,
        }
    }

    /// At potential but not the active current path.
    pub fn held(on: bool) -> Self {
        Self {
            energized: on,
            flow: false,
        }
    }

    pub const OFF: Self = Self {
        energized: false,
        flow: false,
    };
}

/// Energized flags for every wire segment of the single-unit topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SingleUnitFlow {
    /// Utility trunk up to the Q1/Q2/Q3 tap points.
    pub mains_trunk: SegmentFlags,
    pub mains_to_rectifier: SegmentFlags,
    /// Rectifier output onto the DC bus.
    pub rectifier_to_bus: SegmentFlags,
    /// Battery string stub below Q5; always at battery potential.
    pub battery_string: SegmentFlags,
    /// Q5 to the DC bus. Flow only when the battery is the active DC source.
    pub battery_to_bus: SegmentFlags,
    pub inverter_output: SegmentFlags,
    /// Bypass tap before Q2.
    pub bypass_trunk: SegmentFlags,
    pub bypass_to_static: SegmentFlags,
    pub static_to_output: SegmentFlags,
    /// Maintenance tap before Q3, drawn dashed.
    pub maint_trunk: SegmentFlags,
    /// Q3 wrap-around run to the load bus.
    pub maint_bypass: SegmentFlags,
    pub output_to_load: SegmentFlags,
    pub load_source: LoadSource,
    pub load_powered: bool,
}

/// Energized flags for the dual-unit parallel topology. The two chassis render
/// as atomic blocks, so per-unit internals reduce to one contribution segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParallelFlow {
    pub input_trunk: SegmentFlags,
    pub feed_a: SegmentFlags,
    pub feed_b: SegmentFlags,
    /// Unit output onto the shared bus: `q4 && (inverter || static bypass)`.
    pub output_a: SegmentFlags,
    pub output_b: SegmentFlags,
    /// Shared bus to the load: OR of both contributions.
    pub shared_load: SegmentFlags,
    pub maint_bypass: SegmentFlags,
    pub load_source: LoadSource,
    pub load_powered: bool,
}

/// Evaluator result, matching the state's unit layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view_mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerFlow {
    Single(SingleUnitFlow),
    Parallel(ParallelFlow),
}

impl PowerFlow {
    pub fn load_source(&self) -> LoadSource {
        match self {
            PowerFlow::Single(f) => f.load_source,
            PowerFlow::Parallel(f) => f.load_source,
        }
    }

    pub fn load_powered(&self) -> bool {
        match self {
            PowerFlow::Single(f) => f.load_powered,
            PowerFlow::Parallel(f) => f.load_powered,
        }
    }
}
