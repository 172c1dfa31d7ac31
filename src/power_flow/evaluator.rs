//! Combinational circuit evaluator.
//!
//! Pure and total: any well-formed [`SystemState`] maps to a full set of
//! segment flags plus the authoritative load source. Nothing here allocates,
//! fails, or remembers anything between calls.

use crate::domain::{LoadSource, SystemState, UnitLayout, UpsUnitState};

use super::flows::{ParallelFlow, PowerFlow, SegmentFlags, SingleUnitFlow};

/// Evaluate a system snapshot into per-segment energized flags.
pub fn evaluate(state: &SystemState) -> PowerFlow {
    match &state.units {
        UnitLayout::Single { unit } => PowerFlow::Single(evaluate_single(state, unit)),
        UnitLayout::Parallel { unit_a, unit_b } => {
            PowerFlow::Parallel(evaluate_parallel(state, unit_a, unit_b))
        }
    }
}

/// Load-source precedence: the maintenance bypass physically wraps around the
/// whole chassis, so when it is closed onto live mains it overrides every
/// internal path. Inverter beats static bypass because a unit in normal
/// operation holds its bypass armed as backup, not carrying.
fn derive_load_source(state: &SystemState, units: &[&UpsUnitState]) -> LoadSource {
    if state.q3_maint_bypass && state.mains_available {
        return LoadSource::Maint;
    }
    if units
        .iter()
        .any(|u| u.q4_output && u.inverter_on && u.has_dc_source())
    {
        return LoadSource::Inverter;
    }
    if units
        .iter()
        .any(|u| u.q4_output && u.static_bypass_on && state.mains_available && u.q2_bypass)
    {
        return LoadSource::Bypass;
    }
    LoadSource::None
}

fn evaluate_single(state: &SystemState, unit: &UpsUnitState) -> SingleUnitFlow {
    let mains = state.mains_available;
    let maint = state.q3_maint_bypass && mains;

    let load_source = derive_load_source(state, &[unit]);

    SingleUnitFlow {
        mains_trunk: SegmentFlags::live(mains),
        mains_to_rectifier: SegmentFlags::live(mains && unit.q1_input),
        rectifier_to_bus: SegmentFlags::live(unit.rectifier_on),
        battery_string: SegmentFlags::held(true),
        battery_to_bus: SegmentFlags {
            energized: unit.q5_battery && (unit.rectifier_on || unit.battery_connected),
            flow: unit.q5_battery && !unit.rectifier_on,
        },
        inverter_output: SegmentFlags::live(unit.inverter_on),
        bypass_trunk: SegmentFlags::held(mains),
        bypass_to_static: SegmentFlags::live(mains && unit.q2_bypass),
        static_to_output: SegmentFlags::live(unit.static_bypass_on),
        maint_trunk: SegmentFlags::held(mains),
        maint_bypass: SegmentFlags::live(maint),
        output_to_load: SegmentFlags {
            energized: unit.output_contribution() || maint,
            flow: load_source != LoadSource::None,
        },
        load_source,
        load_powered: load_source != LoadSource::None,
    }
}

fn evaluate_parallel(
    state: &SystemState,
    unit_a: &UpsUnitState,
    unit_b: &UpsUnitState,
) -> ParallelFlow {
    let mains = state.mains_available;
    let maint = state.q3_maint_bypass && mains;
    let out_a = unit_a.output_contribution();
    let out_b = unit_b.output_contribution();

    let load_source = derive_load_source(state, &[unit_a, unit_b]);

    ParallelFlow {
        input_trunk: SegmentFlags::held(mains),
        feed_a: SegmentFlags::live(mains),
        feed_b: SegmentFlags::live(mains),
        output_a: SegmentFlags::live(out_a),
        output_b: SegmentFlags::live(out_b),
        shared_load: SegmentFlags {
            energized: out_a || out_b || maint,
            flow: load_source != LoadSource::None,
        },
        maint_bypass: SegmentFlags::live(maint),
        load_source,
        load_powered: load_source != LoadSource::None,
    }
}
