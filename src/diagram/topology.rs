//! Diagram layouts.
//!
//! Fixed block and wire-run coordinates for the two topologies, in logical
//! (pre-projection) space. Wire paint comes straight from the evaluator's
//! segment flags; breaker glyphs mirror breaker booleans regardless of whether
//! current actually flows through them.

use crate::domain::{ComponentId, SystemState, UnitLayout, UpsUnitState};
use crate::power_flow::{self, ParallelFlow, PowerFlow, SegmentFlags, SingleUnitFlow};

use super::iso::{p3, Point3};
use super::palette::{
    load_color, Color, C_BATTERY, C_BYPASS, C_INVERTER, C_MAINS, C_OFF,
};
use super::scene::{Scene, WireStyle};

pub const SCENE_WIDTH: f64 = 800.0;
pub const SCENE_HEIGHT: f64 = 400.0;

/// Evaluate a state and project it into a renderable scene.
pub fn project_state(state: &SystemState) -> Scene {
    match (power_flow::evaluate(state), &state.units) {
        (PowerFlow::Single(flow), UnitLayout::Single { unit }) => {
            single_unit_scene(state, unit, &flow)
        }
        (PowerFlow::Parallel(flow), UnitLayout::Parallel { unit_a, unit_b }) => {
            parallel_scene(state, unit_a, unit_b, &flow)
        }
        // evaluate() matches on the same layout it was handed.
        _ => unreachable!("evaluator layout mismatch"),
    }
}

fn wire(color: Color, flags: SegmentFlags) -> WireStyle {
    WireStyle {
        color,
        energized: flags.energized,
        flow: flags.energized && flags.flow,
        dashed: false,
    }
}

fn dashed_wire(color: Color, flags: SegmentFlags) -> WireStyle {
    WireStyle {
        dashed: true,
        ..wire(color, flags)
    }
}

fn single_unit_scene(state: &SystemState, unit: &UpsUnitState, flow: &SingleUnitFlow) -> Scene {
    let mut scene = Scene::new(SCENE_WIDTH, SCENE_HEIGHT);
    let load = load_color(flow.load_source);

    // Mains path along y = 0.
    scene.push_wire(
        &[p3(-100.0, 0.0, 0.0), p3(0.0, 0.0, 0.0)],
        wire(C_MAINS, flow.mains_trunk),
    );
    scene.push_wire(
        &[p3(0.0, 0.0, 0.0), p3(50.0, 0.0, 0.0)],
        wire(C_MAINS, flow.mains_to_rectifier),
    );

    // DC bus between rectifier and inverter.
    scene.push_wire(
        &[p3(100.0, 0.0, 0.0), p3(150.0, 0.0, 0.0)],
        wire(C_INVERTER, flow.rectifier_to_bus),
    );

    // Battery riser joining the DC bus at x = 125.
    scene.push_wire(
        &[p3(125.0, 150.0, 0.0), p3(125.0, 100.0, 0.0)],
        wire(C_BATTERY, flow.battery_string),
    );
    scene.push_wire(
        &[p3(125.0, 100.0, 0.0), p3(125.0, 0.0, 0.0)],
        wire(C_BATTERY, flow.battery_to_bus),
    );

    // Inverter output to the Q4 junction.
    scene.push_wire(
        &[p3(200.0, 0.0, 0.0), p3(250.0, 0.0, 0.0)],
        wire(C_INVERTER, flow.inverter_output),
    );
    scene.push_wire(
        &[p3(250.0, 0.0, 0.0), p3(300.0, 0.0, 0.0)],
        wire(C_INVERTER, flow.inverter_output),
    );

    // Bypass lane along y = 80, merging after the static switch.
    scene.push_wire(
        &[p3(-100.0, 80.0, 0.0), p3(0.0, 80.0, 0.0)],
        wire(C_BYPASS, flow.bypass_trunk),
    );
    scene.push_wire(
        &[p3(0.0, 80.0, 0.0), p3(200.0, 80.0, 0.0)],
        wire(C_BYPASS, flow.bypass_to_static),
    );
    scene.push_wire(
        &[
            p3(200.0, 80.0, 0.0),
            p3(250.0, 80.0, 0.0),
            p3(250.0, 0.0, 0.0),
        ],
        wire(C_BYPASS, flow.static_to_output),
    );

    // Maintenance wrap-around along y = -80, rejoining after Q4.
    scene.push_wire(
        &[p3(-100.0, -80.0, 0.0), p3(0.0, -80.0, 0.0)],
        dashed_wire(C_BYPASS, flow.maint_trunk),
    );
    scene.push_wire(
        &[
            p3(0.0, -80.0, 0.0),
            p3(350.0, -80.0, 0.0),
            p3(350.0, 0.0, 0.0),
        ],
        wire(C_BYPASS, flow.maint_bypass),
    );

    // Final run to the load, painted by whichever source carries it.
    scene.push_wire(
        &[p3(300.0, 0.0, 0.0), p3(400.0, 0.0, 0.0)],
        wire(load, flow.output_to_load),
    );

    scene.push_breaker(p3(0.0, 0.0, 10.0), unit.q1_input, C_INVERTER, "Q1 Input", ComponentId::Q1);
    scene.push_block(
        p3(50.0, -20.0, 0.0),
        40.0,
        "RECT",
        "AC/DC",
        unit.rectifier_on,
        C_INVERTER,
        ComponentId::Rectifier,
    );

    scene.push_breaker(p3(125.0, 100.0, 10.0), unit.q5_battery, C_INVERTER, "Q5 Bat", ComponentId::Q5);
    scene.push_block(
        p3(105.0, 140.0, 0.0),
        40.0,
        "BATTERY",
        "DC Source",
        true,
        C_BATTERY,
        ComponentId::Battery,
    );

    scene.push_block(
        p3(150.0, -20.0, 0.0),
        40.0,
        "INV",
        "DC/AC",
        unit.inverter_on,
        C_INVERTER,
        ComponentId::Inverter,
    );

    scene.push_breaker(p3(0.0, 80.0, 10.0), unit.q2_bypass, C_BYPASS, "Q2 Byp", ComponentId::Q2);
    scene.push_block(
        p3(200.0, 60.0, 0.0),
        40.0,
        "STS",
        "SCR",
        unit.static_bypass_on,
        C_BYPASS,
        ComponentId::StaticSwitch,
    );

    scene.push_breaker(
        p3(0.0, -80.0, 10.0),
        state.q3_maint_bypass,
        C_BYPASS,
        "Q3 Maint",
        ComponentId::Q3,
    );
    scene.push_breaker(p3(300.0, 0.0, 10.0), unit.q4_output, C_INVERTER, "Q4 Out", ComponentId::Q4);

    scene.push_load(p3(400.0, 0.0, 0.0), load, flow.load_powered);

    scene
}

fn unit_block_color(unit: &UpsUnitState) -> Color {
    if unit.inverter_on {
        C_INVERTER
    } else if unit.static_bypass_on {
        C_BYPASS
    } else {
        C_OFF
    }
}

fn unit_block_sub_label(unit: &UpsUnitState) -> &'static str {
    if unit.inverter_on {
        "Online"
    } else if unit.static_bypass_on {
        "Bypass"
    } else {
        "Off"
    }
}

fn parallel_scene(
    state: &SystemState,
    unit_a: &UpsUnitState,
    unit_b: &UpsUnitState,
    flow: &ParallelFlow,
) -> Scene {
    let mut scene = Scene::new(SCENE_WIDTH, SCENE_HEIGHT);
    let load = load_color(flow.load_source);

    // Common input bus splitting to both chassis.
    scene.push_wire(
        &[p3(-100.0, 50.0, 0.0), p3(-50.0, 50.0, 0.0)],
        wire(C_MAINS, flow.input_trunk),
    );
    scene.push_wire(
        &[p3(-50.0, 50.0, 0.0), p3(-50.0, 0.0, 0.0), p3(0.0, 0.0, 0.0)],
        wire(C_MAINS, flow.feed_a),
    );
    scene.push_wire(
        &[
            p3(-50.0, 50.0, 0.0),
            p3(-50.0, 100.0, 0.0),
            p3(0.0, 100.0, 0.0),
        ],
        wire(C_MAINS, flow.feed_b),
    );

    scene.push_block(
        p3(0.0, -20.0, 0.0),
        40.0,
        "UPS A",
        unit_block_sub_label(unit_a),
        unit_a.inverter_on || unit_a.static_bypass_on,
        unit_block_color(unit_a),
        ComponentId::UnitA,
    );
    scene.push_breaker(p3(-20.0, 0.0, 0.0), unit_a.q1_input, C_INVERTER, "Q1", ComponentId::Q1);
    scene.push_breaker(p3(70.0, 0.0, 0.0), unit_a.q4_output, C_INVERTER, "Q4", ComponentId::Q4);

    scene.push_block(
        p3(0.0, 80.0, 0.0),
        40.0,
        "UPS B",
        unit_block_sub_label(unit_b),
        unit_b.inverter_on || unit_b.static_bypass_on,
        unit_block_color(unit_b),
        ComponentId::UnitB,
    );
    scene.push_breaker(p3(-20.0, 100.0, 0.0), unit_b.q1_input, C_INVERTER, "Q1", ComponentId::Q1);
    scene.push_breaker(p3(70.0, 100.0, 0.0), unit_b.q4_output, C_INVERTER, "Q4", ComponentId::Q4);

    // Paralleling output bus.
    scene.push_wire(
        &[p3(70.0, 0.0, 0.0), p3(150.0, 0.0, 0.0), p3(150.0, 50.0, 0.0)],
        wire(load, flow.output_a),
    );
    scene.push_wire(
        &[
            p3(70.0, 100.0, 0.0),
            p3(150.0, 100.0, 0.0),
            p3(150.0, 50.0, 0.0),
        ],
        wire(load, flow.output_b),
    );

    // Maintenance wrap-around, present in parallel installs too.
    scene.push_wire(
        &[
            p3(-100.0, -30.0, 0.0),
            p3(250.0, -30.0, 0.0),
            p3(250.0, 50.0, 0.0),
        ],
        dashed_wire(C_BYPASS, flow.maint_bypass),
    );

    // Shared feed to the load.
    scene.push_wire(
        &[p3(150.0, 50.0, 0.0), p3(250.0, 50.0, 0.0)],
        wire(load, flow.shared_load),
    );

    scene.push_load(p3(250.0, 50.0, 0.0), load, flow.load_powered);

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::scene::Primitive;
    use crate::domain::{LoadSource, UpsUnitState};

    fn wires(scene: &Scene) -> Vec<&WireStyle> {
        scene
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Wire { style, .. } => Some(style),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn single_scene_has_full_wire_set() {
        let scene = project_state(&SystemState::single(UpsUnitState::normal_online('A')));
        assert_eq!(wires(&scene).len(), 13);
    }

    #[test]
    fn dark_state_paints_nothing_energized() {
        let mut state = SystemState::single(UpsUnitState::all_off('A'));
        state.mains_available = false;

        let scene = project_state(&state);
        assert!(
            wires(&scene)
                .iter()
                .all(|w| !w.energized || w.color == C_BATTERY),
            "only the battery string stub may stay at potential"
        );
    }

    #[test]
    fn breaker_glyphs_follow_booleans_not_current() {
        // Q4 closed with nothing behind it: glyph closed, load wire dead.
        let mut unit = UpsUnitState::all_off('A');
        unit.q4_output = true;
        let scene = project_state(&SystemState::single(unit));

        let q4_closed = scene.primitives.iter().any(|p| {
            matches!(
                p,
                Primitive::Breaker {
                    component: ComponentId::Q4,
                    closed: true,
                    ..
                }
            )
        });
        assert!(q4_closed);

        let load_powered = scene
            .primitives
            .iter()
            .any(|p| matches!(p, Primitive::LoadMarker { powered: true, .. }));
        assert!(!load_powered);
    }

    #[test]
    fn parallel_scene_uses_atomic_unit_blocks() {
        let state = SystemState::parallel(
            UpsUnitState::all_off('A'),
            UpsUnitState::normal_online('B'),
        );
        let scene = project_state(&state);

        assert!(scene
            .hit_boxes
            .iter()
            .any(|b| b.component == ComponentId::UnitA));
        assert!(scene
            .hit_boxes
            .iter()
            .any(|b| b.component == ComponentId::UnitB));
        // No per-unit internals in the parallel layout.
        assert!(!scene
            .hit_boxes
            .iter()
            .any(|b| b.component == ComponentId::Rectifier));
    }

    #[test]
    fn load_paint_tracks_source() {
        let mut state = SystemState::single(UpsUnitState::normal_online('A'));
        state.q3_maint_bypass = true;
        let scene = project_state(&state);
        // MAINT wins, so the load marker paints bypass orange.
        let marker_fill = scene.primitives.iter().find_map(|p| match p {
            Primitive::LoadMarker { fill, .. } => Some(*fill),
            _ => None,
        });
        assert_eq!(marker_fill, Some(load_color(LoadSource::Maint)));
        assert_eq!(marker_fill, Some(C_BYPASS));
    }
}
