//! Scene-to-SVG serialization.
//!
//! Produces a standalone document: dash animation and face shading are inlined
//! so the output renders without any host stylesheet. Clickable primitives
//! carry `data-component` attributes for the embedding frontend to wire up.

use std::fmt::Write;

use super::scene::{Primitive, Scene, WireStyle};

const BACKGROUND: &str = "#0f172a";
const UNDER_STROKE: &str = "#334155";

pub fn render(scene: &Scene) -> String {
    let mut out = String::with_capacity(16 * 1024);

    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = scene.width,
        h = scene.height
    );
    out.push_str(concat!(
        "<style>",
        "@keyframes flow { to { stroke-dashoffset: -24; } }",
        ".flow { animation: flow 0.8s linear infinite; }",
        "text { font-family: monospace; fill: #e2e8f0; }",
        "</style>"
    ));
    let _ = write!(
        out,
        r#"<rect width="100%" height="100%" fill="{BACKGROUND}"/>"#
    );

    for primitive in &scene.primitives {
        match primitive {
            Primitive::Wire { points, style } => write_wire(&mut out, points, style),
            Primitive::Face {
                points,
                fill,
                shade,
                component,
            } => {
                let d = path_data(points.iter().map(|p| (p.x, p.y)));
                let data = component
                    .map(|c| format!(r#" data-component="{c}""#))
                    .unwrap_or_default();
                let _ = write!(
                    out,
                    r#"<path d="{d} Z" fill="{fill}" fill-opacity="0.85" stroke="white" stroke-width="0.5" filter="brightness({shade})"{data}/>"#
                );
            }
            Primitive::Breaker {
                center,
                closed,
                accent,
                label,
                component,
            } => {
                let _ = write!(
                    out,
                    r##"<g data-component="{component}"><circle cx="{cx:.1}" cy="{cy:.1}" r="8" fill="#1e293b" stroke="{accent}" stroke-width="2"/>"##,
                    cx = center.x,
                    cy = center.y,
                );
                // Contact bar; rotated out of line when the breaker is open.
                let rotate = if *closed {
                    String::new()
                } else {
                    format!(r#" transform="rotate(-45 {:.1} {:.1})""#, center.x, center.y)
                };
                let _ = write!(
                    out,
                    r#"<line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="{accent}" stroke-width="2"{rotate}/>"#,
                    x1 = center.x - 6.0,
                    x2 = center.x + 6.0,
                    y = center.y,
                );
                let _ = write!(
                    out,
                    r#"<text x="{x:.1}" y="{y:.1}" font-size="10" text-anchor="middle" font-weight="bold">{label}</text></g>"#,
                    x = center.x,
                    y = center.y - 14.0,
                    label = escape(label),
                );
            }
            Primitive::LoadMarker {
                at,
                fill,
                powered,
                component,
            } => {
                let d = path_data(
                    [
                        (at.x, at.y - 20.0),
                        (at.x + 40.0, at.y),
                        (at.x, at.y + 20.0),
                        (at.x - 40.0, at.y),
                    ]
                    .into_iter(),
                );
                let _ = write!(
                    out,
                    r#"<g data-component="{component}"><path d="{d} Z" fill="{fill}" stroke="white" stroke-width="2"/>"#
                );
                if *powered {
                    let _ = write!(
                        out,
                        r#"<circle cx="{x:.1}" cy="{y:.1}" r="4" fill="white" class="flow"/>"#,
                        x = at.x,
                        y = at.y,
                    );
                }
                let _ = write!(
                    out,
                    r#"<text x="{x:.1}" y="{y:.1}" font-size="12" text-anchor="middle" font-weight="bold">LOAD</text></g>"#,
                    x = at.x,
                    y = at.y - 30.0,
                );
            }
            Primitive::Label { at, text, size } => {
                let _ = write!(
                    out,
                    r#"<text x="{x:.1}" y="{y:.1}" font-size="{size}" text-anchor="middle">{text}</text>"#,
                    x = at.x,
                    y = at.y,
                    text = escape(text),
                );
            }
        }
    }

    out.push_str("</svg>");
    out
}

fn write_wire(out: &mut String, points: &[super::iso::Point2], style: &WireStyle) {
    let d = path_data(points.iter().map(|p| (p.x, p.y)));

    // Neutral under-stroke keeps de-energized copper visible.
    let _ = write!(
        out,
        r#"<path d="{d}" stroke="{UNDER_STROKE}" stroke-width="4" fill="none" opacity="0.5"/>"#
    );

    if style.energized {
        let dash = if style.dashed {
            r#" stroke-dasharray="4,4""#
        } else {
            ""
        };
        let _ = write!(
            out,
            r#"<path d="{d}" stroke="{color}" stroke-width="2" fill="none"{dash}/>"#,
            color = style.color,
        );
    }

    if style.energized && style.flow {
        let _ = write!(
            out,
            r#"<path d="{d}" stroke="white" stroke-width="2" fill="none" stroke-dasharray="4,8" stroke-opacity="0.8" class="flow"/>"#
        );
    }
}

fn path_data(points: impl Iterator<Item = (f64, f64)>) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{x:.1},{y:.1} ");
    }
    d.trim_end().to_string()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::topology::project_state;
    use crate::domain::{SystemState, UpsUnitState};

    #[test]
    fn renders_standalone_document() {
        let scene = project_state(&SystemState::single(UpsUnitState::normal_online('A')));
        let svg = render(&scene);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("@keyframes flow"));
    }

    #[test]
    fn clickable_primitives_carry_component_ids() {
        let scene = project_state(&SystemState::single(UpsUnitState::normal_online('A')));
        let svg = render(&scene);

        for id in ["RECTIFIER", "INVERTER", "BATTERY", "STATIC_SW", "Q1", "Q3", "LOAD"] {
            assert!(
                svg.contains(&format!(r#"data-component="{id}""#)),
                "missing {id}"
            );
        }
    }

    #[test]
    fn flow_overlay_only_on_energized_segments() {
        let mut state = SystemState::single(UpsUnitState::all_off('A'));
        state.mains_available = false;
        let svg = render(&project_state(&state));

        assert!(!svg.contains(r#"stroke-dasharray="4,8""#), "dead scene must not animate");
    }
}
