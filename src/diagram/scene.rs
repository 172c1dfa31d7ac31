//! Projected 2D render primitives.
//!
//! A [`Scene`] is the projector's output: everything a renderer needs to draw
//! the diagram, plus screen-space hit boxes so pointer positions can be mapped
//! back to component identifiers. Paint decisions are already resolved here;
//! renderers apply them without consulting the electrical model.

use serde::Serialize;

use crate::domain::ComponentId;

use super::iso::{project, Point2, Point3};
use super::palette::{Color, C_BREAKER_OPEN, C_OFF};

/// Wire stroke style. Flow overlays render as an animated white dash on top of
/// the colored stroke and only appear on energized, flowing segments.
#[derive(Debug, Clone, Serialize)]
pub struct WireStyle {
    pub color: Color,
    pub energized: bool,
    pub flow: bool,
    pub dashed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Polyline through projected points. The under-stroke always draws in the
    /// neutral color so de-energized copper stays visible.
    Wire {
        points: Vec<Point2>,
        style: WireStyle,
    },
    /// One face of a block prism. `shade` darkens side faces (1.0 = top).
    Face {
        points: [Point2; 4],
        fill: Color,
        shade: f64,
        component: Option<ComponentId>,
    },
    /// Breaker glyph: ring plus a contact bar, rotated open when not closed.
    Breaker {
        center: Point2,
        closed: bool,
        accent: Color,
        label: &'static str,
        component: ComponentId,
    },
    /// Diamond load marker.
    LoadMarker {
        at: Point2,
        fill: Color,
        powered: bool,
        component: ComponentId,
    },
    Label {
        at: Point2,
        text: String,
        size: f64,
    },
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HitBox {
    pub min: Point2,
    pub max: Point2,
    pub component: ComponentId,
}

impl HitBox {
    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min.x && x <= self.max.x && y >= self.min.y && y <= self.max.y
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
    pub hit_boxes: Vec<HitBox>,
}

/// Prism block height in logical units.
const BLOCK_HEIGHT: f64 = 40.0;
/// Breaker glyph radius and hit padding in screen units.
const BREAKER_RADIUS: f64 = 12.0;

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
            hit_boxes: Vec::new(),
        }
    }

    /// Map a screen point to the topmost component under it, if any. This is
    /// the selection surface: callers report the result outward and nothing
    /// else; selection never feeds back into the electrical model.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<ComponentId> {
        self.hit_boxes
            .iter()
            .rev()
            .find(|b| b.contains(x, y))
            .map(|b| b.component)
    }

    pub fn push_wire(&mut self, path: &[Point3], style: WireStyle) {
        if path.len() < 2 {
            return;
        }
        self.primitives.push(Primitive::Wire {
            points: path.iter().copied().map(project).collect(),
            style,
        });
    }

    /// Three-face prism faking depth: top plus the two camera-facing sides.
    pub fn push_block(
        &mut self,
        origin: Point3,
        side: f64,
        label: &str,
        sub_label: &str,
        active: bool,
        color: Color,
        component: ComponentId,
    ) {
        let (x, y) = (origin.x, origin.y);
        let z = origin.z;
        let top = z + BLOCK_HEIGHT;
        let fill = if active { color } else { C_OFF };

        let corner = |dx: f64, dy: f64, cz: f64| project(Point3::new(x + dx, y + dy, cz));

        let top_face = [
            corner(0.0, 0.0, top),
            corner(side, 0.0, top),
            corner(side, side, top),
            corner(0.0, side, top),
        ];
        let right_face = [
            corner(side, 0.0, top),
            corner(side, side, top),
            corner(side, side, z),
            corner(side, 0.0, z),
        ];
        let front_face = [
            corner(0.0, side, top),
            corner(side, side, top),
            corner(side, side, z),
            corner(0.0, side, z),
        ];

        let mut min = Point2::new(f64::MAX, f64::MAX);
        let mut max = Point2::new(f64::MIN, f64::MIN);
        for p in top_face.iter().chain(&right_face).chain(&front_face) {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        self.primitives.push(Primitive::Face {
            points: top_face,
            fill,
            shade: 1.0,
            component: Some(component),
        });
        self.primitives.push(Primitive::Face {
            points: right_face,
            fill,
            shade: 0.8,
            component: Some(component),
        });
        self.primitives.push(Primitive::Face {
            points: front_face,
            fill,
            shade: 0.6,
            component: Some(component),
        });

        let center = project(Point3::new(x + side / 2.0, y + side / 2.0, top + 10.0));
        self.primitives.push(Primitive::Label {
            at: center,
            text: label.to_string(),
            size: 10.0,
        });
        if !sub_label.is_empty() {
            self.primitives.push(Primitive::Label {
                at: Point2::new(center.x, center.y + 12.0),
                text: sub_label.to_string(),
                size: 8.0,
            });
        }

        self.hit_boxes.push(HitBox {
            min,
            max,
            component,
        });
    }

    pub fn push_breaker(
        &mut self,
        at: Point3,
        closed: bool,
        accent: Color,
        label: &'static str,
        component: ComponentId,
    ) {
        let center = project(at);
        let accent = if closed { accent } else { C_BREAKER_OPEN };
        self.primitives.push(Primitive::Breaker {
            center,
            closed,
            accent,
            label,
            component,
        });
        self.hit_boxes.push(HitBox {
            min: Point2::new(center.x - BREAKER_RADIUS, center.y - BREAKER_RADIUS),
            max: Point2::new(center.x + BREAKER_RADIUS, center.y + BREAKER_RADIUS),
            component,
        });
    }

    pub fn push_load(&mut self, at: Point3, fill: Color, powered: bool) {
        let center = project(at);
        self.primitives.push(Primitive::LoadMarker {
            at: center,
            fill,
            powered,
            component: ComponentId::Load,
        });
        self.hit_boxes.push(HitBox {
            min: Point2::new(center.x - 40.0, center.y - 40.0),
            max: Point2::new(center.x + 40.0, center.y + 40.0),
            component: ComponentId::Load,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::iso::p3;
    use crate::diagram::palette::C_INVERTER;

    #[test]
    fn hit_test_prefers_last_pushed() {
        let mut scene = Scene::new(800.0, 400.0);
        scene.push_block(
            p3(0.0, 0.0, 0.0),
            40.0,
            "INV",
            "DC/AC",
            true,
            C_INVERTER,
            ComponentId::Inverter,
        );
        // Breaker drawn on top of the block footprint.
        scene.push_breaker(
            p3(20.0, 20.0, 50.0),
            true,
            C_INVERTER,
            "Q4 Out",
            ComponentId::Q4,
        );

        let center = project(p3(20.0, 20.0, 50.0));
        assert_eq!(scene.hit_test(center.x, center.y), Some(ComponentId::Q4));
    }

    #[test]
    fn hit_test_misses_empty_space() {
        let scene = Scene::new(800.0, 400.0);
        assert_eq!(scene.hit_test(10.0, 10.0), None);
    }

    #[test]
    fn short_wire_paths_are_dropped() {
        let mut scene = Scene::new(800.0, 400.0);
        scene.push_wire(
            &[p3(0.0, 0.0, 0.0)],
            WireStyle {
                color: C_INVERTER,
                energized: true,
                flow: true,
                dashed: false,
            },
        );
        assert!(scene.primitives.is_empty());
    }
}
