//! Fixed-angle axonometric projection.
//!
//! Logical coordinates: x runs right-down, y left-down, z straight up. The
//! 30-degree skew and the constant center offset are shared by both topologies
//! so layouts stay visually consistent across lessons.

use serde::Serialize;

/// Projection skew angle (30 degrees).
const SKEW: f64 = std::f64::consts::PI / 6.0;

/// Screen-space center offset applied after projection.
pub const CENTER_X: f64 = 400.0;
pub const CENTER_Y: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Shorthand for wire path literals.
pub const fn p3(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

/// Project a logical point onto the screen plane.
pub fn project(p: Point3) -> Point2 {
    let x = (p.x - p.y) * SKEW.cos();
    let y = (p.x + p.y) * SKEW.sin() - p.z;
    Point2::new(x + CENTER_X, y + CENTER_Y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_center() {
        let p = project(p3(0.0, 0.0, 0.0));
        assert_eq!(p.x, CENTER_X);
        assert_eq!(p.y, CENTER_Y);
    }

    #[test]
    fn z_moves_straight_up() {
        let base = project(p3(10.0, 30.0, 0.0));
        let lifted = project(p3(10.0, 30.0, 40.0));
        assert_eq!(lifted.x, base.x);
        assert!((base.y - lifted.y - 40.0).abs() < 1e-9);
    }

    #[test]
    fn thirty_degree_skew() {
        // Unit step along x: dx = cos 30, dy = sin 30.
        let a = project(p3(0.0, 0.0, 0.0));
        let b = project(p3(1.0, 0.0, 0.0));
        assert!((b.x - a.x - (3.0f64.sqrt() / 2.0)).abs() < 1e-9);
        assert!((b.y - a.y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn x_and_y_are_mirrored() {
        let px = project(p3(50.0, 0.0, 0.0));
        let py = project(p3(0.0, 50.0, 0.0));
        assert!((px.x - CENTER_X + (py.x - CENTER_X)).abs() < 1e-9);
        assert!((px.y - py.y).abs() < 1e-9);
    }
}
