//! Isometric diagram projection.
//!
//! Maps the fixed topology graph through the axonometric transform into 2D
//! primitives, painted from the power-flow evaluator's segment flags. The
//! SVG writer is one renderer over the scene; hit boxes give callers the
//! click-to-component mapping.

pub mod iso;
pub mod palette;
pub mod scene;
pub mod svg;
pub mod topology;

pub use scene::{HitBox, Primitive, Scene, WireStyle};
pub use topology::{project_state, SCENE_HEIGHT, SCENE_WIDTH};
