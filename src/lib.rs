//! Interactive double-conversion UPS power-path trainer.
//!
//! The core is the [`power_flow`] evaluator, which derives energized-segment
//! flags and the load source from a declarative breaker/subsystem snapshot,
//! and the [`diagram`] projector, which renders those flags into an isometric
//! scene. [`content`] carries the authored lessons, [`sequencer`] the only
//! mutable cursor, [`tutor`] the external Q&A capability, and [`api`] the
//! HTTP surface.

pub mod api;
pub mod config;
pub mod content;
pub mod diagram;
pub mod domain;
pub mod power_flow;
pub mod sequencer;
pub mod telemetry;
pub mod tutor;
