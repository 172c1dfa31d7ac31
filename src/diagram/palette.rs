//! Paint constants for the dark scene background.

use crate::domain::LoadSource;

pub type Color = &'static str;

pub const C_OFF: Color = "#334155";
pub const C_MAINS: Color = "#3b82f6";
pub const C_BYPASS: Color = "#f97316";
pub const C_INVERTER: Color = "#22c55e";
pub const C_BATTERY: Color = "#eab308";
pub const C_ALARM: Color = "#ef4444";
pub const C_NEUTRAL: Color = "#475569";
pub const C_BREAKER_OPEN: Color = "#64748b";

/// Load-side paint follows whichever path carries the load.
pub fn load_color(source: LoadSource) -> Color {
    match source {
        LoadSource::Inverter => C_INVERTER,
        LoadSource::Bypass | LoadSource::Maint => C_BYPASS,
        LoadSource::None => C_NEUTRAL,
    }
}
