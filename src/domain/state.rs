use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Which diagram layout a state belongs to. Derived from [`UnitLayout`],
/// never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewMode {
    Single,
    Parallel,
}

/// The path currently energizing the protected load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadSource {
    Inverter,
    Bypass,
    Maint,
    None,
}

/// Breaker positions and subsystem flags for one UPS chassis.
///
/// All breaker fields use `true` = closed (conducting). Q3 is not here: the
/// maintenance bypass is a system-level wrap-around switch, see [`SystemState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsUnitState {
    pub id: char,
    pub rectifier_on: bool,
    pub inverter_on: bool,
    pub battery_connected: bool,
    pub static_bypass_on: bool,
    pub q1_input: bool,
    pub q2_bypass: bool,
    pub q5_battery: bool,
    pub q4_output: bool,
}

impl UpsUnitState {
    /// Everything open / off. Baseline for cold-start and isolation drills.
    pub fn all_off(id: char) -> Self {
        Self {
            id,
            rectifier_on: false,
            inverter_on: false,
            battery_connected: false,
            static_bypass_on: false,
            q1_input: false,
            q2_bypass: false,
            q5_battery: false,
            q4_output: false,
        }
    }

    /// Normal online double-conversion: all breakers closed, rectifier and
    /// inverter running, battery floating, static bypass armed but not carrying.
    pub fn normal_online(id: char) -> Self {
        Self {
            id,
            rectifier_on: true,
            inverter_on: true,
            battery_connected: true,
            static_bypass_on: false,
            q1_input: true,
            q2_bypass: true,
            q5_battery: true,
            q4_output: true,
        }
    }

    /// True when the DC bus has a live source behind it: either the rectifier
    /// is supplying it, or a connected battery string is switched in through Q5.
    /// An inverter without this cannot be carrying the load.
    pub fn has_dc_source(&self) -> bool {
        self.rectifier_on || (self.q5_battery && self.battery_connected)
    }

    /// This unit's contribution to the output bus: output breaker closed and
    /// either the inverter or the static bypass feeding it.
    pub fn output_contribution(&self) -> bool {
        self.q4_output && (self.inverter_on || self.static_bypass_on)
    }
}

/// One or two chassis. Parallel mode structurally carries both units, so a
/// missing unit B is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view_mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitLayout {
    Single {
        unit: UpsUnitState,
    },
    Parallel {
        unit_a: UpsUnitState,
        unit_b: UpsUnitState,
    },
}

/// The whole testbed at one point in time. Immutable once authored; lessons
/// step through a sequence of these snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemState {
    /// External manual wrap-around breaker, system-level.
    pub q3_maint_bypass: bool,
    /// Utility power present at the input terminals.
    pub mains_available: bool,
    #[serde(flatten)]
    pub units: UnitLayout,
}

impl SystemState {
    pub fn single(unit: UpsUnitState) -> Self {
        Self {
            q3_maint_bypass: false,
            mains_available: true,
            units: UnitLayout::Single { unit },
        }
    }

    pub fn parallel(unit_a: UpsUnitState, unit_b: UpsUnitState) -> Self {
        Self {
            q3_maint_bypass: false,
            mains_available: true,
            units: UnitLayout::Parallel { unit_a, unit_b },
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        match self.units {
            UnitLayout::Single { .. } => ViewMode::Single,
            UnitLayout::Parallel { .. } => ViewMode::Parallel,
        }
    }

    /// Unit A is present in both layouts.
    pub fn unit_a(&self) -> &UpsUnitState {
        match &self.units {
            UnitLayout::Single { unit } => unit,
            UnitLayout::Parallel { unit_a, .. } => unit_a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_mode_follows_layout() {
        let single = SystemState::single(UpsUnitState::normal_online('A'));
        assert_eq!(single.view_mode(), ViewMode::Single);

        let parallel = SystemState::parallel(
            UpsUnitState::normal_online('A'),
            UpsUnitState::all_off('B'),
        );
        assert_eq!(parallel.view_mode(), ViewMode::Parallel);
        assert_eq!(parallel.unit_a().id, 'A');
    }

    #[test]
    fn dc_source_requires_closed_battery_breaker() {
        let mut unit = UpsUnitState::all_off('A');
        unit.battery_connected = true;
        assert!(!unit.has_dc_source(), "battery behind an open Q5 is no source");

        unit.q5_battery = true;
        assert!(unit.has_dc_source());
    }

    #[test]
    fn serde_tags_view_mode() {
        let state = SystemState::single(UpsUnitState::all_off('A'));
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"view_mode\":\"SINGLE\""));

        let back: SystemState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn load_source_round_trips_as_screaming_snake() {
        assert_eq!(LoadSource::Maint.to_string(), "MAINT");
        assert_eq!("INVERTER".parse::<LoadSource>().unwrap(), LoadSource::Inverter);
    }
}
