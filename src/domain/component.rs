use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Identifier of a clickable diagram element. The string forms (`RECTIFIER`,
/// `Q1`, `STATIC_SW`, ...) are the wire format used by the selection API and
/// the knowledge base.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentId {
    Rectifier,
    Inverter,
    Battery,
    #[strum(serialize = "STATIC_SW")]
    #[serde(rename = "STATIC_SW")]
    StaticSwitch,
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Load,
    SystemBus,
    #[strum(serialize = "UPS_A")]
    #[serde(rename = "UPS_A")]
    UnitA,
    #[strum(serialize = "UPS_B")]
    #[serde(rename = "UPS_B")]
    UnitB,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn string_forms_round_trip() {
        for id in ComponentId::iter() {
            let parsed = ComponentId::from_str(&id.to_string()).unwrap();
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn breaker_and_legacy_names() {
        assert_eq!(ComponentId::from_str("Q3").unwrap(), ComponentId::Q3);
        assert_eq!(
            ComponentId::from_str("STATIC_SW").unwrap(),
            ComponentId::StaticSwitch
        );
        assert!(ComponentId::from_str("Q9").is_err());
    }
}
