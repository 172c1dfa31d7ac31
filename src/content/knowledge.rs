//! Component knowledge base.
//!
//! Static explanation text shown when a diagram element is selected. Lookup is
//! by identifier string so the API can pass through whatever the frontend
//! reports; unknown identifiers fall back to a generic placeholder.

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::domain::ComponentId;

pub const NO_DATA: &str = "No reference data for this component yet.";

static KNOWLEDGE: Lazy<HashMap<ComponentId, &'static str>> = Lazy::new(|| {
    use ComponentId::*;
    HashMap::from([
        (
            Rectifier,
            "Rectifier / PFC: converts incoming AC to a regulated DC bus. In a \
             double-conversion UPS it also performs input power-factor \
             correction, holding input PF near 0.99 and keeping harmonic \
             pollution off the utility.",
        ),
        (
            Inverter,
            "Inverter: the heart of the unit. IGBT switching rebuilds the DC \
             bus into a clean sine wave locked to 220 V / 50 Hz regardless of \
             input voltage or frequency excursions.",
        ),
        (
            Battery,
            "Battery string: the stored-energy reserve. Floats on the charger \
             while mains is healthy and picks up the DC bus without a break \
             when the input fails. Typically series lead-acid strings in the \
             192-480 V range.",
        ),
        (
            StaticSwitch,
            "Static transfer switch (STS): anti-parallel SCR pair, no moving \
             contacts, sub-4 ms transfer. On inverter overload or fault the \
             control logic gates the SCRs and hands the load to the bypass \
             source without a visible break.",
        ),
        (Q1, "Q1 mains input breaker: feeds the rectifier's AC input."),
        (
            Q2,
            "Q2 bypass input breaker: feeds the static bypass leg. In dual-feed \
             installs Q2 usually lands on an independent utility supply.",
        ),
        (
            Q3,
            "Q3 maintenance bypass: manual mechanical isolator. When closed, \
             mains feeds the load directly and the UPS chassis can be fully \
             de-energized (input terminals aside) for safe servicing.",
        ),
        (
            Q4,
            "Q4 output breaker: isolates the unit output from the load bus.",
        ),
        (
            Q5,
            "Q5 battery breaker: DC breaker between the battery string and the \
             DC bus, with overcurrent and short-circuit protection.",
        ),
        (
            Load,
            "Critical load: servers, medical equipment, industrial PLCs. \
             Interruption is not acceptable; power quality requirements are \
             strict.",
        ),
        (
            SystemBus,
            "Paralleling output bus: the copper where multiple unit outputs \
             join, providing capacity stacking or N+1 redundancy.",
        ),
        (
            UnitA,
            "UPS unit A: one complete double-conversion chassis feeding the \
             paralleling bus through its Q4 output breaker.",
        ),
        (
            UnitB,
            "UPS unit B: the redundant partner chassis. Either unit alone must \
             be able to carry the full load for 1+1 operation.",
        ),
    ])
});

/// Look up explanation text for a component identifier string.
pub fn describe(id: &str) -> &'static str {
    ComponentId::from_str(id)
        .ok()
        .and_then(|c| KNOWLEDGE.get(&c).copied())
        .unwrap_or(NO_DATA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn known_components_have_text() {
        for id in ComponentId::iter() {
            assert_ne!(describe(&id.to_string()), NO_DATA, "missing text for {id}");
        }
    }

    #[test]
    fn unknown_identifier_falls_back() {
        assert_eq!(describe("Q9"), NO_DATA);
        assert_eq!(describe(""), NO_DATA);
        assert_eq!(describe("FLUX_CAPACITOR"), NO_DATA);
    }
}
