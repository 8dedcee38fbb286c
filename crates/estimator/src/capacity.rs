use card_core::{CapacityAttributes, CapacitySource};

/// One way of finding the battery capacity, in kWh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityStrategy {
    /// `capacity` attribute on the battery entity.
    CapacityAttribute,
    /// `battery_capacity` attribute on the battery entity.
    BatteryCapacityAttribute,
    /// `battery_capacity` from the card config.
    Configured,
}

/// Resolution order. The first strategy yielding a usable value wins.
pub const CAPACITY_CHAIN: [CapacityStrategy; 3] = [
    CapacityStrategy::CapacityAttribute,
    CapacityStrategy::BatteryCapacityAttribute,
    CapacityStrategy::Configured,
];

impl CapacityStrategy {
    pub fn source(self) -> CapacitySource {
        match self {
            Self::CapacityAttribute        => CapacitySource::CapacityAttribute,
            Self::BatteryCapacityAttribute => CapacitySource::BatteryCapacityAttribute,
            Self::Configured               => CapacitySource::Configured,
        }
    }

    /// The value this strategy offers, if it is a positive finite number.
    /// Zero and negative values fall through to the next strategy.
    pub fn candidate(self, attrs: &CapacityAttributes, configured: Option<f64>) -> Option<f64> {
        let value = match self {
            Self::CapacityAttribute        => attrs.capacity,
            Self::BatteryCapacityAttribute => attrs.battery_capacity,
            Self::Configured               => configured,
        };
        value.filter(|v| v.is_finite() && *v > 0.0)
    }
}

/// Resolve capacity using [`CAPACITY_CHAIN`]; `(0.0, Unknown)` when nothing fits.
pub fn resolve_capacity(
    attrs: &CapacityAttributes,
    configured: Option<f64>,
) -> (f64, CapacitySource) {
    resolve_with(&CAPACITY_CHAIN, attrs, configured)
}

/// Resolve capacity with an explicit strategy order.
pub fn resolve_with(
    chain: &[CapacityStrategy],
    attrs: &CapacityAttributes,
    configured: Option<f64>,
) -> (f64, CapacitySource) {
    chain
        .iter()
        .find_map(|s| s.candidate(attrs, configured).map(|v| (v, s.source())))
        .unwrap_or((0.0, CapacitySource::Unknown))
}
