/// Problems worth telling the user about, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    LowBattery,
    CapacityNotConfigured,
    NoConsumptionData,
}

/// How loudly a [`Warning`] is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningLevel {
    Warning,
    Error,
}

impl Warning {
    pub fn code(self) -> &'static str {
        match self {
            Self::LowBattery            => "low_battery",
            Self::CapacityNotConfigured => "capacity_not_configured",
            Self::NoConsumptionData     => "no_consumption_data",
        }
    }

    pub fn level(self) -> WarningLevel {
        match self {
            Self::LowBattery => WarningLevel::Warning,
            Self::CapacityNotConfigured | Self::NoConsumptionData => WarningLevel::Error,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::LowBattery            => "Low battery level!",
            Self::CapacityNotConfigured => "Battery capacity not configured",
            Self::NoConsumptionData     => "No power consumption data",
        }
    }
}

/// All warnings that apply, in fixed order: low battery, missing capacity,
/// missing consumption.
pub fn collect_warnings(
    battery_level_percent: f64,
    battery_capacity_kwh: f64,
    power_consumption_w: f64,
) -> Vec<Warning> {
    let mut warnings = Vec::new();
    if battery_level_percent < 20.0 {
        warnings.push(Warning::LowBattery);
    }
    if battery_capacity_kwh <= 0.0 {
        warnings.push(Warning::CapacityNotConfigured);
    }
    if power_consumption_w <= 0.0 {
        warnings.push(Warning::NoConsumptionData);
    }
    warnings
}
