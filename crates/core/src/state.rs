use chrono::{DateTime, Local};

/// Battery attributes that may carry the pack capacity, in kWh.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CapacityAttributes {
    /// The `capacity` attribute on the battery entity.
    pub capacity: Option<f64>,
    /// The `battery_capacity` attribute on the battery entity.
    pub battery_capacity: Option<f64>,
}

/// One consistent set of readings taken at a single evaluation instant.
///
/// Unavailable or non-numeric readings have already been coerced to `0.0`
/// here; power values are magnitudes.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingSnapshot {
    /// State of charge, nominally `0 – 100` but not clamped.
    pub battery_level_percent: f64,
    pub capacity_attributes: CapacityAttributes,
    /// House load in watts, always `>= 0`.
    pub power_consumption_w: f64,
    /// Solar (or other) generation in watts, `0` when not configured.
    pub power_generation_w: f64,
    /// Signed grid reading, `None` when no grid entity is configured.
    pub grid_power_raw_w: Option<f64>,
    /// Configured entities that were missing from the source at capture time.
    pub unavailable_entities: Vec<String>,
    pub captured_at: DateTime<Local>,
}

impl ReadingSnapshot {
    /// A snapshot with every reading zeroed, taken at `captured_at`.
    pub fn empty(captured_at: DateTime<Local>) -> Self {
        Self {
            battery_level_percent: 0.0,
            capacity_attributes: CapacityAttributes::default(),
            power_consumption_w: 0.0,
            power_generation_w: 0.0,
            grid_power_raw_w: None,
            unavailable_entities: Vec::new(),
            captured_at,
        }
    }
}

/// Where the battery capacity of an evaluation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacitySource {
    CapacityAttribute,
    BatteryCapacityAttribute,
    Configured,
    /// Nothing resolved; capacity is `0`.
    Unknown,
}

impl CapacitySource {
    pub fn label(self) -> &'static str {
        match self {
            Self::CapacityAttribute        => "attribute `capacity`",
            Self::BatteryCapacityAttribute => "attribute `battery_capacity`",
            Self::Configured               => "configured fallback",
            Self::Unknown                  => "unknown",
        }
    }
}

/// Which of the two mutually exclusive displays applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Discharging,
    Charging,
}

impl DisplayMode {
    pub fn from_charging(is_charging: bool) -> Self {
        if is_charging {
            Self::Charging
        } else {
            Self::Discharging
        }
    }
}

/// Battery-level severity used to colour the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Low,
    Critical,
}

/// Result of one evaluation. Immutable; the host keeps the latest one.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub battery_level_percent: f64,
    /// Resolved capacity in kWh, `0` when unknown.
    pub battery_capacity_kwh: f64,
    pub capacity_source: CapacitySource,
    pub power_consumption_w: f64,
    pub power_generation_w: f64,
    /// Net grid power flowing into the battery, never negative.
    pub grid_charging_w: f64,
    pub is_charging: bool,
    /// Hours until empty at the current draw; `0` when it cannot be computed.
    pub runtime_hours: f64,
    /// Hours until full at the current charging power; `0` when it cannot be
    /// computed, negative when the battery reads above 100%.
    pub charge_time_hours: f64,
    pub last_update: DateTime<Local>,
}

impl DerivedMetrics {
    pub fn mode(&self) -> DisplayMode {
        DisplayMode::from_charging(self.is_charging)
    }

    /// Generation plus grid charging, in watts.
    pub fn total_charging_w(&self) -> f64 {
        self.power_generation_w + self.grid_charging_w
    }
}
