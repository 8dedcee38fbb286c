use card_core::Severity;

/// Below this the battery is critical.
pub const CRITICAL_BELOW: f64 = 20.0;
/// Below this (and not critical) the battery is low.
pub const LOW_BELOW: f64 = 50.0;

/// Map a battery level to its display severity.
pub fn classify_severity(battery_level_percent: f64) -> Severity {
    if battery_level_percent < CRITICAL_BELOW {
        Severity::Critical
    } else if battery_level_percent < LOW_BELOW {
        Severity::Low
    } else {
        Severity::Normal
    }
}
