/// Zero-case label for runtime.
pub const RUNTIME_ZERO_LABEL: &str = "0h 0m";
/// Zero-case label for charge time.
pub const CHARGE_ZERO_LABEL: &str = "Fully charged";

/// Format hours as `"1h 30m"`, `"2h"` or `"45m"`.
///
/// Anything not strictly positive (or not finite) yields `zero_label`.
/// Minutes that round up to 60 roll over into the next hour.
pub fn format_duration(hours: f64, zero_label: &str) -> String {
    if !(hours > 0.0 && hours.is_finite()) {
        return zero_label.to_string();
    }

    let mut whole_hours = hours.floor();
    let mut minutes = ((hours - whole_hours) * 60.0).round();
    if minutes >= 60.0 {
        whole_hours += 1.0;
        minutes = 0.0;
    }

    match (whole_hours as u64, minutes as u64) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

pub fn format_runtime(hours: f64) -> String {
    format_duration(hours, RUNTIME_ZERO_LABEL)
}

pub fn format_charge_time(hours: f64) -> String {
    format_duration(hours, CHARGE_ZERO_LABEL)
}

/// `"1.5 kW"` from 1000 W upwards, whole watts below.
pub fn format_power(watts: f64) -> String {
    if watts >= 1000.0 {
        format!("{:.1} kW", watts / 1000.0)
    } else {
        format!("{watts:.0} W")
    }
}

/// `"13.5 kWh"`, or `"Unknown"` when no capacity resolved.
pub fn format_capacity(kwh: f64) -> String {
    if kwh > 0.0 {
        format!("{kwh} kWh")
    } else {
        "Unknown".to_string()
    }
}

/// Battery level rounded half-up to a whole percent.
pub fn round_percent(level: f64) -> i64 {
    (level + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_hours_and_minutes() {
        assert_eq!(format_runtime(1.5), "1h 30m");
        assert_eq!(format_runtime(0.5), "30m");
        assert_eq!(format_runtime(2.0), "2h");
        assert_eq!(format_runtime(10.25), "10h 15m");
    }

    #[test]
    fn duration_zero_labels_per_call_site() {
        assert_eq!(format_runtime(0.0), "0h 0m");
        assert_eq!(format_runtime(-3.0), "0h 0m");
        assert_eq!(format_charge_time(0.0), "Fully charged");
        assert_eq!(format_charge_time(-0.2), "Fully charged");
        assert_eq!(format_duration(f64::NAN, "n/a"), "n/a");
    }

    #[test]
    fn duration_rolls_sixty_minutes_into_hour() {
        // 1h 59.7m rounds to 60 minutes.
        assert_eq!(format_runtime(1.0 + 59.7 / 60.0), "2h");
        assert_eq!(format_runtime(0.9999), "1h");
    }

    #[test]
    fn power_units() {
        assert_eq!(format_power(1500.0), "1.5 kW");
        assert_eq!(format_power(750.0), "750 W");
        assert_eq!(format_power(1000.0), "1.0 kW");
        assert_eq!(format_power(0.0), "0 W");
    }

    #[test]
    fn capacity_text() {
        assert_eq!(format_capacity(13.5), "13.5 kWh");
        assert_eq!(format_capacity(10.0), "10 kWh");
        assert_eq!(format_capacity(0.0), "Unknown");
    }

    #[test]
    fn percent_rounding() {
        assert_eq!(round_percent(64.5), 65);
        assert_eq!(round_percent(64.4), 64);
        assert_eq!(round_percent(0.0), 0);
    }
}
