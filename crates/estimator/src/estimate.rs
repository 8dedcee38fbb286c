//! Linear extrapolation of runtime and charge time from instantaneous power.
//!
//! Both estimates assume the present power and the nominal capacity stay
//! constant. Every division is guarded by a strictly positive denominator.

/// `true` iff some power is flowing into the battery. Exactly zero is idle.
pub fn classify_charging_state(power_generation_w: f64, grid_charging_w: f64) -> bool {
    power_generation_w + grid_charging_w > 0.0
}

/// Hours until the battery is empty at the current draw.
///
/// `0` when capacity or consumption is not positive, or when the level reads
/// below zero.
pub fn compute_runtime_hours(
    battery_level_percent: f64,
    battery_capacity_kwh: f64,
    power_consumption_w: f64,
) -> f64 {
    if battery_capacity_kwh <= 0.0 || power_consumption_w <= 0.0 {
        return 0.0;
    }

    let available_kwh = (battery_level_percent / 100.0) * battery_capacity_kwh;
    let consumption_kw = power_consumption_w / 1000.0;

    (available_kwh / consumption_kw).max(0.0)
}

/// Hours until the battery is full at the current combined charging power.
///
/// `0` when capacity or charging power is not positive. A level above 100%
/// yields a negative value; the presenter shows that as fully charged.
pub fn compute_charge_time_hours(
    battery_level_percent: f64,
    battery_capacity_kwh: f64,
    power_generation_w: f64,
    grid_charging_w: f64,
) -> f64 {
    let charging_w = power_generation_w + grid_charging_w;
    if battery_capacity_kwh <= 0.0 || charging_w <= 0.0 {
        return 0.0;
    }

    let current_kwh = (battery_level_percent / 100.0) * battery_capacity_kwh;
    let needed_kwh = battery_capacity_kwh - current_kwh;
    let charging_kw = charging_w / 1000.0;

    needed_kwh / charging_kw
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn runtime_half_battery() {
        assert_eq!(compute_runtime_hours(50.0, 10.0, 500.0), 10.0);
    }

    #[test]
    fn runtime_matches_formula() {
        let cases = [(80.0, 13.5, 1200.0), (12.0, 5.0, 75.0), (100.0, 20.0, 3000.0)];
        for &(level, cap, load) in &cases {
            let expected = (level / 100.0 * cap) / (load / 1000.0);
            assert!(approx(compute_runtime_hours(level, cap, load), expected));
        }
    }

    #[test]
    fn runtime_zero_without_capacity_or_load() {
        assert_eq!(compute_runtime_hours(50.0, 0.0, 500.0), 0.0);
        assert_eq!(compute_runtime_hours(50.0, -1.0, 500.0), 0.0);
        assert_eq!(compute_runtime_hours(50.0, 10.0, 0.0), 0.0);
        assert_eq!(compute_runtime_hours(50.0, 10.0, -5.0), 0.0);
    }

    #[test]
    fn runtime_never_negative() {
        assert_eq!(compute_runtime_hours(-10.0, 10.0, 500.0), 0.0);
    }

    #[test]
    fn charge_time_from_half() {
        // 5 kWh missing at 2.5 kW.
        assert_eq!(compute_charge_time_hours(50.0, 10.0, 2000.0, 500.0), 2.0);
    }

    #[test]
    fn charge_time_zero_without_capacity_or_charging() {
        assert_eq!(compute_charge_time_hours(50.0, 0.0, 2000.0, 0.0), 0.0);
        assert_eq!(compute_charge_time_hours(50.0, 10.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn charge_time_full_or_above_is_not_positive() {
        assert_eq!(compute_charge_time_hours(100.0, 10.0, 1000.0, 0.0), 0.0);
        assert!(compute_charge_time_hours(110.0, 10.0, 1000.0, 0.0) < 0.0);
    }

    #[test]
    fn charging_is_strictly_positive() {
        assert!(!classify_charging_state(0.0, 0.0));
        assert!(classify_charging_state(0.1, 0.0));
        assert!(classify_charging_state(0.0, 500.0));
    }
}
