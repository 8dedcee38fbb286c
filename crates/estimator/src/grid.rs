/// Portion of a grid reading that is actually charging the battery, in watts.
///
/// Grid sensors usually report total import, which includes the house load,
/// so the load is subtracted from the magnitude. The sign of the raw reading
/// is ignored. Never negative.
pub fn resolve_grid_charging(grid_raw_w: f64, power_consumption_w: f64) -> f64 {
    (grid_raw_w.abs() - power_consumption_w).max(0.0)
}
