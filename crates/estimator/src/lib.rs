//! Runtime and charge-time estimation for a home battery.
//!
//! Pure functions only: [`capture`] turns entity states into a
//! [`ReadingSnapshot`], and [`evaluate`] turns a snapshot into
//! [`DerivedMetrics`]. Nothing here holds state between calls.

pub mod capacity;
pub mod estimate;
pub mod grid;
pub mod snapshot;

pub use capacity::{resolve_capacity, CapacityStrategy, CAPACITY_CHAIN};
pub use estimate::{classify_charging_state, compute_charge_time_hours, compute_runtime_hours};
pub use grid::resolve_grid_charging;
pub use snapshot::capture;

use card_config::CardConfig;
use card_core::{DerivedMetrics, ReadingSnapshot};
use tracing::debug;

/// Derive every metric for one snapshot.
///
/// Total over its input: NaN or infinite readings are treated as `0`, and the
/// result depends only on `snapshot` and `config`.
pub fn evaluate(snapshot: &ReadingSnapshot, config: &CardConfig) -> DerivedMetrics {
    let level = finite_or_zero(snapshot.battery_level_percent);
    let consumption_w = finite_or_zero(snapshot.power_consumption_w).abs();
    let generation_w = finite_or_zero(snapshot.power_generation_w).abs();

    let (capacity_kwh, capacity_source) =
        resolve_capacity(&snapshot.capacity_attributes, config.battery_capacity);

    let grid_charging_w = snapshot
        .grid_power_raw_w
        .map_or(0.0, |raw| resolve_grid_charging(finite_or_zero(raw), consumption_w));

    let is_charging = classify_charging_state(generation_w, grid_charging_w);
    let runtime_hours = compute_runtime_hours(level, capacity_kwh, consumption_w);
    let charge_time_hours =
        compute_charge_time_hours(level, capacity_kwh, generation_w, grid_charging_w);

    debug!(
        level_percent = level,
        capacity_kwh,
        capacity_source = capacity_source.label(),
        consumption_w,
        generation_w,
        grid_charging_w,
        is_charging,
        runtime_hours,
        charge_time_hours,
        "evaluated snapshot"
    );

    DerivedMetrics {
        battery_level_percent: level,
        battery_capacity_kwh: capacity_kwh,
        capacity_source,
        power_consumption_w: consumption_w,
        power_generation_w: generation_w,
        grid_charging_w,
        is_charging,
        runtime_hours,
        charge_time_hours,
        last_update: snapshot.captured_at,
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
