use card_config::EntitySet;
use card_core::{CapacityAttributes, ReadingSnapshot, StateLookup};
use chrono::{DateTime, Local};
use tracing::warn;

/// Take one snapshot of the configured entities.
///
/// Never fails: a missing entity or a non-numeric state reads as `0`, and
/// missing entities are listed in `unavailable_entities`. Consumption and
/// generation are taken as magnitudes.
pub fn capture(
    lookup: &impl StateLookup,
    entities: &EntitySet,
    captured_at: DateTime<Local>,
) -> ReadingSnapshot {
    let mut unavailable = Vec::new();
    let mut read = |id: &str| -> Option<f64> {
        if !lookup.contains(id) {
            unavailable.push(id.to_string());
            return None;
        }
        Some(lookup.numeric_state(id).unwrap_or(0.0))
    };

    let battery_level_percent = read(&entities.battery).unwrap_or(0.0);
    let power_consumption_w = read(&entities.power).unwrap_or(0.0).abs();
    let power_generation_w = entities
        .generation
        .as_deref()
        .and_then(&mut read)
        .map_or(0.0, f64::abs);
    let grid_power_raw_w = entities.grid_charging.as_deref().and_then(&mut read);

    let capacity_attributes = CapacityAttributes {
        capacity:         lookup.numeric_attribute(&entities.battery, "capacity"),
        battery_capacity: lookup.numeric_attribute(&entities.battery, "battery_capacity"),
    };

    for id in &unavailable {
        warn!("Entity '{id}' is unavailable; reading it as 0");
    }

    ReadingSnapshot {
        battery_level_percent,
        capacity_attributes,
        power_consumption_w,
        power_generation_w,
        grid_power_raw_w,
        unavailable_entities: unavailable,
        captured_at,
    }
}
