use crate::format::{format_charge_time, format_power, format_runtime};
use card_config::CardConfig;
use card_core::DerivedMetrics;

/// One small labelled value in the stats grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}

impl StatTile {
    fn power(label: &'static str, watts: f64) -> Self {
        Self { label, value: format_power(watts) }
    }
}

/// The large duration display under the stats grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Headline {
    /// "Estimated Runtime", shown while discharging.
    Runtime(String),
    /// "Charge Time Remaining", shown while charging.
    ChargeTime(String),
}

impl Headline {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Runtime(_)    => "Estimated Runtime",
            Self::ChargeTime(_) => "Charge Time Remaining",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Runtime(v) | Self::ChargeTime(v) => v,
        }
    }
}

/// Which values the card surfaces for one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardLayout {
    pub tiles:    Vec<StatTile>,
    pub headline: Option<Headline>,
}

impl CardLayout {
    /// Pick tiles and headline from the display mode and the `show_*` flags.
    pub fn from_metrics(metrics: &DerivedMetrics, config: &CardConfig) -> Self {
        let charging = metrics.is_charging;
        let has_generation = config.generation().is_some();
        let has_grid = config.grid_charging().is_some();

        let mut tiles = Vec::new();
        if config.show_power {
            tiles.push(StatTile::power("Power Usage", metrics.power_consumption_w));
        }
        if charging && has_generation {
            tiles.push(StatTile::power("Solar", metrics.power_generation_w));
        }
        if charging && has_grid {
            tiles.push(StatTile::power("Grid Charge", metrics.grid_charging_w));
        }
        if charging && config.has_charging_source() {
            tiles.push(StatTile::power("Total Charge", metrics.total_charging_w()));
        }

        let headline = if !charging && config.show_runtime {
            Some(Headline::Runtime(format_runtime(metrics.runtime_hours)))
        } else if charging && config.show_charge_time && config.has_charging_source() {
            Some(Headline::ChargeTime(format_charge_time(metrics.charge_time_hours)))
        } else {
            None
        };

        Self { tiles, headline }
    }
}
