use card_core::{CardError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root configuration structure parsed from `card.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// The battery card itself.
    pub card: CardConfig,
    /// Where entity states are read from.
    pub source: SourceConfig,
    /// Colours and text styling.
    pub theme: ThemeConfig,
}

/// Options for one battery runtime card.
///
/// Only `battery_entity` and `power_entity` are required; call
/// [`CardConfig::validate`] before evaluating anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Card title.
    pub name: String,
    /// Entity reporting state of charge in percent.
    pub battery_entity: Option<String>,
    /// Entity reporting house power draw in watts.
    pub power_entity: Option<String>,
    /// Entity reporting solar/other generation in watts.
    pub generation_entity: Option<String>,
    /// Entity reporting grid power in watts (import typically negative).
    pub grid_charging_entity: Option<String>,
    /// Capacity in kWh used when the battery entity carries none.
    pub battery_capacity: Option<f64>,
    pub show_power: bool,
    pub show_capacity: bool,
    pub show_runtime: bool,
    pub show_charge_time: bool,
    /// Seconds between refresh ticks; `0` disables the timer.
    pub update_interval: u64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            name:                 "House Battery".to_string(),
            battery_entity:       None,
            power_entity:         None,
            generation_entity:    None,
            grid_charging_entity: None,
            battery_capacity:     None,
            show_power:           true,
            show_capacity:        true,
            show_runtime:         true,
            show_charge_time:     true,
            update_interval:      30,
        }
    }
}

impl CardConfig {
    /// Check the required entity ids and return them in usable form.
    ///
    /// Blank ids count as missing. `battery_entity` is checked first.
    pub fn validate(&self) -> Result<EntitySet> {
        Ok(EntitySet {
            battery:       required(&self.battery_entity, "battery_entity")?,
            power:         required(&self.power_entity, "power_entity")?,
            generation:    optional(&self.generation_entity),
            grid_charging: optional(&self.grid_charging_entity),
        })
    }

    /// Interval between refresh ticks, `None` when the timer is disabled.
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.update_interval > 0).then(|| Duration::from_secs(self.update_interval))
    }

    /// Configured generation entity, blank ids excluded.
    pub fn generation(&self) -> Option<&str> {
        non_blank(&self.generation_entity)
    }

    /// Configured grid entity, blank ids excluded.
    pub fn grid_charging(&self) -> Option<&str> {
        non_blank(&self.grid_charging_entity)
    }

    /// Whether any source of charging power is configured.
    pub fn has_charging_source(&self) -> bool {
        self.generation().is_some() || self.grid_charging().is_some()
    }
}

fn required(id: &Option<String>, field: &'static str) -> Result<String> {
    optional(id).ok_or(CardError::MissingRequired(field))
}

fn optional(id: &Option<String>) -> Option<String> {
    non_blank(id).map(str::to_string)
}

fn non_blank(id: &Option<String>) -> Option<&str> {
    id.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Entity ids of a validated [`CardConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySet {
    pub battery:       String,
    pub power:         String,
    pub generation:    Option<String>,
    pub grid_charging: Option<String>,
}

/// Data source settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// JSON document with the current entity states. Relative paths are
    /// resolved against the config file's directory.
    pub states_file: PathBuf,
    /// Treat a change to `states_file` as a push and evaluate immediately.
    pub watch: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            states_file: PathBuf::from("states.json"),
            watch:       true,
        }
    }
}

impl SourceConfig {
    /// Absolute (or caller-relative) path of the states file.
    pub fn states_path(&self, config_dir: Option<&Path>) -> PathBuf {
        match config_dir {
            Some(dir) if self.states_file.is_relative() => dir.join(&self.states_file),
            _ => self.states_file.clone(),
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Battery at or above 50%.
    pub normal: String,
    /// Battery between 20% and 50%.
    pub low: String,
    /// Battery below 20%.
    pub critical: String,
    /// Charge-time headline.
    pub charging: String,
    /// Emit ANSI colour codes in the text rendering.
    pub color: bool,
    /// `strftime` format for the "Last updated" line.
    pub time_format: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            normal:      "#4CAF50".to_string(), // green
            low:         "#ff9800".to_string(), // orange
            critical:    "#f44336".to_string(), // red
            charging:    "#2196F3".to_string(), // blue
            color:       true,
            time_format: "%H:%M:%S".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(battery: Option<&str>, power: Option<&str>) -> CardConfig {
        CardConfig {
            battery_entity: battery.map(str::to_string),
            power_entity:   power.map(str::to_string),
            ..CardConfig::default()
        }
    }

    #[test]
    fn defaults_match_card_defaults() {
        let cfg = CardConfig::default();
        assert_eq!(cfg.name, "House Battery");
        assert!(cfg.show_power && cfg.show_capacity && cfg.show_runtime && cfg.show_charge_time);
        assert_eq!(cfg.update_interval, 30);
        assert_eq!(cfg.refresh_interval(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn validate_requires_battery_entity() {
        let err = card(None, Some("sensor.load")).validate().unwrap_err();
        assert!(matches!(err, CardError::MissingRequired("battery_entity")));
    }

    #[test]
    fn validate_requires_power_entity() {
        let err = card(Some("sensor.soc"), None).validate().unwrap_err();
        assert!(matches!(err, CardError::MissingRequired("power_entity")));
        assert_eq!(err.to_string(), "power_entity is required");
    }

    #[test]
    fn validate_treats_blank_ids_as_missing() {
        let err = card(Some("sensor.soc"), Some("  ")).validate().unwrap_err();
        assert!(matches!(err, CardError::MissingRequired("power_entity")));
    }

    #[test]
    fn validate_collects_entities() {
        let mut cfg = card(Some("sensor.soc"), Some("sensor.load"));
        cfg.generation_entity = Some("sensor.pv".into());
        cfg.grid_charging_entity = Some(String::new());

        let entities = cfg.validate().unwrap();
        assert_eq!(entities.battery, "sensor.soc");
        assert_eq!(entities.power, "sensor.load");
        assert_eq!(entities.generation.as_deref(), Some("sensor.pv"));
        assert_eq!(entities.grid_charging, None);
        assert!(cfg.has_charging_source());
    }

    #[test]
    fn optional_accessors_skip_blank_ids() {
        let mut cfg = card(Some("sensor.soc"), Some("sensor.load"));
        cfg.generation_entity = Some(" sensor.pv ".into());
        cfg.grid_charging_entity = Some("   ".into());
        assert_eq!(cfg.generation(), Some("sensor.pv"));
        assert_eq!(cfg.grid_charging(), None);

        cfg.generation_entity = None;
        assert_eq!(cfg.generation(), None);
        assert!(!cfg.has_charging_source());
    }

    #[test]
    fn zero_interval_disables_timer() {
        let cfg = CardConfig { update_interval: 0, ..CardConfig::default() };
        assert_eq!(cfg.refresh_interval(), None);
    }

    #[test]
    fn relative_states_path_resolves_against_config_dir() {
        let source = SourceConfig::default();
        assert_eq!(
            source.states_path(Some(Path::new("/etc/card"))),
            PathBuf::from("/etc/card/states.json")
        );

        let absolute = SourceConfig { states_file: PathBuf::from("/tmp/s.json"), watch: false };
        assert_eq!(
            absolute.states_path(Some(Path::new("/etc/card"))),
            PathBuf::from("/tmp/s.json")
        );
    }
}
