pub mod schema;
pub mod watcher;

pub use schema::{CardConfig, EntitySet, HostConfig, SourceConfig, ThemeConfig};
pub use watcher::FileWatcher;

use card_core::{CardError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.
///
/// Unlike most settings the card has no usable defaults for its entity ids,
/// so a missing file is an error rather than a silent fallback.
pub fn load(path: impl AsRef<Path>) -> Result<HostConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CardError::Config(format!(
            "config file not found at '{}'",
            path.display()
        )));
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| CardError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let config = parse(&raw)?;
    tracing::debug!("Loaded config from '{}'", path.display());
    Ok(config)
}

/// Parse configuration from TOML text.
pub fn parse(raw: &str) -> Result<HostConfig> {
    toml::from_str(raw).map_err(|e| CardError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("battery-card").join("card.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [card]
        name = "Garage Battery"
        battery_entity = "sensor.battery_soc"
        power_entity = "sensor.house_load"
        grid_charging_entity = "sensor.grid_power"
        battery_capacity = 13.5
        show_capacity = false
        update_interval = 10

        [source]
        states_file = "/var/lib/card/states.json"

        [theme]
        color = false
    "#;

    #[test]
    fn parse_full_config() {
        let cfg = parse(SAMPLE).unwrap();
        assert_eq!(cfg.card.name, "Garage Battery");
        assert_eq!(cfg.card.battery_capacity, Some(13.5));
        assert!(!cfg.card.show_capacity);
        assert!(cfg.card.show_runtime);
        assert_eq!(cfg.card.update_interval, 10);
        assert_eq!(cfg.source.states_file, PathBuf::from("/var/lib/card/states.json"));
        assert!(cfg.source.watch);
        assert!(!cfg.theme.color);
        assert_eq!(cfg.theme.normal, "#4CAF50");

        let entities = cfg.card.validate().unwrap();
        assert_eq!(entities.grid_charging.as_deref(), Some("sensor.grid_power"));
        assert_eq!(entities.generation, None);
    }

    #[test]
    fn parse_without_power_entity_fails_validation() {
        let cfg = parse("[card]\nbattery_entity = \"sensor.soc\"\n").unwrap();
        assert!(matches!(
            cfg.card.validate(),
            Err(CardError::MissingRequired("power_entity"))
        ));
    }

    #[test]
    fn parse_rejects_bad_toml() {
        assert!(matches!(parse("[card"), Err(CardError::Config(_))));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("card.toml")).unwrap_err();
        assert!(matches!(err, CardError::Config(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        let cfg = load(&path).unwrap();
        assert_eq!(cfg.card.power_entity.as_deref(), Some("sensor.house_load"));
    }

    #[test]
    fn default_path_ends_with_card_toml() {
        assert!(default_path().ends_with("battery-card/card.toml"));
    }
}
