use crate::{
    format::{format_capacity, round_percent},
    layout::{CardLayout, Headline},
    severity::classify_severity,
    warnings::{collect_warnings, Warning, WarningLevel},
};
use card_config::CardConfig;
use card_core::{DerivedMetrics, Severity};
use card_theme::Theme;
use chrono::{DateTime, Local};
use std::fmt::Write as _;

/// Grid rows the card occupies in a dashboard layout.
pub const CARD_SIZE: u32 = 3;

/// Cells in the text battery gauge.
const GAUGE_CELLS: usize = 10;

/// Battery runtime card: shows charge level, power flows, and either the
/// estimated runtime or the time to full charge.
#[derive(Debug, Default)]
pub struct RuntimeCard;

impl RuntimeCard {
    pub fn new() -> Self {
        Self
    }

    pub fn card_size(&self) -> u32 {
        CARD_SIZE
    }

    /// Build the display model for one evaluation.
    pub fn view(&self, metrics: &DerivedMetrics, config: &CardConfig, theme: &Theme) -> CardView {
        let percent = round_percent(metrics.battery_level_percent);

        CardView {
            title:    config.name.clone(),
            percent,
            severity: classify_severity(percent as f64),
            capacity: config
                .show_capacity
                .then(|| format_capacity(metrics.battery_capacity_kwh)),
            warnings: collect_warnings(
                metrics.battery_level_percent,
                metrics.battery_capacity_kwh,
                metrics.power_consumption_w,
            ),
            layout:       CardLayout::from_metrics(metrics, config),
            last_updated: format_time(&metrics.last_update, &theme.time_format),
        }
    }
}

/// Everything the card shows, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title:    String,
    /// Rounded battery level.
    pub percent:  i64,
    pub severity: Severity,
    /// `None` when `show_capacity` is off.
    pub capacity: Option<String>,
    pub warnings: Vec<Warning>,
    pub layout:   CardLayout,
    pub last_updated: String,
}

impl CardView {
    /// Render as plain text lines, coloured when the theme allows it.
    pub fn render(&self, theme: &Theme) -> String {
        let accent = theme.severity_color(self.severity);
        let mut out = String::new();

        let _ = writeln!(out, "{}", self.title);

        for warning in &self.warnings {
            let icon = match warning.level() {
                WarningLevel::Warning => "⚠️",
                WarningLevel::Error   => "❌",
            };
            let _ = writeln!(out, "{icon} {}", warning.message());
        }

        let gauge = theme.paint(accent, &gauge(self.percent));
        match &self.capacity {
            Some(capacity) => {
                let _ = writeln!(out, "[{gauge}] {}%  {capacity}", self.percent);
            }
            None => {
                let _ = writeln!(out, "[{gauge}] {}%", self.percent);
            }
        }

        if !self.layout.tiles.is_empty() {
            let tiles: Vec<String> = self
                .layout
                .tiles
                .iter()
                .map(|t| format!("{}: {}", t.label, t.value))
                .collect();
            let _ = writeln!(out, "{}", tiles.join(" | "));
        }

        if let Some(headline) = &self.layout.headline {
            let color = match headline {
                Headline::Runtime(_)    => accent,
                Headline::ChargeTime(_) => theme.charging,
            };
            let _ = writeln!(out, "{}: {}", headline.label(), theme.paint(color, headline.value()));
        }

        let _ = write!(out, "Last updated: {}", self.last_updated);
        out
    }
}

fn gauge(percent: i64) -> String {
    let filled = (percent.clamp(0, 100) as usize * GAUGE_CELLS + 50) / 100;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(GAUGE_CELLS - filled));
    bar
}

/// Format a timestamp, falling back to `%H:%M:%S` on a bad format string.
fn format_time(time: &DateTime<Local>, fmt: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", time.format(fmt)).is_err() {
        return time.format("%H:%M:%S").to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_config::ThemeConfig;
    use card_core::CapacitySource;
    use chrono::TimeZone;

    fn plain_theme() -> Theme {
        Theme::from_config(&ThemeConfig { color: false, ..ThemeConfig::default() })
    }

    fn metrics() -> DerivedMetrics {
        DerivedMetrics {
            battery_level_percent: 64.4,
            battery_capacity_kwh:  13.5,
            capacity_source:       CapacitySource::CapacityAttribute,
            power_consumption_w:   450.0,
            power_generation_w:    0.0,
            grid_charging_w:       0.0,
            is_charging:           false,
            runtime_hours:         19.32,
            charge_time_hours:     0.0,
            last_update:           Local.with_ymd_and_hms(2026, 10, 18, 14, 5, 9).unwrap(),
        }
    }

    fn config() -> CardConfig {
        CardConfig {
            battery_entity: Some("sensor.soc".into()),
            power_entity:   Some("sensor.load".into()),
            ..CardConfig::default()
        }
    }

    #[test]
    fn view_formats_metrics() {
        let view = RuntimeCard::new().view(&metrics(), &config(), &plain_theme());
        assert_eq!(view.title, "House Battery");
        assert_eq!(view.percent, 64);
        assert_eq!(view.severity, Severity::Normal);
        assert_eq!(view.capacity.as_deref(), Some("13.5 kWh"));
        assert!(view.warnings.is_empty());
        assert_eq!(view.last_updated, "14:05:09");
        assert_eq!(view.layout.headline, Some(Headline::Runtime("19h 19m".into())));
    }

    #[test]
    fn severity_uses_rounded_percent() {
        let mut m = metrics();
        m.battery_level_percent = 19.6;
        let view = RuntimeCard::new().view(&m, &config(), &plain_theme());
        assert_eq!(view.percent, 20);
        assert_eq!(view.severity, Severity::Low);
        assert_eq!(view.warnings, vec![Warning::LowBattery]);
    }

    #[test]
    fn hidden_capacity() {
        let cfg = CardConfig { show_capacity: false, ..config() };
        let view = RuntimeCard::new().view(&metrics(), &cfg, &plain_theme());
        assert_eq!(view.capacity, None);
    }

    #[test]
    fn render_plain_text() {
        let view = RuntimeCard::new().view(&metrics(), &config(), &plain_theme());
        let text = view.render(&plain_theme());
        let expected = "House Battery\n\
                        [██████░░░░] 64%  13.5 kWh\n\
                        Power Usage: 450 W\n\
                        Estimated Runtime: 19h 19m\n\
                        Last updated: 14:05:09";
        assert_eq!(text, expected);
    }

    #[test]
    fn render_lists_warnings_first() {
        let mut m = metrics();
        m.battery_capacity_kwh = 0.0;
        m.power_consumption_w = 0.0;
        m.runtime_hours = 0.0;
        let text = RuntimeCard::new().view(&m, &config(), &plain_theme()).render(&plain_theme());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "❌ Battery capacity not configured");
        assert_eq!(lines[2], "❌ No power consumption data");
        assert!(text.contains("Unknown"));
        assert!(text.contains("Estimated Runtime: 0h 0m"));
    }

    #[test]
    fn bad_time_format_falls_back() {
        let t = Local.with_ymd_and_hms(2026, 10, 18, 8, 0, 1).unwrap();
        assert_eq!(format_time(&t, "%Q"), "08:00:01");
    }

    #[test]
    fn gauge_fills_proportionally() {
        assert_eq!(gauge(0), "░░░░░░░░░░");
        assert_eq!(gauge(100), "██████████");
        assert_eq!(gauge(150), "██████████");
        assert_eq!(gauge(55), "██████░░░░");
    }

    #[test]
    fn card_size_is_three() {
        assert_eq!(RuntimeCard::new().card_size(), 3);
    }
}
