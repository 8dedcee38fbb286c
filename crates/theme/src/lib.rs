pub mod colors;

pub use colors::Color;

use card_config::ThemeConfig;
use card_core::Severity;

/// Compiled theme derived from [`ThemeConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible: invalid color strings fall
/// back to the stock palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub normal:   Color,
    pub low:      Color,
    pub critical: Color,
    pub charging: Color,
    /// When `false`, text output carries no ANSI escapes.
    pub use_color: bool,
    /// `strftime` format string for the "Last updated" line.
    pub time_format: String,
}

impl Theme {
    /// Build a [`Theme`] from the config file's `[theme]` section.
    pub fn from_config(cfg: &ThemeConfig) -> Self {
        Self {
            normal:      Color::from_hex(&cfg.normal).unwrap_or(Color::GREEN),
            low:         Color::from_hex(&cfg.low).unwrap_or(Color::ORANGE),
            critical:    Color::from_hex(&cfg.critical).unwrap_or(Color::RED),
            charging:    Color::from_hex(&cfg.charging).unwrap_or(Color::BLUE),
            use_color:   cfg.color,
            time_format: cfg.time_format.clone(),
        }
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Normal   => self.normal,
            Severity::Low      => self.low,
            Severity::Critical => self.critical,
        }
    }

    /// Paint `text` in `color`, or return it unchanged when colour is off.
    pub fn paint(&self, color: Color, text: &str) -> String {
        if self.use_color {
            color.paint(text)
        } else {
            text.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}
