/// Normalised RGBA colour (each channel in `[0.0, 1.0]`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const GREEN:  Self = Self { r: 0.298, g: 0.686, b: 0.314, a: 1.0 }; // #4CAF50
    pub const ORANGE: Self = Self { r: 1.0,   g: 0.596, b: 0.0,   a: 1.0 }; // #ff9800
    pub const RED:    Self = Self { r: 0.957, g: 0.263, b: 0.212, a: 1.0 }; // #f44336
    pub const BLUE:   Self = Self { r: 0.129, g: 0.588, b: 0.953, a: 1.0 }; // #2196F3

    /// Parse a CSS-style hex color string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let byte = |s: &str| -> Option<u8> { u8::from_str_radix(s, 16).ok() };

        match hex.len() {
            6 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: 1.0,
            }),
            8 => Some(Self {
                r: byte(&hex[0..2])? as f32 / 255.0,
                g: byte(&hex[2..4])? as f32 / 255.0,
                b: byte(&hex[4..6])? as f32 / 255.0,
                a: byte(&hex[6..8])? as f32 / 255.0,
            }),
            _ => None,
        }
    }

    /// 8-bit RGB channels, alpha dropped.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Wrap `text` in a 24-bit ANSI foreground colour escape.
    pub fn paint(self, text: &str) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
    }
}
