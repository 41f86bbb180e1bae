use std::fmt;
use std::str::FromStr;

use crate::error::VisualizerError;

/// An opaque RGB color. Opacity is carried by the styles that use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Color of reference and trend lines.
pub const LINE_COLOR: Color = Color::rgb(0x11, 0x11, 0x11);

/// Color of scatter points when none is configured.
pub const DEFAULT_POINT_COLOR: Color = Color::rgb(0x1f, 0x77, 0xb4);

impl Color {
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const CYAN: Color = Color::rgb(0, 191, 191);
    pub const MAGENTA: Color = Color::rgb(191, 0, 191);
    pub const YELLOW: Color = Color::rgb(191, 191, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    fn from_hex(hex: &str) -> Option<Color> {
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            6 => Some(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |s: &str| channel(s).map(|v| v * 17);
                Some(Color::rgb(
                    short(&hex[0..1])?,
                    short(&hex[1..2])?,
                    short(&hex[2..3])?,
                ))
            }
            _ => None,
        }
    }
}

/// Parses `#rrggbb`, `#rgb`, the single-letter codes `b g r c m y k w` and a
/// handful of color names.
impl FromStr for Color {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.strip_prefix('#') {
            Some(hex) => Color::from_hex(hex),
            None => match trimmed.to_ascii_lowercase().as_str() {
                "b" | "blue" => Some(Color::BLUE),
                "g" | "green" => Some(Color::GREEN),
                "r" | "red" => Some(Color::RED),
                "c" | "cyan" => Some(Color::CYAN),
                "m" | "magenta" => Some(Color::MAGENTA),
                "y" | "yellow" => Some(Color::YELLOW),
                "k" | "black" => Some(Color::BLACK),
                "w" | "white" => Some(Color::WHITE),
                "grey" | "gray" => Some(Color::rgb(128, 128, 128)),
                "darkgrey" | "darkgray" => Some(Color::rgb(169, 169, 169)),
                "orange" => Some(Color::rgb(255, 165, 0)),
                "purple" => Some(Color::rgb(128, 0, 128)),
                _ => None,
            },
        };
        parsed.ok_or_else(|| VisualizerError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
