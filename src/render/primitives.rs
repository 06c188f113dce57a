use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Qualitative palette handed out by series position when the page sends
/// no color.
pub const SERIES_PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

/// Paint color as the page supplies it.
///
/// Any CSS color expression (`#1f77b4`, `rgb(31,119,180)`, `steelblue`,
/// `hsl(var(--chart-1))`) is carried to the renderer untouched. Hex input
/// is normalized to lowercase `#rrggbb[aa]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct Color(String);

impl Color {
    /// Wraps `css` verbatim.
    #[must_use]
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    /// Normalizes hex input and keeps anything else as given.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::from_hex(input).unwrap_or_else(|_| Self::new(input.trim()))
    }

    #[must_use]
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let mut hex = format!("#{:02x}{:02x}{:02x}", byte(red), byte(green), byte(blue));
        if byte(alpha) != u8::MAX {
            hex.push_str(&format!("{:02x}", byte(alpha)));
        }
        Self(hex)
    }

    #[must_use]
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Palette entry for the series at `index`, wrapping around.
    #[must_use]
    pub fn palette(index: usize) -> Self {
        Self::new(SERIES_PALETTE[index % SERIES_PALETTE.len()])
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` strictly.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidColor(input.to_owned());
        let digits = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let digits = digits.to_ascii_lowercase();
        match digits.len() {
            3 => Ok(Self(
                digits.chars().fold(String::from("#"), |mut hex, ch| {
                    hex.push(ch);
                    hex.push(ch);
                    hex
                }),
            )),
            6 => Ok(Self(format!("#{digits}"))),
            8 if digits.ends_with("ff") => Ok(Self(format!("#{}", &digits[..6]))),
            8 => Ok(Self(format!("#{digits}"))),
            _ => Err(invalid()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.0.trim().is_empty() || self.0.chars().any(char::is_control) {
            return Err(ChartError::InvalidColor(self.0.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Pixel-space position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_input_is_normalized() {
        assert_eq!(Color::from_hex("#F00").expect("short").as_str(), "#ff0000");
        assert_eq!(Color::from_hex("#1F77B4").expect("long").as_str(), "#1f77b4");
        assert_eq!(Color::from_hex("#1f77b4ff").expect("opaque").as_str(), "#1f77b4");
        assert_eq!(Color::from_hex("#1f77b480").expect("alpha").as_str(), "#1f77b480");
    }

    #[test]
    fn strict_hex_rejects_malformed_input() {
        for input in ["red", "#12", "#12345", "#gg0000", "1f77b4"] {
            assert!(Color::from_hex(input).is_err(), "{input} should be rejected");
        }
    }

    #[test]
    fn css_colors_pass_through_verbatim() {
        for input in ["rgb(31,119,180)", "steelblue", "hsl(var(--chart-1))", "#12345"] {
            let color = Color::parse(input);
            assert_eq!(color.as_str(), input);
            assert!(color.validate().is_ok());
        }
        assert!(Color::new("  ").validate().is_err());
    }

    #[test]
    fn channels_format_as_hex() {
        assert_eq!(Color::rgb(0.0, 0.0, 1.0).as_str(), "#0000ff");
        assert_eq!(Color::rgba(1.0, 1.0, 1.0, 0.0).as_str(), "#ffffff00");
    }

    #[test]
    fn palette_wraps_by_index() {
        assert_eq!(Color::palette(0).as_str(), "#636efa");
        assert_eq!(Color::palette(1), Color::palette(1 + SERIES_PALETTE.len()));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Color::new("steelblue")).expect("json");
        assert_eq!(json, "\"steelblue\"");
        let back: Color = serde_json::from_str("\"#ABC\"").expect("parse");
        assert_eq!(back.as_str(), "#aabbcc");
    }
}
