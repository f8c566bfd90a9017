//! Key colors, stored and exchanged as `#RRGGBB` strings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A key color.
///
/// Serializes as a `"#RRGGBB"` string so color files stay readable and
/// interchangeable with the color pickers of the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports "#RRGGBB", "RRGGBB", "0xRRGGBB" and the CSS shorthand "#RGB".
    ///
    /// # Examples
    ///
    /// ```
    /// use keyviz::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("#0f0").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error for a wrong digit count or non-hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .unwrap_or(trimmed);

        if !digits.is_ascii() {
            anyhow::bail!("Invalid hex color '{hex}'. Expected ASCII hex digits");
        }

        let expanded;
        let digits = match digits.len() {
            6 => digits,
            3 => {
                expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
                expanded.as_str()
            }
            _ => anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)"),
        };

        let r = u8::from_str_radix(&digits[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&digits[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&digits[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        assert_eq!(
            RgbColor::from_hex("#FF0000").unwrap(),
            RgbColor::new(255, 0, 0)
        );
        assert_eq!(
            RgbColor::from_hex("00ff80").unwrap(),
            RgbColor::new(0, 255, 128)
        );
        assert_eq!(
            RgbColor::from_hex("0x336699").unwrap(),
            RgbColor::new(0x33, 0x66, 0x99)
        );
        assert_eq!(RgbColor::from_hex("#abc").unwrap(), RgbColor::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FF00").is_err());
        assert!(RgbColor::from_hex("#GG0000").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
        assert_eq!(RgbColor::new(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&RgbColor::new(255, 136, 0)).unwrap();
        assert_eq!(json, "\"#FF8800\"");

        let parsed: RgbColor = serde_json::from_str("\"#ff8800\"").unwrap();
        assert_eq!(parsed, RgbColor::new(255, 136, 0));

        assert!(serde_json::from_str::<RgbColor>("\"nope\"").is_err());
    }
}
