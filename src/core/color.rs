use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// RGB color tag carried by treatments and every chart element derived from them.
///
/// Serialized as a `#rrggbb` string so dataset files and chart payloads stay
/// readable by any plotting backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#rrggbb` (case-insensitive). The leading `#` is required.
    pub fn from_hex(input: &str) -> DashboardResult<Self> {
        let digits = input.strip_prefix('#').ok_or_else(|| {
            DashboardError::InvalidDataset(format!("color `{input}` must start with `#`"))
        })?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DashboardError::InvalidDataset(format!(
                "color `{input}` must be `#rrggbb`"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| {
                DashboardError::InvalidDataset(format!("color `{input}` is not hex: {e}"))
            })
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn parses_mixed_case_hex() {
        let color = Color::from_hex("#EF553B").expect("valid hex");
        assert_eq!(color, Color::rgb(0xef, 0x55, 0x3b));
        assert_eq!(color.to_hex(), "#ef553b");
    }

    #[test]
    fn rejects_short_or_unprefixed_hex() {
        assert!(Color::from_hex("00cc96").is_err());
        assert!(Color::from_hex("#0c9").is_err());
        assert!(Color::from_hex("#00cc9g").is_err());
    }
}
