//! Color values as they travel between the data file, the style functions and
//! the renderer.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    /// Border color for emphasized regions.
    pub const EMPHASIS: Rgb = Rgb::new(0x1D, 0x35, 0x57);

    /// Fill used when neither the consulate nor the feature provides a color.
    pub const NEUTRAL: Rgb = Rgb::new(0x9E, 0x9E, 0x9E);

    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Parse `#RRGGBB`, `RRGGBB` or the short form `#RGB`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return None,
        };
        let mut bytes = [0u8; 3];
        hex::decode_to_slice(&expanded, &mut bytes).ok()?;
        Some(Self::new(bytes[0], bytes[1], bytes[2]))
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #RRGGBB
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode_upper([self.r, self.g, self.b]))
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| format!("invalid hex color {s:?}"))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgb::from_hex("#61331C"), Some(Rgb::new(0x61, 0x33, 0x1C)));
        assert_eq!(Rgb::from_hex("a7dadc"), Some(Rgb::new(0xA7, 0xDA, 0xDC)));
        assert_eq!(Rgb::from_hex("#fff"), Some(Rgb::WHITE));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#GGGGGG"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn displays_as_uppercase_css_hex() {
        assert_eq!(Rgb::new(0xf0, 0x54, 0x4f).to_string(), "#F0544F");
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&Rgb::EMPHASIS).unwrap();
        assert_eq!(json, "\"#1D3557\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::EMPHASIS);
    }
}
