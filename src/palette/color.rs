//! Plain RGB color value type with distance and hex parsing

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::io::configuration::OUTLINE_THRESHOLD;

/// An sRGB color with 8 bits per channel
///
/// Two colors are equal iff their RGB triples are equal. Names and catalog
/// identifiers live on [`PaletteEntry`](crate::palette::PaletteEntry), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Color {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Color {
    /// Pure black
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its channels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Squared Euclidean distance in RGB space
    ///
    /// Orders colors exactly like [`Self::distance`] without floating point.
    pub const fn distance_squared(self, other: Self) -> u32 {
        let dr = self.red.abs_diff(other.red) as u32;
        let dg = self.green.abs_diff(other.green) as u32;
        let db = self.blue.abs_diff(other.blue) as u32;
        dr * dr + dg * dg + db * db
    }

    /// Euclidean distance in RGB space
    pub fn distance(self, other: Self) -> f64 {
        f64::from(self.distance_squared(other)).sqrt()
    }

    /// Outline color that stays visible against this color
    ///
    /// White for colors within [`OUTLINE_THRESHOLD`] of black, black otherwise.
    pub fn outline_color(self) -> Self {
        if self.distance(Self::BLACK) < OUTLINE_THRESHOLD {
            Self::WHITE
        } else {
            Self::BLACK
        }
    }

    /// Channels as an array, in RGB order
    pub const fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [red, green, blue] = pixel.0;
        Self::new(red, green, blue)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        Self(color.to_array())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// Error returned when parsing a hex color string fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string does not have exactly 6 digits after stripping '#'
    InvalidLength(usize),
    /// A character outside `0-9`, `a-f` and `A-F`
    InvalidDigit(char),
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        Self::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "invalid hex color length {len} (expected 6 digits)")
            }
            Self::InvalidDigit(ch) => write!(f, "invalid hex digit '{ch}'"),
            Self::InvalidHex(err) => write!(f, "invalid hex character: {err}"),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidHex(err) => Some(err),
            Self::InvalidLength(_) | Self::InvalidDigit(_) => None,
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse `rrggbb` or `#rrggbb`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseColorError::InvalidLength(hex.len()));
        }
        // `from_str_radix` alone would accept a sign such as "+F"
        if let Some(ch) = hex.chars().find(|ch| !ch.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(ch));
        }

        let channel = |range: std::ops::Range<usize>| -> Result<u8, ParseColorError> {
            let digits = hex
                .get(range)
                .ok_or(ParseColorError::InvalidLength(hex.len()))?;
            Ok(u8::from_str_radix(digits, 16)?)
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}
