use serde::{Deserialize, Serialize};

use crate::foundation::error::{TurrellError, TurrellResult};

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_f(self) -> RgbF {
        RgbF::new(f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }

    /// Componentwise `self + (other - self) * t`, unrounded.
    pub fn lerp(self, other: Rgb8, t: f64) -> RgbF {
        RgbF::new(
            lerp_channel(f64::from(self.r), f64::from(other.r), t),
            lerp_channel(f64::from(self.g), f64::from(other.g), t),
            lerp_channel(f64::from(self.b), f64::from(other.b), t),
        )
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Unrounded RGB triple on the 0..=255 scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbF {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RgbF {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }

    /// 50/50 average of `self` and `other`.
    pub fn average(self, other: RgbF) -> Self {
        Self::new(
            (self.r + other.r) / 2.0,
            (self.g + other.g) / 2.0,
            (self.b + other.b) / 2.0,
        )
    }

    /// Round to nearest and clamp into storage range.
    pub fn to_rgb8(self) -> Rgb8 {
        fn to_u8(x: f64) -> u8 {
            x.round().clamp(0.0, 255.0) as u8
        }

        Rgb8::new(to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Like [`RgbF::to_rgb8`], but exact halves go to the even neighbour (`50.5` -> `50`).
    ///
    /// Composited pixels are stored this way, matching a clamped byte-array store.
    pub fn to_rgb8_ties_even(self) -> Rgb8 {
        fn to_u8(x: f64) -> u8 {
            x.round_ties_even().clamp(0.0, 255.0) as u8
        }

        Rgb8::new(to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }
}

/// `a + (b - a) * t`. `t` is not clamped.
pub fn lerp_channel(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Parse `RRGGBB` or `#RRGGBB` (case-insensitive).
pub fn parse_hex_color(hex: &str) -> TurrellResult<Rgb8> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(TurrellError::invalid_color(format!(
            "expected #RRGGBB, got \"{hex}\""
        )));
    }

    let byte = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| TurrellError::invalid_color(format!("invalid hex byte in \"{hex}\"")))
    };
    Ok(Rgb8::new(byte(0)?, byte(2)?, byte(4)?))
}

/// Color as written in a config file: a hex string or an `[r, g, b]` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Rgb([u8; 3]),
}

impl ColorDef {
    pub fn hex(s: impl Into<String>) -> Self {
        Self::Hex(s.into())
    }

    pub fn resolve(&self) -> TurrellResult<Rgb8> {
        match self {
            Self::Hex(s) => parse_hex_color(s),
            Self::Rgb([r, g, b]) => Ok(Rgb8::new(*r, *g, *b)),
        }
    }
}

impl From<Rgb8> for ColorDef {
    fn from(c: Rgb8) -> Self {
        Self::Rgb([c.r, c.g, c.b])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
