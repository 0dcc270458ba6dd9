use std::fmt;

use super::hsl::HslColor;
use super::{clamp_component, ensure_finite, three_components};
use crate::error::{ColorError, Result};

/// Red, green and blue channels in that order.
pub type RawColor = [f64; 3];

const CHANNEL_MAX: f64 = 255.0;

/// An RGB color with each channel in `[0, 255]`.
///
/// Channels are clamped on construction but not rounded, so a channel may hold
/// a fractional value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RgbComponents")
)]
pub struct RgbColor {
    r: f64,
    g: f64,
    b: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RgbComponents {
    r: f64,
    g: f64,
    b: f64,
}

#[cfg(feature = "serde")]
impl From<RgbComponents> for RgbColor {
    fn from(components: RgbComponents) -> Self {
        RgbColor::new(components.r, components.g, components.b)
    }
}

impl RgbColor {
    /// Creates an RGB color with each channel clamped to 0-255.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        RgbColor {
            r: clamp_component("red", r, CHANNEL_MAX),
            g: clamp_component("green", g, CHANNEL_MAX),
            b: clamp_component("blue", b, CHANNEL_MAX),
        }
    }

    /// Like [`RgbColor::new`], but rejects NaN and infinite channels.
    pub fn try_new(r: f64, g: f64, b: f64) -> Result<Self> {
        Ok(RgbColor::new(
            ensure_finite("red", r)?,
            ensure_finite("green", g)?,
            ensure_finite("blue", b)?,
        ))
    }

    /// Unpacks the low 24 bits of a `0xAARRGGBB` value. The top byte is ignored.
    pub fn from_hex_color(packed: u32) -> Self {
        let [_, r, g, b] = packed.to_be_bytes();
        RgbColor::from([r, g, b])
    }

    pub fn black() -> Self {
        RgbColor::new(0.0, 0.0, 0.0)
    }

    pub fn white() -> Self {
        RgbColor::new(255.0, 255.0, 255.0)
    }

    pub fn red() -> Self {
        RgbColor::new(255.0, 0.0, 0.0)
    }

    pub fn green() -> Self {
        RgbColor::new(0.0, 255.0, 0.0)
    }

    pub fn blue() -> Self {
        RgbColor::new(0.0, 0.0, 255.0)
    }

    pub fn yellow() -> Self {
        RgbColor::new(255.0, 255.0, 0.0)
    }

    pub fn cyan() -> Self {
        RgbColor::new(0.0, 255.0, 255.0)
    }

    pub fn magenta() -> Self {
        RgbColor::new(255.0, 0.0, 255.0)
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Packs the channels as `0xFFRRGGBB`.
    ///
    /// The top byte is always `0xFF`. Fractional channels are truncated.
    pub fn hex_color(&self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Legacy wire form `v,R,B,G`.
    ///
    /// Blue is sent before green. Receivers depend on this order.
    pub fn wire_color(&self) -> String {
        format!("v,{},{},{}", self.r, self.b, self.g)
    }

    /// CSS form `rgb(R, G, B)`.
    pub fn css_color(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn raw_color(&self) -> RawColor {
        [self.r, self.g, self.b]
    }

    /// Perceptual brightness, see [`color_brightness`](super::color_brightness).
    pub fn brightness(&self) -> u8 {
        super::color_brightness(*self)
    }

    /// Converts to HSL with saturation and lightness as percentages.
    pub fn to_hsl(&self) -> HslColor {
        let r = self.r / CHANNEL_MAX;
        let g = self.g / CHANNEL_MAX;
        let b = self.b / CHANNEL_MAX;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return HslColor::new(0.0, 0.0, l * 100.0);
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());

        let h = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        let h = (h * 60.0 + 360.0) % 360.0;

        HslColor::new(h, s * 100.0, l * 100.0)
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        RgbColor::new(f64::from(r), f64::from(g), f64::from(b))
    }
}

impl From<RawColor> for RgbColor {
    fn from([r, g, b]: RawColor) -> Self {
        RgbColor::new(r, g, b)
    }
}

impl From<RgbColor> for RawColor {
    fn from(color: RgbColor) -> Self {
        color.raw_color()
    }
}

impl From<HslColor> for RgbColor {
    fn from(color: HslColor) -> Self {
        color.to_rgb()
    }
}

impl TryFrom<&[f64]> for RgbColor {
    type Error = ColorError;

    fn try_from(values: &[f64]) -> Result<Self> {
        three_components(values).map(RgbColor::from)
    }
}
