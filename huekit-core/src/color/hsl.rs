use std::fmt;

use super::rgb::RgbColor;
use super::{clamp_component, ensure_finite, three_components, wrap_hue};
use crate::error::{ColorError, Result};

const PERCENT_MAX: f64 = 100.0;

/// An HSL color: hue in degrees `[0, 360)`, saturation and lightness as
/// percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "HslComponents")
)]
pub struct HslColor {
    h: f64,
    s: f64,
    l: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct HslComponents {
    h: f64,
    s: f64,
    l: f64,
}

#[cfg(feature = "serde")]
impl From<HslComponents> for HslColor {
    fn from(components: HslComponents) -> Self {
        HslColor::new(components.h, components.s, components.l)
    }
}

impl HslColor {
    /// Creates an HSL color. Hue is wrapped modulo 360, saturation and
    /// lightness are clamped to 0-100.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        HslColor {
            h: wrap_hue(h),
            s: clamp_component("saturation", s, PERCENT_MAX),
            l: clamp_component("lightness", l, PERCENT_MAX),
        }
    }

    /// Like [`HslColor::new`], but rejects NaN and infinite components.
    pub fn try_new(h: f64, s: f64, l: f64) -> Result<Self> {
        Ok(HslColor::new(
            ensure_finite("hue", h)?,
            ensure_finite("saturation", s)?,
            ensure_finite("lightness", l)?,
        ))
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    pub fn l(&self) -> f64 {
        self.l
    }

    /// CSS-like form `hsl(H, S, L)`, written without `deg` or `%` units.
    pub fn css_color(&self) -> String {
        format!("hsl({}, {}, {})", self.h, self.s, self.l)
    }

    /// Converts to RGB, rounding each channel to the nearest integer.
    pub fn to_rgb(&self) -> RgbColor {
        let h = self.h / 360.0;
        let s = self.s / PERCENT_MAX;
        let l = self.l / PERCENT_MAX;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;

            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        RgbColor::new((r * 255.0).round(), (g * 255.0).round(), (b * 255.0).round())
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}, {})", self.h, self.s, self.l)
    }
}

impl From<RgbColor> for HslColor {
    fn from(color: RgbColor) -> Self {
        color.to_hsl()
    }
}

impl TryFrom<&[f64]> for HslColor {
    type Error = ColorError;

    fn try_from(values: &[f64]) -> Result<Self> {
        let [h, s, l] = three_components(values)?;
        Ok(HslColor::new(h, s, l))
    }
}
