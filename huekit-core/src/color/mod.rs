//! RGB and HSL color values.
//!
//! Both types sanitize their inputs on construction: channels and percentages
//! are clamped into range and hue is wrapped into `[0, 360)`. No operation on
//! them can fail, and a value is never mutated once built.

mod brightness;
mod hsl;
mod rgb;

pub use brightness::color_brightness;
pub use hsl::HslColor;
pub use rgb::{RawColor, RgbColor};

use crate::error::{ColorError, Result};

/// Clamps `value` into `[0, max]`.
///
/// NaN maps to 0. The result is never negative zero, so it always prints as `0`.
pub(crate) fn clamp_component(component: &'static str, value: f64, max: f64) -> f64 {
    if value.is_nan() {
        tracing::trace!(component, "replacing NaN with 0");
        return 0.0;
    }
    if value.is_infinite() {
        tracing::trace!(component, value, "clamping infinite value");
    }
    // -0.0 + 0.0 == +0.0
    value.clamp(0.0, max) + 0.0
}

/// Wraps a hue in degrees into `[0, 360)`. Non-finite hues map to 0.
pub(crate) fn wrap_hue(value: f64) -> f64 {
    if !value.is_finite() {
        tracing::trace!(value, "replacing non-finite hue with 0");
        return 0.0;
    }
    // Tiny negative hues can round up to exactly 360.
    let hue = value.rem_euclid(360.0) + 0.0;
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

pub(crate) fn ensure_finite(component: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColorError::NonFinite { component, value })
    }
}

pub(crate) fn three_components(values: &[f64]) -> Result<[f64; 3]> {
    match *values {
        [a, b, c] => Ok([a, b, c]),
        _ => Err(ColorError::ComponentCount {
            expected: 3,
            found: values.len(),
        }),
    }
}
