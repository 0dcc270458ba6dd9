//! # huekit
//!
//! Immutable RGB and HSL color values with conversion in both directions.
//!
//! ## Features
//!
//! - **Sanitizing constructors**: channels are clamped and hue is wrapped, so every
//!   value is in range no matter what it was built from
//! - **RGB ⇄ HSL**: conversion that round-trips 8-bit colors within one step per channel
//! - **Text forms**: CSS `rgb(...)`/`hsl(...)`, packed `0xFFRRGGBB`, and the legacy
//!   `v,R,B,G` wire string
//! - **Brightness**: BT.601 perceived brightness on a 0-255 scale
//! - **Serde**: optional, behind the `serde` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use huekit::{color_brightness, HslColor, RgbColor};
//!
//! let red = RgbColor::new(255.0, 0.0, 0.0);
//! let hsl = red.to_hsl();
//! assert_eq!(hsl.css_color(), "hsl(0, 100, 50)");
//! assert_eq!(hsl.to_rgb(), red);
//!
//! // Out-of-range input is clamped, never rejected
//! let clamped = RgbColor::new(-10.0, 300.0, 128.0);
//! assert_eq!(clamped.css_color(), "rgb(0, 255, 128)");
//! assert_eq!(clamped.hex_color(), 0xFF00_FF80);
//!
//! assert_eq!(HslColor::new(-30.0, 50.0, 50.0).h(), 330.0);
//! assert_eq!(color_brightness(RgbColor::white()), 255);
//! ```
//!
//! ## Strict construction
//!
//! [`RgbColor::new`] and [`HslColor::new`] turn NaN and infinities into in-range
//! values. Use the `try_new` constructors to reject them instead:
//!
//! ```rust
//! use huekit::{ColorError, RgbColor};
//!
//! let err = RgbColor::try_new(f64::NAN, 0.0, 0.0).unwrap_err();
//! assert!(matches!(err, ColorError::NonFinite { component: "red", .. }));
//! ```

pub mod color;
pub mod error;

pub use color::{color_brightness, HslColor, RawColor, RgbColor};
pub use error::{ColorError, Result};

/// Current version of huekit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_reexports() {
        let rgb = RgbColor::new(1.0, 2.0, 3.0);
        let hsl: HslColor = rgb.into();
        let raw: RawColor = hsl.to_rgb().raw_color();
        assert_eq!(raw, [1.0, 2.0, 3.0]);
        assert_eq!(color_brightness(rgb), 2);

        let result: Result<RgbColor> = RgbColor::try_new(f64::INFINITY, 0.0, 0.0);
        assert!(matches!(result, Err(ColorError::NonFinite { .. })));
    }

    #[test]
    fn test_color_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<RgbColor>();
        assert_send_sync::<HslColor>();
    }
}
