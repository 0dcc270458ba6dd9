use super::rgb::RgbColor;

/// Perceived brightness of `color` on a 0-255 scale, using the BT.601 luma
/// weights and rounding to the nearest integer.
pub fn color_brightness(color: RgbColor) -> u8 {
    let luma = (color.r() * 299.0 + color.g() * 587.0 + color.b() * 114.0) / 1000.0;
    luma.round() as u8
}
