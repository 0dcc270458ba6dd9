//! Serialization tests for the `serde` feature
//!
//! Run with: `cargo test --features serde`

#![cfg(feature = "serde")]

use huekit::{HslColor, RgbColor};
use serde_json::json;

#[test]
fn test_rgb_serializes_as_named_channels() {
    let value = serde_json::to_value(RgbColor::new(1.0, 2.0, 3.0)).unwrap();
    assert_eq!(value, json!({ "r": 1.0, "g": 2.0, "b": 3.0 }));
}

#[test]
fn test_hsl_serializes_as_named_components() {
    let value = serde_json::to_value(HslColor::new(-30.0, 50.0, 25.0)).unwrap();
    assert_eq!(value, json!({ "h": 330.0, "s": 50.0, "l": 25.0 }));
}

#[test]
fn test_rgb_deserialize_clamps() {
    let color: RgbColor = serde_json::from_str(r#"{"r": -10, "g": 300, "b": 128}"#).unwrap();
    assert_eq!(color, RgbColor::new(0.0, 255.0, 128.0));
}

#[test]
fn test_hsl_deserialize_wraps_hue() {
    let color: HslColor = serde_json::from_str(r#"{"h": 720, "s": 150, "l": -1}"#).unwrap();
    assert_eq!(color, HslColor::new(0.0, 100.0, 0.0));
}

#[test]
fn test_deserialize_rejects_missing_component() {
    let result: Result<RgbColor, _> = serde_json::from_str(r#"{"r": 1, "g": 2}"#);
    assert!(result.is_err());
}

#[test]
fn test_json_round_trip() {
    let original = RgbColor::new(12.5, 200.0, 99.0).to_hsl();
    let text = serde_json::to_string(&original).unwrap();
    let parsed: HslColor = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, original);
}
