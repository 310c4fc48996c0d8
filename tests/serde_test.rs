//! Structured (serde) form of the value types.

#![cfg(feature = "serde")]

use cssmodel::prelude::*;
use cssmodel::properties::{Global, Width};

#[test]
fn test_dimension_shape() {
    let json = serde_json::to_string(&Length::rem(1.5)).unwrap();
    assert_eq!(json, r#"{"value":1.5,"unit":"rem"}"#);
    let back: Length = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Length::rem(1.5));
}

#[test]
fn test_scalars_are_transparent() {
    assert_eq!(serde_json::to_string(&Percentage::new(50.0)).unwrap(), "50.0");
    assert_eq!(serde_json::to_string(&Calc::new("1px + 2em")).unwrap(), r#""1px + 2em""#);
}

#[test]
fn test_units_use_css_tokens() {
    assert_eq!(serde_json::to_string(&LengthUnit::Q).unwrap(), r#""Q""#);
    assert_eq!(serde_json::to_string(&FrequencyUnit::KHz).unwrap(), r#""kHz""#);
    assert_eq!(serde_json::to_string(&Global::RevertLayer).unwrap(), r#""revert-layer""#);
}

#[test]
fn test_union_tagging() {
    let json = serde_json::to_string(&LengthPercentage::percent(25)).unwrap();
    assert_eq!(json, r#"{"percentage":25.0}"#);
    let back: LengthPercentage = serde_json::from_str(&json).unwrap();
    assert!(back.is_percentage());
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(serde_json::from_str::<Resolution>(r#"{"value":-2.0,"unit":"dpi"}"#).is_err());
    assert!(serde_json::from_str::<Ratio>(r#"{"width":0.0,"height":1.0}"#).is_err());
    let ratio: Ratio = serde_json::from_str(r#"{"width":16.0,"height":9.0}"#).unwrap();
    assert_eq!(ratio, Ratio::widescreen());
}

#[test]
fn test_property_round_trip() {
    let width = Width::vw(80);
    let json = serde_json::to_string(&width).unwrap();
    let back: Width = serde_json::from_str(&json).unwrap();
    assert_eq!(back, width);
}
