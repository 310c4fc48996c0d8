//! Opacity, rotation and aspect ratio.

use super::{Global, forward_factories, property};
use crate::convert::{AngleConvertible, NumberConvertible, PercentageConvertible};
use crate::values::{Angle, Number, NumberPercentage, Percentage, Ratio, ToCss, display_via_to_css};

/// Value of `opacity`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpacityValue {
    Value(NumberPercentage),
    Global(Global),
}

impl ToCss for OpacityValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            OpacityValue::Value(value) => value.to_css(buf),
            OpacityValue::Global(global) => global.to_css(buf),
        }
    }
}

impl NumberConvertible for OpacityValue {
    fn number(number: Number) -> Self {
        OpacityValue::Value(NumberPercentage::Number(number))
    }
}

impl PercentageConvertible for OpacityValue {
    fn percentage(percentage: Percentage) -> Self {
        OpacityValue::Value(NumberPercentage::Percentage(percentage))
    }
}

impl From<Global> for OpacityValue {
    fn from(global: Global) -> Self {
        OpacityValue::Global(global)
    }
}

/// Value of `rotate`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotateValue {
    None,
    Angle(Angle),
    Global(Global),
}

impl ToCss for RotateValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            RotateValue::None => buf.push_str("none"),
            RotateValue::Angle(angle) => angle.to_css(buf),
            RotateValue::Global(global) => global.to_css(buf),
        }
    }
}

impl AngleConvertible for RotateValue {
    fn angle(angle: Angle) -> Self {
        RotateValue::Angle(angle)
    }
}

impl From<Global> for RotateValue {
    fn from(global: Global) -> Self {
        RotateValue::Global(global)
    }
}

/// Value of `aspect-ratio`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AspectRatioValue {
    Auto,
    Ratio(Ratio),
    /// `auto <ratio>`: the ratio applies unless the content has its own.
    AutoRatio(Ratio),
    Global(Global),
}

impl ToCss for AspectRatioValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            AspectRatioValue::Auto => buf.push_str("auto"),
            AspectRatioValue::Ratio(ratio) => ratio.to_css(buf),
            AspectRatioValue::AutoRatio(ratio) => {
                buf.push_str("auto ");
                ratio.to_css(buf);
            }
            AspectRatioValue::Global(global) => global.to_css(buf),
        }
    }
}

impl From<Ratio> for AspectRatioValue {
    fn from(ratio: Ratio) -> Self {
        AspectRatioValue::Ratio(ratio)
    }
}

impl From<Global> for AspectRatioValue {
    fn from(global: Global) -> Self {
        AspectRatioValue::Global(global)
    }
}

display_via_to_css!(OpacityValue, RotateValue, AspectRatioValue);

property!(Opacity(OpacityValue) => "opacity");
property!(Rotate(RotateValue) => "rotate");
property!(AspectRatio(AspectRatioValue) => "aspect-ratio");

forward_factories!(Opacity: NumberConvertible::number(Number), PercentageConvertible::percentage(Percentage));
forward_factories!(Rotate: AngleConvertible::angle(Angle));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Property;

    #[test]
    fn test_opacity() {
        assert_eq!(Opacity::value(0.5).declaration().to_string(), "opacity: 0.5;");
        assert_eq!(Opacity::percent(80).to_string(), "80%");
        assert_eq!(Opacity::one().to_string(), "1");
        assert_eq!(Opacity::from(Global::Initial).to_string(), "initial");
    }

    #[test]
    fn test_rotate() {
        assert_eq!(Rotate::deg(45).declaration().to_string(), "rotate: 45deg;");
        assert_eq!(Rotate::turn(0.5).to_string(), "0.5turn");
        assert_eq!(Rotate(RotateValue::None).to_string(), "none");
    }

    #[test]
    fn test_aspect_ratio() {
        let ratio = AspectRatio(AspectRatioValue::from(Ratio::widescreen()));
        assert_eq!(ratio.declaration().to_string(), "aspect-ratio: 16 / 9;");
        let auto = AspectRatio(AspectRatioValue::AutoRatio(Ratio::square()));
        assert_eq!(auto.to_string(), "auto 1");
        assert_eq!(AspectRatio(AspectRatioValue::Auto).to_string(), "auto");
    }
}
