//! Box sizing and margins.

use super::{Global, forward_factories, property};
use crate::convert::{LengthConvertible, PercentageConvertible};
use crate::values::{Calc, Length, LengthPercentage, Percentage, ToCss, display_via_to_css};

/// Value of `width` and `height`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Size {
    #[default]
    Auto,
    LengthPercentage(LengthPercentage),
    MinContent,
    MaxContent,
    /// `fit-content`, or `fit-content(<length-percentage>)` with a limit.
    FitContent(Option<LengthPercentage>),
    Calc(Calc),
    Global(Global),
}

impl ToCss for Size {
    fn to_css(&self, buf: &mut String) {
        match self {
            Size::Auto => buf.push_str("auto"),
            Size::LengthPercentage(value) => value.to_css(buf),
            Size::MinContent => buf.push_str("min-content"),
            Size::MaxContent => buf.push_str("max-content"),
            Size::FitContent(None) => buf.push_str("fit-content"),
            Size::FitContent(Some(limit)) => {
                buf.push_str("fit-content(");
                limit.to_css(buf);
                buf.push(')');
            }
            Size::Calc(calc) => calc.to_css(buf),
            Size::Global(global) => global.to_css(buf),
        }
    }
}

impl LengthConvertible for Size {
    fn length(length: Length) -> Self {
        Size::LengthPercentage(LengthPercentage::Length(length))
    }
}

impl PercentageConvertible for Size {
    fn percentage(percentage: Percentage) -> Self {
        Size::LengthPercentage(LengthPercentage::Percentage(percentage))
    }
}

impl From<LengthPercentage> for Size {
    fn from(value: LengthPercentage) -> Self {
        Size::LengthPercentage(value)
    }
}

impl From<Calc> for Size {
    fn from(calc: Calc) -> Self {
        Size::Calc(calc)
    }
}

impl From<Global> for Size {
    fn from(global: Global) -> Self {
        Size::Global(global)
    }
}

/// Value of the `margin-*` longhands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Margin {
    Auto,
    LengthPercentage(LengthPercentage),
    Calc(Calc),
    Global(Global),
}

impl Default for Margin {
    fn default() -> Self {
        Margin::LengthPercentage(LengthPercentage::default())
    }
}

impl ToCss for Margin {
    fn to_css(&self, buf: &mut String) {
        match self {
            Margin::Auto => buf.push_str("auto"),
            Margin::LengthPercentage(value) => value.to_css(buf),
            Margin::Calc(calc) => calc.to_css(buf),
            Margin::Global(global) => global.to_css(buf),
        }
    }
}

impl LengthConvertible for Margin {
    fn length(length: Length) -> Self {
        Margin::LengthPercentage(LengthPercentage::Length(length))
    }
}

impl PercentageConvertible for Margin {
    fn percentage(percentage: Percentage) -> Self {
        Margin::LengthPercentage(LengthPercentage::Percentage(percentage))
    }
}

impl From<LengthPercentage> for Margin {
    fn from(value: LengthPercentage) -> Self {
        Margin::LengthPercentage(value)
    }
}

impl From<Calc> for Margin {
    fn from(calc: Calc) -> Self {
        Margin::Calc(calc)
    }
}

impl From<Global> for Margin {
    fn from(global: Global) -> Self {
        Margin::Global(global)
    }
}

display_via_to_css!(Size, Margin);

property!(Width(Size) => "width");
property!(Height(Size) => "height");
property!(MarginTop(Margin) => "margin-top");
property!(MarginRight(Margin) => "margin-right");
property!(MarginBottom(Margin) => "margin-bottom");
property!(MarginLeft(Margin) => "margin-left");

forward_factories!(Width: LengthConvertible::length(Length), PercentageConvertible::percentage(Percentage));
forward_factories!(Height: LengthConvertible::length(Length), PercentageConvertible::percentage(Percentage));
forward_factories!(MarginTop: LengthConvertible::length(Length), PercentageConvertible::percentage(Percentage));
forward_factories!(MarginRight: LengthConvertible::length(Length), PercentageConvertible::percentage(Percentage));
forward_factories!(MarginBottom: LengthConvertible::length(Length), PercentageConvertible::percentage(Percentage));
forward_factories!(MarginLeft: LengthConvertible::length(Length), PercentageConvertible::percentage(Percentage));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Property;

    #[test]
    fn test_size_keywords() {
        assert_eq!(Size::Auto.to_css_string(), "auto");
        assert_eq!(Size::MinContent.to_css_string(), "min-content");
        assert_eq!(Size::FitContent(None).to_css_string(), "fit-content");
        assert_eq!(
            Size::FitContent(Some(LengthPercentage::px(200))).to_css_string(),
            "fit-content(200px)"
        );
    }

    #[test]
    fn test_width_factories() {
        assert_eq!(Width::px(320).declaration().to_string(), "width: 320px;");
        assert_eq!(Height::percent(100).declaration().to_string(), "height: 100%;");
        assert_eq!(Width::vw(50).to_string(), "50vw");
    }

    #[test]
    fn test_calc_and_global() {
        let width = Width(Size::from(Calc::new("100% - 2rem")));
        assert_eq!(width.declaration().to_string(), "width: calc(100% - 2rem);");
        assert_eq!(Height::from(Global::Unset).to_string(), "unset");
    }

    #[test]
    fn test_margin() {
        assert_eq!(MarginTop::em(1.5).declaration().to_string(), "margin-top: 1.5em;");
        assert_eq!(MarginLeft(Margin::Auto).to_string(), "auto");
        assert_eq!(MarginBottom(Margin::default()).to_string(), "0px");
        assert_eq!(MarginRight::percent(-5).to_string(), "-5%");
    }
}
