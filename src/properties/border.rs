//! Border line styles.

use super::{Global, LineStyle, forward_factories, property};
use crate::convert::LineStyleConvertible;
use crate::values::{ToCss, display_via_to_css};

/// Value of the `border-*-style` longhands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderLineStyle {
    Style(LineStyle),
    Global(Global),
}

impl Default for BorderLineStyle {
    fn default() -> Self {
        BorderLineStyle::Style(LineStyle::None)
    }
}

impl ToCss for BorderLineStyle {
    fn to_css(&self, buf: &mut String) {
        match self {
            BorderLineStyle::Style(style) => style.to_css(buf),
            BorderLineStyle::Global(global) => global.to_css(buf),
        }
    }
}

impl LineStyleConvertible for BorderLineStyle {
    fn line_style(style: LineStyle) -> Self {
        BorderLineStyle::Style(style)
    }
}

impl From<LineStyle> for BorderLineStyle {
    fn from(style: LineStyle) -> Self {
        BorderLineStyle::Style(style)
    }
}

impl From<Global> for BorderLineStyle {
    fn from(global: Global) -> Self {
        BorderLineStyle::Global(global)
    }
}

display_via_to_css!(BorderLineStyle);

property!(BorderTopStyle(BorderLineStyle) => "border-top-style");
property!(BorderRightStyle(BorderLineStyle) => "border-right-style");
property!(BorderBottomStyle(BorderLineStyle) => "border-bottom-style");
property!(BorderLeftStyle(BorderLineStyle) => "border-left-style");

forward_factories!(BorderTopStyle: LineStyleConvertible::line_style(LineStyle));
forward_factories!(BorderRightStyle: LineStyleConvertible::line_style(LineStyle));
forward_factories!(BorderBottomStyle: LineStyleConvertible::line_style(LineStyle));
forward_factories!(BorderLeftStyle: LineStyleConvertible::line_style(LineStyle));
