//! Factory traits shared by property value types.
//!
//! Each trait has one required constructor. Implementing it gives the type
//! the whole unit vocabulary through default methods:
//!
//! ```
//! use cssmodel::prelude::*;
//!
//! assert_eq!(LengthPercentage::px(10.5).to_css_string(), "10.5px");
//! assert_eq!(LengthPercentage::percent(50).to_css_string(), "50%");
//! ```

use crate::properties::LineStyle;
use crate::values::{Angle, Length, Number, Percentage, Time};

/// Types that can hold a `<length>`.
pub trait LengthConvertible: Sized {
    fn length(length: Length) -> Self;

    fn px(value: impl Into<f64>) -> Self {
        Self::length(Length::px(value))
    }

    fn em(value: impl Into<f64>) -> Self {
        Self::length(Length::em(value))
    }

    fn rem(value: impl Into<f64>) -> Self {
        Self::length(Length::rem(value))
    }

    fn vw(value: impl Into<f64>) -> Self {
        Self::length(Length::vw(value))
    }

    fn vh(value: impl Into<f64>) -> Self {
        Self::length(Length::vh(value))
    }

    fn vmin(value: impl Into<f64>) -> Self {
        Self::length(Length::vmin(value))
    }

    fn vmax(value: impl Into<f64>) -> Self {
        Self::length(Length::vmax(value))
    }

    fn fr(value: impl Into<f64>) -> Self {
        Self::length(Length::fr(value))
    }

    fn pt(value: impl Into<f64>) -> Self {
        Self::length(Length::pt(value))
    }

    fn cm(value: impl Into<f64>) -> Self {
        Self::length(Length::cm(value))
    }

    fn mm(value: impl Into<f64>) -> Self {
        Self::length(Length::mm(value))
    }

    fn inches(value: impl Into<f64>) -> Self {
        Self::length(Length::inches(value))
    }

    fn ch(value: impl Into<f64>) -> Self {
        Self::length(Length::ch(value))
    }

    fn ex(value: impl Into<f64>) -> Self {
        Self::length(Length::ex(value))
    }

    fn zero() -> Self {
        Self::length(Length::zero())
    }
}

/// Types that can hold a `<percentage>`.
pub trait PercentageConvertible: Sized {
    fn percentage(percentage: Percentage) -> Self;

    fn percent(value: impl Into<f64>) -> Self {
        Self::percentage(Percentage::new(value.into()))
    }
}

/// Types that can hold a plain `<number>`.
pub trait NumberConvertible: Sized {
    fn number(number: Number) -> Self;

    fn value(value: impl Into<f64>) -> Self {
        Self::number(Number::new(value.into()))
    }

    fn one() -> Self {
        Self::number(Number::new(1.0))
    }
}

/// Types that can hold an `<angle>`.
pub trait AngleConvertible: Sized {
    fn angle(angle: Angle) -> Self;

    fn deg(value: impl Into<f64>) -> Self {
        Self::angle(Angle::deg(value))
    }

    fn grad(value: impl Into<f64>) -> Self {
        Self::angle(Angle::grad(value))
    }

    fn rad(value: impl Into<f64>) -> Self {
        Self::angle(Angle::rad(value))
    }

    fn turn(value: impl Into<f64>) -> Self {
        Self::angle(Angle::turn(value))
    }
}

/// Types that can hold a `<time>`.
pub trait TimeConvertible: Sized {
    fn time(time: Time) -> Self;

    fn s(value: impl Into<f64>) -> Self {
        Self::time(Time::s(value))
    }

    fn ms(value: impl Into<f64>) -> Self {
        Self::time(Time::ms(value))
    }
}

/// Types that can hold a `<line-style>` keyword.
pub trait LineStyleConvertible: Sized {
    fn line_style(style: LineStyle) -> Self;

    fn none() -> Self {
        Self::line_style(LineStyle::None)
    }

    fn hidden() -> Self {
        Self::line_style(LineStyle::Hidden)
    }

    fn dotted() -> Self {
        Self::line_style(LineStyle::Dotted)
    }

    fn dashed() -> Self {
        Self::line_style(LineStyle::Dashed)
    }

    fn solid() -> Self {
        Self::line_style(LineStyle::Solid)
    }

    fn double() -> Self {
        Self::line_style(LineStyle::Double)
    }

    fn groove() -> Self {
        Self::line_style(LineStyle::Groove)
    }

    fn ridge() -> Self {
        Self::line_style(LineStyle::Ridge)
    }

    fn inset() -> Self {
        Self::line_style(LineStyle::Inset)
    }

    fn outset() -> Self {
        Self::line_style(LineStyle::Outset)
    }
}

// The core unions pick up the vocabulary for their variants.

impl LengthConvertible for crate::values::LengthPercentage {
    fn length(length: Length) -> Self {
        Self::Length(length)
    }
}

impl PercentageConvertible for crate::values::LengthPercentage {
    fn percentage(percentage: Percentage) -> Self {
        Self::Percentage(percentage)
    }
}

impl AngleConvertible for crate::values::AnglePercentage {
    fn angle(angle: Angle) -> Self {
        Self::Angle(angle)
    }
}

impl PercentageConvertible for crate::values::AnglePercentage {
    fn percentage(percentage: Percentage) -> Self {
        Self::Percentage(percentage)
    }
}

impl NumberConvertible for crate::values::NumberPercentage {
    fn number(number: Number) -> Self {
        Self::Number(number)
    }
}

impl PercentageConvertible for crate::values::NumberPercentage {
    fn percentage(percentage: Percentage) -> Self {
        Self::Percentage(percentage)
    }
}

impl TimeConvertible for crate::values::TimePercentage {
    fn time(time: Time) -> Self {
        Self::Time(time)
    }
}

impl PercentageConvertible for crate::values::TimePercentage {
    fn percentage(percentage: Percentage) -> Self {
        Self::Percentage(percentage)
    }
}
