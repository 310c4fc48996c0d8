//! CSS value types and their serialization.
//!
//! This module contains:
//! - The [`ToCss`] serialization trait shared by every value
//! - Numeric primitives ([`Number`], [`Percentage`])
//! - Dimensioned values ([`Length`], [`Time`], [`Frequency`], [`Resolution`], [`Angle`])
//! - Two-way unions with percentages ([`LengthPercentage`] and friends)
//! - [`Calc`] expressions and [`Ratio`]

use std::fmt::Write;

mod angle;
mod calc;
mod frequency;
mod length;
mod number;
mod ratio;
mod resolution;
mod time;
mod union;

pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

impl<T: ToCss + ?Sized> ToCss for &T {
    fn to_css(&self, buf: &mut String) {
        (**self).to_css(buf);
    }
}

pub use angle::{Angle, AngleUnit};
pub use calc::Calc;
pub use frequency::{Frequency, FrequencyUnit};
pub use length::{Length, LengthUnit};
pub use number::{Number, Percentage};
pub use ratio::Ratio;
pub use resolution::{Resolution, ResolutionUnit};
pub use time::{Time, TimeUnit};
pub use union::{AnglePercentage, LengthPercentage, NumberPercentage, TimePercentage};

/// Implements `Display` by forwarding to [`ToCss`].
macro_rules! display_via_to_css {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&$crate::values::ToCss::to_css_string(self))
                }
            }
        )*
    };
}

pub(crate) use display_via_to_css;

/// Macro for defining unit keyword enums.
///
/// Each variant maps to its CSS unit token. Token lookup through `from_css`
/// is ASCII case-insensitive, matching how CSS treats unit identifiers.
macro_rules! unit_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[cfg_attr(feature = "serde", serde(rename = $css))]
                $variant,
            )*
        }

        impl $name {
            /// Every unit of this family, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Returns the CSS token for this unit.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                }
            }

            /// Look up a unit by its CSS token.
            pub fn from_css(s: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|unit| unit.as_str().eq_ignore_ascii_case(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use unit_enum;

/// Shared shape of every dimensioned value: `{ value, unit }`.
///
/// Emits the struct, the accessors, serialization and a same-unit-only
/// `PartialOrd`. Constructors and conversions stay with each type since
/// their rules differ.
macro_rules! dimension {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($unit:ident);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        $vis struct $name {
            value: f64,
            unit: $unit,
        }

        impl $name {
            /// The numeric part.
            #[inline]
            pub fn value(&self) -> f64 {
                self.value
            }

            /// The unit.
            #[inline]
            pub fn unit(&self) -> $unit {
                self.unit
            }
        }

        impl $crate::values::ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                $crate::values::write_dimension(buf, self.value, self.unit.as_str());
            }
        }

        impl PartialOrd for $name {
            /// Values in different units are unordered; see `compare` for a
            /// unit-converting comparison.
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                if self.unit == other.unit {
                    self.value.partial_cmp(&other.value)
                } else {
                    None
                }
            }
        }

        $crate::values::display_via_to_css!($name);
    };
}

pub(crate) use dimension;

/// Construction, conversion and left-unit-wins arithmetic for unit
/// families where every unit has a fixed size. Expects
/// `$unit::factor(self) -> f64`, the unit's size in the family's pivot unit.
macro_rules! linear_dimension {
    ($name:ident($unit:ident)) => {
        impl $name {
            pub const fn new(value: f64, unit: $unit) -> Self {
                Self { value, unit }
            }

            /// Convert to another unit. Same-unit conversion returns `self`.
            pub fn converted(self, unit: $unit) -> Self {
                if unit == self.unit {
                    return self;
                }
                Self::new(
                    $crate::values::rescale(self.value, self.unit.factor(), unit.factor()),
                    unit,
                )
            }

            /// Order two values after converting `other` into this unit.
            pub fn compare(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.value.partial_cmp(&other.converted(self.unit).value)
            }
        }

        impl std::ops::Add for $name {
            type Output = Self;

            /// The result keeps the left operand's unit.
            fn add(self, rhs: Self) -> Self {
                Self::new(self.value + rhs.converted(self.unit).value, self.unit)
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            /// The result keeps the left operand's unit.
            fn sub(self, rhs: Self) -> Self {
                Self::new(self.value - rhs.converted(self.unit).value, self.unit)
            }
        }

        impl std::ops::Mul<f64> for $name {
            type Output = Self;

            fn mul(self, rhs: f64) -> Self {
                Self::new(self.value * rhs, self.unit)
            }
        }

        impl std::ops::Div<f64> for $name {
            type Output = Self;

            fn div(self, rhs: f64) -> Self {
                Self::new(self.value / rhs, self.unit)
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                Self::new(-self.value, self.unit)
            }
        }
    };
}

pub(crate) use linear_dimension;

/// Write a plain CSS `<number>`.
///
/// Uses the shortest decimal form that round-trips, without exponent or a
/// trailing `.0`. Non-finite values use the `calc()` keywords.
pub(crate) fn write_number(buf: &mut String, value: f64) {
    match non_finite_keyword(value) {
        Some(keyword) => {
            buf.push_str("calc(");
            buf.push_str(keyword);
            buf.push(')');
        }
        None => write_finite(buf, value),
    }
}

/// Write a number immediately followed by its unit (`10px`, `50%`).
pub(crate) fn write_dimension(buf: &mut String, value: f64, unit: &str) {
    match non_finite_keyword(value) {
        Some(keyword) => {
            write!(buf, "calc({keyword} * 1{unit})").unwrap();
        }
        None => {
            write_finite(buf, value);
            buf.push_str(unit);
        }
    }
}

fn write_finite(buf: &mut String, value: f64) {
    // -0 prints as "-0" otherwise
    if value == 0.0 {
        buf.push('0');
    } else {
        write!(buf, "{value}").unwrap();
    }
}

fn non_finite_keyword(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-infinity")
    } else {
        None
    }
}

/// Convert `value` between two units given each unit's size in the family's
/// pivot unit.
#[inline]
pub(crate) fn rescale(value: f64, from_factor: f64, to_factor: f64) -> f64 {
    value * from_factor / to_factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: f64) -> String {
        let mut buf = String::new();
        write_number(&mut buf, value);
        buf
    }

    #[test]
    fn test_whole_numbers_have_no_fraction() {
        assert_eq!(number(1.0), "1");
        assert_eq!(number(-3.0), "-3");
        assert_eq!(number(999999.0), "999999");
    }

    #[test]
    fn test_small_and_large_magnitudes() {
        assert_eq!(number(0.0001), "0.0001");
        assert_eq!(number(10.5), "10.5");
        assert_eq!(number(1e21), "1000000000000000000000");
        assert_eq!(number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(number(-0.0), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(number(f64::NAN), "calc(NaN)");
        assert_eq!(number(f64::INFINITY), "calc(infinity)");
        assert_eq!(number(f64::NEG_INFINITY), "calc(-infinity)");

        let mut buf = String::new();
        write_dimension(&mut buf, f64::INFINITY, "px");
        assert_eq!(buf, "calc(infinity * 1px)");
    }
}
