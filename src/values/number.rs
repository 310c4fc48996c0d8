//! `<number>` and `<percentage>`.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{ToCss, display_via_to_css, write_dimension, write_number};

/// Generates the shared arithmetic and literal conversions of a plain
/// `f64` wrapper.
macro_rules! scalar_ops {
    ($name:ident) => {
        impl $name {
            pub const fn new(value: f64) -> Self {
                Self { value }
            }

            /// The wrapped value.
            #[inline]
            pub fn value(&self) -> f64 {
                self.value
            }

            /// Total order over the wrapped value (NaN sorts last).
            pub fn total_cmp(&self, other: &Self) -> Ordering {
                self.value.total_cmp(&other.value)
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                Self::new(value)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self::new(f64::from(value))
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self::new(f64::from(value))
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                self.value.partial_cmp(&other.value)
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self::new(self.value + rhs.value)
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self::new(self.value - rhs.value)
            }
        }

        impl Mul for $name {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                Self::new(self.value * rhs.value)
            }
        }

        impl Div for $name {
            type Output = Self;

            fn div(self, rhs: Self) -> Self {
                Self::new(self.value / rhs.value)
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;

            fn mul(self, rhs: f64) -> Self {
                Self::new(self.value * rhs)
            }
        }

        impl Div<f64> for $name {
            type Output = Self;

            fn div(self, rhs: f64) -> Self {
                Self::new(self.value / rhs)
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                Self::new(-self.value)
            }
        }
    };
}

/// A CSS `<number>`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Number {
    value: f64,
}

scalar_ops!(Number);

impl ToCss for Number {
    fn to_css(&self, buf: &mut String) {
        write_number(buf, self.value);
    }
}

/// A CSS `<percentage>`.
///
/// Any value is accepted: negative and above-100 percentages are valid CSS
/// and serialize unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Percentage {
    value: f64,
}

scalar_ops!(Percentage);

impl Percentage {
    /// The percentage as a fraction (`50%` is `0.5`).
    pub fn fraction(&self) -> f64 {
        self.value / 100.0
    }
}

impl From<Number> for Percentage {
    fn from(number: Number) -> Self {
        Self::new(number.value)
    }
}

impl ToCss for Percentage {
    fn to_css(&self, buf: &mut String) {
        write_dimension(buf, self.value, "%");
    }
}

display_via_to_css!(Number, Percentage);
