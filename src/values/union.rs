//! Two-way unions of a value with `<percentage>`.
//!
//! CSS grammar often accepts "a length or a percentage" (and the same for
//! angles, numbers and times). Each union is a closed enum; a bare numeric
//! literal always becomes the non-percentage variant in its default unit.

use super::{Angle, Length, Number, Percentage, Time, ToCss, display_via_to_css};

macro_rules! percentage_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $variant:ident($inner:ty) as $accessor:ident,
        }
        default = $default:expr;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        $vis enum $name {
            $variant($inner),
            Percentage(Percentage),
        }

        impl $name {
            /// Returns true for the percentage variant.
            pub fn is_percentage(&self) -> bool {
                matches!(self, Self::Percentage(_))
            }

            pub fn as_percentage(&self) -> Option<&Percentage> {
                match self {
                    Self::Percentage(percentage) => Some(percentage),
                    Self::$variant(_) => None,
                }
            }

            pub fn $accessor(&self) -> Option<&$inner> {
                match self {
                    Self::$variant(value) => Some(value),
                    Self::Percentage(_) => None,
                }
            }
        }

        impl ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                match self {
                    Self::$variant(value) => value.to_css(buf),
                    Self::Percentage(percentage) => percentage.to_css(buf),
                }
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self::$variant(value)
            }
        }

        impl From<Percentage> for $name {
            fn from(percentage: Percentage) -> Self {
                Self::Percentage(percentage)
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                Self::$variant($default(value))
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self::$variant($default(f64::from(value)))
            }
        }

        display_via_to_css!($name);
    };
}

percentage_union! {
    /// `<length-percentage>`. Literals are pixels.
    pub enum LengthPercentage {
        Length(Length) as as_length,
    }
    default = Length::px;
}

percentage_union! {
    /// `<angle-percentage>`. Literals are degrees.
    pub enum AnglePercentage {
        Angle(Angle) as as_angle,
    }
    default = Angle::deg;
}

percentage_union! {
    /// `<number-percentage>`. Literals are plain numbers.
    pub enum NumberPercentage {
        Number(Number) as as_number,
    }
    default = Number::new;
}

percentage_union! {
    /// `<time-percentage>`. Literals are seconds.
    pub enum TimePercentage {
        Time(Time) as as_time,
    }
    default = Time::s;
}

impl Default for LengthPercentage {
    fn default() -> Self {
        Self::Length(Length::zero())
    }
}
