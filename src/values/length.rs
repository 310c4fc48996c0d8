//! `<length>` and `<flex>` values.

use std::cmp::Ordering;
use std::ops::{Div, Mul, Neg};

use super::{dimension, rescale, unit_enum};

unit_enum! {
    /// CSS length units, plus the `fr` flex unit used by grid tracks.
    pub enum LengthUnit {
        Px => "px",
        Cm => "cm",
        Mm => "mm",
        /// Quarter-millimeters.
        Q => "Q",
        In => "in",
        Pt => "pt",
        Pc => "pc",
        Em => "em",
        Rem => "rem",
        Ex => "ex",
        Rex => "rex",
        Ch => "ch",
        Rch => "rch",
        Cap => "cap",
        Ic => "ic",
        Lh => "lh",
        Rlh => "rlh",
        Vw => "vw",
        Vh => "vh",
        Vi => "vi",
        Vb => "vb",
        Vmin => "vmin",
        Vmax => "vmax",
        Svw => "svw",
        Svh => "svh",
        Svmin => "svmin",
        Svmax => "svmax",
        Lvw => "lvw",
        Lvh => "lvh",
        Lvmin => "lvmin",
        Lvmax => "lvmax",
        Dvw => "dvw",
        Dvh => "dvh",
        Dvmin => "dvmin",
        Dvmax => "dvmax",
        Cqw => "cqw",
        Cqh => "cqh",
        Cqi => "cqi",
        Cqb => "cqb",
        Cqmin => "cqmin",
        Cqmax => "cqmax",
        /// Fraction of the leftover space in a grid container.
        Fr => "fr",
    }
}

impl LengthUnit {
    /// How many of this unit make up one inch, for the absolute units only.
    pub fn per_inch(self) -> Option<f64> {
        match self {
            Self::Px => Some(96.0),
            Self::In => Some(1.0),
            Self::Cm => Some(2.54),
            Self::Mm => Some(25.4),
            Self::Q => Some(101.6),
            Self::Pt => Some(72.0),
            Self::Pc => Some(6.0),
            _ => None,
        }
    }

    /// Returns true for units with a fixed physical size.
    pub fn is_absolute(self) -> bool {
        self.per_inch().is_some()
    }

    /// Returns true for units resolved against font metrics.
    pub fn is_font_relative(self) -> bool {
        matches!(
            self,
            Self::Em
                | Self::Rem
                | Self::Ex
                | Self::Rex
                | Self::Ch
                | Self::Rch
                | Self::Cap
                | Self::Ic
                | Self::Lh
                | Self::Rlh
        )
    }

    /// Returns true for units resolved against the viewport.
    pub fn is_viewport_relative(self) -> bool {
        matches!(
            self,
            Self::Vw
                | Self::Vh
                | Self::Vi
                | Self::Vb
                | Self::Vmin
                | Self::Vmax
                | Self::Svw
                | Self::Svh
                | Self::Svmin
                | Self::Svmax
                | Self::Lvw
                | Self::Lvh
                | Self::Lvmin
                | Self::Lvmax
                | Self::Dvw
                | Self::Dvh
                | Self::Dvmin
                | Self::Dvmax
        )
    }

    /// Returns true for container query units.
    pub fn is_container_relative(self) -> bool {
        matches!(
            self,
            Self::Cqw | Self::Cqh | Self::Cqi | Self::Cqb | Self::Cqmin | Self::Cqmax
        )
    }

    /// Returns true for the grid `fr` unit.
    pub fn is_flex(self) -> bool {
        self == Self::Fr
    }
}

dimension! {
    /// A CSS `<length>`.
    ///
    /// Negative lengths are valid. Only absolute units convert into one
    /// another; relative units need layout context this model does not have.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Length(LengthUnit);
}

impl Length {
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// The zero length, serialized as `0px`.
    pub const fn zero() -> Self {
        Self::new(0.0, LengthUnit::Px)
    }

    /// Convert to another unit.
    ///
    /// Returns `None` unless both units are absolute. Converting to the
    /// current unit always succeeds and returns `self` unchanged.
    pub fn converted(self, unit: LengthUnit) -> Option<Self> {
        if unit == self.unit {
            return Some(self);
        }
        // Counts per inch are the inverse of unit sizes.
        let from = self.unit.per_inch()?;
        let to = unit.per_inch()?;
        Some(Self::new(rescale(self.value, to, from), unit))
    }

    /// The length in CSS pixels, when it has a fixed size.
    pub fn in_px(&self) -> Option<f64> {
        self.converted(LengthUnit::Px).map(|length| length.value)
    }

    /// Add `rhs` in this length's unit.
    ///
    /// The result keeps the left unit; `None` if `rhs` cannot be converted.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        let rhs = rhs.converted(self.unit)?;
        Some(Self::new(self.value + rhs.value, self.unit))
    }

    /// Subtract `rhs` in this length's unit.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.checked_add(-rhs)
    }

    /// Order two lengths after converting `other` into this unit.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        let other = other.converted(self.unit)?;
        self.value.partial_cmp(&other.value)
    }
}

macro_rules! length_constructors {
    ($($(#[$meta:meta])* $ctor:ident => $unit:ident),* $(,)?) => {
        impl Length {
            $(
                $(#[$meta])*
                pub fn $ctor(value: impl Into<f64>) -> Self {
                    Self::new(value.into(), LengthUnit::$unit)
                }
            )*
        }
    };
}

length_constructors! {
    px => Px,
    cm => Cm,
    mm => Mm,
    q => Q,
    /// Inches (`in` is a keyword).
    inches => In,
    pt => Pt,
    pc => Pc,
    em => Em,
    rem => Rem,
    ex => Ex,
    ch => Ch,
    lh => Lh,
    vw => Vw,
    vh => Vh,
    vmin => Vmin,
    vmax => Vmax,
    dvh => Dvh,
    cqw => Cqw,
    fr => Fr,
}

impl Default for Length {
    fn default() -> Self {
        Self::zero()
    }
}

impl Mul<f64> for Length {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.unit)
    }
}

impl Div<f64> for Length {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.unit)
    }
}

impl Neg for Length {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}
