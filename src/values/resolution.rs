//! `<resolution>` values.

use std::cmp::Ordering;
use std::ops::Add;

use super::{dimension, rescale, unit_enum};
use crate::error::{Error, Result};

unit_enum! {
    /// CSS resolution units. `x` is an alias of `dppx` but keeps its own token.
    pub enum ResolutionUnit {
        Dpi => "dpi",
        Dpcm => "dpcm",
        Dppx => "dppx",
        X => "x",
    }
}

impl ResolutionUnit {
    /// Size of one unit in dots per inch.
    pub fn factor(self) -> f64 {
        match self {
            Self::Dpi => 1.0,
            Self::Dpcm => 2.54,
            Self::Dppx | Self::X => 96.0,
        }
    }
}

dimension! {
    /// A CSS `<resolution>`.
    ///
    /// Always non-negative: constructors reject negative values, and no
    /// operation can produce one.
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(try_from = "RawResolution")
    )]
    pub struct Resolution(ResolutionUnit);
}

impl Resolution {
    /// Create a resolution, failing with [`Error::InvalidValue`] when
    /// `value` is negative or NaN.
    pub fn new(value: f64, unit: ResolutionUnit) -> Result<Self> {
        if value.is_nan() || value < 0.0 {
            log::debug!("rejecting resolution {value}{unit}");
            return Err(Error::InvalidValue {
                value,
                reason: "resolution must not be negative",
            });
        }
        Ok(Self { value, unit })
    }

    pub fn dpi(value: impl Into<f64>) -> Result<Self> {
        Self::new(value.into(), ResolutionUnit::Dpi)
    }

    pub fn dpcm(value: impl Into<f64>) -> Result<Self> {
        Self::new(value.into(), ResolutionUnit::Dpcm)
    }

    pub fn dppx(value: impl Into<f64>) -> Result<Self> {
        Self::new(value.into(), ResolutionUnit::Dppx)
    }

    pub fn x(value: impl Into<f64>) -> Result<Self> {
        Self::new(value.into(), ResolutionUnit::X)
    }

    /// Convert to another unit. Same-unit conversion returns `self`.
    pub fn converted(self, unit: ResolutionUnit) -> Self {
        if unit == self.unit {
            return self;
        }
        Self {
            value: rescale(self.value, self.unit.factor(), unit.factor()),
            unit,
        }
    }

    pub fn in_dppx(&self) -> f64 {
        self.converted(ResolutionUnit::Dppx).value
    }

    /// Order two resolutions after converting `other` into this unit.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.converted(self.unit).value)
    }

    /// Multiply by `factor`, rejecting factors that would break the
    /// non-negative invariant.
    pub fn checked_scale(self, factor: f64) -> Result<Self> {
        Self::new(self.value * factor, self.unit)
    }
}

impl Add for Resolution {
    type Output = Self;

    /// The result keeps the left operand's unit.
    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.converted(self.unit).value,
            unit: self.unit,
        }
    }
}

/// Unvalidated wire form, checked on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawResolution {
    value: f64,
    unit: ResolutionUnit,
}

#[cfg(feature = "serde")]
impl TryFrom<RawResolution> for Resolution {
    type Error = Error;

    fn try_from(raw: RawResolution) -> Result<Self> {
        Self::new(raw.value, raw.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::ToCss;

    #[test]
    fn test_serialization() {
        assert_eq!(Resolution::dpi(300).unwrap().to_css_string(), "300dpi");
        assert_eq!(Resolution::x(2).unwrap().to_css_string(), "2x");
        assert_eq!(Resolution::dppx(1.5).unwrap().to_css_string(), "1.5dppx");
    }

    #[test]
    fn test_negative_is_rejected() {
        let err = Resolution::new(-1.0, ResolutionUnit::Dpi).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { value, .. } if value == -1.0));
        assert!(Resolution::dpcm(f64::NAN).is_err());
        assert!(Resolution::dpi(0).is_ok());
    }

    #[test]
    fn test_conversion_is_explicit() {
        let dpi = Resolution::dpi(96).unwrap();
        let dppx = Resolution::dppx(1).unwrap();
        assert_ne!(dpi, dppx);
        assert_eq!(dpi.converted(ResolutionUnit::Dppx), dppx);
        assert_eq!(dpi.compare(&dppx), Some(Ordering::Equal));
        assert_eq!(Resolution::dpcm(1).unwrap().converted(ResolutionUnit::Dpi).value(), 2.54);
        assert_eq!(Resolution::x(2).unwrap().in_dppx(), 2.0);
    }

    #[test]
    fn test_add_and_scale() {
        let sum = Resolution::dppx(1).unwrap() + Resolution::dpi(48).unwrap();
        assert_eq!(sum, Resolution::dppx(1.5).unwrap());
        assert!(Resolution::dppx(1).unwrap().checked_scale(-2.0).is_err());
        assert_eq!(
            Resolution::dppx(1).unwrap().checked_scale(3.0).unwrap(),
            Resolution::dppx(3).unwrap()
        );
    }
}
