//! `<angle>` values.

use std::f64::consts::PI;

use super::{dimension, linear_dimension, unit_enum};

unit_enum! {
    /// CSS angle units.
    pub enum AngleUnit {
        Deg => "deg",
        Grad => "grad",
        Rad => "rad",
        Turn => "turn",
    }
}

impl AngleUnit {
    /// Size of one unit in degrees.
    pub fn factor(self) -> f64 {
        match self {
            Self::Deg => 1.0,
            Self::Grad => 0.9,
            Self::Rad => 180.0 / PI,
            Self::Turn => 360.0,
        }
    }
}

dimension! {
    /// A CSS `<angle>`. Negative angles rotate counter-clockwise and are valid.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Angle(AngleUnit);
}

linear_dimension!(Angle(AngleUnit));

impl Angle {
    pub fn deg(value: impl Into<f64>) -> Self {
        Self::new(value.into(), AngleUnit::Deg)
    }

    pub fn grad(value: impl Into<f64>) -> Self {
        Self::new(value.into(), AngleUnit::Grad)
    }

    pub fn rad(value: impl Into<f64>) -> Self {
        Self::new(value.into(), AngleUnit::Rad)
    }

    pub fn turn(value: impl Into<f64>) -> Self {
        Self::new(value.into(), AngleUnit::Turn)
    }

    pub fn in_degrees(&self) -> f64 {
        self.converted(AngleUnit::Deg).value
    }

    pub fn in_radians(&self) -> f64 {
        self.converted(AngleUnit::Rad).value
    }

    pub fn in_turns(&self) -> f64 {
        self.converted(AngleUnit::Turn).value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::ToCss;

    #[test]
    fn test_serialization() {
        assert_eq!(Angle::deg(45).to_css_string(), "45deg");
        assert_eq!(Angle::turn(0.25).to_css_string(), "0.25turn");
        assert_eq!(Angle::grad(-100).to_css_string(), "-100grad");
    }

    #[test]
    fn test_conversion() {
        assert_eq!(Angle::turn(1).in_degrees(), 360.0);
        assert_eq!(Angle::grad(100).in_degrees(), 90.0);
        assert!((Angle::deg(180).in_radians() - PI).abs() < 1e-12);
        assert_eq!(Angle::deg(90).in_turns(), 0.25);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Angle::deg(90) + Angle::turn(0.5), Angle::deg(270));
        assert_eq!(Angle::turn(0.5) + Angle::deg(90), Angle::turn(0.75));
        assert_eq!(-Angle::deg(30), Angle::deg(-30));
        assert_eq!(Angle::deg(30) * 2.0, Angle::deg(60));
    }
}
