//! `<frequency>` values.

use super::{dimension, linear_dimension, unit_enum};

unit_enum! {
    pub enum FrequencyUnit {
        Hz => "Hz",
        KHz => "kHz",
    }
}

impl FrequencyUnit {
    /// Size of one unit in hertz.
    pub fn factor(self) -> f64 {
        match self {
            Self::Hz => 1.0,
            Self::KHz => 1000.0,
        }
    }
}

dimension! {
    /// A CSS `<frequency>`.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Frequency(FrequencyUnit);
}

linear_dimension!(Frequency(FrequencyUnit));

impl Frequency {
    pub fn hz(value: impl Into<f64>) -> Self {
        Self::new(value.into(), FrequencyUnit::Hz)
    }

    pub fn khz(value: impl Into<f64>) -> Self {
        Self::new(value.into(), FrequencyUnit::KHz)
    }

    pub fn in_hertz(&self) -> f64 {
        self.converted(FrequencyUnit::Hz).value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::ToCss;

    #[test]
    fn test_serialization() {
        assert_eq!(Frequency::hz(440).to_css_string(), "440Hz");
        assert_eq!(Frequency::khz(1.5).to_css_string(), "1.5kHz");
    }

    #[test]
    fn test_unit_tokens_are_case_insensitive() {
        assert_eq!(FrequencyUnit::from_css("khz"), Some(FrequencyUnit::KHz));
        assert_eq!(FrequencyUnit::from_css("HZ"), Some(FrequencyUnit::Hz));
    }

    #[test]
    fn test_conversion_and_arithmetic() {
        assert_eq!(Frequency::khz(2).in_hertz(), 2000.0);
        assert_eq!(Frequency::khz(1) + Frequency::hz(500), Frequency::khz(1.5));
        assert_eq!(Frequency::hz(500) + Frequency::khz(1), Frequency::hz(1500));
    }
}
