//! `<time>` values.

use super::{dimension, linear_dimension, unit_enum};

unit_enum! {
    /// CSS time units.
    pub enum TimeUnit {
        S => "s",
        Ms => "ms",
    }
}

impl TimeUnit {
    /// Size of one unit in milliseconds.
    pub fn factor(self) -> f64 {
        match self {
            Self::S => 1000.0,
            Self::Ms => 1.0,
        }
    }
}

dimension! {
    /// A CSS `<time>`. Negative times are valid (e.g. `transition-delay`).
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Time(TimeUnit);
}

linear_dimension!(Time(TimeUnit));

impl Time {
    pub fn s(value: impl Into<f64>) -> Self {
        Self::new(value.into(), TimeUnit::S)
    }

    pub fn ms(value: impl Into<f64>) -> Self {
        Self::new(value.into(), TimeUnit::Ms)
    }

    pub fn in_seconds(&self) -> f64 {
        self.converted(TimeUnit::S).value
    }

    pub fn in_milliseconds(&self) -> f64 {
        self.converted(TimeUnit::Ms).value
    }
}
