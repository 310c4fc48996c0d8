//! `<ratio>` values, as used by `aspect-ratio`.

use super::{ToCss, display_via_to_css, write_number};
use crate::error::{Error, Result};

/// Decimal digits tried when scaling components to integers.
const MAX_DECIMALS: i32 = 10;

/// A CSS `<ratio>`: `width / height`, both finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawRatio")
)]
pub struct Ratio {
    width: f64,
    height: f64,
}

impl Ratio {
    /// Create a ratio, failing with [`Error::MalformedRatio`] unless both
    /// components are finite and positive.
    pub fn new(width: impl Into<f64>, height: impl Into<f64>) -> Result<Self> {
        let (width, height) = (width.into(), height.into());
        if !is_valid_component(width) || !is_valid_component(height) {
            log::debug!("rejecting ratio {width} / {height}");
            return Err(Error::MalformedRatio { width, height });
        }
        Ok(Self { width, height })
    }

    /// A single-number ratio; the height is 1.
    pub fn from_value(value: impl Into<f64>) -> Result<Self> {
        Self::new(value, 1.0)
    }

    /// `1 / 1`.
    pub const fn square() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }

    /// `16 / 9`.
    pub const fn widescreen() -> Self {
        Self {
            width: 16.0,
            height: 9.0,
        }
    }

    /// `4 / 3`.
    pub const fn standard() -> Self {
        Self {
            width: 4.0,
            height: 3.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// `width / height`.
    pub fn quotient(&self) -> f64 {
        self.width / self.height
    }

    /// The ratio with its components swapped.
    pub fn inverse(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Reduce both components by their greatest common divisor.
    ///
    /// Components are first scaled by a power of ten until both are whole
    /// numbers, so `1.5 / 1` becomes `3 / 2`. Ratios that have no such
    /// representation within ten decimals are returned unchanged.
    pub fn simplified(&self) -> Self {
        let Some((width, height)) = integer_components(self.width, self.height) else {
            log::debug!("ratio {self} has no integer form, leaving as is");
            return *self;
        };
        let divisor = gcd(width, height);
        Self {
            width: (width / divisor) as f64,
            height: (height / divisor) as f64,
        }
    }
}

impl ToCss for Ratio {
    fn to_css(&self, buf: &mut String) {
        write_number(buf, self.width);
        if self.width != self.height {
            buf.push_str(" / ");
            write_number(buf, self.height);
        }
    }
}

display_via_to_css!(Ratio);

fn is_valid_component(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Scale both components by the smallest power of ten that makes them
/// whole, returning them as integers.
fn integer_components(width: f64, height: f64) -> Option<(u64, u64)> {
    (0..=MAX_DECIMALS).find_map(|decimals| {
        let scale = 10f64.powi(decimals);
        let (w, h) = (width * scale, height * scale);
        // Past 2^53 whole-number checks on f64 mean nothing.
        if w > 9_007_199_254_740_992.0 || h > 9_007_199_254_740_992.0 {
            return None;
        }
        let (rw, rh) = (w.round(), h.round());
        let close =
            |scaled: f64, rounded: f64| (scaled - rounded).abs() <= 4.0 * f64::EPSILON * scaled.max(1.0);
        (close(w, rw) && close(h, rh) && rw >= 1.0 && rh >= 1.0).then(|| (rw as u64, rh as u64))
    })
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Unvalidated wire form, checked on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRatio {
    width: f64,
    height: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRatio> for Ratio {
    type Error = Error;

    fn try_from(raw: RawRatio) -> Result<Self> {
        Self::new(raw.width, raw.height)
    }
}
