//! Error types for value construction.

use thiserror::Error;

/// Errors raised while constructing a value.
///
/// Arithmetic, unit conversion and serialization never fail; only
/// constructors that guard an invariant return these.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid value {value}: {reason}")]
    InvalidValue { value: f64, reason: &'static str },

    #[error("malformed ratio {width} / {height}: components must be finite and positive")]
    MalformedRatio { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
