//! # cssmodel
//!
//! A typed model of CSS values that serializes to exact CSS text.
//!
//! ## Features
//!
//! - Numbers, percentages and dimensioned values (`<length>`, `<time>`,
//!   `<frequency>`, `<resolution>`, `<angle>`) with unit conversion
//! - Two-way percentage unions such as `<length-percentage>`
//! - Opaque `calc()` / `min()` / `max()` / `clamp()` expressions
//! - `<ratio>` with simplification
//! - Factory traits that give property types a shared unit vocabulary
//!
//! ## Quick Start
//!
//! ```
//! use cssmodel::prelude::*;
//!
//! assert_eq!(LengthPercentage::px(10.5).to_css_string(), "10.5px");
//! assert_eq!(AnglePercentage::from(45).to_css_string(), "45deg");
//! assert_eq!(Ratio::new(16, 9).unwrap().to_css_string(), "16 / 9");
//! assert_eq!(
//!     Calc::clamp("10px", "5vw", "50px").to_css_string(),
//!     "clamp(10px, 5vw, 50px)"
//! );
//! assert_eq!((Time::s(1) + Time::ms(500)).to_css_string(), "1.5s");
//! ```
//!
//! ## Properties
//!
//! Property types render whole declarations:
//!
//! ```
//! use cssmodel::prelude::*;
//! use cssmodel::properties::{Property, Width};
//!
//! assert_eq!(Width::percent(50).declaration().to_string(), "width: 50%;");
//! ```

pub mod convert;
pub mod error;
pub mod properties;
pub mod values;

pub use error::{Error, Result};
pub use values::ToCss;

/// The value types and factory traits most code needs.
pub mod prelude {
    pub use crate::convert::{
        AngleConvertible, LengthConvertible, LineStyleConvertible, NumberConvertible,
        PercentageConvertible, TimeConvertible,
    };
    pub use crate::values::{
        Angle, AngleUnit, AnglePercentage, Calc, Frequency, FrequencyUnit, Length,
        LengthPercentage, LengthUnit, Number, NumberPercentage, Percentage, Ratio, Resolution,
        ResolutionUnit, Time, TimePercentage, TimeUnit, ToCss,
    };
}
