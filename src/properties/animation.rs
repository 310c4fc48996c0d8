//! Animation and transition timing.

use super::{Global, Property, forward_factories, property};
use crate::convert::TimeConvertible;
use crate::values::{Time, ToCss, display_via_to_css};

/// Value of `animation-direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationDirection {
    #[default]
    Normal,
    Reverse,
    Alternate,
    AlternateReverse,
    Global(Global),
}

impl AnimationDirection {
    const KEYWORDS: [AnimationDirection; 4] = [
        AnimationDirection::Normal,
        AnimationDirection::Reverse,
        AnimationDirection::Alternate,
        AnimationDirection::AlternateReverse,
    ];

    /// Every value: the direction keywords, then each global keyword.
    pub fn all_cases() -> Vec<AnimationDirection> {
        Self::KEYWORDS
            .into_iter()
            .chain(Global::ALL.iter().copied().map(AnimationDirection::Global))
            .collect()
    }
}

impl ToCss for AnimationDirection {
    fn to_css(&self, buf: &mut String) {
        match self {
            AnimationDirection::Normal => buf.push_str("normal"),
            AnimationDirection::Reverse => buf.push_str("reverse"),
            AnimationDirection::Alternate => buf.push_str("alternate"),
            AnimationDirection::AlternateReverse => buf.push_str("alternate-reverse"),
            AnimationDirection::Global(global) => global.to_css(buf),
        }
    }
}

impl Property for AnimationDirection {
    const NAME: &'static str = "animation-direction";
}

impl From<Global> for AnimationDirection {
    fn from(global: Global) -> Self {
        AnimationDirection::Global(global)
    }
}

/// Value of `transition-duration`: one time per transitioned property.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionDurationValue {
    Times(Vec<Time>),
    Global(Global),
}

impl TransitionDurationValue {
    /// A comma separated list of durations.
    pub fn list(times: impl IntoIterator<Item = Time>) -> Self {
        TransitionDurationValue::Times(times.into_iter().collect())
    }
}

impl ToCss for TransitionDurationValue {
    fn to_css(&self, buf: &mut String) {
        match self {
            TransitionDurationValue::Times(times) => {
                for (i, time) in times.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    time.to_css(buf);
                }
            }
            TransitionDurationValue::Global(global) => global.to_css(buf),
        }
    }
}

impl TimeConvertible for TransitionDurationValue {
    fn time(time: Time) -> Self {
        TransitionDurationValue::Times(vec![time])
    }
}

impl From<Global> for TransitionDurationValue {
    fn from(global: Global) -> Self {
        TransitionDurationValue::Global(global)
    }
}

display_via_to_css!(AnimationDirection, TransitionDurationValue);

property!(TransitionDuration(TransitionDurationValue) => "transition-duration");

forward_factories!(TransitionDuration: TimeConvertible::time(Time));
