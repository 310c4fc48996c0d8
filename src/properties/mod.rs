//! CSS properties built on the value types.
//!
//! This module contains:
//! - The `enum_property!` macro for closed keyword sets
//! - [`Global`] keywords accepted by every property
//! - [`Property`], [`Declaration`] and [`DeclarationBlock`]
//! - A set of property types covering each factory trait in [`crate::convert`]

use std::fmt;

use crate::values::ToCss;

mod animation;
mod border;
mod box_model;
mod effects;

/// Macro for defining CSS keyword enums with automatic ToCss implementation.
///
/// # Example
///
/// ```ignore
/// enum_property! {
///     /// Font style (normal, italic, oblique).
///     pub enum FontStyle {
///         #[default]
///         Normal => "normal",
///         Italic => "italic",
///         Oblique => "oblique",
///     }
/// }
/// ```
macro_rules! enum_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[cfg_attr(feature = "serde", serde(rename = $css))]
                $variant,
            )*
        }

        impl $name {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Returns the CSS keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                }
            }

            /// Parse a CSS keyword into this enum (ASCII case-insensitive).
            pub fn from_css(s: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|keyword| keyword.as_str().eq_ignore_ascii_case(s))
            }
        }

        impl $crate::values::ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                buf.push_str(self.as_str());
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Declares a property as a newtype over its value type.
macro_rules! property {
    (
        $(#[$meta:meta])*
        $name:ident($value:ty) => $css:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub $value);

        impl $crate::properties::Property for $name {
            const NAME: &'static str = $css;
        }

        impl $crate::values::ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                $crate::values::ToCss::to_css(&self.0, buf);
            }
        }

        impl From<$value> for $name {
            fn from(value: $value) -> Self {
                Self(value)
            }
        }

        impl From<$crate::properties::Global> for $name {
            fn from(global: $crate::properties::Global) -> Self {
                Self(<$value>::from(global))
            }
        }

        $crate::values::display_via_to_css!($name);
    };
}

pub(crate) use property;

/// Forwards factory traits from a property newtype to its value type.
macro_rules! forward_factories {
    ($name:ident: $($trait:ident::$method:ident($arg:ty)),+ $(,)?) => {
        $(
            impl $crate::convert::$trait for $name {
                fn $method(value: $arg) -> Self {
                    Self($crate::convert::$trait::$method(value))
                }
            }
        )+
    };
}

pub(crate) use forward_factories;

enum_property! {
    /// CSS-wide keywords, valid for every property.
    pub enum Global {
        #[default]
        Inherit => "inherit",
        Initial => "initial",
        Unset => "unset",
        Revert => "revert",
        RevertLayer => "revert-layer",
    }
}

enum_property! {
    /// `<line-style>` keywords used by borders and outlines.
    pub enum LineStyle {
        #[default]
        None => "none",
        Hidden => "hidden",
        Dotted => "dotted",
        Dashed => "dashed",
        Solid => "solid",
        Double => "double",
        Groove => "groove",
        Ridge => "ridge",
        Inset => "inset",
        Outset => "outset",
    }
}

/// A CSS property: a name and a serializable value.
pub trait Property: ToCss {
    /// The property name as written in a stylesheet.
    const NAME: &'static str;

    /// Render this value as a declaration.
    fn declaration(&self) -> Declaration {
        Declaration::new(Self::NAME, self)
    }
}

/// A single `property: value;` pair, already serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new<T: ToCss + ?Sized>(property: impl Into<String>, value: &T) -> Self {
        Self {
            property: property.into(),
            value: value.to_css_string(),
            important: false,
        }
    }

    /// Mark the declaration `!important`.
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }
}

impl ToCss for Declaration {
    fn to_css(&self, buf: &mut String) {
        buf.push_str(&self.property);
        buf.push_str(": ");
        buf.push_str(&self.value);
        if self.important {
            buf.push_str(" !important");
        }
        buf.push(';');
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

/// An ordered list of declarations, serialized space separated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeclarationBlock {
    declarations: Vec<Declaration>,
}

impl DeclarationBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property's declaration.
    pub fn with<P: Property>(mut self, property: P) -> Self {
        self.push(property.declaration());
        self
    }

    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl ToCss for DeclarationBlock {
    fn to_css(&self, buf: &mut String) {
        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 {
                buf.push(' ');
            }
            declaration.to_css(buf);
        }
    }
}

impl fmt::Display for DeclarationBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

pub use animation::{AnimationDirection, TransitionDuration, TransitionDurationValue};
pub use border::{
    BorderBottomStyle, BorderLeftStyle, BorderLineStyle, BorderRightStyle, BorderTopStyle,
};
pub use box_model::{Height, Margin, MarginBottom, MarginLeft, MarginRight, MarginTop, Size, Width};
pub use effects::{AspectRatio, AspectRatioValue, Opacity, OpacityValue, Rotate, RotateValue};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::Length;

    #[test]
    fn test_global_keywords() {
        assert_eq!(Global::RevertLayer.to_css_string(), "revert-layer");
        assert_eq!(Global::from_css("INHERIT"), Some(Global::Inherit));
        assert_eq!(Global::from_css("auto"), None);
        assert_eq!(Global::ALL.len(), 5);
    }

    #[test]
    fn test_line_style_keywords() {
        assert_eq!(LineStyle::default(), LineStyle::None);
        assert_eq!(LineStyle::Groove.to_string(), "groove");
        assert_eq!(LineStyle::from_css("dashed"), Some(LineStyle::Dashed));
    }

    #[test]
    fn test_declaration() {
        let declaration = Declaration::new("width", &Length::px(10));
        assert_eq!(declaration.to_string(), "width: 10px;");
        assert_eq!(declaration.important().to_string(), "width: 10px !important;");
    }

    #[test]
    fn test_declaration_block() {
        let mut block = DeclarationBlock::new();
        assert!(block.is_empty());
        block.push(Declaration::new("margin-top", &Length::em(1)));
        block.push(Declaration::new("opacity", &crate::values::Number::new(0.5)));
        assert_eq!(block.to_css_string(), "margin-top: 1em; opacity: 0.5;");
        assert_eq!(block.declarations().len(), 2);
    }
}
