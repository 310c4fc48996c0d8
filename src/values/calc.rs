//! Math expressions: `calc()`, `min()`, `max()` and `clamp()`.
//!
//! The expression text is kept opaque. Serialization only decides whether
//! the text needs a `calc(...)` wrapper; the arithmetic inside is left for
//! the CSS engine to validate.

use super::{ToCss, display_via_to_css};

/// Math functions that stand on their own without a `calc()` wrapper.
const BARE_FUNCTIONS: &[&str] = &["min", "max", "clamp"];

/// Every math function name that marks an expression as nested.
const MATH_FUNCTIONS: &[&str] = &["calc", "min", "max", "clamp"];

/// A CSS math expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Calc {
    expression: String,
}

impl Calc {
    /// Wrap a free-form expression such as `"100% - 20px"`.
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// `min(<args>)`, with `args` already comma separated.
    pub fn min(args: impl AsRef<str>) -> Self {
        Self::call("min", args.as_ref())
    }

    /// `max(<args>)`, with `args` already comma separated.
    pub fn max(args: impl AsRef<str>) -> Self {
        Self::call("max", args.as_ref())
    }

    /// `clamp(<min>, <preferred>, <max>)`.
    pub fn clamp(min: impl AsRef<str>, preferred: impl AsRef<str>, max: impl AsRef<str>) -> Self {
        Self::new(format!(
            "clamp({}, {}, {})",
            min.as_ref(),
            preferred.as_ref(),
            max.as_ref()
        ))
    }

    /// `min()` over typed values.
    pub fn min_of<T: ToCss>(values: impl IntoIterator<Item = T>) -> Self {
        Self::call("min", &join(values))
    }

    /// `max()` over typed values.
    pub fn max_of<T: ToCss>(values: impl IntoIterator<Item = T>) -> Self {
        Self::call("max", &join(values))
    }

    fn call(name: &str, args: &str) -> Self {
        Self::new(format!("{name}({args})"))
    }

    /// The raw expression as given.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Returns true when the whole trimmed expression is one `min()`,
    /// `max()` or `clamp()` call, which serializes without a wrapper.
    pub fn is_math_function(&self) -> bool {
        let trimmed = self.expression.trim();
        BARE_FUNCTIONS.iter().any(|name| {
            function_args_start(trimmed, name)
                .is_some_and(|open| closing_paren(trimmed, open) == Some(trimmed.len() - 1))
        })
    }

    /// Returns true when the expression contains a math function call of
    /// its own.
    pub fn is_nested(&self) -> bool {
        let lower = self.expression.to_ascii_lowercase();
        let bytes = lower.as_bytes();
        MATH_FUNCTIONS.iter().any(|name| {
            lower.match_indices(&format!("{name}(")).any(|(index, _)| {
                // Skip names that are the tail of a longer identifier (`my-min(`).
                index == 0 || !is_ident_byte(bytes[index - 1])
            })
        })
    }
}

impl ToCss for Calc {
    fn to_css(&self, buf: &mut String) {
        let trimmed = self.expression.trim();
        if self.is_math_function() {
            log::trace!("math function left bare: {trimmed}");
            buf.push_str(trimmed);
        } else {
            buf.push_str("calc(");
            buf.push_str(trimmed);
            buf.push(')');
        }
    }
}

display_via_to_css!(Calc);

fn join<T: ToCss>(values: impl IntoIterator<Item = T>) -> String {
    let mut buf = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            buf.push_str(", ");
        }
        value.to_css(&mut buf);
    }
    buf
}

/// Byte index of the `(` when `text` starts with `name(`, ignoring case.
fn function_args_start(text: &str, name: &str) -> Option<usize> {
    let head = text.get(..name.len())?;
    (head.eq_ignore_ascii_case(name) && text[name.len()..].starts_with('(')).then_some(name.len())
}

/// Byte index of the `)` matching the `(` at `open`.
///
/// Parentheses inside quoted strings or `/* */` comments do not count, and
/// a backslash escapes the byte after it everywhere except in comments.
fn closing_paren(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut index = open;

    while index < bytes.len() {
        let byte = bytes[index];
        if let Some(q) = quote {
            if byte == b'\\' {
                index += 1;
            } else if byte == q {
                quote = None;
            }
            index += 1;
            continue;
        }
        match byte {
            b'\\' => index += 1,
            b'/' if bytes.get(index + 1) == Some(&b'*') => {
                // An unterminated comment runs to the end of the text.
                index = text[index + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |end| index + 2 + end + 1);
            }
            b'"' | b'\'' => quote = Some(byte),
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
        index += 1;
    }
    None
}

fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{Length, Percentage};

    #[test]
    fn test_wraps_plain_expressions() {
        assert_eq!(Calc::new("100% - 20px").to_css_string(), "calc(100% - 20px)");
    }

    #[test]
    fn test_trims_ends_only() {
        assert_eq!(
            Calc::new("  100%   -  20px \n").to_css_string(),
            "calc(100%   -  20px)"
        );
    }

    #[test]
    fn test_factories_are_not_wrapped() {
        assert_eq!(Calc::min("10px, 2em").to_css_string(), "min(10px, 2em)");
        assert_eq!(Calc::max("1rem, 5vw").to_css_string(), "max(1rem, 5vw)");
        assert_eq!(
            Calc::clamp("10px", "5vw", "50px").to_css_string(),
            "clamp(10px, 5vw, 50px)"
        );
    }

    #[test]
    fn test_partial_function_call_is_wrapped() {
        assert_eq!(
            Calc::new("min(10px,2em) + 1rem").to_css_string(),
            "calc(min(10px,2em) + 1rem)"
        );
        assert_eq!(
            Calc::new("min(10%, 20px) + max(1px, 2px)").to_css_string(),
            "calc(min(10%, 20px) + max(1px, 2px))"
        );
        assert_eq!(
            Calc::new("calc(100% - 20px) + 1rem").to_css_string(),
            "calc(calc(100% - 20px) + 1rem)"
        );
    }

    #[test]
    fn test_bare_detection() {
        assert!(Calc::new(" MIN(1px, 2px) ").is_math_function());
        assert!(Calc::new("clamp(1px, min(2px, 3vw), 4px)").is_math_function());
        assert!(!Calc::new("minimum(1px)").is_math_function());
        assert!(!Calc::new("min(1px, 2px").is_math_function());
        assert!(!Calc::new("calc(1px + 2px)").is_math_function());
        assert!(Calc::new("max(1px, var(--a, \")\"))").is_math_function());
        assert!(!Calc::new("min(a\\)").is_math_function());
        assert!(Calc::new("min(a\\), 1px)").is_math_function());
        assert_eq!(Calc::new("min(a\\)").to_css_string(), "calc(min(a\\))");
    }

    #[test]
    fn test_comments_are_skipped() {
        assert!(Calc::new("min(1px /* ) */, 2px)").is_math_function());
        assert_eq!(
            Calc::new("min(1px /* ) */, 2px)").to_css_string(),
            "min(1px /* ) */, 2px)"
        );
        assert!(!Calc::new("min(1px /* )").is_math_function());
    }

    #[test]
    fn test_nesting() {
        assert!(Calc::new("calc(100% - 20px) + 1rem").is_nested());
        assert!(Calc::new("100% - min(2px, 1em)").is_nested());
        assert!(!Calc::new("100% - 20px").is_nested());
        assert!(!Calc::new("my-min(1px)").is_nested());
    }

    #[test]
    fn test_typed_factories() {
        let calc = Calc::min_of([Length::px(10), Length::em(2)]);
        assert_eq!(calc.to_css_string(), "min(10px, 2em)");
        assert_eq!(
            Calc::max_of([Percentage::from(50), Percentage::from(10)]).to_string(),
            "max(50%, 10%)"
        );
    }
}
