use std::fmt;

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Represents a runtime value in the interpreter.
///
/// Evaluation is total: every expression reduces either to a number or to the
/// original text that could not be reduced. There are no other types and no
/// error variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// Unreduced source text, returned verbatim by the evaluator's fallback
    /// rule. Carried around as a first-class value so that arithmetic on it
    /// is an explicit, testable branch rather than an implicit coercion.
    Text(String),
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl Value {
    /// Coerces the value to a number for arithmetic.
    ///
    /// If the trimmed text parses entirely as a number it contributes that
    /// number, otherwise it contributes `0.0`. This is what makes
    /// expressions like `2**3` compute
    /// `2 * (0 * 3)` instead of failing (see the evaluator).
    ///
    /// # Examples
    /// ```
    /// use arsharp::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number(), 2.5);
    /// assert_eq!(Value::from(" 42 ").as_number(), 42.0);
    /// assert_eq!(Value::from("not a number").as_number(), 0.0);
    /// ```
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Number(number) => *number,
            Self::Text(text) => text.trim().parse().unwrap_or(0.0),
        }
    }
}

impl fmt::Display for Value {
    /// Formats the value the way `cout::` prints it.
    ///
    /// Integral finite numbers print without a fractional part (`5`, not
    /// `5.0`). Non-finite numbers use the standard `inf`/`NaN` renderings;
    /// text prints verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => {
                if number.is_finite() && number.fract() == 0.0 && number.abs() <= MAX_SAFE_INTEGER {
                    #[allow(clippy::cast_possible_truncation)]
                    return write!(f, "{}", *number as i64);
                }
                write!(f, "{number}")
            },
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}
