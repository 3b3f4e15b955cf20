use thiserror::Error;

/// A single typed value, as produced by a value type handler.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// An uncoerced (or string typed) value.
    Text(String),
    /// A number typed value.
    Integer(i64),
    /// A boolean typed value.
    Boolean(bool),
}

impl Value {
    /// The text of a `Value::Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// The number of a `Value::Integer`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(number) => Some(*number),
            _ => None,
        }
    }

    /// The truth of a `Value::Boolean`.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(truth) => Some(*truth),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{text}"),
            Value::Integer(number) => write!(f, "{number}"),
            Value::Boolean(truth) => write!(f, "{truth}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

/// The value stored on an option.
///
/// Single value arities (require, optional, flag) hold a `Scalar`.
/// The multiple arity holds the `Multiple` values in the order they were discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// The last value set.
    Scalar(Value),
    /// Every value pushed, in order.
    Multiple(Vec<Value>),
}

impl OptionValue {
    /// The scalar value, if this is not a sequence.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            OptionValue::Scalar(value) => Some(value),
            OptionValue::Multiple(_) => None,
        }
    }

    /// The sequence of values, if this is not a scalar.
    pub fn as_multiple(&self) -> Option<&[Value]> {
        match self {
            OptionValue::Scalar(_) => None,
            OptionValue::Multiple(values) => Some(values.as_slice()),
        }
    }
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionValue::Scalar(value) => write!(f, "{value}"),
            OptionValue::Multiple(values) => write!(
                f,
                "[{}]",
                values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

/// Errors raised when setting, pushing or validating an option value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// A value pushed onto a number typed option is not numeric.
    #[error("'{raw}' is not numeric.")]
    NonNumeric {
        /// The offending input.
        raw: String,
    },
    /// A value type handler rejected the value.
    #[error("invalid value '{raw}' for type {type_name}.")]
    InvalidValue {
        /// The type the option is declared with.
        type_name: String,
        /// The offending input.
        raw: String,
    },
    /// A value is not among the option's declared valid values.
    #[error("'{raw}' is not one of the valid values [{}].", .valid.join(", "))]
    NotValid {
        /// The offending value.
        raw: String,
        /// The declared valid values.
        valid: Vec<String>,
    },
}

/// Whether `raw` reads as a decimal number.
///
/// Accepts surrounding whitespace, a sign, digits with an optional fraction and an optional exponent.
/// For example: `42`, ` -3.9`, `.5`, `1e3`.
pub fn is_numeric(raw: &str) -> bool {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(i) => (&unsigned[..i], Some(&unsigned[i + 1..])),
        None => (unsigned, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if whole.is_empty() && fraction.is_empty() {
        return false;
    }

    if !all_digits(whole) || !all_digits(fraction) {
        return false;
    }

    match exponent {
        Some(e) => {
            let e = e.strip_prefix(['+', '-']).unwrap_or(e);
            !e.is_empty() && all_digits(e)
        }
        None => true,
    }
}

fn all_digits(part: &str) -> bool {
    part.bytes().all(|b| b.is_ascii_digit())
}

/// Coerce a numeric `raw` to an integer, truncating any fractional part toward zero.
///
/// `"3.9"` becomes `3` and `"-3.9"` becomes `-3`; there is no rounding.
/// Magnitudes beyond `i64` saturate.
pub fn truncate_numeric(raw: &str) -> Result<i64, ValueError> {
    if !is_numeric(raw) {
        return Err(ValueError::NonNumeric {
            raw: raw.to_string(),
        });
    }

    let trimmed = raw.trim();

    match trimmed.parse::<i64>() {
        Ok(number) => Ok(number),
        Err(_) => trimmed
            .parse::<f64>()
            .map(|number| number.trunc() as i64)
            .map_err(|_| ValueError::NonNumeric {
                raw: raw.to_string(),
            }),
    }
}
