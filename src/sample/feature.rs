//! Defines the value of a single feature.
use serde::{Serialize, Deserialize};

use std::fmt;


/// A feature value of a [`Datum`](crate::Datum).
/// A column may hold values of different kinds;
/// split rules only match values of their own kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A real number.
    Numeric(f64),
    /// A flag.
    Boolean(bool),
    /// A category name.
    Categorical(String),
}


impl Value {
    /// Parse a raw field.
    /// Numbers become [`Value::Numeric`],
    /// `true`/`false` become [`Value::Boolean`],
    /// anything else is kept as [`Value::Categorical`].
    pub fn parse(field: &str) -> Self {
        let field = field.trim();
        if let Ok(x) = field.parse::<f64>() {
            return Self::Numeric(x);
        }
        match field {
            "true" | "TRUE" | "True" => Self::Boolean(true),
            "false" | "FALSE" | "False" => Self::Boolean(false),
            _ => Self::Categorical(field.to_string()),
        }
    }


    /// Returns the numeric value, if any.
    #[inline]
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Self::Numeric(x) => Some(*x),
            _ => None,
        }
    }
}


impl From<f64> for Value {
    #[inline]
    fn from(x: f64) -> Self {
        Self::Numeric(x)
    }
}


impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}


impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Categorical(s.to_string())
    }
}


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Categorical(s) => write!(f, "{s}"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_each_kind() {
        assert_eq!(Value::parse(" 3.5 "), Value::Numeric(3.5));
        assert_eq!(Value::parse("-2"), Value::Numeric(-2.0));
        assert_eq!(Value::parse("true"), Value::Boolean(true));
        assert_eq!(Value::parse("False"), Value::Boolean(false));
        assert_eq!(Value::parse("tcp"), Value::Categorical("tcp".into()));
    }
}
