//! Attribute Values
//!
//! Attribute values as they arrive from callers: strings from markup,
//! booleans and numbers from scripted or JSON-sourced descriptors.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Value of an element attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean value (`false` reads as an absent attribute)
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// String value, the common case for parsed markup
    Text(String),
}

impl AttributeValue {
    /// Whether the attribute counts as present on the element.
    ///
    /// Mirrors boolean HTML attributes toggled off by script: `Bool(false)`
    /// is treated as if the attribute were never set.
    #[inline]
    pub fn is_present(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }

    /// Borrow the string value, if this is a string
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Coerce to the string form used for token matching
    pub fn to_token_string(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s.as_str()),
            Self::Bool(true) => Cow::Borrowed("true"),
            Self::Bool(false) => Cow::Borrowed("false"),
            Self::Number(n) => Cow::Owned(n.to_string()),
        }
    }

    /// Parse as an integer, accepting numeric values and numeric strings
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Number(n) if n.fract() == 0.0 => Some(*n as i64),
            Self::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_token_string())
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_string() {
        assert_eq!(AttributeValue::from("grid").to_token_string(), "grid");
        assert_eq!(AttributeValue::from(true).to_token_string(), "true");
        assert_eq!(AttributeValue::from(3).to_token_string(), "3");
        assert_eq!(AttributeValue::from(2.5).to_token_string(), "2.5");
    }

    #[test]
    fn test_presence() {
        assert!(AttributeValue::from("").is_present());
        assert!(AttributeValue::from(true).is_present());
        assert!(!AttributeValue::from(false).is_present());
    }

    #[test]
    fn test_integer() {
        assert_eq!(AttributeValue::from(" 4 ").as_integer(), Some(4));
        assert_eq!(AttributeValue::from(4).as_integer(), Some(4));
        assert_eq!(AttributeValue::from(4.5).as_integer(), None);
        assert_eq!(AttributeValue::from("four").as_integer(), None);
    }

    #[test]
    fn test_untagged_json() {
        let v: AttributeValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, AttributeValue::Bool(true));
        let v: AttributeValue = serde_json::from_str("5").unwrap();
        assert_eq!(v, AttributeValue::Number(5.0));
        let v: AttributeValue = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(v, AttributeValue::Text("x".into()));
    }
}
