//! Loosely typed leaf values.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// A table cell, header label, metric or timeline period.
///
/// Authors write these as bare YAML scalars, so a cell may be a number, a
/// boolean or a string. Rendering stringifies the value first, so `1` renders
/// as `"1"` and `true` as `"true"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<Value> for Scalar {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Scalar::Null,
            Value::Bool(b) => Scalar::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Scalar::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Scalar::Float(f)
                } else {
                    Scalar::Text(n.to_string())
                }
            }
            Value::String(s) => Scalar::Text(s),
            Value::Tagged(tagged) => {
                let serde_yaml::value::TaggedValue { value, .. } = *tagged;
                Scalar::from(value)
            }
            other => {
                let text = serde_yaml::to_string(&other).unwrap_or_default();
                Scalar::Text(text.trim_end().to_string())
            }
        }
    }
}

impl Scalar {
    /// Stringified value, `None` for null.
    pub fn into_text(self) -> Option<String> {
        match self {
            Scalar::Null => None,
            Scalar::Text(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}

/// Deserialize an optional text field that authors may write as any scalar,
/// so `title: 2024` reads as `"2024"`.
pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_text))
}

/// Like [`text`], for a list of lines.
pub(crate) fn text_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<String>>, D::Error> {
    Ok(Option::<Vec<Scalar>>::deserialize(deserializer)?
        .map(|items| items.iter().map(ToString::to_string).collect()))
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Integer(i)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Integer(i) => write!(f, "{i}"),
            Scalar::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}
