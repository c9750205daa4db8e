//! Literal values assigned to variables, defaults and enum members.

use serde::{Deserialize, Deserializer};

use crate::Dialect;

/// A literal value that can be rendered in any dialect.
///
/// The set of kinds is closed so every renderer handles each one explicitly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ValueRepr")]
pub enum Value {
    /// The null value: `nil` in Lua, `null` in TypeScript.
    Nil,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String literal (quoted and escaped on render).
    String(String),
    /// Raw expression emitted verbatim (e.g. `math.pi`, `Color.Red`).
    Raw(String),
}

impl Value {
    /// Create a boolean value.
    pub fn bool(v: bool) -> Self {
        Self::Bool(v)
    }

    /// Create an integer value.
    pub fn int(v: i64) -> Self {
        Self::Int(v)
    }

    /// Create a float value.
    pub fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Create a string literal value.
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create a raw expression value.
    pub fn raw(v: impl Into<String>) -> Self {
        Self::Raw(v.into())
    }

    /// The integer payload, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Literal text for this value in the given dialect.
    pub fn render(&self, dialect: Dialect) -> String {
        match self {
            Value::Nil => match dialect {
                Dialect::Lua => "nil".to_string(),
                Dialect::TypeScript => "null".to_string(),
            },
            Value::Bool(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) => render_float(*v, dialect),
            Value::String(s) => match dialect {
                Dialect::Lua => lua_string_literal(s),
                Dialect::TypeScript => serde_json::Value::String(s.clone()).to_string(),
            },
            Value::Raw(expr) => expr.clone(),
        }
    }

    /// Literal text for an optional value; an absent value renders the
    /// dialect's unset token (`nil` in Lua, `undefined` in TypeScript).
    pub fn render_or_unset(value: Option<&Value>, dialect: Dialect) -> String {
        match value {
            Some(value) => value.render(dialect),
            None => match dialect {
                Dialect::Lua => "nil".to_string(),
                Dialect::TypeScript => "undefined".to_string(),
            },
        }
    }
}

impl Value {
    /// Deserialize an optional value field, keeping an explicit `null` as
    /// [`Value::Nil`]. Paired with `#[serde(default)]`, only a missing field
    /// becomes `None`.
    pub fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Some)
    }
}

fn render_float(v: f64, dialect: Dialect) -> String {
    if v.is_finite() {
        // Debug keeps the fractional part ("2.0" rather than "2")
        return format!("{:?}", v);
    }
    match dialect {
        Dialect::Lua if v.is_nan() => "(0/0)".to_string(),
        Dialect::Lua if v.is_sign_positive() => "math.huge".to_string(),
        Dialect::Lua => "-math.huge".to_string(),
        Dialect::TypeScript if v.is_nan() => "NaN".to_string(),
        Dialect::TypeScript if v.is_sign_positive() => "Infinity".to_string(),
        Dialect::TypeScript => "-Infinity".to_string(),
    }
}

fn lua_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\{:03}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

/// Wire shape of a [`Value`] in TOML/JSON manifests.
///
/// Scalars map to their literal kinds, `null` to [`Value::Nil`] and a
/// `{ raw = "..." }` table to [`Value::Raw`].
#[derive(Deserialize)]
#[serde(untagged)]
enum ValueRepr {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Raw { raw: String },
    Nil(()),
}

impl From<ValueRepr> for Value {
    fn from(repr: ValueRepr) -> Self {
        match repr {
            ValueRepr::Bool(v) => Value::Bool(v),
            ValueRepr::Int(v) => Value::Int(v),
            ValueRepr::Float(v) => Value::Float(v),
            ValueRepr::String(v) => Value::String(v),
            ValueRepr::Raw { raw } => Value::Raw(raw),
            ValueRepr::Nil(()) => Value::Nil,
        }
    }
}
