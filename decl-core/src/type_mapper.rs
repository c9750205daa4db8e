//! Type references and their per-dialect spelling.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::Dialect;

/// Built-in type names understood by every dialect.
///
/// This is a dialect-neutral vocabulary; use [`DataType::for_dialect`] to get
/// the spelling a particular dialect expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Char,
    String,

    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint128,
    Uint256,

    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Int256,

    Float,
    Number,
    Double,

    Null,
    Nil,
    Void,

    Any,

    Function,
}

impl DataType {
    /// Every built-in type, in declaration order.
    pub const ALL: [DataType; 22] = [
        DataType::Char,
        DataType::String,
        DataType::Uint8,
        DataType::Uint16,
        DataType::Uint32,
        DataType::Uint64,
        DataType::Uint128,
        DataType::Uint256,
        DataType::Int8,
        DataType::Int16,
        DataType::Int32,
        DataType::Int64,
        DataType::Int128,
        DataType::Int256,
        DataType::Float,
        DataType::Number,
        DataType::Double,
        DataType::Null,
        DataType::Nil,
        DataType::Void,
        DataType::Any,
        DataType::Function,
    ];

    /// Dialect-neutral name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Char => "char",
            DataType::String => "string",
            DataType::Uint8 => "uint8",
            DataType::Uint16 => "uint16",
            DataType::Uint32 => "uint32",
            DataType::Uint64 => "uint64",
            DataType::Uint128 => "uint128",
            DataType::Uint256 => "uint256",
            DataType::Int8 => "int8",
            DataType::Int16 => "int16",
            DataType::Int32 => "int32",
            DataType::Int64 => "int64",
            DataType::Int128 => "int128",
            DataType::Int256 => "int256",
            DataType::Float => "float",
            DataType::Number => "number",
            DataType::Double => "double",
            DataType::Null => "null",
            DataType::Nil => "nil",
            DataType::Void => "void",
            DataType::Any => "any",
            DataType::Function => "function",
        }
    }

    /// Whether this is one of the fixed-width integer types.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DataType::Uint8
                | DataType::Uint16
                | DataType::Uint32
                | DataType::Uint64
                | DataType::Uint128
                | DataType::Uint256
                | DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::Int128
                | DataType::Int256
        )
    }

    /// Spelling of this type in the given dialect.
    pub fn for_dialect(&self, dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::Lua => self.lua_name(),
            Dialect::TypeScript => self.typescript_name(),
        }
    }

    fn lua_name(&self) -> &'static str {
        match self {
            DataType::Char | DataType::String => "string",
            ty if ty.is_integer() => "integer",
            DataType::Float | DataType::Number | DataType::Double => "number",
            DataType::Null | DataType::Nil | DataType::Void => "nil",
            DataType::Function => "function",
            _ => "any",
        }
    }

    fn typescript_name(&self) -> &'static str {
        match self {
            DataType::Char | DataType::String => "string",
            DataType::Uint64
            | DataType::Uint128
            | DataType::Uint256
            | DataType::Int64
            | DataType::Int128
            | DataType::Int256 => "bigint",
            ty if ty.is_integer() => "number",
            DataType::Float | DataType::Number | DataType::Double => "number",
            DataType::Null | DataType::Nil => "null",
            DataType::Void => "void",
            DataType::Function => "Function",
            _ => "any",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name is not one of the built-in [`DataType`]s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown data type '{0}'")]
pub struct ParseDataTypeError(pub String);

impl FromStr for DataType {
    type Err = ParseDataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::ALL
            .iter()
            .copied()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| ParseDataTypeError(s.to_string()))
    }
}

/// A reference to a type, as written on a parameter, field or variable.
///
/// Named types are emitted verbatim in every dialect; built-in types are
/// spelled per dialect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A type name emitted exactly as given (e.g. `string|nil`, `Foo[]`).
    Named(String),
    /// A built-in type, mapped per dialect.
    Builtin(DataType),
}

impl TypeRef {
    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// The `any` type, used wherever a type is left out.
    pub fn any() -> Self {
        Self::Builtin(DataType::Any)
    }

    /// Spelling of this type in the given dialect.
    pub fn render(&self, dialect: Dialect) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::Builtin(ty) => ty.for_dialect(dialect),
        }
    }

    /// Resolve an optional type, falling back to `any`.
    pub fn render_or_any(ty: Option<&TypeRef>, dialect: Dialect) -> &str {
        match ty {
            Some(ty) => ty.render(dialect),
            None => DataType::Any.for_dialect(dialect),
        }
    }
}

impl Default for TypeRef {
    fn default() -> Self {
        Self::any()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::Builtin(ty) => f.write_str(ty.as_str()),
        }
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<DataType> for TypeRef {
    fn from(ty: DataType) -> Self {
        Self::Builtin(ty)
    }
}

impl<'de> Deserialize<'de> for TypeRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(TypeRef::Named)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lua_names() {
        assert_eq!(DataType::Char.for_dialect(Dialect::Lua), "string");
        assert_eq!(DataType::Int32.for_dialect(Dialect::Lua), "integer");
        assert_eq!(DataType::Uint256.for_dialect(Dialect::Lua), "integer");
        assert_eq!(DataType::Double.for_dialect(Dialect::Lua), "number");
        assert_eq!(DataType::Void.for_dialect(Dialect::Lua), "nil");
        assert_eq!(DataType::Function.for_dialect(Dialect::Lua), "function");
        assert_eq!(DataType::Any.for_dialect(Dialect::Lua), "any");
    }

    #[test]
    fn test_typescript_names() {
        assert_eq!(DataType::Int32.for_dialect(Dialect::TypeScript), "number");
        assert_eq!(DataType::Int64.for_dialect(Dialect::TypeScript), "bigint");
        assert_eq!(DataType::Uint128.for_dialect(Dialect::TypeScript), "bigint");
        assert_eq!(DataType::Nil.for_dialect(Dialect::TypeScript), "null");
        assert_eq!(DataType::Void.for_dialect(Dialect::TypeScript), "void");
        assert_eq!(
            DataType::Function.for_dialect(Dialect::TypeScript),
            "Function"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("uint16".parse::<DataType>(), Ok(DataType::Uint16));
        assert_eq!("function".parse::<DataType>(), Ok(DataType::Function));
        assert_eq!(
            "Integer".parse::<DataType>(),
            Err(ParseDataTypeError("Integer".to_string()))
        );
    }

    #[test]
    fn test_every_name_parses_back() {
        for ty in DataType::ALL {
            assert_eq!(ty.as_str().parse::<DataType>(), Ok(ty));
        }
    }

    #[test]
    fn test_named_is_verbatim() {
        let ty = TypeRef::from("string|nil");
        assert_eq!(ty.render(Dialect::Lua), "string|nil");
        assert_eq!(ty.render(Dialect::TypeScript), "string|nil");
    }

    #[test]
    fn test_render_or_any() {
        assert_eq!(TypeRef::render_or_any(None, Dialect::Lua), "any");
        let ty = TypeRef::from(DataType::Int8);
        assert_eq!(TypeRef::render_or_any(Some(&ty), Dialect::Lua), "integer");
    }

    #[test]
    fn test_deserialize_as_named() {
        #[derive(Deserialize)]
        struct Doc {
            ty: TypeRef,
        }

        let doc: Doc = toml::from_str(r#"ty = "int32""#).unwrap();
        assert_eq!(doc.ty, TypeRef::Named("int32".to_string()));
    }
}
