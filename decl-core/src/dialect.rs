//! Output dialects.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// The closed set of output text conventions a declaration can render to.
///
/// Every renderer matches on this exhaustively, so adding a variant is a
/// compile error until each entity knows how to emit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Lua with LuaCATS `---@` annotation comments.
    #[default]
    Lua,
    /// TypeScript ambient declarations.
    #[serde(alias = "ts")]
    TypeScript,
}

impl Dialect {
    /// Every supported dialect, in declaration order.
    pub const ALL: [Dialect; 2] = [Dialect::Lua, Dialect::TypeScript];

    /// Canonical lowercase name (as accepted by [`FromStr`]).
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Lua => "lua",
            Dialect::TypeScript => "typescript",
        }
    }

    /// File extension used for declaration files in this dialect.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Dialect::Lua => "lua",
            Dialect::TypeScript => "d.ts",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a dialect name is outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dialect '{value}' (expected one of: lua, typescript, ts)")]
pub struct ParseDialectError {
    pub value: String,
}

impl FromStr for Dialect {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lua" => Ok(Dialect::Lua),
            "typescript" | "ts" => Ok(Dialect::TypeScript),
            _ => Err(ParseDialectError {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("lua".parse::<Dialect>(), Ok(Dialect::Lua));
        assert_eq!("TypeScript".parse::<Dialect>(), Ok(Dialect::TypeScript));
        assert_eq!(" ts ".parse::<Dialect>(), Ok(Dialect::TypeScript));
    }

    #[test]
    fn test_unknown_dialect() {
        let err = "python".parse::<Dialect>().unwrap_err();
        assert_eq!(err.value, "python");
        assert!(err.to_string().contains("unknown dialect 'python'"));
    }

    #[test]
    fn test_display_round_trips() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.to_string().parse::<Dialect>(), Ok(dialect));
        }
    }

    #[test]
    fn test_default_is_lua() {
        assert_eq!(Dialect::default(), Dialect::Lua);
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Doc {
            dialect: Dialect,
        }

        let doc: Doc = toml::from_str(r#"dialect = "ts""#).unwrap();
        assert_eq!(doc.dialect, Dialect::TypeScript);

        let doc: Doc = toml::from_str(r#"dialect = "lua""#).unwrap();
        assert_eq!(doc.dialect, Dialect::Lua);

        assert!(toml::from_str::<Doc>(r#"dialect = "go""#).is_err());
    }
}
