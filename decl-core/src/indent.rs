//! Indentation configuration for rendered declarations.

use crate::Dialect;

/// Width, in spaces, of one level of nested declaration bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: u8,
}

impl Indent {
    /// 4-space indentation (Lua tables).
    pub const LUA: Self = Self::spaces(4);

    /// 2-space indentation (TypeScript blocks).
    pub const TYPESCRIPT: Self = Self::spaces(2);

    pub const fn spaces(width: u8) -> Self {
        Self { width }
    }

    /// Conventional indentation for a dialect.
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Lua => Self::LUA,
            Dialect::TypeScript => Self::TYPESCRIPT,
        }
    }

    pub fn width(&self) -> usize {
        self.width.into()
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::LUA
    }
}
