//! Fluent builders for Lua (LuaCATS) and TypeScript declaration files.
//!
//! Every builder is created from a config (or just a name), mutated through
//! chained `&mut Self` setters, and rendered with [`Render::render`]:
//!
//! ```
//! use declgen_builder::{Dialect, Render, VariableBuilder};
//!
//! let mut v = VariableBuilder::new("HELLO_ALL");
//! v.set_constant(true).set_type("number").set_value(19);
//!
//! assert_eq!(v.render(Dialect::Lua).unwrap(), "---@type number\nHELLO_ALL = 19");
//! assert_eq!(
//!     v.render(Dialect::TypeScript).unwrap(),
//!     "declare const HELLO_ALL: number = 19;"
//! );
//! ```
//!
//! Whole files can also be described in a manifest and loaded with
//! [`DeclFile::open`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod class;
mod enums;
mod error;
mod function;
mod manifest;
mod namespace;
mod render;
mod type_alias;
mod validate;
mod variable;

pub use class::{ClassBuilder, ClassConfig, Field};
pub use declgen_core::{CodeBuilder, DataType, Dialect, Indent, TypeRef, Value};
pub use enums::{EnumBuilder, EnumConfig, EnumMember};
pub use error::{Error, Result, SourceContext, parse_dialect};
pub use function::{FunctionBuilder, FunctionConfig, Parameter, ReturnSpec};
pub use manifest::DeclFile;
pub use namespace::{NamespaceBuilder, NamespaceConfig};
pub use render::{Render, Scope, Shared, shared};
pub use type_alias::{TypeBuilder, TypeConfig};
pub use variable::{VariableBuilder, VariableConfig};
