//! Core types for the declgen declaration generator.
//!
//! This crate holds the dialect-independent vocabulary shared by the
//! builders: the output [`Dialect`], literal [`Value`]s, type references
//! and the indentation-aware [`CodeBuilder`].

mod code_builder;
mod dialect;
mod indent;
mod type_mapper;
mod value;

pub use code_builder::{CodeBuilder, flatten_doc};
pub use dialect::{Dialect, ParseDialectError};
pub use indent::Indent;
pub use type_mapper::{DataType, ParseDataTypeError, TypeRef};
pub use value::Value;
