//! Type alias builder.

use declgen_core::{CodeBuilder, Dialect, TypeRef};
use serde::Deserialize;

use crate::{Render, Result, Scope, validate::require_name};

/// Initial configuration for a [`TypeBuilder`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeConfig {
    pub name: String,
    #[serde(default, rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub desc: String,
}

/// Builder for named type aliases.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "TypeConfig")]
pub struct TypeBuilder {
    name: String,
    ty: TypeRef,
    desc: String,
}

impl TypeBuilder {
    pub fn create(config: TypeConfig) -> Self {
        Self {
            name: config.name,
            ty: config.ty,
            desc: config.desc,
        }
    }

    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self::create(TypeConfig {
            name: name.into(),
            ty: ty.into(),
            desc: String::new(),
        })
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_type(&mut self, ty: impl Into<TypeRef>) -> &mut Self {
        self.ty = ty.into();
        self
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn set_desc(&mut self, desc: impl Into<String>) -> &mut Self {
        self.desc = desc.into();
        self
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn validate(&self) -> Result<()> {
        require_name("type", &self.name)
    }
}

impl From<TypeConfig> for TypeBuilder {
    fn from(config: TypeConfig) -> Self {
        Self::create(config)
    }
}

impl Render for TypeBuilder {
    fn render_in(&self, dialect: Dialect, scope: Scope) -> Result<String> {
        let ty = self.ty.render(dialect);
        let mut builder = CodeBuilder::for_dialect(dialect);
        builder.push_doc_if(dialect, &self.desc);
        match dialect {
            Dialect::Lua => builder.push_line(&format!("---@alias {} {}", self.name, ty)),
            Dialect::TypeScript => builder.push_line(&format!(
                "{}type {} = {};",
                scope.declare_prefix(),
                self.name,
                ty
            )),
        };
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use declgen_core::DataType;

    use super::*;

    #[test]
    fn test_render() {
        let alias = TypeBuilder::new("Handler", "fun(event: string): boolean");
        assert_eq!(
            alias.render(Dialect::Lua).unwrap(),
            "---@alias Handler fun(event: string): boolean"
        );

        let mut alias = TypeBuilder::new("Id", DataType::Uint64);
        alias.set_desc("Row identifier");
        assert_eq!(
            alias.render(Dialect::Lua).unwrap(),
            "---Row identifier\n---@alias Id integer"
        );
        assert_eq!(
            alias.render(Dialect::TypeScript).unwrap(),
            "/** Row identifier */\ndeclare type Id = bigint;"
        );
        assert_eq!(
            alias.render_in(Dialect::TypeScript, Scope::Namespace).unwrap(),
            "/** Row identifier */\ntype Id = bigint;"
        );
    }

    #[test]
    fn test_default_type_is_any() {
        let alias = TypeBuilder::create(TypeConfig {
            name: "Anything".into(),
            ..Default::default()
        });
        assert_eq!(alias.render(Dialect::TypeScript).unwrap(), "declare type Anything = any;");
    }

    #[test]
    fn test_validate() {
        assert!(TypeBuilder::new("A", "string").validate().is_ok());
        assert!(TypeBuilder::new("  ", "string").validate().is_err());
    }
}
