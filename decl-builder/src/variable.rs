//! Variable declaration builder.

use declgen_core::{CodeBuilder, Dialect, TypeRef, Value};
use serde::Deserialize;

use crate::{Render, Result, Scope, validate::require_name};

/// Initial configuration for a [`VariableBuilder`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariableConfig {
    pub name: String,
    #[serde(default)]
    pub constant: bool,
    #[serde(default, deserialize_with = "Value::deserialize_present")]
    pub value: Option<Value>,
    #[serde(default, rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub desc: String,
}

/// Builder for variable declarations.
///
/// `constant` only matters to TypeScript (`const` vs `let`); Lua has no
/// const qualifier and ignores it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "VariableConfig")]
pub struct VariableBuilder {
    name: String,
    constant: bool,
    value: Option<Value>,
    ty: TypeRef,
    desc: String,
}

impl VariableBuilder {
    /// Create a builder from an initial configuration.
    pub fn create(config: VariableConfig) -> Self {
        Self {
            name: config.name,
            constant: config.constant,
            value: config.value,
            ty: config.ty,
            desc: config.desc,
        }
    }

    /// Create an `any`-typed variable with no value.
    pub fn new(name: impl Into<String>) -> Self {
        Self::create(VariableConfig {
            name: name.into(),
            ..Default::default()
        })
    }

    pub fn set_constant(&mut self, constant: bool) -> &mut Self {
        self.constant = constant;
        self
    }

    pub fn constant(&self) -> bool {
        self.constant
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    /// Forget the value; it renders as the dialect's unset token.
    pub fn clear_value(&mut self) -> &mut Self {
        self.value = None;
        self
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
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
        require_name("variable", &self.name)
    }
}

impl From<VariableConfig> for VariableBuilder {
    fn from(config: VariableConfig) -> Self {
        Self::create(config)
    }
}

impl Render for VariableBuilder {
    /// Never fails.
    fn render_in(&self, dialect: Dialect, scope: Scope) -> Result<String> {
        let value = Value::render_or_unset(self.value.as_ref(), dialect);
        let ty = self.ty.render(dialect);

        let mut builder = CodeBuilder::for_dialect(dialect);
        builder.push_doc_if(dialect, &self.desc);
        match dialect {
            Dialect::Lua => {
                builder
                    .push_line(&format!("---@type {}", ty))
                    .push_line(&format!("{} = {}", self.name, value));
            }
            Dialect::TypeScript => {
                let keyword = if self.constant { "const" } else { "let" };
                builder.push_line(&format!(
                    "{}{} {}: {} = {};",
                    scope.declare_prefix(),
                    keyword,
                    self.name,
                    ty,
                    value
                ));
            }
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use declgen_core::DataType;

    use super::*;

    fn hello_all() -> VariableBuilder {
        VariableBuilder::create(VariableConfig {
            name: "HELLO_ALL".into(),
            constant: true,
            value: Some(Value::int(19)),
            ty: "number".into(),
            ..Default::default()
        })
    }

    #[test]
    fn test_lua() {
        assert_eq!(
            hello_all().render(Dialect::Lua).unwrap(),
            "---@type number\nHELLO_ALL = 19"
        );
    }

    #[test]
    fn test_typescript() {
        assert_eq!(
            hello_all().render(Dialect::TypeScript).unwrap(),
            "declare const HELLO_ALL: number = 19;"
        );
    }

    #[test]
    fn test_let_when_not_constant() {
        let mut v = hello_all();
        v.set_constant(false);
        assert_eq!(
            v.render(Dialect::TypeScript).unwrap(),
            "declare let HELLO_ALL: number = 19;"
        );
    }

    #[test]
    fn test_constant_ignored_by_lua() {
        let mut v = hello_all();
        let constant = v.render(Dialect::Lua).unwrap();
        v.set_constant(false);
        assert_eq!(v.render(Dialect::Lua).unwrap(), constant);
    }

    #[test]
    fn test_description_line() {
        let mut v = hello_all();
        v.set_desc("Greeting count");
        assert_eq!(
            v.render(Dialect::Lua).unwrap(),
            "---Greeting count\n---@type number\nHELLO_ALL = 19"
        );
        assert_eq!(
            v.render(Dialect::TypeScript).unwrap(),
            "/** Greeting count */\ndeclare const HELLO_ALL: number = 19;"
        );
    }

    #[test]
    fn test_multi_line_description() {
        let mut v = VariableBuilder::new("X");
        v.set_value(1).set_desc("first line\nsecond line");
        assert_eq!(
            v.render(Dialect::Lua).unwrap(),
            "---first line\n---second line\n---@type any\nX = 1"
        );
        assert_eq!(
            v.render(Dialect::TypeScript).unwrap(),
            "/**\n * first line\n * second line\n */\ndeclare let X: any = 1;"
        );
    }

    #[test]
    fn test_defaults() {
        let v = VariableBuilder::new("x");
        assert!(!v.constant());
        assert!(v.value().is_none());
        assert_eq!(v.ty(), &TypeRef::any());
        assert_eq!(v.render(Dialect::Lua).unwrap(), "---@type any\nx = nil");
        assert_eq!(
            v.render(Dialect::TypeScript).unwrap(),
            "declare let x: any = undefined;"
        );
    }

    #[test]
    fn test_string_value_is_quoted() {
        let mut v = VariableBuilder::new("NAME");
        v.set_type(DataType::String).set_value("decl");
        assert_eq!(v.render(Dialect::Lua).unwrap(), "---@type string\nNAME = \"decl\"");
    }

    #[test]
    fn test_builtin_type_per_dialect() {
        let mut v = VariableBuilder::new("COUNT");
        v.set_type(DataType::Int64).set_value(3).set_constant(true);
        assert_eq!(v.render(Dialect::Lua).unwrap(), "---@type integer\nCOUNT = 3");
        assert_eq!(
            v.render(Dialect::TypeScript).unwrap(),
            "declare const COUNT: bigint = 3;"
        );
    }

    #[test]
    fn test_namespace_scope_drops_declare() {
        assert_eq!(
            hello_all()
                .render_in(Dialect::TypeScript, Scope::Namespace)
                .unwrap(),
            "const HELLO_ALL: number = 19;"
        );
    }

    #[test]
    fn test_clear_value() {
        let mut v = hello_all();
        v.clear_value();
        assert_eq!(v.render(Dialect::Lua).unwrap(), "---@type number\nHELLO_ALL = nil");
    }

    #[test]
    fn test_setters_chain_on_same_instance() {
        let mut v = VariableBuilder::new("a");
        let returned: *const VariableBuilder = v
            .set_name("b")
            .set_type("string")
            .set_value("x")
            .set_constant(true);
        assert!(std::ptr::eq(returned, &v));
        assert_eq!(v.name(), "b");
        assert_eq!(v.value(), Some(&Value::string("x")));
    }

    #[test]
    fn test_validate() {
        assert!(hello_all().validate().is_ok());
        assert!(VariableBuilder::new("").validate().is_err());
    }
}
