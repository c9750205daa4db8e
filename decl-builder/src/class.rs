//! Class declaration builder.

use declgen_core::{CodeBuilder, Dialect, TypeRef, flatten_doc};
use serde::Deserialize;

use crate::{
    Render, Result, Scope,
    validate::{require_name, require_unique},
};

/// A field of a class declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Field {
    pub name: String,
    #[serde(default, rename = "type")]
    pub ty: Option<TypeRef>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub desc: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            optional: false,
            desc: None,
        }
    }

    pub fn ty(mut self, ty: impl Into<TypeRef>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }
}

/// Initial configuration for a [`ClassBuilder`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassConfig {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub desc: String,
}

/// Builder for class declarations (a named shape with typed fields).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ClassConfig")]
pub struct ClassBuilder {
    name: String,
    parent: Option<String>,
    fields: Vec<Field>,
    desc: String,
}

impl ClassBuilder {
    pub fn create(config: ClassConfig) -> Self {
        Self {
            name: config.name,
            parent: config.parent,
            fields: config.fields,
            desc: config.desc,
        }
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self::create(ClassConfig {
            name: name.into(),
            ..Default::default()
        })
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_parent(&mut self, parent: impl Into<String>) -> &mut Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn clear_parent(&mut self) -> &mut Self {
        self.parent = None;
        self
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn set_desc(&mut self, desc: impl Into<String>) -> &mut Self {
        self.desc = desc.into();
        self
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn add_field(&mut self, field: Field) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Remove the field at `index`. An out-of-range index removes nothing.
    pub fn clear_field(&mut self, index: usize) -> &mut Self {
        if index < self.fields.len() {
            self.fields.remove(index);
        } else {
            tracing::trace!(class = %self.name, index, "clear_field index out of range");
        }
        self
    }

    pub fn clear_fields(&mut self) -> &mut Self {
        self.fields.clear();
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_name("class", &self.name)?;
        for field in &self.fields {
            require_name("field", &field.name)?;
        }
        require_unique(
            "field",
            || format!("class '{}'", self.name),
            self.fields.iter().map(|f| f.name.as_str()),
        )
    }
}

impl From<ClassConfig> for ClassBuilder {
    fn from(config: ClassConfig) -> Self {
        Self::create(config)
    }
}

impl Render for ClassBuilder {
    fn render_in(&self, dialect: Dialect, scope: Scope) -> Result<String> {
        let mut builder = CodeBuilder::for_dialect(dialect);
        builder.push_doc_if(dialect, &self.desc);

        match dialect {
            Dialect::Lua => {
                let header = match &self.parent {
                    Some(parent) => format!("---@class {} : {}", self.name, parent),
                    None => format!("---@class {}", self.name),
                };
                builder.push_line(&header);
                for field in &self.fields {
                    let mut line = format!(
                        "---@field {}{} {}",
                        field.name,
                        if field.optional { "?" } else { "" },
                        TypeRef::render_or_any(field.ty.as_ref(), dialect)
                    );
                    if let Some(desc) = &field.desc {
                        line.push(' ');
                        line.push_str(&flatten_doc(desc));
                    }
                    builder.push_line(&line);
                }
                builder.push_line(&format!("{} = {{}}", self.name));
            }
            Dialect::TypeScript => {
                let extends = match &self.parent {
                    Some(parent) => format!(" extends {}", parent),
                    None => String::new(),
                };
                let header = format!(
                    "{}class {}{} {{",
                    scope.declare_prefix(),
                    self.name,
                    extends
                );
                if self.fields.is_empty() {
                    builder.push_line(&format!("{}}}", header));
                } else {
                    builder.push_line(&header).push_indent();
                    for field in &self.fields {
                        if let Some(desc) = &field.desc {
                            builder.push_doc(dialect, desc);
                        }
                        builder.push_line(&format!(
                            "{}{}: {};",
                            field.name,
                            if field.optional { "?" } else { "" },
                            TypeRef::render_or_any(field.ty.as_ref(), dialect)
                        ));
                    }
                    builder.push_dedent().push_line("}");
                }
            }
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use declgen_core::DataType;

    use super::*;
    use crate::Error;

    fn point() -> ClassBuilder {
        ClassBuilder::new("Point")
            .with_field(Field::new("x").ty(DataType::Number))
            .with_field(Field::new("y").ty(DataType::Number))
            .with_field(Field::new("label").ty("string").optional().desc("display name"))
    }

    #[test]
    fn test_lua() {
        insta::assert_snapshot!(point().render(Dialect::Lua).unwrap(), @r"
        ---@class Point
        ---@field x number
        ---@field y number
        ---@field label? string display name
        Point = {}
        ");
    }

    #[test]
    fn test_typescript() {
        insta::assert_snapshot!(point().render(Dialect::TypeScript).unwrap(), @r"
        declare class Point {
          x: number;
          y: number;
          /** display name */
          label?: string;
        }
        ");
    }

    #[test]
    fn test_parent_and_desc() {
        let mut class = ClassBuilder::new("Circle");
        class.set_parent("Shape").set_desc("A round shape");

        assert_eq!(
            class.render(Dialect::Lua).unwrap(),
            "---A round shape\n---@class Circle : Shape\nCircle = {}"
        );
        assert_eq!(
            class.render(Dialect::TypeScript).unwrap(),
            "/** A round shape */\ndeclare class Circle extends Shape {}"
        );
    }

    #[test]
    fn test_multi_line_field_desc() {
        let class = ClassBuilder::new("A")
            .with_field(Field::new("x").desc("first\nsecond"))
            .with_field(Field::new("y").desc("ends */ here"));
        assert_eq!(
            class.render(Dialect::Lua).unwrap(),
            "---@class A\n---@field x any first second\n---@field y any ends */ here\nA = {}"
        );
        assert_eq!(
            class.render(Dialect::TypeScript).unwrap(),
            "declare class A {\n  /**\n   * first\n   * second\n   */\n  x: any;\n  /** ends *\\/ here */\n  y: any;\n}"
        );
    }

    #[test]
    fn test_namespace_scope() {
        let class = ClassBuilder::new("Empty");
        assert_eq!(
            class
                .render_in(Dialect::TypeScript, Scope::Namespace)
                .unwrap(),
            "class Empty {}"
        );
    }

    #[test]
    fn test_clear_field() {
        let mut class = point();
        class.clear_field(0).clear_field(10);
        let names: Vec<_> = class.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["y", "label"]);

        class.clear_fields();
        assert!(class.fields().is_empty());
    }

    #[test]
    fn test_validate() {
        assert!(point().validate().is_ok());
        let err = point().with_field(Field::new("x")).validate().unwrap_err();
        assert!(matches!(*err, Error::Duplicate { kind: "field", .. }));
    }
}
