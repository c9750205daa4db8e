//! Namespace builder: a named grouping of other declarations.

use std::cell::Ref;

use declgen_core::{CodeBuilder, Dialect};
use serde::Deserialize;

use crate::{
    ClassBuilder, EnumBuilder, Error, FunctionBuilder, Render, Result, Scope, Shared,
    VariableBuilder,
    validate::{require_name, require_unique},
};

/// Initial configuration for a [`NamespaceBuilder`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceConfig {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<Shared<FunctionBuilder>>,
    #[serde(default)]
    pub classes: Vec<Shared<ClassBuilder>>,
    #[serde(default)]
    pub enums: Vec<Shared<EnumBuilder>>,
    #[serde(default)]
    pub variables: Vec<Shared<VariableBuilder>>,
}

/// Builder grouping functions, classes, enums and variables under one name.
///
/// Members are held by shared reference, never cloned: a builder mutated
/// after being added shows its new state the next time the namespace renders.
///
/// ```
/// use std::rc::Rc;
///
/// use declgen_builder::{Dialect, NamespaceBuilder, Render, VariableBuilder, shared};
///
/// let version = shared(VariableBuilder::new("VERSION"));
/// let mut ns = NamespaceBuilder::new("app");
/// ns.add_variable(Rc::clone(&version));
///
/// version.borrow_mut().set_type("string").set_value("1.0");
/// assert_eq!(
///     ns.render(Dialect::Lua).unwrap(),
///     "--#region app\n---@type string\nVERSION = \"1.0\"\n--#endregion"
/// );
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "NamespaceConfig")]
pub struct NamespaceBuilder {
    name: String,
    functions: Vec<Shared<FunctionBuilder>>,
    classes: Vec<Shared<ClassBuilder>>,
    enums: Vec<Shared<EnumBuilder>>,
    variables: Vec<Shared<VariableBuilder>>,
}

impl NamespaceBuilder {
    /// Create a builder from an initial configuration.
    pub fn create(config: NamespaceConfig) -> Self {
        Self {
            name: config.name,
            functions: config.functions,
            classes: config.classes,
            enums: config.enums,
            variables: config.variables,
        }
    }

    /// Create an empty namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self::create(NamespaceConfig {
            name: name.into(),
            ..Default::default()
        })
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_function(&mut self, function: Shared<FunctionBuilder>) -> &mut Self {
        self.functions.push(function);
        self
    }

    pub fn add_class(&mut self, class: Shared<ClassBuilder>) -> &mut Self {
        self.classes.push(class);
        self
    }

    pub fn add_enum(&mut self, enumeration: Shared<EnumBuilder>) -> &mut Self {
        self.enums.push(enumeration);
        self
    }

    pub fn add_variable(&mut self, variable: Shared<VariableBuilder>) -> &mut Self {
        self.variables.push(variable);
        self
    }

    pub fn functions(&self) -> &[Shared<FunctionBuilder>] {
        &self.functions
    }

    pub fn classes(&self) -> &[Shared<ClassBuilder>] {
        &self.classes
    }

    pub fn enums(&self) -> &[Shared<EnumBuilder>] {
        &self.enums
    }

    pub fn variables(&self) -> &[Shared<VariableBuilder>] {
        &self.variables
    }

    /// Total number of members across all kinds.
    pub fn len(&self) -> usize {
        self.functions.len() + self.classes.len() + self.enums.len() + self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate the namespace name, every member, and that no two members
    /// share a name.
    pub fn validate(&self) -> Result<()> {
        require_name("namespace", &self.name)?;

        let mut names = Vec::with_capacity(self.len());
        for e in &self.enums {
            let e = self.borrow(e, "enum")?;
            e.validate()?;
            names.push(e.name().to_string());
        }
        for c in &self.classes {
            let c = self.borrow(c, "class")?;
            c.validate()?;
            names.push(c.name().to_string());
        }
        for v in &self.variables {
            let v = self.borrow(v, "variable")?;
            v.validate()?;
            names.push(v.name().to_string());
        }
        for f in &self.functions {
            let f = self.borrow(f, "function")?;
            f.validate()?;
            names.push(f.name().to_string());
        }

        require_unique(
            "member",
            || format!("namespace '{}'", self.name),
            names.iter().map(String::as_str),
        )
    }

    /// Render each member in order: enums, classes, variables, functions.
    fn render_members(&self, dialect: Dialect) -> Result<Vec<String>> {
        let mut rendered = Vec::with_capacity(self.len());
        for e in &self.enums {
            rendered.push(self.borrow(e, "enum")?.render_in(dialect, Scope::Namespace)?);
        }
        for c in &self.classes {
            rendered.push(self.borrow(c, "class")?.render_in(dialect, Scope::Namespace)?);
        }
        for v in &self.variables {
            rendered.push(
                self.borrow(v, "variable")?
                    .render_in(dialect, Scope::Namespace)?,
            );
        }
        for f in &self.functions {
            rendered.push(
                self.borrow(f, "function")?
                    .render_in(dialect, Scope::Namespace)?,
            );
        }
        Ok(rendered)
    }

    fn borrow<'a, T>(&self, member: &'a Shared<T>, kind: &'static str) -> Result<Ref<'a, T>> {
        member.try_borrow().map_err(|_| {
            Box::new(Error::InUse {
                kind,
                namespace: self.name.clone(),
            })
        })
    }
}

impl From<NamespaceConfig> for NamespaceBuilder {
    fn from(config: NamespaceConfig) -> Self {
        Self::create(config)
    }
}

impl Render for NamespaceBuilder {
    /// Lua wraps the members in `--#region`/`--#endregion` comment markers.
    /// TypeScript wraps them in a `declare namespace` block. Members are
    /// separated by a blank line; a member's render error is returned as is.
    fn render_in(&self, dialect: Dialect, scope: Scope) -> Result<String> {
        let members = self.render_members(dialect)?;
        tracing::debug!(
            namespace = %self.name,
            %dialect,
            members = members.len(),
            "rendering namespace"
        );

        let mut builder = CodeBuilder::for_dialect(dialect);
        match dialect {
            Dialect::Lua => {
                builder.push_line(&format!("--#region {}", self.name));
                push_separated(&mut builder, &members);
                builder.push_line("--#endregion");
            }
            Dialect::TypeScript => {
                let header = format!("{}namespace {} {{", scope.declare_prefix(), self.name);
                if members.is_empty() {
                    builder.push_line(&format!("{}}}", header));
                } else {
                    builder.push_line(&header).push_indent();
                    push_separated(&mut builder, &members);
                    builder.push_dedent().push_line("}");
                }
            }
        }
        Ok(builder.build())
    }
}

fn push_separated(builder: &mut CodeBuilder, members: &[String]) {
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            builder.push_blank();
        }
        builder.push_lines(member);
    }
}
