//! Declaration manifests: a whole declaration file described in TOML or JSON.

mod parse;

use declgen_core::Dialect;
use serde::Deserialize;

use crate::{
    ClassBuilder, EnumBuilder, Error, FunctionBuilder, NamespaceBuilder, Render, Result,
    SourceContext, TypeBuilder, VariableBuilder, validate::require_unique,
};

/// Root of a declaration manifest.
///
/// ```toml
/// dialect = "lua"
///
/// [[variables]]
/// name = "HELLO_ALL"
/// constant = true
/// value = 19
/// type = "number"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclFile {
    /// Default output dialect when the caller does not pick one
    #[serde(default)]
    pub dialect: Option<Dialect>,

    #[serde(default)]
    pub types: Vec<TypeBuilder>,

    #[serde(default)]
    pub enums: Vec<EnumBuilder>,

    #[serde(default)]
    pub classes: Vec<ClassBuilder>,

    #[serde(default)]
    pub variables: Vec<VariableBuilder>,

    #[serde(default)]
    pub functions: Vec<FunctionBuilder>,

    #[serde(default)]
    pub namespaces: Vec<NamespaceBuilder>,
}

impl DeclFile {
    /// The manifest's own dialect, or Lua when it names none.
    pub fn dialect(&self) -> Dialect {
        self.dialect.unwrap_or_default()
    }

    /// Number of top-level declarations.
    pub fn len(&self) -> usize {
        self.types.len()
            + self.enums.len()
            + self.classes.len()
            + self.variables.len()
            + self.functions.len()
            + self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render every declaration, in the order types, enums, classes,
    /// variables, functions, namespaces.
    ///
    /// Lua output opens with a `---@meta` line so language servers treat the
    /// file as definitions only. Declarations are separated by a blank line
    /// and the output ends with a newline.
    pub fn render(&self, dialect: Dialect) -> Result<String> {
        let mut sections = Vec::with_capacity(self.len() + 1);
        if dialect == Dialect::Lua {
            sections.push("---@meta".to_string());
        }
        for t in &self.types {
            sections.push(t.render(dialect)?);
        }
        for e in &self.enums {
            sections.push(e.render(dialect)?);
        }
        for c in &self.classes {
            sections.push(c.render(dialect)?);
        }
        for v in &self.variables {
            sections.push(v.render(dialect)?);
        }
        for f in &self.functions {
            sections.push(f.render(dialect)?);
        }
        for ns in &self.namespaces {
            sections.push(ns.render(dialect)?);
        }

        if sections.is_empty() {
            return Ok(String::new());
        }
        let mut out = sections.join("\n\n");
        out.push('\n');
        Ok(out)
    }

    /// Validate every declaration and reject repeated top-level names,
    /// reporting problems against the manifest source.
    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        self.validate_declarations()
            .map_err(|err| locate(ctx, err))
    }

    fn validate_declarations(&self) -> Result<()> {
        let mut names: Vec<String> = Vec::with_capacity(self.len());
        for t in &self.types {
            t.validate()?;
            names.push(t.name().to_string());
        }
        for e in &self.enums {
            e.validate()?;
            names.push(e.name().to_string());
        }
        for c in &self.classes {
            c.validate()?;
            names.push(c.name().to_string());
        }
        for v in &self.variables {
            v.validate()?;
            names.push(v.name().to_string());
        }
        for f in &self.functions {
            f.validate()?;
            names.push(f.name().to_string());
        }
        for ns in &self.namespaces {
            ns.validate()?;
            names.push(ns.name().to_string());
        }

        require_unique(
            "declaration",
            || "the declaration file".to_string(),
            names.iter().map(String::as_str),
        )
    }
}

/// Turn a builder validation error into a manifest error pointing at the
/// offending name.
///
/// A duplicate is located at its second entry, searched from the declaration
/// that owns it.
fn locate(ctx: &SourceContext, err: Box<Error>) -> Box<Error> {
    let span = match &*err {
        Error::Duplicate { name, owner, .. } => ctx.name_span(name, quoted(owner), 1),
        Error::EmptyName { .. } => ctx.name_span("", None, 0),
        _ => return err,
    };
    ctx.manifest_error(err.to_string(), span)
}

/// The quoted part of an owner description such as `function 'f'`.
fn quoted(owner: &str) -> Option<&str> {
    let start = owner.find('\'')?;
    let end = owner.rfind('\'')?;
    (end > start).then(|| &owner[start + 1..end])
}
