//! Function declaration builder.

use declgen_core::{Dialect, TypeRef, Value, flatten_doc};
use serde::Deserialize;

use crate::{
    Error, Render, Result, Scope,
    validate::{require_name, require_unique},
};

/// A parameter of a function declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Declared type; renders as `any` when absent.
    #[serde(default, rename = "type")]
    pub ty: Option<TypeRef>,
    /// Default value. Stored for callers; Lua annotations have no syntax for it.
    #[serde(default, deserialize_with = "Value::deserialize_present")]
    pub default: Option<Value>,
    /// Whether the parameter may be omitted.
    #[serde(default)]
    pub optional: bool,
    /// Trailing description on the annotation line.
    #[serde(default)]
    pub desc: Option<String>,
}

impl Parameter {
    /// Create an untyped, required parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            default: None,
            optional: false,
            desc: None,
        }
    }

    /// Set the declared type.
    pub fn ty(mut self, ty: impl Into<TypeRef>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Set a default value.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Mark as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Set the description.
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }
}

/// A return value of a function declaration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReturnSpec {
    /// Optional name of the returned value.
    #[serde(default)]
    pub name: Option<String>,
    /// Returned type; renders as `any` when absent.
    #[serde(default, rename = "type")]
    pub ty: Option<TypeRef>,
    /// Description.
    #[serde(default)]
    pub desc: Option<String>,
}

impl ReturnSpec {
    /// Create a return spec of the given type.
    pub fn new(ty: impl Into<TypeRef>) -> Self {
        Self {
            name: None,
            ty: Some(ty.into()),
            desc: None,
        }
    }

    /// Name the returned value.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }
}

/// Initial configuration for a [`FunctionBuilder`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionConfig {
    pub name: String,
    #[serde(default)]
    pub params: Vec<Parameter>,
    #[serde(default)]
    pub returns: Vec<ReturnSpec>,
    #[serde(default)]
    pub desc: String,
}

/// Builder for function declarations.
///
/// Setters take `&mut self` and return the same instance, so calls chain:
///
/// ```
/// use declgen_builder::{Dialect, FunctionBuilder, Parameter, Render};
///
/// let mut f = FunctionBuilder::new("test");
/// f.add_param(Parameter::new("thing").ty("string"))
///     .add_param(Parameter::new("thing2"));
///
/// assert_eq!(
///     f.render(Dialect::Lua).unwrap(),
///     "---@param thing string \n---@param thing2 any \nfunction test(thing, thing2) end"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "FunctionConfig")]
pub struct FunctionBuilder {
    name: String,
    params: Vec<Parameter>,
    returns: Vec<ReturnSpec>,
    desc: String,
}

impl FunctionBuilder {
    /// Create a builder from an initial configuration.
    pub fn create(config: FunctionConfig) -> Self {
        Self {
            name: config.name,
            params: config.params,
            returns: config.returns,
            desc: config.desc,
        }
    }

    /// Create a function with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self::create(FunctionConfig {
            name: name.into(),
            ..Default::default()
        })
    }

    /// Append a parameter (consuming form).
    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Append a return spec (consuming form).
    pub fn with_return(mut self, ret: ReturnSpec) -> Self {
        self.returns.push(ret);
        self
    }

    /// Set the description (consuming form).
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_desc(&mut self, desc: impl Into<String>) -> &mut Self {
        self.desc = desc.into();
        self
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn returns(&self) -> &[ReturnSpec] {
        &self.returns
    }

    /// Append a parameter. Duplicate names are accepted; see [`Self::validate`].
    pub fn add_param(&mut self, param: Parameter) -> &mut Self {
        self.params.push(param);
        self
    }

    /// Remove the parameter at `index`. An out-of-range index removes nothing.
    pub fn clear_param(&mut self, index: usize) -> &mut Self {
        if index < self.params.len() {
            self.params.remove(index);
        } else {
            tracing::trace!(
                function = %self.name,
                index,
                len = self.params.len(),
                "clear_param index out of range, nothing removed"
            );
        }
        self
    }

    /// Remove the last parameter, if any.
    pub fn clear_last_param(&mut self) -> &mut Self {
        self.params.pop();
        self
    }

    /// Remove every parameter.
    pub fn clear_params(&mut self) -> &mut Self {
        self.params.clear();
        self
    }

    pub fn add_return(&mut self, ret: ReturnSpec) -> &mut Self {
        self.returns.push(ret);
        self
    }

    pub fn clear_returns(&mut self) -> &mut Self {
        self.returns.clear();
        self
    }

    /// Comma-separated parameter names, as they appear between the parentheses.
    pub fn stringify_params(&self, dialect: Dialect) -> Result<String> {
        match dialect {
            Dialect::Lua => Ok(self
                .params
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")),
            Dialect::TypeScript => Err(Error::not_implemented("function", dialect)),
        }
    }

    /// One `---@param` line per parameter, each terminated by a line break.
    pub fn stringify_param_annotations(&self, dialect: Dialect) -> Result<String> {
        match dialect {
            Dialect::Lua => Ok(self
                .params
                .iter()
                .map(|p| {
                    format!(
                        "---@param {}{} {} {}\n",
                        p.name,
                        if p.optional { "?" } else { "" },
                        TypeRef::render_or_any(p.ty.as_ref(), dialect),
                        p.desc.as_deref().map(flatten_doc).unwrap_or_default()
                    )
                })
                .collect()),
            Dialect::TypeScript => Err(Error::not_implemented("function", dialect)),
        }
    }

    /// One `---@return` line per return spec, each terminated by a line break.
    pub fn stringify_return_annotations(&self, dialect: Dialect) -> Result<String> {
        match dialect {
            Dialect::Lua => Ok(self
                .returns
                .iter()
                .map(|r| {
                    let mut line = format!(
                        "---@return {}",
                        TypeRef::render_or_any(r.ty.as_ref(), dialect)
                    );
                    if let Some(name) = &r.name {
                        line.push(' ');
                        line.push_str(name);
                    }
                    if let Some(desc) = &r.desc {
                        line.push_str(" # ");
                        line.push_str(&flatten_doc(desc));
                    }
                    line.push('\n');
                    line
                })
                .collect()),
            Dialect::TypeScript => Err(Error::not_implemented("function", dialect)),
        }
    }

    /// Check that the name is non-empty and parameter names are unique.
    pub fn validate(&self) -> Result<()> {
        require_name("function", &self.name)?;
        for param in &self.params {
            require_name("parameter", &param.name)?;
        }
        require_unique(
            "parameter",
            || format!("function '{}'", self.name),
            self.params.iter().map(|p| p.name.as_str()),
        )
    }
}

impl From<FunctionConfig> for FunctionBuilder {
    fn from(config: FunctionConfig) -> Self {
        Self::create(config)
    }
}

impl Render for FunctionBuilder {
    /// Lua renders the annotation block followed by an empty-bodied
    /// `function name(params) end`. TypeScript is not supported yet and
    /// returns [`Error::NotImplemented`].
    fn render_in(&self, dialect: Dialect, _scope: Scope) -> Result<String> {
        match dialect {
            Dialect::Lua => Ok(format!(
                "{}{}function {}({}) end",
                self.stringify_param_annotations(dialect)?,
                self.stringify_return_annotations(dialect)?,
                self.name,
                self.stringify_params(dialect)?
            )),
            Dialect::TypeScript => Err(Error::not_implemented("function", dialect)),
        }
    }
}
