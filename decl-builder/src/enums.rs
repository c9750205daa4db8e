//! Enum declaration builder.

use declgen_core::{CodeBuilder, Dialect, Value};
use serde::Deserialize;

use crate::{
    Render, Result, Scope,
    validate::{require_name, require_unique},
};

const LUA_KEYWORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// A member of an enum declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumMember {
    pub name: String,
    /// Explicit value; members without one count up from the previous
    /// integer member (starting at 0).
    #[serde(default, deserialize_with = "Value::deserialize_present")]
    pub value: Option<Value>,
    #[serde(default)]
    pub desc: Option<String>,
}

impl EnumMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            desc: None,
        }
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }
}

/// Initial configuration for an [`EnumBuilder`].
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumConfig {
    pub name: String,
    #[serde(default)]
    pub constant: bool,
    #[serde(default)]
    pub members: Vec<EnumMember>,
    #[serde(default)]
    pub desc: String,
}

/// Builder for enum declarations.
///
/// `constant` selects a TypeScript `const enum`; Lua ignores it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "EnumConfig")]
pub struct EnumBuilder {
    name: String,
    constant: bool,
    members: Vec<EnumMember>,
    desc: String,
}

impl EnumBuilder {
    pub fn create(config: EnumConfig) -> Self {
        Self {
            name: config.name,
            constant: config.constant,
            members: config.members,
            desc: config.desc,
        }
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self::create(EnumConfig {
            name: name.into(),
            ..Default::default()
        })
    }

    pub fn with_member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_constant(&mut self, constant: bool) -> &mut Self {
        self.constant = constant;
        self
    }

    pub fn constant(&self) -> bool {
        self.constant
    }

    pub fn set_desc(&mut self, desc: impl Into<String>) -> &mut Self {
        self.desc = desc.into();
        self
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    pub fn add_member(&mut self, member: EnumMember) -> &mut Self {
        self.members.push(member);
        self
    }

    /// Remove the member at `index`. An out-of-range index removes nothing.
    pub fn clear_member(&mut self, index: usize) -> &mut Self {
        if index < self.members.len() {
            self.members.remove(index);
        } else {
            tracing::trace!(enumeration = %self.name, index, "clear_member index out of range");
        }
        self
    }

    pub fn clear_members(&mut self) -> &mut Self {
        self.members.clear();
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_name("enum", &self.name)?;
        for member in &self.members {
            require_name("enum member", &member.name)?;
        }
        require_unique(
            "enum member",
            || format!("enum '{}'", self.name),
            self.members.iter().map(|m| m.name.as_str()),
        )
    }

    /// Resolve each member's value. Members without one count up from the
    /// last integer value seen, starting at 0.
    fn slots(&self) -> Vec<Slot<'_>> {
        let mut next: i64 = 0;
        self.members
            .iter()
            .map(|member| match &member.value {
                Some(value) => {
                    if let Some(int) = value.as_int() {
                        next = int.saturating_add(1);
                    }
                    Slot::Explicit(value)
                }
                None => {
                    let auto = next;
                    next = next.saturating_add(1);
                    Slot::Auto(auto)
                }
            })
            .collect()
    }

    fn render_lua(&self, builder: &mut CodeBuilder) {
        let dialect = Dialect::Lua;
        builder.push_line(&format!("---@enum {}", self.name));
        if self.members.is_empty() {
            builder.push_line(&format!("{} = {{}}", self.name));
            return;
        }

        builder
            .push_line(&format!("{} = {{", self.name))
            .push_indent();
        for (member, slot) in self.members.iter().zip(self.slots()) {
            if let Some(desc) = &member.desc {
                builder.push_doc(dialect, desc);
            }
            let value = match slot {
                Slot::Explicit(value) => value.render(dialect),
                Slot::Auto(n) => n.to_string(),
            };
            builder.push_line(&format!("{} = {},", lua_key(&member.name), value));
        }
        builder.push_dedent().push_line("}");
    }

    /// Auto members stay implicit only where TypeScript's own numbering
    /// agrees, i.e. after an integer member or at the start.
    fn render_typescript(&self, builder: &mut CodeBuilder, scope: Scope) {
        let dialect = Dialect::TypeScript;
        let header = format!(
            "{}{}enum {} {{",
            scope.declare_prefix(),
            if self.constant { "const " } else { "" },
            self.name
        );
        if self.members.is_empty() {
            builder.push_line(&format!("{}}}", header));
            return;
        }

        builder.push_line(&header).push_indent();
        let mut after_integer = true;
        for (member, slot) in self.members.iter().zip(self.slots()) {
            if let Some(desc) = &member.desc {
                builder.push_doc(dialect, desc);
            }
            let key = typescript_key(&member.name);
            match slot {
                Slot::Explicit(value) => {
                    after_integer = value.as_int().is_some();
                    builder.push_line(&format!("{} = {},", key, value.render(dialect)));
                }
                Slot::Auto(_) if after_integer => {
                    builder.push_line(&format!("{},", key));
                }
                Slot::Auto(n) => {
                    after_integer = true;
                    builder.push_line(&format!("{} = {},", key, n));
                }
            }
        }
        builder.push_dedent().push_line("}");
    }
}

enum Slot<'a> {
    Explicit(&'a Value),
    Auto(i64),
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn lua_key(name: &str) -> String {
    if is_identifier(name) && !LUA_KEYWORDS.contains(&name) {
        name.to_string()
    } else {
        format!("[{}]", Value::string(name).render(Dialect::Lua))
    }
}

fn typescript_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        Value::string(name).render(Dialect::TypeScript)
    }
}

impl From<EnumConfig> for EnumBuilder {
    fn from(config: EnumConfig) -> Self {
        Self::create(config)
    }
}

impl Render for EnumBuilder {
    fn render_in(&self, dialect: Dialect, scope: Scope) -> Result<String> {
        let mut builder = CodeBuilder::for_dialect(dialect);
        builder.push_doc_if(dialect, &self.desc);
        match dialect {
            Dialect::Lua => self.render_lua(&mut builder),
            Dialect::TypeScript => self.render_typescript(&mut builder, scope),
        }
        Ok(builder.build())
    }
}
