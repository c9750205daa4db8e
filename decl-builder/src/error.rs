use std::path::PathBuf;

use declgen_core::{Dialect, ParseDialectError};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for declgen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for manifest error reporting.
///
/// Carries the manifest content and filename so parse and validation
/// errors can point at the offending text.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_at(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from(offset..offset));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a manifest validation error labelled at `span`.
    pub fn manifest_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Manifest {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Span of a `name = "<name>"` (TOML) or `"name": "<name>"` (JSON) entry.
    ///
    /// When `owner` is given the search starts after the owner's own name
    /// entry, so a member is found inside its declaration. `skip` entries are
    /// passed over first; if there are not that many the first one is used.
    pub fn name_span(&self, name: &str, owner: Option<&str>, skip: usize) -> Option<SourceSpan> {
        let start = match owner {
            Some(owner) => name_entries(&self.src, owner).first().map(|o| o + 1),
            None => None,
        }
        .unwrap_or(0);
        let entries: Vec<usize> = name_entries(&self.src, name)
            .into_iter()
            .filter(|&offset| offset >= start)
            .collect();
        let offset = *entries.get(skip).or(entries.first())?;

        Some(if name.is_empty() {
            SourceSpan::from(offset..offset + 2)
        } else {
            SourceSpan::from(offset + 1..offset + 1 + name.len())
        })
    }
}

/// Byte offset of a 1-based line/column position.
fn offset_at(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

/// Offsets of every quoted `name` used as the value of a `name` key.
fn name_entries(src: &str, name: &str) -> Vec<usize> {
    let quoted = format!("\"{}\"", name);
    src.match_indices(quoted.as_str())
        .map(|(offset, _)| offset)
        .filter(|&offset| is_name_key(&src[..offset]))
        .collect()
}

/// Whether the text before a value ends in `name =` or `"name":`.
fn is_name_key(before: &str) -> bool {
    let before = before.trim_end();
    let Some(key) = before
        .strip_suffix('=')
        .or_else(|| before.strip_suffix(':'))
    else {
        return false;
    };
    let key = key.trim_end();
    let key = key.strip_suffix('"').unwrap_or(key);
    match key.strip_suffix("name") {
        Some(rest) => !rest.ends_with(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
        None => false,
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{kind} name must not be empty")]
    #[diagnostic(code(declgen::empty_name))]
    EmptyName { kind: &'static str },

    #[error("duplicate {kind} '{name}' in {owner}")]
    #[diagnostic(
        code(declgen::duplicate),
        help("each {kind} name may only appear once in {owner}")
    )]
    Duplicate {
        kind: &'static str,
        name: String,
        owner: String,
    },

    #[error("{entity} declarations cannot be rendered as {dialect} yet")]
    #[diagnostic(code(declgen::not_implemented))]
    NotImplemented {
        entity: &'static str,
        dialect: Dialect,
    },

    #[error(transparent)]
    #[diagnostic(
        code(declgen::unknown_dialect),
        help("valid dialects are: lua, typescript (or ts)")
    )]
    UnknownDialect(#[from] ParseDialectError),

    #[error("a {kind} in namespace '{namespace}' is mutably borrowed and cannot be rendered")]
    #[diagnostic(
        code(declgen::in_use),
        help("release the mutable borrow before rendering the namespace")
    )]
    InUse {
        kind: &'static str,
        namespace: String,
    },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(declgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse declaration manifest")]
    #[diagnostic(code(declgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse declaration manifest")]
    #[diagnostic(code(declgen::json_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(declgen::invalid_manifest))]
    Manifest {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create an empty name error.
    pub fn empty_name(kind: &'static str) -> Box<Self> {
        Box::new(Error::EmptyName { kind })
    }

    /// Create a duplicate name error.
    pub fn duplicate(
        kind: &'static str,
        name: impl Into<String>,
        owner: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::Duplicate {
            kind,
            name: name.into(),
            owner: owner.into(),
        })
    }

    /// Create a not implemented error.
    pub fn not_implemented(entity: &'static str, dialect: Dialect) -> Box<Self> {
        Box::new(Error::NotImplemented { entity, dialect })
    }

    /// Whether this error reports a dialect an entity cannot render to yet.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Error::NotImplemented { .. })
    }

    /// Whether this error comes from builder validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::EmptyName { .. } | Error::Duplicate { .. })
    }
}

impl From<ParseDialectError> for Box<Error> {
    fn from(err: ParseDialectError) -> Self {
        Box::new(Error::UnknownDialect(err))
    }
}

/// Parse a dialect name, reporting unknown names as [`Error::UnknownDialect`].
pub fn parse_dialect(name: &str) -> Result<Dialect> {
    Ok(name.parse::<Dialect>()?)
}
