//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::DeclFile;
use crate::{Error, Result, SourceContext};

impl FromStr for DeclFile {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s, "decl.toml")
    }
}

impl DeclFile {
    /// Read a manifest from disk. Files ending in `.json` are parsed as JSON,
    /// everything else as TOML.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content, &filename)
        } else {
            Self::from_toml_str(&content, &filename)
        }
    }

    /// Parse a TOML manifest with a custom filename for error reporting.
    pub fn from_toml_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let file: DeclFile = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        finish(file, &ctx)
    }

    /// Parse a JSON manifest with a custom filename for error reporting.
    pub fn from_json_str(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let file: DeclFile = serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
        finish(file, &ctx)
    }
}

fn finish(file: DeclFile, ctx: &SourceContext) -> Result<DeclFile> {
    file.validate(ctx)?;
    tracing::debug!(
        filename = ctx.filename(),
        declarations = file.len(),
        "loaded declaration manifest"
    );
    Ok(file)
}

#[cfg(test)]
mod tests {
    use declgen_core::Dialect;

    use super::*;

    #[test]
    fn test_toml_and_json_agree() {
        let toml = r#"
dialect = "typescript"

[[enums]]
name = "Level"
constant = true
members = [{ name = "Low", value = 1 }, { name = "High" }]
"#;
        let json = r#"{
  "dialect": "ts",
  "enums": [
    {
      "name": "Level",
      "constant": true,
      "members": [{ "name": "Low", "value": 1 }, { "name": "High" }]
    }
  ]
}"#;
        let from_toml = DeclFile::from_toml_str(toml, "decl.toml").unwrap();
        let from_json = DeclFile::from_json_str(json, "decl.json").unwrap();

        assert_eq!(from_toml.dialect(), Dialect::TypeScript);
        assert_eq!(from_toml.dialect, from_json.dialect);
        assert_eq!(from_toml.enums, from_json.enums);
        assert_eq!(
            from_json.render(Dialect::TypeScript).unwrap(),
            "declare const enum Level {\n  Low = 1,\n  High,\n}\n"
        );
    }

    #[test]
    fn test_json_null_value_is_nil() {
        let json = r#"{
  "variables": [
    { "name": "X", "value": null, "type": "any" },
    { "name": "Y", "type": "any" }
  ]
}"#;
        let file = DeclFile::from_json_str(json, "decl.json").unwrap();
        assert_eq!(
            file.render(Dialect::TypeScript).unwrap(),
            "declare let X: any = null;\n\ndeclare let Y: any = undefined;\n"
        );
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = DeclFile::from_toml_str("[[functions]]\nname = 3\n", "bad.toml").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = DeclFile::from_toml_str("[[structs]]\nname = \"A\"\n", "bad.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_json_error_has_span() {
        let err = DeclFile::from_json_str("{\n  \"variables\": [\n", "bad.json").unwrap_err();
        match *err {
            Error::Json { span, .. } => assert!(span.is_some()),
            other => panic!("expected json error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_error_points_at_name() {
        let src = "[[functions]]\nname = \"f\"\nparams = [{ name = \"a\" }, { name = \"a\" }]\n";
        let err = DeclFile::from_toml_str(src, "decl.toml").unwrap_err();
        match *err {
            Error::Manifest { span, ref message, .. } => {
                assert_eq!(message, "duplicate parameter 'a' in function 'f'");
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "a");
            }
            other => panic!("expected manifest error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_name_points_at_empty_string() {
        let src = "[[variables]]\nname = \"\"\n";
        let err = DeclFile::from_toml_str(src, "decl.toml").unwrap_err();
        match *err {
            Error::Manifest { span, ref message, .. } => {
                assert_eq!(message, "variable name must not be empty");
                assert_eq!(span.unwrap().offset(), src.find("\"\"").unwrap());
            }
            other => panic!("expected manifest error, got {other:?}"),
        }
    }
}
