//! Line-oriented builder for rendered declarations.

use crate::{Dialect, Indent};

/// Fluent API for assembling declaration text with proper indentation.
///
/// # Example
///
/// ```
/// use declgen_core::{CodeBuilder, Dialect};
///
/// let mut builder = CodeBuilder::for_dialect(Dialect::TypeScript);
/// builder
///     .push_line("declare namespace util {")
///     .push_indent()
///     .push_line("const VERSION: string = \"1.0\";")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     builder.build(),
///     "declare namespace util {\n  const VERSION: string = \"1.0\";\n}"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with the dialect's conventional indentation.
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self::new(Indent::for_dialect(dialect))
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add every line of a multi-line string at the current indentation.
    ///
    /// Empty lines are kept empty rather than padded with indentation.
    pub fn push_lines(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a description comment in the dialect's doc style.
    ///
    /// Lua prefixes every line of `text` with `---`. TypeScript uses
    /// `/** text */` for one line and a `/** ... */` block otherwise; a `*/`
    /// inside the text is written as `*\/` so it cannot end the comment.
    pub fn push_doc(&mut self, dialect: Dialect, text: &str) -> &mut Self {
        let mut lines: Vec<&str> = text.lines().collect();
        if lines.is_empty() {
            lines.push("");
        }
        match dialect {
            Dialect::Lua => {
                for line in &lines {
                    self.push_line(&format!("---{}", line));
                }
            }
            Dialect::TypeScript => {
                let escaped: Vec<String> = lines
                    .iter()
                    .map(|line| line.replace("*/", "*\\/"))
                    .collect();
                if let [line] = escaped.as_slice() {
                    self.push_line(&format!("/** {} */", line));
                } else {
                    self.push_line("/**");
                    for line in &escaped {
                        if line.is_empty() {
                            self.push_line(" *");
                        } else {
                            self.push_line(&format!(" * {}", line));
                        }
                    }
                    self.push_line(" */");
                }
            }
        }
        self
    }

    /// Add a description comment only when `text` is non-empty.
    pub fn push_doc_if(&mut self, dialect: Dialect, text: &str) -> &mut Self {
        if !text.is_empty() {
            self.push_doc(dialect, text);
        }
        self
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the rendered text.
    ///
    /// The final line break is dropped: a rendered declaration never carries
    /// its own terminator, callers join declarations themselves.
    pub fn build(mut self) -> String {
        if self.buffer.ends_with('\n') {
            self.buffer.pop();
        }
        self.buffer
    }

    fn write_indent(&mut self) {
        let width = self.indent_level * self.indent.width();
        self.buffer.extend(std::iter::repeat_n(' ', width));
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::for_dialect(Dialect::default())
    }
}

/// Join the lines of a description with single spaces, for descriptions that
/// trail an annotation on the same line (`---@param x string desc`).
pub fn flatten_doc(text: &str) -> String {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
