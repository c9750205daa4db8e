use std::{fs, path::PathBuf};

use clap::Args;
use declgen_builder::{DeclFile, Dialect};
use eyre::{Context, Result};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct RenderCommand {
    /// Path to the declaration manifest (.toml or .json)
    pub file: PathBuf,

    /// Output dialect: lua, typescript or ts (overrides the manifest setting)
    #[arg(short, long)]
    pub dialect: Option<Dialect>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    /// Run the render command
    pub fn run(&self) -> Result<()> {
        let file = DeclFile::open(&self.file).unwrap_or_exit();
        let dialect = self.dialect_for(&file);
        let text = file.render(dialect).unwrap_or_exit();

        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)
                        .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
                }
                fs::write(path, &text)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), %dialect, "wrote declarations");
            }
            None => print!("{}", text),
        }
        Ok(())
    }

    /// The `--dialect` flag, then the manifest's `dialect`, then Lua.
    fn dialect_for(&self, file: &DeclFile) -> Dialect {
        self.dialect.unwrap_or_else(|| file.dialect())
    }
}
