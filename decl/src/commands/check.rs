use std::path::PathBuf;

use clap::Args;
use declgen_builder::{DeclFile, Dialect};
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the declaration manifest (.toml or .json)
    pub file: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = DeclFile::open(&self.file).unwrap_or_exit();

        let unsupported = unsupported_dialects(&file);
        for (dialect, reason) in &unsupported {
            eprintln!("warning: cannot render as {}: {}", dialect, reason);
        }
        if !unsupported.is_empty() {
            println!();
        }

        println!("✓ {} is valid\n", self.file.display());

        let total = file.len();
        println!(
            "  {} declaration{}:",
            total,
            if total == 1 { "" } else { "s" }
        );
        for line in summary(&file) {
            println!("    {}", line);
        }
        Ok(())
    }
}

/// Dialects the manifest cannot be rendered to, with the reason.
fn unsupported_dialects(file: &DeclFile) -> Vec<(Dialect, String)> {
    Dialect::ALL
        .into_iter()
        .filter_map(|dialect| match file.render(dialect) {
            Ok(_) => None,
            Err(e) => Some((dialect, e.to_string())),
        })
        .collect()
}

/// One line per non-empty declaration kind, e.g. `2 functions`.
fn summary(file: &DeclFile) -> Vec<String> {
    let counts = [
        (file.types.len(), "type", "types"),
        (file.enums.len(), "enum", "enums"),
        (file.classes.len(), "class", "classes"),
        (file.variables.len(), "variable", "variables"),
        (file.functions.len(), "function", "functions"),
        (file.namespaces.len(), "namespace", "namespaces"),
    ];
    counts
        .into_iter()
        .filter(|(count, _, _)| *count > 0)
        .map(|(count, singular, plural)| {
            format!("{} {}", count, if count == 1 { singular } else { plural })
        })
        .collect()
}
