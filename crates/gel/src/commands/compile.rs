//! Compile command - turn template files into one Go source file

use crate::cli::Cli;
use crate::output::write_source;
use anyhow::{Context, Result};
use gel_core::compile_sources;
use log::info;
use std::io::Read;
use std::path::PathBuf;

/// Document name used for a template read from stdin
pub const STDIN_NAME: &str = "<stdin>";

/// Compile every input and write the generated file
///
/// Nothing is written unless all templates compile.
pub fn run(cli: &Cli) -> Result<()> {
    let sources = read_sources(&cli.files)?;

    let file = compile_sources(
        cli.package.as_deref(),
        sources.iter().map(|(name, source)| (name.as_str(), source.as_str())),
    )?;

    info!(
        "compiled {} template(s) into package {}",
        file.functions().len(),
        file.package()
    );

    write_source(cli.output.as_deref(), &file.render())
}

/// Read template sources as (document name, text) pairs
fn read_sources(files: &[PathBuf]) -> Result<Vec<(String, String)>> {
    if files.is_empty() {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read template from stdin")?;
        return Ok(vec![(STDIN_NAME.to_string(), source)]);
    }

    files
        .iter()
        .map(|path| {
            info!("reading {}", path.display());
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read template {}", path.display()))?;
            Ok((path.display().to_string(), source))
        })
        .collect()
}
