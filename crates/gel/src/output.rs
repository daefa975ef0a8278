use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

/// Write generated source to `path`, or stdout when `None`
pub fn write_source(path: Option<&Path>, source: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, source)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut out = io::stdout().lock();
            out.write_all(source.as_bytes())?;
            out.flush()?;
            Ok(())
        }
    }
}
