//! Go source file assembly
//!
//! Several templates compile into one Go file: a single package clause, the
//! union of every template's imports, then each function in the order the
//! templates were added.

use crate::error::{GelError, Result};
use crate::template::{GeneratedFunction, ImportSet, Template};
use log::debug;
use std::io::Write;

/// Package used when neither a template nor the caller names one
pub const DEFAULT_PACKAGE: &str = "main";

/// A Go source file under construction
#[derive(Debug, Clone)]
pub struct GoFile {
    package: String,
    /// Package chosen by the caller; templates' own packages are ignored
    overridden: bool,
    imports: ImportSet,
    functions: Vec<GeneratedFunction>,
}

impl GoFile {
    /// File for `package`; templates declaring another package are rejected
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            overridden: false,
            imports: ImportSet::new(),
            functions: Vec::new(),
        }
    }

    /// File for `package` regardless of what templates declare
    pub fn with_package_override(package: impl Into<String>) -> Self {
        Self {
            overridden: true,
            ..Self::new(package)
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    pub fn functions(&self) -> &[GeneratedFunction] {
        &self.functions
    }

    /// Append a template's function
    ///
    /// # Errors
    ///
    /// Returns [`GelError::PackageMismatch`] if the template declares a
    /// different package and the package was not overridden.
    pub fn push(&mut self, template: &Template) -> Result<()> {
        let declared = &template.header().package;
        if !self.overridden && declared != &self.package {
            return Err(GelError::PackageMismatch {
                document: template.name().to_string(),
                expected: self.package.clone(),
                found: declared.clone(),
            });
        }

        let function = template.emit();
        self.imports.merge(&function.imports);
        debug!("added func {} from '{}'", function.name, template.name());
        self.functions.push(function);
        Ok(())
    }

    /// Complete Go source text
    pub fn render(&self) -> String {
        let mut out = format!("package {}\n\n", self.package);
        out.push_str(&self.imports.render());

        for function in &self.functions {
            out.push('\n');
            out.push_str(&function.render());
        }

        out
    }

    /// Write the rendered file
    pub fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        writer.write_all(self.render().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Compile named template sources into one Go file
///
/// The file's package is `package` when given, otherwise the first
/// template's. Sources are compiled in order and the first failure aborts the
/// whole file.
pub fn compile_sources<I, N, S>(package: Option<&str>, sources: I) -> Result<GoFile>
where
    I: IntoIterator<Item = (N, S)>,
    N: Into<String>,
    S: AsRef<str>,
{
    let mut file: Option<GoFile> = package.map(GoFile::with_package_override);

    for (name, source) in sources {
        let template = Template::compile(name, source.as_ref())?;
        let file = file.get_or_insert_with(|| GoFile::new(template.header().package.clone()));
        file.push(&template)?;
    }

    Ok(file.unwrap_or_else(|| GoFile::new(DEFAULT_PACKAGE)))
}
