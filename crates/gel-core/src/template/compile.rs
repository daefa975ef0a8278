//! Single-pass template compilation

use super::document::TemplateDocument;
use super::emit::GeneratedFunction;
use super::error::TemplateError;
use super::header::HeaderConfig;
use super::imports::ImportSet;
use super::scan::Scanner;
use super::segment::Segment;
use crate::error::{GelError, Result};
use log::debug;

/// A compiled template
///
/// Everything is derived once in [`Template::compile`]; the value is
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    header: HeaderConfig,
    segments: Vec<Segment>,
    imports: ImportSet,
}

impl Template {
    /// Compile template source
    ///
    /// `name` identifies the document in errors (usually its path).
    ///
    /// # Errors
    ///
    /// Returns [`GelError::Template`] carrying `name` if the delimiter is
    /// missing, the header is invalid, or the body fails to scan.
    pub fn compile(name: impl Into<String>, source: &str) -> Result<Self> {
        let name = name.into();

        match compile_parts(source) {
            Ok((header, segments)) => {
                let imports = ImportSet::for_template(&header, &segments);
                debug!(
                    "compiled '{}': {} segment(s), imports [{}]",
                    name,
                    segments.len(),
                    imports.iter().collect::<Vec<_>>().join(", ")
                );
                Ok(Self {
                    name,
                    header,
                    segments,
                    imports,
                })
            }
            Err(error) => Err(GelError::template(name, error)),
        }
    }

    /// Document name given to [`Template::compile`]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &HeaderConfig {
        &self.header
    }

    /// Segments in body order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    /// Emit the Go function for this template
    pub fn emit(&self) -> GeneratedFunction {
        GeneratedFunction::emit(&self.header, &self.segments, &self.imports)
    }
}

fn compile_parts(
    source: &str,
) -> std::result::Result<(HeaderConfig, Vec<Segment>), TemplateError> {
    let document = TemplateDocument::split(source)?;
    let header = HeaderConfig::parse(document.header())?;

    let segments = Scanner::new(document.body())
        .map(|chunk| chunk.and_then(|c| Segment::classify(&c, header.escape)))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok((header, segments))
}
