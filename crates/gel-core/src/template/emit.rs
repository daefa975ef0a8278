//! Go function emission

use super::header::HeaderConfig;
use super::imports::ImportSet;
use super::segment::Segment;

/// Generated Go function plus what it needs from its file
#[derive(Debug, Clone)]
pub struct GeneratedFunction {
    /// Package the template declared
    pub package: String,
    /// Function name
    pub name: String,
    /// Parameter list, writer first
    pub parameters: String,
    /// Imports the body depends on
    pub imports: ImportSet,
    /// Body statements, one entry per segment
    pub body: Vec<String>,
}

impl GeneratedFunction {
    /// Emit the function for a header and its segments
    pub fn emit(header: &HeaderConfig, segments: &[Segment], imports: &ImportSet) -> Self {
        Self {
            package: header.package.clone(),
            name: header.func.clone(),
            parameters: header.signature_parameters(),
            imports: imports.clone(),
            body: segments.iter().map(Segment::code).collect(),
        }
    }

    /// `func Name(writer io.Writer, ...) error`
    pub fn signature(&self) -> String {
        format!("func {}({}) error", self.name, self.parameters)
    }

    /// Function source text, ending in a newline
    pub fn render(&self) -> String {
        let mut out = self.signature();
        out.push_str(" {\n");
        for statement in &self.body {
            out.push_str(statement);
            out.push('\n');
        }
        out.push_str("\treturn nil\n}\n");
        out
    }
}
