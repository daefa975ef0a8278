//! Shared test helpers for template tests

use super::*;

/// Build template source from header lines and a body
pub(super) fn source(header: &[&str], body: &str) -> String {
    let mut out = String::new();
    for line in header {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("---\n");
    out.push_str(body);
    out
}

/// Compile a body under a minimal header plus `extra` header lines
pub(super) fn compile_body(extra: &[&str], body: &str) -> Template {
    let mut header = vec!["package: main", "func: Render"];
    header.extend_from_slice(extra);
    Template::compile("test.gel", &source(&header, body)).unwrap()
}

/// Compile and unwrap the template error
pub(super) fn compile_err(source: &str) -> TemplateError {
    match Template::compile("test.gel", source) {
        Err(err) => err
            .template_error()
            .cloned()
            .unwrap_or_else(|| panic!("Expected template error, got {err:?}")),
        Ok(template) => panic!("Expected error, compiled {:?}", template.segments()),
    }
}
