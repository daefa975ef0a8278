//! Header/body splitting tests

use super::*;

#[test]
fn test_split_header_and_body() {
    let doc = TemplateDocument::split("package: main\nfunc: F\n---\nHello\n").unwrap();
    assert_eq!(doc.header(), "package: main\nfunc: F\n");
    assert_eq!(doc.body(), "Hello\n");
}

#[test]
fn test_split_empty_body() {
    let doc = TemplateDocument::split("package: main\n---\n").unwrap();
    assert_eq!(doc.body(), "");
}

#[test]
fn test_delimiter_on_first_line() {
    let doc = TemplateDocument::split("---\nbody").unwrap();
    assert_eq!(doc.header(), "");
    assert_eq!(doc.body(), "body");
}

#[test]
fn test_dashes_inside_a_line_are_not_a_delimiter() {
    let result = TemplateDocument::split("package: main\nx---\nbody");
    assert_eq!(result, Err(TemplateError::MissingDelimiter { found: 0 }));
}

#[test]
fn test_delimiter_needs_newline() {
    let result = TemplateDocument::split("package: main\n---");
    assert_eq!(result, Err(TemplateError::MissingDelimiter { found: 0 }));
}

#[test]
fn test_two_delimiters_rejected() {
    let result = TemplateDocument::split("package: main\n---\nabove\n---\nbelow");
    assert_eq!(result, Err(TemplateError::MissingDelimiter { found: 2 }));
}

#[test]
fn test_split_crlf_delimiter() {
    let doc = TemplateDocument::split("package: main\r\nfunc: F\r\n---\r\nHello\r\n").unwrap();
    assert_eq!(doc.header(), "package: main\r\nfunc: F\r\n");
    assert_eq!(doc.body(), "Hello\r\n");
}

#[test]
fn test_mixed_line_endings_count_both_delimiters() {
    let result = TemplateDocument::split("package: main\n---\r\nabove\n---\nbelow");
    assert_eq!(result, Err(TemplateError::MissingDelimiter { found: 2 }));
}

#[test]
fn test_crlf_template_compiles() {
    let template =
        Template::compile("crlf.gel", "package: main\r\nfunc: Crlf\r\n---\r\nHi\r\n").unwrap();
    assert_eq!(template.header().func, "Crlf");
    assert_eq!(template.segments(), [Segment::Literal("Hi\r\n".to_string())]);
}
