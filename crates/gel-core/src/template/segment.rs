//! Segment classification and per-segment Go code

use super::error::TemplateError;
use super::header::EscapeMode;
use super::scan::{Chunk, ChunkKind};

/// Go packages segments may depend on
pub mod packages {
    /// Always imported: every write goes through `io.WriteString`
    pub const IO: &str = "io";
    /// Integer formatting for `<%=i %>`
    pub const STRCONV: &str = "strconv";
    /// HTML escaping for `<%= %>` under `escape: html`
    pub const HTML: &str = "html";
}

/// Sigil for string interpolation
const STRING_SIGIL: char = '=';
/// Sigil for integer interpolation
const INTEGER_SIGIL: &str = "=i";

/// One classified unit of a template body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text written verbatim
    Literal(String),
    /// Go statement spliced into the function body
    RawCode(String),
    /// `<%= expr %>` without escaping
    StringInterpolation(String),
    /// `<%= expr %>` under `escape: html`
    EscapedStringInterpolation(String),
    /// `<%=i expr %>`
    IntegerInterpolation(String),
}

impl Segment {
    /// Classify a scanned chunk
    ///
    /// A directive starting with `=i` is always an integer interpolation, so
    /// `<%=id %>` writes the integer expression `d`.
    pub fn classify(chunk: &Chunk<'_>, escape: EscapeMode) -> Result<Self, TemplateError> {
        if chunk.kind == ChunkKind::Literal {
            return Ok(Segment::Literal(chunk.text.to_string()));
        }

        let content = chunk.inner();

        if let Some(rest) = content.strip_prefix(INTEGER_SIGIL) {
            let expr = expression(rest, chunk.line)?;
            return Ok(Segment::IntegerInterpolation(expr));
        }

        if let Some(rest) = content.strip_prefix(STRING_SIGIL) {
            let expr = expression(rest, chunk.line)?;
            return Ok(match escape {
                EscapeMode::None => Segment::StringInterpolation(expr),
                EscapeMode::Html => Segment::EscapedStringInterpolation(expr),
            });
        }

        Ok(Segment::RawCode(content.to_string()))
    }

    /// Text held by the segment
    pub fn content(&self) -> &str {
        match self {
            Segment::Literal(s)
            | Segment::RawCode(s)
            | Segment::StringInterpolation(s)
            | Segment::EscapedStringInterpolation(s)
            | Segment::IntegerInterpolation(s) => s,
        }
    }

    /// Imports needed beyond `io`
    pub fn imports(&self) -> &'static [&'static str] {
        match self {
            Segment::IntegerInterpolation(_) => &[packages::STRCONV],
            Segment::EscapedStringInterpolation(_) => &[packages::HTML],
            Segment::Literal(_) | Segment::RawCode(_) | Segment::StringInterpolation(_) => &[],
        }
    }

    /// Go code contributed to the function body
    pub fn code(&self) -> String {
        match self {
            Segment::Literal(text) => write_string(&go_string_literal(text)),
            Segment::RawCode(code) => code.clone(),
            Segment::StringInterpolation(expr) => write_string(expr),
            Segment::EscapedStringInterpolation(expr) => {
                write_string(&format!("html.EscapeString({})", expr))
            }
            Segment::IntegerInterpolation(expr) => {
                write_string(&format!("strconv.FormatInt(int64({}), 10)", expr))
            }
        }
    }
}

fn expression(raw: &str, line: usize) -> Result<String, TemplateError> {
    let expr = raw.trim();
    if expr.is_empty() {
        return Err(TemplateError::EmptyInterpolation { line });
    }
    Ok(expr.to_string())
}

/// Checked `io.WriteString` of a Go string expression
fn write_string(arg: &str) -> String {
    format!(
        "\tif _, err := io.WriteString(writer, {}); err != nil {{\n\t\treturn err\n\t}}",
        arg
    )
}

/// Quote text as a Go string expression
///
/// Raw string literals are used wherever possible. Go raw strings cannot hold
/// a backtick and silently drop carriage returns, and Go source may not contain
/// NUL or a byte order mark at all, so those characters are emitted as
/// interpreted-string pieces joined with `+`.
pub fn go_string_literal(text: &str) -> String {
    let mut pieces: Vec<String> = Vec::new();
    let mut raw = String::new();
    let mut interpreted = String::new();

    for ch in text.chars() {
        let escaped = match ch {
            '`' => Some("`"),
            '\r' => Some("\\r"),
            '\0' => Some("\\x00"),
            '\u{feff}' => Some("\\uFEFF"),
            _ => None,
        };

        match escaped {
            Some(e) => {
                if !raw.is_empty() {
                    pieces.push(format!("`{}`", raw));
                    raw.clear();
                }
                interpreted.push_str(e);
            }
            None => {
                if !interpreted.is_empty() {
                    pieces.push(format!("\"{}\"", interpreted));
                    interpreted.clear();
                }
                raw.push(ch);
            }
        }
    }

    if !interpreted.is_empty() {
        pieces.push(format!("\"{}\"", interpreted));
    }
    if !raw.is_empty() || pieces.is_empty() {
        pieces.push(format!("`{}`", raw));
    }

    pieces.join(" + ")
}
