//! Splitting raw template source into header and body

use super::error::TemplateError;

/// Line separating the header from the body
pub const DELIMITER: &str = "---\n";
/// The same line in a file with Windows line endings
pub const CRLF_DELIMITER: &str = "---\r\n";

/// A template source split at its delimiter line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDocument<'a> {
    header: &'a str,
    body: &'a str,
}

impl<'a> TemplateDocument<'a> {
    /// Split `source` on its single `---` line
    ///
    /// The delimiter only counts at the start of a line, ending in `\n` or
    /// `\r\n`. Zero or several delimiter lines fail with
    /// [`TemplateError::MissingDelimiter`].
    pub fn split(source: &'a str) -> Result<Self, TemplateError> {
        let offsets = delimiter_offsets(source);

        match offsets.as_slice() {
            [(offset, len)] => Ok(Self {
                header: &source[..*offset],
                body: &source[offset + len..],
            }),
            _ => Err(TemplateError::MissingDelimiter {
                found: offsets.len(),
            }),
        }
    }

    /// Header text, everything before the delimiter line
    pub fn header(&self) -> &'a str {
        self.header
    }

    /// Body text, everything after the delimiter line
    pub fn body(&self) -> &'a str {
        self.body
    }
}

/// Byte offset and length of every line that is exactly `---`
fn delimiter_offsets(source: &str) -> Vec<(usize, usize)> {
    let mut offsets = Vec::new();
    let mut line_start = 0;

    for line in source.split_inclusive('\n') {
        if line == DELIMITER || line == CRLF_DELIMITER {
            offsets.push((line_start, line.len()));
        }
        line_start += line.len();
    }

    offsets
}
