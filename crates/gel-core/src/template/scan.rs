//! Body scanning
//!
//! Splits template body text into literal runs and `<% ... %>` directive spans
//! with a forward-only state machine.

use super::error::TemplateError;

/// Opening sequence of a directive
pub const DIRECTIVE_OPEN: &str = "<%";
/// Closing sequence of a directive
pub const DIRECTIVE_CLOSE: &str = "%>";

/// Chunk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    /// Plain text, written as is
    Literal,
    /// A full `<% ... %>` span, delimiters included
    Directive,
}

/// One raw piece of the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Chunk classification
    pub kind: ChunkKind,
    /// Source text of the chunk, delimiters included for directives
    pub text: &'a str,
    /// Byte offset of the chunk in the body
    pub start: usize,
    /// Line number where the chunk starts
    pub line: usize,
}

impl<'a> Chunk<'a> {
    /// Directive content without `<%` and `%>`; the full text for literals
    pub fn inner(&self) -> &'a str {
        match self.kind {
            ChunkKind::Literal => self.text,
            ChunkKind::Directive => {
                &self.text[DIRECTIVE_OPEN.len()..self.text.len() - DIRECTIVE_CLOSE.len()]
            }
        }
    }
}

/// Scanner state
///
/// ```text
/// Literal ──<%──> InDirective ──%──> SeenPercent ──>──> [Yield Directive]
///   │                  ▲                  │
///   │ (<% or EOF)      └──── (not >) ─────┘
///   └──> [Yield Literal]
///
/// EOF inside a directive → UnterminatedDirective
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    /// Inside a literal run
    Literal,
    /// After `<%`, looking for `%`
    InDirective,
    /// After a `%` inside a directive, checking for `>`
    SeenPercent,
}

/// Iterator over the chunks of a template body
///
/// Every byte belongs to exactly one chunk, so concatenating the chunk texts
/// in order gives back the body.
pub struct Scanner<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    failed: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over body text
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            line: 1,
            failed: false,
        }
    }

    /// Whether a directive opens at `pos`
    fn opens_directive(&self, pos: usize) -> bool {
        self.bytes[pos..].starts_with(DIRECTIVE_OPEN.as_bytes())
    }

    /// Move past one byte, counting lines
    #[inline]
    fn advance(&mut self) {
        if self.bytes[self.pos] == b'\n' {
            self.line += 1;
        }
        self.pos += 1;
    }

    fn chunk(&self, kind: ChunkKind, start: usize, line: usize) -> Chunk<'a> {
        Chunk {
            kind,
            text: &self.text[start..self.pos],
            start,
            line,
        }
    }

    fn unterminated(&mut self, line: usize) -> Option<Result<Chunk<'a>, TemplateError>> {
        self.failed = true;
        Some(Err(TemplateError::UnterminatedDirective { line }))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Chunk<'a>, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.bytes.len() {
            return None;
        }

        let start = self.pos;
        let line = self.line;

        let mut state = if self.opens_directive(start) {
            self.pos += DIRECTIVE_OPEN.len();
            ScanState::InDirective
        } else {
            ScanState::Literal
        };

        loop {
            let at_end = self.pos >= self.bytes.len();

            match state {
                ScanState::Literal => {
                    if at_end || self.opens_directive(self.pos) {
                        return Some(Ok(self.chunk(ChunkKind::Literal, start, line)));
                    }
                    self.advance();
                }
                ScanState::InDirective => {
                    if at_end {
                        return self.unterminated(line);
                    }
                    if self.bytes[self.pos] == b'%' {
                        state = ScanState::SeenPercent;
                    }
                    self.advance();
                }
                ScanState::SeenPercent => {
                    if at_end {
                        return self.unterminated(line);
                    }
                    if self.bytes[self.pos] == b'>' {
                        self.pos += 1;
                        return Some(Ok(self.chunk(ChunkKind::Directive, start, line)));
                    }
                    // Reprocess this byte; it may be another `%`
                    state = ScanState::InDirective;
                }
            }
        }
    }
}

/// Scan a whole body into chunks
pub fn scan(body: &str) -> Result<Vec<Chunk<'_>>, TemplateError> {
    Scanner::new(body).collect()
}
