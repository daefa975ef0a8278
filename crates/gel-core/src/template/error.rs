//! Template error types

use std::fmt;

/// Template compilation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The `---` line separating header and body is missing or repeated
    MissingDelimiter {
        /// Number of delimiter lines found (anything but 1)
        found: usize,
    },

    /// Header is not a well-formed key-value mapping
    InvalidHeader {
        /// Parser message
        message: String,
    },

    /// A required header key is absent or blank
    MissingRequiredKey {
        /// The missing key
        key: String,
    },

    /// `escape` names a mode other than `html`
    UnknownEscapeMode {
        /// The rejected value
        mode: String,
    },

    /// `<%` without a matching `%>`
    UnterminatedDirective {
        /// Line number of the opening `<%`
        line: usize,
    },

    /// `<%= %>` or `<%=i %>` with nothing to interpolate
    EmptyInterpolation {
        /// Line number of the directive
        line: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::MissingDelimiter { found: 0 } => {
                write!(f, "Did not find '---' divider between header and body")
            }
            TemplateError::MissingDelimiter { found } => {
                write!(
                    f,
                    "Expected exactly one '---' divider between header and body, found {}",
                    found
                )
            }
            TemplateError::InvalidHeader { message } => {
                write!(f, "Invalid header: {}", message)
            }
            TemplateError::MissingRequiredKey { key } => {
                write!(f, "Missing required header key \"{}\"", key)
            }
            TemplateError::UnknownEscapeMode { mode } => {
                write!(f, "Unknown escape mode '{}' (supported: html)", mode)
            }
            TemplateError::UnterminatedDirective { line } => {
                write!(f, "Unterminated directive at line {}: '<%' has no closing '%>'", line)
            }
            TemplateError::EmptyInterpolation { line } => {
                write!(f, "Empty interpolation at line {}", line)
            }
        }
    }
}

impl std::error::Error for TemplateError {}
