use crate::template::TemplateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GelError {
    // Template errors
    #[error("TEMPLATE_INVALID: {document}: {error}")]
    Template {
        document: String,
        error: TemplateError,
    },

    // Assembly errors
    #[error(
        "PACKAGE_MISMATCH: '{document}' declares package '{found}' but the file is package '{expected}'"
    )]
    PackageMismatch {
        document: String,
        expected: String,
        found: String,
    },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl GelError {
    /// Attach the identity of the failing document to a template error
    pub fn template(document: impl Into<String>, error: TemplateError) -> Self {
        GelError::Template {
            document: document.into(),
            error,
        }
    }

    /// Name of the document this error belongs to, if any
    pub fn document(&self) -> Option<&str> {
        match self {
            GelError::Template { document, .. } | GelError::PackageMismatch { document, .. } => {
                Some(document)
            }
            GelError::IoError(_) => None,
        }
    }

    /// The underlying template error, if this is one
    pub fn template_error(&self) -> Option<&TemplateError> {
        match self {
            GelError::Template { error, .. } => Some(error),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_error_carries_document() {
        let err = GelError::template("hello.gel", TemplateError::UnterminatedDirective { line: 3 });
        assert_eq!(err.document(), Some("hello.gel"));
        assert_eq!(
            err.template_error(),
            Some(&TemplateError::UnterminatedDirective { line: 3 })
        );

        let message = err.to_string();
        assert!(message.starts_with("TEMPLATE_INVALID: hello.gel:"));
        assert!(message.contains("line 3"));
    }

    #[test]
    fn test_io_error_has_no_document() {
        let err = GelError::from(std::io::Error::other("disk full"));
        assert_eq!(err.document(), None);
        assert!(err.template_error().is_none());
        assert_eq!(err.to_string(), "IO_ERROR: disk full");
    }
}
