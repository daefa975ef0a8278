// Core modules
pub mod error;
pub mod go;
pub mod template;

// Re-export commonly used types
pub use error::{GelError, Result};
pub use go::{compile_sources, GoFile, DEFAULT_PACKAGE};
pub use template::{GeneratedFunction, Template, TemplateError};
