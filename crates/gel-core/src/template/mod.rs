//! Template module - compiles templates into Go rendering functions
//!
//! A template is a YAML header and a body separated by a `---` line. The body
//! is literal text with embedded Go:
//!
//! ```text
//! package: views
//! func: Greeting
//! parameters: name string
//! escape: html
//! ---
//! <p>Hello, <%= name %>!</p>
//! ```
//!
//! ## Pipeline
//!
//! source → [`TemplateDocument`] → [`HeaderConfig`] + [`Scanner`] chunks →
//! [`Segment`]s → [`GeneratedFunction`]
//!
//! ## Syntax
//!
//! - `<% code %>`: Go statement spliced into the function body (loops, conditionals)
//! - `<%= expr %>`: string expression, HTML-escaped under `escape: html`
//! - `<%=i expr %>`: integer expression, written in base 10
//!
//! Code inside directives is passed through untouched; the template author is
//! responsible for it being valid Go.

pub mod compile;
pub mod document;
pub mod emit;
pub mod error;
pub mod header;
pub mod imports;
pub mod scan;
pub mod segment;

pub use compile::Template;
pub use document::TemplateDocument;
pub use emit::GeneratedFunction;
pub use error::TemplateError;
pub use header::{EscapeMode, HeaderConfig};
pub use imports::ImportSet;
pub use scan::{scan, Chunk, ChunkKind, Scanner};
pub use segment::Segment;

#[cfg(test)]
mod tests;
