//! Header decoding
//!
//! The header is a YAML mapping. Only the keys below are recognized; anything
//! else is ignored.
//!
//! ```text
//! package: views
//! func: RenderUser
//! imports: fmt time
//! parameters: user User, now time.Time
//! escape: html
//! ```

use super::error::TemplateError;
use serde::Deserialize;
use serde_yaml::Value;
use std::str::FromStr;

/// Parameter every generated function starts with
pub const WRITER_PARAMETER: &str = "writer io.Writer";

/// How `<%= %>` output is escaped before being written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Write the string as is
    #[default]
    None,
    /// Pass the string through `html.EscapeString`
    Html,
}

impl FromStr for EscapeMode {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(EscapeMode::None),
            "html" => Ok(EscapeMode::Html),
            other => Err(TemplateError::UnknownEscapeMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// Header as written, before validation
///
/// Values stay untyped here so that `package: 123` is rejected instead of
/// being read as the string `"123"`.
#[derive(Debug, Default, Deserialize)]
struct RawHeader {
    #[serde(default)]
    package: Option<Value>,
    #[serde(default)]
    func: Option<Value>,
    #[serde(default)]
    imports: Option<Value>,
    #[serde(default)]
    parameters: Option<Value>,
    #[serde(default)]
    escape: Option<Value>,
}

/// Validated template header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Go package clause
    pub package: String,
    /// Generated function name
    pub func: String,
    /// Extra imports, in declaration order
    pub imports: Vec<String>,
    /// Extra parameters appended after the writer
    pub parameters: Option<String>,
    /// Escaping applied to string interpolation
    pub escape: EscapeMode,
}

impl HeaderConfig {
    /// Decode and validate header text
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let raw: RawHeader = if text.trim().is_empty() {
            RawHeader::default()
        } else {
            serde_yaml::from_str(text).map_err(|e| TemplateError::InvalidHeader {
                message: e.to_string(),
            })?
        };

        raw.validate()
    }

    /// Full parameter list of the generated function
    pub fn signature_parameters(&self) -> String {
        match &self.parameters {
            Some(extra) => format!("{}, {}", WRITER_PARAMETER, extra),
            None => WRITER_PARAMETER.to_string(),
        }
    }
}

impl RawHeader {
    fn validate(self) -> Result<HeaderConfig, TemplateError> {
        let package = required("package", string_value("package", self.package)?)?;
        let func = required("func", string_value("func", self.func)?)?;

        let imports = string_value("imports", self.imports)?
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let parameters = string_value("parameters", self.parameters)?
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let escape = match string_value("escape", self.escape)?.as_deref() {
            Some(mode) => mode.parse()?,
            None => EscapeMode::None,
        };

        Ok(HeaderConfig {
            package,
            func,
            imports,
            parameters,
            escape,
        })
    }
}

/// A recognized key's value; `null` counts as absent
fn string_value(key: &str, value: Option<Value>) -> Result<Option<String>, TemplateError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(TemplateError::InvalidHeader {
            message: format!("key \"{}\" must be a string, found {}", key, kind(&other)),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn required(key: &str, value: Option<String>) -> Result<String, TemplateError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| TemplateError::MissingRequiredKey {
            key: key.to_string(),
        })
}
