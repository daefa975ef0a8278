//! Header decoding tests

use super::*;

#[test]
fn test_parse_minimal_header() {
    let header = HeaderConfig::parse("package: main\nfunc: HelloWorld\n").unwrap();
    assert_eq!(header.package, "main");
    assert_eq!(header.func, "HelloWorld");
    assert!(header.imports.is_empty());
    assert_eq!(header.parameters, None);
    assert_eq!(header.escape, EscapeMode::None);
    assert_eq!(header.signature_parameters(), "writer io.Writer");
}

#[test]
fn test_parse_full_header() {
    let text = "\
package: views
func: Profile
imports: fmt  time
parameters: name string, age int
escape: html
";
    let header = HeaderConfig::parse(text).unwrap();
    assert_eq!(header.package, "views");
    assert_eq!(header.func, "Profile");
    assert_eq!(header.imports, ["fmt", "time"]);
    assert_eq!(header.parameters.as_deref(), Some("name string, age int"));
    assert_eq!(header.escape, EscapeMode::Html);
    assert_eq!(
        header.signature_parameters(),
        "writer io.Writer, name string, age int"
    );
}

#[test]
fn test_unknown_keys_ignored() {
    let header = HeaderConfig::parse("package: main\nfunc: F\nauthor: someone\n").unwrap();
    assert_eq!(header.func, "F");
}

#[test]
fn test_blank_optional_values() {
    let header =
        HeaderConfig::parse("package: main\nfunc: F\nparameters: \"  \"\nescape: \"\"\n").unwrap();
    assert_eq!(header.parameters, None);
    assert_eq!(header.escape, EscapeMode::None);
}

#[test]
fn test_null_escape_is_none() {
    let header = HeaderConfig::parse("package: main\nfunc: F\nescape:\n").unwrap();
    assert_eq!(header.escape, EscapeMode::None);
}

#[test]
fn test_escape_mode_from_str() {
    assert_eq!("html".parse::<EscapeMode>(), Ok(EscapeMode::Html));
    assert_eq!(" html ".parse::<EscapeMode>(), Ok(EscapeMode::Html));
    assert_eq!(
        "xml".parse::<EscapeMode>(),
        Err(TemplateError::UnknownEscapeMode {
            mode: "xml".to_string()
        })
    );
}

#[test]
fn test_missing_package() {
    let result = HeaderConfig::parse("func: F\n");
    assert_eq!(
        result,
        Err(TemplateError::MissingRequiredKey {
            key: "package".to_string()
        })
    );
}

#[test]
fn test_missing_func() {
    let result = HeaderConfig::parse("package: main\n");
    assert_eq!(
        result,
        Err(TemplateError::MissingRequiredKey {
            key: "func".to_string()
        })
    );
}

#[test]
fn test_blank_header_misses_package_first() {
    let result = HeaderConfig::parse("\n");
    assert_eq!(
        result,
        Err(TemplateError::MissingRequiredKey {
            key: "package".to_string()
        })
    );
}

#[test]
fn test_header_not_a_mapping() {
    match HeaderConfig::parse("just some text\n") {
        Err(TemplateError::InvalidHeader { .. }) => {}
        other => panic!("Expected InvalidHeader, got {other:?}"),
    }
}

#[test]
fn test_header_malformed_yaml() {
    match HeaderConfig::parse("package: [main\nfunc: F\n") {
        Err(TemplateError::InvalidHeader { message }) => assert!(!message.is_empty()),
        other => panic!("Expected InvalidHeader, got {other:?}"),
    }
}

#[test]
fn test_non_string_scalars_rejected() {
    match HeaderConfig::parse("package: 123\nfunc: F\n") {
        Err(TemplateError::InvalidHeader { message }) => {
            assert!(message.contains("\"package\""), "message: {message}");
            assert!(message.contains("number"), "message: {message}");
        }
        other => panic!("Expected InvalidHeader, got {other:?}"),
    }

    match HeaderConfig::parse("package: main\nfunc: true\n") {
        Err(TemplateError::InvalidHeader { message }) => {
            assert!(message.contains("\"func\""), "message: {message}")
        }
        other => panic!("Expected InvalidHeader, got {other:?}"),
    }
}

#[test]
fn test_optional_keys_must_be_strings() {
    for text in [
        "package: main\nfunc: F\nimports: [fmt, time]\n",
        "package: main\nfunc: F\nparameters: 5\n",
        "package: main\nfunc: F\nescape: false\n",
    ] {
        assert!(
            matches!(
                HeaderConfig::parse(text),
                Err(TemplateError::InvalidHeader { .. })
            ),
            "accepted {text:?}"
        );
    }
}

#[test]
fn test_quoted_numbers_are_strings() {
    let header = HeaderConfig::parse("package: \"123\"\nfunc: 'true'\n").unwrap();
    assert_eq!(header.package, "123");
    assert_eq!(header.func, "true");
}
