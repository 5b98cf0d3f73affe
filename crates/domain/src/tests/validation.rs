// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, Ensure, Field, ParamValue, TransportDeclaration, TransportRule, is_absolute_path,
    validate_declaration, validate_quotable,
};

#[test]
fn test_validate_declaration_applies_defaults() {
    let declaration: TransportDeclaration = TransportDeclaration::new("foo");

    let rule: TransportRule = validate_declaration(&declaration).unwrap();
    assert_eq!(rule.name(), "foo");
    assert_eq!(rule.destination(), None);
    assert_eq!(rule.nexthop(), None);
    assert_eq!(rule.file().as_str(), "/etc/postfix/transport");
    assert_eq!(rule.state(), Ensure::Present);
}

#[test]
fn test_validate_declaration_accepts_overrides() {
    let declaration: TransportDeclaration = TransportDeclaration::new("foo")
        .with_destination("bar")
        .with_nexthop("baz")
        .with_file("/tmp/transport")
        .with_ensure("absent");

    let rule: TransportRule = validate_declaration(&declaration).unwrap();
    assert_eq!(rule.destination(), Some("bar"));
    assert_eq!(rule.nexthop(), Some("baz"));
    assert_eq!(rule.file().as_str(), "/tmp/transport");
    assert_eq!(rule.state(), Ensure::Absent);
}

#[test]
fn test_validate_declaration_rejects_list_destination() {
    let declaration: TransportDeclaration =
        TransportDeclaration::new("foo").with_destination(vec!["bar"]);

    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(err.field(), Field::Destination);
    assert!(err.to_string().contains("[\"bar\"] is not a string"));
}

#[test]
fn test_validate_declaration_rejects_list_nexthop() {
    let declaration: TransportDeclaration = TransportDeclaration::new("foo")
        .with_destination("bar")
        .with_nexthop(vec!["baz"]);

    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(err.field(), Field::Nexthop);
    assert!(err.to_string().contains("[\"baz\"] is not a string"));
}

#[test]
fn test_validate_declaration_rejects_list_file() {
    let declaration: TransportDeclaration = TransportDeclaration::new("foo")
        .with_destination("bar")
        .with_file(vec!["baz"]);

    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(err.field(), Field::File);
    assert!(err.to_string().contains("file must be a string"));
}

#[test]
fn test_validate_declaration_rejects_relative_file() {
    let declaration: TransportDeclaration = TransportDeclaration::new("foo")
        .with_destination("bar")
        .with_file("baz");

    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert!(err.is_value_error());
    assert_eq!(err.field(), Field::File);
    assert!(err.to_string().contains("\"baz\" is not an absolute path"));
}

#[test]
fn test_validate_declaration_rejects_list_ensure() {
    let declaration: TransportDeclaration = TransportDeclaration::new("foo")
        .with_destination("bar")
        .with_ensure(vec!["baz"]);

    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(err.field(), Field::State);
    assert!(err.to_string().contains("[\"baz\"] is not a string"));
}

#[test]
fn test_validate_declaration_rejects_unknown_ensure() {
    let declaration: TransportDeclaration = TransportDeclaration::new("foo")
        .with_destination("bar")
        .with_ensure("running");

    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert!(err.is_value_error());
    assert_eq!(err.field(), Field::State);
    assert!(err.to_string().contains("$ensure must be either"));
}

#[test]
fn test_validate_declaration_rejects_non_string_scalars() {
    let declaration: TransportDeclaration =
        TransportDeclaration::new("foo").with_destination(true);
    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert_eq!(
        err,
        DomainError::TypeError {
            field: Field::Destination,
            value: String::from("true"),
        }
    );

    let declaration: TransportDeclaration = TransportDeclaration::new("foo").with_nexthop(25_i64);
    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert_eq!(err.field(), Field::Nexthop);
    assert!(err.is_type_error());
}

#[test]
fn test_validate_declaration_rejects_empty_name_first() {
    let declaration: TransportDeclaration =
        TransportDeclaration::new("").with_destination(vec!["bar"]);

    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert_eq!(err.field(), Field::Name);
    assert!(err.is_value_error());
}

#[test]
fn test_validate_declaration_reports_first_violation() {
    // destination is checked before file and ensure
    let declaration: TransportDeclaration = TransportDeclaration::new("foo")
        .with_destination(vec!["bar"])
        .with_file("relative")
        .with_ensure("running");
    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert_eq!(err.field(), Field::Destination);

    // file value is checked before ensure shape
    let declaration: TransportDeclaration = TransportDeclaration::new("foo")
        .with_file("relative")
        .with_ensure(vec!["present"]);
    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert_eq!(err.field(), Field::File);
    assert!(err.is_value_error());
}

#[test]
fn test_validate_declaration_checks_shape_when_absent() {
    // destination is still validated when the entry is being removed
    let declaration: TransportDeclaration = TransportDeclaration::new("foo")
        .with_destination(vec!["bar"])
        .with_ensure("absent");

    let result: Result<TransportRule, DomainError> = validate_declaration(&declaration);
    assert!(matches!(result, Err(DomainError::TypeError { .. })));
}

#[test]
fn test_validate_declaration_rejects_unquotable_values() {
    let declaration: TransportDeclaration =
        TransportDeclaration::new("foo").with_destination("it's \"odd\"");
    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert_eq!(err.field(), Field::Destination);
    assert!(err.to_string().contains("cannot be quoted for augeas"));

    let declaration: TransportDeclaration = TransportDeclaration::new("foo\nbar");
    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert_eq!(err.field(), Field::Name);
}

#[test]
fn test_validate_quotable_allows_one_kind_of_quote() {
    assert!(validate_quotable(Field::Name, "o'reilly.example").is_ok());
    assert!(validate_quotable(Field::Name, "say \"hi\"").is_ok());
    assert!(validate_quotable(Field::Name, "plain").is_ok());
}

#[test]
fn test_is_absolute_path_unix() {
    assert!(is_absolute_path("/etc/postfix/transport"));
    assert!(is_absolute_path("/"));
    assert!(!is_absolute_path("baz"));
    assert!(!is_absolute_path("./transport"));
    assert!(!is_absolute_path(""));
}

#[test]
fn test_is_absolute_path_windows() {
    assert!(is_absolute_path("C:\\postfix\\transport"));
    assert!(is_absolute_path("c:/postfix/transport"));
    assert!(is_absolute_path("\\\\server\\share\\transport"));
    assert!(is_absolute_path("\\\\?\\C:\\postfix"));
    assert!(!is_absolute_path("C:transport"));
    assert!(!is_absolute_path("\\\\server"));
    assert!(!is_absolute_path("\\\\?\\"));
}

#[test]
fn test_validate_declaration_is_deterministic() {
    let declaration: TransportDeclaration = TransportDeclaration::new("foo")
        .with_destination(ParamValue::from("bar"))
        .with_nexthop("baz");

    let first: TransportRule = validate_declaration(&declaration).unwrap();
    let second: TransportRule = validate_declaration(&declaration).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_validate_declaration_rejects_unquotable_file() {
    let declaration: TransportDeclaration =
        TransportDeclaration::new("foo").with_file("/tmp/x\nrm /files/etc/passwd");
    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert!(err.is_value_error());
    assert_eq!(err.field(), Field::File);
    assert!(err.to_string().contains("file cannot be quoted for augeas"));

    let declaration: TransportDeclaration =
        TransportDeclaration::new("foo").with_file("/tmp/it's \"odd\"");
    let err: DomainError = validate_declaration(&declaration).unwrap_err();
    assert_eq!(err.field(), Field::File);
}

#[test]
fn test_validate_declaration_accepts_file_with_spaces() {
    let declaration: TransportDeclaration =
        TransportDeclaration::new("foo").with_file("/tmp/my transport");
    let rule: TransportRule = validate_declaration(&declaration).unwrap();
    assert_eq!(rule.file().as_str(), "/tmp/my transport");
}
