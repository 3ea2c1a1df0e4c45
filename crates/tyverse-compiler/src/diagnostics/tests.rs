use tyverse_core::{Meta, SourcePos};

use super::*;
use crate::types::TypeKind;

fn nonexistent_type(line: u32, column: u32) -> SemanticError {
    SemanticError::at(
        &Meta::at(line, column),
        SemanticErrorKind::CannotRemoveNonexistentType {
            domain: "v2".into(),
            tag: "point".into(),
        },
    )
}

#[test]
fn semantic_messages() {
    let kinds = [
        SemanticErrorKind::DomainPermutesNonexistentDomain {
            domain: "v2".into(),
            base: "v0".into(),
        },
        SemanticErrorKind::CannotRemoveNonexistentType {
            domain: "v2".into(),
            tag: "point".into(),
        },
        SemanticErrorKind::CannotRemoveBuiltinType {
            domain: "v2".into(),
            tag: "int".into(),
        },
        SemanticErrorKind::CannotPermuteNonexistentSum {
            domain: "v2".into(),
            tag: "expr".into(),
        },
        SemanticErrorKind::CannotPermuteNonSumType {
            domain: "v2".into(),
            tag: "point".into(),
            kind: TypeKind::Product,
        },
        SemanticErrorKind::CannotRemoveNonexistentSumVariant {
            domain: "v2".into(),
            sum: "expr".into(),
            variant: "add".into(),
        },
    ];

    let rendered: Vec<String> = kinds.iter().map(ToString::to_string).collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    domain `v2` permutes nonexistent domain `v0`
    cannot remove nonexistent type `point` from domain `v2`
    cannot remove builtin type `int` from domain `v2`
    cannot permute nonexistent sum `expr` in domain `v2`
    cannot permute non-sum type `point` in domain `v2`: `point` is a product
    cannot remove nonexistent variant `add` from sum `expr` in domain `v2`
    ");
}

#[test]
fn validation_messages() {
    let kinds = [
        ValidationErrorKind::DuplicateDomain {
            domain: "v1".into(),
        },
        ValidationErrorKind::DuplicateType {
            domain: "v1".into(),
            tag: "point".into(),
        },
        ValidationErrorKind::DuplicateVariant {
            sum: "expr".into(),
            variant: "lit".into(),
        },
        ValidationErrorKind::DuplicateField {
            product: "point".into(),
            field: "x".into(),
        },
        ValidationErrorKind::UndefinedReference {
            domain: "v1".into(),
            type_name: "float".into(),
        },
        ValidationErrorKind::UndefinedDomain {
            transform: "upgrade".into(),
            domain: "v9".into(),
        },
    ];

    let rendered: Vec<String> = kinds.iter().map(ToString::to_string).collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    domain `v1` is already defined
    type `point` is already defined in domain `v1`
    variant `lit` is already defined in sum `expr`
    field `x` is already defined in `point`
    `float` is not defined in domain `v1`
    transform `upgrade` refers to undefined domain `v9`
    ");
}

#[test]
fn error_display_has_location_prefix() {
    let err = nonexistent_type(3, 9);
    assert_eq!(
        err.to_string(),
        "3:9: cannot remove nonexistent type `point` from domain `v2`"
    );
}

#[test]
fn error_display_unknown_location() {
    let err = SemanticError::at(
        &Meta::default(),
        SemanticErrorKind::CannotRemoveBuiltinType {
            domain: "v2".into(),
            tag: "symbol".into(),
        },
    );
    assert_eq!(
        err.to_string(),
        "<unknown>: cannot remove builtin type `symbol` from domain `v2`"
    );
}

#[test]
fn raise_copies_meta() {
    let meta = Meta::at(2, 5).with_annotation("clause", "exclude");
    let err = SemanticError::at(
        &meta,
        SemanticErrorKind::CannotPermuteNonexistentSum {
            domain: "v2".into(),
            tag: "expr".into(),
        },
    );
    assert_eq!(err.meta, meta);
}

#[test]
fn diagnostic_accessors() {
    let diag = Diagnostic::from(nonexistent_type(1, 1));
    assert!(diag.as_semantic().is_some());
    assert!(diag.as_validation().is_none());
    assert_eq!(diag.meta().pos, SourcePos::new(1, 1, 0));
    assert_eq!(
        diag.message(),
        "cannot remove nonexistent type `point` from domain `v2`"
    );
}

#[test]
fn collection_basics() {
    let mut diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());
    assert!(!diagnostics.has_errors());

    diagnostics.push(nonexistent_type(1, 1));
    diagnostics.push(ValidationError::at(
        &Meta::at(4, 2),
        ValidationErrorKind::DuplicateDomain {
            domain: "v1".into(),
        },
    ));

    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.has_errors());
    assert_eq!(diagnostics.iter().filter(|d| d.as_validation().is_some()).count(), 1);
}

#[test]
fn render_plain() {
    let diagnostics: Diagnostics = [
        Diagnostic::from(nonexistent_type(1, 8)),
        Diagnostic::from(ValidationError::at(
            &Meta::at(2, 1),
            ValidationErrorKind::DuplicateDomain {
                domain: "v1".into(),
            },
        )),
    ]
    .into_iter()
    .collect();

    insta::assert_snapshot!(diagnostics.render(), @r"
    1:8: cannot remove nonexistent type `point` from domain `v2`
    2:1: domain `v1` is already defined
    ");
}

#[test]
fn render_plain_with_path() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(nonexistent_type(1, 8));

    let out = diagnostics.printer().path("universe.ty").render();
    assert_eq!(
        out,
        "universe.ty:1:8: cannot remove nonexistent type `point` from domain `v2`\n"
    );
}

#[test]
fn render_with_source_shows_snippet() {
    let source = "permute v1 as v2 {\n  exclude point\n}";
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(SemanticError::at(
        &Meta::new(SourcePos::new(2, 11, 5)),
        SemanticErrorKind::CannotRemoveNonexistentType {
            domain: "v2".into(),
            tag: "point".into(),
        },
    ));

    let out = diagnostics.printer().source(source).render();
    assert!(out.starts_with("error: cannot remove nonexistent type `point`"));
    assert!(out.contains("exclude point"));
    assert!(out.contains("^^^^^"));
}

#[test]
fn render_with_source_unknown_position_falls_back() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(SemanticError::at(
        &Meta::default(),
        SemanticErrorKind::CannotRemoveBuiltinType {
            domain: "v2".into(),
            tag: "int".into(),
        },
    ));

    let out = diagnostics.printer().source("anything").render();
    assert_eq!(
        out,
        "error: <unknown>: cannot remove builtin type `int` from domain `v2`\n"
    );
}
