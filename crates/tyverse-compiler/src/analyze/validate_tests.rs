use tyverse_core::Meta;

use super::*;
use crate::diagnostics::ValidationErrorKind;
use crate::test_utils::{domain, field, product, sum};
use crate::types::{Field, ProductType, TypeRef};

fn kinds(d: &crate::TypeDomain) -> Vec<ValidationErrorKind> {
    validate_domain(d).into_iter().map(|e| e.kind).collect()
}

#[test]
fn valid_domain_has_no_errors() {
    let d = domain(
        "v1",
        vec![
            product("point", &[("x", "int"), ("y", "int")]).into(),
            sum(
                "expr",
                vec![
                    product("lit", &[("value", "opaque_value")]),
                    product("var", &[("name", "symbol")]),
                    product("at", &[("where", "point"), ("inner", "expr")]),
                ],
            )
            .into(),
        ],
    );
    assert!(validate_domain(&d).is_empty());
}

#[test]
fn forward_references_are_valid() {
    let d = domain(
        "v1",
        vec![
            product("line", &[("from", "point"), ("to", "point")]).into(),
            product("point", &[("x", "int")]).into(),
        ],
    );
    assert!(validate_domain(&d).is_empty());
}

#[test]
fn duplicate_user_type() {
    let d = domain(
        "v1",
        vec![product("point", &[]).into(), sum("point", vec![]).into()],
    );
    assert_eq!(
        kinds(&d),
        [ValidationErrorKind::DuplicateType {
            domain: "v1".into(),
            tag: "point".into(),
        }]
    );
}

#[test]
fn user_type_shadowing_builtin() {
    let mut shadow = product("symbol", &[]);
    shadow.meta = Meta::at(6, 2);
    let d = domain("v1", vec![shadow.into()]);

    let errors = validate_domain(&d);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].meta, Meta::at(6, 2));
    assert_eq!(
        errors[0].kind,
        ValidationErrorKind::DuplicateType {
            domain: "v1".into(),
            tag: "symbol".into(),
        }
    );
}

#[test]
fn duplicate_variant() {
    let d = domain(
        "v1",
        vec![sum("expr", vec![product("lit", &[]), product("lit", &[])]).into()],
    );
    assert_eq!(
        kinds(&d),
        [ValidationErrorKind::DuplicateVariant {
            sum: "expr".into(),
            variant: "lit".into(),
        }]
    );
}

#[test]
fn variants_may_share_tags_with_types() {
    let d = domain(
        "v1",
        vec![
            product("lit", &[]).into(),
            sum("expr", vec![product("lit", &[])]).into(),
        ],
    );
    assert!(validate_domain(&d).is_empty());
}

#[test]
fn duplicate_field() {
    let d = domain("v1", vec![product("point", &[("x", "int"), ("x", "symbol")]).into()]);
    assert_eq!(
        kinds(&d),
        [ValidationErrorKind::DuplicateField {
            product: "point".into(),
            field: "x".into(),
        }]
    );
}

#[test]
fn undefined_reference_reports_reference_location() {
    let point = ProductType::new(
        "point",
        vec![Field::new(
            "x",
            TypeRef::new("float", Meta::at(2, 8)),
            Meta::at(2, 5),
        )],
        Meta::at(1, 1),
    );
    let d = domain("v1", vec![point.into()]);

    let errors = validate_domain(&d);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].meta, Meta::at(2, 8));
    assert_eq!(
        errors[0].kind,
        ValidationErrorKind::UndefinedReference {
            domain: "v1".into(),
            type_name: "float".into(),
        }
    );
}

#[test]
fn undefined_reference_inside_variant() {
    let d = domain(
        "v1",
        vec![
            sum(
                "expr",
                vec![ProductType::new(
                    "call",
                    vec![field("callee", "func")],
                    Meta::default(),
                )],
            )
            .into(),
        ],
    );
    assert!(matches!(
        kinds(&d).as_slice(),
        [ValidationErrorKind::UndefinedReference { type_name, .. }] if type_name == "func"
    ));
}

#[test]
fn reports_every_problem() {
    let d = domain(
        "v1",
        vec![
            product("a", &[("x", "missing"), ("x", "int")]).into(),
            product("a", &[]).into(),
        ],
    );
    assert_eq!(validate_domain(&d).len(), 3);
}
