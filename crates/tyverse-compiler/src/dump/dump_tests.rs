use indoc::indoc;
use tyverse_core::Meta;

use super::*;
use crate::declaration::{Declaration, TransformRequest};
use crate::permute::{PermutedDomain, PermutedSum};
use crate::test_utils::{domain, product, sum};
use crate::types::{Encoding, Field, ProductType, TypeRef};
use crate::universe::Universe;
use crate::TypeDomain;

fn v1() -> TypeDomain {
    domain(
        "v1",
        vec![
            product("point", &[("x", "int"), ("y", "int")])
                .with_encoding(Encoding::Positional)
                .into(),
            sum(
                "expr",
                vec![
                    product("lit", &[("value", "opaque_value")]),
                    product("add", &[("lhs", "expr"), ("rhs", "expr")]),
                    product("hole", &[]),
                ],
            )
            .into(),
        ],
    )
}

#[test]
fn dump_plain_domain() {
    insta::assert_snapshot!(dump_domain(&v1(), &DumpConfig::new()), @r"
    domain v1
      product point positional
        x: int
        y: int
      sum expr
        lit
          value: opaque_value
        add
          lhs: expr
          rhs: expr
        hole
    ");
}

#[test]
fn dump_empty_domain() {
    assert_eq!(dump_domain(&domain("v0", vec![]), &DumpConfig::new()), "domain v0\n");
}

#[test]
fn dump_with_spans_skips_unknown_positions() {
    let point = ProductType::new(
        "point",
        vec![
            Field::new("x", TypeRef::new("int", Meta::at(3, 8)), Meta::at(3, 5)),
            Field::new("y", TypeRef::new("int", Meta::default()), Meta::default()),
        ],
        Meta::at(2, 3),
    );
    let d = TypeDomain::new("v1", vec![point.into()], Meta::at(1, 1));

    insta::assert_snapshot!(dump_domain(&d, &DumpConfig::new().spans(true)), @r"
    domain v1 @1:1
      product point @2:3
        x: int @3:5
        y: int
    ");
}

#[test]
fn dump_annotations() {
    let mut point = product("point", &[("x", "int")]);
    point.meta = Meta::default().with_annotation("derive", "Hash");
    let d = TypeDomain::new(
        "v1",
        vec![point.into()],
        Meta::default().with_annotation("doc", "first version"),
    );

    insta::assert_snapshot!(dump_domain(&d, &DumpConfig::new().annotations(true)), @r"
    domain v1
      # doc = first version
      product point
        # derive = Hash
        x: int
    ");
}

#[test]
fn dump_transform_marks_removed() {
    let v2 = PermutedDomain::new("v2", "v1", Meta::default())
        .exclude("point")
        .permute_sum(PermutedSum::new("expr", Meta::default()).remove("add"));
    let (universe, diagnostics) = Universe::resolve(vec![
        Declaration::Domain(v1()),
        Declaration::Permutation(v2),
        Declaration::Transform(TransformRequest::new("upgrade", "v1", "v2", Meta::default())),
    ]);
    assert!(diagnostics.is_empty());

    let transform = universe.transform("upgrade").unwrap();
    insta::assert_snapshot!(dump_transform(transform, &DumpConfig::new()), @r"
    transform upgrade: v1 -> v2
    domain v1
      product point positional [removed]
        x: int
        y: int
      sum expr
        lit
          value: opaque_value
        add [removed]
          lhs: expr
          rhs: expr
        hole
    ");
}

#[test]
fn dump_universe_separates_domains() {
    let json = indoc! {r#"
    [
      {"kind": "domain", "tag": "v1", "user_types": [{"kind": "product", "tag": "unit"}]},
      {"kind": "permutation", "tag": "v2", "permutes_domain": "v1", "excluded_types": ["unit"]}
    ]
    "#};
    let (universe, _) = crate::resolve_json(json).unwrap();

    insta::assert_snapshot!(dump_universe(&universe, &DumpConfig::new()), @r"
    domain v1
      product unit

    domain v2
    ");
}

#[test]
fn dump_colored() {
    let d = domain("v1", vec![product("point", &[("x", "int")]).removed().into()]);
    let out = dump_domain(&d, &DumpConfig::new().colored(true));

    assert!(out.starts_with("\x1b[2mdomain\x1b[0m \x1b[34mv1\x1b[0m\n"));
    assert!(out.contains("\x1b[31m[removed]\x1b[0m"));
    assert!(out.contains("x\x1b[2m:\x1b[0m \x1b[32mint\x1b[0m"));
}
