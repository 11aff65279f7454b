use pretty_assertions::assert_eq;

use super::*;
use crate::{
    Attribute, MetaItem, NodeMapping, PathExprSegment, QualifiedPathInExpression,
    QualifiedPathType, Type, TypePath,
};

fn sp(start: u32, end: u32) -> Span {
    Span::new(start, end)
}

fn bind(name: &str) -> Pattern {
    IdentifierPattern::simple(name, Span::DUMMY).into()
}

fn int(value: &str) -> Literal {
    Literal::int(value, Span::DUMMY)
}

fn cfg_attr(name: &str) -> Attribute {
    Attribute::new(MetaItem::list("cfg", vec![MetaItem::word(name)]), Span::DUMMY)
}

/// `Point { x, y: ref mut b, .. }`
fn point_pattern() -> StructPattern {
    let fields = vec![
        StructPatternFieldIdent::new("x", false, false, Vec::new(), sp(8, 9)).into(),
        StructPatternFieldIdentPat::new(
            "y",
            IdentifierPattern::new("b", true, true, sp(14, 23)).into(),
            Vec::new(),
            sp(11, 23),
        )
        .into(),
    ];
    StructPattern::new(
        PathInExpression::from_ident("Point", sp(0, 5)),
        StructPatternElements::with_etc(fields, Vec::new()),
    )
}

// Struct patterns

#[test]
fn test_struct_pattern_end_to_end() {
    let pattern = Pattern::from(point_pattern());

    assert_eq!(pattern.to_string(), "Point { x, y: ref mut b, .. }");
    assert_eq!(pattern.span(), sp(0, 5));

    let Pattern::Struct(st) = &pattern else {
        panic!("expected struct pattern, got {pattern:?}");
    };
    assert!(st.elems.has_etc());
    assert_eq!(st.elems.fields().len(), 2);
    let Some(StructPatternField::IdentPat(y)) = st.elems.fields().get(1) else {
        panic!("expected `y: pat` field");
    };
    let Pattern::Identifier(b) = y.expect_ident_pattern() else {
        panic!("expected binding under `y`");
    };
    assert!(b.is_ref && b.is_mut);
    assert_eq!(b.ident, "b");
}

#[test]
fn test_empty_struct_pattern_rendering() {
    let path = PathInExpression::from_ident("Unit", Span::DUMMY);
    let empty = StructPattern::new(path.clone(), StructPatternElements::create_empty());
    assert_eq!(empty.to_string(), "Unit {}");
    assert!(!empty.has_struct_pattern_elems());

    let rest_only =
        StructPattern::new(path, StructPatternElements::with_etc(Vec::new(), Vec::new()));
    assert_eq!(rest_only.to_string(), "Unit { .. }");
}

#[test]
fn test_field_attrs_render_before_field() {
    let fields = vec![
        StructPatternFieldTuplePat::new(0, bind("a"), vec![cfg_attr("unix")], Span::DUMMY).into(),
    ];
    let elems = StructPatternElements::with_etc(fields, vec![cfg_attr("test")]);
    let pattern = StructPattern::new(PathInExpression::from_ident("Pair", Span::DUMMY), elems);
    assert_eq!(
        pattern.to_string(),
        "Pair { #[cfg(unix)] 0: a, #[cfg(test)] .. }"
    );
}

// Strip protocol

#[test]
fn test_mark_for_strip_is_idempotent() {
    let mut fields: Vec<StructPatternField> = vec![
        StructPatternFieldTuplePat::new(0, bind("a"), Vec::new(), Span::DUMMY).into(),
        StructPatternFieldIdentPat::new("y", bind("b"), Vec::new(), Span::DUMMY).into(),
        StructPatternFieldIdent::new("x", true, false, Vec::new(), Span::DUMMY).into(),
    ];

    for field in &mut fields {
        assert!(!field.is_marked_for_strip());
        field.mark_for_strip();
        assert!(field.is_marked_for_strip());
        let once = field.clone();
        field.mark_for_strip();
        assert_eq!(*field, once);
        assert!(field.pattern().is_none());
    }
}

#[test]
fn test_stripped_field_keeps_its_slot() {
    let mut pattern = point_pattern();
    pattern.elems.fields_mut()[0].mark_for_strip();

    assert_eq!(pattern.elems.fields().len(), 2);
    assert_eq!(pattern.elems.live_fields().count(), 1);
    assert_eq!(pattern.to_string(), "Point { y: ref mut b, .. }");
    assert_eq!(pattern.elems.fields()[0].to_string(), "<stripped>");
}

#[test]
#[should_panic(expected = "stripped field 0")]
fn test_expect_index_pattern_after_strip_panics() {
    let mut field = StructPatternFieldTuplePat::new(0, bind("a"), Vec::new(), Span::DUMMY);
    field.pattern = None;
    let _ = field.expect_index_pattern();
}

#[test]
fn test_elements_emptiness() {
    let mut elems = StructPatternElements::with_etc(Vec::new(), vec![cfg_attr("test")]);
    assert!(!elems.is_empty());

    elems.strip_etc();
    assert!(!elems.has_etc());
    assert!(elems.etc_attrs().is_empty());
    assert!(elems.is_empty());

    let mut with_field = point_pattern().elems;
    with_field.strip_etc();
    assert!(!with_field.is_empty());
    assert_eq!(with_field.to_string(), "x, y: ref mut b");

    assert!(StructPatternElements::create_empty().is_empty());
    assert!(StructPatternElements::new(Vec::new()).is_empty());
}

// Item lists

#[test]
fn test_ranged_items_render_in_order() {
    let lower = vec![bind("p1"), bind("p2")];
    let upper = vec![bind("p3")];

    let tuple_struct = TupleStructPattern::new(
        PathInExpression::from_ident("S", Span::DUMMY),
        Some(TupleStructItems::range(lower.clone(), upper.clone(), Span::DUMMY)),
    );
    assert_eq!(tuple_struct.to_string(), "S(p1, p2, .., p3)");
    assert!(tuple_struct.expect_items().has_rest());

    let tuple = TuplePattern::new(
        Some(TuplePatternItems::ranged(lower, upper, Span::DUMMY)),
        Span::DUMMY,
    );
    assert_eq!(tuple.to_string(), "(p1, p2, .., p3)");

    let only_rest = TuplePattern::new(
        Some(TuplePatternItems::ranged(Vec::new(), Vec::new(), Span::DUMMY)),
        Span::DUMMY,
    );
    assert_eq!(only_rest.to_string(), "(..)");

    let tail = TupleStructItems::range(Vec::new(), vec![bind("z")], Span::DUMMY);
    assert_eq!(tail.to_string(), ".., z");
}

#[test]
fn test_flat_items_rendering() {
    let single = TuplePattern::new(
        Some(TuplePatternItems::multiple(vec![bind("a")], Span::DUMMY)),
        Span::DUMMY,
    );
    assert_eq!(single.to_string(), "(a,)");
    assert_eq!(TuplePattern::new(None, Span::DUMMY).to_string(), "()");

    let some = TupleStructPattern::new(
        PathInExpression::from_ident("Some", Span::DUMMY),
        Some(TupleStructItems::no_range(vec![bind("v")], Span::DUMMY)),
    );
    assert_eq!(some.to_string(), "Some(v)");
    assert!(!some.expect_items().has_rest());
}

#[test]
fn test_ranged_clone_copies_both_halves() {
    let original = TuplePatternItems::ranged(vec![bind("a")], vec![bind("z")], Span::DUMMY);
    let mut copy = original.clone();
    if let TuplePatternItems::Ranged(items) = &mut copy {
        items.lower.push(bind("b"));
        items.upper.clear();
    }
    assert_eq!(original.to_string(), "a, .., z");
    assert_eq!(copy.to_string(), "a, b, ..");
}

#[test]
#[should_panic(expected = "without items")]
fn test_tuple_struct_expect_items_panics() {
    let pattern = TupleStructPattern::new(PathInExpression::from_ident("S", Span::DUMMY), None);
    assert!(!pattern.has_items());
    let _ = pattern.expect_items();
}

#[test]
#[should_panic(expected = "tuple pattern without items")]
fn test_tuple_expect_items_panics() {
    let pattern = TuplePattern::new(None, Span::DUMMY);
    assert!(!pattern.has_tuple_pattern_items());
    let _ = pattern.expect_items();
}

// Leaf and wrapper patterns

#[test]
fn test_range_pattern_rendering() {
    let modern = RangePattern::new(
        RangePatternBoundLiteral::new(int("1"), false, Span::DUMMY).into(),
        RangePatternBoundLiteral::new(int("5"), false, Span::DUMMY).into(),
        false,
        Span::DUMMY,
    );
    assert_eq!(modern.to_string(), "1..=5");

    let legacy = RangePattern::new(
        RangePatternBoundLiteral::new(int("5"), true, Span::DUMMY).into(),
        PathInExpression::from_ident("MAX", Span::DUMMY).into(),
        true,
        Span::DUMMY,
    );
    assert_eq!(legacy.to_string(), "-5...MAX");

    let qualified = QualifiedPathInExpression {
        path_type: QualifiedPathType {
            ty: Box::new(Type::from(TypePath::from_ident(NodeMapping::dummy(), "T", Span::DUMMY))),
            as_trait: Some(TypePath::from_ident(NodeMapping::dummy(), "Bounded", Span::DUMMY)),
            span: Span::DUMMY,
        },
        segments: smallvec::smallvec![PathExprSegment::new("MAX", Span::DUMMY)],
        span: sp(4, 24),
    };
    let bound = RangePatternBound::from(qualified);
    assert_eq!(bound.to_string(), "<T as Bounded>::MAX");
    assert_eq!(bound.span(), sp(4, 24));
}

#[test]
fn test_leaf_pattern_rendering() {
    assert_eq!(LiteralPattern::new(int("5"), true, Span::DUMMY).to_string(), "-5");
    assert_eq!(WildcardPattern::new(Span::DUMMY).to_string(), "_");

    let reference = ReferencePattern::new(bind("x"), true, true, Span::DUMMY);
    assert_eq!(reference.to_string(), "&&mut x");
    assert_eq!(ReferencePattern::new(bind("x"), false, false, Span::DUMMY).to_string(), "&x");

    let grouped = GroupedPattern::new(bind("a"), Span::DUMMY);
    assert_eq!(grouped.to_string(), "(a)");

    let slice = SlicePattern::new(vec![bind("a"), bind("b")], Span::DUMMY);
    assert_eq!(slice.to_string(), "[a, b]");
}

#[test]
fn test_identifier_pattern_binding() {
    let range = RangePattern::new(
        RangePatternBoundLiteral::new(int("1"), false, Span::DUMMY).into(),
        RangePatternBoundLiteral::new(int("9"), false, Span::DUMMY).into(),
        false,
        Span::DUMMY,
    );
    let pattern =
        IdentifierPattern::new("n", false, true, sp(0, 13)).with_pattern_to_bind(range.into());
    assert!(pattern.has_pattern_to_bind());
    assert_eq!(pattern.to_string(), "mut n @ 1..=9");
    assert_eq!(pattern.expect_pattern_to_bind().to_string(), "1..=9");
}

#[test]
#[should_panic(expected = "without `@` pattern")]
fn test_expect_pattern_to_bind_panics() {
    let pattern = IdentifierPattern::simple("x", Span::DUMMY);
    let _ = pattern.expect_pattern_to_bind();
}

// Copy

#[test]
fn test_clone_is_independent() {
    let original = Pattern::from(ReferencePattern::new(
        point_pattern().into(),
        false,
        false,
        Span::DUMMY,
    ));
    let mut copy = original.clone();
    assert_eq!(copy.to_string(), original.to_string());

    if let Pattern::Reference(reference) = &mut copy {
        reference.is_mut = true;
        if let Pattern::Struct(st) = reference.pattern.as_mut() {
            st.elems.fields_mut()[1].mark_for_strip();
            st.elems.strip_etc();
        }
    }

    assert_eq!(original.to_string(), "&Point { x, y: ref mut b, .. }");
    assert_eq!(copy.to_string(), "&mut Point { x }");
}
