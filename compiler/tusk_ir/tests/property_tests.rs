//! Property-based tests for the pattern node model.
//!
//! These tests use proptest to generate random pattern trees and verify:
//! 1. Clone independence: a copy renders like its source, and mutating the
//!    copy never changes the source
//! 2. Strip idempotence and elements emptiness
//! 3. Ranged item lists render their halves in order around `..`

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tusk_ir::{
    GroupedPattern, IdentifierPattern, Literal, LiteralPattern, PathInExpression, Pattern,
    ReferencePattern, SlicePattern, Span, StructPattern, StructPatternElements,
    StructPatternField, StructPatternFieldIdent, StructPatternFieldIdentPat,
    StructPatternFieldTuplePat, TuplePattern, TuplePatternItems, TupleStructItems,
    TupleStructPattern, WildcardPattern,
};

// -- Strategies --

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").expect("valid regex")
}

fn type_identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-zA-Z0-9]{0,7}").expect("valid regex")
}

fn leaf_strategy() -> impl Strategy<Value = Pattern> {
    prop_oneof![
        (identifier_strategy(), any::<bool>(), any::<bool>()).prop_map(|(name, is_ref, is_mut)| {
            Pattern::from(IdentifierPattern::new(name, is_ref, is_mut, Span::DUMMY))
        }),
        Just(Pattern::from(WildcardPattern::new(Span::DUMMY))),
        (any::<u32>(), any::<bool>()).prop_map(|(value, has_minus)| {
            Pattern::from(LiteralPattern::new(
                Literal::int(value.to_string(), Span::DUMMY),
                has_minus,
                Span::DUMMY,
            ))
        }),
    ]
}

fn field_strategy(inner: BoxedStrategy<Pattern>) -> impl Strategy<Value = StructPatternField> {
    prop_oneof![
        (0..8u32, inner.clone()).prop_map(|(index, pattern)| {
            StructPatternField::from(StructPatternFieldTuplePat::new(
                index,
                pattern,
                Vec::new(),
                Span::DUMMY,
            ))
        }),
        (identifier_strategy(), inner).prop_map(|(name, pattern)| {
            StructPatternField::from(StructPatternFieldIdentPat::new(
                name,
                pattern,
                Vec::new(),
                Span::DUMMY,
            ))
        }),
        (identifier_strategy(), any::<bool>(), any::<bool>()).prop_map(
            |(name, is_ref, is_mut)| {
                StructPatternField::from(StructPatternFieldIdent::new(
                    name,
                    is_ref,
                    is_mut,
                    Vec::new(),
                    Span::DUMMY,
                ))
            }
        ),
    ]
}

fn struct_strategy(inner: BoxedStrategy<Pattern>) -> impl Strategy<Value = StructPattern> {
    (
        type_identifier_strategy(),
        prop::collection::vec(field_strategy(inner), 0..4),
        any::<bool>(),
    )
        .prop_map(|(name, fields, has_etc)| {
            let elems = if has_etc {
                StructPatternElements::with_etc(fields, Vec::new())
            } else {
                StructPatternElements::new(fields)
            };
            StructPattern::new(PathInExpression::from_ident(name, Span::DUMMY), elems)
        })
}

fn pattern_strategy() -> impl Strategy<Value = Pattern> {
    leaf_strategy().prop_recursive(4, 48, 4, |inner| {
        let inner = inner.boxed();
        prop_oneof![
            (inner.clone(), any::<bool>(), any::<bool>()).prop_map(|(pattern, two, is_mut)| {
                Pattern::from(ReferencePattern::new(pattern, two, is_mut, Span::DUMMY))
            }),
            inner
                .clone()
                .prop_map(|pattern| Pattern::from(GroupedPattern::new(pattern, Span::DUMMY))),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|items| Pattern::from(SlicePattern::new(items, Span::DUMMY))),
            (
                prop::collection::vec(inner.clone(), 0..3),
                prop::collection::vec(inner.clone(), 0..3)
            )
                .prop_map(|(lower, upper)| {
                    Pattern::from(TuplePattern::new(
                        Some(TuplePatternItems::ranged(lower, upper, Span::DUMMY)),
                        Span::DUMMY,
                    ))
                }),
            (type_identifier_strategy(), prop::collection::vec(inner.clone(), 0..3)).prop_map(
                |(name, items)| {
                    Pattern::from(TupleStructPattern::new(
                        PathInExpression::from_ident(name, Span::DUMMY),
                        Some(TupleStructItems::no_range(items, Span::DUMMY)),
                    ))
                }
            ),
            struct_strategy(inner).prop_map(Pattern::from),
        ]
    })
}

/// Mark every field of every struct pattern in the tree for strip.
fn strip_everything(pattern: &mut Pattern) {
    match pattern {
        Pattern::Struct(st) => {
            for field in st.elems.fields_mut() {
                if let Some(nested) = field.pattern_mut() {
                    strip_everything(nested);
                }
                field.mark_for_strip();
            }
            st.elems.strip_etc();
        }
        Pattern::Reference(reference) => strip_everything(&mut reference.pattern),
        Pattern::Grouped(grouped) => strip_everything(&mut grouped.inner),
        Pattern::Slice(slice) => slice.items.iter_mut().for_each(strip_everything),
        Pattern::Tuple(tuple) => match &mut tuple.items {
            Some(TuplePatternItems::Multiple(items)) => {
                items.patterns.iter_mut().for_each(strip_everything);
            }
            Some(TuplePatternItems::Ranged(items)) => {
                items.lower.iter_mut().for_each(strip_everything);
                items.upper.iter_mut().for_each(strip_everything);
            }
            None => {}
        },
        Pattern::TupleStruct(tuple_struct) => match &mut tuple_struct.items {
            Some(TupleStructItems::NoRange(items)) => {
                items.patterns.iter_mut().for_each(strip_everything);
            }
            Some(TupleStructItems::Range(items)) => {
                items.lower.iter_mut().for_each(strip_everything);
                items.upper.iter_mut().for_each(strip_everything);
            }
            None => {}
        },
        Pattern::Identifier(ident) => {
            if let Some(bound) = &mut ident.to_bind {
                strip_everything(bound);
            }
        }
        Pattern::Literal(_) | Pattern::Wildcard(_) | Pattern::Range(_) => {}
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    /// A clone renders and compares like its source.
    #[test]
    fn prop_clone_renders_identically(pattern in pattern_strategy()) {
        let copy = pattern.clone();
        prop_assert_eq!(&copy, &pattern);
        prop_assert_eq!(copy.to_string(), pattern.to_string());
    }

    /// Stripping inside a clone never reaches the source.
    #[test]
    fn prop_clone_independence(pattern in pattern_strategy()) {
        let before = pattern.to_string();
        let mut copy = pattern.clone();
        strip_everything(&mut copy);
        prop_assert_eq!(pattern.to_string(), before);
    }

    /// Marking a field twice is the same as marking it once.
    #[test]
    fn prop_strip_idempotence(field in field_strategy(leaf_strategy().boxed())) {
        prop_assert!(!field.is_marked_for_strip());
        let mut once = field.clone();
        once.mark_for_strip();
        let mut twice = once.clone();
        twice.mark_for_strip();
        prop_assert!(once.is_marked_for_strip());
        prop_assert_eq!(once, twice);
    }

    /// `is_empty` is exactly "no fields and no `..`", also after `strip_etc`.
    #[test]
    fn prop_elements_emptiness(
        fields in prop::collection::vec(field_strategy(leaf_strategy().boxed()), 0..3),
        has_etc in any::<bool>(),
        strip in any::<bool>(),
    ) {
        let no_fields = fields.is_empty();
        let mut elems = if has_etc {
            StructPatternElements::with_etc(fields, Vec::new())
        } else {
            StructPatternElements::new(fields)
        };
        prop_assert_eq!(elems.is_empty(), no_fields && !has_etc);
        if strip {
            elems.strip_etc();
            prop_assert!(!elems.has_etc());
            prop_assert!(elems.etc_attrs().is_empty());
            prop_assert_eq!(elems.is_empty(), no_fields);
        }
    }

    /// Ranged lists render `lower, .., upper` in source order.
    #[test]
    fn prop_ranged_order(
        lower in prop::collection::vec(identifier_strategy(), 0..4),
        upper in prop::collection::vec(identifier_strategy(), 0..4),
    ) {
        let to_patterns = |names: &[String]| -> Vec<Pattern> {
            names
                .iter()
                .map(|name| Pattern::from(IdentifierPattern::simple(name.as_str(), Span::DUMMY)))
                .collect()
        };
        let items = TupleStructItems::range(
            to_patterns(lower.as_slice()),
            to_patterns(upper.as_slice()),
            Span::DUMMY,
        );

        let mut expected: Vec<&str> = lower.iter().map(String::as_str).collect();
        expected.push("..");
        expected.extend(upper.iter().map(String::as_str));
        prop_assert_eq!(items.to_string(), expected.join(", "));
    }
}

#[test]
fn test_strip_everything_leaves_shape() {
    let fields = vec![
        StructPatternFieldIdent::new("x", false, false, Vec::new(), Span::DUMMY).into(),
        StructPatternFieldIdentPat::new(
            "y",
            IdentifierPattern::new("b", true, true, Span::DUMMY).into(),
            Vec::new(),
            Span::DUMMY,
        )
        .into(),
    ];
    let mut pattern = Pattern::from(StructPattern::new(
        PathInExpression::from_ident("Point", Span::DUMMY),
        StructPatternElements::with_etc(fields, Vec::new()),
    ));
    strip_everything(&mut pattern);

    let Pattern::Struct(st) = &pattern else {
        panic!("expected struct pattern");
    };
    assert_eq!(st.elems.fields().len(), 2);
    assert!(st.elems.fields().iter().all(StructPatternField::is_marked_for_strip));
    assert_eq!(pattern.to_string(), "Point {}");
}

#[test]
fn test_strip_everything_reaches_every_item_list() {
    let point = || {
        Pattern::from(StructPattern::new(
            PathInExpression::from_ident("Point", Span::DUMMY),
            StructPatternElements::new(vec![StructPatternFieldIdent::new(
                "x",
                false,
                false,
                Vec::new(),
                Span::DUMMY,
            )
            .into()]),
        ))
    };
    let mut pattern = Pattern::from(SlicePattern::new(
        vec![
            TuplePattern::new(
                Some(TuplePatternItems::multiple(vec![point(), point()], Span::DUMMY)),
                Span::DUMMY,
            )
            .into(),
            TupleStructPattern::new(
                PathInExpression::from_ident("Pair", Span::DUMMY),
                Some(TupleStructItems::range(vec![point()], vec![point()], Span::DUMMY)),
            )
            .into(),
            IdentifierPattern::simple("whole", Span::DUMMY)
                .with_pattern_to_bind(point())
                .into(),
        ],
        Span::DUMMY,
    ));
    strip_everything(&mut pattern);

    assert_eq!(
        pattern.to_string(),
        "[(Point {}, Point {}), Pair(Point {}, .., Point {}), whole @ Point {}]"
    );
}
