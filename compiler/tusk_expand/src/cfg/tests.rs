use pretty_assertions::assert_eq;
use tusk_ir::{Literal, Span};

use super::*;

fn cfg_attribute(predicate: MetaItem) -> Attribute {
    Attribute::new(MetaItem::list("cfg", vec![predicate]), Span::DUMMY)
}

fn feature(value: &str) -> MetaItem {
    MetaItem::name_value("feature", Literal::string(value, Span::DUMMY))
}

#[test]
fn test_parse_flag_atoms_and_key_values() {
    let options = CfgOptions::from_flags(["unix", "feature=\"std\"", " feature = \"alloc\" "])
        .unwrap_or_else(|err| panic!("flags should parse: {err}"));

    assert!(options.is_set("unix"));
    assert!(!options.is_set("windows"));
    assert!(options.has_key_value("feature", "std"));
    assert!(options.has_key_value("feature", "alloc"));
    assert!(!options.has_key_value("feature", "serde"));
    assert!(!options.has_key_value("target_os", "linux"));
}

#[test]
fn test_parse_flag_errors() {
    let mut options = CfgOptions::new();
    assert_eq!(options.parse_flag("  "), Err(CfgError::EmptyFlag));
    assert_eq!(
        options.parse_flag("9lives"),
        Err(CfgError::InvalidName("9lives".to_string()))
    );
    assert_eq!(
        options.parse_flag("a-b=\"x\""),
        Err(CfgError::InvalidName("a-b".to_string()))
    );
    assert_eq!(
        options.parse_flag("feature=std"),
        Err(CfgError::UnquotedValue {
            key: "feature".to_string(),
            found: "std".to_string(),
        })
    );
    assert_eq!(options, CfgOptions::new());
}

#[test]
fn test_from_flags_stops_at_first_error() {
    let err = CfgOptions::from_flags(["unix", "", "test"]);
    assert_eq!(err, Err(CfgError::EmptyFlag));
}

#[test]
fn test_builder_matches_flags() {
    let built = CfgOptions::new()
        .with_atom("test")
        .with_key_value("target_os", "linux");
    let parsed = CfgOptions::from_flags(["test", "target_os=\"linux\""]);
    assert_eq!(parsed, Ok(built));
}

#[test]
fn test_from_meta_operators() {
    let meta = MetaItem::list(
        "all",
        vec![
            MetaItem::word("unix"),
            MetaItem::list("not", vec![feature("std")]),
            MetaItem::list("any", vec![]),
        ],
    );
    let predicate = CfgPredicate::from_meta(&meta)
        .unwrap_or_else(|err| panic!("predicate should parse: {err}"));

    assert_eq!(
        predicate,
        CfgPredicate::All(vec![
            CfgPredicate::Name("unix".into()),
            CfgPredicate::Not(Box::new(CfgPredicate::KeyValue(
                "feature".into(),
                "std".into()
            ))),
            CfgPredicate::Any(vec![]),
        ])
    );
    assert_eq!(
        predicate.to_string(),
        "all(unix, not(feature = \"std\"), any())"
    );
}

#[test]
fn test_from_meta_errors() {
    let not_two = MetaItem::list("not", vec![MetaItem::word("a"), MetaItem::word("b")]);
    assert_eq!(CfgPredicate::from_meta(&not_two), Err(CfgError::NotArity(2)));

    let not_none = MetaItem::list("not", vec![]);
    assert_eq!(CfgPredicate::from_meta(&not_none), Err(CfgError::NotArity(0)));

    let unknown = MetaItem::list("either", vec![MetaItem::word("a")]);
    assert_eq!(
        CfgPredicate::from_meta(&unknown),
        Err(CfgError::UnknownOperator("either".to_string()))
    );

    let number = MetaItem::name_value("level", Literal::int("3", Span::DUMMY));
    assert_eq!(
        CfgPredicate::from_meta(&number),
        Err(CfgError::NonStringValue("level".to_string()))
    );

    let lit = MetaItem::Lit(Literal::string("unix", Span::DUMMY));
    assert_eq!(
        CfgPredicate::from_meta(&lit),
        Err(CfgError::LiteralPredicate("\"unix\"".to_string()))
    );

    let mut long = SimplePath::single("target");
    long.segments.push("os".into());
    assert_eq!(
        CfgPredicate::from_meta(&MetaItem::Word(long)),
        Err(CfgError::InvalidName("target::os".to_string()))
    );
}

#[test]
fn test_from_attribute() {
    let other = Attribute::new(MetaItem::word("inline"), Span::DUMMY);
    assert_eq!(CfgPredicate::from_attribute(&other), Ok(None));

    let attr = cfg_attribute(MetaItem::word("test"));
    assert_eq!(
        CfgPredicate::from_attribute(&attr),
        Ok(Some(CfgPredicate::Name("test".into())))
    );

    let bare = Attribute::new(MetaItem::word("cfg"), Span::DUMMY);
    assert_eq!(
        CfgPredicate::from_attribute(&bare),
        Err(CfgError::MalformedAttribute("#[cfg]".to_string()))
    );

    let two = Attribute::new(
        MetaItem::list("cfg", vec![MetaItem::word("a"), MetaItem::word("b")]),
        Span::DUMMY,
    );
    assert_eq!(
        CfgPredicate::from_attribute(&two),
        Err(CfgError::MalformedAttribute("#[cfg(a, b)]".to_string()))
    );
}

#[test]
fn test_evaluate() {
    let options = CfgOptions::new()
        .with_atom("unix")
        .with_key_value("feature", "std");

    let eval = |meta: MetaItem| {
        CfgPredicate::from_meta(&meta)
            .unwrap_or_else(|err| panic!("predicate should parse: {err}"))
            .evaluate(&options)
    };

    assert!(eval(MetaItem::word("unix")));
    assert!(!eval(MetaItem::word("windows")));
    assert!(eval(feature("std")));
    assert!(!eval(feature("alloc")));
    assert!(eval(MetaItem::list("all", vec![])));
    assert!(!eval(MetaItem::list("any", vec![])));
    assert!(eval(MetaItem::list(
        "any",
        vec![MetaItem::word("windows"), feature("std")]
    )));
    assert!(!eval(MetaItem::list(
        "all",
        vec![MetaItem::word("unix"), feature("alloc")]
    )));
    assert!(eval(MetaItem::list("not", vec![MetaItem::word("windows")])));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        CfgError::UnquotedValue {
            key: "feature".to_string(),
            found: "std".to_string(),
        }
        .to_string(),
        "cfg value for `feature` must be a quoted string, found `std`"
    );
    assert_eq!(
        CfgError::NotArity(2).to_string(),
        "`not` takes exactly one predicate, found 2"
    );
}
