//! Item lists inside `Path(...)` and `(...)` patterns.
//!
//! Both families have a flat form and a form split around a single `..`.
//! A second `..` is rejected by the parser and cannot be represented.

use std::fmt;

use super::Pattern;
use crate::{Span, Spanned};

fn fmt_ranged(f: &mut fmt::Formatter<'_>, lower: &[Pattern], upper: &[Pattern]) -> fmt::Result {
    for pattern in lower {
        write!(f, "{pattern}, ")?;
    }
    f.write_str("..")?;
    for pattern in upper {
        write!(f, ", {pattern}")?;
    }
    Ok(())
}

/// `Path(a, b)`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TupleStructItemsNoRange {
    pub patterns: Vec<Pattern>,
    pub span: Span,
}

/// `Path(a, .., z)`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TupleStructItemsRange {
    pub lower: Vec<Pattern>,
    pub upper: Vec<Pattern>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TupleStructItems {
    NoRange(TupleStructItemsNoRange),
    Range(TupleStructItemsRange),
}

impl TupleStructItems {
    pub fn no_range(patterns: Vec<Pattern>, span: Span) -> Self {
        TupleStructItems::NoRange(TupleStructItemsNoRange { patterns, span })
    }

    pub fn range(lower: Vec<Pattern>, upper: Vec<Pattern>, span: Span) -> Self {
        TupleStructItems::Range(TupleStructItemsRange { lower, upper, span })
    }

    pub fn has_rest(&self) -> bool {
        matches!(self, TupleStructItems::Range(_))
    }
}

impl Spanned for TupleStructItems {
    fn span(&self) -> Span {
        match self {
            TupleStructItems::NoRange(items) => items.span,
            TupleStructItems::Range(items) => items.span,
        }
    }
}

impl fmt::Display for TupleStructItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TupleStructItems::NoRange(items) => crate::fmt_comma_separated(f, &items.patterns),
            TupleStructItems::Range(items) => fmt_ranged(f, &items.lower, &items.upper),
        }
    }
}

/// `(a, b)`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TuplePatternItemsMultiple {
    pub patterns: Vec<Pattern>,
    pub span: Span,
}

/// `(a, .., z)`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TuplePatternItemsRanged {
    pub lower: Vec<Pattern>,
    pub upper: Vec<Pattern>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TuplePatternItems {
    Multiple(TuplePatternItemsMultiple),
    Ranged(TuplePatternItemsRanged),
}

impl TuplePatternItems {
    pub fn multiple(patterns: Vec<Pattern>, span: Span) -> Self {
        TuplePatternItems::Multiple(TuplePatternItemsMultiple { patterns, span })
    }

    pub fn ranged(lower: Vec<Pattern>, upper: Vec<Pattern>, span: Span) -> Self {
        TuplePatternItems::Ranged(TuplePatternItemsRanged { lower, upper, span })
    }

    pub fn has_rest(&self) -> bool {
        matches!(self, TuplePatternItems::Ranged(_))
    }
}

impl Spanned for TuplePatternItems {
    fn span(&self) -> Span {
        match self {
            TuplePatternItems::Multiple(items) => items.span,
            TuplePatternItems::Ranged(items) => items.span,
        }
    }
}

/// A single-element `Multiple` list keeps its trailing comma: `(a,)`.
impl fmt::Display for TuplePatternItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuplePatternItems::Multiple(items) => {
                crate::fmt_comma_separated(f, &items.patterns)?;
                if items.patterns.len() == 1 {
                    f.write_str(",")?;
                }
                Ok(())
            }
            TuplePatternItems::Ranged(items) => fmt_ranged(f, &items.lower, &items.upper),
        }
    }
}
