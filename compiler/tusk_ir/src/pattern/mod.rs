//! Patterns: the left-hand side of `let`, `match` arms and parameters.
//!
//! Patterns are AST-layer nodes and carry only a span. Each `Pattern` variant
//! wraps a struct of the same name; the secondary families (range bounds,
//! struct fields, item lists) live in submodules.

mod fields;
mod items;
mod range;

use std::fmt;

pub use fields::{
    StructPatternElements, StructPatternField, StructPatternFieldIdent, StructPatternFieldIdentPat,
    StructPatternFieldTuplePat,
};
pub use items::{
    TuplePatternItems, TuplePatternItemsMultiple, TuplePatternItemsRanged, TupleStructItems,
    TupleStructItemsNoRange, TupleStructItemsRange,
};
pub use range::{RangePatternBound, RangePatternBoundLiteral};

use crate::{Identifier, Literal, PathInExpression, Span, Spanned};

/// `5`, `-5`, `"s"`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LiteralPattern {
    pub lit: Literal,
    pub has_minus: bool,
    pub span: Span,
}

impl LiteralPattern {
    pub fn new(lit: Literal, has_minus: bool, span: Span) -> Self {
        LiteralPattern {
            lit,
            has_minus,
            span,
        }
    }
}

/// A binding: `ref mut name @ pat`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IdentifierPattern {
    pub ident: Identifier,
    pub is_ref: bool,
    pub is_mut: bool,
    pub to_bind: Option<Box<Pattern>>,
    pub span: Span,
}

impl IdentifierPattern {
    pub fn new(ident: impl Into<Identifier>, is_ref: bool, is_mut: bool, span: Span) -> Self {
        IdentifierPattern {
            ident: ident.into(),
            is_ref,
            is_mut,
            to_bind: None,
            span,
        }
    }

    /// Plain `name` binding.
    pub fn simple(ident: impl Into<Identifier>, span: Span) -> Self {
        IdentifierPattern::new(ident, false, false, span)
    }

    #[must_use]
    pub fn with_pattern_to_bind(mut self, pattern: Pattern) -> Self {
        self.to_bind = Some(Box::new(pattern));
        self
    }

    #[inline]
    pub fn has_pattern_to_bind(&self) -> bool {
        self.to_bind.is_some()
    }

    /// # Panics
    /// Panics without a `@` sub-pattern; check `has_pattern_to_bind()` first.
    pub fn expect_pattern_to_bind(&self) -> &Pattern {
        self.to_bind.as_deref().unwrap_or_else(|| {
            panic!("expect_pattern_to_bind called on `{}` without `@` pattern", self.ident)
        })
    }
}

/// `_`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct WildcardPattern {
    pub span: Span,
}

impl WildcardPattern {
    pub fn new(span: Span) -> Self {
        WildcardPattern { span }
    }
}

/// `lo..=hi`, or the legacy `lo...hi`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RangePattern {
    pub lower: RangePatternBound,
    pub upper: RangePatternBound,
    /// Written with `...`. Only affects rendering.
    pub has_ellipsis_syntax: bool,
    pub span: Span,
}

impl RangePattern {
    pub fn new(
        lower: RangePatternBound,
        upper: RangePatternBound,
        has_ellipsis_syntax: bool,
        span: Span,
    ) -> Self {
        RangePattern {
            lower,
            upper,
            has_ellipsis_syntax,
            span,
        }
    }
}

/// `&pat`, `&mut pat`, `&&pat`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ReferencePattern {
    pub pattern: Box<Pattern>,
    pub has_two_amps: bool,
    pub is_mut: bool,
    pub span: Span,
}

impl ReferencePattern {
    pub fn new(pattern: Pattern, has_two_amps: bool, is_mut: bool, span: Span) -> Self {
        ReferencePattern {
            pattern: Box::new(pattern),
            has_two_amps,
            is_mut,
            span,
        }
    }
}

/// `Path { fields, .. }`. Located at its path.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructPattern {
    pub path: PathInExpression,
    pub elems: StructPatternElements,
}

impl StructPattern {
    pub fn new(path: PathInExpression, elems: StructPatternElements) -> Self {
        StructPattern { path, elems }
    }

    pub fn has_struct_pattern_elems(&self) -> bool {
        !self.elems.is_empty()
    }
}

/// `Path(items)`. Located at its path.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TupleStructPattern {
    pub path: PathInExpression,
    pub items: Option<TupleStructItems>,
}

impl TupleStructPattern {
    pub fn new(path: PathInExpression, items: Option<TupleStructItems>) -> Self {
        TupleStructPattern { path, items }
    }

    #[inline]
    pub fn has_items(&self) -> bool {
        self.items.is_some()
    }

    /// # Panics
    /// Panics when there are no items; check `has_items()` first.
    pub fn expect_items(&self) -> &TupleStructItems {
        self.items.as_ref().unwrap_or_else(|| {
            panic!("expect_items called on tuple struct pattern `{}` without items", self.path)
        })
    }
}

/// `(a, b)`, `(a, .., z)`; `()` has no items.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TuplePattern {
    pub items: Option<TuplePatternItems>,
    pub span: Span,
}

impl TuplePattern {
    pub fn new(items: Option<TuplePatternItems>, span: Span) -> Self {
        TuplePattern { items, span }
    }

    #[inline]
    pub fn has_tuple_pattern_items(&self) -> bool {
        self.items.is_some()
    }

    /// # Panics
    /// Panics for the unit pattern; check `has_tuple_pattern_items()` first.
    pub fn expect_items(&self) -> &TuplePatternItems {
        self.items
            .as_ref()
            .unwrap_or_else(|| panic!("expect_items called on a tuple pattern without items"))
    }
}

/// `(pat)`, kept for precedence.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GroupedPattern {
    pub inner: Box<Pattern>,
    pub span: Span,
}

impl GroupedPattern {
    pub fn new(inner: Pattern, span: Span) -> Self {
        GroupedPattern {
            inner: Box::new(inner),
            span,
        }
    }
}

/// `[a, b, rest @ ..]`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SlicePattern {
    pub items: Vec<Pattern>,
    pub span: Span,
}

impl SlicePattern {
    pub fn new(items: Vec<Pattern>, span: Span) -> Self {
        SlicePattern { items, span }
    }
}

/// A pattern node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Pattern {
    Literal(LiteralPattern),
    Identifier(IdentifierPattern),
    Wildcard(WildcardPattern),
    Range(RangePattern),
    Reference(ReferencePattern),
    Struct(StructPattern),
    TupleStruct(TupleStructPattern),
    Tuple(TuplePattern),
    Grouped(GroupedPattern),
    Slice(SlicePattern),
}

macro_rules! pattern_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Pattern {
                fn from(pattern: $ty) -> Self {
                    Pattern::$variant(pattern)
                }
            }
        )*
    };
}

pattern_from!(
    Literal(LiteralPattern),
    Identifier(IdentifierPattern),
    Wildcard(WildcardPattern),
    Range(RangePattern),
    Reference(ReferencePattern),
    Struct(StructPattern),
    TupleStruct(TupleStructPattern),
    Tuple(TuplePattern),
    Grouped(GroupedPattern),
    Slice(SlicePattern),
);

impl Spanned for StructPattern {
    fn span(&self) -> Span {
        self.path.span
    }
}

impl Spanned for TupleStructPattern {
    fn span(&self) -> Span {
        self.path.span
    }
}

impl Spanned for Pattern {
    fn span(&self) -> Span {
        match self {
            Pattern::Literal(pat) => pat.span,
            Pattern::Identifier(pat) => pat.span,
            Pattern::Wildcard(pat) => pat.span,
            Pattern::Range(pat) => pat.span,
            Pattern::Reference(pat) => pat.span,
            Pattern::Struct(pat) => pat.span(),
            Pattern::TupleStruct(pat) => pat.span(),
            Pattern::Tuple(pat) => pat.span,
            Pattern::Grouped(pat) => pat.span,
            Pattern::Slice(pat) => pat.span,
        }
    }
}

impl fmt::Display for LiteralPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_minus {
            f.write_str("-")?;
        }
        write!(f, "{}", self.lit)
    }
}

impl fmt::Display for IdentifierPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ref {
            f.write_str("ref ")?;
        }
        if self.is_mut {
            f.write_str("mut ")?;
        }
        write!(f, "{}", self.ident)?;
        if let Some(to_bind) = &self.to_bind {
            write!(f, " @ {to_bind}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("_")
    }
}

impl fmt::Display for RangePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = if self.has_ellipsis_syntax { "..." } else { "..=" };
        write!(f, "{}{op}{}", self.lower, self.upper)
    }
}

impl fmt::Display for ReferencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.has_two_amps { "&&" } else { "&" })?;
        if self.is_mut {
            f.write_str("mut ")?;
        }
        write!(f, "{}", self.pattern)
    }
}

impl fmt::Display for StructPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.elems.live_fields().next().is_none() && !self.elems.has_etc() {
            return write!(f, "{} {{}}", self.path);
        }
        write!(f, "{} {{ {} }}", self.path, self.elems)
    }
}

impl fmt::Display for TupleStructPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.path)?;
        if let Some(items) = &self.items {
            write!(f, "{items}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for TuplePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        if let Some(items) = &self.items {
            write!(f, "{items}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for GroupedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.inner)
    }
}

impl fmt::Display for SlicePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        crate::fmt_comma_separated(f, &self.items)?;
        f.write_str("]")
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(pat) => write!(f, "{pat}"),
            Pattern::Identifier(pat) => write!(f, "{pat}"),
            Pattern::Wildcard(pat) => write!(f, "{pat}"),
            Pattern::Range(pat) => write!(f, "{pat}"),
            Pattern::Reference(pat) => write!(f, "{pat}"),
            Pattern::Struct(pat) => write!(f, "{pat}"),
            Pattern::TupleStruct(pat) => write!(f, "{pat}"),
            Pattern::Tuple(pat) => write!(f, "{pat}"),
            Pattern::Grouped(pat) => write!(f, "{pat}"),
            Pattern::Slice(pat) => write!(f, "{pat}"),
        }
    }
}

#[cfg(test)]
mod tests;
