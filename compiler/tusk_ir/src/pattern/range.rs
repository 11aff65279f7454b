//! Bounds of range patterns.

use std::fmt;

use crate::{Literal, PathInExpression, QualifiedPathInExpression, Span, Spanned};

/// A literal range bound. Literal tokens are unsigned, so a leading `-` is
/// kept here as `has_minus`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RangePatternBoundLiteral {
    pub literal: Literal,
    pub has_minus: bool,
    pub span: Span,
}

impl RangePatternBoundLiteral {
    pub fn new(literal: Literal, has_minus: bool, span: Span) -> Self {
        RangePatternBoundLiteral {
            literal,
            has_minus,
            span,
        }
    }
}

impl fmt::Display for RangePatternBoundLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_minus {
            f.write_str("-")?;
        }
        write!(f, "{}", self.literal)
    }
}

/// One end of `lo..=hi`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum RangePatternBound {
    Literal(RangePatternBoundLiteral),
    /// A named constant: `MAX`, `i32::MIN`.
    Path(PathInExpression),
    /// An associated constant: `<T as Bounded>::MAX`.
    QualifiedPath(QualifiedPathInExpression),
}

impl From<RangePatternBoundLiteral> for RangePatternBound {
    fn from(bound: RangePatternBoundLiteral) -> Self {
        RangePatternBound::Literal(bound)
    }
}

impl From<PathInExpression> for RangePatternBound {
    fn from(path: PathInExpression) -> Self {
        RangePatternBound::Path(path)
    }
}

impl From<QualifiedPathInExpression> for RangePatternBound {
    fn from(path: QualifiedPathInExpression) -> Self {
        RangePatternBound::QualifiedPath(path)
    }
}

impl Spanned for RangePatternBound {
    fn span(&self) -> Span {
        match self {
            RangePatternBound::Literal(bound) => bound.span,
            RangePatternBound::Path(path) => path.span,
            RangePatternBound::QualifiedPath(path) => path.span,
        }
    }
}

impl fmt::Display for RangePatternBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangePatternBound::Literal(bound) => write!(f, "{bound}"),
            RangePatternBound::Path(path) => write!(f, "{path}"),
            RangePatternBound::QualifiedPath(path) => write!(f, "{path}"),
        }
    }
}
