//! Paths referenced by patterns and types.
//!
//! Expression paths (`Point`, `Option::<u8>::None`, `<T as Trait>::MAX`) name
//! struct patterns, tuple-struct patterns and range bounds. Type paths
//! (`Vec<T>`, `Fn(u8) -> u8`) name types and trait bounds.

use std::fmt;

use smallvec::SmallVec;

use crate::ty::{TraitBound, Type};
use crate::{Identifier, Lifetime, Mapped, NodeMapping, Span, Spanned};

/// Associated type binding inside generic arguments: `Item = u8`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GenericArgsBinding {
    pub ident: Identifier,
    pub ty: Box<Type>,
    pub span: Span,
}

impl fmt::Display for GenericArgsBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.ident, self.ty)
    }
}

/// Generic arguments of one path segment. Lifetimes come first, then types,
/// then associated type bindings.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct GenericArgs {
    pub lifetime_args: Vec<Lifetime>,
    pub type_args: Vec<Type>,
    pub binding_args: Vec<GenericArgsBinding>,
}

impl GenericArgs {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_types(type_args: Vec<Type>) -> Self {
        GenericArgs {
            type_args,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lifetime_args.is_empty() && self.type_args.is_empty() && self.binding_args.is_empty()
    }
}

impl fmt::Display for GenericArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        let mut first = true;
        let mut sep = |f: &mut fmt::Formatter<'_>| {
            if first {
                first = false;
                Ok(())
            } else {
                f.write_str(", ")
            }
        };
        for lifetime in &self.lifetime_args {
            sep(f)?;
            write!(f, "{lifetime}")?;
        }
        for ty in &self.type_args {
            sep(f)?;
            write!(f, "{ty}")?;
        }
        for binding in &self.binding_args {
            sep(f)?;
            write!(f, "{binding}")?;
        }
        f.write_str(">")
    }
}

/// One segment of an expression path. Generic arguments render with a
/// turbofish.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PathExprSegment {
    pub ident: Identifier,
    pub generic_args: GenericArgs,
    pub span: Span,
}

impl PathExprSegment {
    pub fn new(ident: impl Into<Identifier>, span: Span) -> Self {
        PathExprSegment {
            ident: ident.into(),
            generic_args: GenericArgs::empty(),
            span,
        }
    }

    #[must_use]
    pub fn with_generic_args(mut self, generic_args: GenericArgs) -> Self {
        self.generic_args = generic_args;
        self
    }
}

impl fmt::Display for PathExprSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ident)?;
        if !self.generic_args.is_empty() {
            write!(f, "::{}", self.generic_args)?;
        }
        Ok(())
    }
}

fn fmt_segments<T: fmt::Display>(f: &mut fmt::Formatter<'_>, segments: &[T]) -> fmt::Result {
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            f.write_str("::")?;
        }
        write!(f, "{segment}")?;
    }
    Ok(())
}

/// A path in expression (and pattern) position: `a::b::<T>::c`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PathInExpression {
    pub segments: SmallVec<[PathExprSegment; 2]>,
    /// Leading `::`.
    pub has_opening_scope_resolution: bool,
    pub span: Span,
}

impl PathInExpression {
    pub fn new(segments: impl IntoIterator<Item = PathExprSegment>, span: Span) -> Self {
        PathInExpression {
            segments: segments.into_iter().collect(),
            has_opening_scope_resolution: false,
            span,
        }
    }

    /// Single-segment path.
    pub fn from_ident(ident: impl Into<Identifier>, span: Span) -> Self {
        PathInExpression::new([PathExprSegment::new(ident, span)], span)
    }

    /// Whether the path is a single segment without generic arguments.
    pub fn is_single_segment(&self) -> bool {
        self.segments.len() == 1
            && !self.has_opening_scope_resolution
            && self.segments[0].generic_args.is_empty()
    }
}

impl Spanned for PathInExpression {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for PathInExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_opening_scope_resolution {
            f.write_str("::")?;
        }
        fmt_segments(f, &self.segments)
    }
}

/// `<Type as Trait>` prefix of a qualified path.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct QualifiedPathType {
    pub ty: Box<Type>,
    pub as_trait: Option<TypePath>,
    pub span: Span,
}

impl fmt::Display for QualifiedPathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.ty)?;
        if let Some(as_trait) = &self.as_trait {
            write!(f, " as {as_trait}")?;
        }
        f.write_str(">")
    }
}

/// A qualified path in expression position: `<T as Trait>::CONST`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct QualifiedPathInExpression {
    pub path_type: QualifiedPathType,
    pub segments: SmallVec<[PathExprSegment; 2]>,
    pub span: Span,
}

impl Spanned for QualifiedPathInExpression {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for QualifiedPathInExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::", self.path_type)?;
        fmt_segments(f, &self.segments)
    }
}

/// Parenthesized-argument sugar of a type path segment: `Fn(A, B) -> R`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypePathFunction {
    pub inputs: Vec<Type>,
    pub return_type: Option<Box<Type>>,
}

impl fmt::Display for TypePathFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        crate::fmt_comma_separated(f, &self.inputs)?;
        f.write_str(")")?;
        if let Some(ret) = &self.return_type {
            write!(f, " -> {ret}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypePathSegmentKind {
    Plain,
    Generic(GenericArgs),
    Function(TypePathFunction),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypePathSegment {
    pub ident: Identifier,
    pub kind: TypePathSegmentKind,
    pub span: Span,
}

impl TypePathSegment {
    pub fn plain(ident: impl Into<Identifier>, span: Span) -> Self {
        TypePathSegment {
            ident: ident.into(),
            kind: TypePathSegmentKind::Plain,
            span,
        }
    }

    pub fn generic(ident: impl Into<Identifier>, args: GenericArgs, span: Span) -> Self {
        TypePathSegment {
            ident: ident.into(),
            kind: TypePathSegmentKind::Generic(args),
            span,
        }
    }

    pub fn function(ident: impl Into<Identifier>, function: TypePathFunction, span: Span) -> Self {
        TypePathSegment {
            ident: ident.into(),
            kind: TypePathSegmentKind::Function(function),
            span,
        }
    }
}

impl fmt::Display for TypePathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ident)?;
        match &self.kind {
            TypePathSegmentKind::Plain => Ok(()),
            TypePathSegmentKind::Generic(args) if args.is_empty() => Ok(()),
            TypePathSegmentKind::Generic(args) => write!(f, "{args}"),
            TypePathSegmentKind::Function(function) => write!(f, "{function}"),
        }
    }
}

/// A path in type position. Also the path of every trait bound.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypePath {
    pub mappings: NodeMapping,
    pub segments: SmallVec<[TypePathSegment; 2]>,
    pub has_opening_scope_resolution: bool,
    pub span: Span,
}

impl TypePath {
    pub fn new(
        mappings: NodeMapping,
        segments: impl IntoIterator<Item = TypePathSegment>,
        span: Span,
    ) -> Self {
        TypePath {
            mappings,
            segments: segments.into_iter().collect(),
            has_opening_scope_resolution: false,
            span,
        }
    }

    /// Single plain segment: `i32`, `Sized`.
    pub fn from_ident(mappings: NodeMapping, ident: impl Into<Identifier>, span: Span) -> Self {
        TypePath::new(mappings, [TypePathSegment::plain(ident, span)], span)
    }

    /// Reinterpret the path as a trait bound naming the same trait.
    pub fn to_trait_bound(&self, in_parens: bool) -> TraitBound {
        TraitBound::new(self.clone(), self.span).in_parens(in_parens)
    }
}

impl Spanned for TypePath {
    fn span(&self) -> Span {
        self.span
    }
}

impl Mapped for TypePath {
    fn mappings(&self) -> &NodeMapping {
        &self.mappings
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_opening_scope_resolution {
            f.write_str("::")?;
        }
        fmt_segments(f, &self.segments)
    }
}

/// A qualified path in type position: `<T as Iterator>::Item`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct QualifiedPathInType {
    pub mappings: NodeMapping,
    pub path_type: QualifiedPathType,
    pub segments: SmallVec<[TypePathSegment; 2]>,
    pub span: Span,
}

impl Spanned for QualifiedPathInType {
    fn span(&self) -> Span {
        self.span
    }
}

impl Mapped for QualifiedPathInType {
    fn mappings(&self) -> &NodeMapping {
        &self.mappings
    }
}

impl fmt::Display for QualifiedPathInType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::", self.path_type)?;
        fmt_segments(f, &self.segments)
    }
}
