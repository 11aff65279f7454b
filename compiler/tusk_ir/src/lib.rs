//! Tusk IR - Pattern and Type Nodes
//!
//! This crate contains the node model the Tusk front end uses for the two
//! grammars that appear on the "shape" side of the language:
//! - Patterns (`match` arms, `let` bindings, parameters)
//! - Types (annotations, bounds, function pointer signatures)
//!
//! plus the small value types they are built from: spans, identifiers,
//! literals, lifetimes, attributes and paths.
//!
//! # Design Philosophy
//!
//! - **Closed Families**: every node family is an `enum`; passes match on it
//!   exhaustively or go through the `Visitor`.
//! - **Owned Trees**: a parent owns its children through `Box`/`Vec`. `Clone`
//!   is a full deep copy, and no two parents share a child.
//! - **Shape-Preserving Sentinels**: stripped fields and error parameters stay
//!   in their lists so positions do not shift.
//! - **Interface Segregation**: focused traits (`Spanned`, `Mapped`).
//!
//! Pattern nodes are AST-layer and carry a `Span`. Type nodes are HIR-layer
//! and additionally carry a `NodeMapping`.

use std::fmt;

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod attr;
mod expr_id;
mod ident;
mod lifetime;
mod literal;
mod mapping;
mod path;
pub mod pattern;
mod span;
mod traits;
pub mod ty;
pub mod visitor;

pub use attr::{Attribute, MetaItem, SimplePath};
pub use expr_id::ExprId;
pub use ident::Identifier;
pub use lifetime::{Lifetime, LifetimeKind, LifetimeParam};
pub use literal::{LitKind, Literal};
pub use mapping::{CrateNum, HirId, LocalDefId, Mappings, NodeId, NodeMapping};
pub use path::{
    GenericArgs, GenericArgsBinding, PathExprSegment, PathInExpression, QualifiedPathInExpression,
    QualifiedPathInType, QualifiedPathType, TypePath, TypePathFunction, TypePathSegment,
    TypePathSegmentKind,
};
pub use pattern::{
    GroupedPattern, IdentifierPattern, LiteralPattern, Pattern, RangePattern, RangePatternBound,
    RangePatternBoundLiteral, ReferencePattern, SlicePattern, StructPattern, StructPatternElements,
    StructPatternField, StructPatternFieldIdent, StructPatternFieldIdentPat,
    StructPatternFieldTuplePat, TuplePattern, TuplePatternItems, TuplePatternItemsMultiple,
    TuplePatternItemsRanged, TupleStructItems, TupleStructItemsNoRange, TupleStructItemsRange,
    TupleStructPattern, WildcardPattern,
};
pub use span::{Span, SpanError};
pub use traits::{Mapped, Spanned};
pub use ty::{
    ArraySize, ArrayType, BareFunctionType, FunctionQualifiers, ImplTraitType,
    ImplTraitTypeOneBound, InferredType, MaybeNamedParam, NeverType, ParamKind,
    ParenthesisedType, PointerType, QualifierFlags, RawPointerType, ReferenceType, SliceType,
    TraitBound, TraitObjectType, TraitObjectTypeOneBound, TupleType, Type, TypeNoBounds,
    TypeParamBound,
};
pub use visitor::Visitor;

/// Render `items` separated by `", "`.
pub(crate) fn fmt_comma_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
