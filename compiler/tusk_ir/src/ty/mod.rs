//! Type expressions.
//!
//! Types are HIR-layer nodes: besides a span, every concrete type node carries
//! the `NodeMapping` handed out during lowering.
//!
//! # Design
//!
//! `Type` splits into the two bound-list forms (`impl A + B`, `dyn A + B`) and
//! `TypeNoBounds`, the types that can never be followed by `+ Bound`. Pointer
//! and reference types take a `TypeNoBounds` operand, so `&dyn A + B` is not
//! representable at all.
//!
//! Some no-bounds types are sugar for a bound when they appear in bound
//! position (`(Trait)`, `dyn Trait`, a bare path). `TypeNoBounds::to_trait_bound`
//! recovers that bound.

mod bare_fn;
mod bound;

use std::fmt;

pub use bare_fn::{BareFunctionType, FunctionQualifiers, MaybeNamedParam, ParamKind, QualifierFlags};
pub use bound::{TraitBound, TypeParamBound};

use bound::fmt_bounds;

use crate::{
    ExprId, Lifetime, Literal, Mapped, NodeMapping, PathInExpression, QualifiedPathInType, Span,
    Spanned, TypePath,
};

/// Implements `Spanned` and `Mapped` for type nodes with `span` and `mappings` fields.
macro_rules! impl_type_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Spanned for $ty {
                #[inline]
                fn span(&self) -> Span {
                    self.span
                }
            }

            impl Mapped for $ty {
                #[inline]
                fn mappings(&self) -> &NodeMapping {
                    &self.mappings
                }
            }
        )*
    };
}

/// `(T)`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParenthesisedType {
    pub mappings: NodeMapping,
    pub inner: Box<Type>,
    pub span: Span,
}

impl ParenthesisedType {
    pub fn new(mappings: NodeMapping, inner: Type, span: Span) -> Self {
        ParenthesisedType {
            mappings,
            inner: Box::new(inner),
            span,
        }
    }
}

/// `impl Trait` with exactly one trait bound.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImplTraitTypeOneBound {
    pub mappings: NodeMapping,
    pub bound: TraitBound,
    pub span: Span,
}

impl ImplTraitTypeOneBound {
    pub fn new(mappings: NodeMapping, bound: TraitBound, span: Span) -> Self {
        ImplTraitTypeOneBound {
            mappings,
            bound,
            span,
        }
    }
}

/// `dyn Trait`, or a bare `Trait` in an edition that allows it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TraitObjectTypeOneBound {
    pub mappings: NodeMapping,
    pub has_dyn: bool,
    pub bound: TraitBound,
    pub span: Span,
}

impl TraitObjectTypeOneBound {
    pub fn new(mappings: NodeMapping, bound: TraitBound, has_dyn: bool, span: Span) -> Self {
        TraitObjectTypeOneBound {
            mappings,
            has_dyn,
            bound,
            span,
        }
    }
}

/// `(A, B)`; the empty tuple is the unit type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TupleType {
    pub mappings: NodeMapping,
    pub elems: Vec<Type>,
    pub span: Span,
}

impl TupleType {
    pub fn new(mappings: NodeMapping, elems: Vec<Type>, span: Span) -> Self {
        TupleType {
            mappings,
            elems,
            span,
        }
    }

    pub fn unit(mappings: NodeMapping, span: Span) -> Self {
        TupleType::new(mappings, Vec::new(), span)
    }

    #[inline]
    pub fn is_unit_type(&self) -> bool {
        self.elems.is_empty()
    }
}

/// `!`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NeverType {
    pub mappings: NodeMapping,
    pub span: Span,
}

impl NeverType {
    pub fn new(mappings: NodeMapping, span: Span) -> Self {
        NeverType { mappings, span }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PointerType {
    Mut,
    Const,
}

impl fmt::Display for PointerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PointerType::Mut => "mut",
            PointerType::Const => "const",
        })
    }
}

/// `*const T` / `*mut T`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RawPointerType {
    pub mappings: NodeMapping,
    pub pointer_type: PointerType,
    pub pointee: Box<TypeNoBounds>,
    pub span: Span,
}

impl RawPointerType {
    pub fn new(
        mappings: NodeMapping,
        pointer_type: PointerType,
        pointee: TypeNoBounds,
        span: Span,
    ) -> Self {
        RawPointerType {
            mappings,
            pointer_type,
            pointee: Box::new(pointee),
            span,
        }
    }

    pub fn is_mut(&self) -> bool {
        self.pointer_type == PointerType::Mut
    }
}

/// `&'a mut T`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ReferenceType {
    pub mappings: NodeMapping,
    pub lifetime: Option<Lifetime>,
    pub has_mut: bool,
    pub referent: Box<TypeNoBounds>,
    pub span: Span,
}

impl ReferenceType {
    pub fn new(
        mappings: NodeMapping,
        lifetime: Option<Lifetime>,
        has_mut: bool,
        referent: TypeNoBounds,
        span: Span,
    ) -> Self {
        ReferenceType {
            mappings,
            lifetime,
            has_mut,
            referent: Box::new(referent),
            span,
        }
    }

    pub fn has_lifetime(&self) -> bool {
        self.lifetime.is_some()
    }
}

/// Length of an array type.
///
/// Lengths that are not a literal or a path live in the expression arena owned
/// by the caller and are referenced by id.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArraySize {
    Literal(Literal),
    Path(PathInExpression),
    Expr(ExprId),
}

impl fmt::Display for ArraySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArraySize::Literal(lit) => write!(f, "{lit}"),
            ArraySize::Path(path) => write!(f, "{path}"),
            ArraySize::Expr(id) => write!(f, "{{expr {}}}", id.raw()),
        }
    }
}

/// `[T; N]`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ArrayType {
    pub mappings: NodeMapping,
    pub elem: Box<Type>,
    pub size: ArraySize,
    pub span: Span,
}

impl ArrayType {
    pub fn new(mappings: NodeMapping, elem: Type, size: ArraySize, span: Span) -> Self {
        ArrayType {
            mappings,
            elem: Box::new(elem),
            size,
            span,
        }
    }
}

/// `[T]`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SliceType {
    pub mappings: NodeMapping,
    pub elem: Box<Type>,
    pub span: Span,
}

impl SliceType {
    pub fn new(mappings: NodeMapping, elem: Type, span: Span) -> Self {
        SliceType {
            mappings,
            elem: Box::new(elem),
            span,
        }
    }
}

/// `_`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct InferredType {
    pub mappings: NodeMapping,
    pub span: Span,
}

impl InferredType {
    pub fn new(mappings: NodeMapping, span: Span) -> Self {
        InferredType { mappings, span }
    }
}

/// `impl A + B + 'a`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ImplTraitType {
    pub mappings: NodeMapping,
    pub bounds: Vec<TypeParamBound>,
    pub span: Span,
}

impl ImplTraitType {
    pub fn new(mappings: NodeMapping, bounds: Vec<TypeParamBound>, span: Span) -> Self {
        ImplTraitType {
            mappings,
            bounds,
            span,
        }
    }
}

/// `dyn A + B + 'a`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TraitObjectType {
    pub mappings: NodeMapping,
    pub has_dyn: bool,
    pub bounds: Vec<TypeParamBound>,
    pub span: Span,
}

impl TraitObjectType {
    pub fn new(
        mappings: NodeMapping,
        bounds: Vec<TypeParamBound>,
        has_dyn: bool,
        span: Span,
    ) -> Self {
        TraitObjectType {
            mappings,
            has_dyn,
            bounds,
            span,
        }
    }
}

impl_type_node!(
    ParenthesisedType,
    ImplTraitTypeOneBound,
    TraitObjectTypeOneBound,
    TupleType,
    NeverType,
    RawPointerType,
    ReferenceType,
    ArrayType,
    SliceType,
    InferredType,
    ImplTraitType,
    TraitObjectType,
);

/// A type that cannot be followed by a `+`-separated bound list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeNoBounds {
    Parenthesised(ParenthesisedType),
    ImplTraitOneBound(ImplTraitTypeOneBound),
    TraitObjectOneBound(TraitObjectTypeOneBound),
    Path(TypePath),
    QualifiedPath(QualifiedPathInType),
    Tuple(TupleType),
    Never(NeverType),
    RawPointer(RawPointerType),
    Reference(ReferenceType),
    Array(ArrayType),
    Slice(SliceType),
    Inferred(InferredType),
    BareFunction(BareFunctionType),
}

impl TypeNoBounds {
    /// Reinterpret this type as the trait bound it is sugar for.
    ///
    /// `(T)` forwards to `T` with `in_parens` set; a one-bound trait object
    /// yields a copy of its bound with `in_parens` ORed in; a path names the
    /// trait directly. Every other form has no bound reading and yields `None`.
    pub fn to_trait_bound(&self, in_parens: bool) -> Option<TraitBound> {
        match self {
            TypeNoBounds::Parenthesised(paren) => paren.inner.to_trait_bound(true),
            TypeNoBounds::TraitObjectOneBound(object) => {
                let mut bound = object.bound.clone();
                bound.in_parens |= in_parens;
                Some(bound)
            }
            TypeNoBounds::Path(path) => Some(path.to_trait_bound(in_parens)),
            TypeNoBounds::ImplTraitOneBound(_)
            | TypeNoBounds::QualifiedPath(_)
            | TypeNoBounds::Tuple(_)
            | TypeNoBounds::Never(_)
            | TypeNoBounds::RawPointer(_)
            | TypeNoBounds::Reference(_)
            | TypeNoBounds::Array(_)
            | TypeNoBounds::Slice(_)
            | TypeNoBounds::Inferred(_)
            | TypeNoBounds::BareFunction(_) => None,
        }
    }

    /// Whether this is the unit type `()`.
    pub fn is_unit_type(&self) -> bool {
        matches!(self, TypeNoBounds::Tuple(tuple) if tuple.is_unit_type())
    }
}

/// Any type expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    ImplTrait(ImplTraitType),
    TraitObject(TraitObjectType),
    NoBounds(TypeNoBounds),
}

impl Type {
    /// Bound reading of the type; only no-bounds types have one.
    pub fn to_trait_bound(&self, in_parens: bool) -> Option<TraitBound> {
        match self {
            Type::NoBounds(ty) => ty.to_trait_bound(in_parens),
            Type::ImplTrait(_) | Type::TraitObject(_) => None,
        }
    }

    pub fn as_no_bounds(&self) -> Option<&TypeNoBounds> {
        match self {
            Type::NoBounds(ty) => Some(ty),
            Type::ImplTrait(_) | Type::TraitObject(_) => None,
        }
    }

    pub fn into_no_bounds(self) -> Option<TypeNoBounds> {
        match self {
            Type::NoBounds(ty) => Some(ty),
            Type::ImplTrait(_) | Type::TraitObject(_) => None,
        }
    }

    pub fn is_unit_type(&self) -> bool {
        self.as_no_bounds().is_some_and(TypeNoBounds::is_unit_type)
    }
}

impl From<TypeNoBounds> for Type {
    fn from(ty: TypeNoBounds) -> Self {
        Type::NoBounds(ty)
    }
}

impl From<ImplTraitType> for Type {
    fn from(ty: ImplTraitType) -> Self {
        Type::ImplTrait(ty)
    }
}

impl From<TraitObjectType> for Type {
    fn from(ty: TraitObjectType) -> Self {
        Type::TraitObject(ty)
    }
}

macro_rules! no_bounds_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for TypeNoBounds {
                fn from(ty: $ty) -> Self {
                    TypeNoBounds::$variant(ty)
                }
            }

            impl From<$ty> for Type {
                fn from(ty: $ty) -> Self {
                    Type::NoBounds(TypeNoBounds::$variant(ty))
                }
            }
        )*
    };
}

no_bounds_from!(
    Parenthesised(ParenthesisedType),
    ImplTraitOneBound(ImplTraitTypeOneBound),
    TraitObjectOneBound(TraitObjectTypeOneBound),
    Path(TypePath),
    QualifiedPath(QualifiedPathInType),
    Tuple(TupleType),
    Never(NeverType),
    RawPointer(RawPointerType),
    Reference(ReferenceType),
    Array(ArrayType),
    Slice(SliceType),
    Inferred(InferredType),
    BareFunction(BareFunctionType),
);

impl Spanned for TypeNoBounds {
    fn span(&self) -> Span {
        match self {
            TypeNoBounds::Parenthesised(ty) => ty.span,
            TypeNoBounds::ImplTraitOneBound(ty) => ty.span,
            TypeNoBounds::TraitObjectOneBound(ty) => ty.span,
            TypeNoBounds::Path(ty) => ty.span,
            TypeNoBounds::QualifiedPath(ty) => ty.span,
            TypeNoBounds::Tuple(ty) => ty.span,
            TypeNoBounds::Never(ty) => ty.span,
            TypeNoBounds::RawPointer(ty) => ty.span,
            TypeNoBounds::Reference(ty) => ty.span,
            TypeNoBounds::Array(ty) => ty.span,
            TypeNoBounds::Slice(ty) => ty.span,
            TypeNoBounds::Inferred(ty) => ty.span,
            TypeNoBounds::BareFunction(ty) => ty.span,
        }
    }
}

impl Mapped for TypeNoBounds {
    fn mappings(&self) -> &NodeMapping {
        match self {
            TypeNoBounds::Parenthesised(ty) => &ty.mappings,
            TypeNoBounds::ImplTraitOneBound(ty) => &ty.mappings,
            TypeNoBounds::TraitObjectOneBound(ty) => &ty.mappings,
            TypeNoBounds::Path(ty) => &ty.mappings,
            TypeNoBounds::QualifiedPath(ty) => &ty.mappings,
            TypeNoBounds::Tuple(ty) => &ty.mappings,
            TypeNoBounds::Never(ty) => &ty.mappings,
            TypeNoBounds::RawPointer(ty) => &ty.mappings,
            TypeNoBounds::Reference(ty) => &ty.mappings,
            TypeNoBounds::Array(ty) => &ty.mappings,
            TypeNoBounds::Slice(ty) => &ty.mappings,
            TypeNoBounds::Inferred(ty) => &ty.mappings,
            TypeNoBounds::BareFunction(ty) => &ty.mappings,
        }
    }
}

impl Spanned for Type {
    fn span(&self) -> Span {
        match self {
            Type::ImplTrait(ty) => ty.span,
            Type::TraitObject(ty) => ty.span,
            Type::NoBounds(ty) => ty.span(),
        }
    }
}

impl Mapped for Type {
    fn mappings(&self) -> &NodeMapping {
        match self {
            Type::ImplTrait(ty) => &ty.mappings,
            Type::TraitObject(ty) => &ty.mappings,
            Type::NoBounds(ty) => ty.mappings(),
        }
    }
}

impl fmt::Display for ParenthesisedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.inner)
    }
}

impl fmt::Display for ImplTraitTypeOneBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "impl {}", self.bound)
    }
}

impl fmt::Display for TraitObjectTypeOneBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_dyn {
            f.write_str("dyn ")?;
        }
        write!(f, "{}", self.bound)
    }
}

impl fmt::Display for TupleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        crate::fmt_comma_separated(f, &self.elems)?;
        if self.elems.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for NeverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("!")
    }
}

impl fmt::Display for RawPointerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*{} {}", self.pointer_type, self.pointee)
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("&")?;
        if let Some(lifetime) = &self.lifetime {
            write!(f, "{lifetime} ")?;
        }
        if self.has_mut {
            f.write_str("mut ")?;
        }
        write!(f, "{}", self.referent)
    }
}

impl fmt::Display for ArrayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}; {}]", self.elem, self.size)
    }
}

impl fmt::Display for SliceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.elem)
    }
}

impl fmt::Display for InferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("_")
    }
}

impl fmt::Display for ImplTraitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("impl ")?;
        fmt_bounds(f, &self.bounds)
    }
}

impl fmt::Display for TraitObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_dyn {
            f.write_str("dyn ")?;
        }
        fmt_bounds(f, &self.bounds)
    }
}

impl fmt::Display for TypeNoBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNoBounds::Parenthesised(ty) => write!(f, "{ty}"),
            TypeNoBounds::ImplTraitOneBound(ty) => write!(f, "{ty}"),
            TypeNoBounds::TraitObjectOneBound(ty) => write!(f, "{ty}"),
            TypeNoBounds::Path(ty) => write!(f, "{ty}"),
            TypeNoBounds::QualifiedPath(ty) => write!(f, "{ty}"),
            TypeNoBounds::Tuple(ty) => write!(f, "{ty}"),
            TypeNoBounds::Never(ty) => write!(f, "{ty}"),
            TypeNoBounds::RawPointer(ty) => write!(f, "{ty}"),
            TypeNoBounds::Reference(ty) => write!(f, "{ty}"),
            TypeNoBounds::Array(ty) => write!(f, "{ty}"),
            TypeNoBounds::Slice(ty) => write!(f, "{ty}"),
            TypeNoBounds::Inferred(ty) => write!(f, "{ty}"),
            TypeNoBounds::BareFunction(ty) => write!(f, "{ty}"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::ImplTrait(ty) => write!(f, "{ty}"),
            Type::TraitObject(ty) => write!(f, "{ty}"),
            Type::NoBounds(ty) => write!(f, "{ty}"),
        }
    }
}
