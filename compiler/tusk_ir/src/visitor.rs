//! Visitor over patterns and types.
//!
//! Every node family has an `accept` method that calls the `visit_*` method
//! for its concrete variant. There is no catch-all `visit_pattern` or
//! `visit_type`: a pass overrides exactly the variants it cares about.
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to add custom behavior at specific nodes, and
//! call the matching `walk_*` to keep descending.
//!
//! # Example
//!
//! ```text
//! struct CollectBindings<'ast> {
//!     names: Vec<&'ast Identifier>,
//! }
//!
//! impl<'ast> Visitor<'ast> for CollectBindings<'ast> {
//!     fn visit_identifier_pattern(&mut self, pat: &'ast IdentifierPattern) {
//!         self.names.push(&pat.ident);
//!         walk_identifier_pattern(self, pat);
//!     }
//! }
//! ```

use crate::pattern::{
    GroupedPattern, IdentifierPattern, LiteralPattern, Pattern, RangePattern, RangePatternBound,
    RangePatternBoundLiteral, ReferencePattern, SlicePattern, StructPattern, StructPatternField,
    StructPatternFieldIdent, StructPatternFieldIdentPat, StructPatternFieldTuplePat, TuplePattern,
    TuplePatternItems, TuplePatternItemsMultiple, TuplePatternItemsRanged, TupleStructItems,
    TupleStructItemsNoRange, TupleStructItemsRange, TupleStructPattern, WildcardPattern,
};
use crate::ty::{
    ArraySize, ArrayType, BareFunctionType, ImplTraitType, ImplTraitTypeOneBound, InferredType,
    MaybeNamedParam, NeverType, ParenthesisedType, RawPointerType, ReferenceType, SliceType,
    TraitBound, TraitObjectType, TraitObjectTypeOneBound, TupleType, Type, TypeNoBounds,
    TypeParamBound,
};
use crate::{
    GenericArgs, Lifetime, PathInExpression, QualifiedPathInExpression, QualifiedPathInType,
    QualifiedPathType, TypePath, TypePathSegmentKind,
};

// Visitor Trait

/// Pattern and type visitor.
///
/// The visitor can mutate its own state during traversal. The tree itself
/// remains immutable.
pub trait Visitor<'ast> {
    // Patterns

    fn visit_literal_pattern(&mut self, pat: &'ast LiteralPattern) {
        let _ = pat;
    }

    fn visit_identifier_pattern(&mut self, pat: &'ast IdentifierPattern) {
        walk_identifier_pattern(self, pat);
    }

    fn visit_wildcard_pattern(&mut self, pat: &'ast WildcardPattern) {
        let _ = pat;
    }

    fn visit_range_pattern(&mut self, pat: &'ast RangePattern) {
        walk_range_pattern(self, pat);
    }

    fn visit_reference_pattern(&mut self, pat: &'ast ReferencePattern) {
        walk_reference_pattern(self, pat);
    }

    fn visit_struct_pattern(&mut self, pat: &'ast StructPattern) {
        walk_struct_pattern(self, pat);
    }

    fn visit_tuple_struct_pattern(&mut self, pat: &'ast TupleStructPattern) {
        walk_tuple_struct_pattern(self, pat);
    }

    fn visit_tuple_pattern(&mut self, pat: &'ast TuplePattern) {
        walk_tuple_pattern(self, pat);
    }

    fn visit_grouped_pattern(&mut self, pat: &'ast GroupedPattern) {
        walk_grouped_pattern(self, pat);
    }

    fn visit_slice_pattern(&mut self, pat: &'ast SlicePattern) {
        walk_slice_pattern(self, pat);
    }

    // Range bounds

    fn visit_range_bound_literal(&mut self, bound: &'ast RangePatternBoundLiteral) {
        let _ = bound;
    }

    fn visit_range_bound_path(&mut self, path: &'ast PathInExpression) {
        self.visit_path_in_expression(path);
    }

    fn visit_range_bound_qualified_path(&mut self, path: &'ast QualifiedPathInExpression) {
        walk_qualified_path_in_expression(self, path);
    }

    // Struct pattern fields

    fn visit_struct_pattern_field_tuple_pat(&mut self, field: &'ast StructPatternFieldTuplePat) {
        if let Some(pattern) = &field.pattern {
            pattern.accept(self);
        }
    }

    fn visit_struct_pattern_field_ident_pat(&mut self, field: &'ast StructPatternFieldIdentPat) {
        if let Some(pattern) = &field.pattern {
            pattern.accept(self);
        }
    }

    fn visit_struct_pattern_field_ident(&mut self, field: &'ast StructPatternFieldIdent) {
        let _ = field;
    }

    // Item lists

    fn visit_tuple_struct_items_no_range(&mut self, items: &'ast TupleStructItemsNoRange) {
        walk_patterns(self, &items.patterns);
    }

    fn visit_tuple_struct_items_range(&mut self, items: &'ast TupleStructItemsRange) {
        walk_patterns(self, &items.lower);
        walk_patterns(self, &items.upper);
    }

    fn visit_tuple_pattern_items_multiple(&mut self, items: &'ast TuplePatternItemsMultiple) {
        walk_patterns(self, &items.patterns);
    }

    fn visit_tuple_pattern_items_ranged(&mut self, items: &'ast TuplePatternItemsRanged) {
        walk_patterns(self, &items.lower);
        walk_patterns(self, &items.upper);
    }

    // Paths

    fn visit_path_in_expression(&mut self, path: &'ast PathInExpression) {
        walk_path_in_expression(self, path);
    }

    fn visit_type_path(&mut self, path: &'ast TypePath) {
        walk_type_path(self, path);
    }

    fn visit_qualified_path_in_type(&mut self, path: &'ast QualifiedPathInType) {
        walk_qualified_path_in_type(self, path);
    }

    // Types

    fn visit_parenthesised_type(&mut self, ty: &'ast ParenthesisedType) {
        ty.inner.accept(self);
    }

    fn visit_impl_trait_type_one_bound(&mut self, ty: &'ast ImplTraitTypeOneBound) {
        self.visit_trait_bound(&ty.bound);
    }

    fn visit_trait_object_type_one_bound(&mut self, ty: &'ast TraitObjectTypeOneBound) {
        self.visit_trait_bound(&ty.bound);
    }

    fn visit_tuple_type(&mut self, ty: &'ast TupleType) {
        for elem in &ty.elems {
            elem.accept(self);
        }
    }

    fn visit_never_type(&mut self, ty: &'ast NeverType) {
        let _ = ty;
    }

    fn visit_raw_pointer_type(&mut self, ty: &'ast RawPointerType) {
        ty.pointee.accept(self);
    }

    fn visit_reference_type(&mut self, ty: &'ast ReferenceType) {
        walk_reference_type(self, ty);
    }

    fn visit_array_type(&mut self, ty: &'ast ArrayType) {
        walk_array_type(self, ty);
    }

    fn visit_slice_type(&mut self, ty: &'ast SliceType) {
        ty.elem.accept(self);
    }

    fn visit_inferred_type(&mut self, ty: &'ast InferredType) {
        let _ = ty;
    }

    fn visit_bare_function_type(&mut self, ty: &'ast BareFunctionType) {
        walk_bare_function_type(self, ty);
    }

    fn visit_impl_trait_type(&mut self, ty: &'ast ImplTraitType) {
        walk_bounds(self, &ty.bounds);
    }

    fn visit_trait_object_type(&mut self, ty: &'ast TraitObjectType) {
        walk_bounds(self, &ty.bounds);
    }

    // Bounds and parameters

    fn visit_trait_bound(&mut self, bound: &'ast TraitBound) {
        walk_trait_bound(self, bound);
    }

    fn visit_lifetime(&mut self, lifetime: &'ast Lifetime) {
        let _ = lifetime;
    }

    fn visit_maybe_named_param(&mut self, param: &'ast MaybeNamedParam) {
        // The error sentinel has nothing to walk.
        if let Some(ty) = param.param_type() {
            ty.accept(self);
        }
    }
}

// Dispatch

impl Pattern {
    pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        match self {
            Pattern::Literal(pat) => visitor.visit_literal_pattern(pat),
            Pattern::Identifier(pat) => visitor.visit_identifier_pattern(pat),
            Pattern::Wildcard(pat) => visitor.visit_wildcard_pattern(pat),
            Pattern::Range(pat) => visitor.visit_range_pattern(pat),
            Pattern::Reference(pat) => visitor.visit_reference_pattern(pat),
            Pattern::Struct(pat) => visitor.visit_struct_pattern(pat),
            Pattern::TupleStruct(pat) => visitor.visit_tuple_struct_pattern(pat),
            Pattern::Tuple(pat) => visitor.visit_tuple_pattern(pat),
            Pattern::Grouped(pat) => visitor.visit_grouped_pattern(pat),
            Pattern::Slice(pat) => visitor.visit_slice_pattern(pat),
        }
    }
}

impl RangePatternBound {
    pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        match self {
            RangePatternBound::Literal(bound) => visitor.visit_range_bound_literal(bound),
            RangePatternBound::Path(path) => visitor.visit_range_bound_path(path),
            RangePatternBound::QualifiedPath(path) => {
                visitor.visit_range_bound_qualified_path(path);
            }
        }
    }
}

impl StructPatternField {
    pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        match self {
            StructPatternField::TuplePat(field) => {
                visitor.visit_struct_pattern_field_tuple_pat(field);
            }
            StructPatternField::IdentPat(field) => {
                visitor.visit_struct_pattern_field_ident_pat(field);
            }
            StructPatternField::Ident(field) => visitor.visit_struct_pattern_field_ident(field),
        }
    }
}

impl TupleStructItems {
    pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        match self {
            TupleStructItems::NoRange(items) => visitor.visit_tuple_struct_items_no_range(items),
            TupleStructItems::Range(items) => visitor.visit_tuple_struct_items_range(items),
        }
    }
}

impl TuplePatternItems {
    pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        match self {
            TuplePatternItems::Multiple(items) => visitor.visit_tuple_pattern_items_multiple(items),
            TuplePatternItems::Ranged(items) => visitor.visit_tuple_pattern_items_ranged(items),
        }
    }
}

impl Type {
    pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        match self {
            Type::ImplTrait(ty) => visitor.visit_impl_trait_type(ty),
            Type::TraitObject(ty) => visitor.visit_trait_object_type(ty),
            Type::NoBounds(ty) => ty.accept(visitor),
        }
    }
}

impl TypeNoBounds {
    pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        match self {
            TypeNoBounds::Parenthesised(ty) => visitor.visit_parenthesised_type(ty),
            TypeNoBounds::ImplTraitOneBound(ty) => visitor.visit_impl_trait_type_one_bound(ty),
            TypeNoBounds::TraitObjectOneBound(ty) => visitor.visit_trait_object_type_one_bound(ty),
            TypeNoBounds::Path(ty) => visitor.visit_type_path(ty),
            TypeNoBounds::QualifiedPath(ty) => visitor.visit_qualified_path_in_type(ty),
            TypeNoBounds::Tuple(ty) => visitor.visit_tuple_type(ty),
            TypeNoBounds::Never(ty) => visitor.visit_never_type(ty),
            TypeNoBounds::RawPointer(ty) => visitor.visit_raw_pointer_type(ty),
            TypeNoBounds::Reference(ty) => visitor.visit_reference_type(ty),
            TypeNoBounds::Array(ty) => visitor.visit_array_type(ty),
            TypeNoBounds::Slice(ty) => visitor.visit_slice_type(ty),
            TypeNoBounds::Inferred(ty) => visitor.visit_inferred_type(ty),
            TypeNoBounds::BareFunction(ty) => visitor.visit_bare_function_type(ty),
        }
    }
}

impl TypeParamBound {
    pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        match self {
            TypeParamBound::Trait(bound) => visitor.visit_trait_bound(bound),
            TypeParamBound::Lifetime(lifetime) => visitor.visit_lifetime(lifetime),
        }
    }
}

impl MaybeNamedParam {
    pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(&'ast self, visitor: &mut V) {
        visitor.visit_maybe_named_param(self);
    }
}

// Walk Functions
//
// All walk functions traverse children in depth-first, left-to-right order.
// Stripped struct fields are still dispatched; their nested pattern is absent
// so nothing below them is visited.

fn walk_patterns<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, patterns: &'ast [Pattern]) {
    for pattern in patterns {
        pattern.accept(visitor);
    }
}

fn walk_bounds<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, bounds: &'ast [TypeParamBound]) {
    for bound in bounds {
        bound.accept(visitor);
    }
}

fn walk_generic_args<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, args: &'ast GenericArgs) {
    for lifetime in &args.lifetime_args {
        visitor.visit_lifetime(lifetime);
    }
    for ty in &args.type_args {
        ty.accept(visitor);
    }
    for binding in &args.binding_args {
        binding.ty.accept(visitor);
    }
}

fn walk_qualified_path_type<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    path_type: &'ast QualifiedPathType,
) {
    path_type.ty.accept(visitor);
    if let Some(as_trait) = &path_type.as_trait {
        visitor.visit_type_path(as_trait);
    }
}

/// Walk the `@` sub-pattern of a binding.
pub fn walk_identifier_pattern<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    pat: &'ast IdentifierPattern,
) {
    if let Some(to_bind) = &pat.to_bind {
        to_bind.accept(visitor);
    }
}

/// Walk lower then upper bound.
pub fn walk_range_pattern<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    pat: &'ast RangePattern,
) {
    pat.lower.accept(visitor);
    pat.upper.accept(visitor);
}

pub fn walk_reference_pattern<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    pat: &'ast ReferencePattern,
) {
    pat.pattern.accept(visitor);
}

/// Walk the path, then each field in order.
pub fn walk_struct_pattern<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    pat: &'ast StructPattern,
) {
    visitor.visit_path_in_expression(&pat.path);
    for field in pat.elems.fields() {
        field.accept(visitor);
    }
}

pub fn walk_tuple_struct_pattern<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    pat: &'ast TupleStructPattern,
) {
    visitor.visit_path_in_expression(&pat.path);
    if let Some(items) = &pat.items {
        items.accept(visitor);
    }
}

pub fn walk_tuple_pattern<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    pat: &'ast TuplePattern,
) {
    if let Some(items) = &pat.items {
        items.accept(visitor);
    }
}

pub fn walk_grouped_pattern<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    pat: &'ast GroupedPattern,
) {
    pat.inner.accept(visitor);
}

pub fn walk_slice_pattern<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    pat: &'ast SlicePattern,
) {
    walk_patterns(visitor, &pat.items);
}

/// Walk the generic arguments of every segment.
pub fn walk_path_in_expression<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    path: &'ast PathInExpression,
) {
    for segment in &path.segments {
        walk_generic_args(visitor, &segment.generic_args);
    }
}

pub fn walk_qualified_path_in_expression<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    path: &'ast QualifiedPathInExpression,
) {
    walk_qualified_path_type(visitor, &path.path_type);
    for segment in &path.segments {
        walk_generic_args(visitor, &segment.generic_args);
    }
}

/// Walk generic arguments and `Fn(..) -> R` sugar of every segment.
pub fn walk_type_path<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, path: &'ast TypePath) {
    for segment in &path.segments {
        match &segment.kind {
            TypePathSegmentKind::Plain => {}
            TypePathSegmentKind::Generic(args) => walk_generic_args(visitor, args),
            TypePathSegmentKind::Function(function) => {
                for input in &function.inputs {
                    input.accept(visitor);
                }
                if let Some(ret) = &function.return_type {
                    ret.accept(visitor);
                }
            }
        }
    }
}

pub fn walk_qualified_path_in_type<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    path: &'ast QualifiedPathInType,
) {
    walk_qualified_path_type(visitor, &path.path_type);
}

/// Walk the lifetime, then the referent.
pub fn walk_reference_type<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    ty: &'ast ReferenceType,
) {
    if let Some(lifetime) = &ty.lifetime {
        visitor.visit_lifetime(lifetime);
    }
    ty.referent.accept(visitor);
}

/// Walk the element type, and the length when it is a path.
pub fn walk_array_type<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, ty: &'ast ArrayType) {
    ty.elem.accept(visitor);
    match &ty.size {
        ArraySize::Path(path) => visitor.visit_path_in_expression(path),
        ArraySize::Literal(_) | ArraySize::Expr(_) => {}
    }
}

/// Walk `for<..>` lifetimes, parameters, then the return type.
pub fn walk_bare_function_type<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    ty: &'ast BareFunctionType,
) {
    for param in &ty.for_lifetimes {
        visitor.visit_lifetime(&param.lifetime);
    }
    for param in &ty.params {
        param.accept(visitor);
    }
    if let Some(ret) = &ty.return_type {
        ret.accept(visitor);
    }
}

pub fn walk_trait_bound<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, bound: &'ast TraitBound) {
    for param in &bound.for_lifetimes {
        visitor.visit_lifetime(&param.lifetime);
    }
    visitor.visit_type_path(&bound.type_path);
}
