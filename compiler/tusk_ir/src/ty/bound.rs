//! Trait bounds and type parameter bounds.

use std::fmt;

use crate::lifetime::fmt_for_lifetimes;
use crate::{Lifetime, LifetimeParam, Span, Spanned, TypePath};

/// A trait used as a bound: `Clone`, `?Sized`, `for<'a> Fn(&'a u8)`.
///
/// `in_parens` records that the bound was written inside parentheses. The
/// rendering omits those parentheses: the enclosing node prints its own
/// delimiters, so a bound recovered from `(Trait)` renders as `Trait`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TraitBound {
    pub in_parens: bool,
    pub opening_question_mark: bool,
    pub for_lifetimes: Vec<LifetimeParam>,
    pub type_path: TypePath,
    pub span: Span,
}

impl TraitBound {
    pub fn new(type_path: TypePath, span: Span) -> Self {
        TraitBound {
            in_parens: false,
            opening_question_mark: false,
            for_lifetimes: Vec::new(),
            type_path,
            span,
        }
    }

    #[must_use]
    pub fn in_parens(mut self, in_parens: bool) -> Self {
        self.in_parens = in_parens;
        self
    }

    /// Mark as a `?Trait` relaxed bound.
    #[must_use]
    pub fn maybe(mut self) -> Self {
        self.opening_question_mark = true;
        self
    }

    #[must_use]
    pub fn with_for_lifetimes(mut self, for_lifetimes: Vec<LifetimeParam>) -> Self {
        self.for_lifetimes = for_lifetimes;
        self
    }

    pub fn has_for_lifetimes(&self) -> bool {
        !self.for_lifetimes.is_empty()
    }
}

impl Spanned for TraitBound {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for TraitBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.opening_question_mark {
            f.write_str("?")?;
        }
        fmt_for_lifetimes(f, &self.for_lifetimes)?;
        write!(f, "{}", self.type_path)
    }
}

/// One entry of a `+`-separated bound list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeParamBound {
    Trait(TraitBound),
    Lifetime(Lifetime),
}

impl TypeParamBound {
    pub fn as_trait_bound(&self) -> Option<&TraitBound> {
        match self {
            TypeParamBound::Trait(bound) => Some(bound),
            TypeParamBound::Lifetime(_) => None,
        }
    }
}

impl From<TraitBound> for TypeParamBound {
    fn from(bound: TraitBound) -> Self {
        TypeParamBound::Trait(bound)
    }
}

impl From<Lifetime> for TypeParamBound {
    fn from(lifetime: Lifetime) -> Self {
        TypeParamBound::Lifetime(lifetime)
    }
}

impl Spanned for TypeParamBound {
    fn span(&self) -> Span {
        match self {
            TypeParamBound::Trait(bound) => bound.span,
            TypeParamBound::Lifetime(lifetime) => lifetime.span,
        }
    }
}

impl fmt::Display for TypeParamBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeParamBound::Trait(bound) => write!(f, "{bound}"),
            TypeParamBound::Lifetime(lifetime) => write!(f, "{lifetime}"),
        }
    }
}

pub(super) fn fmt_bounds(f: &mut fmt::Formatter<'_>, bounds: &[TypeParamBound]) -> fmt::Result {
    for (i, bound) in bounds.iter().enumerate() {
        if i > 0 {
            f.write_str(" + ")?;
        }
        write!(f, "{bound}")?;
    }
    Ok(())
}
