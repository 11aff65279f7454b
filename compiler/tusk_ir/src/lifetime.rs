//! Lifetimes and lifetime parameters.

use std::fmt;

use crate::{Identifier, Span, Spanned};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum LifetimeKind {
    /// `'a`; the identifier excludes the quote.
    Named(Identifier),
    /// `'static`
    Static,
    /// `'_`
    Wildcard,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Lifetime {
    pub kind: LifetimeKind,
    pub span: Span,
}

impl Lifetime {
    pub fn named(name: impl Into<Identifier>, span: Span) -> Self {
        Lifetime {
            kind: LifetimeKind::Named(name.into()),
            span,
        }
    }

    pub fn static_lifetime(span: Span) -> Self {
        Lifetime {
            kind: LifetimeKind::Static,
            span,
        }
    }

    pub fn wildcard(span: Span) -> Self {
        Lifetime {
            kind: LifetimeKind::Wildcard,
            span,
        }
    }
}

impl Spanned for Lifetime {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LifetimeKind::Named(name) => write!(f, "'{name}"),
            LifetimeKind::Static => f.write_str("'static"),
            LifetimeKind::Wildcard => f.write_str("'_"),
        }
    }
}

/// A lifetime introduced by `for<...>` or a generic parameter list,
/// with its outlives bounds: `'a: 'b + 'c`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LifetimeParam {
    pub lifetime: Lifetime,
    pub bounds: Vec<Lifetime>,
    pub span: Span,
}

impl LifetimeParam {
    pub fn new(lifetime: Lifetime, span: Span) -> Self {
        LifetimeParam {
            lifetime,
            bounds: Vec::new(),
            span,
        }
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: Vec<Lifetime>) -> Self {
        self.bounds = bounds;
        self
    }
}

impl Spanned for LifetimeParam {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for LifetimeParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lifetime)?;
        for (i, bound) in self.bounds.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { " + " })?;
            write!(f, "{bound}")?;
        }
        Ok(())
    }
}

/// Render a `for<...>` binder followed by a space, or nothing when empty.
pub(crate) fn fmt_for_lifetimes(
    f: &mut fmt::Formatter<'_>,
    params: &[LifetimeParam],
) -> fmt::Result {
    if params.is_empty() {
        return Ok(());
    }
    f.write_str("for<")?;
    crate::fmt_comma_separated(f, params)?;
    f.write_str("> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_display() {
        assert_eq!(Lifetime::named("a", Span::DUMMY).to_string(), "'a");
        assert_eq!(Lifetime::static_lifetime(Span::DUMMY).to_string(), "'static");
        assert_eq!(Lifetime::wildcard(Span::DUMMY).to_string(), "'_");
    }

    #[test]
    fn test_lifetime_param_bounds() {
        let param = LifetimeParam::new(Lifetime::named("a", Span::DUMMY), Span::DUMMY)
            .with_bounds(vec![
                Lifetime::named("b", Span::DUMMY),
                Lifetime::static_lifetime(Span::DUMMY),
            ]);
        assert_eq!(param.to_string(), "'a: 'b + 'static");
    }
}
