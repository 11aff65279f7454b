//! Fields of struct patterns and the strip protocol used by cfg expansion.
//!
//! A stripped field keeps its slot in `StructPatternElements::fields` so that
//! field positions stay stable. Passes skip it by checking
//! `is_marked_for_strip()`.

use std::fmt;

use super::Pattern;
use crate::attr::fmt_outer_attrs;
use crate::{Attribute, Identifier, Span, Spanned};

/// `0: pat`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructPatternFieldTuplePat {
    pub outer_attrs: Vec<Attribute>,
    pub index: u32,
    pub pattern: Option<Box<Pattern>>,
    pub span: Span,
}

impl StructPatternFieldTuplePat {
    pub fn new(index: u32, pattern: Pattern, outer_attrs: Vec<Attribute>, span: Span) -> Self {
        StructPatternFieldTuplePat {
            outer_attrs,
            index,
            pattern: Some(Box::new(pattern)),
            span,
        }
    }

    /// # Panics
    /// Panics if the field was stripped.
    pub fn expect_index_pattern(&self) -> &Pattern {
        self.pattern.as_deref().unwrap_or_else(|| {
            panic!("expect_index_pattern called on stripped field {}", self.index)
        })
    }
}

/// `name: pat`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructPatternFieldIdentPat {
    pub outer_attrs: Vec<Attribute>,
    pub ident: Identifier,
    pub pattern: Option<Box<Pattern>>,
    pub span: Span,
}

impl StructPatternFieldIdentPat {
    pub fn new(
        ident: impl Into<Identifier>,
        pattern: Pattern,
        outer_attrs: Vec<Attribute>,
        span: Span,
    ) -> Self {
        StructPatternFieldIdentPat {
            outer_attrs,
            ident: ident.into(),
            pattern: Some(Box::new(pattern)),
            span,
        }
    }

    /// # Panics
    /// Panics if the field was stripped.
    pub fn expect_ident_pattern(&self) -> &Pattern {
        self.pattern.as_deref().unwrap_or_else(|| {
            panic!("expect_ident_pattern called on stripped field `{}`", self.ident)
        })
    }
}

/// Shorthand `ref mut name`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructPatternFieldIdent {
    pub outer_attrs: Vec<Attribute>,
    pub ident: Identifier,
    pub is_ref: bool,
    pub is_mut: bool,
    pub span: Span,
}

impl StructPatternFieldIdent {
    pub fn new(
        ident: impl Into<Identifier>,
        is_ref: bool,
        is_mut: bool,
        outer_attrs: Vec<Attribute>,
        span: Span,
    ) -> Self {
        StructPatternFieldIdent {
            outer_attrs,
            ident: ident.into(),
            is_ref,
            is_mut,
            span,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StructPatternField {
    TuplePat(StructPatternFieldTuplePat),
    IdentPat(StructPatternFieldIdentPat),
    Ident(StructPatternFieldIdent),
}

impl StructPatternField {
    /// Drop the field's payload; the slot stays in its list.
    ///
    /// Clears the nested pattern, or the identifier for shorthand fields.
    pub fn mark_for_strip(&mut self) {
        match self {
            StructPatternField::TuplePat(field) => field.pattern = None,
            StructPatternField::IdentPat(field) => field.pattern = None,
            StructPatternField::Ident(field) => field.ident.clear(),
        }
    }

    pub fn is_marked_for_strip(&self) -> bool {
        match self {
            StructPatternField::TuplePat(field) => field.pattern.is_none(),
            StructPatternField::IdentPat(field) => field.pattern.is_none(),
            StructPatternField::Ident(field) => field.ident.is_empty(),
        }
    }

    pub fn outer_attrs(&self) -> &[Attribute] {
        match self {
            StructPatternField::TuplePat(field) => &field.outer_attrs,
            StructPatternField::IdentPat(field) => &field.outer_attrs,
            StructPatternField::Ident(field) => &field.outer_attrs,
        }
    }

    pub fn outer_attrs_mut(&mut self) -> &mut Vec<Attribute> {
        match self {
            StructPatternField::TuplePat(field) => &mut field.outer_attrs,
            StructPatternField::IdentPat(field) => &mut field.outer_attrs,
            StructPatternField::Ident(field) => &mut field.outer_attrs,
        }
    }

    /// Nested pattern of a `0: pat` or `name: pat` field that was not stripped.
    pub fn pattern(&self) -> Option<&Pattern> {
        match self {
            StructPatternField::TuplePat(field) => field.pattern.as_deref(),
            StructPatternField::IdentPat(field) => field.pattern.as_deref(),
            StructPatternField::Ident(_) => None,
        }
    }

    pub fn pattern_mut(&mut self) -> Option<&mut Pattern> {
        match self {
            StructPatternField::TuplePat(field) => field.pattern.as_deref_mut(),
            StructPatternField::IdentPat(field) => field.pattern.as_deref_mut(),
            StructPatternField::Ident(_) => None,
        }
    }
}

impl From<StructPatternFieldTuplePat> for StructPatternField {
    fn from(field: StructPatternFieldTuplePat) -> Self {
        StructPatternField::TuplePat(field)
    }
}

impl From<StructPatternFieldIdentPat> for StructPatternField {
    fn from(field: StructPatternFieldIdentPat) -> Self {
        StructPatternField::IdentPat(field)
    }
}

impl From<StructPatternFieldIdent> for StructPatternField {
    fn from(field: StructPatternFieldIdent) -> Self {
        StructPatternField::Ident(field)
    }
}

impl Spanned for StructPatternField {
    fn span(&self) -> Span {
        match self {
            StructPatternField::TuplePat(field) => field.span,
            StructPatternField::IdentPat(field) => field.span,
            StructPatternField::Ident(field) => field.span,
        }
    }
}

/// A stripped field renders as `<stripped>` after its attributes.
impl fmt::Display for StructPatternField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_outer_attrs(f, self.outer_attrs())?;
        if self.is_marked_for_strip() {
            return f.write_str("<stripped>");
        }
        match self {
            StructPatternField::TuplePat(field) => {
                write!(f, "{}: ", field.index)?;
                if let Some(pattern) = &field.pattern {
                    write!(f, "{pattern}")?;
                }
                Ok(())
            }
            StructPatternField::IdentPat(field) => {
                write!(f, "{}: ", field.ident)?;
                if let Some(pattern) = &field.pattern {
                    write!(f, "{pattern}")?;
                }
                Ok(())
            }
            StructPatternField::Ident(field) => {
                if field.is_ref {
                    f.write_str("ref ")?;
                }
                if field.is_mut {
                    f.write_str("mut ")?;
                }
                write!(f, "{}", field.ident)
            }
        }
    }
}

/// Contents of `Path { ... }`: fields plus an optional `..` with its own
/// attributes.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct StructPatternElements {
    fields: Vec<StructPatternField>,
    has_etc: bool,
    etc_attrs: Vec<Attribute>,
}

impl StructPatternElements {
    /// Fields without a trailing `..`.
    pub fn new(fields: Vec<StructPatternField>) -> Self {
        StructPatternElements {
            fields,
            has_etc: false,
            etc_attrs: Vec::new(),
        }
    }

    /// Fields followed by `..`, carrying `etc_attrs`.
    pub fn with_etc(fields: Vec<StructPatternField>, etc_attrs: Vec<Attribute>) -> Self {
        StructPatternElements {
            fields,
            has_etc: true,
            etc_attrs,
        }
    }

    /// `{}`
    pub fn create_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && !self.has_etc
    }

    #[inline]
    pub fn has_etc(&self) -> bool {
        self.has_etc
    }

    /// Remove the `..` and its attributes.
    pub fn strip_etc(&mut self) {
        self.has_etc = false;
        self.etc_attrs.clear();
    }

    pub fn fields(&self) -> &[StructPatternField] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Vec<StructPatternField> {
        &mut self.fields
    }

    pub fn etc_attrs(&self) -> &[Attribute] {
        &self.etc_attrs
    }

    pub fn etc_attrs_mut(&mut self) -> &mut Vec<Attribute> {
        &mut self.etc_attrs
    }

    /// Fields not marked for strip, in source order.
    pub fn live_fields(&self) -> impl Iterator<Item = &StructPatternField> {
        self.fields.iter().filter(|field| !field.is_marked_for_strip())
    }
}

/// Renders the live fields and the `..`, without braces.
impl fmt::Display for StructPatternElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for field in self.live_fields() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{field}")?;
        }
        if self.has_etc {
            if !first {
                f.write_str(", ")?;
            }
            fmt_outer_attrs(f, &self.etc_attrs)?;
            f.write_str("..")?;
        }
        Ok(())
    }
}
