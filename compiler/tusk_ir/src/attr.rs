//! Outer attributes (`#[...]`) attached to struct-pattern fields and to the
//! rest marker of a struct pattern.
//!
//! The attribute body is kept as a structured meta item so that the
//! expansion pass can evaluate `cfg` predicates without re-lexing tokens.

use std::fmt;

use smallvec::SmallVec;

use crate::{Identifier, Literal, Span, Spanned};

/// A `::`-separated path of plain identifiers, as used in attribute names.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SimplePath {
    pub segments: SmallVec<[Identifier; 1]>,
}

impl SimplePath {
    pub fn single(ident: impl Into<Identifier>) -> Self {
        let mut segments = SmallVec::new();
        segments.push(ident.into());
        SimplePath { segments }
    }

    /// Whether this path is exactly the single identifier `name`.
    pub fn is_ident(&self, name: &str) -> bool {
        self.segments.len() == 1 && self.segments[0] == name
    }
}

impl fmt::Display for SimplePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("::")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Structured attribute body.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum MetaItem {
    /// `name`
    Word(SimplePath),
    /// `name = "value"`
    NameValue(SimplePath, Literal),
    /// `name(item, item, ...)`
    List(SimplePath, Vec<MetaItem>),
    /// A bare literal inside a list: `doc("text")`
    Lit(Literal),
}

impl MetaItem {
    pub fn word(name: &str) -> Self {
        MetaItem::Word(SimplePath::single(name))
    }

    pub fn name_value(name: &str, value: Literal) -> Self {
        MetaItem::NameValue(SimplePath::single(name), value)
    }

    pub fn list(name: &str, items: Vec<MetaItem>) -> Self {
        MetaItem::List(SimplePath::single(name), items)
    }

    /// Path naming this item, if it has one.
    pub fn path(&self) -> Option<&SimplePath> {
        match self {
            MetaItem::Word(path) | MetaItem::NameValue(path, _) | MetaItem::List(path, _) => {
                Some(path)
            }
            MetaItem::Lit(_) => None,
        }
    }
}

impl fmt::Display for MetaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaItem::Word(path) => write!(f, "{path}"),
            MetaItem::NameValue(path, lit) => write!(f, "{path} = {lit}"),
            MetaItem::List(path, items) => {
                write!(f, "{path}(")?;
                crate::fmt_comma_separated(f, items)?;
                f.write_str(")")
            }
            MetaItem::Lit(lit) => write!(f, "{lit}"),
        }
    }
}

/// An outer attribute `#[meta]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attribute {
    pub meta: MetaItem,
    pub span: Span,
}

impl Attribute {
    pub fn new(meta: MetaItem, span: Span) -> Self {
        Attribute { meta, span }
    }

    /// Whether the attribute's path is the single identifier `name`.
    pub fn has_name(&self, name: &str) -> bool {
        self.meta.path().is_some_and(|path| path.is_ident(name))
    }
}

impl Spanned for Attribute {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#[{}]", self.meta)
    }
}

/// Render attributes each followed by a space.
pub(crate) fn fmt_outer_attrs(f: &mut fmt::Formatter<'_>, attrs: &[Attribute]) -> fmt::Result {
    for attr in attrs {
        write!(f, "{attr} ")?;
    }
    Ok(())
}
