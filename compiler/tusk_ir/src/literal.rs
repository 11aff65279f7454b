//! Literal tokens as they appear inside patterns and range bounds.
//!
//! Numeric literal tokens never carry a sign: a leading `-` is recorded by the
//! pattern or bound that owns the literal.

use std::fmt;

use crate::Span;

/// Token class of a literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LitKind {
    Char,
    Str,
    Byte,
    ByteStr,
    Int,
    Float,
    Bool,
}

impl LitKind {
    /// Whether a leading minus may precede literals of this kind.
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, LitKind::Int | LitKind::Float)
    }
}

/// A literal: its kind, the unescaped source text, and an optional type suffix.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Literal {
    pub kind: LitKind,
    pub value: Box<str>,
    pub suffix: Option<Box<str>>,
    pub span: Span,
}

impl Literal {
    pub fn new(kind: LitKind, value: impl Into<Box<str>>, span: Span) -> Self {
        Literal {
            kind,
            value: value.into(),
            suffix: None,
            span,
        }
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<Box<str>>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn int(value: impl Into<Box<str>>, span: Span) -> Self {
        Literal::new(LitKind::Int, value, span)
    }

    pub fn float(value: impl Into<Box<str>>, span: Span) -> Self {
        Literal::new(LitKind::Float, value, span)
    }

    pub fn string(value: impl Into<Box<str>>, span: Span) -> Self {
        Literal::new(LitKind::Str, value, span)
    }

    pub fn char(value: char, span: Span) -> Self {
        Literal::new(LitKind::Char, value.to_string(), span)
    }

    pub fn bool(value: bool, span: Span) -> Self {
        Literal::new(LitKind::Bool, if value { "true" } else { "false" }, span)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LitKind::Char => write!(f, "'{}'", self.value)?,
            LitKind::Str => write!(f, "\"{}\"", self.value)?,
            LitKind::Byte => write!(f, "b'{}'", self.value)?,
            LitKind::ByteStr => write!(f, "b\"{}\"", self.value)?,
            LitKind::Int | LitKind::Float | LitKind::Bool => f.write_str(&self.value)?,
        }
        if let Some(suffix) = &self.suffix {
            f.write_str(suffix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_display_quotes_by_kind() {
        let span = Span::DUMMY;
        assert_eq!(Literal::char('a', span).to_string(), "'a'");
        assert_eq!(Literal::string("hi", span).to_string(), "\"hi\"");
        assert_eq!(Literal::new(LitKind::Byte, "x", span).to_string(), "b'x'");
        assert_eq!(
            Literal::new(LitKind::ByteStr, "ab", span).to_string(),
            "b\"ab\""
        );
        assert_eq!(Literal::bool(false, span).to_string(), "false");
    }

    #[test]
    fn test_literal_suffix() {
        let lit = Literal::int("5", Span::DUMMY).with_suffix("u8");
        assert_eq!(lit.to_string(), "5u8");
        assert!(lit.kind.is_numeric());
        assert!(!LitKind::Char.is_numeric());
    }
}
