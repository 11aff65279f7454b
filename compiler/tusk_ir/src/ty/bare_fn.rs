//! Function pointer types: `for<'a> unsafe extern "C" fn(x: &'a u8, ...) -> i32`.

use std::fmt;

use bitflags::bitflags;

use super::Type;
use crate::lifetime::fmt_for_lifetimes;
use crate::{Identifier, LifetimeParam, Mapped, NodeMapping, Span, Spanned};

bitflags! {
    /// Modifier keywords in front of `fn`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct QualifierFlags: u8 {
        const CONST = 1 << 0;
        const ASYNC = 1 << 1;
        const UNSAFE = 1 << 2;
        const EXTERN = 1 << 3;
    }
}

/// Qualifiers of a function pointer type, with the ABI string of `extern`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FunctionQualifiers {
    pub flags: QualifierFlags,
    pub abi: Option<Box<str>>,
}

impl FunctionQualifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(flags: QualifierFlags) -> Self {
        FunctionQualifiers { flags, abi: None }
    }

    /// `extern "abi"`, possibly combined with other flags.
    pub fn with_abi(flags: QualifierFlags, abi: impl Into<Box<str>>) -> Self {
        FunctionQualifiers {
            flags: flags | QualifierFlags::EXTERN,
            abi: Some(abi.into()),
        }
    }

    pub fn is_unsafe(&self) -> bool {
        self.flags.contains(QualifierFlags::UNSAFE)
    }

    pub fn is_extern(&self) -> bool {
        self.flags.contains(QualifierFlags::EXTERN)
    }
}

/// Renders each qualifier followed by a space.
impl fmt::Display for FunctionQualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flags.contains(QualifierFlags::CONST) {
            f.write_str("const ")?;
        }
        if self.flags.contains(QualifierFlags::ASYNC) {
            f.write_str("async ")?;
        }
        if self.flags.contains(QualifierFlags::UNSAFE) {
            f.write_str("unsafe ")?;
        }
        if self.flags.contains(QualifierFlags::EXTERN) {
            f.write_str("extern ")?;
            if let Some(abi) = &self.abi {
                write!(f, "\"{abi}\" ")?;
            }
        }
        Ok(())
    }
}

/// How a bare function parameter is named.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParamKind {
    /// `fn(u8)`
    Unnamed,
    /// `fn(x: u8)`
    Identifier,
    /// `fn(_: u8)`
    Wildcard,
}

/// A parameter of a `BareFunctionType`.
///
/// A parameter whose type failed to parse is kept in the parameter list as an
/// error sentinel (see `create_error`) so that parameter positions stay
/// stable for diagnostics.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MaybeNamedParam {
    name: Identifier,
    kind: ParamKind,
    param_type: Option<Box<Type>>,
    span: Span,
}

impl MaybeNamedParam {
    pub fn new(name: Identifier, kind: ParamKind, param_type: Type, span: Span) -> Self {
        MaybeNamedParam {
            name,
            kind,
            param_type: Some(Box::new(param_type)),
            span,
        }
    }

    pub fn unnamed(param_type: Type, span: Span) -> Self {
        MaybeNamedParam::new(Identifier::empty(), ParamKind::Unnamed, param_type, span)
    }

    pub fn named(name: impl Into<Identifier>, param_type: Type, span: Span) -> Self {
        MaybeNamedParam::new(name.into(), ParamKind::Identifier, param_type, span)
    }

    pub fn wildcard(param_type: Type, span: Span) -> Self {
        MaybeNamedParam::new(Identifier::new("_"), ParamKind::Wildcard, param_type, span)
    }

    /// The error sentinel: unnamed, no type, dummy span.
    pub fn create_error() -> Self {
        MaybeNamedParam {
            name: Identifier::empty(),
            kind: ParamKind::Unnamed,
            param_type: None,
            span: Span::DUMMY,
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.param_type.is_none()
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    /// The parameter type, `None` for the error sentinel.
    pub fn param_type(&self) -> Option<&Type> {
        self.param_type.as_deref()
    }

    /// The parameter type.
    ///
    /// # Panics
    /// Panics on the error sentinel; callers check `is_error()` first.
    pub fn expect_type(&self) -> &Type {
        self.param_type.as_deref().unwrap_or_else(|| {
            panic!("expect_type called on an error-state bare function parameter")
        })
    }

    pub fn expect_type_mut(&mut self) -> &mut Type {
        self.param_type.as_deref_mut().unwrap_or_else(|| {
            panic!("expect_type_mut called on an error-state bare function parameter")
        })
    }
}

impl Spanned for MaybeNamedParam {
    fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for MaybeNamedParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(ty) = &self.param_type else {
            return f.write_str("<error>");
        };
        match self.kind {
            ParamKind::Unnamed => write!(f, "{ty}"),
            ParamKind::Identifier => write!(f, "{}: {ty}", self.name),
            ParamKind::Wildcard => write!(f, "_: {ty}"),
        }
    }
}

/// A function pointer type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BareFunctionType {
    pub mappings: NodeMapping,
    pub for_lifetimes: Vec<LifetimeParam>,
    pub qualifiers: FunctionQualifiers,
    pub params: Vec<MaybeNamedParam>,
    pub is_variadic: bool,
    pub return_type: Option<Box<Type>>,
    pub span: Span,
}

impl BareFunctionType {
    pub fn new(
        mappings: NodeMapping,
        qualifiers: FunctionQualifiers,
        params: Vec<MaybeNamedParam>,
        return_type: Option<Type>,
        span: Span,
    ) -> Self {
        BareFunctionType {
            mappings,
            for_lifetimes: Vec::new(),
            qualifiers,
            params,
            is_variadic: false,
            return_type: return_type.map(Box::new),
            span,
        }
    }

    #[must_use]
    pub fn with_for_lifetimes(mut self, for_lifetimes: Vec<LifetimeParam>) -> Self {
        self.for_lifetimes = for_lifetimes;
        self
    }

    #[must_use]
    pub fn variadic(mut self) -> Self {
        self.is_variadic = true;
        self
    }

    pub fn has_return_type(&self) -> bool {
        self.return_type.is_some()
    }

    pub fn has_for_lifetimes(&self) -> bool {
        !self.for_lifetimes.is_empty()
    }

    /// # Panics
    /// Panics when there is no return type; callers check `has_return_type()`.
    pub fn expect_return_type(&self) -> &Type {
        self.return_type.as_deref().unwrap_or_else(|| {
            panic!("expect_return_type called on a function type without a return type")
        })
    }
}

impl Spanned for BareFunctionType {
    fn span(&self) -> Span {
        self.span
    }
}

impl Mapped for BareFunctionType {
    fn mappings(&self) -> &NodeMapping {
        &self.mappings
    }
}

impl fmt::Display for BareFunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_for_lifetimes(f, &self.for_lifetimes)?;
        write!(f, "{}fn(", self.qualifiers)?;
        crate::fmt_comma_separated(f, &self.params)?;
        if self.is_variadic {
            f.write_str(if self.params.is_empty() { "..." } else { ", ..." })?;
        }
        f.write_str(")")?;
        if let Some(ret) = &self.return_type {
            write!(f, " -> {ret}")?;
        }
        Ok(())
    }
}
