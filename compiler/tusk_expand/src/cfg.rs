//! Conditional compilation: the active configuration and `cfg` predicates.
//!
//! `CfgOptions` is the set of names and `key = "value"` pairs that are
//! switched on for a compilation. A `CfgPredicate` is parsed from the meta
//! item inside `#[cfg(...)]` and evaluated against those options.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;
use tusk_ir::{Attribute, LitKind, MetaItem, SimplePath};

/// Errors from parsing cfg flags and `cfg` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CfgError {
    #[error("empty cfg flag")]
    EmptyFlag,
    #[error("invalid cfg name `{0}`")]
    InvalidName(String),
    #[error("cfg value for `{key}` must be a quoted string, found `{found}`")]
    UnquotedValue { key: String, found: String },
    #[error("cfg value for `{0}` must be a string literal")]
    NonStringValue(String),
    #[error("`not` takes exactly one predicate, found {0}")]
    NotArity(usize),
    #[error("unknown cfg operator `{0}`")]
    UnknownOperator(String),
    #[error("literal `{0}` is not a cfg predicate")]
    LiteralPredicate(String),
    #[error("malformed cfg attribute `{0}`, expected `#[cfg(predicate)]`")]
    MalformedAttribute(String),
}

fn is_cfg_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The active configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CfgOptions {
    atoms: FxHashSet<Box<str>>,
    key_values: FxHashMap<Box<str>, FxHashSet<Box<str>>>,
}

impl CfgOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a list of `--cfg` style flags.
    pub fn from_flags<'a>(flags: impl IntoIterator<Item = &'a str>) -> Result<Self, CfgError> {
        let mut options = Self::new();
        for flag in flags {
            options.parse_flag(flag)?;
        }
        Ok(options)
    }

    #[must_use]
    pub fn with_atom(mut self, name: &str) -> Self {
        self.insert_atom(name);
        self
    }

    #[must_use]
    pub fn with_key_value(mut self, key: &str, value: &str) -> Self {
        self.insert_key_value(key, value);
        self
    }

    pub fn insert_atom(&mut self, name: &str) {
        self.atoms.insert(name.into());
    }

    /// A key may hold several values at once (`feature = "a"`, `feature = "b"`).
    pub fn insert_key_value(&mut self, key: &str, value: &str) {
        self.key_values
            .entry(key.into())
            .or_default()
            .insert(value.into());
    }

    /// Add one flag: `name` or `key="value"`.
    pub fn parse_flag(&mut self, flag: &str) -> Result<(), CfgError> {
        let flag = flag.trim();
        if flag.is_empty() {
            return Err(CfgError::EmptyFlag);
        }

        let Some((key, value)) = flag.split_once('=') else {
            if !is_cfg_name(flag) {
                return Err(CfgError::InvalidName(flag.to_string()));
            }
            self.insert_atom(flag);
            return Ok(());
        };

        let key = key.trim();
        if !is_cfg_name(key) {
            return Err(CfgError::InvalidName(key.to_string()));
        }
        let raw = value.trim();
        let Some(value) = raw
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        else {
            return Err(CfgError::UnquotedValue {
                key: key.to_string(),
                found: raw.to_string(),
            });
        };
        self.insert_key_value(key, value);
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.atoms.contains(name)
    }

    pub fn has_key_value(&self, key: &str, value: &str) -> bool {
        self.key_values
            .get(key)
            .is_some_and(|values| values.contains(value))
    }
}

/// A parsed `cfg` predicate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CfgPredicate {
    /// `unix`
    Name(Box<str>),
    /// `feature = "std"`
    KeyValue(Box<str>, Box<str>),
    /// `all(..)`; true when empty.
    All(Vec<CfgPredicate>),
    /// `any(..)`; false when empty.
    Any(Vec<CfgPredicate>),
    /// `not(p)`
    Not(Box<CfgPredicate>),
}

fn single_name(path: &SimplePath) -> Result<&str, CfgError> {
    match path.segments.as_slice() {
        [ident] if is_cfg_name(ident.as_str()) => Ok(ident.as_str()),
        _ => Err(CfgError::InvalidName(path.to_string())),
    }
}

impl CfgPredicate {
    pub fn from_meta(meta: &MetaItem) -> Result<Self, CfgError> {
        match meta {
            MetaItem::Word(path) => Ok(CfgPredicate::Name(single_name(path)?.into())),
            MetaItem::NameValue(path, lit) => {
                let key = single_name(path)?;
                if lit.kind != LitKind::Str {
                    return Err(CfgError::NonStringValue(key.to_string()));
                }
                Ok(CfgPredicate::KeyValue(key.into(), lit.value.clone()))
            }
            MetaItem::List(path, items) => {
                let op = single_name(path)?;
                let mut operands = items
                    .iter()
                    .map(CfgPredicate::from_meta)
                    .collect::<Result<Vec<_>, _>>()?;
                match op {
                    "all" => Ok(CfgPredicate::All(operands)),
                    "any" => Ok(CfgPredicate::Any(operands)),
                    "not" => match operands.pop() {
                        Some(operand) if operands.is_empty() => {
                            Ok(CfgPredicate::Not(Box::new(operand)))
                        }
                        _ => Err(CfgError::NotArity(items.len())),
                    },
                    _ => Err(CfgError::UnknownOperator(op.to_string())),
                }
            }
            MetaItem::Lit(lit) => Err(CfgError::LiteralPredicate(lit.to_string())),
        }
    }

    /// The predicate of a `#[cfg(..)]` attribute, or `None` for any other
    /// attribute.
    pub fn from_attribute(attr: &Attribute) -> Result<Option<Self>, CfgError> {
        if !attr.has_name("cfg") {
            return Ok(None);
        }
        match &attr.meta {
            MetaItem::List(_, items) if items.len() == 1 => {
                Self::from_meta(&items[0]).map(Some)
            }
            _ => Err(CfgError::MalformedAttribute(attr.to_string())),
        }
    }

    pub fn evaluate(&self, options: &CfgOptions) -> bool {
        match self {
            CfgPredicate::Name(name) => options.is_set(name),
            CfgPredicate::KeyValue(key, value) => options.has_key_value(key, value),
            CfgPredicate::All(preds) => preds.iter().all(|pred| pred.evaluate(options)),
            CfgPredicate::Any(preds) => preds.iter().any(|pred| pred.evaluate(options)),
            CfgPredicate::Not(pred) => !pred.evaluate(options),
        }
    }
}

fn fmt_operator(f: &mut fmt::Formatter<'_>, op: &str, preds: &[CfgPredicate]) -> fmt::Result {
    write!(f, "{op}(")?;
    for (i, pred) in preds.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{pred}")?;
    }
    f.write_str(")")
}

impl fmt::Display for CfgPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfgPredicate::Name(name) => f.write_str(name),
            CfgPredicate::KeyValue(key, value) => write!(f, "{key} = \"{value}\""),
            CfgPredicate::All(preds) => fmt_operator(f, "all", preds),
            CfgPredicate::Any(preds) => fmt_operator(f, "any", preds),
            CfgPredicate::Not(pred) => write!(f, "not({pred})"),
        }
    }
}

#[cfg(test)]
mod tests;
