//! Identifiers.

use std::fmt;

/// An identifier as written in source: a binding name, a field name, a path
/// segment, or a lifetime name without its leading quote.
///
/// The empty identifier is an explicit marker. Struct-pattern fields use it
/// to record that they were stripped, and error-state bare function
/// parameters carry it as their name.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier(Box<str>);

impl Identifier {
    pub fn new(name: impl Into<Box<str>>) -> Self {
        Identifier(name.into())
    }

    /// The empty marker.
    pub fn empty() -> Self {
        Identifier(Box::default())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Clear the identifier back to the empty marker.
    pub fn clear(&mut self) {
        self.0 = Box::default();
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::new(name)
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Identifier::new(name)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({:?})", &*self.0)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_empty_marker() {
        let mut ident = Identifier::new("field");
        assert!(!ident.is_empty());
        ident.clear();
        assert!(ident.is_empty());
        assert_eq!(ident, Identifier::empty());
        assert_eq!(Identifier::default(), Identifier::empty());
    }

    #[test]
    fn test_identifier_compare_with_str() {
        let ident = Identifier::from("x");
        assert_eq!(ident, "x");
        assert_eq!(ident.as_str(), "x");
        assert_eq!(format!("{ident:?}"), "Identifier(\"x\")");
    }
}
