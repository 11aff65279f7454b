//! Focused traits shared by every node family.
//!
//! - `Spanned` - source location access
//! - `Mapped` - analysis tag access (HIR-layer nodes only)

use crate::{NodeMapping, Span};

/// Trait for nodes that have a source location span.
pub trait Spanned {
    /// Get the source location span.
    fn span(&self) -> Span;
}

/// Trait for HIR-layer nodes carrying an analysis tag.
///
/// The tag is produced by name resolution and consumed by later passes; the
/// node model only stores and hands it back.
pub trait Mapped {
    fn mappings(&self) -> &NodeMapping;
}

impl<T: Spanned + ?Sized> Spanned for Box<T> {
    fn span(&self) -> Span {
        (**self).span()
    }
}

impl<T: Mapped + ?Sized> Mapped for Box<T> {
    fn mappings(&self) -> &NodeMapping {
        (**self).mappings()
    }
}
