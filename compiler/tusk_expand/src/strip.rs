//! cfg stripping for patterns.
//!
//! Struct-pattern fields and the `..` rest marker are the only pattern
//! positions that carry outer attributes. A field whose `#[cfg(..)]` is false
//! is marked for strip in place; its slot stays in the field list. Satisfied
//! `cfg` attributes are removed from whatever survives, so a second run finds
//! nothing left to do.

use std::ops::AddAssign;

use tracing::{debug, trace};
use tusk_ir::{Attribute, Pattern, StructPattern, TuplePatternItems, TupleStructItems};

use crate::{CfgError, CfgOptions, CfgPredicate};

/// What a strip run removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StripStats {
    pub fields_stripped: usize,
    pub etc_stripped: usize,
}

impl StripStats {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields_stripped == 0 && self.etc_stripped == 0
    }
}

impl AddAssign for StripStats {
    fn add_assign(&mut self, other: Self) {
        self.fields_stripped += other.fields_stripped;
        self.etc_stripped += other.etc_stripped;
    }
}

/// Evaluate every `cfg` attribute in `attrs`.
///
/// Returns `false` as soon as one predicate fails, leaving `attrs` untouched.
/// When all pass, the `cfg` attributes are dropped and the rest are kept in
/// order.
fn cfg_enabled(options: &CfgOptions, attrs: &mut Vec<Attribute>) -> Result<bool, CfgError> {
    let mut has_cfg = false;
    for attr in attrs.iter() {
        if let Some(predicate) = CfgPredicate::from_attribute(attr)? {
            if !predicate.evaluate(options) {
                trace!(%predicate, "cfg predicate is false");
                return Ok(false);
            }
            has_cfg = true;
        }
    }
    if has_cfg {
        attrs.retain(|attr| !attr.has_name("cfg"));
    }
    Ok(true)
}

/// A mutable walk over pattern trees that applies one `CfgOptions`.
///
/// Stats accumulate across calls, so one pass can strip every parameter
/// pattern of a function.
pub struct StripPass<'a> {
    options: &'a CfgOptions,
    stats: StripStats,
}

impl<'a> StripPass<'a> {
    pub fn new(options: &'a CfgOptions) -> Self {
        StripPass {
            options,
            stats: StripStats::default(),
        }
    }

    pub fn stats(&self) -> StripStats {
        self.stats
    }

    /// Strip `pattern` and everything nested in it.
    ///
    /// Either the whole tree is stripped or nothing is: on a malformed `cfg`
    /// attribute the error is returned and `pattern` and the stats are left
    /// as they were.
    pub fn strip_pattern(&mut self, pattern: &mut Pattern) -> Result<(), CfgError> {
        let saved = self.stats;
        let mut working = pattern.clone();
        if let Err(err) = self.strip_in_place(&mut working) {
            self.stats = saved;
            return Err(err);
        }
        *pattern = working;
        Ok(())
    }

    fn strip_in_place(&mut self, pattern: &mut Pattern) -> Result<(), CfgError> {
        match pattern {
            Pattern::Struct(st) => self.strip_struct(st),
            Pattern::Identifier(ident) => match &mut ident.to_bind {
                Some(bound) => self.strip_in_place(bound),
                None => Ok(()),
            },
            Pattern::Reference(reference) => self.strip_in_place(&mut reference.pattern),
            Pattern::Grouped(grouped) => self.strip_in_place(&mut grouped.inner),
            Pattern::Slice(slice) => self.strip_patterns(&mut slice.items),
            Pattern::TupleStruct(tuple_struct) => match &mut tuple_struct.items {
                Some(TupleStructItems::NoRange(items)) => self.strip_patterns(&mut items.patterns),
                Some(TupleStructItems::Range(items)) => {
                    self.strip_patterns(&mut items.lower)?;
                    self.strip_patterns(&mut items.upper)
                }
                None => Ok(()),
            },
            Pattern::Tuple(tuple) => match &mut tuple.items {
                Some(TuplePatternItems::Multiple(items)) => {
                    self.strip_patterns(&mut items.patterns)
                }
                Some(TuplePatternItems::Ranged(items)) => {
                    self.strip_patterns(&mut items.lower)?;
                    self.strip_patterns(&mut items.upper)
                }
                None => Ok(()),
            },
            Pattern::Literal(_) | Pattern::Wildcard(_) | Pattern::Range(_) => Ok(()),
        }
    }

    fn strip_patterns(&mut self, patterns: &mut [Pattern]) -> Result<(), CfgError> {
        patterns
            .iter_mut()
            .try_for_each(|pattern| self.strip_in_place(pattern))
    }

    fn strip_struct(&mut self, st: &mut StructPattern) -> Result<(), CfgError> {
        for field in st.elems.fields_mut().iter_mut() {
            if field.is_marked_for_strip() {
                continue;
            }
            if !cfg_enabled(self.options, field.outer_attrs_mut())? {
                debug!(path = %st.path, %field, "stripping struct pattern field");
                field.mark_for_strip();
                self.stats.fields_stripped += 1;
                continue;
            }
            if let Some(nested) = field.pattern_mut() {
                self.strip_in_place(nested)?;
            }
        }

        if st.elems.has_etc() && !cfg_enabled(self.options, st.elems.etc_attrs_mut())? {
            debug!(path = %st.path, "stripping `..` from struct pattern");
            st.elems.strip_etc();
            self.stats.etc_stripped += 1;
        }
        Ok(())
    }
}

/// Strip `pattern` against `options` in one go.
///
/// On error `pattern` is returned untouched.
#[tracing::instrument(level = "debug", skip_all)]
pub fn strip_pattern(pattern: &mut Pattern, options: &CfgOptions) -> Result<StripStats, CfgError> {
    let mut pass = StripPass::new(options);
    pass.strip_pattern(pattern)?;
    let stats = pass.stats();
    debug!(
        fields = stats.fields_stripped,
        etc = stats.etc_stripped,
        "cfg strip finished"
    );
    Ok(stats)
}
