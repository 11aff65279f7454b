//! Analysis tags for HIR-layer nodes.
//!
//! A `NodeMapping` ties a HIR node back to the AST node it was lowered from
//! and to the results later passes compute for it. The node model compares
//! and copies mappings but never looks inside them.
//!
//! `Mappings` is the allocator the lowering pass uses to hand out fresh
//! `HirId`s per crate and to remember where each HIR node came from.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::Span;

macro_rules! define_index {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_index!(
    /// Identifies the crate a node belongs to.
    CrateNum
);
define_index!(
    /// Identity of the AST node a HIR node was lowered from.
    NodeId
);
define_index!(
    /// Identity of a HIR node, unique within its crate.
    HirId
);
define_index!(
    /// Definition index local to a crate.
    LocalDefId
);

impl LocalDefId {
    /// The node does not introduce a definition.
    pub const UNKNOWN: LocalDefId = LocalDefId(u32::MAX);

    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.0 == u32::MAX
    }
}

/// Opaque analysis tag attached to every HIR node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeMapping {
    crate_num: CrateNum,
    node_id: NodeId,
    hir_id: HirId,
    local_def_id: LocalDefId,
}

impl NodeMapping {
    pub const fn new(
        crate_num: CrateNum,
        node_id: NodeId,
        hir_id: HirId,
        local_def_id: LocalDefId,
    ) -> Self {
        NodeMapping {
            crate_num,
            node_id,
            hir_id,
            local_def_id,
        }
    }

    /// Mapping used for nodes synthesized outside of lowering (and in tests).
    pub const fn dummy() -> Self {
        NodeMapping::new(
            CrateNum(0),
            NodeId(0),
            HirId(0),
            LocalDefId::UNKNOWN,
        )
    }

    #[inline]
    pub const fn crate_num(&self) -> CrateNum {
        self.crate_num
    }

    #[inline]
    pub const fn node_id(&self) -> NodeId {
        self.node_id
    }

    #[inline]
    pub const fn hir_id(&self) -> HirId {
        self.hir_id
    }

    #[inline]
    pub const fn local_def_id(&self) -> LocalDefId {
        self.local_def_id
    }
}

impl fmt::Display for NodeMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[C: {} Nid: {} Hid: {}",
            self.crate_num.raw(),
            self.node_id.raw(),
            self.hir_id.raw()
        )?;
        if !self.local_def_id.is_unknown() {
            write!(f, " Lid: {}", self.local_def_id.raw())?;
        }
        f.write_str("]")
    }
}

/// Per-crate HIR id allocation and location table.
#[derive(Default, Debug)]
pub struct Mappings {
    next_hir_id: FxHashMap<CrateNum, u32>,
    locations: FxHashMap<(CrateNum, HirId), Span>,
}

impl Mappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next unused `HirId` for `crate_num`. Ids start at 1.
    pub fn next_hir_id(&mut self, crate_num: CrateNum) -> HirId {
        let counter = self.next_hir_id.entry(crate_num).or_insert(0);
        *counter += 1;
        HirId(*counter)
    }

    /// Allocate a mapping for a freshly lowered node and record its location.
    pub fn mapping_for(
        &mut self,
        crate_num: CrateNum,
        node_id: NodeId,
        local_def_id: LocalDefId,
        span: Span,
    ) -> NodeMapping {
        let hir_id = self.next_hir_id(crate_num);
        self.insert_location(crate_num, hir_id, span);
        NodeMapping::new(crate_num, node_id, hir_id, local_def_id)
    }

    pub fn insert_location(&mut self, crate_num: CrateNum, hir_id: HirId, span: Span) {
        self.locations.insert((crate_num, hir_id), span);
    }

    pub fn lookup_location(&self, crate_num: CrateNum, hir_id: HirId) -> Option<Span> {
        self.locations.get(&(crate_num, hir_id)).copied()
    }
}

#[cfg(test)]
mod tests;
