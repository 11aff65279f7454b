use super::*;

#[test]
fn test_hir_ids_are_per_crate() {
    let mut mappings = Mappings::new();
    let krate = CrateNum::new(0);
    let other = CrateNum::new(1);

    assert_eq!(mappings.next_hir_id(krate), HirId::new(1));
    assert_eq!(mappings.next_hir_id(krate), HirId::new(2));
    assert_eq!(mappings.next_hir_id(other), HirId::new(1));
    assert_eq!(mappings.next_hir_id(krate), HirId::new(3));
}

#[test]
fn test_mapping_for_records_location() {
    let mut mappings = Mappings::new();
    let krate = CrateNum::new(3);
    let span = Span::new(12, 30);

    let mapping = mappings.mapping_for(krate, NodeId::new(7), LocalDefId::UNKNOWN, span);

    assert_eq!(mapping.crate_num(), krate);
    assert_eq!(mapping.node_id(), NodeId::new(7));
    assert_eq!(mappings.lookup_location(krate, mapping.hir_id()), Some(span));
    assert_eq!(mappings.lookup_location(CrateNum::new(4), mapping.hir_id()), None);
}

#[test]
fn test_mapping_equality_compares_hir_id() {
    let a = NodeMapping::new(
        CrateNum::new(0),
        NodeId::new(1),
        HirId::new(2),
        LocalDefId::UNKNOWN,
    );
    let b = NodeMapping::new(
        CrateNum::new(0),
        NodeId::new(1),
        HirId::new(3),
        LocalDefId::UNKNOWN,
    );
    assert_eq!(a, a);
    assert_ne!(a, b);
}

#[test]
fn test_mapping_display() {
    let mapping = NodeMapping::new(
        CrateNum::new(0),
        NodeId::new(4),
        HirId::new(9),
        LocalDefId::UNKNOWN,
    );
    assert_eq!(mapping.to_string(), "[C: 0 Nid: 4 Hid: 9]");

    let with_def = NodeMapping::new(
        CrateNum::new(1),
        NodeId::new(4),
        HirId::new(9),
        LocalDefId::new(2),
    );
    assert_eq!(with_def.to_string(), "[C: 1 Nid: 4 Hid: 9 Lid: 2]");
    assert_eq!(format!("{:?}", with_def.hir_id()), "HirId(9)");
}
