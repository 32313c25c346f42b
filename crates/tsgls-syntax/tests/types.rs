use super::*;

#[test]
fn test_unknown_type_has_no_flags() {
    let table = TypeTable::new();
    assert!(table.type_flags(TypeId(3)).is_empty());
    assert!(table.call_signatures(TypeId(3)).is_empty());
    assert_eq!(table.intrinsic_name(TypeId(3)), None);
}

#[test]
fn test_node_type_and_symbol_lookup() {
    let mut table = TypeTable::new();
    let number = table.add_intrinsic(TypeFlags::NUMBER, "number");
    let point = table.add_symbol("Point", Some(NodeIndex(1)));
    let instance = table.add_object(point);
    table.set_node_type(NodeIndex(5), number);
    table.set_node_type(NodeIndex(6), instance);
    table.set_node_symbol(NodeIndex(6), point);

    assert_eq!(table.type_at_node(NodeIndex(5)), Some(number));
    assert!(table.type_flags(number).intersects(TypeFlags::NUMBER_LIKE));
    assert_eq!(table.intrinsic_name(number), Some("number"));
    assert_eq!(table.type_symbol(instance), Some(point));
    let symbol = table.symbol(point).unwrap();
    assert_eq!(symbol.name, "Point");
    assert_eq!(symbol.value_declaration, Some(NodeIndex(1)));
    assert_eq!(table.symbol_at_node(NodeIndex(5)), None);
}

#[test]
fn test_function_signatures() {
    let mut table = TypeTable::new();
    let void = table.add_intrinsic(TypeFlags::VOID, "void");
    let function = table.add_function(vec![Signature { return_type: void }]);
    assert_eq!(table.call_signatures(function).len(), 1);
    assert_eq!(table.call_signatures(function)[0].return_type, void);
}

#[test]
fn test_table_json_roundtrip_keeps_node_keys() {
    let mut table = TypeTable::new();
    let one = table.add_number_literal("1");
    table.set_node_type(NodeIndex(12), one);
    let json = serde_json::to_string(&table).unwrap();
    let decoded: TypeTable = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.type_at_node(NodeIndex(12)), Some(one));
    assert_eq!(decoded.literal_value(one), Some("1"));
}
