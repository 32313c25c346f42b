use super::*;

#[test]
fn test_line_map_positions() {
    let map = LineMap::build("a\nbc\r\nd\re");
    assert_eq!(map.line_count(), 4);
    assert_eq!(map.offset_to_position(0), Position::new(0, 0));
    assert_eq!(map.offset_to_position(3), Position::new(1, 1));
    assert_eq!(map.offset_to_position(6), Position::new(2, 0));
    assert_eq!(map.offset_to_position(8), Position::new(3, 0));
}

#[test]
fn test_line_map_clamps_past_end() {
    let map = LineMap::build("ab");
    assert_eq!(map.offset_to_position(10), Position::new(0, 10));
}
