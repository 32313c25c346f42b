use super::*;

fn render(text: &str) -> Option<String> {
    parse_raw_type(text).map(|name| name.to_string())
}

#[test]
fn test_keywords_and_plain_names() {
    assert_eq!(render("number").as_deref(), Some("float"));
    assert_eq!(render("string").as_deref(), Some("string"));
    assert_eq!(render("Point").as_deref(), Some("Point"));
    assert_eq!(render("shapes.Point").as_deref(), Some("shapes.Point"));
}

#[test]
fn test_array_shapes() {
    assert_eq!(render("number[]").as_deref(), Some("{ list type : float }"));
    assert_eq!(render("Array<string>").as_deref(), Some("{ list type : string }"));
    assert_eq!(
        render("number[][]").as_deref(),
        Some("{ list type : { list type : float } }")
    );
}

#[test]
fn test_dictionary_shapes() {
    assert_eq!(
        render("Map<string, number>").as_deref(),
        Some("{ dictionary type : string float }")
    );
    assert_eq!(
        render("{ [key: string]: boolean }").as_deref(),
        Some("{ dictionary type : string boolean }")
    );
    assert_eq!(
        render("{ [key: string]: Point; }").as_deref(),
        Some("{ dictionary type : string Point }")
    );
}

#[test]
fn test_other_generics() {
    assert_eq!(
        render("Set<number>").as_deref(),
        Some("{ generic type : Set float }")
    );
    assert_eq!(
        render("Array<number, string>").as_deref(),
        Some("{ generic type : Array float string }")
    );
}

#[test]
fn test_unions_drop_nullish_members() {
    assert_eq!(render("string | null").as_deref(), Some("string"));
    assert_eq!(render("undefined | Point | null").as_deref(), Some("Point"));
    assert_eq!(render("null | undefined"), None);
    assert_eq!(
        render("string | number").as_deref(),
        Some("{ union type : string float }")
    );
}

#[test]
fn test_union_members_are_deduplicated() {
    assert_eq!(
        render("string | number | string").as_deref(),
        Some("{ union type : string float }")
    );
    assert_eq!(render("| Point | Point").as_deref(), Some("Point"));
}

#[test]
fn test_parenthesized_union_in_array() {
    assert_eq!(
        render("(string | number)[]").as_deref(),
        Some("{ list type : { union type : string float } }")
    );
    assert_eq!(render("(string | null)[]").as_deref(), Some("{ list type : string }"));
}

#[test]
fn test_unrepresentable_text() {
    assert_eq!(render(""), None);
    assert_eq!(render("() => void"), None);
    assert_eq!(render("Map<string"), None);
    assert_eq!(render("string number"), None);
    assert_eq!(render("null[]"), None);
}

#[test]
fn test_nesting_is_bounded() {
    let deep = format!("{}number{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(render(&deep), None);
    let shallow = format!("{}number{}", "(".repeat(4), ")".repeat(4));
    assert_eq!(render(&shallow).as_deref(), Some("float"));
}

#[test]
fn test_alias_type_keyword() {
    assert_eq!(alias_type_keyword("number"), TypeName::text("float"));
    assert_eq!(alias_type_keyword("boolean"), TypeName::text("boolean"));
}
