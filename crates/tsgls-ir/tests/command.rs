use super::*;
use crate::command_names::*;

#[test]
fn test_display_without_arguments() {
    assert_eq!(IrCommand::new(CLASS_END).to_string(), "class end");
}

#[test]
fn test_display_with_arguments() {
    let line = crate::ir!(MEMBER_VARIABLE, "public", "x", "1");
    assert_eq!(line.to_string(), "member variable : public x 1");
}

#[test]
fn test_display_wraps_spaced_text_and_nested_commands() {
    let list = crate::ir!(LIST_TYPE, "float");
    let line = IrCommand::new(VARIABLE)
        .arg("names")
        .arg(list)
        .arg("\"a b\"");
    assert_eq!(
        line.to_string(),
        "variable : names { list type : float } (\"a b\")"
    );
}

#[test]
fn test_argument_accessors() {
    let text = Argument::text("x");
    let command = Argument::from(IrCommand::new(STRING_TRIM));
    assert_eq!(text.as_text(), Some("x"));
    assert!(text.as_command().is_none());
    assert_eq!(command.as_command().map(|c| c.name.as_str()), Some(STRING_TRIM));
    assert!(command.as_text().is_none());
}

#[test]
fn test_with_args_preserves_order() {
    let line = IrCommand::with_args(FUNCTION_CALL, ["f", "a", "b"]);
    assert_eq!(line.to_string(), "function call : f a b");
}
