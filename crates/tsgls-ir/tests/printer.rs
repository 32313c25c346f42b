use super::*;
use crate::command_names::*;
use tsgls_common::Span;

fn command(name: &str) -> Output {
    Output::Command(IrCommand::new(name))
}

#[test]
fn test_print_splices_nested_transformations_in_order() {
    let inner = Transformation::new(
        Span::new(10, 20),
        vec![
            Output::Command(crate::ir!(MEMBER_VARIABLE, "public", "x", "1")),
            Output::Literal("\"s\"".into()),
        ],
    );
    let outer = Transformation::new(
        Span::new(0, 30),
        vec![command(CLASS_START), inner.into(), command(CLASS_END)],
    );
    let program = TransformationsPrinter::new().print(&[outer.into()]);
    let rendered: Vec<String> = program.lines.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        [
            "class start",
            "member variable : public x 1",
            "\"s\"",
            "class end"
        ]
    );
    assert!(program.complaints.is_empty());
}

#[test]
fn test_print_collects_complaints_in_encounter_order() {
    let nested = Transformation::new(
        Span::new(5, 9),
        vec![Output::Complaint(Complaint::new(Span::new(5, 9), "first"))],
    );
    let fragments = vec![
        Fragment::Transformation(nested),
        Fragment::Complaint(Complaint::new(Span::new(0, 1), "second")),
        Fragment::Transformation(Transformation::command(Span::new(1, 2), IrCommand::new(IF_END))),
    ];
    let program = TransformationsPrinter::new().print(&fragments);
    let reasons: Vec<&str> = program
        .complaints
        .iter()
        .map(|c| c.reason.as_str())
        .collect();
    assert_eq!(reasons, ["first", "second"]);
    assert_eq!(program.lines, [Line::Command(IrCommand::new(IF_END))]);
}

#[test]
fn test_print_does_not_dedupe() {
    let line = Transformation::command(Span::at(0), IrCommand::new(RETURN));
    let program = TransformationsPrinter::new().print(&[line.clone().into(), line.into()]);
    assert_eq!(program.lines.len(), 2);
}
