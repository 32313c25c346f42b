use super::*;
use std::path::PathBuf;
use tsgls_common::Span;
use tsgls_ir::Complaint;
use tsgls_transform::TransformOutput;

fn result(file_name: &str, complaints: Vec<Complaint>) -> DocumentResult {
    DocumentResult {
        path: PathBuf::from("docs/input.tsgls.json"),
        file_name: file_name.to_string(),
        source_text: "a\nbb cc\n".to_string(),
        output: TransformOutput {
            lines: Vec::new(),
            complaints,
        },
    }
}

#[test]
fn test_positions_are_one_based() {
    let results = vec![result(
        "src/a.ts",
        vec![
            Complaint::new(Span::new(5, 7), "second"),
            Complaint::new(Span::new(0, 1), "first"),
        ],
    )];
    let reports = Reporter::collect(&results);
    assert_eq!(
        reports,
        vec![
            ComplaintReport {
                file: "src/a.ts".to_string(),
                line: 1,
                column: 1,
                reason: "first".to_string(),
            },
            ComplaintReport {
                file: "src/a.ts".to_string(),
                line: 2,
                column: 4,
                reason: "second".to_string(),
            },
        ]
    );
}

#[test]
fn test_plain_text_format() {
    let results = vec![result(
        "src/a.ts",
        vec![Complaint::new(Span::new(2, 4), "function declaration is not supported")],
    )];
    let text = Reporter::new(false).render(&results, ReportFormat::Text);
    assert_eq!(
        text,
        "src/a.ts(2,1): unsupported: function declaration is not supported\n"
    );
}

#[test]
fn test_unnamed_documents_use_their_path() {
    let results = vec![result("", vec![Complaint::new(Span::new(0, 1), "x")])];
    let text = Reporter::new(false).render(&results, ReportFormat::Text);
    assert!(text.starts_with("docs/input.tsgls.json(1,1)"));
}

#[test]
fn test_json_format() {
    let results = vec![result("src/a.ts", vec![Complaint::new(Span::new(0, 1), "bad")])];
    let json = Reporter::new(false).render(&results, ReportFormat::Json);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["file"], "src/a.ts");
    assert_eq!(parsed[0]["line"], 1);
    assert_eq!(parsed[0]["column"], 1);
    assert_eq!(parsed[0]["reason"], "bad");
}

#[test]
fn test_no_complaints_renders_nothing() {
    let results = vec![result("src/a.ts", Vec::new())];
    assert!(Reporter::new(true).render(&results, ReportFormat::Text).is_empty());
    assert_eq!(Reporter::new(false).render(&results, ReportFormat::Json), "[]\n");
}
