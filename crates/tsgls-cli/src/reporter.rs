//! Complaint reports.

use colored::Colorize;
use serde::Serialize;
use tsgls_common::LineMap;

use crate::args::ReportFormat;
use crate::driver::DocumentResult;

/// One complaint with a one-based position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComplaintReport {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub reason: String,
}

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// Every complaint of every document, in document then source order.
    pub fn collect(results: &[DocumentResult]) -> Vec<ComplaintReport> {
        let mut reports = Vec::new();
        for result in results {
            if result.output.complaints.is_empty() {
                continue;
            }
            let file = result.display_name();
            let line_map = LineMap::build(&result.source_text);
            let mut complaints: Vec<_> = result.output.complaints.iter().collect();
            complaints.sort_by_key(|complaint| complaint.range.start);
            for complaint in complaints {
                let position = line_map.offset_to_position(complaint.range.start);
                reports.push(ComplaintReport {
                    file: file.clone(),
                    line: position.line + 1,
                    column: position.character + 1,
                    reason: complaint.reason.clone(),
                });
            }
        }
        reports
    }

    pub fn render(&self, results: &[DocumentResult], format: ReportFormat) -> String {
        let reports = Self::collect(results);
        match format {
            ReportFormat::Text => self.render_text(&reports),
            ReportFormat::Json => render_json(&reports),
        }
    }

    fn render_text(&self, reports: &[ComplaintReport]) -> String {
        let mut out = String::new();
        for report in reports {
            out.push_str(&self.format_report(report));
            out.push('\n');
        }
        out
    }

    /// `file(line,col): unsupported: reason`
    pub fn format_report(&self, report: &ComplaintReport) -> String {
        let location = format!("{}({},{})", report.file, report.line, report.column);
        if self.color {
            format!(
                "{}: {}: {}",
                location.bold(),
                "unsupported".yellow().bold(),
                report.reason
            )
        } else {
            format!("{location}: unsupported: {}", report.reason)
        }
    }
}

fn render_json(reports: &[ComplaintReport]) -> String {
    match serde_json::to_string_pretty(reports) {
        Ok(mut json) => {
            json.push('\n');
            json
        }
        Err(_) => "[]\n".to_string(),
    }
}

#[cfg(test)]
#[path = "../tests/reporter.rs"]
mod tests;
