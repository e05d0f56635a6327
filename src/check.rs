use crate::config::CheckRules;
use crate::filter::{FilterOutcome, FilterParseError, parse};
use crate::report::caret_lines;
use colored::Colorize;
use comfy_table::{Cell, Table};
use serde::Serialize;
use std::fmt::Write;

/// One expression read from a file, with its parse outcome
#[derive(Debug, Clone, Serialize)]
pub struct CheckedLine {
    pub file: String,
    /// 1-based line number
    pub line: usize,
    pub expression: String,
    /// 1-based column of the failing character
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    pub outcome: FilterOutcome,
    #[serde(skip)]
    pub error: Option<FilterParseError>,
}

impl CheckedLine {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub files: usize,
    pub checked: usize,
    pub failed: usize,
    pub results: Vec<CheckedLine>,
}

impl CheckReport {
    /// Parse every eligible line of `content` and append the outcomes
    pub fn add_source(&mut self, file: &str, content: &str, rules: &CheckRules) {
        self.files += 1;

        for (idx, line) in content.lines().enumerate() {
            if !rules.should_check(line) {
                continue;
            }

            let result = parse(line);
            let error = result.as_ref().err().cloned();
            let checked = CheckedLine {
                file: file.to_string(),
                line: idx + 1,
                expression: line.to_string(),
                column: error.as_ref().map(|err| err.position() + 1),
                outcome: FilterOutcome::from(result),
                error,
            };

            self.checked += 1;
            if checked.failed() {
                self.failed += 1;
            }
            self.results.push(checked);
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckedLine> {
        self.results.iter().filter(|r| r.failed())
    }
}

pub fn format_check_text(report: &CheckReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "CHECK {} expression{} in {} file{}: {} ok, {} failed",
        report.checked,
        if report.checked == 1 { "" } else { "s" },
        report.files,
        if report.files == 1 { "" } else { "s" },
        report.checked - report.failed,
        report.failed
    );

    if !report.has_failures() {
        let _ = writeln!(out, "{}", "All expressions parsed.".green().bold());
        return out;
    }

    let mut table = Table::new();
    table.set_header(vec!["File", "Line", "Col", "Error"]);
    for failure in report.failures() {
        let error = failure
            .error
            .as_ref()
            .map(|err| err.to_string())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(&failure.file),
            Cell::new(failure.line),
            Cell::new(failure.column.unwrap_or_default()),
            Cell::new(error),
        ]);
    }
    let _ = writeln!(out, "{table}");

    for failure in report.failures() {
        let _ = writeln!(out, "\n{}:{}", failure.file, failure.line);
        if let Some(err) = &failure.error {
            let _ = writeln!(out, "{}", caret_lines(&failure.expression, err));
        }
    }

    out
}

pub fn format_check_json(report: &CheckReport, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
}
