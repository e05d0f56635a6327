use crate::filter::{FilterOutcome, FilterParseError, FilterQuery};
use colored::Colorize;
use std::fmt::Write;
use unicode_width::UnicodeWidthChar;

/// Render a term so leading/trailing spaces and empty phrases stay visible
pub fn quote_term(term: &str) -> String {
    format!("{term:?}")
}

/// Indent that lines up with `expression` up to `position` characters:
/// tabs are kept, everything else becomes as many spaces as it is wide
fn caret_indent(expression: &str, position: usize) -> String {
    expression
        .chars()
        .take(position)
        .map(|c| match c {
            '\t' => "\t".to_string(),
            c => " ".repeat(c.width().unwrap_or(0)),
        })
        .collect()
}

/// Two lines pointing at the character an error refers to
pub fn caret_lines(expression: &str, err: &FilterParseError) -> String {
    format!(
        "  {}\n  {}{}",
        expression,
        caret_indent(expression, err.position()),
        "^".red().bold()
    )
}

pub fn format_parse_text(expression: &str, result: &Result<FilterQuery, FilterParseError>) -> String {
    let mut out = String::new();

    match result {
        Ok(query) => {
            let _ = writeln!(
                out,
                "{} {} include, {} exclude",
                "PARSE ok:".green().bold(),
                query.includes.len(),
                query.excludes.len()
            );
            if query.is_empty() {
                let _ = writeln!(out, "No terms.");
            }
            for term in &query.includes {
                let _ = writeln!(out, "  {} {}", "+".green(), quote_term(term));
            }
            for term in &query.excludes {
                let _ = writeln!(out, "  {} {}", "-".red(), quote_term(term));
            }
        }
        Err(err) => {
            let _ = writeln!(out, "{} {}", "PARSE failed:".red().bold(), err);
            let _ = writeln!(out, "{}", caret_lines(expression, err));
        }
    }

    out
}

pub fn format_parse_json(
    result: &Result<FilterQuery, FilterParseError>,
    pretty: bool,
) -> serde_json::Result<String> {
    let outcome = FilterOutcome::from(result.clone());
    if pretty {
        serde_json::to_string_pretty(&outcome)
    } else {
        serde_json::to_string(&outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::parse;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_text_lists_includes_then_excludes() {
        plain();
        let text = format_parse_text("-b a", &parse("-b a"));
        assert_eq!(
            text,
            "PARSE ok: 1 include, 1 exclude\n  + \"a\"\n  - \"b\"\n"
        );
    }

    #[test]
    fn test_text_points_at_error_column() {
        plain();
        let text = format_parse_text("ab\"c", &parse("ab\"c"));
        assert_eq!(text, "PARSE failed: Mismatched quote\n  ab\"c\n    ^\n");
    }

    #[test]
    fn test_caret_follows_tabs_and_wide_characters() {
        plain();
        let lines = caret_lines("a\tb'", &parse("a\tb'").unwrap_err());
        assert_eq!(lines, "  a\tb'\n   \t ^");

        let lines = caret_lines("日本 -", &parse("日本 -").unwrap_err());
        assert_eq!(lines, "  日本 -\n       ^");
    }

    #[test]
    fn test_text_for_empty_expression() {
        plain();
        let text = format_parse_text("", &parse(""));
        assert!(text.contains("No terms."));
    }

    #[test]
    fn test_compact_json() {
        let json = format_parse_json(&parse("'x y'"), false).unwrap();
        assert_eq!(json, r#"{"includes":["x y"],"excludes":[]}"#);
    }
}
