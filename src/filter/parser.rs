use super::error::FilterParseError;
use serde::{Deserialize, Serialize};
use std::mem;
use std::str::FromStr;

/// A parsed filter expression: terms that must match and terms that must not
///
/// Both lists keep the order in which their terms appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Terms without a leading `-`
    pub includes: Vec<String>,
    /// Terms with a leading `-`, marker stripped
    pub excludes: Vec<String>,
}

impl FilterQuery {
    /// Create a new empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this query has no terms at all
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }

    /// Total number of terms across both lists
    pub fn term_count(&self) -> usize {
        self.includes.len() + self.excludes.len()
    }

    fn push(&mut self, term: String, exclude: bool) {
        if exclude {
            self.excludes.push(term);
        } else {
            self.includes.push(term);
        }
    }
}

impl FromStr for FilterQuery {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Idle,
    InUnquotedTerm,
    /// `start` is the column of the opening quote
    InQuotedTerm { quote: char, start: usize },
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Parse a filter expression into include and exclude terms
///
/// Terms are separated by spaces only. `'...'` and `"..."` delimit phrases that
/// may contain spaces and the other quote character. A `-` directly before the
/// start of a term marks it as an exclusion; anywhere else inside an unquoted
/// term it is an ordinary character.
pub fn parse(text: &str) -> Result<FilterQuery, FilterParseError> {
    let mut query = FilterQuery::new();
    let mut state = ScanState::Idle;
    let mut term = String::new();
    // Set by a leading `-`, consumed when the term it marks is pushed.
    let mut exclude = false;
    let mut chars = text.chars().enumerate().peekable();

    while let Some((pos, c)) = chars.next() {
        state = match state {
            ScanState::Idle => match c {
                ' ' => ScanState::Idle,
                c if is_quote(c) => ScanState::InQuotedTerm {
                    quote: c,
                    start: pos,
                },
                '-' => {
                    if matches!(chars.peek(), None | Some((_, ' '))) {
                        return Err(FilterParseError::InvalidMinusPlacement { position: pos });
                    }
                    exclude = true;
                    ScanState::Idle
                }
                c => {
                    term.push(c);
                    ScanState::InUnquotedTerm
                }
            },
            ScanState::InUnquotedTerm => match c {
                ' ' => {
                    query.push(mem::take(&mut term), mem::take(&mut exclude));
                    ScanState::Idle
                }
                c if is_quote(c) => {
                    return Err(FilterParseError::MismatchedQuote { position: pos });
                }
                c => {
                    term.push(c);
                    ScanState::InUnquotedTerm
                }
            },
            ScanState::InQuotedTerm { quote, .. } if c == quote => {
                query.push(mem::take(&mut term), mem::take(&mut exclude));
                ScanState::Idle
            }
            quoted @ ScanState::InQuotedTerm { .. } => {
                term.push(c);
                quoted
            }
        };
    }

    match state {
        ScanState::InQuotedTerm { start, .. } => {
            Err(FilterParseError::MismatchedQuote { position: start })
        }
        ScanState::InUnquotedTerm => {
            query.push(term, exclude);
            Ok(query)
        }
        ScanState::Idle => Ok(query),
    }
}

/// Parse an optional filter expression, treating a missing value as empty
pub fn parse_optional(text: Option<&str>) -> Result<FilterQuery, FilterParseError> {
    parse(text.unwrap_or_default())
}
