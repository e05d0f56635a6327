use super::error::FilterParseError;
use super::parser::FilterQuery;
use serde::{Deserialize, Serialize};

/// Result of a parse in the shape handed to consumers:
/// `{"includes": [...], "excludes": [...]}` or `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterOutcome {
    Parsed(FilterQuery),
    Error { error: String },
}

impl FilterOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, FilterOutcome::Error { .. })
    }

    pub fn query(&self) -> Option<&FilterQuery> {
        match self {
            FilterOutcome::Parsed(query) => Some(query),
            FilterOutcome::Error { .. } => None,
        }
    }
}

impl From<Result<FilterQuery, FilterParseError>> for FilterOutcome {
    fn from(result: Result<FilterQuery, FilterParseError>) -> Self {
        match result {
            Ok(query) => FilterOutcome::Parsed(query),
            Err(err) => FilterOutcome::Error {
                error: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::parse;
    use serde_json::json;

    #[test]
    fn test_success_serializes_to_lists() {
        let outcome = FilterOutcome::from(parse("main -\"poll loop\""));
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"includes": ["main"], "excludes": ["poll loop"]})
        );
    }

    #[test]
    fn test_error_serializes_message_only() {
        let outcome = FilterOutcome::from(parse("x -"));
        assert!(outcome.is_error());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"error": "Invalid location for minus"})
        );
    }

    #[test]
    fn test_deserializes_both_shapes() {
        let parsed: FilterOutcome =
            serde_json::from_str(r#"{"includes":["a"],"excludes":[]}"#).unwrap();
        assert_eq!(parsed.query().unwrap().includes, vec!["a".to_string()]);

        let failed: FilterOutcome = serde_json::from_str(r#"{"error":"Mismatched quote"}"#).unwrap();
        assert_eq!(
            failed,
            FilterOutcome::Error {
                error: "Mismatched quote".to_string()
            }
        );
    }
}
