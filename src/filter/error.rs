use thiserror::Error;

/// Errors that can occur when parsing filter expressions
///
/// `position` is the 0-based character column of the offending character.
/// It is not part of the message, which is shown to users verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterParseError {
    /// A quoted term never closes, or a quote appears inside an unquoted term
    #[error("Mismatched quote")]
    MismatchedQuote { position: usize },

    /// A `-` is followed by a space or by the end of the input
    #[error("Invalid location for minus")]
    InvalidMinusPlacement { position: usize },
}

impl FilterParseError {
    /// Column of the character that triggered the error
    pub fn position(&self) -> usize {
        match self {
            FilterParseError::MismatchedQuote { position }
            | FilterParseError::InvalidMinusPlacement { position } => *position,
        }
    }

    /// Stable identifier for machine-readable reports
    pub fn kind(&self) -> &'static str {
        match self {
            FilterParseError::MismatchedQuote { .. } => "mismatched_quote",
            FilterParseError::InvalidMinusPlacement { .. } => "invalid_minus_placement",
        }
    }
}
