//! Include/exclude filter expression parsing
//!
//! Turns the free-text search string used to narrow stack-frame data into two
//! ordered term lists. The parser does not match anything itself; consumers
//! forward the lists to whatever does the matching.
//!
//! # Syntax
//!
//! ```text
//! term                 Include frames matching this term
//! -term                Exclude frames matching this term
//! "a phrase" 'or this' Quoted phrases may contain spaces
//! -"a phrase"          Exclude a quoted phrase
//! ```
//!
//! Terms are separated by spaces. A `-` only marks an exclusion at the start of
//! a term, so `a-b` is the single include term `a-b`.
//!
//! # Examples
//!
//! ```
//! use stackfilter::filter::parse;
//!
//! let query = parse(r#"tokio -"park timeout" -epoll"#).unwrap();
//! assert_eq!(query.includes, vec!["tokio"]);
//! assert_eq!(query.excludes, vec!["park timeout", "epoll"]);
//!
//! let err = parse("foo -").unwrap_err();
//! assert_eq!(err.to_string(), "Invalid location for minus");
//! ```

pub mod error;
pub mod outcome;
pub mod parser;

pub use error::FilterParseError;
pub use outcome::FilterOutcome;
pub use parser::{FilterQuery, parse, parse_optional};
