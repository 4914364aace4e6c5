use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Identifies which of the two compared documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Raised when input text is not syntactically valid JSON.
///
/// Carries the position reported by the underlying parser. This is the only
/// error the comparison pipeline itself can produce; alignment and merging
/// operate on already-validated line sequences and cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{detail}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub detail: String,
}

impl From<&serde_json::Error> for ParseError {
    fn from(err: &serde_json::Error) -> Self {
        Self {
            line: err.line(),
            column: err.column(),
            detail: err.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum JdiffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON on {side} side: {source}")]
    Parse { side: Side, source: ParseError },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl JdiffError {
    /// The side a parse failure occurred on, if this is a parse failure.
    pub fn failed_side(&self) -> Option<Side> {
        match self {
            JdiffError::Parse { side, .. } => Some(*side),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, JdiffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_carries_position() {
        let err = serde_json::from_str::<serde_json::Value>("{\"a\": }").unwrap_err();
        let parse = ParseError::from(&err);
        assert_eq!(parse.line, 1);
        assert!(parse.column > 0);
        assert!(!parse.detail.is_empty());
    }

    #[test]
    fn compare_error_names_failing_side() {
        let err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err = JdiffError::Parse {
            side: Side::Right,
            source: ParseError::from(&err),
        };
        assert_eq!(err.failed_side(), Some(Side::Right));
        assert!(err.to_string().contains("right side"));
    }
}
