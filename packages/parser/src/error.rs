use serde::Serialize;
use thiserror::Error;

pub type ParseResult<T> = Result<T, StructureError>;

/// The only fatal parse failure: a designed resource-exhaustion guard.
///
/// Everything else the parser encounters (malformed tokens, unbalanced
/// parentheses) degrades into diagnostics so a live preview never loses the
/// rest of the document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructureError {
    #[error("maximum tree depth {limit} exceeded at line {line}")]
    DepthExceeded { limit: usize, line: usize },
}

impl StructureError {
    pub fn depth_exceeded(limit: usize, line: usize) -> Self {
        Self::DepthExceeded { limit, line }
    }
}

/// Non-fatal problem recorded while parsing. Returned alongside the partial
/// result rather than aborting it.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum ParseDiagnostic {
    #[error("line {line}: dropped malformed property token '{token}'")]
    MalformedProperty { line: usize, token: String },
}

impl ParseDiagnostic {
    pub fn malformed_property(line: usize, token: impl Into<String>) -> Self {
        Self::MalformedProperty {
            line,
            token: token.into(),
        }
    }
}
