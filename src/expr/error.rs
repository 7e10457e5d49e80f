use thiserror::Error;

/// Reason an expression could not be compiled.
///
/// Offsets are byte positions into the source string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("expression is empty")]
    Empty { offset: usize },

    #[error("unexpected character `{ch}` at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("invalid number literal `{literal}` at offset {offset}")]
    InvalidNumber { literal: String, offset: usize },

    #[error("unexpected `{found}` at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    #[error("unexpected end of expression at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("unknown identifier `{name}` at offset {offset}")]
    UnknownIdentifier { name: String, offset: usize },

    #[error("unknown function `{name}` at offset {offset}")]
    UnknownFunction { name: String, offset: usize },

    #[error("function `{name}` expects {expected} argument(s), got {found} (offset {offset})")]
    WrongArity {
        name: &'static str,
        expected: usize,
        found: usize,
        offset: usize,
    },

    #[error("expression nesting exceeds {limit} levels at offset {offset}")]
    TooDeep { limit: usize, offset: usize },
}

impl ExpressionError {
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::Empty { offset }
            | Self::UnexpectedChar { offset, .. }
            | Self::InvalidNumber { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEnd { offset }
            | Self::UnknownIdentifier { offset, .. }
            | Self::UnknownFunction { offset, .. }
            | Self::WrongArity { offset, .. }
            | Self::TooDeep { offset, .. } => *offset,
        }
    }
}
