//! Error types for the tokenizer front-end.
//!
//! Scanning itself never fails under the default policy. These errors come
//! from the opt-in `Reject` overflow policy, from callers reporting script
//! errors through [`TextTokenizer::error`](crate::TextTokenizer::error), and
//! from command-line limits.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    /// A token exceeded the configured capacity under `OverflowPolicy::Reject`.
    #[error("line {line}: token at offset {offset} is longer than {limit} bytes")]
    TokenTooLong {
        line: usize,
        offset: usize,
        limit: usize,
    },

    /// Error reported by the consumer of the token stream.
    #[error("line {line}: {message}")]
    Script {
        line: usize,
        offset: usize,
        message: String,
    },
}

impl TokenizeError {
    /// 1-based line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::TokenTooLong { line, .. } | Self::Script { line, .. } => *line,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command line")]
    Empty,

    #[error("command line of {len} bytes overflows the {max}-byte tokenizer buffer")]
    LineTooLong { len: usize, max: usize },
}
