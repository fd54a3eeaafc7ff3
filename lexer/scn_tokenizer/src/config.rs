//! Tokenizer configuration and presets.

use std::str::FromStr;

use scn_lexer_core::{BreakSet, CommentStyles, ScanOptions};

use crate::command::COMMAND_MAX_LENGTH;

/// Default current-token capacity, terminator included.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 1024;

/// What to do with a token longer than `max_token_len - 1` bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Keep the first `max_token_len - 1` bytes, consume and drop the rest.
    #[default]
    Truncate,
    /// Fail with [`TokenizeError::TokenTooLong`](crate::TokenizeError::TokenTooLong).
    Reject,
}

impl FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncate" => Ok(Self::Truncate),
            "reject" => Ok(Self::Reject),
            _ => Err(format!("unknown overflow policy '{s}' (expected truncate or reject)")),
        }
    }
}

/// Scanner settings for one [`TextTokenizer`](crate::TextTokenizer).
///
/// `Default` is the scene-script preset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenizerConfig {
    pub break_set: BreakSet,
    pub comments: CommentStyles,
    /// Current-token capacity including the terminator. Always at least 1.
    pub max_token_len: usize,
    pub overflow: OverflowPolicy,
}

impl TokenizerConfig {
    /// Scene scripts: `{ } ( ) ' :` breaks, `//` and `/* */` comments.
    pub fn scene() -> Self {
        Self {
            break_set: *BreakSet::scene(),
            comments: CommentStyles::SCENE,
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
            overflow: OverflowPolicy::Truncate,
        }
    }

    /// Console command lines: command break set, no comments.
    pub fn command() -> Self {
        Self {
            break_set: *BreakSet::command(),
            comments: CommentStyles::empty(),
            max_token_len: COMMAND_MAX_LENGTH,
            overflow: OverflowPolicy::Truncate,
        }
    }

    /// Whitespace-separated words and quoted strings only.
    pub fn bare() -> Self {
        Self {
            break_set: BreakSet::empty(),
            comments: CommentStyles::empty(),
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
            overflow: OverflowPolicy::Truncate,
        }
    }

    #[must_use]
    pub fn with_break_set(mut self, break_set: BreakSet) -> Self {
        self.break_set = break_set;
        self
    }

    #[must_use]
    pub fn with_comments(mut self, comments: CommentStyles) -> Self {
        self.comments = comments;
        self
    }

    /// Set the token capacity; values below 1 become 1.
    #[must_use]
    pub fn with_max_token_len(mut self, max_token_len: usize) -> Self {
        self.max_token_len = max_token_len.max(1);
        self
    }

    #[must_use]
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Scanner options borrowing this config's break set.
    pub fn scan_options(&self) -> ScanOptions<'_> {
        ScanOptions::new(&self.break_set, self.comments)
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self::scene()
    }
}
