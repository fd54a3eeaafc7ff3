//! Stateful tokenizer over a borrowed script buffer.
//!
//! A [`TextTokenizer`] owns its cursor and its bounded current-token buffer
//! but only borrows the text it scans. One instance serves one parse job at
//! a time; rebind it with [`set_buffer`](TextTokenizer::set_buffer) or give
//! each job its own instance.

use std::borrow::Cow;
use std::fmt;

use scn_lexer_core::{token_available, Cursor, ScannedToken, Scanner, TokenBuf, TokenKind};
use tracing::{debug, error, trace};

use crate::config::{OverflowPolicy, TokenizerConfig};
use crate::error::TokenizeError;

/// Cursor plus current token over a caller-owned buffer.
///
/// # Example
///
/// ```
/// use scn_tokenizer::{TextTokenizer, TokenizerConfig};
///
/// let script = b"actor \"Alyx\" { }";
/// let mut tok = TextTokenizer::new(TokenizerConfig::scene());
/// tok.set_buffer(script);
/// assert!(tok.get_token(true));
/// assert_eq!(tok.current_token(), b"actor");
/// assert!(tok.token_available());
/// ```
#[derive(Clone, Debug)]
pub struct TextTokenizer<'src> {
    config: TokenizerConfig,
    buffer: &'src [u8],
    pos: usize,
    token: TokenBuf,
    last: Option<ScannedToken>,
    /// Set by `unget_token`: the next `get_token` replays `last`.
    replay: bool,
    errors: usize,
}

impl<'src> TextTokenizer<'src> {
    /// Create a tokenizer with no buffer bound; every scan reports end of input.
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            token: TokenBuf::new(config.max_token_len),
            config,
            buffer: &[],
            pos: 0,
            last: None,
            replay: false,
            errors: 0,
        }
    }

    /// Create a tokenizer already bound to `buffer`.
    pub fn with_buffer(config: TokenizerConfig, buffer: &'src [u8]) -> Self {
        let mut tokenizer = Self::new(config);
        tokenizer.set_buffer(buffer);
        tokenizer
    }

    /// Rebind to the start of `buffer` without copying it.
    ///
    /// Clears the current token. The reported-error count is kept; use
    /// [`reset`](Self::reset) between independent jobs.
    pub fn set_buffer(&mut self, buffer: &'src [u8]) {
        debug!(len = buffer.len(), "tokenizer buffer bound");
        self.buffer = buffer;
        self.pos = 0;
        self.token.clear();
        self.last = None;
        self.replay = false;
    }

    /// Drop the bound buffer and all scan state.
    pub fn reset(&mut self) {
        self.set_buffer(&[]);
        self.errors = 0;
    }

    /// Scan the next token into the current-token buffer.
    ///
    /// Returns `true` if a non-empty token was extracted. An empty quoted
    /// string (`""`) is consumed but reports `false`, as does end of input;
    /// use [`next_token`](Self::next_token) to tell the two apart. Under
    /// [`OverflowPolicy::Reject`] an oversized token is logged and also
    /// reported as `false`; use [`try_get_token`](Self::try_get_token) to
    /// see the error.
    ///
    /// `cross_line` is accepted for call-site compatibility and has no
    /// effect: tokens are always read across line breaks. Use
    /// [`token_available`](Self::token_available) to stay on one line.
    pub fn get_token(&mut self, cross_line: bool) -> bool {
        match self.try_get_token(cross_line) {
            Ok(found) => found,
            Err(err) => {
                error!(%err, "token rejected");
                false
            }
        }
    }

    /// Like [`get_token`](Self::get_token), but surfaces overflow rejection.
    ///
    /// A rejected token leaves the cursor at the token's start and the
    /// current token empty.
    pub fn try_get_token(&mut self, _cross_line: bool) -> Result<bool, TokenizeError> {
        Ok(self.next_token()?.is_some() && !self.token.is_empty())
    }

    /// Scan the next token, empty ones included.
    ///
    /// Returns `Ok(None)` only at end of input. This is the stream view used
    /// by [`tokens`](Self::tokens) and [`Command`](crate::Command), where an
    /// empty quoted string is still an argument.
    pub fn next_token(&mut self) -> Result<Option<ScannedToken>, TokenizeError> {
        if self.replay {
            self.replay = false;
            return Ok(self.last);
        }

        let mut scanner = Scanner::new(Cursor::at(self.buffer, self.pos), self.config.scan_options());
        let Some(tok) = scanner.next_token(&mut self.token) else {
            self.pos = scanner.pos();
            self.last = None;
            trace!(offset = self.pos, "end of input");
            return Ok(None);
        };

        if tok.truncated && self.config.overflow == OverflowPolicy::Reject {
            self.pos = tok.start;
            self.token.clear();
            self.last = None;
            return Err(TokenizeError::TokenTooLong {
                line: self.line(),
                offset: tok.start,
                limit: self.token.capacity() - 1,
            });
        }

        trace!(
            kind = ?tok.kind,
            offset = tok.start,
            truncated = tok.truncated,
            token = %self.token.to_string_lossy(),
            "token"
        );
        self.pos = tok.end;
        self.last = Some(tok);
        Ok(Some(tok))
    }

    /// Read the next token, reporting a script error at end of input.
    ///
    /// `what` names the expected item in the error message. An empty quoted
    /// string satisfies the requirement.
    pub fn require_token(&mut self, what: &str) -> Result<&[u8], TokenizeError> {
        if self.next_token()?.is_some() {
            Ok(self.token.as_bytes())
        } else {
            Err(self.error(format_args!("unexpected end of input, expected {what}")))
        }
    }

    /// Read the next token and check that it equals `expected`.
    pub fn expect_token(&mut self, expected: &[u8]) -> Result<(), TokenizeError> {
        let expected_text = String::from_utf8_lossy(expected);
        if self.next_token()?.is_none() {
            return Err(self.error(format_args!(
                "unexpected end of input, expected '{expected_text}'"
            )));
        }
        if self.token.as_bytes() == expected {
            Ok(())
        } else {
            let found = self.current_token_str().into_owned();
            Err(self.error(format_args!("expected '{expected_text}', found '{found}'")))
        }
    }

    /// Make the next `get_token` or `next_token` return the current token again.
    ///
    /// Has no effect before the first token or after end of input.
    pub fn unget_token(&mut self) {
        self.replay = self.last.is_some();
    }

    /// The most recently scanned token (empty before the first one).
    pub fn current_token(&self) -> &[u8] {
        self.token.as_bytes()
    }

    /// The current token as text; invalid UTF-8 is replaced.
    pub fn current_token_str(&self) -> Cow<'_, str> {
        self.token.to_string_lossy()
    }

    /// The current token followed by its `0x00` terminator.
    pub fn current_token_with_nul(&self) -> &[u8] {
        self.token.as_bytes_with_nul()
    }

    /// Position and kind of the current token.
    pub fn last_token(&self) -> Option<ScannedToken> {
        self.last
    }

    /// Kind of the current token.
    pub fn token_kind(&self) -> Option<TokenKind> {
        self.last.map(|tok| tok.kind)
    }

    /// Returns `true` if another token starts before the end of this line.
    ///
    /// Does not move the cursor. `;`, `#` and `//` count as the end of the
    /// line here even when the scanner itself is not configured to skip
    /// them. A token pushed back by [`unget_token`](Self::unget_token) is
    /// always available.
    pub fn token_available(&self) -> bool {
        self.replay || token_available(self.buffer, self.pos)
    }

    /// Report a script error at the current position.
    ///
    /// Logs the message at `error` level with the line and current token,
    /// bumps [`error_count`](Self::error_count), and returns the error for
    /// the caller to propagate.
    pub fn error(&mut self, args: fmt::Arguments<'_>) -> TokenizeError {
        let message = args.to_string();
        let line = self.line();
        self.errors += 1;
        error!(
            line,
            offset = self.pos,
            token = %self.current_token_str(),
            "{message}"
        );
        TokenizeError::Script {
            line,
            offset: self.pos,
            message,
        }
    }

    /// Number of errors reported through [`error`](Self::error).
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based line of the cursor.
    pub fn line(&self) -> usize {
        Cursor::at(self.buffer, self.pos).line()
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Iterate the remaining tokens as owned byte strings.
    pub fn tokens(&mut self) -> Tokens<'_, 'src> {
        Tokens { tokenizer: self }
    }
}

/// Iterator over the remaining tokens of a [`TextTokenizer`].
///
/// Yields every scanned token, empty quoted strings included. Stops at end
/// of input (or at a rejected token).
#[derive(Debug)]
pub struct Tokens<'t, 'src> {
    tokenizer: &'t mut TextTokenizer<'src>,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.tokenizer.next_token() {
            Ok(Some(_)) => Some(self.tokenizer.current_token().to_vec()),
            Ok(None) => None,
            Err(err) => {
                error!(%err, "token rejected");
                None
            }
        }
    }
}
