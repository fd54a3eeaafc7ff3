//! Token scanner: whitespace/comment skipping, quoted strings, break
//! characters and bare words.
//!
//! # Grammar
//!
//! At each call, in order:
//!
//! 1. Skip bytes `<= 0x20`. Reaching the terminator means end of input.
//! 2. Skip any enabled line comment to (not past) the next `\n`, then go to 1.
//! 3. Skip any enabled `/* */` block comment past its `*/` (or to end of
//!    input when unterminated), then go to 1.
//! 4. `"` starts a quoted string: everything up to the closing `"` is copied
//!    literally. The closing quote is consumed but not stored. An
//!    unterminated string runs to end of input.
//! 5. A break-set member is a one-byte token.
//! 6. Anything else starts a word, which runs while bytes are `> 0x20` and
//!    not break characters. The break character that ends a word is left
//!    for the next call.
//!
//! Bytes beyond the output buffer's capacity are consumed and dropped.

use crate::break_set::BreakSet;
use crate::comment::CommentStyles;
use crate::cursor::Cursor;
use crate::token_buf::TokenBuf;

/// How a token was delimited in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Contents of a `"..."` string. `terminated` is `false` when the input
    /// ended before the closing quote.
    Quoted { terminated: bool },
    /// A single break-set byte.
    Break,
    /// A run of non-space, non-break bytes.
    Word,
}

/// Position and shape of one scanned token. The bytes live in the caller's
/// [`TokenBuf`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannedToken {
    pub kind: TokenKind,
    /// Offset of the token's first source byte (the opening quote for
    /// quoted strings).
    pub start: usize,
    /// Offset just past the token; where the next scan resumes.
    pub end: usize,
    /// `true` when source bytes were dropped to fit the output buffer.
    pub truncated: bool,
}

/// Scanner configuration: which bytes break words and which comments to skip.
#[derive(Clone, Copy, Debug)]
pub struct ScanOptions<'b> {
    pub breaks: &'b BreakSet,
    pub comments: CommentStyles,
}

impl<'b> ScanOptions<'b> {
    pub fn new(breaks: &'b BreakSet, comments: CommentStyles) -> Self {
        Self { breaks, comments }
    }
}

impl Default for ScanOptions<'static> {
    fn default() -> Self {
        Self::new(BreakSet::scene(), CommentStyles::SCENE)
    }
}

/// Stateful scanner over one buffer.
///
/// Produces one token per [`next_token`](Self::next_token) call. After end
/// of input every further call returns `None` without moving.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'a, 'b> {
    cursor: Cursor<'a>,
    options: ScanOptions<'b>,
}

impl<'a, 'b> Scanner<'a, 'b> {
    pub fn new(cursor: Cursor<'a>, options: ScanOptions<'b>) -> Self {
        Self { cursor, options }
    }

    /// Current offset into the buffer.
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Underlying cursor.
    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor
    }

    /// Scan the next token into `out`.
    ///
    /// `out` is cleared first. On end of input it stays empty and `None` is
    /// returned.
    pub fn next_token(&mut self, out: &mut TokenBuf) -> Option<ScannedToken> {
        out.clear();
        if !self.skip_trivia() {
            return None;
        }

        let start = self.cursor.pos();
        let b = self.cursor.current();
        let kind = if b == b'"' {
            self.quoted(out)
        } else if self.options.breaks.contains(b) {
            out.push(b);
            self.cursor.advance();
            TokenKind::Break
        } else {
            self.word(out)
        };

        Some(ScannedToken {
            kind,
            start,
            end: self.cursor.pos(),
            truncated: out.is_truncated(),
        })
    }

    // ─── Trivia ─────────────────────────────────────────────────────────

    /// Skip whitespace and enabled comments. Returns `false` at end of input.
    fn skip_trivia(&mut self) -> bool {
        loop {
            self.cursor.eat_while(|b| b <= b' ');
            if self.cursor.is_eof() {
                return false;
            }

            let b = self.cursor.current();
            let next = self.cursor.peek();
            if self.options.comments.opens_line_comment(b, next) {
                self.cursor.eat_until_newline_or_eof();
            } else if self.options.comments.opens_block_comment(b, next) {
                self.cursor.advance_n(2);
                self.cursor.eat_past_block_end();
            } else {
                return true;
            }
        }
    }

    // ─── Tokens ─────────────────────────────────────────────────────────

    fn quoted(&mut self, out: &mut TokenBuf) -> TokenKind {
        self.cursor.advance(); // opening '"'
        let body_start = self.cursor.pos();
        self.cursor.eat_until(b'"');
        out.extend_from_slice(self.cursor.slice_from(body_start));

        let terminated = !self.cursor.is_eof();
        if terminated {
            self.cursor.advance(); // closing '"'
        }
        TokenKind::Quoted { terminated }
    }

    fn word(&mut self, out: &mut TokenBuf) -> TokenKind {
        let start = self.cursor.pos();
        let breaks = self.options.breaks;
        self.cursor.eat_while(|b| b > b' ' && !breaks.contains(b));
        out.extend_from_slice(self.cursor.slice_from(start));
        TokenKind::Word
    }
}

/// Scan one token from `input` starting at `start`.
///
/// The token is written to `out`, whose capacity is the maximum token
/// length including the terminator. Returns `None` at end of input; the
/// caller resumes at the returned token's `end`.
pub fn scan_next(
    input: &[u8],
    start: usize,
    options: ScanOptions<'_>,
    out: &mut TokenBuf,
) -> Option<ScannedToken> {
    Scanner::new(Cursor::at(input, start), options).next_token(out)
}

/// Returns `true` if another token starts on the current line.
///
/// Skips bytes `<= 0x20` without consuming anything. A `\n` or the
/// terminator answers `false`, and so does a `;`, `#` or `//` comment
/// marker. This walk is independent of the scanner's own comment settings.
pub fn token_available(input: &[u8], start: usize) -> bool {
    let mut cursor = Cursor::at(input, start);
    loop {
        let b = cursor.current();
        if b == b'\n' || cursor.is_eof() {
            return false;
        }
        if b > b' ' {
            return !CommentStyles::LOOKAHEAD.opens_line_comment(b, cursor.peek());
        }
        cursor.advance();
    }
}

#[cfg(test)]
mod tests;
