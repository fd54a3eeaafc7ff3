//! Low-level scanner for scene scripts and console command lines.
//!
//! Turns a caller-owned byte buffer into whitespace- and comment-aware
//! tokens: quoted strings, single-byte break characters, and bare words.
//! The buffer ends at its first `0x00` byte (or at the end of the slice),
//! matching the 0-terminated strings these scripts are traditionally
//! handed around as.
//!
//! This crate is allocation-free during scanning except for the bounded
//! [`TokenBuf`] the caller supplies. It never logs and never returns
//! errors: malformed input degrades to truncation or end of input. The
//! stateful front-end with logging and overflow policies lives in
//! `scn_tokenizer`.
//!
//! # Example
//!
//! ```
//! use scn_lexer_core::{scan_next, BreakSet, CommentStyles, ScanOptions, TokenBuf};
//!
//! let options = ScanOptions::new(BreakSet::scene(), CommentStyles::SCENE);
//! let mut out = TokenBuf::new(1024);
//! let tok = scan_next(b"{ \"hello world\" }", 1, options, &mut out).unwrap();
//! assert_eq!(out.as_bytes(), b"hello world");
//! assert_eq!(tok.end, 15);
//! ```

mod break_set;
mod comment;
mod cursor;
mod scanner;
mod token_buf;

pub use break_set::{BreakSet, COMMAND_BREAKS, SCENE_BREAKS};
pub use comment::CommentStyles;
pub use cursor::Cursor;
pub use scanner::{scan_next, token_available, ScanOptions, ScannedToken, Scanner, TokenKind};
pub use token_buf::TokenBuf;
