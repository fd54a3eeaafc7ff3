//! Stateful tokenizer front-end for scene scripts and console commands.
//!
//! Wraps the allocation-free scanner from `scn_lexer_core` with:
//! - [`TextTokenizer`]: a cursor over a borrowed buffer with a bounded
//!   current-token buffer, same-line lookahead and error reporting
//! - [`Command`]: console command-line splitting into `argv`
//! - [`TokenizerConfig`]: break set, comment styles, token length and
//!   overflow policy presets
//!
//! Diagnostics go through `tracing`. Call [`init_tracing`] from a binary to
//! see them (`RUST_LOG=scn_tokenizer=trace`).

mod command;
mod config;
mod error;
mod tokenizer;

pub use command::{split_commands, Command, COMMAND_MAX_ARGC, COMMAND_MAX_LENGTH};
pub use config::{OverflowPolicy, TokenizerConfig, DEFAULT_MAX_TOKEN_LEN};
pub use error::{CommandError, TokenizeError};
pub use tokenizer::{TextTokenizer, Tokens};

pub use scn_lexer_core::{BreakSet, CommentStyles, ScannedToken, TokenKind};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times; only the first call does anything, and only
/// when `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Report a formatted script error through a [`TextTokenizer`].
///
/// Expands to `tokenizer.error(format_args!(...))`, which logs the message
/// with the current line and returns a [`TokenizeError::Script`].
#[macro_export]
macro_rules! script_error {
    ($tokenizer:expr, $($arg:tt)+) => {
        $tokenizer.error(::std::format_args!($($arg)+))
    };
}
