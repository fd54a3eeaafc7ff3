//! Console command lines split into `argv`.
//!
//! A command line is tokenized with the command preset: the command break
//! set and no comment syntax. `argv[0]` is the command name. [`Command::arg_s`]
//! is the raw text of everything after it, starting at the second
//! argument (its opening quote included).

use std::ops::Index;

use scn_lexer_core::ScannedToken;
use tracing::{debug, error, warn};

use crate::config::TokenizerConfig;
use crate::error::CommandError;
use crate::tokenizer::TextTokenizer;

/// Size of the command-line buffer, terminator included.
pub const COMMAND_MAX_LENGTH: usize = 512;

/// Maximum number of arguments kept per command, name included.
pub const COMMAND_MAX_ARGC: usize = 64;

/// A tokenized console command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    line: String,
    argv: Vec<String>,
    /// Offset in `line` where the second argument begins; `line.len()` when
    /// there is none.
    arg_s_start: usize,
}

impl Command {
    /// Tokenize `line` with the command preset.
    pub fn tokenize(line: &str) -> Result<Self, CommandError> {
        Self::tokenize_with(line, TokenizerConfig::command())
    }

    /// Tokenize `line` with a caller-chosen configuration.
    ///
    /// Lines of `COMMAND_MAX_LENGTH - 1` bytes or more are refused. Arguments
    /// beyond [`COMMAND_MAX_ARGC`] are dropped with a warning.
    pub fn tokenize_with(line: &str, config: TokenizerConfig) -> Result<Self, CommandError> {
        if line.len() >= COMMAND_MAX_LENGTH - 1 {
            warn!(
                len = line.len(),
                "command line overflows the tokenizer buffer, skipping"
            );
            return Err(CommandError::LineTooLong {
                len: line.len(),
                max: COMMAND_MAX_LENGTH,
            });
        }

        let mut tokenizer = TextTokenizer::with_buffer(config, line.as_bytes());
        let mut argv = Vec::new();
        let mut arg_s_start = line.len();

        while argv.len() < COMMAND_MAX_ARGC {
            let Some(tok) = next_arg(&mut tokenizer) else {
                break;
            };
            if argv.len() == 1 {
                arg_s_start = tok.start;
            }
            argv.push(tokenizer.current_token_str().into_owned());
        }

        if argv.len() == COMMAND_MAX_ARGC && next_arg(&mut tokenizer).is_some() {
            warn!(
                max = COMMAND_MAX_ARGC,
                "command overflows the argument buffer, clamped"
            );
        }

        if argv.is_empty() {
            return Err(CommandError::Empty);
        }

        debug!(argc = argv.len(), command = %argv[0], "command tokenized");
        Ok(Self {
            line: line.to_owned(),
            argv,
            arg_s_start,
        })
    }

    /// Number of arguments, command name included.
    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    /// Argument `index`, or `""` when out of range.
    pub fn arg(&self, index: usize) -> &str {
        self.argv.get(index).map_or("", String::as_str)
    }

    /// All arguments, command name first.
    pub fn args(&self) -> &[String] {
        &self.argv
    }

    /// The command name (`argv[0]`).
    pub fn name(&self) -> &str {
        self.arg(0)
    }

    /// Raw text after the command name, from the start of the second
    /// argument. Empty when there is only the command name.
    pub fn arg_s(&self) -> &str {
        self.line.get(self.arg_s_start..).unwrap_or("")
    }

    /// The full command line as given.
    pub fn command_string(&self) -> &str {
        &self.line
    }

    /// Argument following the first argument (after the name) equal to `name`,
    /// ignoring ASCII case.
    ///
    /// Returns `Some("")` when `name` is the last argument, and `None` when
    /// it is absent.
    pub fn find_arg(&self, name: &str) -> Option<&str> {
        let position = self
            .argv
            .iter()
            .skip(1)
            .position(|arg| arg.eq_ignore_ascii_case(name))?;
        Some(self.arg(position + 2))
    }

    /// Integer value of [`find_arg`](Self::find_arg), or `default` when the
    /// argument is absent.
    ///
    /// The value is read like C's `atoi`: optional leading whitespace and
    /// sign, then as many digits as follow. No digits reads as 0.
    pub fn find_arg_int(&self, name: &str, default: i32) -> i32 {
        self.find_arg(name).map_or(default, parse_leading_int)
    }
}

impl Index<usize> for Command {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        self.arg(index)
    }
}

/// Leading-integer parse with `atoi` semantics; saturates on overflow.
/// Next argument, empty quoted strings included. A rejected oversized token
/// ends the command.
fn next_arg(tokenizer: &mut TextTokenizer<'_>) -> Option<ScannedToken> {
    match tokenizer.next_token() {
        Ok(tok) => tok,
        Err(err) => {
            error!(%err, "command argument rejected");
            None
        }
    }
}

fn parse_leading_int(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            (acc * 10 + i64::from(d - b'0')).min(i64::from(i32::MAX) + 1)
        });
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).unwrap_or(if negative { i32::MIN } else { i32::MAX })
}

/// Split a console buffer into individual command lines.
///
/// Commands are separated by `\n` or by `;` outside double quotes. Each piece
/// is trimmed and empty pieces are dropped.
pub fn split_commands(text: &str) -> Vec<&str> {
    let mut commands = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'"' => in_quotes = !in_quotes,
            b'\n' => {
                in_quotes = false;
                commands.push(&text[start..i]);
                start = i + 1;
            }
            b';' if !in_quotes => {
                commands.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    commands.push(&text[start..]);
    commands
        .into_iter()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}
