//! `scnc` subcommands.

use std::fmt::Write as _;

use scn_tokenizer::{
    split_commands, Command, CommandError, OverflowPolicy, TextTokenizer, TokenKind,
    TokenizeError, TokenizerConfig,
};

/// Options for `scnc lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Use the console-command preset instead of the scene preset.
    pub command_mode: bool,
    pub max_len: Option<usize>,
    pub overflow: OverflowPolicy,
    /// Accepted for `get_token` compatibility; it does not change the output.
    pub cross_line: bool,
}

impl LexOptions {
    /// Parse `lex` flags. Returns the options and the first non-flag argument.
    pub fn parse(args: &[String]) -> Result<(Self, Option<String>), String> {
        let mut options = Self::default();
        let mut path = None;
        for arg in args {
            if arg == "--command" {
                options.command_mode = true;
            } else if arg == "--cross-line" {
                options.cross_line = true;
            } else if arg == "--reject-overflow" {
                options.overflow = OverflowPolicy::Reject;
            } else if let Some(policy) = arg.strip_prefix("--overflow=") {
                options.overflow = policy.parse()?;
            } else if let Some(n) = arg.strip_prefix("--max-len=") {
                let n = n
                    .parse::<usize>()
                    .map_err(|e| format!("invalid --max-len '{n}': {e}"))?;
                options.max_len = Some(n);
            } else if arg.starts_with('-') {
                return Err(format!("unknown option '{arg}'"));
            } else if path.is_none() {
                path = Some(arg.clone());
            }
        }
        Ok((options, path))
    }

    pub fn config(&self) -> TokenizerConfig {
        let base = if self.command_mode {
            TokenizerConfig::command()
        } else {
            TokenizerConfig::scene()
        };
        let base = base.with_overflow(self.overflow);
        match self.max_len {
            Some(n) => base.with_max_token_len(n),
            None => base,
        }
    }
}

/// Render one line per token: kind, byte offset, escaped text.
pub fn render_tokens(source: &[u8], options: &LexOptions) -> Result<String, TokenizeError> {
    let mut tokenizer = TextTokenizer::with_buffer(options.config(), source);
    let mut out = String::new();
    while let Some(tok) = tokenizer.next_token()? {
        let kind = match tok.kind {
            TokenKind::Word => "word",
            TokenKind::Break => "break",
            TokenKind::Quoted { terminated: true } => "quoted",
            TokenKind::Quoted { terminated: false } => "quoted*",
        };
        let marker = if tok.truncated { " (truncated)" } else { "" };
        let _ = writeln!(
            out,
            "{kind:<8} {:>6} \"{}\"{marker}",
            tok.start,
            tokenizer.current_token_str().escape_debug()
        );
    }
    Ok(out)
}

/// Render `argc`, each `argv` entry and `arg_s` for one command line.
pub fn render_command(line: &str) -> Result<String, CommandError> {
    let command = Command::tokenize(line)?;
    let mut out = String::new();
    let _ = writeln!(out, "argc  {}", command.argc());
    for (i, arg) in command.args().iter().enumerate() {
        let _ = writeln!(out, "argv[{i}] \"{}\"", arg.escape_debug());
    }
    let _ = writeln!(out, "args  \"{}\"", command.arg_s().escape_debug());
    Ok(out)
}

/// `scnc lex <file>`.
pub fn lex_file(path: &str, options: &LexOptions) {
    let source = read_file(path);
    match render_tokens(&source, options) {
        Ok(rendered) => print!("{rendered}"),
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

/// `scnc cmd <text>`: each `;`/newline separated command is shown in turn.
pub fn tokenize_commands(text: &str) {
    let mut failed = false;
    for line in split_commands(text) {
        match render_command(line) {
            Ok(rendered) => {
                println!("> {line}");
                print!("{rendered}");
            }
            Err(e) => {
                eprintln!("> {line}: {e}");
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}

fn read_file(path: &str) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(content) => {
            tracing::debug!(path, len = content.len(), "read script");
            content
        }
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
