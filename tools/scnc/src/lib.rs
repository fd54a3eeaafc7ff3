//! Driver for the scene/command tokenizer.
//!
//! The binary in `main.rs` only parses arguments and dispatches here.

pub mod commands;
