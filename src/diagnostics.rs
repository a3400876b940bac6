//! Error-reporting channel shared by the lexer, parser, and interpreter.
//!
//! This module provides [`Diagnostics`], the "session handle" the three
//! pipeline phases share instead of relying on process-global error flags.
//! Lexer/parser diagnostics are line- or token-scoped static errors;
//! runtime diagnostics are reported separately so the host can tell static
//! errors (exit 65) apart from runtime failures (exit 70).
//!
//! # See Also
//!
//! * [`crate::lexer`] - reports via [`Diagnostics::error`]
//! * [`crate::parser`] - reports via [`Diagnostics::error_at_token`]
//! * [`crate::interpreter`] - reports via [`Diagnostics::runtime_error`]

use crate::interpreter::RuntimeError;
use crate::token::{Token, TokenKind};

/// Tracks whether a run produced static or runtime errors, and prints
/// diagnostics to stderr in the format the host's exit-code contract
/// expects.
#[derive(Debug, Default)]
pub struct Diagnostics {
    had_error: bool,
    had_runtime_error: bool,
}

impl Diagnostics {
    /// Creates a fresh, all-clear diagnostics handle.
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// `true` if any lexer or parser error was reported since the last
    /// [`Diagnostics::reset`].
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// `true` if a runtime error was ever reported. Unlike `had_error`,
    /// this is never cleared by [`Diagnostics::reset`] — the REPL host
    /// resets per prompt line but a runtime error stays "on the record"
    /// for the whole process, per spec.
    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    /// Clears `had_error` for the next REPL prompt line. Deliberately does
    /// not clear `had_runtime_error`.
    pub fn reset(&mut self) {
        self.had_error = false;
    }

    /// Reports a line-scoped lexer or parser error.
    ///
    /// Format: `[line N] Error: MESSAGE`.
    pub fn error(&mut self, line: usize, message: impl AsRef<str>) {
        self.report(line, "", message.as_ref());
    }

    /// Reports a parse error anchored to a specific token.
    ///
    /// Format: `[line N] Error at end: MESSAGE` when `token` is `EOF`,
    /// otherwise `[line N] Error at 'LEXEME': MESSAGE`.
    pub fn error_at_token(&mut self, token: &Token, message: impl AsRef<str>) {
        let location = if token.kind == TokenKind::Eof {
            " at end".to_string()
        } else {
            format!(" at '{}'", token.lexeme)
        };
        self.report(token.line, &location, message.as_ref());
    }

    /// Reports a runtime error, using the offending token's line.
    ///
    /// Format: `[line N] MESSAGE`. Sets `had_runtime_error`, not `had_error`.
    pub fn runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("{}\n[line {}]", error.message, error.token.line);
        self.had_runtime_error = true;
    }

    fn report(&mut self, line: usize, location: &str, message: &str) {
        eprintln!("[line {line}] Error{location}: {message}");
        self.had_error = true;
    }
}
