//! Lexical analyzer for the language.
//!
//! This module provides the [`Lexer`] struct which converts source text
//! into a stream of [`Token`]s for the parser.
//!
//! # Overview
//!
//! The lexer performs a single forward scan over the source, tracked by
//! two cursors (`start`, the beginning of the current lexeme, and
//! `current`, the next unconsumed character). At the top of each loop
//! iteration `start` is reset to `current` and one token is scanned.
//!
//! The lexer never fails hard: malformed input (an unexpected character,
//! an unterminated string) is reported through the shared
//! [`crate::diagnostics::Diagnostics`] channel and the offending input is
//! skipped, so scanning always runs to completion and always returns a
//! token list ending in `EOF`.
//!
//! # Module Structure
//!
//! - [`cursor`] - Character-at-a-time navigation (test-only re-export)
//! - [`skip`] - Line-comment skipping
//! - [`scan`] - Per-character token recognition
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Consumes the token stream this module produces

mod cursor;
mod scan;
mod skip;

use crate::diagnostics::Diagnostics;
use crate::token::{Token, TokenKind};

/// A lexical analyzer that tokenizes source text.
///
/// Borrows both the source text and the [`Diagnostics`] sink it reports
/// through; designed to be used once per source string (a whole file, or
/// a single REPL line).
pub struct Lexer<'a> {
    source: &'a str,
    start: usize,
    current: usize,
    line: usize,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over `source`, reporting errors through
    /// `diagnostics`.
    pub fn new(source: &'a str, diagnostics: &'a mut Diagnostics) -> Self {
        Lexer {
            source,
            start: 0,
            current: 0,
            line: 1,
            diagnostics,
        }
    }

    /// Scans the entire input and returns its tokens, always ending with
    /// exactly one `EOF` token.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            self.start = self.current;
            if let Some(token) = self.scan_token() {
                tokens.push(token);
            }
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.line));
        tokens
    }
}
