//! Recursive-descent parser.
//!
//! This module provides the [`Parser`] struct which converts a flat
//! [`Token`] stream into a list of [`Stmt`]s.
//!
//! # Overview
//!
//! Each grammar production gets its own method, grouped across two
//! submodules: [`expr`] (the expression precedence ladder) and [`stmt`]
//! (statements, declarations, and error recovery). A syntax error is
//! represented internally as a [`error::ParseError`] and propagated with
//! `?` up to the nearest `declaration` call, which is the one place the
//! parser catches it: it reports the error through
//! [`crate::diagnostics::Diagnostics`] and resynchronizes, so one bad
//! statement doesn't abort parsing the rest of the program.
//!
//! # Module Structure
//!
//! - [`error`] - The internal [`error::ParseError`] type
//! - [`helpers`] - Token-stream navigation
//! - [`expr`] - Expression grammar
//! - [`stmt`] - Statement grammar and `synchronize`
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream this module consumes
//! * [`crate::ast`] - The tree this module builds
//! * [`crate::interpreter`] - Consumes the statement list this module produces

mod error;
mod expr;
mod helpers;
mod stmt;

use crate::ast::Stmt;
use crate::diagnostics::Diagnostics;
use crate::token::Token;

/// Parses a flat token stream into a program (a list of statements).
///
/// Borrows the [`Diagnostics`] sink it reports syntax errors through;
/// designed to be used once per token stream (a whole file, or a single
/// REPL line).
pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> Parser<'a> {
    /// Creates a new parser over `tokens`, reporting errors through
    /// `diagnostics`. `tokens` must end with exactly one `EOF` token, as
    /// produced by [`crate::lexer::Lexer::scan_tokens`].
    pub fn new(tokens: Vec<Token>, diagnostics: &'a mut Diagnostics) -> Self {
        Parser {
            tokens,
            pos: 0,
            diagnostics,
        }
    }

    /// Parses the entire token stream into a list of top-level statements.
    ///
    /// Never fails hard: a malformed declaration is reported and skipped
    /// (see [`Parser::synchronize`]), so parsing always runs to
    /// completion. Check [`Diagnostics::had_error`] after calling this to
    /// find out whether the result is usable.
    pub fn parse(mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        statements
    }
}
