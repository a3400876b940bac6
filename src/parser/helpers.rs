//! Token navigation shared by every grammar-production method.

use super::error::ParseError;
use super::Parser;
use crate::token::{Token, TokenKind};

impl<'a> Parser<'a> {
    /// Returns a reference to the current (not-yet-consumed) token.
    pub(super) fn peek(&self) -> &Token {
        // `new` requires a non-empty token list ending in EOF, and
        // `advance` never steps past it, so `pos` is always in bounds.
        &self.tokens[self.pos]
    }

    /// Returns a reference to the most recently consumed token.
    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.pos - 1]
    }

    /// `true` once the current token is `EOF`.
    pub(super) fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// `true` if the current token's kind matches `kind`, without consuming it.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        !self.is_at_end() && &self.peek().kind == kind
    }

    /// Consumes and returns the current token, unless already at `EOF`.
    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    /// If the current token matches any of `kinds`, consumes it and
    /// returns `true`. Otherwise leaves the cursor untouched.
    pub(super) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// Consumes the current token if it matches `kind`, else reports a
    /// [`ParseError`] anchored to the current token.
    pub(super) fn consume(
        &mut self,
        kind: TokenKind,
        message: impl Into<String>,
    ) -> Result<Token, ParseError> {
        if self.check(&kind) {
            Ok(self.advance().clone())
        } else {
            Err(ParseError::new(self.peek().clone(), message))
        }
    }

    /// Consumes the current token if it is an `IDENTIFIER` of any name,
    /// else reports a [`ParseError`]. Separate from [`Parser::consume`]
    /// because `IDENTIFIER` carries a payload, so matching it against a
    /// specific `kind` value (as `consume` does) can't express "any name".
    pub(super) fn consume_identifier(&mut self, message: impl Into<String>) -> Result<Token, ParseError> {
        if matches!(self.peek().kind, TokenKind::Identifier(_)) {
            Ok(self.advance().clone())
        } else {
            Err(ParseError::new(self.peek().clone(), message))
        }
    }
}
