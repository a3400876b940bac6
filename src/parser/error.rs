//! Parse error type used for the recursive-descent `?`-based control flow.
//!
//! `ParseError` never escapes the [`crate::parser`] module as a public
//! type: it is caught at the `declaration` loop (the "catch point" the
//! Design Notes call for), reported through
//! [`crate::diagnostics::Diagnostics::error_at_token`], and converted into
//! a call to [`super::Parser::synchronize`]. Nothing above the parser ever
//! sees it.

use crate::token::Token;

/// A syntax error anchored to the token where parsing could not continue.
#[derive(Debug)]
pub(super) struct ParseError {
    pub(super) token: Token,
    pub(super) message: String,
}

impl ParseError {
    pub(super) fn new(token: Token, message: impl Into<String>) -> Self {
        ParseError {
            token,
            message: message.into(),
        }
    }
}
