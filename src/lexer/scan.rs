//! Per-character token recognition.

use super::Lexer;
use crate::token::{keyword, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Scans exactly one token starting at the current position.
    ///
    /// `start` has already been set to `current` by the caller
    /// ([`Lexer::scan_tokens`]). Returns `None` for constructs that don't
    /// produce a token (comments are handled by the caller before this is
    /// reached) and for characters that were skipped after reporting an
    /// error.
    pub(super) fn scan_token(&mut self) -> Option<Token> {
        let c = self.advance()?;
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '!' => {
                if self.advance_if('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                }
            }
            '=' => {
                if self.advance_if('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }
            '<' => {
                if self.advance_if('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.advance_if('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            '/' => {
                if self.skip_line_comment() {
                    return None;
                }
                TokenKind::Slash
            }
            ' ' | '\r' | '\t' => return None,
            '\n' => {
                self.line += 1;
                return None;
            }
            '"' => return self.scan_string(),
            c if c.is_ascii_digit() => return Some(self.scan_number()),
            c if is_identifier_start(c) => return Some(self.scan_identifier()),
            other => {
                self.diagnostics
                    .error(self.line, format!("Unexpected character: {other}"));
                return None;
            }
        };
        Some(self.make_token(kind))
    }

    /// Scans the remainder of a string literal after the opening `"` has
    /// been consumed.
    ///
    /// Tracks newlines inside the string so `line` stays accurate. Reports
    /// "Unterminated string." and emits no token if EOF is reached before
    /// the closing quote.
    fn scan_string(&mut self) -> Option<Token> {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.diagnostics.error(self.line, "Unterminated string.");
            return None;
        }

        // Consume the closing quote.
        self.advance();

        let lexeme = self.current_lexeme();
        let value = lexeme[1..lexeme.len() - 1].to_string();
        Some(Token::new(TokenKind::String(value), lexeme, self.line))
    }

    /// Scans a number literal: digits, optionally followed by `.` and more
    /// digits. No leading sign, no exponent form, no trailing `.` (a `.`
    /// not followed by a digit is left for the caller to re-scan as `Dot`).
    fn scan_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume the '.'
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme = self.current_lexeme();
        let value: f64 = lexeme
            .parse()
            .expect("a number lexeme built from ascii digits and at most one '.' always parses");
        Token::new(TokenKind::Number(value), lexeme, self.line)
    }

    /// Scans an identifier or keyword: a letter/`_` followed by any number
    /// of alphanumerics/`_`.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(is_identifier_continue) {
            self.advance();
        }

        let lexeme = self.current_lexeme();
        let kind = keyword(lexeme).unwrap_or_else(|| TokenKind::Identifier(lexeme.to_string()));
        Token::new(kind, lexeme, self.line)
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.current_lexeme(), self.line)
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::super::Lexer;
    use crate::diagnostics::Diagnostics;
    use crate::token::TokenKind;

    fn scan_all(source: &str) -> Vec<TokenKind> {
        let mut diagnostics = Diagnostics::new();
        let mut lexer = Lexer::new(source, &mut diagnostics);
        lexer
            .scan_tokens()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn scans_number_literal() {
        let kinds = scan_all("42");
        assert_eq!(kinds, vec![TokenKind::Number(42.0), TokenKind::Eof]);
    }

    #[test]
    fn scans_fractional_number_literal() {
        let kinds = scan_all("3.5");
        assert_eq!(kinds, vec![TokenKind::Number(3.5), TokenKind::Eof]);
    }

    #[test]
    fn number_with_trailing_dot_and_no_digit_splits_into_number_and_dot() {
        let kinds = scan_all("3.");
        assert_eq!(
            kinds,
            vec![TokenKind::Number(3.0), TokenKind::Dot, TokenKind::Eof]
        );
    }

    #[test]
    fn scans_string_literal() {
        let kinds = scan_all("\"hello\"");
        assert_eq!(
            kinds,
            vec![TokenKind::String("hello".to_string()), TokenKind::Eof]
        );
    }

    #[test]
    fn unterminated_string_reports_error_and_emits_no_token() {
        let mut diagnostics = Diagnostics::new();
        let mut lexer = Lexer::new("\"unterminated", &mut diagnostics);
        let tokens = lexer.scan_tokens();
        assert_eq!(tokens.into_iter().map(|t| t.kind).collect::<Vec<_>>(), vec![TokenKind::Eof]);
        assert!(diagnostics.had_error());
    }

    #[test]
    fn scans_identifier_and_keyword() {
        let kinds = scan_all("foo var");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier("foo".to_string()),
                TokenKind::Var,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn two_char_operators_prefer_the_longer_form() {
        let kinds = scan_all("!= == <= >=");
        assert_eq!(
            kinds,
            vec![
                TokenKind::BangEqual,
                TokenKind::EqualEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn unexpected_character_is_reported_and_skipped() {
        let mut diagnostics = Diagnostics::new();
        let mut lexer = Lexer::new("1 @ 2", &mut diagnostics);
        let kinds: Vec<_> = lexer.scan_tokens().into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Number(1.0),
                TokenKind::Number(2.0),
                TokenKind::Eof
            ]
        );
        assert!(diagnostics.had_error());
    }
}
