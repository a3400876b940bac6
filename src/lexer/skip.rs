//! Line-comment skipping.

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Called right after a single `/` has been consumed by
    /// [`Lexer::scan_token`]. If the next character is a second `/`,
    /// consumes it and every character through (but not including) the
    /// next newline or end of input, and returns `true` (the `/` was the
    /// start of a line comment, not a `SLASH` token). Returns `false`
    /// (leaving the cursor untouched) if no second `/` follows.
    pub(super) fn skip_line_comment(&mut self) -> bool {
        if self.peek() != Some('/') {
            return false;
        }
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::Lexer;
    use crate::diagnostics::Diagnostics;

    #[test]
    fn skip_line_comment_stops_before_newline() {
        let mut diagnostics = Diagnostics::new();
        // Simulate scan_token having already consumed the first '/'.
        let mut lexer = Lexer::new("/a comment\nrest", &mut diagnostics);
        assert!(lexer.skip_line_comment());
        assert_eq!(lexer.peek(), Some('\n'));
    }

    #[test]
    fn skip_line_comment_false_without_a_second_slash() {
        let mut diagnostics = Diagnostics::new();
        let mut lexer = Lexer::new(" 1", &mut diagnostics);
        assert!(!lexer.skip_line_comment());
    }
}
