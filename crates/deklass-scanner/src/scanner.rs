//! Single-pass scanner.
//!
//! The scanner walks the input one character at a time, growing a lexeme
//! buffer, and emits a token as soon as the lexeme is maximal: the next
//! character would no longer belong to the same class.
//!
//! ```text
//! class Book { addBook() { return 1; } }
//! ```
//!
//! scans to
//!
//! ```text
//! KEYWORD(class) IDENTIFIER(Book) { IDENTIFIER(addBook) ( ) {
//! KEYWORD(return) NUMBER(1) STATEMENT_END(;) } } END_OF_INPUT
//! ```
//!
//! Scanning is total: unknown characters are glued onto the neighbouring word
//! and an unterminated string is emitted as-is with a warning.

use crate::char_codes::{
    STATEMENT_END, STRING_DELIMITER, is_digit, is_operator_char, is_word_char, is_word_like,
};
use crate::token::{Token, TokenKind, text_to_keyword};
use deklass_common::Diagnostic;
use deklass_common::diagnostics::diagnostic_codes;
use tracing::{debug, trace, warn};

/// Tokenize `text`. The result always ends with one `EndOfInput` token.
pub fn tokenize(text: &str) -> Vec<Token> {
    ScannerState::new(text).scan()
}

pub struct ScannerState {
    chars: Vec<char>,
    pos: usize,
    lexeme: String,
    in_string: bool,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl ScannerState {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            lexeme: String::new(),
            in_string: false,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn get_diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Scan the whole input and hand over the token sequence.
    ///
    /// A scanner is single-use; calling `scan` again yields only `EndOfInput`.
    pub fn scan(&mut self) -> Vec<Token> {
        while self.pos < self.chars.len() {
            let ch = self.chars[self.pos];
            let next = self.chars.get(self.pos + 1).copied();
            self.pos += 1;
            self.scan_char(ch, next);
        }

        if self.in_string {
            self.in_string = false;
            let partial = std::mem::take(&mut self.lexeme);
            warn!(text = %partial, "unterminated string literal");
            self.diagnostics.push(Diagnostic::from_code(
                diagnostic_codes::UNTERMINATED_STRING_LITERAL,
                &[],
            ));
            self.push(Token::text_token(TokenKind::String, partial));
        }

        self.push(Token::end_of_input());
        debug!(count = self.tokens.len(), "scanned tokens");
        std::mem::take(&mut self.tokens)
    }

    fn scan_char(&mut self, ch: char, next: Option<char>) {
        if ch == STRING_DELIMITER {
            self.lexeme.push(ch);
            if self.in_string {
                let text = std::mem::take(&mut self.lexeme);
                self.push(Token::text_token(TokenKind::String, text));
            }
            self.in_string = !self.in_string;
            return;
        }

        if self.in_string {
            self.lexeme.push(ch);
            return;
        }

        // Every class is flushed before a character of another class arrives,
        // so whitespace only ever meets an empty lexeme.
        if ch.is_whitespace() {
            return;
        }

        self.lexeme.push(ch);

        if let Some(kind) = TokenKind::from_punctuation(ch) {
            self.lexeme.clear();
            self.push(Token::bare(kind));
            return;
        }

        if ch == STATEMENT_END {
            let text = std::mem::take(&mut self.lexeme);
            self.push(Token::text_token(TokenKind::StatementEnd, text));
            return;
        }

        if self.lexeme.chars().all(is_digit) {
            if !next.is_some_and(is_digit) {
                self.emit_number();
            }
            return;
        }

        if self.lexeme.chars().all(is_operator_char) {
            if !next.is_some_and(is_operator_char) {
                let text = std::mem::take(&mut self.lexeme);
                self.push(Token::text_token(TokenKind::Operator, text));
            }
            return;
        }

        if !next.is_some_and(is_word_like) {
            self.emit_word();
        }
    }

    fn emit_number(&mut self) {
        let text = std::mem::take(&mut self.lexeme);
        self.push(Token::number(text));
    }

    fn emit_word(&mut self) {
        let text = std::mem::take(&mut self.lexeme);
        let kind = if text.chars().all(is_word_char) && text_to_keyword(&text).is_some() {
            TokenKind::Keyword
        } else {
            if !text.chars().all(is_word_char) {
                trace!(lexeme = %text, "absorbed stray characters into identifier");
            }
            TokenKind::Identifier
        };
        self.push(Token::text_token(kind, text));
    }

    fn push(&mut self, token: Token) {
        trace!(kind = ?token.kind, text = %token.text(), "token");
        self.tokens.push(token);
    }
}

#[cfg(test)]
#[path = "../tests/scanner_impl_tests.rs"]
mod tests;
