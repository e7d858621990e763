//! Tokenizer for the deklass pipeline.
//!
//! This crate provides the lexical analysis phase:
//! - `TokenKind`, `Token`, `TokenValue` - Token types
//! - `Keyword` - Reserved words recognised by the scanner and parser
//! - `ScannerState` - Single-pass scanner with one character of lookahead
//! - `char_codes` - Character classification utilities

pub mod char_codes;

pub mod token;
pub use token::{Keyword, Token, TokenKind, TokenValue, text_to_keyword};

pub mod scanner;
pub use scanner::{ScannerState, tokenize};
