//! Token types produced by the scanner.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Number,
    String,
    #[serde(rename = "LPAREN")]
    LParen,
    #[serde(rename = "RPAREN")]
    RParen,
    #[serde(rename = "LBRACE")]
    LBrace,
    #[serde(rename = "RBRACE")]
    RBrace,
    Operator,
    Identifier,
    Keyword,
    StatementEnd,
    EndOfInput,
}

impl TokenKind {
    /// Text of tokens whose kind alone determines it.
    pub const fn fixed_text(self) -> Option<&'static str> {
        match self {
            Self::LParen => Some("("),
            Self::RParen => Some(")"),
            Self::LBrace => Some("{"),
            Self::RBrace => Some("}"),
            _ => None,
        }
    }

    pub const fn from_punctuation(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            '{' => Some(Self::LBrace),
            '}' => Some(Self::RBrace),
            _ => None,
        }
    }

    pub const fn is_brace(self) -> bool {
        matches!(self, Self::LBrace | Self::RBrace)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Class,
    Function,
    Prototype,
    Static,
    Let,
    Var,
    Typeof,
    Const,
    Return,
}

impl Keyword {
    pub const ALL: [Self; 9] = [
        Self::Class,
        Self::Function,
        Self::Prototype,
        Self::Static,
        Self::Let,
        Self::Var,
        Self::Typeof,
        Self::Const,
        Self::Return,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Function => "function",
            Self::Prototype => "prototype",
            Self::Static => "static",
            Self::Let => "let",
            Self::Var => "var",
            Self::Typeof => "typeof",
            Self::Const => "const",
            Self::Return => "return",
        }
    }
}

static KEYWORDS: Lazy<FxHashMap<&'static str, Keyword>> =
    Lazy::new(|| Keyword::ALL.iter().map(|kw| (kw.as_str(), *kw)).collect());

/// Look up a reserved word. Matching is exact and case-sensitive.
pub fn text_to_keyword(text: &str) -> Option<Keyword> {
    KEYWORDS.get(text).copied()
}

/// Payload of a token.
///
/// A number keeps the digits it was scanned from next to its value, so
/// `007` or a run too long for `f64` is reproduced exactly.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    Text(String),
    Number { value: f64, text: String },
}

impl TokenValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) | Self::Number { text, .. } => text,
        }
    }
}

// Numbers serialize as JSON numbers; the source text only feeds `Token::text`.
impl Serialize for TokenValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Number { value, .. } => serializer.serialize_f64(*value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<TokenValue>,
}

impl Token {
    pub const fn bare(kind: TokenKind) -> Self {
        Self { kind, value: None }
    }

    pub fn text_token(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(TokenValue::Text(text.into())),
        }
    }

    /// Number token for a run of ASCII digits. A run too long for `f64`
    /// saturates to infinity; its text is kept as written.
    pub fn number(text: impl Into<String>) -> Self {
        let text = text.into();
        let value = text.parse::<f64>().unwrap_or(f64::INFINITY);
        Self {
            kind: TokenKind::Number,
            value: Some(TokenValue::Number { value, text }),
        }
    }


    pub const fn end_of_input() -> Self {
        Self::bare(TokenKind::EndOfInput)
    }

    /// Literal text of the token: its value, or the fixed text of its kind.
    pub fn text(&self) -> Cow<'_, str> {
        match &self.value {
            Some(value) => Cow::Borrowed(value.as_str()),
            None => Cow::Borrowed(self.kind.fixed_text().unwrap_or("")),
        }
    }

    pub fn keyword(&self) -> Option<Keyword> {
        if self.kind != TokenKind::Keyword {
            return None;
        }
        match &self.value {
            Some(TokenValue::Text(text)) => text_to_keyword(text),
            _ => None,
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
