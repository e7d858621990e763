//! Diagnostics produced while scanning and parsing.
//!
//! The pipeline never fails on malformed input. Instead the scanner and parser
//! record diagnostics that callers may report or ignore. Diagnostics carry no
//! source positions.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl DiagnosticCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const UNTERMINATED_STRING_LITERAL: u32 = 1001;
    pub const UNMATCHED_CLOSING_BRACE: u32 = 2001;
    pub const CLASS_BODY_NOT_CLOSED: u32 = 2002;
    pub const METHOD_BODY_NOT_CLOSED: u32 = 2003;
    pub const METHOD_WITHOUT_BODY: u32 = 2004;
    pub const DUPLICATE_METHOD: u32 = 2005;
    pub const CLASS_WITHOUT_BODY: u32 = 2006;
}

pub mod diagnostic_messages {
    pub const UNTERMINATED_STRING_LITERAL: &str = "Unterminated string literal.";
    pub const UNMATCHED_CLOSING_BRACE: &str = "Closing brace has no matching opening brace.";
    pub const CLASS_BODY_NOT_CLOSED: &str = "Body of class '{0}' is never closed.";
    pub const METHOD_BODY_NOT_CLOSED: &str = "Body of method '{0}' is never closed.";
    pub const METHOD_WITHOUT_BODY: &str = "Method '{0}' has no body.";
    pub const DUPLICATE_METHOD: &str = "Duplicate method '{0}' in class '{1}'.";
    pub const CLASS_WITHOUT_BODY: &str = "Class '{0}' has no body.";
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::UNTERMINATED_STRING_LITERAL,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::UNTERMINATED_STRING_LITERAL,
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNMATCHED_CLOSING_BRACE,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::UNMATCHED_CLOSING_BRACE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CLASS_BODY_NOT_CLOSED,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::CLASS_BODY_NOT_CLOSED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::METHOD_BODY_NOT_CLOSED,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::METHOD_BODY_NOT_CLOSED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::METHOD_WITHOUT_BODY,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::METHOD_WITHOUT_BODY,
    },
    DiagnosticMessage {
        code: diagnostic_codes::DUPLICATE_METHOD,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::DUPLICATE_METHOD,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CLASS_WITHOUT_BODY,
        category: DiagnosticCategory::Warning,
        message: diagnostic_messages::CLASS_WITHOUT_BODY,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, code: u32) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            message_text: message.into(),
        }
    }

    /// Build a diagnostic from the message table, substituting `{0}`, `{1}`, ...
    pub fn from_code(code: u32, args: &[&str]) -> Self {
        let entry = DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code);
        let category = entry.map_or(DiagnosticCategory::Error, |m| m.category);
        let template = entry.map_or("Unknown diagnostic.", |m| m.message);
        Self {
            category,
            code,
            message_text: format_message(template, args),
        }
    }
}

pub fn get_message_template(code: u32) -> Option<&'static str> {
    DIAGNOSTIC_MESSAGES
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.message)
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
