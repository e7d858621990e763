//! Common enums shared between the emitter and its callers.

use serde::Deserialize;

/// Line terminator used by the emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum NewLineKind {
    #[default]
    #[serde(rename = "lf", alias = "LF")]
    LineFeed,
    #[serde(rename = "crlf", alias = "CRLF")]
    CarriageReturnLineFeed,
}

impl NewLineKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LineFeed => "\n",
            Self::CarriageReturnLineFeed => "\r\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_line_text() {
        assert_eq!(NewLineKind::default().as_str(), "\n");
        assert_eq!(NewLineKind::CarriageReturnLineFeed.as_str(), "\r\n");
    }
}
