mod cursor;
mod error;
mod options;
mod scanner;
mod stream;

pub use cursor::Cursor;
pub use error::{OptionsError, StreamError};
pub use options::ScannerOptions;
pub use scanner::{Scanner, ScannerScope, Tokens};
pub use stream::TokenStream;

pub use rdb_sql::TokenKind;

/// A classified span of the query.
///
/// `text` is the exact input slice, casing and escapes untouched; it is
/// empty only for [`TokenKind::EndOfInput`].
#[derive(PartialEq, Eq, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, offset: usize, text: impl Into<String>) -> Self {
        Self { kind, offset, text: text.into() }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn end(&self) -> usize {
        self.offset + self.len()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
