pub mod engine;
pub mod literals;
mod scan_rules;

/// Classification of a scanned span.
///
/// The discriminants are stable: they double as the raw kind handed to
/// `cstree` (see [`engine`]).
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    /// Illegal or unrecognized span
    Illegal,
    EndOfInput,
    Whitespace,
    /// Raw leftover text once structured scanning bails out
    Unparsed,
    /// 0, 1, 2, ..., n
    NaturalNumber,
    /// ..., -1, 0, 1, ...
    Integer,
    /// 3.1415
    FixedNumber,
    /// 3.233e9
    FloatingPointNumber,
    /// Bare or backtick-quoted column, table, alias, procedure, variable, etc.
    Identifier,
    /// Single- or double-quoted string literal
    QuotedString,
    Asterisk,
    Comma,
    Period,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Equals,
    Select,
    Insert,
    From,
    Partition,
    As,
    StraightJoin,
    CrossJoin,
    InnerJoin,
    Oj,
    NaturalJoin,
    NaturalLeftJoin,
    NaturalLeftOuterJoin,
    NaturalRightJoin,
    NaturalRightOuterJoin,
    LeftJoin,
    LeftOuterJoin,
    RightJoin,
    RightOuterJoin,
    UseIndex,
    UseKey,
    IgnoreIndex,
    IgnoreKey,
    ForceIndex,
    ForceKey,
    ForJoin,
    ForOrderBy,
    ForGroupBy,
    Where,
    Values,
    Set,
    Default,
    All,
    Distinct,
    HighPriority,
    LowPriority,
    Delayed,
    MaxStatementTime,
    SqlSmallResult,
    SqlBigResult,
    SqlBufferResult,
    SqlCache,
    SqlNoCache,
    SqlCalcFoundRows,
    On,
    Using,
    OrderBy,
    GroupBy,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: &'static [TokenKind] = &[
        TokenKind::Illegal,
        TokenKind::EndOfInput,
        TokenKind::Whitespace,
        TokenKind::Unparsed,
        TokenKind::NaturalNumber,
        TokenKind::Integer,
        TokenKind::FixedNumber,
        TokenKind::FloatingPointNumber,
        TokenKind::Identifier,
        TokenKind::QuotedString,
        TokenKind::Asterisk,
        TokenKind::Comma,
        TokenKind::Period,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Equals,
        TokenKind::Select,
        TokenKind::Insert,
        TokenKind::From,
        TokenKind::Partition,
        TokenKind::As,
        TokenKind::StraightJoin,
        TokenKind::CrossJoin,
        TokenKind::InnerJoin,
        TokenKind::Oj,
        TokenKind::NaturalJoin,
        TokenKind::NaturalLeftJoin,
        TokenKind::NaturalLeftOuterJoin,
        TokenKind::NaturalRightJoin,
        TokenKind::NaturalRightOuterJoin,
        TokenKind::LeftJoin,
        TokenKind::LeftOuterJoin,
        TokenKind::RightJoin,
        TokenKind::RightOuterJoin,
        TokenKind::UseIndex,
        TokenKind::UseKey,
        TokenKind::IgnoreIndex,
        TokenKind::IgnoreKey,
        TokenKind::ForceIndex,
        TokenKind::ForceKey,
        TokenKind::ForJoin,
        TokenKind::ForOrderBy,
        TokenKind::ForGroupBy,
        TokenKind::Where,
        TokenKind::Values,
        TokenKind::Set,
        TokenKind::Default,
        TokenKind::All,
        TokenKind::Distinct,
        TokenKind::HighPriority,
        TokenKind::LowPriority,
        TokenKind::Delayed,
        TokenKind::MaxStatementTime,
        TokenKind::SqlSmallResult,
        TokenKind::SqlBigResult,
        TokenKind::SqlBufferResult,
        TokenKind::SqlCache,
        TokenKind::SqlNoCache,
        TokenKind::SqlCalcFoundRows,
        TokenKind::On,
        TokenKind::Using,
        TokenKind::OrderBy,
        TokenKind::GroupBy,
    ];

    pub fn id(self) -> u32 {
        self as u32
    }

    /// Canonical text of fixed-text kinds (punctuation and keywords).
    pub fn text(self) -> Option<&'static str> {
        use literals::*;

        let text = match self {
            TokenKind::Asterisk => "*",
            TokenKind::Comma => ",",
            TokenKind::Period => ".",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Equals => "=",
            TokenKind::Select => SELECT,
            TokenKind::Insert => INSERT,
            TokenKind::From => FROM,
            TokenKind::Partition => PARTITION,
            TokenKind::As => AS,
            TokenKind::StraightJoin => STRAIGHT_JOIN,
            TokenKind::CrossJoin => CROSS_JOIN,
            TokenKind::InnerJoin => INNER_JOIN,
            TokenKind::Oj => OJ,
            TokenKind::NaturalJoin => NATURAL_JOIN,
            TokenKind::NaturalLeftJoin => NATURAL_LEFT_JOIN,
            TokenKind::NaturalLeftOuterJoin => NATURAL_LEFT_OUTER_JOIN,
            TokenKind::NaturalRightJoin => NATURAL_RIGHT_JOIN,
            TokenKind::NaturalRightOuterJoin => NATURAL_RIGHT_OUTER_JOIN,
            TokenKind::LeftJoin => LEFT_JOIN,
            TokenKind::LeftOuterJoin => LEFT_OUTER_JOIN,
            TokenKind::RightJoin => RIGHT_JOIN,
            TokenKind::RightOuterJoin => RIGHT_OUTER_JOIN,
            TokenKind::UseIndex => USE_INDEX,
            TokenKind::UseKey => USE_KEY,
            TokenKind::IgnoreIndex => IGNORE_INDEX,
            TokenKind::IgnoreKey => IGNORE_KEY,
            TokenKind::ForceIndex => FORCE_INDEX,
            TokenKind::ForceKey => FORCE_KEY,
            TokenKind::ForJoin => FOR_JOIN,
            TokenKind::ForOrderBy => FOR_ORDER_BY,
            TokenKind::ForGroupBy => FOR_GROUP_BY,
            TokenKind::Where => WHERE,
            TokenKind::Values => VALUES,
            TokenKind::Set => SET,
            TokenKind::Default => DEFAULT,
            TokenKind::All => ALL,
            TokenKind::Distinct => DISTINCT,
            TokenKind::HighPriority => HIGH_PRIORITY,
            TokenKind::LowPriority => LOW_PRIORITY,
            TokenKind::Delayed => DELAYED,
            TokenKind::MaxStatementTime => MAX_STATEMENT_TIME,
            TokenKind::SqlSmallResult => SQL_SMALL_RESULT,
            TokenKind::SqlBigResult => SQL_BIG_RESULT,
            TokenKind::SqlBufferResult => SQL_BUFFER_RESULT,
            TokenKind::SqlCache => SQL_CACHE,
            TokenKind::SqlNoCache => SQL_NO_CACHE,
            TokenKind::SqlCalcFoundRows => SQL_CALC_FOUND_ROWS,
            TokenKind::On => ON,
            TokenKind::Using => USING,
            TokenKind::OrderBy => ORDER_BY,
            TokenKind::GroupBy => GROUP_BY,
            _ => return None,
        };

        Some(text)
    }

    pub fn from_punct(ch: char) -> Option<TokenKind> {
        let kind = match ch {
            '*' => TokenKind::Asterisk,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Period,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '=' => TokenKind::Equals,
            _ => return None,
        };

        Some(kind)
    }

    pub fn is_keyword(self) -> bool {
        self >= TokenKind::Select
    }

    pub fn is_punctuation(self) -> bool {
        (TokenKind::Asterisk..=TokenKind::Equals).contains(&self)
    }

    pub fn is_literal(self) -> bool {
        (TokenKind::NaturalNumber..=TokenKind::QuotedString).contains(&self)
    }
}

/// A keyword literal bound to its kind, matched case-insensitively as a
/// prefix of the remaining input.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ScanPattern {
    pub kind: TokenKind,
    pub pattern: &'static str,
}

impl ScanPattern {
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Case-insensitive prefix test against `source`.
    pub fn is_prefix_of(&self, source: &str) -> bool {
        source
            .get(..self.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(self.pattern))
    }
}
