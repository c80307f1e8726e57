use phf::phf_map;

use crate::literals::*;
use crate::{ScanPattern, TokenKind};

// Buckets are keyed by the uppercase first character and tried in order;
// a literal must come before any shorter literal that is a prefix of it.
pub static KEYWORD_SCAN_RULE: phf::Map<char, &'static [ScanPattern]> = phf_map!{
  'A' => &[
    ScanPattern { kind: TokenKind::All, pattern: ALL },
    ScanPattern { kind: TokenKind::As, pattern: AS },
  ],
  'C' => &[
    ScanPattern { kind: TokenKind::CrossJoin, pattern: CROSS_JOIN },
  ],
  'D' => &[
    ScanPattern { kind: TokenKind::Default, pattern: DEFAULT },
    ScanPattern { kind: TokenKind::Delayed, pattern: DELAYED },
    ScanPattern { kind: TokenKind::Distinct, pattern: DISTINCT },
  ],
  'F' => &[
    ScanPattern { kind: TokenKind::ForceIndex, pattern: FORCE_INDEX },
    ScanPattern { kind: TokenKind::ForceKey, pattern: FORCE_KEY },
    ScanPattern { kind: TokenKind::ForGroupBy, pattern: FOR_GROUP_BY },
    ScanPattern { kind: TokenKind::ForOrderBy, pattern: FOR_ORDER_BY },
    ScanPattern { kind: TokenKind::ForJoin, pattern: FOR_JOIN },
    ScanPattern { kind: TokenKind::From, pattern: FROM },
  ],
  'G' => &[
    ScanPattern { kind: TokenKind::GroupBy, pattern: GROUP_BY },
  ],
  'H' => &[
    ScanPattern { kind: TokenKind::HighPriority, pattern: HIGH_PRIORITY },
  ],
  'I' => &[
    ScanPattern { kind: TokenKind::IgnoreIndex, pattern: IGNORE_INDEX },
    ScanPattern { kind: TokenKind::IgnoreKey, pattern: IGNORE_KEY },
    ScanPattern { kind: TokenKind::InnerJoin, pattern: INNER_JOIN },
    ScanPattern { kind: TokenKind::Insert, pattern: INSERT },
  ],
  'L' => &[
    ScanPattern { kind: TokenKind::LeftOuterJoin, pattern: LEFT_OUTER_JOIN },
    ScanPattern { kind: TokenKind::LeftJoin, pattern: LEFT_JOIN },
    ScanPattern { kind: TokenKind::LowPriority, pattern: LOW_PRIORITY },
  ],
  'M' => &[
    ScanPattern { kind: TokenKind::MaxStatementTime, pattern: MAX_STATEMENT_TIME },
  ],
  'N' => &[
    ScanPattern { kind: TokenKind::NaturalLeftOuterJoin, pattern: NATURAL_LEFT_OUTER_JOIN },
    ScanPattern { kind: TokenKind::NaturalLeftJoin, pattern: NATURAL_LEFT_JOIN },
    ScanPattern { kind: TokenKind::NaturalRightOuterJoin, pattern: NATURAL_RIGHT_OUTER_JOIN },
    ScanPattern { kind: TokenKind::NaturalRightJoin, pattern: NATURAL_RIGHT_JOIN },
    ScanPattern { kind: TokenKind::NaturalJoin, pattern: NATURAL_JOIN },
  ],
  'O' => &[
    ScanPattern { kind: TokenKind::OrderBy, pattern: ORDER_BY },
    ScanPattern { kind: TokenKind::Oj, pattern: OJ },
    ScanPattern { kind: TokenKind::On, pattern: ON },
  ],
  'P' => &[
    ScanPattern { kind: TokenKind::Partition, pattern: PARTITION },
  ],
  'R' => &[
    ScanPattern { kind: TokenKind::RightOuterJoin, pattern: RIGHT_OUTER_JOIN },
    ScanPattern { kind: TokenKind::RightJoin, pattern: RIGHT_JOIN },
  ],
  'S' => &[
    ScanPattern { kind: TokenKind::SqlCalcFoundRows, pattern: SQL_CALC_FOUND_ROWS },
    ScanPattern { kind: TokenKind::SqlBufferResult, pattern: SQL_BUFFER_RESULT },
    ScanPattern { kind: TokenKind::SqlSmallResult, pattern: SQL_SMALL_RESULT },
    ScanPattern { kind: TokenKind::SqlBigResult, pattern: SQL_BIG_RESULT },
    ScanPattern { kind: TokenKind::SqlNoCache, pattern: SQL_NO_CACHE },
    ScanPattern { kind: TokenKind::SqlCache, pattern: SQL_CACHE },
    ScanPattern { kind: TokenKind::StraightJoin, pattern: STRAIGHT_JOIN },
    ScanPattern { kind: TokenKind::Select, pattern: SELECT },
    ScanPattern { kind: TokenKind::Set, pattern: SET },
  ],
  'U' => &[
    ScanPattern { kind: TokenKind::UseIndex, pattern: USE_INDEX },
    ScanPattern { kind: TokenKind::UseKey, pattern: USE_KEY },
    ScanPattern { kind: TokenKind::Using, pattern: USING },
  ],
  'V' => &[
    ScanPattern { kind: TokenKind::Values, pattern: VALUES },
  ],
  'W' => &[
    ScanPattern { kind: TokenKind::Where, pattern: WHERE },
  ],
};
