//! Canonical keyword literals (a subset of MySQL clause keywords).

pub const SELECT: &str = "SELECT";
pub const INSERT: &str = "INSERT";
pub const FROM: &str = "FROM";
pub const PARTITION: &str = "PARTITION";
pub const AS: &str = "AS";
pub const STRAIGHT_JOIN: &str = "STRAIGHT_JOIN";
pub const CROSS_JOIN: &str = "CROSS JOIN";
pub const INNER_JOIN: &str = "INNER JOIN";
pub const OJ: &str = "OJ";
pub const NATURAL_JOIN: &str = "NATURAL JOIN";
pub const NATURAL_LEFT_JOIN: &str = "NATURAL LEFT JOIN";
pub const NATURAL_LEFT_OUTER_JOIN: &str = "NATURAL LEFT OUTER JOIN";
pub const NATURAL_RIGHT_JOIN: &str = "NATURAL RIGHT JOIN";
pub const NATURAL_RIGHT_OUTER_JOIN: &str = "NATURAL RIGHT OUTER JOIN";
pub const LEFT_JOIN: &str = "LEFT JOIN";
pub const LEFT_OUTER_JOIN: &str = "LEFT OUTER JOIN";
pub const RIGHT_JOIN: &str = "RIGHT JOIN";
pub const RIGHT_OUTER_JOIN: &str = "RIGHT OUTER JOIN";
pub const USE_INDEX: &str = "USE INDEX";
pub const USE_KEY: &str = "USE KEY";
pub const IGNORE_INDEX: &str = "IGNORE INDEX";
pub const IGNORE_KEY: &str = "IGNORE KEY";
pub const FORCE_INDEX: &str = "FORCE INDEX";
pub const FORCE_KEY: &str = "FORCE KEY";
pub const FOR_JOIN: &str = "FOR JOIN";
pub const FOR_ORDER_BY: &str = "FOR ORDER BY";
pub const FOR_GROUP_BY: &str = "FOR GROUP BY";
pub const WHERE: &str = "WHERE";
pub const VALUES: &str = "VALUES";
pub const SET: &str = "SET";
pub const DEFAULT: &str = "DEFAULT";
pub const ALL: &str = "ALL";
pub const DISTINCT: &str = "DISTINCT";
pub const HIGH_PRIORITY: &str = "HIGH_PRIORITY";
pub const LOW_PRIORITY: &str = "LOW_PRIORITY";
pub const DELAYED: &str = "DELAYED";
pub const MAX_STATEMENT_TIME: &str = "MAX_STATEMENT_TIME";
pub const SQL_SMALL_RESULT: &str = "SQL_SMALL_RESULT";
pub const SQL_BIG_RESULT: &str = "SQL_BIG_RESULT";
pub const SQL_BUFFER_RESULT: &str = "SQL_BUFFER_RESULT";
pub const SQL_CACHE: &str = "SQL_CACHE";
pub const SQL_NO_CACHE: &str = "SQL_NO_CACHE";
pub const SQL_CALC_FOUND_ROWS: &str = "SQL_CALC_FOUND_ROWS";
pub const ON: &str = "ON";
pub const USING: &str = "USING";
pub const ORDER_BY: &str = "ORDER BY";
pub const GROUP_BY: &str = "GROUP BY";
