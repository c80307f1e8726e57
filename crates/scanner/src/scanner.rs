use rdb_sql::engine;
use rdb_sql::TokenKind;

use crate::{Cursor, ScannerOptions, Token};

/// Pull-based scanner over a single query string.
///
/// Each call to [`scan`](Scanner::scan) classifies one run of characters.
/// Malformed input never fails: it comes back as [`TokenKind::Illegal`].
/// Use [`tokens`](Scanner::tokens) to iterate.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    token_start: usize,
    options: ScannerOptions,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ScannerOptions::default())
    }

    pub fn with_options(source: &'a str, options: ScannerOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            options,
        }
    }

    pub fn options(&self) -> &ScannerOptions {
        &self.options
    }

    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    /// Scans the next token. Once the input is exhausted every call returns
    /// [`TokenKind::EndOfInput`] with empty text.
    pub fn scan(&mut self) -> Token {
        self.token_start = self.cursor.pos();

        let kind = match self.cursor.read() {
            None => TokenKind::EndOfInput,
            Some(ch) if is_whitespace(ch) => {
                self.cursor.unread();
                self.scan_whitespace()
            }
            Some(ch) if is_numeric(ch) || ch == '-' || ch == '+' => {
                self.cursor.unread();
                self.scan_number()
            }
            Some(ch) if is_letter(ch) => {
                self.cursor.unread();
                self.scan_keyword()
            }
            Some('\'' | '"' | '`') => {
                self.cursor.unread();
                self.scan_quoted()
            }
            Some(ch) => TokenKind::from_punct(ch).unwrap_or(TokenKind::Illegal),
        };

        let token = self.emit(kind);
        tracing::trace!(kind = ?token.kind, offset = token.offset, text = %token.text, "scanned token");

        token
    }

    /// Gives up on structured scanning: everything from the start of the
    /// last scanned token to the end of input becomes one
    /// [`TokenKind::Unparsed`] token.
    pub fn dump(&mut self) -> Token {
        self.cursor.exhaust();

        let token = match self.token_start < self.cursor.pos() {
            true => self.emit(TokenKind::Unparsed),
            false => self.emit(TokenKind::EndOfInput),
        };
        self.token_start = self.cursor.pos();

        token
    }

    pub fn scope(&self) -> ScannerScope<'a> {
        ScannerScope {
            saved_cursor: self.cursor,
            saved_token_start: self.token_start,
        }
    }

    pub fn revert(&mut self, scope: ScannerScope<'a>) {
        self.cursor = scope.saved_cursor;
        self.token_start = scope.saved_token_start;
    }

    pub fn tokens(self) -> Tokens<'a> {
        Tokens { scanner: self, finished: false }
    }

    fn emit(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_start, self.cursor.slice_from(self.token_start))
    }

    fn scan_whitespace(&mut self) -> TokenKind {
        self.cursor.read();

        while let Some(ch) = self.cursor.read() {
            if !is_whitespace(ch) {
                self.cursor.unread();
                break;
            }
        }

        TokenKind::Whitespace
    }

    fn scan_number(&mut self) -> TokenKind {
        let mut is_negative = false;
        let mut is_decimal = false;
        let mut is_scientific = false;

        while let Some(ch) = self.cursor.read() {
            match ch {
                // sign is only taken from a leading '-'
                '-' if self.cursor.pos() == self.token_start + 1 => is_negative = true,
                '-' | '+' => {}
                '.' => is_decimal = true,
                'e' | 'E' => is_scientific = true,
                ch if is_numeric(ch) => {}
                _ => {
                    self.cursor.unread();
                    break;
                }
            }
        }

        match (is_scientific, is_decimal, is_negative) {
            (true, _, _) => TokenKind::FloatingPointNumber,
            (false, true, _) => TokenKind::FixedNumber,
            (false, false, true) => TokenKind::Integer,
            (false, false, false) => TokenKind::NaturalNumber,
        }
    }

    /// Backtick-quoted identifiers end at the first closing backtick. Quoted
    /// strings also accept `\'` and doubled quotes (`''`) as literal content.
    fn scan_quoted(&mut self) -> TokenKind {
        let Some(first) = self.cursor.read() else {
            return TokenKind::EndOfInput;
        };
        let mut last = None;

        while let Some(ch) = self.cursor.read() {
            if ch != first {
                last = Some(ch);
                continue;
            }

            let check = last.replace(ch);
            let Some(next) = self.cursor.peek() else {
                break;
            };

            if first == '`' || (check != Some('\\') && check != Some(ch) && next != ch) {
                break;
            }
        }

        match (last == Some(first), first) {
            (false, _) => TokenKind::Illegal,
            (true, '`') => TokenKind::Identifier,
            (true, _) => TokenKind::QuotedString,
        }
    }

    fn scan_keyword(&mut self) -> TokenKind {
        if let Some(pattern) = engine::scan_by_keyword_rule(self.cursor.rest(), self.options.keyword_boundary) {
            self.cursor.advance(pattern.len());
            return pattern.kind;
        }

        while let Some(ch) = self.cursor.read() {
            if !is_alphanum(ch) {
                self.cursor.unread();
                break;
            }
        }

        TokenKind::Identifier
    }
}

/// Every token up to and including the end-of-input token.
pub struct Tokens<'a> {
    scanner: Scanner<'a>,
    finished: bool,
}

impl<'a> Tokens<'a> {
    pub fn into_scanner(self) -> Scanner<'a> {
        self.scanner
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.scanner.scan();
        self.finished = token.is_eof();

        Some(token)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ScannerScope<'a> {
    saved_cursor: Cursor<'a>,
    saved_token_start: usize,
}

fn is_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\n' || ch == '\t'
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

fn is_numeric(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_alphanum(ch: char) -> bool {
    is_letter(ch) || is_numeric(ch) || ch == '_'
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scan_one(source: &str) -> (TokenKind, String) {
        let token = Scanner::new(source).scan();
        (token.kind, token.text)
    }

    fn scan_all(source: &str) -> Vec<(TokenKind, String)> {
        Scanner::new(source).tokens().map(|token| (token.kind, token.text)).collect()
    }

    #[test]
    fn test_char_classes() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\n'));
        assert!(is_whitespace('\t'));
        assert!(!is_whitespace('z'));
        assert!(!is_whitespace('\r'));

        assert!(is_letter('a') && is_letter('z') && is_letter('A') && is_letter('Z'));
        assert!(!is_letter('&'));
        assert!(!is_letter('\u{e9}'));

        assert!(('0'..='9').all(is_numeric));
        assert!(!is_numeric('a'));

        assert!("0123456789_abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ".chars().all(is_alphanum));
        assert!(!"'\"`~!@#$%^&*()+=-[]\\|}{:;?/.,<>".chars().any(is_alphanum));
    }

    #[test]
    fn test_scan_whitespace() {
        let source = "   \n \t\t   \n \t";
        assert_eq!((TokenKind::Whitespace, source.to_string()), scan_one(source));
    }

    #[test]
    fn test_scan_whitespace_stops() {
        let source = "   \n \t\tiamnotwhitespace   \n \t";
        assert_eq!((TokenKind::Whitespace, "   \n \t\t".to_string()), scan_one(source));
    }

    #[test]
    fn test_scan_on_owned_scanner() {
        let mut scanner = Scanner::new("a,");

        assert_eq!(Token::new(TokenKind::Identifier, 0, "a"), scanner.scan());
        assert_eq!(Token::new(TokenKind::Comma, 1, ","), scanner.scan());
        assert_eq!(Token::new(TokenKind::EndOfInput, 2, ""), scanner.scan());
    }

    #[test]
    fn test_scan_end_of_input_repeats() {
        let mut scanner = Scanner::new("");

        for _ in 0..3 {
            let token = scanner.scan();
            assert_eq!(TokenKind::EndOfInput, token.kind);
            assert_eq!("", token.text);
            assert_eq!(0, token.offset);
        }
    }

    #[test]
    fn test_scan_illegal() {
        assert_eq!((TokenKind::Illegal, "@".to_string()), scan_one("@"));
        assert_eq!((TokenKind::Illegal, ";".to_string()), scan_one(";"));
        assert_eq!((TokenKind::Illegal, "\u{3042}".to_string()), scan_one("\u{3042}abc"));
    }

    #[test]
    fn test_scan_identifier() {
        assert_eq!((TokenKind::Identifier, "iamnotakeyword".to_string()), scan_one("iamnotakeyword"));
        assert_eq!((TokenKind::Identifier, "t_1".to_string()), scan_one("t_1.id"));
    }

    #[test]
    fn test_scan_numbers() {
        assert_eq!((TokenKind::NaturalNumber, "12".to_string()), scan_one("12"));
        assert_eq!((TokenKind::NaturalNumber, "+12".to_string()), scan_one("+12"));
        assert_eq!((TokenKind::Integer, "-12".to_string()), scan_one("-12"));
        assert_eq!((TokenKind::FixedNumber, "3.14".to_string()), scan_one("3.14"));
        assert_eq!((TokenKind::FixedNumber, "-3.14".to_string()), scan_one("-3.14"));
        assert_eq!((TokenKind::FloatingPointNumber, "3.14e0".to_string()), scan_one("3.14e0"));
        assert_eq!((TokenKind::FloatingPointNumber, "2E+10".to_string()), scan_one("2E+10"));
    }

    #[test]
    fn test_scan_number_sign_only_from_first_char() {
        assert_eq!((TokenKind::NaturalNumber, "12-3".to_string()), scan_one("12-3"));
        assert_eq!((TokenKind::NaturalNumber, "+-1".to_string()), scan_one("+-1"));
        assert_eq!((TokenKind::Integer, "-".to_string()), scan_one("-"));
    }

    #[test]
    fn test_scan_number_stops_at_whitespace() {
        let tokens = scan_all("3.14159 2.22e4");

        assert_eq!(
            vec![
                (TokenKind::FixedNumber, "3.14159".to_string()),
                (TokenKind::Whitespace, " ".to_string()),
                (TokenKind::FloatingPointNumber, "2.22e4".to_string()),
                (TokenKind::EndOfInput, "".to_string()),
            ],
            tokens
        );
    }

    #[test]
    fn test_scan_number_stops_at_letter_and_punct() {
        let tokens = scan_all("10x,2)");

        assert_eq!(
            vec![
                (TokenKind::NaturalNumber, "10".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Comma, ",".to_string()),
                (TokenKind::NaturalNumber, "2".to_string()),
                (TokenKind::RParen, ")".to_string()),
                (TokenKind::EndOfInput, "".to_string()),
            ],
            tokens
        );
    }

    #[test]
    fn test_scan_quoted_identifier() {
        assert_eq!((TokenKind::Identifier, "`iamnotakeyword`".to_string()), scan_one("`iamnotakeyword`"));
    }

    #[test]
    fn test_scan_mismatched_quote() {
        assert_eq!((TokenKind::Illegal, "`iamnotakeyword'".to_string()), scan_one("`iamnotakeyword'"));
        assert_eq!((TokenKind::Illegal, "'".to_string()), scan_one("'"));
        assert_eq!((TokenKind::Illegal, "\"abc".to_string()), scan_one("\"abc"));
    }

    #[test]
    fn test_scan_ends_at_first_backtick() {
        assert_eq!((TokenKind::Identifier, "`iamnota`".to_string()), scan_one("`iamnota`keyword'"));
        assert_eq!((TokenKind::Identifier, "`a`".to_string()), scan_one("`a``b`"));
        assert_eq!((TokenKind::Identifier, "`a\\`".to_string()), scan_one("`a\\`b`"));
    }

    #[test]
    fn test_scan_escaped_quotes() {
        for source in [
            "'iamnota''keyword'",
            "'iamnota\\'keyword'",
            "\"iamnota\\\\\"keyword\"",
            "\"iamnota\"\"keyword\"",
            "'iam`nota``keyw''\"ord'",
            "'I am a ''quoted\\' string'",
        ] {
            assert_eq!((TokenKind::QuotedString, source.to_string()), scan_one(source), "{source}");
        }
    }

    #[test]
    fn test_scan_quoted_string_stops_at_close() {
        let tokens = scan_all("'abc', \"x\"");

        assert_eq!(
            vec![
                (TokenKind::QuotedString, "'abc'".to_string()),
                (TokenKind::Comma, ",".to_string()),
                (TokenKind::Whitespace, " ".to_string()),
                (TokenKind::QuotedString, "\"x\"".to_string()),
                (TokenKind::EndOfInput, "".to_string()),
            ],
            tokens
        );
    }

    #[test]
    fn test_scan_empty_quoted_string() {
        assert_eq!((TokenKind::QuotedString, "''".to_string()), scan_one("''"));
        assert_eq!((TokenKind::QuotedString, "''".to_string()), scan_one("'', 1"));
        assert_eq!((TokenKind::Identifier, "``".to_string()), scan_one("`` x"));
    }

    #[test]
    fn test_scan_ends_at_non_alphanum() {
        let mut scanner = Scanner::new("iam`nota keyword'");

        let token = scanner.scan();
        assert_eq!((TokenKind::Identifier, "iam"), (token.kind, token.text.as_str()));

        let token = scanner.scan();
        assert_eq!((TokenKind::Illegal, "`nota keyword'"), (token.kind, token.text.as_str()));
        assert_eq!(3, token.offset);
    }

    #[test]
    fn test_scan_keyword_preserves_case() {
        assert_eq!((TokenKind::Select, "select".to_string()), scan_one("select"));
        assert_eq!((TokenKind::OrderBy, "Order By".to_string()), scan_one("Order By id"));
    }

    #[test]
    fn test_scan_keyword_boundary_option() {
        let options = ScannerOptions::default().with_keyword_boundary(true);

        let mut scanner = Scanner::with_options("selected", options);
        assert!(scanner.options().keyword_boundary);

        let token = scanner.scan();
        assert_eq!((TokenKind::Identifier, "selected"), (token.kind, token.text.as_str()));

        let token = Scanner::new("selected").scan();
        assert_eq!((TokenKind::Select, "select"), (token.kind, token.text.as_str()));
    }

    #[test]
    fn test_scan_query() {
        let tokens = scan_all("SELECT t.*, `name` FROM foo t WHERE t.code = -10 ORDER BY t.id");

        let kinds = tokens.iter().map(|(kind, _)| *kind).filter(|kind| *kind != TokenKind::Whitespace).collect::<Vec<_>>();
        assert_eq!(
            vec![
                TokenKind::Select,
                TokenKind::Identifier,
                TokenKind::Period,
                TokenKind::Asterisk,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::From,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Where,
                TokenKind::Identifier,
                TokenKind::Period,
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::Integer,
                TokenKind::OrderBy,
                TokenKind::Identifier,
                TokenKind::Period,
                TokenKind::Identifier,
                TokenKind::EndOfInput,
            ],
            kinds
        );

        let text = tokens.iter().map(|(_, text)| text.as_str()).collect::<String>();
        assert_eq!("SELECT t.*, `name` FROM foo t WHERE t.code = -10 ORDER BY t.id", text);
    }

    #[test]
    fn test_dump() {
        let mut scanner = Scanner::new("SELECT @ rest of it");
        assert_eq!(TokenKind::Select, scanner.scan().kind);
        assert_eq!(TokenKind::Whitespace, scanner.scan().kind);

        let illegal = scanner.scan();
        assert_eq!(TokenKind::Illegal, illegal.kind);

        let unparsed = scanner.dump();
        assert_eq!(Token::new(TokenKind::Unparsed, 7, "@ rest of it"), unparsed);

        assert_eq!(Token::new(TokenKind::EndOfInput, 19, ""), scanner.dump());
        assert_eq!(Token::new(TokenKind::EndOfInput, 19, ""), scanner.scan());
    }

    #[test]
    fn test_scope_and_revert() {
        let scanner = Scanner::new("FROM foo");
        let scope = scanner.scope();

        let mut tokens = scanner.tokens();
        let first = tokens.by_ref().collect::<Vec<_>>();
        assert_eq!(None, tokens.next());

        let mut scanner = tokens.into_scanner();
        assert_eq!(8, scanner.position());
        scanner.revert(scope);
        assert_eq!(0, scanner.position());
        let second = scanner.tokens().collect::<Vec<_>>();

        assert_eq!(first, second);
        assert_eq!(4, first.len());
    }

    #[test]
    fn test_revert_to_mid_query() {
        let mut scanner = Scanner::new("WHERE a = 1");
        assert_eq!(TokenKind::Where, scanner.scan().kind);

        let scope = scanner.scope();
        let ahead = [scanner.scan(), scanner.scan(), scanner.scan()];

        scanner.revert(scope);
        assert_eq!(ahead, [scanner.scan(), scanner.scan(), scanner.scan()]);
    }
}
