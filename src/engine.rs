use cstree::build::GreenNodeBuilder;
use cstree::interning::new_interner;
use cstree::syntax::{ResolvedNode, SyntaxNode};

use crate::scan_rules;
use crate::{ScanPattern, TokenKind};

pub type TokenTree = ResolvedNode<TokenKind>;

impl cstree::Syntax for TokenKind {
    fn from_raw(raw: cstree::RawSyntaxKind) -> Self {
        TokenKind::ALL.get(raw.0 as usize).copied().unwrap_or(TokenKind::Illegal)
    }

    fn into_raw(self) -> cstree::RawSyntaxKind {
        cstree::RawSyntaxKind(self.id())
    }

    /// Keywords keep the casing of the query, so only punctuation is static.
    fn static_text(self) -> Option<&'static str> {
        match self.is_punctuation() {
            true => self.text(),
            false => None,
        }
    }
}

/// Builds a flat tree with an [`TokenKind::Unparsed`] root and one leaf per
/// token. The end-of-input token carries no text and is left out.
pub fn build_token_tree<'t>(tokens: impl IntoIterator<Item = (TokenKind, &'t str)>) -> TokenTree {
    let mut builder = GreenNodeBuilder::<TokenKind>::new();
    builder.start_node(TokenKind::Unparsed);

    for (kind, text) in tokens {
        if kind != TokenKind::EndOfInput {
            builder.token(kind, text);
        }
    }

    builder.finish_node();
    let (green, cache) = builder.finish();
    let interner = cache.and_then(|cache| cache.into_interner()).unwrap_or_else(new_interner);

    SyntaxNode::new_root_with_resolver(green, interner)
}

/// Looks up the keyword literal that `source` starts with.
///
/// Entries sharing the first character are tried in table order. When
/// `bounded` is set, a literal only matches if it is not immediately
/// followed by an identifier character.
pub fn scan_by_keyword_rule(source: &str, bounded: bool) -> Option<ScanPattern> {
    let prefix = source.chars().next()?;

    let Some(patterns) = scan_rules::KEYWORD_SCAN_RULE.get(&prefix.to_ascii_uppercase()) else {
        return None;
    };

    patterns.iter()
        .filter(|p| p.is_prefix_of(source))
        .find(|p| !bounded || !source[p.len()..].starts_with(is_ident_char))
        .copied()
}

pub fn keyword_patterns() -> impl Iterator<Item = &'static ScanPattern> {
    scan_rules::KEYWORD_SCAN_RULE.values().flat_map(|patterns| patterns.iter())
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
