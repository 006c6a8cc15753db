//! The reserved-word table (§6.3): a case-folded lookup from lowercased
//! word to `TokenKind`, plus the canonical upper-case spelling used as the
//! token's lexeme regardless of how the word was cased in the source.
//!
//! Grounded on `apollo-parser/src/lexer/lookup.rs`'s const-array lookup
//! pattern and `original_source/pkg/scanner/reserved_words.go`'s
//! case-fold-then-lookup shape, extended here to the full canonical list.

use super::token::TokenKind;

const TABLE: &[(&str, &str, TokenKind)] = &[
    ("all", "ALL", TokenKind::All),
    ("asc", "ASC", TokenKind::Asc),
    ("ascending", "ASCENDING", TokenKind::Ascending),
    ("by", "BY", TokenKind::By),
    ("create", "CREATE", TokenKind::Create),
    ("delete", "DELETE", TokenKind::Delete),
    ("desc", "DESC", TokenKind::Desc),
    ("descending", "DESCENDING", TokenKind::Descending),
    ("detach", "DETACH", TokenKind::Detach),
    ("exists", "EXISTS", TokenKind::Exists),
    ("limit", "LIMIT", TokenKind::Limit),
    ("match", "MATCH", TokenKind::Match),
    ("merge", "MERGE", TokenKind::Merge),
    ("on", "ON", TokenKind::On),
    ("optional", "OPTIONAL", TokenKind::Optional),
    ("order", "ORDER", TokenKind::Order),
    ("remove", "REMOVE", TokenKind::Remove),
    ("return", "RETURN", TokenKind::Return),
    ("set", "SET", TokenKind::Set),
    ("skip", "SKIP", TokenKind::Skip),
    ("where", "WHERE", TokenKind::Where),
    ("with", "WITH", TokenKind::With),
    ("union", "UNION", TokenKind::Union),
    ("unwind", "UNWIND", TokenKind::Unwind),
    ("and", "AND", TokenKind::And),
    ("as", "AS", TokenKind::As),
    ("contains", "CONTAINS", TokenKind::Contains),
    ("distinct", "DISTINCT", TokenKind::Distinct),
    ("ends", "ENDS", TokenKind::Ends),
    ("in", "IN", TokenKind::In),
    ("is", "IS", TokenKind::Is),
    ("not", "NOT", TokenKind::Not),
    ("or", "OR", TokenKind::Or),
    ("starts", "STARTS", TokenKind::Starts),
    ("xor", "XOR", TokenKind::Xor),
    ("false", "FALSE", TokenKind::False),
    ("true", "TRUE", TokenKind::True),
    ("null", "NULL", TokenKind::Null),
    ("constraint", "CONSTRAINT", TokenKind::Constraint),
    ("do", "DO", TokenKind::Do),
    ("for", "FOR", TokenKind::For),
    ("require", "REQUIRE", TokenKind::Require),
    ("unique", "UNIQUE", TokenKind::Unique),
    ("case", "CASE", TokenKind::Case),
    ("when", "WHEN", TokenKind::When),
    ("then", "THEN", TokenKind::Then),
    ("else", "ELSE", TokenKind::Else),
    ("end", "END", TokenKind::End),
    ("mandatory", "MANDATORY", TokenKind::Mandatory),
    ("scalar", "SCALAR", TokenKind::Scalar),
    ("of", "OF", TokenKind::Of),
    ("add", "ADD", TokenKind::Add),
    ("drop", "DROP", TokenKind::Drop),
];

/// Looks up a case-folded word against the reserved-word table.
///
/// `word` need not be lowercased by the caller; folding happens here.
/// Returns the matching kind and its canonical upper-case spelling, or
/// `None` if `word` is an ordinary identifier.
pub(crate) fn lookup(word: &str) -> Option<(TokenKind, &'static str)> {
    let folded = word.to_ascii_lowercase();
    TABLE
        .iter()
        .find(|(key, _, _)| *key == folded)
        .map(|(_, canonical, kind)| (*kind, *canonical))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_insensitively() {
        assert_eq!(lookup("MATCH"), Some((TokenKind::Match, "MATCH")));
        assert_eq!(lookup("Match"), Some((TokenKind::Match, "MATCH")));
        assert_eq!(lookup("match"), Some((TokenKind::Match, "MATCH")));
    }

    #[test]
    fn rejects_non_reserved_identifiers() {
        assert_eq!(lookup("node"), None);
        assert_eq!(lookup("matches"), None);
    }

    #[test]
    fn canonical_spelling_is_upper_case() {
        assert_eq!(lookup("xor").unwrap().1, "XOR");
    }
}
