//! A recursive-descent predictive parser over the lexer's token stream,
//! building the closed-union AST in `crate::ast` directly as each
//! production recognizes its input.
//!
//! Grounded on two sources held side by side: `apollo-parser/src/parser/
//! mod.rs` for the Rust `Parser` struct shape, its builder-style
//! configuration (`with_recursion_limit`/`parse`), and its recursion-limit
//! plumbing; and `original_source/parser/parser.go` for the exact trial-
//! parse semantics — `match`/`matchPhrase`'s snapshot-then-restore-on-
//! mismatch behavior is what lets every production below try an
//! alternative without a token pushback queue. Unlike the teacher, there is
//! no `SyntaxTreeBuilder`/`NodeGuard`: nothing here builds a CST to later
//! wrap, so there is nothing to checkpoint except the lexer's own
//! `Position`.

mod expr;
mod pattern;
mod projection;
mod query;
mod schema_name;

use crate::ast::Statement;
use crate::error::{Error, Reporter};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::limit::LimitTracker;
use crate::position::Position;

const DEFAULT_RECURSION_LIMIT: usize = 500;

/// Parses a single Cypher statement out of a source string.
///
/// ## Example
///
/// ```rust
/// use cypher_front::{Parser, StdReporter};
///
/// let mut reporter = StdReporter;
/// let parser = Parser::new("MATCH (n:Person) RETURN n", &mut reporter);
/// let statement = parser.parse().expect("valid query");
/// ```
pub struct Parser<'a, R: Reporter> {
    lexer: Lexer<'a, R>,
    source: &'a str,
    recursion_limit: LimitTracker,
}

impl<'a, R: Reporter> Parser<'a, R> {
    /// Creates a parser over `src`, reporting diagnostics through `reporter`
    /// as it lexes and parses.
    pub fn new(src: &'a str, reporter: &'a mut R) -> Self {
        Parser {
            lexer: Lexer::new(src, reporter),
            source: src,
            recursion_limit: LimitTracker::new(DEFAULT_RECURSION_LIMIT),
        }
    }

    /// Configures the recursion limit to use while parsing expressions and
    /// nested patterns. Exceeding it raises a parse error rather than
    /// risking a stack overflow (§5).
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = LimitTracker::new(limit);
        self
    }

    /// Parses the whole input as a single `singlePartQuery`.
    pub fn parse(mut self) -> Result<Statement, Error> {
        let query = self.single_part_query()?;
        Ok(Statement {
            query,
            source: self.source.to_string(),
        })
    }

    /// Runs `f` under one level of recursion-depth accounting, failing
    /// closed with a parse error if the configured limit is exceeded.
    /// Wraps every true recursive-descent re-entry point (`expr`,
    /// `pattern_element`) so arbitrarily deep nesting can't blow the stack.
    fn guarded<T>(
        &mut self,
        mut f: impl FnMut(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.recursion_limit.consume();
        if self.recursion_limit.limited() {
            let line = self.lexer.line();
            self.recursion_limit.release();
            return Err(self.lexer.report(line, "parser recursion limit reached"));
        }
        let result = f(self);
        self.recursion_limit.release();
        result
    }

    /// Attempts to match the next token against one of `kinds`. On success
    /// the token is consumed and returned; on a mismatch the lexer position
    /// is restored so nothing is consumed.
    ///
    /// `Illegal` always fails the parse immediately — a malformed token is
    /// never a valid alternative to retry with something else. `EndOfInput`
    /// never matches, but isn't rewound past either, since re-reading it
    /// again is harmless (the lexer yields it forever).
    ///
    /// Grounded on `original_source/parser/parser.go`'s `match`.
    fn match_tok(&mut self, kinds: &[TokenKind]) -> Result<Option<Token>, Error> {
        let pos = self.lexer.position();
        let tok = self.lexer.next_token();
        match tok.kind {
            TokenKind::Illegal => Err(Error::new(
                tok.line,
                format!("illegal token {:?}", tok.lexeme),
            )),
            TokenKind::EndOfInput => Ok(None),
            kind if kinds.contains(&kind) => Ok(Some(tok)),
            _ => {
                self.lexer.set_position(pos);
                Ok(None)
            }
        }
    }

    /// Matches a single kind; convenience wrapper over `match_tok`.
    fn match_one(&mut self, kind: TokenKind) -> Result<Option<Token>, Error> {
        self.match_tok(&[kind])
    }

    /// All-or-nothing: matches every kind in `kinds` in sequence, or
    /// restores the lexer to its pre-call position and returns `None` if
    /// any one of them fails to match.
    ///
    /// Grounded on `original_source/parser/parser.go`'s `matchPhrase`.
    fn match_phrase(&mut self, kinds: &[TokenKind]) -> Result<Option<Vec<Token>>, Error> {
        let pos = self.lexer.position();
        let mut toks = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            match self.match_one(kind)? {
                Some(tok) => toks.push(tok),
                None => {
                    self.lexer.set_position(pos);
                    return Ok(None);
                }
            }
        }
        Ok(Some(toks))
    }

    fn position(&self) -> Position {
        self.lexer.position()
    }

    fn restore(&mut self, pos: Position) {
        self.lexer.set_position(pos);
    }

    fn line(&self) -> u32 {
        self.lexer.line()
    }

    fn err(&mut self, msg: impl Into<String>) -> Error {
        let line = self.line();
        self.lexer.report(line, msg)
    }

    /// Matches `kind` or fails the parse with a message naming what was
    /// expected, formatted as "expecting {what}".
    fn expect_tok(&mut self, kind: TokenKind, what: &str) -> Result<Token, Error> {
        match self.match_one(kind)? {
            Some(tok) => Ok(tok),
            None => Err(self.err(format!("expecting {what}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::error::CollectingReporter;

    fn parse(src: &str) -> Result<Statement, Error> {
        let mut reporter = CollectingReporter::new();
        Parser::new(src, &mut reporter).parse()
    }

    #[test]
    fn parses_minimal_match_return() {
        let stmt = parse("MATCH (n) RETURN n").unwrap();
        let Query::SinglePartQuery(q) = stmt.query;
        assert_eq!(q.reading.len(), 1);
        assert!(q.projection.is_some());
    }

    #[test]
    fn missing_return_is_a_parse_error() {
        let err = parse("MATCH (n)").unwrap_err();
        assert!(err.message.contains("RETURN"), "{}", err.message);
    }

    #[test]
    fn recursion_limit_trips_on_deeply_nested_parens() {
        let mut reporter = CollectingReporter::new();
        let nested = format!("MATCH {}n{} RETURN n", "(".repeat(600), ")".repeat(600));
        let parser = Parser::new(&nested, &mut reporter).with_recursion_limit(50);
        let err = parser.parse().unwrap_err();
        assert!(err.message.contains("recursion limit"));
    }
}
