//! `schemaName`, `symbolicName`, and `NodeLabels` — the handful of
//! productions shared by the pattern grammar and the expression grammar.
//!
//! Grounded on `original_source/parser/parser.go`'s `schemaName`/
//! `symbolicName`/`NodeLabels`/`NodeLabel`.

use crate::ast::{symbol_type_for, SchemaName, SymbolicName};
use crate::error::{Error, Reporter};
use crate::lexer::TokenKind;

use super::Parser;

impl<'a, R: Reporter> Parser<'a, R> {
    /// A schema name is any reserved word, taken literally, or an ordinary
    /// identifier — this is what lets `RETURN n.order` and `CREATE (n:Return)`
    /// both parse even though `ORDER`/`RETURN` are keywords everywhere else.
    pub(super) fn schema_name(&mut self) -> Result<Option<SchemaName>, Error> {
        let pos = self.position();
        let tok = self.lexer.next_token();
        match tok.kind {
            TokenKind::Illegal => Err(Error::new(
                tok.line,
                format!("illegal token {:?}", tok.lexeme),
            )),
            kind if kind.is_reserved() => Ok(Some(SchemaName::Reserved(kind))),
            _ => {
                self.restore(pos);
                Ok(self.symbolic_name()?.map(SchemaName::Symbolic))
            }
        }
    }

    pub(super) fn symbolic_name(&mut self) -> Result<Option<SymbolicName>, Error> {
        match self.match_one(TokenKind::Identifier)? {
            Some(tok) => Ok(Some(SymbolicName::Identifier {
                symbol_type: symbol_type_for(&tok.lexeme),
                lexeme: tok.lexeme,
            })),
            None => Ok(None),
        }
    }

    /// Zero or more `:schemaName` labels.
    pub(super) fn node_labels(&mut self) -> Result<Vec<SchemaName>, Error> {
        let mut labels = Vec::new();
        while self.match_one(TokenKind::Colon)?.is_some() {
            let name = self
                .schema_name()?
                .ok_or_else(|| self.err("expecting label name following ':'"))?;
            labels.push(name);
        }
        Ok(labels)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::error::CollectingReporter;
    use crate::{Parser, TokenKind};

    #[test]
    fn reserved_word_is_usable_as_a_label() {
        let mut reporter = CollectingReporter::new();
        let stmt = Parser::new("MATCH (n:Return) RETURN n", &mut reporter)
            .parse()
            .unwrap();
        let Query::SinglePartQuery(q) = stmt.query;
        let ReadingClause::Match(m) = &q.reading[0];
        let PatternElement::Chain { left, .. } = &m.pattern.parts[0].element else {
            panic!()
        };
        assert_eq!(left.labels, vec![SchemaName::Reserved(TokenKind::Return)]);
    }
}
