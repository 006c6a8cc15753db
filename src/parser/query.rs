//! The clause grammar above expressions and patterns: `singlePartQuery`,
//! `MATCH`/`OPTIONAL MATCH`, and `CREATE`.
//!
//! Grounded on `original_source/parser/parser.go`'s `SinglePartQuery`/
//! `ReadingClause`/`Match`/`UpdatingClause`/`Create`. `UNWIND`, `CALL`,
//! `MERGE`, `SET`, `REMOVE`, and `DELETE` are not implemented — see
//! DESIGN.md.

use crate::ast::*;
use crate::error::{Error, Reporter};
use crate::lexer::TokenKind;

use super::Parser;

impl<'a, R: Reporter> Parser<'a, R> {
    pub(super) fn single_part_query(&mut self) -> Result<Query, Error> {
        let mut reading = Vec::new();
        let mut updating = Vec::new();
        loop {
            if let Some(clause) = self.reading_clause()? {
                reading.push(clause);
                continue;
            }
            if let Some(clause) = self.updating_clause()? {
                updating.push(clause);
                continue;
            }
            break;
        }
        let projection = self.projection_opt()?;
        if reading.is_empty() && updating.is_empty() && projection.is_none() {
            return Err(self.err("expecting MATCH, CREATE, or RETURN"));
        }
        if updating.is_empty() && projection.is_none() {
            return Err(self.err("expecting RETURN following MATCH"));
        }
        Ok(Query::SinglePartQuery(SinglePartQuery {
            reading,
            updating,
            projection,
        }))
    }

    fn reading_clause(&mut self) -> Result<Option<ReadingClause>, Error> {
        Ok(self.match_clause()?.map(ReadingClause::Match))
    }

    fn match_clause(&mut self) -> Result<Option<MatchClause>, Error> {
        let pos = self.position();
        let optional = self.match_one(TokenKind::Optional)?.is_some();
        if self.match_one(TokenKind::Match)?.is_none() {
            if optional {
                return Err(self.err("expecting MATCH following OPTIONAL"));
            }
            self.restore(pos);
            return Ok(None);
        }
        let pattern = self.pattern()?;
        let where_expr = if self.match_one(TokenKind::Where)?.is_some() {
            Some(
                self.expr()?
                    .ok_or_else(|| self.err("expecting expression following WHERE"))?,
            )
        } else {
            None
        };
        Ok(Some(MatchClause {
            optional,
            pattern,
            where_expr,
        }))
    }

    fn updating_clause(&mut self) -> Result<Option<UpdatingClause>, Error> {
        Ok(self.create_clause()?.map(UpdatingClause::Create))
    }

    fn create_clause(&mut self) -> Result<Option<CreateClause>, Error> {
        if self.match_one(TokenKind::Create)?.is_none() {
            return Ok(None);
        }
        let pattern = self.pattern()?;
        Ok(Some(CreateClause { pattern }))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::error::CollectingReporter;
    use crate::Parser;

    fn parse(src: &str) -> Result<Statement, crate::error::Error> {
        let mut reporter = CollectingReporter::new();
        Parser::new(src, &mut reporter).parse()
    }

    #[test]
    fn optional_match_sets_the_flag() {
        let stmt = parse("OPTIONAL MATCH (n) RETURN n").unwrap();
        let Query::SinglePartQuery(q) = stmt.query;
        let ReadingClause::Match(m) = &q.reading[0];
        assert!(m.optional);
    }

    #[test]
    fn optional_without_match_is_an_error() {
        let err = parse("OPTIONAL CREATE (n)").unwrap_err();
        assert!(err.message.contains("MATCH"));
    }

    #[test]
    fn create_clause_with_no_projection_is_valid() {
        let stmt = parse("CREATE (n:Person)").unwrap();
        let Query::SinglePartQuery(q) = stmt.query;
        assert_eq!(q.updating.len(), 1);
        assert!(q.projection.is_none());
    }

    #[test]
    fn mixing_match_and_create_preserves_order_of_clause_kind() {
        let stmt = parse("MATCH (a) CREATE (b) RETURN a").unwrap();
        let Query::SinglePartQuery(q) = stmt.query;
        assert_eq!(q.reading.len(), 1);
        assert_eq!(q.updating.len(), 1);
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        assert!(parse("").is_err());
    }
}
