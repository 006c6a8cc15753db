//! `RETURN` and its trailing `ORDER BY`/`SKIP`/`LIMIT` modifiers.
//!
//! Grounded on `original_source/parser/parser.go`'s `projectionBody`/
//! `projectionItems`/`projectionItem`/`order`/`sortItem`/`skip`/`limit`.

use crate::ast::*;
use crate::error::{Error, Reporter};
use crate::lexer::TokenKind;

use super::Parser;

impl<'a, R: Reporter> Parser<'a, R> {
    pub(super) fn projection_opt(&mut self) -> Result<Option<Projection>, Error> {
        if self.match_one(TokenKind::Return)?.is_none() {
            return Ok(None);
        }
        let distinct = self.match_one(TokenKind::Distinct)?.is_some();
        let items = self.projection_items()?;
        let order = self.order_opt()?;
        let skip = self.skip_opt()?;
        let limit = self.limit_opt()?;
        Ok(Some(Projection {
            distinct,
            items,
            order,
            skip,
            limit,
        }))
    }

    /// `'*' (',' projectionItem)*` or `projectionItem (',' projectionItem)*`.
    fn projection_items(&mut self) -> Result<ProjectionItems, Error> {
        if self.match_one(TokenKind::Star)?.is_some() {
            let mut items = Vec::new();
            while self.match_one(TokenKind::Comma)?.is_some() {
                items.push(self.projection_item()?);
            }
            return Ok(ProjectionItems { all: true, items });
        }
        let mut items = vec![self.projection_item()?];
        while self.match_one(TokenKind::Comma)?.is_some() {
            items.push(self.projection_item()?);
        }
        Ok(ProjectionItems { all: false, items })
    }

    fn projection_item(&mut self) -> Result<ProjectionItem, Error> {
        let expr = self
            .expr()?
            .ok_or_else(|| self.err("expecting expression in RETURN"))?;
        let alias = if self.match_one(TokenKind::As)?.is_some() {
            Some(
                self.symbolic_name()?
                    .ok_or_else(|| self.err("expecting alias name following AS"))?,
            )
        } else {
            None
        };
        Ok(ProjectionItem { expr, alias })
    }

    fn order_opt(&mut self) -> Result<Vec<SortItem>, Error> {
        if self.match_one(TokenKind::Order)?.is_none() {
            return Ok(Vec::new());
        }
        self.expect_tok(TokenKind::By, "BY following ORDER")?;
        let mut items = vec![self.sort_item()?];
        while self.match_one(TokenKind::Comma)?.is_some() {
            items.push(self.sort_item()?);
        }
        Ok(items)
    }

    fn sort_item(&mut self) -> Result<SortItem, Error> {
        let expr = self
            .expr()?
            .ok_or_else(|| self.err("expecting expression in ORDER BY"))?;
        let order = if self.match_one(TokenKind::Ascending)?.is_some()
            || self.match_one(TokenKind::Asc)?.is_some()
        {
            SortOrder::Ascending
        } else if self.match_one(TokenKind::Descending)?.is_some()
            || self.match_one(TokenKind::Desc)?.is_some()
        {
            SortOrder::Descending
        } else {
            SortOrder::Unspecified
        };
        Ok(SortItem { expr, order })
    }

    fn skip_opt(&mut self) -> Result<Option<Expr>, Error> {
        if self.match_one(TokenKind::Skip)?.is_none() {
            return Ok(None);
        }
        Ok(Some(
            self.expr()?
                .ok_or_else(|| self.err("expecting expression following SKIP"))?,
        ))
    }

    fn limit_opt(&mut self) -> Result<Option<Expr>, Error> {
        if self.match_one(TokenKind::Limit)?.is_none() {
            return Ok(None);
        }
        Ok(Some(
            self.expr()?
                .ok_or_else(|| self.err("expecting expression following LIMIT"))?,
        ))
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
    fn return_star_sets_all() {
        let stmt = parse("MATCH (n) RETURN *").unwrap();
        let Query::SinglePartQuery(q) = stmt.query;
        let projection = q.projection.unwrap();
        assert!(projection.items.all);
        assert!(projection.items.items.is_empty());
    }

    #[test]
    fn alias_and_distinct_are_captured() {
        let stmt = parse("MATCH (n) RETURN DISTINCT n AS person").unwrap();
        let Query::SinglePartQuery(q) = stmt.query;
        let projection = q.projection.unwrap();
        assert!(projection.distinct);
        assert!(projection.items.items[0].alias.is_some());
    }

    #[test]
    fn order_by_skip_limit_compose() {
        let stmt = parse("MATCH (n) RETURN n ORDER BY n.age DESC SKIP 5 LIMIT 10").unwrap();
        let Query::SinglePartQuery(q) = stmt.query;
        let projection = q.projection.unwrap();
        assert_eq!(projection.order.len(), 1);
        assert_eq!(projection.order[0].order, SortOrder::Descending);
        assert!(projection.skip.is_some());
        assert!(projection.limit.is_some());
    }

    #[test]
    fn sort_item_without_direction_is_unspecified() {
        let stmt = parse("MATCH (n) RETURN n ORDER BY n.name").unwrap();
        let Query::SinglePartQuery(q) = stmt.query;
        assert_eq!(q.projection.unwrap().order[0].order, SortOrder::Unspecified);
    }
}
