//! The pattern grammar: nodes, relationships, and the map/parameter
//! properties attached to either.
//!
//! Grounded on `original_source/parser/parser.go`'s `pattern`/`patternPart`/
//! `patternElement`/`patternElementChain`/`nodePattern`/
//! `relationshipPattern`/`relationshipDetail`/`properties`/`mapLiteral`/
//! `rangeLiteral`/`relationshipTypes`/`relationshipsPattern`.

use crate::ast::*;
use crate::error::{Error, Reporter};
use crate::lexer::{Literal, TokenKind};

use super::Parser;

impl<'a, R: Reporter> Parser<'a, R> {
    pub(super) fn pattern(&mut self) -> Result<Pattern, Error> {
        let mut parts = vec![self.pattern_part()?];
        while self.match_one(TokenKind::Comma)?.is_some() {
            parts.push(self.pattern_part()?);
        }
        Ok(Pattern { parts })
    }

    fn pattern_part(&mut self) -> Result<PatternPart, Error> {
        let variable = self.try_variable_assignment()?;
        let element = self
            .pattern_element()?
            .ok_or_else(|| self.err("expecting pattern"))?;
        Ok(PatternPart { variable, element })
    }

    /// `variable '='`, tried as a unit: if the `=` doesn't follow, neither
    /// the identifier nor the `=` were meant as a variable binding, so both
    /// are put back.
    pub(super) fn try_variable_assignment(&mut self) -> Result<Option<SymbolicName>, Error> {
        let pos = self.position();
        if let Some(name) = self.symbolic_name()? {
            if self.match_one(TokenKind::Equal)?.is_some() {
                return Ok(Some(name));
            }
        }
        self.restore(pos);
        Ok(None)
    }

    pub(super) fn pattern_element(&mut self) -> Result<Option<PatternElement>, Error> {
        self.guarded(Self::pattern_element_inner)
    }

    fn pattern_element_inner(&mut self) -> Result<Option<PatternElement>, Error> {
        if let Some(left) = self.node_pattern()? {
            let mut chain = Vec::new();
            while let Some(link) = self.pattern_element_chain()? {
                chain.push(link);
            }
            return Ok(Some(PatternElement::Chain { left, chain }));
        }

        let pos = self.position();
        if self.match_one(TokenKind::OpenParen)?.is_some() {
            if let Some(inner) = self.pattern_element()? {
                if self.match_one(TokenKind::CloseParen)?.is_some() {
                    return Ok(Some(PatternElement::Nested(Box::new(inner))));
                }
            }
            self.restore(pos);
        }

        Ok(None)
    }

    fn node_pattern(&mut self) -> Result<Option<NodePattern>, Error> {
        let pos = self.position();
        if self.match_one(TokenKind::OpenParen)?.is_none() {
            return Ok(None);
        }
        let variable = self.symbolic_name()?;
        let labels = self.node_labels()?;
        let properties = self.properties_opt()?;
        if self.match_one(TokenKind::CloseParen)?.is_none() {
            self.restore(pos);
            return Ok(None);
        }
        Ok(Some(NodePattern {
            variable,
            labels,
            properties,
        }))
    }

    fn pattern_element_chain(&mut self) -> Result<Option<PatternElementChain>, Error> {
        let Some(relationship) = self.relationship_pattern()? else {
            return Ok(None);
        };
        let right = self
            .node_pattern()?
            .ok_or_else(|| self.err("expecting node pattern following relationship"))?;
        Ok(Some(PatternElementChain { relationship, right }))
    }

    fn relationship_pattern(&mut self) -> Result<Option<RelationshipPattern>, Error> {
        let pos = self.position();
        let left_dir = if self.match_one(TokenKind::LessThan)?.is_some() {
            RelationshipDirection::Directed
        } else {
            RelationshipDirection::Undirected
        };
        if self.match_one(TokenKind::Minus)?.is_none() {
            self.restore(pos);
            return Ok(None);
        }
        let detail = self.relationship_detail()?;
        if self.match_one(TokenKind::Minus)?.is_none() {
            return Err(self.err("expecting '-' to close relationship pattern"));
        }
        let right_dir = if self.match_one(TokenKind::GreaterThan)?.is_some() {
            RelationshipDirection::Directed
        } else {
            RelationshipDirection::Undirected
        };
        Ok(Some(RelationshipPattern {
            left_dir,
            right_dir,
            detail,
        }))
    }

    fn relationship_detail(&mut self) -> Result<Option<RelationshipDetail>, Error> {
        if self.match_one(TokenKind::OpenBracket)?.is_none() {
            return Ok(None);
        }
        let variable = self.symbolic_name()?;
        let types = self.relationship_types()?;
        let range = self.range_literal()?;
        let properties = self.properties_opt()?;
        self.expect_tok(TokenKind::CloseBracket, "']' to close relationship detail")?;
        Ok(Some(RelationshipDetail {
            variable,
            types,
            range,
            properties,
        }))
    }

    /// `:type (| [:]type)*`.
    ///
    /// Every type after the first `|` is appended to the result — the
    /// reference parser computes each one but never appends it to its
    /// accumulator, so only the first relationship type ever survived
    /// (see DESIGN.md Open Question decision #3).
    fn relationship_types(&mut self) -> Result<Vec<SchemaName>, Error> {
        let mut types = Vec::new();
        if self.match_one(TokenKind::Colon)?.is_none() {
            return Ok(types);
        }
        let first = self
            .schema_name()?
            .ok_or_else(|| self.err("expecting relationship type"))?;
        types.push(first);
        while self.match_one(TokenKind::Pipe)?.is_some() {
            self.match_one(TokenKind::Colon)?;
            let next = self
                .schema_name()?
                .ok_or_else(|| self.err("expecting relationship type"))?;
            types.push(next);
        }
        Ok(types)
    }

    /// `*`, optionally followed by `N`, `N..`, `..N`, or `N..M`. Omitted
    /// bounds use `i64::MIN`/`i64::MAX` as sentinels; `*N` alone (no `..`)
    /// leaves `end` unbounded — the reference parser never tightens it to
    /// `N` when no `..` was seen.
    fn range_literal(&mut self) -> Result<Option<RangeLiteral>, Error> {
        if self.match_one(TokenKind::Star)?.is_none() {
            return Ok(None);
        }
        let first = self.integer_literal_opt()?;
        if self.match_one(TokenKind::Dotdot)?.is_some() {
            let second = self.integer_literal_opt()?;
            return Ok(Some(RangeLiteral {
                begin: first.unwrap_or(i64::MIN),
                end: second.unwrap_or(i64::MAX),
            }));
        }
        match first {
            Some(v) => Ok(Some(RangeLiteral {
                begin: v,
                end: i64::MAX,
            })),
            None => Ok(Some(RangeLiteral::UNBOUNDED)),
        }
    }

    fn integer_literal_opt(&mut self) -> Result<Option<i64>, Error> {
        match self.match_tok(&[
            TokenKind::DecimalInteger,
            TokenKind::HexInteger,
            TokenKind::OctInteger,
        ])? {
            Some(tok) => match tok.literal {
                Literal::Integer(v) => Ok(Some(v)),
                _ => unreachable!("integer token always carries Literal::Integer"),
            },
            None => Ok(None),
        }
    }

    pub(super) fn properties_opt(&mut self) -> Result<Option<Properties>, Error> {
        if let Some(map) = self.map_literal_opt()? {
            return Ok(Some(Properties::Map(map)));
        }
        if let Some(param) = self.parameter_opt()? {
            return Ok(Some(Properties::Parameter(param)));
        }
        Ok(None)
    }

    pub(super) fn map_literal_opt(&mut self) -> Result<Option<MapLiteral>, Error> {
        if self.match_one(TokenKind::OpenBrace)?.is_none() {
            return Ok(None);
        }
        let mut entries = Vec::new();
        if let Some(name) = self.schema_name()? {
            self.expect_tok(TokenKind::Colon, "':' following map key")?;
            let expr = self
                .expr()?
                .ok_or_else(|| self.err("expecting expression in map literal"))?;
            entries.push(PropertyKeyName { name, expr });
            while self.match_one(TokenKind::Comma)?.is_some() {
                let name = self
                    .schema_name()?
                    .ok_or_else(|| self.err("expecting property key name"))?;
                self.expect_tok(TokenKind::Colon, "':' following map key")?;
                let expr = self
                    .expr()?
                    .ok_or_else(|| self.err("expecting expression in map literal"))?;
                entries.push(PropertyKeyName { name, expr });
            }
        }
        self.expect_tok(TokenKind::CloseBrace, "'}' to close map literal")?;
        Ok(Some(MapLiteral { entries }))
    }

    pub(super) fn relationships_pattern(&mut self) -> Result<Option<RelationshipsPattern>, Error> {
        let Some(left) = self.node_pattern()? else {
            return Ok(None);
        };
        let mut chain = Vec::new();
        let first = self
            .pattern_element_chain()?
            .ok_or_else(|| self.err("expecting relationship pattern"))?;
        chain.push(first);
        while let Some(link) = self.pattern_element_chain()? {
            chain.push(link);
        }
        Ok(Some(RelationshipsPattern { left, chain }))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::error::CollectingReporter;
    use crate::Parser;

    fn parse_pattern_element(src: &str) -> PatternElement {
        let mut reporter = CollectingReporter::new();
        let stmt = Parser::new(src, &mut reporter).parse().unwrap();
        let Query::SinglePartQuery(q) = stmt.query;
        let ReadingClause::Match(m) = &q.reading[0];
        m.pattern.parts[0].element.clone()
    }

    #[test]
    fn relationship_types_accumulate_past_the_first_pipe() {
        let element = parse_pattern_element("MATCH (a)-[:KNOWS|LIKES|FOLLOWS]->(b) RETURN a");
        let PatternElement::Chain { chain, .. } = element else {
            panic!()
        };
        assert_eq!(chain[0].relationship.detail.as_ref().unwrap().types.len(), 3);
    }

    #[test]
    fn variable_length_range_with_both_bounds() {
        let element = parse_pattern_element("MATCH (a)-[:X*2..5]->(b) RETURN a");
        let PatternElement::Chain { chain, .. } = element else {
            panic!()
        };
        let range = chain[0]
            .relationship
            .detail
            .as_ref()
            .unwrap()
            .range
            .unwrap();
        assert_eq!(range.begin, 2);
        assert_eq!(range.end, 5);
    }

    #[test]
    fn bare_hop_count_leaves_the_upper_bound_unbounded() {
        let element = parse_pattern_element("MATCH (a)-[:X*3]->(b) RETURN a");
        let PatternElement::Chain { chain, .. } = element else {
            panic!()
        };
        let range = chain[0]
            .relationship
            .detail
            .as_ref()
            .unwrap()
            .range
            .unwrap();
        assert_eq!(range.begin, 3);
        assert_eq!(range.end, i64::MAX);
    }

    #[test]
    fn range_bound_accepts_hex_and_octal_literals() {
        let element = parse_pattern_element("MATCH (a)-[:X*0x2..017]->(b) RETURN a");
        let PatternElement::Chain { chain, .. } = element else {
            panic!()
        };
        let range = chain[0]
            .relationship
            .detail
            .as_ref()
            .unwrap()
            .range
            .unwrap();
        assert_eq!(range.begin, 2);
        assert_eq!(range.end, 15);
    }

    #[test]
    fn nested_pattern_element_unwraps_parens() {
        let element = parse_pattern_element("MATCH ((a)) RETURN a");
        assert!(matches!(element, PatternElement::Nested(_)));
    }
}
