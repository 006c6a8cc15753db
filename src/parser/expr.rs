//! The expression grammar: the full precedence ladder from `OR` down to
//! `atom`, plus every atom alternative.
//!
//! Grounded on `original_source/parser/parser.go`'s `orExpr`..`atom` chain.
//! Each binary precedence level there is a `for { switch { ... } }` loop
//! that folds left; `fold_left_binary` below is the one generic shape all
//! of them share. `NOT` and unary `+`/`-` are prefix loops instead, and
//! `stringListNullOperatorExpr` is a postfix suffix loop (`IS [NOT] NULL`,
//! `STARTS WITH`/`ENDS WITH`/`CONTAINS`, `IN`, and the `[...]` index/range
//! operator can all trail an expression, and can chain).

use crate::ast::*;
use crate::error::{Error, Reporter};
use crate::lexer::{Literal, TokenKind};

use super::Parser;

const QUANTIFIER_NAMES: &[(&str, Operator)] = &[
    ("ANY", Operator::AnyOp),
    ("NONE", Operator::NoneOp),
    ("SINGLE", Operator::SingleOp),
];

impl<'a, R: Reporter> Parser<'a, R> {
    pub(super) fn expr(&mut self) -> Result<Option<Expr>, Error> {
        self.guarded(Self::or_expr)
    }

    /// Folds `next` left-associatively across whichever of `ops` keeps
    /// matching, mirroring every `for { switch { case match(...) ... } }`
    /// binary-level loop in the reference parser.
    fn fold_left_binary(
        &mut self,
        next: fn(&mut Self) -> Result<Option<Expr>, Error>,
        ops: &[(TokenKind, Operator)],
    ) -> Result<Option<Expr>, Error> {
        let Some(mut left) = next(self)? else {
            return Ok(None);
        };
        'fold: loop {
            for &(kind, op) in ops {
                if self.match_one(kind)?.is_some() {
                    let right = next(self)?.ok_or_else(|| self.err("expecting expression"))?;
                    left = Expr::Binary(Box::new(BinaryExpr { left, op, right }));
                    continue 'fold;
                }
            }
            break;
        }
        Ok(Some(left))
    }

    fn or_expr(&mut self) -> Result<Option<Expr>, Error> {
        self.fold_left_binary(Self::xor_expr, &[(TokenKind::Or, Operator::Or)])
    }

    fn xor_expr(&mut self) -> Result<Option<Expr>, Error> {
        self.fold_left_binary(Self::and_expr, &[(TokenKind::Xor, Operator::Xor)])
    }

    fn and_expr(&mut self) -> Result<Option<Expr>, Error> {
        self.fold_left_binary(Self::not_expr, &[(TokenKind::And, Operator::And)])
    }

    fn not_expr(&mut self) -> Result<Option<Expr>, Error> {
        let mut count = 0usize;
        while self.match_one(TokenKind::Not)?.is_some() {
            count += 1;
        }
        let Some(mut expr) = self.comparison_expr()? else {
            return if count > 0 {
                Err(self.err("expecting expression following NOT"))
            } else {
                Ok(None)
            };
        };
        for _ in 0..count {
            expr = Expr::Unary(Box::new(UnaryExpr {
                op: Operator::Not,
                expr,
            }));
        }
        Ok(Some(expr))
    }

    fn comparison_expr(&mut self) -> Result<Option<Expr>, Error> {
        self.fold_left_binary(
            Self::add_or_subtract_expr,
            &[
                (TokenKind::Equal, Operator::Eq),
                (TokenKind::NotEqual, Operator::Neq),
                (TokenKind::LessThanOrEqual, Operator::Le),
                (TokenKind::GreaterThanOrEqual, Operator::Ge),
                (TokenKind::LessThan, Operator::Lt),
                (TokenKind::GreaterThan, Operator::Gt),
            ],
        )
    }

    fn add_or_subtract_expr(&mut self) -> Result<Option<Expr>, Error> {
        self.fold_left_binary(
            Self::multiply_divide_modulo_expr,
            &[(TokenKind::Plus, Operator::Add), (TokenKind::Minus, Operator::Sub)],
        )
    }

    fn multiply_divide_modulo_expr(&mut self) -> Result<Option<Expr>, Error> {
        self.fold_left_binary(
            Self::power_expr,
            &[
                (TokenKind::Star, Operator::Mul),
                (TokenKind::ForwardSlash, Operator::Div),
                (TokenKind::Percent, Operator::Mod),
            ],
        )
    }

    fn power_expr(&mut self) -> Result<Option<Expr>, Error> {
        self.fold_left_binary(
            Self::unary_add_or_subtract_expr,
            &[(TokenKind::Caret, Operator::Pow)],
        )
    }

    fn unary_add_or_subtract_expr(&mut self) -> Result<Option<Expr>, Error> {
        let mut signs = 0usize;
        let mut negate = false;
        loop {
            if self.match_one(TokenKind::Plus)?.is_some() {
                signs += 1;
                continue;
            }
            if self.match_one(TokenKind::Minus)?.is_some() {
                signs += 1;
                negate = !negate;
                continue;
            }
            break;
        }
        match self.string_list_null_operator_expr()? {
            Some(expr) => Ok(Some(if negate {
                Expr::Unary(Box::new(UnaryExpr {
                    op: Operator::Negate,
                    expr,
                }))
            } else {
                expr
            })),
            None if signs > 0 => Err(self.err("expecting expression following unary operator")),
            None => Ok(None),
        }
    }

    /// Takes a `propertyOrLabelsExpr` and greedily collects any number of
    /// postfix operators (`STARTS WITH`/`ENDS WITH`/`CONTAINS`, `IN`, the
    /// `[...]` index/range operator, `IS [NOT] NULL`). If any were
    /// collected, the whole run folds into one
    /// `BinaryExpr(lhs, StringOrListOp, ListExpr([postfixes…]))`; with none
    /// collected the bare `propertyOrLabelsExpr` is returned unwrapped.
    fn string_list_null_operator_expr(&mut self) -> Result<Option<Expr>, Error> {
        let Some(lhs) = self.property_or_labels_expr()? else {
            return Ok(None);
        };
        let mut postfixes = Vec::new();
        loop {
            if let Some(op) = self.try_is_null_expr()? {
                postfixes.push(Expr::Op(OpExpr { op }));
                continue;
            }
            if let Some((op, right)) = self.try_string_op_expr()? {
                postfixes.push(Expr::Unary(Box::new(UnaryExpr { op, expr: right })));
                continue;
            }
            if let Some(postfix) = self.try_list_op_expr(&lhs)? {
                postfixes.push(postfix);
                continue;
            }
            break;
        }
        if postfixes.is_empty() {
            return Ok(Some(lhs));
        }
        Ok(Some(Expr::Binary(Box::new(BinaryExpr {
            left: lhs,
            op: Operator::StringOrListOp,
            right: Expr::List(ListExpr { items: postfixes }),
        }))))
    }

    fn try_is_null_expr(&mut self) -> Result<Option<Operator>, Error> {
        if self.match_one(TokenKind::Is)?.is_none() {
            return Ok(None);
        }
        let negate = self.match_one(TokenKind::Not)?.is_some();
        self.expect_tok(TokenKind::Null, "NULL following IS")?;
        Ok(Some(if negate {
            Operator::IsNotNull
        } else {
            Operator::IsNull
        }))
    }

    fn try_string_op_expr(&mut self) -> Result<Option<(Operator, Expr)>, Error> {
        let op = if self.match_one(TokenKind::Starts)?.is_some() {
            self.expect_tok(TokenKind::With, "WITH following STARTS")?;
            Operator::StartsWith
        } else if self.match_one(TokenKind::Ends)?.is_some() {
            self.expect_tok(TokenKind::With, "WITH following ENDS")?;
            Operator::EndsWith
        } else if self.match_one(TokenKind::Contains)?.is_some() {
            Operator::Contains
        } else {
            return Ok(None);
        };
        let right = self
            .property_or_labels_expr()?
            .ok_or_else(|| self.err("expecting expression"))?;
        Ok(Some((op, right)))
    }

    /// `IN expr`, or the bracketed index/range operator: `[idx]`,
    /// `[start..end]`, `[start..]`, `[..end]`, `[..]`. `base` becomes the
    /// `target` of a `ListOperatorExpr` postfix so it stays self-describing
    /// even once folded into the postfix list.
    fn try_list_op_expr(&mut self, base: &Expr) -> Result<Option<Expr>, Error> {
        if self.match_one(TokenKind::In)?.is_some() {
            let right = self
                .property_or_labels_expr()?
                .ok_or_else(|| self.err("expecting expression following IN"))?;
            return Ok(Some(Expr::Unary(Box::new(UnaryExpr {
                op: Operator::InList,
                expr: right,
            }))));
        }
        if self.match_one(TokenKind::OpenBracket)?.is_none() {
            return Ok(None);
        }
        if self.match_one(TokenKind::Dotdot)?.is_some() {
            let end = self.expr()?;
            self.expect_tok(TokenKind::CloseBracket, "']' to close list range")?;
            return Ok(Some(Expr::ListOperator(Box::new(ListOperatorExpr {
                target: base.clone(),
                op: Operator::ListRange,
                expr: None,
                end_expr: end,
            }))));
        }
        let first = self
            .expr()?
            .ok_or_else(|| self.err("expecting expression in list operator"))?;
        if self.match_one(TokenKind::Dotdot)?.is_some() {
            let end = self.expr()?;
            self.expect_tok(TokenKind::CloseBracket, "']' to close list range")?;
            return Ok(Some(Expr::ListOperator(Box::new(ListOperatorExpr {
                target: base.clone(),
                op: Operator::ListRange,
                expr: Some(first),
                end_expr: end,
            }))));
        }
        self.expect_tok(TokenKind::CloseBracket, "']' to close list index")?;
        Ok(Some(Expr::ListOperator(Box::new(ListOperatorExpr {
            target: base.clone(),
            op: Operator::ListIndex,
            expr: Some(first),
            end_expr: None,
        }))))
    }

    fn property_or_labels_expr(&mut self) -> Result<Option<Expr>, Error> {
        let Some(base) = self.atom()? else {
            return Ok(None);
        };
        let mut property_keys = Vec::new();
        loop {
            let pos = self.position();
            if self.match_one(TokenKind::Period)?.is_none() {
                break;
            }
            match self.schema_name()? {
                Some(name) => property_keys.push(name),
                None => {
                    self.restore(pos);
                    break;
                }
            }
        }
        let labels = self.node_labels()?;
        Ok(Some(Expr::PropertyLabels(Box::new(PropertyLabelsExpr {
            atom: base,
            property_keys,
            labels,
        }))))
    }

    /// Tries each atom alternative in turn, in the order the reference
    /// parser does, so ambiguous leading tokens (`[`, an identifier) are
    /// resolved the same way.
    fn atom(&mut self) -> Result<Option<Expr>, Error> {
        if let Some(e) = self.pattern_comprehension_expr()? {
            return Ok(Some(Expr::PatternComprehension(Box::new(e))));
        }
        if let Some(e) = self.literal()? {
            return Ok(Some(e));
        }
        if let Some(p) = self.parameter_opt()? {
            return Ok(Some(Expr::Parameter(p)));
        }
        if let Some(e) = self.case_expr()? {
            return Ok(Some(Expr::Case(Box::new(e))));
        }
        if let Some(e) = self.count_all()? {
            return Ok(Some(e));
        }
        if let Some(e) = self.list_comprehension_expr()? {
            return Ok(Some(Expr::ListComprehension(Box::new(e))));
        }
        if let Some(e) = self.quantifier_function()? {
            return Ok(Some(Expr::Quantifier(Box::new(e))));
        }
        if let Some(e) = self.relationships_pattern()? {
            return Ok(Some(Expr::RelationshipsPattern(e)));
        }
        if let Some(e) = self.parenthesized_expr()? {
            return Ok(Some(e));
        }
        if let Some(e) = self.function_invocation()? {
            return Ok(Some(Expr::FunctionInvocation(e)));
        }
        if let Some(e) = self.variable_expr()? {
            return Ok(Some(Expr::Variable(e)));
        }
        Ok(None)
    }

    /// `count(*)` — matched, like the reference, by any identifier token
    /// followed by `(*)`, not specifically the lexeme `count`.
    fn count_all(&mut self) -> Result<Option<Expr>, Error> {
        match self.match_phrase(&[
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Star,
            TokenKind::CloseParen,
        ])? {
            Some(_) => Ok(Some(Expr::Op(OpExpr {
                op: Operator::CountAll,
            }))),
            None => Ok(None),
        }
    }

    fn parenthesized_expr(&mut self) -> Result<Option<Expr>, Error> {
        let pos = self.position();
        if self.match_one(TokenKind::OpenParen)?.is_none() {
            return Ok(None);
        }
        let Some(inner) = self.expr()? else {
            self.restore(pos);
            return Ok(None);
        };
        self.expect_tok(TokenKind::CloseParen, "')' to close parenthesized expression")?;
        Ok(Some(inner))
    }

    fn literal(&mut self) -> Result<Option<Expr>, Error> {
        if let Some(tok) = self.match_tok(&[
            TokenKind::DecimalInteger,
            TokenKind::HexInteger,
            TokenKind::OctInteger,
            TokenKind::Double,
            TokenKind::StringLiteral,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Null,
        ])? {
            let value = match (tok.kind, tok.literal) {
                (
                    TokenKind::DecimalInteger | TokenKind::HexInteger | TokenKind::OctInteger,
                    Literal::Integer(v),
                ) => PrimitiveValue::Integer(v),
                (TokenKind::Double, Literal::Double(v)) => PrimitiveValue::Double(v),
                (TokenKind::StringLiteral, Literal::Str(s)) => PrimitiveValue::Str(s),
                (TokenKind::True, _) => PrimitiveValue::Boolean(true),
                (TokenKind::False, _) => PrimitiveValue::Boolean(false),
                (TokenKind::Null, _) => PrimitiveValue::Null,
                _ => unreachable!("token kind/literal pairing is fixed by the lexer"),
            };
            return Ok(Some(Expr::Primitive(PrimitiveLiteral { value })));
        }
        if let Some(map) = self.map_literal_opt()? {
            return Ok(Some(Expr::MapLiteral(map)));
        }
        if let Some(list) = self.list_literal_opt()? {
            return Ok(Some(Expr::ListLiteral(list)));
        }
        Ok(None)
    }

    /// `[expr, expr, ...]`. Restores and yields `None` instead of erroring
    /// on a mismatched close, so `atom` can fall through to
    /// `list_comprehension_expr` for `[x IN coll | x]`-shaped input, which
    /// also starts with `[` and a valid-looking leading expression.
    fn list_literal_opt(&mut self) -> Result<Option<ListLiteral>, Error> {
        let pos = self.position();
        if self.match_one(TokenKind::OpenBracket)?.is_none() {
            return Ok(None);
        }
        let mut items = Vec::new();
        if let Some(first) = self.expr()? {
            items.push(first);
            loop {
                if self.match_one(TokenKind::Comma)?.is_none() {
                    break;
                }
                match self.expr()? {
                    Some(item) => items.push(item),
                    None => {
                        self.restore(pos);
                        return Ok(None);
                    }
                }
            }
        }
        if self.match_one(TokenKind::CloseBracket)?.is_none() {
            self.restore(pos);
            return Ok(None);
        }
        Ok(Some(ListLiteral { items }))
    }

    pub(super) fn parameter_opt(&mut self) -> Result<Option<Parameter>, Error> {
        if self.match_one(TokenKind::DollarSign)?.is_none() {
            return Ok(None);
        }
        if let Some(name) = self.symbolic_name()? {
            return Ok(Some(Parameter {
                name: ParameterName::Symbolic(name),
            }));
        }
        if let Some(tok) = self.match_one(TokenKind::DecimalInteger)? {
            if let Literal::Integer(v) = tok.literal {
                return Ok(Some(Parameter {
                    name: ParameterName::Index(v),
                }));
            }
        }
        Err(self.err("expecting parameter name or index following '$'"))
    }

    fn case_expr(&mut self) -> Result<Option<CaseExpr>, Error> {
        if self.match_one(TokenKind::Case)?.is_none() {
            return Ok(None);
        }
        let init = self.expr()?;
        let mut alternatives = Vec::new();
        while self.match_one(TokenKind::When)?.is_some() {
            let when = self
                .expr()?
                .ok_or_else(|| self.err("expecting expression following WHEN"))?;
            self.expect_tok(TokenKind::Then, "THEN following WHEN expression")?;
            let then = self
                .expr()?
                .ok_or_else(|| self.err("expecting expression following THEN"))?;
            alternatives.push(CaseAltNode { when, then });
        }
        if alternatives.is_empty() {
            return Err(self.err("expecting at least one WHEN alternative in CASE expression"));
        }
        let else_expr = if self.match_one(TokenKind::Else)?.is_some() {
            Some(
                self.expr()?
                    .ok_or_else(|| self.err("expecting expression following ELSE"))?,
            )
        } else {
            None
        };
        self.expect_tok(TokenKind::End, "END to close CASE expression")?;
        Ok(Some(CaseExpr {
            init,
            alternatives,
            else_expr,
        }))
    }

    fn list_comprehension_expr(&mut self) -> Result<Option<ListComprehensionExpr>, Error> {
        let pos = self.position();
        if self.match_one(TokenKind::OpenBracket)?.is_none() {
            return Ok(None);
        }
        let Some(filter) = self.filter_expr()? else {
            self.restore(pos);
            return Ok(None);
        };
        self.expect_tok(TokenKind::Pipe, "'|' in list comprehension")?;
        let expr = self
            .expr()?
            .ok_or_else(|| self.err("expecting expression following '|'"))?;
        self.expect_tok(TokenKind::CloseBracket, "']' to close list comprehension")?;
        Ok(Some(ListComprehensionExpr { filter, expr }))
    }

    fn filter_expr(&mut self) -> Result<Option<FilterExpr>, Error> {
        let pos = self.position();
        let Some(name) = self.symbolic_name()? else {
            return Ok(None);
        };
        if self.match_one(TokenKind::In)?.is_none() {
            self.restore(pos);
            return Ok(None);
        }
        let in_expr = self
            .expr()?
            .ok_or_else(|| self.err("expecting expression following IN"))?;
        let where_expr = if self.match_one(TokenKind::Where)?.is_some() {
            Some(
                self.expr()?
                    .ok_or_else(|| self.err("expecting expression following WHERE"))?,
            )
        } else {
            None
        };
        Ok(Some(FilterExpr {
            variable: VariableExpr { name },
            in_expr,
            where_expr,
        }))
    }

    fn quantifier_function(&mut self) -> Result<Option<QuantifierExpr>, Error> {
        let pos = self.position();
        let op = if self.match_one(TokenKind::All)?.is_some() {
            Operator::AllOp
        } else if let Some(tok) = self.match_one(TokenKind::Identifier)? {
            let upper = tok.lexeme.to_ascii_uppercase();
            match QUANTIFIER_NAMES.iter().find(|(name, _)| *name == upper) {
                Some((_, op)) => *op,
                None => {
                    self.restore(pos);
                    return Ok(None);
                }
            }
        } else {
            return Ok(None);
        };
        if self.match_one(TokenKind::OpenParen)?.is_none() {
            self.restore(pos);
            return Ok(None);
        }
        let filter = self
            .filter_expr()?
            .ok_or_else(|| self.err("expecting filter expression"))?;
        self.expect_tok(TokenKind::CloseParen, "')' to close quantifier function")?;
        Ok(Some(QuantifierExpr { op, filter }))
    }

    fn variable_expr(&mut self) -> Result<Option<VariableExpr>, Error> {
        Ok(self.symbolic_name()?.map(|name| VariableExpr { name }))
    }

    fn pattern_comprehension_expr(&mut self) -> Result<Option<PatternComprehensionExpr>, Error> {
        let pos = self.position();
        if self.match_one(TokenKind::OpenBracket)?.is_none() {
            return Ok(None);
        }
        let variable = self.try_variable_assignment()?;
        let Some(relationships) = self.relationships_pattern()? else {
            self.restore(pos);
            return Ok(None);
        };
        let where_expr = if self.match_one(TokenKind::Where)?.is_some() {
            Some(
                self.expr()?
                    .ok_or_else(|| self.err("expecting expression following WHERE"))?,
            )
        } else {
            None
        };
        self.expect_tok(TokenKind::Pipe, "'|' in pattern comprehension")?;
        let pipe_expr = self
            .expr()?
            .ok_or_else(|| self.err("expecting expression following '|'"))?;
        self.expect_tok(TokenKind::CloseBracket, "']' to close pattern comprehension")?;
        Ok(Some(PatternComprehensionExpr {
            variable,
            relationships,
            where_expr,
            pipe_expr,
        }))
    }

    fn function_invocation(&mut self) -> Result<Option<FunctionInvocation>, Error> {
        let pos = self.position();
        let Some(name) = self.function_name()? else {
            return Ok(None);
        };
        if self.match_one(TokenKind::OpenParen)?.is_none() {
            self.restore(pos);
            return Ok(None);
        }
        let distinct = self.match_one(TokenKind::Distinct)?.is_some();
        let mut args = Vec::new();
        if self.match_one(TokenKind::CloseParen)?.is_some() {
            return Ok(Some(FunctionInvocation {
                name,
                distinct,
                args,
            }));
        }
        let first = self
            .expr()?
            .ok_or_else(|| self.err("expecting argument expression"))?;
        args.push(first);
        while self.match_one(TokenKind::Comma)?.is_some() {
            let arg = self
                .expr()?
                .ok_or_else(|| self.err("expecting argument expression"))?;
            args.push(arg);
        }
        self.expect_tok(TokenKind::CloseParen, "')' to close function invocation")?;
        Ok(Some(FunctionInvocation {
            name,
            distinct,
            args,
        }))
    }

    fn function_name(&mut self) -> Result<Option<FunctionName>, Error> {
        if self.match_one(TokenKind::Exists)?.is_some() {
            return Ok(Some(FunctionName::Exists));
        }
        let namespace = self.namespace()?;
        match self.symbolic_name()? {
            Some(name) => Ok(Some(FunctionName::Symbolic { namespace, name })),
            None if !namespace.is_empty() => {
                Err(self.err("expecting function name following '.'"))
            }
            None => Ok(None),
        }
    }

    /// Zero or more `symbolicName '.'` pairs; the final unmatched attempt
    /// is rewound so the caller sees the dangling identifier untouched.
    fn namespace(&mut self) -> Result<Vec<SymbolicName>, Error> {
        let mut parts = Vec::new();
        loop {
            let pos = self.position();
            let Some(name) = self.symbolic_name()? else {
                break;
            };
            if self.match_one(TokenKind::Period)?.is_none() {
                self.restore(pos);
                break;
            }
            parts.push(name);
        }
        Ok(parts)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::error::CollectingReporter;
    use crate::Parser;

    fn parse_return_expr(src: &str) -> Expr {
        let mut reporter = CollectingReporter::new();
        let stmt = Parser::new(&format!("MATCH (n) RETURN {src}"), &mut reporter)
            .parse()
            .unwrap_or_else(|e| panic!("{src}: {e}"));
        let Query::SinglePartQuery(q) = stmt.query;
        q.projection.unwrap().items.items.into_iter().next().unwrap().expr
    }

    #[test]
    fn precedence_binds_multiplication_tighter_than_addition() {
        let expr = parse_return_expr("1 + 2 * 3");
        let Expr::Binary(top) = expr else { panic!() };
        assert_eq!(top.op, Operator::Add);
        let Expr::Binary(rhs) = &top.right else { panic!() };
        assert_eq!(rhs.op, Operator::Mul);
    }

    #[test]
    fn not_is_right_of_and_in_precedence() {
        let expr = parse_return_expr("NOT true AND false");
        let Expr::Binary(top) = expr else { panic!() };
        assert_eq!(top.op, Operator::And);
        assert!(matches!(top.left, Expr::Unary(_)));
    }

    /// Unwraps the single postfix produced by a `stringListNullOperatorExpr`
    /// fold, asserting there was exactly one.
    fn only_postfix(expr: Expr) -> Expr {
        let Expr::Binary(bin) = expr else { panic!("expected a postfix fold") };
        assert_eq!(bin.op, Operator::StringOrListOp);
        let Expr::List(list) = bin.right else { panic!() };
        assert_eq!(list.items.len(), 1);
        list.items.into_iter().next().unwrap()
    }

    #[test]
    fn list_index_and_range_distinguish_from_list_literal() {
        assert!(matches!(parse_return_expr("[1,2,3]"), Expr::ListLiteral(_)));
        assert!(matches!(
            only_postfix(parse_return_expr("a[0]")),
            Expr::ListOperator(op) if op.op == Operator::ListIndex
        ));
        assert!(matches!(
            only_postfix(parse_return_expr("a[1..3]")),
            Expr::ListOperator(op) if op.op == Operator::ListRange
        ));
    }

    #[test]
    fn list_comprehension_distinguishes_from_list_literal() {
        let expr = parse_return_expr("[x IN [1,2,3] | x * 2]");
        assert!(matches!(expr, Expr::ListComprehension(_)));
    }

    #[test]
    fn count_all_matches_any_leading_identifier() {
        assert!(matches!(parse_return_expr("count(*)"), Expr::Op(op) if op.op == Operator::CountAll));
    }

    #[test]
    fn function_name_requires_a_name_after_trailing_dot() {
        let mut reporter = CollectingReporter::new();
        let err = Parser::new("MATCH (n) RETURN foo.", &mut reporter)
            .parse()
            .unwrap_err();
        assert!(err.message.contains("function name"));
    }

    #[test]
    fn is_null_and_property_lookup_compose() {
        let expr = parse_return_expr("n.name IS NOT NULL");
        let Expr::Binary(bin) = &expr else { panic!() };
        assert_eq!(bin.op, Operator::StringOrListOp);
        let Expr::PropertyLabels(labels) = &bin.left else { panic!() };
        assert_eq!(labels.property_keys.len(), 1);
        let Expr::Op(op) = only_postfix(expr) else { panic!() };
        assert_eq!(op.op, Operator::IsNotNull);
    }

    #[test]
    fn chained_postfixes_collect_into_one_list() {
        let expr = parse_return_expr("a STARTS WITH 'x' IS NOT NULL");
        let Expr::Binary(bin) = expr else { panic!() };
        assert_eq!(bin.op, Operator::StringOrListOp);
        let Expr::List(list) = bin.right else { panic!() };
        assert_eq!(list.items.len(), 2);
        assert!(matches!(list.items[0], Expr::Unary(ref u) if u.op == Operator::StartsWith));
        assert!(matches!(list.items[1], Expr::Op(ref o) if o.op == Operator::IsNotNull));
    }

    #[test]
    fn property_equality_wraps_both_sides_in_property_labels() {
        let expr = parse_return_expr("g.id = 1337");
        let Expr::Binary(bin) = expr else { panic!() };
        assert_eq!(bin.op, Operator::Eq);
        let Expr::PropertyLabels(left) = bin.left else { panic!() };
        assert_eq!(left.property_keys.len(), 1);
        let Expr::PropertyLabels(right) = bin.right else { panic!() };
        assert!(right.property_keys.is_empty() && right.labels.is_empty());
        assert!(matches!(right.atom, Expr::Primitive(_)));
    }

    #[test]
    fn function_argument_unwraps_unary_negate_under_property_labels() {
        let expr = parse_return_expr("abs(-1)");
        let Expr::PropertyLabels(wrapper) = expr else { panic!() };
        let Expr::FunctionInvocation(call) = wrapper.atom else { panic!() };
        assert_eq!(call.args.len(), 1);
        let Expr::Unary(u) = &call.args[0] else { panic!() };
        assert_eq!(u.op, Operator::Negate);
    }
}
