//! The typed abstract syntax tree produced by [`crate::parser::Parser::parse`].
//!
//! Every node here is a closed, tagged-union Rust type rather than a lossless
//! syntax tree walked after the fact: the parser builds these directly as it
//! recognizes each production, and nothing is re-derived from source text
//! after the fact. The shapes mirror the node families in
//! `original_source/ast/ast.go` (interfaces there become enums here,
//! concrete structs there become enum-variant payloads here); field names
//! follow that file except where the distilled grammar renamed or merged a
//! production.
//!
//! The tree is acyclic and single-owner: every child is owned by exactly one
//! parent, so no arena, no reference counting, no back pointers.

use crate::lexer::token::TokenKind;

/// The root of a successful parse: the query AST plus the source it was
/// parsed from, for callers that want to re-slice lexemes by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub query: Query,
    pub source: String,
}

/// A parsed query. Only `singlePartQuery` is implemented; `UNION`-combined
/// multi-part queries are not part of this grammar subset.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    SinglePartQuery(SinglePartQuery),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SinglePartQuery {
    pub reading: Vec<ReadingClause>,
    pub updating: Vec<UpdatingClause>,
    pub projection: Option<Projection>,
}

/// Only `MATCH` is implemented; `UNWIND` and `CALL` are future work.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadingClause {
    Match(MatchClause),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchClause {
    pub optional: bool,
    pub pattern: Pattern,
    pub where_expr: Option<Expr>,
}

/// Only `CREATE` is implemented; `MERGE`/`SET`/`REMOVE`/`DELETE` are future
/// work.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdatingClause {
    Create(CreateClause),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateClause {
    pub pattern: Pattern,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    pub parts: Vec<PatternPart>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternPart {
    pub variable: Option<SymbolicName>,
    pub element: PatternElement,
}

/// A `patternElement`: either a node chained through zero or more
/// relationships, or a parenthesized nesting of another pattern element.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternElement {
    Chain {
        left: NodePattern,
        chain: Vec<PatternElementChain>,
    },
    Nested(Box<PatternElement>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternElementChain {
    pub relationship: RelationshipPattern,
    pub right: NodePattern,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodePattern {
    pub variable: Option<SymbolicName>,
    pub labels: Vec<SchemaName>,
    pub properties: Option<Properties>,
}

/// Whether a relationship's `<`/`>` arrowhead was present on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipDirection {
    Directed,
    Undirected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipPattern {
    pub left_dir: RelationshipDirection,
    pub right_dir: RelationshipDirection,
    pub detail: Option<RelationshipDetail>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelationshipDetail {
    pub variable: Option<SymbolicName>,
    pub types: Vec<SchemaName>,
    pub range: Option<RangeLiteral>,
    pub properties: Option<Properties>,
}

/// `begin`/`end` use `i64::MIN`/`i64::MAX` as sentinels for an omitted bound,
/// matching `original_source/parser/parser.go`'s use of `math.MinInt64`/
/// `math.MaxInt64` in `rangeLiteral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeLiteral {
    pub begin: i64,
    pub end: i64,
}

impl RangeLiteral {
    pub const UNBOUNDED: RangeLiteral = RangeLiteral {
        begin: i64::MIN,
        end: i64::MAX,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub enum Properties {
    Map(MapLiteral),
    Parameter(Parameter),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapLiteral {
    pub entries: Vec<PropertyKeyName>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyKeyName {
    pub name: SchemaName,
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub distinct: bool,
    pub items: ProjectionItems,
    pub order: Vec<SortItem>,
    pub skip: Option<Expr>,
    pub limit: Option<Expr>,
}

/// `all` is set by a bare `RETURN *`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionItems {
    pub all: bool,
    pub items: Vec<ProjectionItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionItem {
    pub expr: Expr,
    pub alias: Option<SymbolicName>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
    Unspecified,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortItem {
    pub expr: Expr,
    pub order: SortOrder,
}

/// The expression tree. Every precedence level in §4.2 folds into one of
/// these variants; see `crate::parser::expr` for how each is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Op(OpExpr),
    Unary(Box<UnaryExpr>),
    Binary(Box<BinaryExpr>),
    Ternary(Box<TernaryExpr>),
    List(ListExpr),
    ListLiteral(ListLiteral),
    MapLiteral(MapLiteral),
    Primitive(PrimitiveLiteral),
    PropertyLabels(Box<PropertyLabelsExpr>),
    Parameter(Parameter),
    Case(Box<CaseExpr>),
    ListComprehension(Box<ListComprehensionExpr>),
    Filter(Box<FilterExpr>),
    Quantifier(Box<QuantifierExpr>),
    Variable(VariableExpr),
    PatternComprehension(Box<PatternComprehensionExpr>),
    RelationshipsPattern(RelationshipsPattern),
    FunctionInvocation(FunctionInvocation),
    ListOperator(Box<ListOperatorExpr>),
}

/// A nullary operator carried as an expression on its own, e.g. `IS NULL`
/// or the `COUNT(*)` sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct OpExpr {
    pub op: Operator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: Operator,
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Expr,
    pub op: Operator,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TernaryExpr {
    pub e1: Expr,
    pub op: Operator,
    pub e2: Expr,
    pub e3: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListExpr {
    pub items: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListLiteral {
    pub items: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyLabelsExpr {
    pub atom: Expr,
    pub property_keys: Vec<SchemaName>,
    pub labels: Vec<SchemaName>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    Integer(i64),
    Double(f64),
    Str(String),
    Boolean(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveLiteral {
    pub value: PrimitiveValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: ParameterName,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParameterName {
    Symbolic(SymbolicName),
    Index(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpr {
    pub init: Option<Expr>,
    pub alternatives: Vec<CaseAltNode>,
    pub else_expr: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseAltNode {
    pub when: Expr,
    pub then: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListComprehensionExpr {
    pub filter: FilterExpr,
    pub expr: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterExpr {
    pub variable: VariableExpr,
    pub in_expr: Expr,
    pub where_expr: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuantifierExpr {
    pub op: Operator,
    pub filter: FilterExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: SymbolicName,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternComprehensionExpr {
    pub variable: Option<SymbolicName>,
    pub relationships: RelationshipsPattern,
    pub where_expr: Option<Expr>,
    pub pipe_expr: Expr,
}

/// A bare relationship chain used as an expression (e.g. inside a pattern
/// comprehension), distinct from `PatternElement::Chain`: it has no
/// surrounding `PatternPart`/variable-assignment wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipsPattern {
    pub left: NodePattern,
    pub chain: Vec<PatternElementChain>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionInvocation {
    pub name: FunctionName,
    pub distinct: bool,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionName {
    Symbolic {
        namespace: Vec<SymbolicName>,
        name: SymbolicName,
    },
    Exists,
}

/// `target[expr]` (`ListIndex`, `end_expr` unused) or
/// `target[expr..end_expr]` (`ListRange`, either bound may be omitted).
#[derive(Debug, Clone, PartialEq)]
pub struct ListOperatorExpr {
    pub target: Expr,
    pub op: Operator,
    pub expr: Option<Expr>,
    pub end_expr: Option<Expr>,
}

/// Closed operator set spanning every precedence level, §3.3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Or,
    Xor,
    And,
    Not,
    Negate,
    Eq,
    Neq,
    Lt,
    Gt,
    Le,
    Ge,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    IsNull,
    IsNotNull,
    StartsWith,
    EndsWith,
    Contains,
    InList,
    ListIndex,
    ListRange,
    CountAll,
    AllOp,
    AnyOp,
    NoneOp,
    SingleOp,
    StringOrListOp,
}

/// Any identifier legal as a property key, label, or relationship type,
/// including reserved words (§GLOSSARY "Schema name").
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaName {
    Symbolic(SymbolicName),
    Reserved(TokenKind),
}

/// `symbol_type` tags the handful of built-in functional keywords
/// (`count`, `filter`, `extract`, `any`, `none`, `single`) so later phases
/// can distinguish a symbolic name used as one of those from an ordinary
/// identifier, matching `original_source/ast/symbol_type.go`'s
/// `SymbolNames` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolType {
    Count,
    Filter,
    Extract,
    Any,
    None,
    Single,
    Identifier,
}

/// The `SymbolicNameHexLetter` variant is retained, unreachable from the
/// parser, for parity with the source's abandoned draft (see DESIGN.md).
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolicName {
    Identifier { lexeme: String, symbol_type: SymbolType },
    HexLetter(char),
}

impl SymbolicName {
    /// The textual spelling, ignoring `symbol_type`/variant distinctions.
    pub fn text(&self) -> String {
        match self {
            SymbolicName::Identifier { lexeme, .. } => lexeme.clone(),
            SymbolicName::HexLetter(c) => c.to_string(),
        }
    }
}

/// Classifies an identifier's lexeme into its `SymbolType` the way
/// `original_source/ast/symbol_type.go`'s `SymbolNames` map does.
pub(crate) fn symbol_type_for(lexeme: &str) -> SymbolType {
    match lexeme {
        "count" => SymbolType::Count,
        "filter" => SymbolType::Filter,
        "extract" => SymbolType::Extract,
        "any" => SymbolType::Any,
        "none" => SymbolType::None,
        "single" => SymbolType::Single,
        _ => SymbolType::Identifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_literal_unbounded_sentinels() {
        assert_eq!(RangeLiteral::UNBOUNDED.begin, i64::MIN);
        assert_eq!(RangeLiteral::UNBOUNDED.end, i64::MAX);
    }

    #[test]
    fn symbol_type_classifies_functional_keywords() {
        assert_eq!(symbol_type_for("count"), SymbolType::Count);
        assert_eq!(symbol_type_for("node"), SymbolType::Identifier);
    }
}
