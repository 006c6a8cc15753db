//! The AST traversal contract (§6.4): an `enter`/`leave` callback pair for
//! every composite node and a single callback for leaves, walked pre-order,
//! left-to-right, with `leave` emitted after all children. A callback
//! returning an error aborts the walk immediately.
//!
//! Method names and the enter/leave/visit split are grounded exactly on
//! `original_source/tck_test/ast_visitor_test.go`'s `astVisitor` (the method
//! set a consumer of this AST is expected to implement), translated from one
//! Go method per concrete interface-implementing struct to one Rust method
//! per enum-variant payload type. Unlike the Go `interface`, every method
//! here has a no-op default body — the idiomatic Rust shape for a visitor
//! trait (mirrored on `syn::visit::Visit`), so a consumer only overrides the
//! handful of nodes it cares about.
//!
//! Two Go-only leaf types never constructed by the parser —
//! `ast.ReservedWord` and `ast.Label` — have no counterpart here; nothing in
//! §3.3's data model produces them (see DESIGN.md).

use crate::ast::*;

pub trait Visitor {
    type Error;

    fn enter_single_part_query(&mut self, _node: &SinglePartQuery) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_single_part_query(&mut self, _node: &SinglePartQuery) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_reading_clause(&mut self, _node: &[ReadingClause]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_reading_clause(&mut self, _node: &[ReadingClause]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_updating_clause(&mut self, _node: &[UpdatingClause]) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_updating_clause(&mut self, _node: &[UpdatingClause]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_match(&mut self, _node: &MatchClause) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_match(&mut self, _node: &MatchClause) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_create(&mut self, _node: &CreateClause) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_create(&mut self, _node: &CreateClause) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_pattern(&mut self, _node: &Pattern) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_pattern(&mut self, _node: &Pattern) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_pattern_part(&mut self, _node: &PatternPart) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_pattern_part(&mut self, _node: &PatternPart) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The `PatternElement::Nested` variant. Named after the Go
    /// `PatternElementNested` struct it corresponds to.
    fn enter_pattern_element_nested(&mut self, _node: &PatternElement) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_pattern_element_nested(&mut self, _node: &PatternElement) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The `PatternElement::Chain` variant. Named after the Go
    /// `PatternElementPattern` struct it corresponds to.
    fn enter_pattern_element_pattern(&mut self, _node: &PatternElement) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_pattern_element_pattern(&mut self, _node: &PatternElement) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_projection(&mut self, _node: &Projection) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_projection(&mut self, _node: &Projection) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_projection_items(&mut self, _node: &ProjectionItems) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_projection_items(&mut self, _node: &ProjectionItems) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_projection_item(&mut self, _node: &ProjectionItem) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_projection_item(&mut self, _node: &ProjectionItem) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_sort_item(&mut self, _node: &SortItem) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_sort_item(&mut self, _node: &SortItem) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_op_expr(&mut self, _node: &OpExpr) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_unary_expr(&mut self, _node: &UnaryExpr) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_unary_expr(&mut self, _node: &UnaryExpr) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_binary_expr(&mut self, _node: &BinaryExpr) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_binary_expr(&mut self, _node: &BinaryExpr) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_ternary_expr(&mut self, _node: &TernaryExpr) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_ternary_expr(&mut self, _node: &TernaryExpr) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_list_expr(&mut self, _node: &ListExpr) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_list_expr(&mut self, _node: &ListExpr) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_list_comprehension_expr(
        &mut self,
        _node: &ListComprehensionExpr,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_list_comprehension_expr(
        &mut self,
        _node: &ListComprehensionExpr,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_property_labels_expr(
        &mut self,
        _node: &PropertyLabelsExpr,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_property_labels_expr(
        &mut self,
        _node: &PropertyLabelsExpr,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_symbolic_schema_name(&mut self, _node: &SymbolicName) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_symbolic_schema_name(&mut self, _node: &SymbolicName) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_reserved_schema_name(&mut self, _node: TokenKind) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_symbolic_name_identifier(
        &mut self,
        _lexeme: &str,
        _symbol_type: SymbolType,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_symbolic_name_hex_letter(&mut self, _letter: char) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_primitive_literal(&mut self, _node: &PrimitiveLiteral) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_list_literal(&mut self, _node: &ListLiteral) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_list_literal(&mut self, _node: &ListLiteral) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_parameter(&mut self, _node: &Parameter) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_parameter(&mut self, _node: &Parameter) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_case_expr(&mut self, _node: &CaseExpr) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_case_expr(&mut self, _node: &CaseExpr) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_case_alt_node(&mut self, _node: &CaseAltNode) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_case_alt_node(&mut self, _node: &CaseAltNode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_quantifier_expr(&mut self, _node: &QuantifierExpr) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_quantifier_expr(&mut self, _node: &QuantifierExpr) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_filter_expr(&mut self, _node: &FilterExpr) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_filter_expr(&mut self, _node: &FilterExpr) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_variable_expr(&mut self, _node: &VariableExpr) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_variable_expr(&mut self, _node: &VariableExpr) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_pattern_comprehension_expr(
        &mut self,
        _node: &PatternComprehensionExpr,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_pattern_comprehension_expr(
        &mut self,
        _node: &PatternComprehensionExpr,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_node_pattern(&mut self, _node: &NodePattern) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_node_pattern(&mut self, _node: &NodePattern) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_map_literal(&mut self, _node: &MapLiteral) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_map_literal(&mut self, _node: &MapLiteral) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_property_key_name(&mut self, _node: &PropertyKeyName) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_property_key_name(&mut self, _node: &PropertyKeyName) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_properties(&mut self, _node: &Properties) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_properties(&mut self, _node: &Properties) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_relationships_pattern(
        &mut self,
        _node: &RelationshipsPattern,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_relationships_pattern(
        &mut self,
        _node: &RelationshipsPattern,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_pattern_element_chain(
        &mut self,
        _node: &PatternElementChain,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_pattern_element_chain(
        &mut self,
        _node: &PatternElementChain,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_relationship_pattern(
        &mut self,
        _node: &RelationshipPattern,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_relationship_pattern(
        &mut self,
        _node: &RelationshipPattern,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_relationship_detail(&mut self, _node: &RelationshipDetail) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_relationship_detail(&mut self, _node: &RelationshipDetail) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_range_literal(&mut self, _node: &RangeLiteral) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_function_invocation(&mut self, _node: &FunctionInvocation) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_function_invocation(&mut self, _node: &FunctionInvocation) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_symbolic_function_name(&mut self, _node: &FunctionName) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_symbolic_function_name(&mut self, _node: &FunctionName) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_exists_function_name(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_list_operator_expr(&mut self, _node: &ListOperatorExpr) -> Result<(), Self::Error> {
        Ok(())
    }
    fn leave_list_operator_expr(&mut self, _node: &ListOperatorExpr) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Walks a whole parsed query: `singlePartQuery`'s reading clauses, then
/// updating clauses, then projection, in source order.
pub fn walk_query<V: Visitor>(visitor: &mut V, query: &Query) -> Result<(), V::Error> {
    let Query::SinglePartQuery(q) = query;
    visitor.enter_single_part_query(q)?;

    visitor.enter_reading_clause(&q.reading)?;
    for clause in &q.reading {
        match clause {
            ReadingClause::Match(m) => walk_match(visitor, m)?,
        }
    }
    visitor.leave_reading_clause(&q.reading)?;

    visitor.enter_updating_clause(&q.updating)?;
    for clause in &q.updating {
        match clause {
            UpdatingClause::Create(c) => walk_create(visitor, c)?,
        }
    }
    visitor.leave_updating_clause(&q.updating)?;

    if let Some(projection) = &q.projection {
        walk_projection(visitor, projection)?;
    }

    visitor.leave_single_part_query(q)
}

fn walk_match<V: Visitor>(visitor: &mut V, node: &MatchClause) -> Result<(), V::Error> {
    visitor.enter_match(node)?;
    walk_pattern(visitor, &node.pattern)?;
    if let Some(expr) = &node.where_expr {
        walk_expr(visitor, expr)?;
    }
    visitor.leave_match(node)
}

fn walk_create<V: Visitor>(visitor: &mut V, node: &CreateClause) -> Result<(), V::Error> {
    visitor.enter_create(node)?;
    walk_pattern(visitor, &node.pattern)?;
    visitor.leave_create(node)
}

fn walk_pattern<V: Visitor>(visitor: &mut V, node: &Pattern) -> Result<(), V::Error> {
    visitor.enter_pattern(node)?;
    for part in &node.parts {
        walk_pattern_part(visitor, part)?;
    }
    visitor.leave_pattern(node)
}

fn walk_pattern_part<V: Visitor>(visitor: &mut V, node: &PatternPart) -> Result<(), V::Error> {
    visitor.enter_pattern_part(node)?;
    if let Some(name) = &node.variable {
        walk_symbolic_name(visitor, name)?;
    }
    walk_pattern_element(visitor, &node.element)?;
    visitor.leave_pattern_part(node)
}

fn walk_pattern_element<V: Visitor>(
    visitor: &mut V,
    node: &PatternElement,
) -> Result<(), V::Error> {
    match node {
        PatternElement::Chain { left, chain } => {
            visitor.enter_pattern_element_pattern(node)?;
            walk_node_pattern(visitor, left)?;
            for link in chain {
                walk_pattern_element_chain(visitor, link)?;
            }
            visitor.leave_pattern_element_pattern(node)
        }
        PatternElement::Nested(inner) => {
            visitor.enter_pattern_element_nested(node)?;
            walk_pattern_element(visitor, inner)?;
            visitor.leave_pattern_element_nested(node)
        }
    }
}

fn walk_pattern_element_chain<V: Visitor>(
    visitor: &mut V,
    node: &PatternElementChain,
) -> Result<(), V::Error> {
    visitor.enter_pattern_element_chain(node)?;
    walk_relationship_pattern(visitor, &node.relationship)?;
    walk_node_pattern(visitor, &node.right)?;
    visitor.leave_pattern_element_chain(node)
}

fn walk_node_pattern<V: Visitor>(visitor: &mut V, node: &NodePattern) -> Result<(), V::Error> {
    visitor.enter_node_pattern(node)?;
    if let Some(name) = &node.variable {
        walk_symbolic_name(visitor, name)?;
    }
    for label in &node.labels {
        walk_schema_name(visitor, label)?;
    }
    if let Some(props) = &node.properties {
        walk_properties(visitor, props)?;
    }
    visitor.leave_node_pattern(node)
}

fn walk_relationship_pattern<V: Visitor>(
    visitor: &mut V,
    node: &RelationshipPattern,
) -> Result<(), V::Error> {
    visitor.enter_relationship_pattern(node)?;
    if let Some(detail) = &node.detail {
        walk_relationship_detail(visitor, detail)?;
    }
    visitor.leave_relationship_pattern(node)
}

fn walk_relationship_detail<V: Visitor>(
    visitor: &mut V,
    node: &RelationshipDetail,
) -> Result<(), V::Error> {
    visitor.enter_relationship_detail(node)?;
    if let Some(name) = &node.variable {
        walk_symbolic_name(visitor, name)?;
    }
    for ty in &node.types {
        walk_schema_name(visitor, ty)?;
    }
    if let Some(range) = &node.range {
        visitor.visit_range_literal(range)?;
    }
    if let Some(props) = &node.properties {
        walk_properties(visitor, props)?;
    }
    visitor.leave_relationship_detail(node)
}

fn walk_properties<V: Visitor>(visitor: &mut V, node: &Properties) -> Result<(), V::Error> {
    visitor.enter_properties(node)?;
    match node {
        Properties::Map(map) => walk_map_literal(visitor, map)?,
        Properties::Parameter(param) => walk_parameter(visitor, param)?,
    }
    visitor.leave_properties(node)
}

fn walk_map_literal<V: Visitor>(visitor: &mut V, node: &MapLiteral) -> Result<(), V::Error> {
    visitor.enter_map_literal(node)?;
    for entry in &node.entries {
        visitor.enter_property_key_name(entry)?;
        walk_schema_name(visitor, &entry.name)?;
        walk_expr(visitor, &entry.expr)?;
        visitor.leave_property_key_name(entry)?;
    }
    visitor.leave_map_literal(node)
}

fn walk_schema_name<V: Visitor>(visitor: &mut V, node: &SchemaName) -> Result<(), V::Error> {
    match node {
        SchemaName::Symbolic(name) => {
            visitor.enter_symbolic_schema_name(name)?;
            walk_symbolic_name(visitor, name)?;
            visitor.leave_symbolic_schema_name(name)
        }
        SchemaName::Reserved(kind) => visitor.visit_reserved_schema_name(*kind),
    }
}

fn walk_symbolic_name<V: Visitor>(visitor: &mut V, node: &SymbolicName) -> Result<(), V::Error> {
    match node {
        SymbolicName::Identifier { lexeme, symbol_type } => {
            visitor.visit_symbolic_name_identifier(lexeme, *symbol_type)
        }
        SymbolicName::HexLetter(c) => visitor.visit_symbolic_name_hex_letter(*c),
    }
}

fn walk_projection<V: Visitor>(visitor: &mut V, node: &Projection) -> Result<(), V::Error> {
    visitor.enter_projection(node)?;
    walk_projection_items(visitor, &node.items)?;
    for item in &node.order {
        walk_sort_item(visitor, item)?;
    }
    if let Some(expr) = &node.skip {
        walk_expr(visitor, expr)?;
    }
    if let Some(expr) = &node.limit {
        walk_expr(visitor, expr)?;
    }
    visitor.leave_projection(node)
}

fn walk_projection_items<V: Visitor>(
    visitor: &mut V,
    node: &ProjectionItems,
) -> Result<(), V::Error> {
    visitor.enter_projection_items(node)?;
    for item in &node.items {
        walk_projection_item(visitor, item)?;
    }
    visitor.leave_projection_items(node)
}

fn walk_projection_item<V: Visitor>(
    visitor: &mut V,
    node: &ProjectionItem,
) -> Result<(), V::Error> {
    visitor.enter_projection_item(node)?;
    walk_expr(visitor, &node.expr)?;
    if let Some(alias) = &node.alias {
        walk_symbolic_name(visitor, alias)?;
    }
    visitor.leave_projection_item(node)
}

fn walk_sort_item<V: Visitor>(visitor: &mut V, node: &SortItem) -> Result<(), V::Error> {
    visitor.enter_sort_item(node)?;
    walk_expr(visitor, &node.expr)?;
    visitor.leave_sort_item(node)
}

fn walk_parameter<V: Visitor>(visitor: &mut V, node: &Parameter) -> Result<(), V::Error> {
    visitor.enter_parameter(node)?;
    if let ParameterName::Symbolic(name) = &node.name {
        walk_symbolic_name(visitor, name)?;
    }
    visitor.leave_parameter(node)
}

/// Walks an `Expr` of any variant, dispatching to the matching
/// enter/leave or single-callback method.
pub fn walk_expr<V: Visitor>(visitor: &mut V, node: &Expr) -> Result<(), V::Error> {
    match node {
        Expr::Op(op) => visitor.visit_op_expr(op),
        Expr::Unary(e) => {
            visitor.enter_unary_expr(e)?;
            walk_expr(visitor, &e.expr)?;
            visitor.leave_unary_expr(e)
        }
        Expr::Binary(e) => {
            visitor.enter_binary_expr(e)?;
            walk_expr(visitor, &e.left)?;
            walk_expr(visitor, &e.right)?;
            visitor.leave_binary_expr(e)
        }
        Expr::Ternary(e) => {
            visitor.enter_ternary_expr(e)?;
            walk_expr(visitor, &e.e1)?;
            walk_expr(visitor, &e.e2)?;
            walk_expr(visitor, &e.e3)?;
            visitor.leave_ternary_expr(e)
        }
        Expr::List(e) => {
            visitor.enter_list_expr(e)?;
            for item in &e.items {
                walk_expr(visitor, item)?;
            }
            visitor.leave_list_expr(e)
        }
        Expr::ListLiteral(e) => {
            visitor.enter_list_literal(e)?;
            for item in &e.items {
                walk_expr(visitor, item)?;
            }
            visitor.leave_list_literal(e)
        }
        Expr::MapLiteral(e) => walk_map_literal(visitor, e),
        Expr::Primitive(e) => visitor.visit_primitive_literal(e),
        Expr::PropertyLabels(e) => {
            visitor.enter_property_labels_expr(e)?;
            walk_expr(visitor, &e.atom)?;
            for key in &e.property_keys {
                walk_schema_name(visitor, key)?;
            }
            for label in &e.labels {
                walk_schema_name(visitor, label)?;
            }
            visitor.leave_property_labels_expr(e)
        }
        Expr::Parameter(p) => walk_parameter(visitor, p),
        Expr::Case(e) => {
            visitor.enter_case_expr(e)?;
            if let Some(init) = &e.init {
                walk_expr(visitor, init)?;
            }
            for alt in &e.alternatives {
                visitor.enter_case_alt_node(alt)?;
                walk_expr(visitor, &alt.when)?;
                walk_expr(visitor, &alt.then)?;
                visitor.leave_case_alt_node(alt)?;
            }
            if let Some(else_expr) = &e.else_expr {
                walk_expr(visitor, else_expr)?;
            }
            visitor.leave_case_expr(e)
        }
        Expr::ListComprehension(e) => {
            visitor.enter_list_comprehension_expr(e)?;
            walk_filter_expr(visitor, &e.filter)?;
            walk_expr(visitor, &e.expr)?;
            visitor.leave_list_comprehension_expr(e)
        }
        Expr::Filter(e) => walk_filter_expr(visitor, e),
        Expr::Quantifier(e) => {
            visitor.enter_quantifier_expr(e)?;
            walk_filter_expr(visitor, &e.filter)?;
            visitor.leave_quantifier_expr(e)
        }
        Expr::Variable(e) => {
            visitor.enter_variable_expr(e)?;
            walk_symbolic_name(visitor, &e.name)?;
            visitor.leave_variable_expr(e)
        }
        Expr::PatternComprehension(e) => {
            visitor.enter_pattern_comprehension_expr(e)?;
            if let Some(name) = &e.variable {
                walk_symbolic_name(visitor, name)?;
            }
            walk_relationships_pattern(visitor, &e.relationships)?;
            if let Some(where_expr) = &e.where_expr {
                walk_expr(visitor, where_expr)?;
            }
            walk_expr(visitor, &e.pipe_expr)?;
            visitor.leave_pattern_comprehension_expr(e)
        }
        Expr::RelationshipsPattern(e) => walk_relationships_pattern(visitor, e),
        Expr::FunctionInvocation(e) => {
            visitor.enter_function_invocation(e)?;
            walk_function_name(visitor, &e.name)?;
            for arg in &e.args {
                walk_expr(visitor, arg)?;
            }
            visitor.leave_function_invocation(e)
        }
        Expr::ListOperator(e) => {
            visitor.enter_list_operator_expr(e)?;
            walk_expr(visitor, &e.target)?;
            if let Some(expr) = &e.expr {
                walk_expr(visitor, expr)?;
            }
            if let Some(end_expr) = &e.end_expr {
                walk_expr(visitor, end_expr)?;
            }
            visitor.leave_list_operator_expr(e)
        }
    }
}

fn walk_filter_expr<V: Visitor>(visitor: &mut V, node: &FilterExpr) -> Result<(), V::Error> {
    visitor.enter_filter_expr(node)?;
    walk_symbolic_name(visitor, &node.variable.name)?;
    walk_expr(visitor, &node.in_expr)?;
    if let Some(where_expr) = &node.where_expr {
        walk_expr(visitor, where_expr)?;
    }
    visitor.leave_filter_expr(node)
}

fn walk_relationships_pattern<V: Visitor>(
    visitor: &mut V,
    node: &RelationshipsPattern,
) -> Result<(), V::Error> {
    visitor.enter_relationships_pattern(node)?;
    walk_node_pattern(visitor, &node.left)?;
    for link in &node.chain {
        walk_pattern_element_chain(visitor, link)?;
    }
    visitor.leave_relationships_pattern(node)
}

fn walk_function_name<V: Visitor>(visitor: &mut V, node: &FunctionName) -> Result<(), V::Error> {
    match node {
        FunctionName::Symbolic { namespace, name } => {
            visitor.enter_symbolic_function_name(node)?;
            for ns in namespace {
                walk_symbolic_name(visitor, ns)?;
            }
            walk_symbolic_name(visitor, name)?;
            visitor.leave_symbolic_function_name(node)
        }
        FunctionName::Exists => visitor.visit_exists_function_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        enters: u32,
        leaves: u32,
        leaves_of_binary: u32,
    }

    impl Visitor for Counter {
        type Error = ();

        fn enter_binary_expr(&mut self, _node: &BinaryExpr) -> Result<(), ()> {
            self.enters += 1;
            Ok(())
        }

        fn leave_binary_expr(&mut self, _node: &BinaryExpr) -> Result<(), ()> {
            self.leaves += 1;
            self.leaves_of_binary = self.enters;
            Ok(())
        }
    }

    fn int(v: i64) -> Expr {
        Expr::Primitive(PrimitiveLiteral {
            value: PrimitiveValue::Integer(v),
        })
    }

    #[test]
    fn leave_fires_after_both_children_visited() {
        let expr = Expr::Binary(Box::new(BinaryExpr {
            left: Expr::Binary(Box::new(BinaryExpr {
                left: int(1),
                op: Operator::Add,
                right: int(2),
            })),
            op: Operator::Mul,
            right: int(3),
        }));
        let mut counter = Counter::default();
        walk_expr(&mut counter, &expr).unwrap();
        assert_eq!(counter.enters, 2);
        assert_eq!(counter.leaves, 2);
        assert_eq!(counter.leaves_of_binary, 2);
    }

    struct Aborting;

    impl Visitor for Aborting {
        type Error = &'static str;

        fn enter_binary_expr(&mut self, _node: &BinaryExpr) -> Result<(), &'static str> {
            Err("stop")
        }
    }

    #[test]
    fn error_from_enter_aborts_before_children() {
        let expr = Expr::Binary(Box::new(BinaryExpr {
            left: int(1),
            op: Operator::Add,
            right: int(2),
        }));
        let mut v = Aborting;
        assert_eq!(walk_expr(&mut v, &expr), Err("stop"));
    }
}
