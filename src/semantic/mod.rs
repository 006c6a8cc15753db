//! The binding and directedness validator run over a parsed [`Statement`]
//! after a successful parse.
//!
//! Grounded on `original_source/tck_test/ast_visitor_test.go` (the
//! `visitSymbolicName`/`VisitRelationshipPatternEnter`/
//! `VisitRelationshipDetailEnter`/`Leave` callbacks, whose binding and
//! directedness checks this module reproduces) and
//! `original_source/cypher_error.go` for the stable error codes and
//! messages. Implemented as a `crate::visitor::Visitor`, so it walks the
//! same tree the parser built without a second traversal contract.

use std::collections::HashSet;

use thiserror::Error;

use crate::ast::*;
use crate::visitor::{self, Visitor};

/// One of the stable semantic error codes. Carries no line number: the
/// traversal contract (`crate::visitor::Visitor`) has none in its callback
/// signatures, and neither does the reference validator it is grounded on
/// (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    #[error("variable `{0}` is already bound")]
    VariableAlreadyBound(String),

    #[error("variable `{0}` is not defined")]
    UndefinedVariable(String),

    #[error("relationships created with CREATE must have exactly one type")]
    NoSingleRelationshipType,

    #[error("only directed relationships can be created")]
    RequiresDirectedRelationship,

    #[error("variable-length relationships cannot be created")]
    CreatingVarLength,

    #[error("parameters cannot be used as MATCH patterns")]
    InvalidParameterUse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClauseKind {
    Match,
    Create,
}

/// Walks a parsed [`Statement`] checking variable binding, relationship
/// directedness, and the handful of other structural rules that sit above
/// the grammar but below full type checking.
pub fn validate(statement: &Statement) -> Result<(), SemanticError> {
    let mut validator = Validator::default();
    visitor::walk_query(&mut validator, &statement.query)
}

#[derive(Default)]
struct Validator {
    bound: HashSet<String>,
    clause: Option<ClauseKind>,
}

impl Validator {
    /// Binds `name`, or checks an existing binding, depending on the
    /// enclosing clause and whether this occurrence carries new detail
    /// (labels/properties for a node, types/properties for a relationship).
    ///
    /// Under `CREATE`, rebinding an already-bound variable is only an error
    /// if this occurrence tries to redeclare its shape — reusing a bound
    /// variable as a bare endpoint of a new relationship is the ordinary
    /// "anchor an existing node" pattern and stays legal.
    fn bind(&mut self, name: &SymbolicName, has_detail: bool) -> Result<(), SemanticError> {
        let text = name.text();
        if self.bound.contains(&text) {
            if has_detail && self.clause == Some(ClauseKind::Create) {
                return Err(SemanticError::VariableAlreadyBound(text));
            }
            return Ok(());
        }
        self.bound.insert(text);
        Ok(())
    }

    fn check_bound(&self, name: &SymbolicName) -> Result<(), SemanticError> {
        let text = name.text();
        if self.bound.contains(&text) {
            Ok(())
        } else {
            Err(SemanticError::UndefinedVariable(text))
        }
    }
}

impl Visitor for Validator {
    type Error = SemanticError;

    fn enter_match(&mut self, _node: &MatchClause) -> Result<(), Self::Error> {
        self.clause = Some(ClauseKind::Match);
        Ok(())
    }

    fn leave_match(&mut self, _node: &MatchClause) -> Result<(), Self::Error> {
        self.clause = None;
        Ok(())
    }

    fn enter_create(&mut self, _node: &CreateClause) -> Result<(), Self::Error> {
        self.clause = Some(ClauseKind::Create);
        Ok(())
    }

    fn leave_create(&mut self, _node: &CreateClause) -> Result<(), Self::Error> {
        self.clause = None;
        Ok(())
    }

    fn enter_node_pattern(&mut self, node: &NodePattern) -> Result<(), Self::Error> {
        if self.clause == Some(ClauseKind::Match) {
            if let Some(Properties::Parameter(_)) = &node.properties {
                return Err(SemanticError::InvalidParameterUse);
            }
        }
        if let Some(name) = &node.variable {
            let has_detail = !node.labels.is_empty() || node.properties.is_some();
            self.bind(name, has_detail)?;
        }
        Ok(())
    }

    fn enter_relationship_pattern(
        &mut self,
        node: &RelationshipPattern,
    ) -> Result<(), Self::Error> {
        if self.clause == Some(ClauseKind::Create) && node.left_dir == node.right_dir {
            return Err(SemanticError::RequiresDirectedRelationship);
        }
        if self.clause == Some(ClauseKind::Create) && node.detail.is_none() {
            return Err(SemanticError::NoSingleRelationshipType);
        }
        Ok(())
    }

    fn enter_relationship_detail(
        &mut self,
        node: &RelationshipDetail,
    ) -> Result<(), Self::Error> {
        if self.clause == Some(ClauseKind::Match) {
            if let Some(Properties::Parameter(_)) = &node.properties {
                return Err(SemanticError::InvalidParameterUse);
            }
        }
        if self.clause == Some(ClauseKind::Create) {
            if node.types.len() != 1 {
                return Err(SemanticError::NoSingleRelationshipType);
            }
            if node.range.is_some() {
                return Err(SemanticError::CreatingVarLength);
            }
        }
        if let Some(name) = &node.variable {
            let has_detail = !node.types.is_empty() || node.properties.is_some();
            self.bind(name, has_detail)?;
        }
        Ok(())
    }

    fn enter_variable_expr(&mut self, node: &VariableExpr) -> Result<(), Self::Error> {
        self.check_bound(&node.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectingReporter;
    use crate::Parser;

    fn validate_src(src: &str) -> Result<(), SemanticError> {
        let mut reporter = CollectingReporter::new();
        let statement = Parser::new(src, &mut reporter).parse().unwrap();
        validate(&statement)
    }

    #[test]
    fn matching_then_returning_a_bound_variable_is_valid() {
        assert_eq!(validate_src("MATCH (n:Person) RETURN n.name"), Ok(()));
    }

    #[test]
    fn returning_an_undefined_variable_is_an_error() {
        assert_eq!(
            validate_src("MATCH (n) RETURN m"),
            Err(SemanticError::UndefinedVariable("m".to_string()))
        );
    }

    #[test]
    fn create_with_undirected_relationship_requires_direction() {
        assert_eq!(
            validate_src("CREATE (a)-[:KNOWS]-(b)"),
            Err(SemanticError::RequiresDirectedRelationship)
        );
    }

    #[test]
    fn create_relationship_needs_exactly_one_type() {
        assert_eq!(
            validate_src("CREATE (a)-[:KNOWS|LIKES]->(b)"),
            Err(SemanticError::NoSingleRelationshipType)
        );
    }

    #[test]
    fn create_rejects_variable_length_relationships() {
        assert_eq!(
            validate_src("CREATE (a)-[:KNOWS*1..3]->(b)"),
            Err(SemanticError::CreatingVarLength)
        );
    }

    #[test]
    fn create_reanchoring_a_bound_node_without_detail_is_valid() {
        assert_eq!(
            validate_src("MATCH (a) CREATE (a)-[:KNOWS]->(b:Person)"),
            Ok(())
        );
    }

    #[test]
    fn create_redeclaring_a_bound_node_with_new_labels_is_an_error() {
        assert_eq!(
            validate_src("MATCH (a) CREATE (a:Person)-[:KNOWS]->(b)"),
            Err(SemanticError::VariableAlreadyBound("a".to_string()))
        );
    }
}
