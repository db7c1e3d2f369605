//! # Query Tree Builder
//!
//! Builds the prefix-notation AST from a flat token sequence via recursive
//! descent. The cursor is an explicit index over an immutable token slice,
//! advanced by each recursive call and returned alongside the subtree, so no
//! shared mutable state crosses call boundaries.

use super::errors::{QueryError, QueryResult};

/// One node of the query AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    /// An atomic term, held verbatim (column constraints included)
    Leaf(String),

    /// Complement of the child's match set
    Not(Box<QueryNode>),

    /// Intersection; left child is built before right
    And(Box<QueryNode>, Box<QueryNode>),

    /// Union; left child is built before right
    Or(Box<QueryNode>, Box<QueryNode>),
}

impl QueryNode {
    /// Build an AST by consuming tokens from the front of `tokens`.
    ///
    /// Tokens left over after the root subtree completes are ignored, matching
    /// the lenient consumption of the prefix grammar. An operator whose child
    /// cannot be built because the stream is exhausted fails with
    /// [`QueryError::Incomplete`].
    pub fn build(tokens: &[String]) -> QueryResult<QueryNode> {
        let (node, _next) = Self::build_at(tokens, 0)?;
        Ok(node)
    }

    /// Build the subtree starting at `pos`, returning it with the index of
    /// the first unconsumed token.
    fn build_at(tokens: &[String], pos: usize) -> QueryResult<(QueryNode, usize)> {
        let token = tokens.get(pos).ok_or(QueryError::Incomplete)?;
        match token.as_str() {
            "and" => {
                let (left, after_left) = Self::build_at(tokens, pos + 1)?;
                let (right, after_right) = Self::build_at(tokens, after_left)?;
                Ok((QueryNode::And(Box::new(left), Box::new(right)), after_right))
            }
            "or" => {
                let (left, after_left) = Self::build_at(tokens, pos + 1)?;
                let (right, after_right) = Self::build_at(tokens, after_left)?;
                Ok((QueryNode::Or(Box::new(left), Box::new(right)), after_right))
            }
            "not" => {
                let (child, after_child) = Self::build_at(tokens, pos + 1)?;
                Ok((QueryNode::Not(Box::new(child)), after_child))
            }
            _ => Ok((QueryNode::Leaf(token.clone()), pos + 1)),
        }
    }
}
