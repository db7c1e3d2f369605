//! # Query Evaluator
//!
//! Walks a query AST against a table, producing the matching rows in
//! ascending original row order. Each leaf scans every row; `not` complements
//! within the full row-index range, `and` intersects, `or` unions. Any
//! sub-evaluation failure aborts the whole query with no partial result.

use std::collections::HashSet;

use super::column::ColumnKey;
use super::errors::{QueryError, QueryResult};
use super::tokenizer::tokenize;
use super::tree::QueryNode;

/// Evaluates queries against one table's rows and header.
///
/// Borrows the table data for the duration of one search; holds no state of
/// its own beyond those borrows.
pub struct Searcher<'a> {
    rows: &'a [Vec<String>],
    header: Option<&'a [String]>,
}

impl<'a> Searcher<'a> {
    pub fn new(rows: &'a [Vec<String>], header: Option<&'a [String]>) -> Self {
        Self { rows, header }
    }

    /// Tokenize, build, and evaluate `query`, returning the matched rows
    /// sorted ascending by original position.
    ///
    /// An empty table short-circuits to an empty result without invoking the
    /// parser or evaluator.
    pub fn search(&self, query: &str) -> QueryResult<Vec<Vec<String>>> {
        if self.rows.is_empty() {
            return Ok(Vec::new());
        }
        let tokens = tokenize(query);
        let tree = QueryNode::build(&tokens)?;
        let matches = self.eval(&tree)?;

        let mut positions: Vec<usize> = matches.into_iter().collect();
        positions.sort_unstable();
        Ok(positions.into_iter().map(|i| self.rows[i].clone()).collect())
    }

    /// Evaluate one AST node to its match set.
    fn eval(&self, node: &QueryNode) -> QueryResult<HashSet<usize>> {
        match node {
            QueryNode::Leaf(text) => self.eval_leaf(text),
            QueryNode::Not(child) => {
                let inner = self.eval(child)?;
                Ok((0..self.rows.len()).filter(|i| !inner.contains(i)).collect())
            }
            QueryNode::And(left, right) => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(left.intersection(&right).copied().collect())
            }
            QueryNode::Or(left, right) => {
                let mut left = self.eval(left)?;
                left.extend(self.eval(right)?);
                Ok(left)
            }
        }
    }

    /// Evaluate one leaf: either an unconstrained exact-field match, or a
    /// constrained match against a resolved column.
    fn eval_leaf(&self, text: &str) -> QueryResult<HashSet<usize>> {
        let parts: Vec<&str> = text.split(';').collect();
        match parts.as_slice() {
            [target] => Ok(self
                .rows
                .iter()
                .enumerate()
                .filter(|(_, row)| row.iter().any(|field| field == target))
                .map(|(i, _)| i)
                .collect()),
            [target, value, mode] => {
                let key = ColumnKey::from_parts(value, mode);
                let data_width = self.rows.first().map_or(0, Vec::len);
                let Some(column) = key.resolve(self.header, data_width)? else {
                    return Ok(HashSet::new());
                };
                Ok(self
                    .rows
                    .iter()
                    .enumerate()
                    .filter(|(_, row)| row[column] == *target)
                    .map(|(i, _)| i)
                    .collect())
            }
            _ => Err(QueryError::InvalidQuery { got: parts.len() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn fixture() -> (Vec<Vec<String>>, Vec<String>) {
        (
            rows(&[
                &["1", "Sol", "0", "0", "0"],
                &["2", "Proxima Centauri", "-0.47175", "-0.36132", "-1.15037"],
                &["3", "Barnard's Star", "-0.01729", "-1.81533", "0.14824"],
            ]),
            header(&["StarID", "ProperName", "X", "Y", "Z"]),
        )
    }

    #[test]
    fn test_unconstrained_leaf_matches_any_field() {
        let (data, head) = fixture();
        let searcher = Searcher::new(&data, Some(&head));
        let result = searcher.search("0").unwrap();
        assert_eq!(result, rows(&[&["1", "Sol", "0", "0", "0"]]));
    }

    #[test]
    fn test_match_is_exact_not_substring() {
        let (data, head) = fixture();
        let searcher = Searcher::new(&data, Some(&head));
        assert!(searcher.search("Proxima").unwrap().is_empty());
        assert!(searcher.search("sol").unwrap().is_empty());
    }

    #[test]
    fn test_constrained_leaf_by_name() {
        let (data, head) = fixture();
        let searcher = Searcher::new(&data, Some(&head));
        let result = searcher.search("-0.01729;X;name").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0][1], "Barnard's Star");
    }

    #[test]
    fn test_constrained_leaf_by_index() {
        let (data, head) = fixture();
        let searcher = Searcher::new(&data, Some(&head));
        let result = searcher.search("-0.01729;2;idx").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0][0], "3");
    }

    #[test]
    fn test_constraint_binds_to_column_only() {
        let (data, head) = fixture();
        let searcher = Searcher::new(&data, Some(&head));
        // "0" appears in several fields of row 1 but not in column 1
        assert!(searcher.search("0;1;idx").unwrap().is_empty());
    }

    #[test]
    fn test_not_complements_within_row_range() {
        let (data, head) = fixture();
        let searcher = Searcher::new(&data, Some(&head));
        let result = searcher.search("not(-0.01729;2;idx)").unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0][0], "1");
        assert_eq!(result[1][0], "2");
    }

    #[test]
    fn test_or_unions_sorted_by_original_order() {
        let (data, head) = fixture();
        let searcher = Searcher::new(&data, Some(&head));
        let result = searcher
            .search("or(-0.01729;2;idx,Proxima Centauri)")
            .unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0][1], "Proxima Centauri");
        assert_eq!(result[1][1], "Barnard's Star");
    }

    #[test]
    fn test_and_is_exact_intersection() {
        let (data, head) = fixture();
        let searcher = Searcher::new(&data, Some(&head));
        let result = searcher.search("and(Sol,1;0;idx)").unwrap();
        assert_eq!(result.len(), 1);
        assert!(searcher.search("and(Sol,2;0;idx)").unwrap().is_empty());
    }

    #[test]
    fn test_two_part_leaf_is_invalid() {
        let (data, head) = fixture();
        let searcher = Searcher::new(&data, Some(&head));
        assert_eq!(
            searcher.search("-0.12345;1"),
            Err(QueryError::InvalidQuery { got: 2 })
        );
    }

    #[test]
    fn test_unknown_column_is_empty_not_error() {
        let (data, head) = fixture();
        let searcher = Searcher::new(&data, Some(&head));
        assert!(searcher.search("Sol;Nope;name").unwrap().is_empty());
        assert!(searcher.search("Sol;99;idx").unwrap().is_empty());
    }

    #[test]
    fn test_name_constraint_without_header_errors() {
        let (data, _) = fixture();
        let searcher = Searcher::new(&data, None);
        assert_eq!(
            searcher.search("Sol;ProperName;name"),
            Err(QueryError::NoHeader)
        );
    }

    #[test]
    fn test_empty_table_short_circuits() {
        let data: Vec<Vec<String>> = Vec::new();
        let searcher = Searcher::new(&data, None);
        // Even a malformed query yields an empty result on an empty table;
        // the parser is never invoked.
        assert_eq!(searcher.search("and("), Ok(Vec::new()));
    }

    #[test]
    fn test_idempotent_search() {
        let (data, head) = fixture();
        let searcher = Searcher::new(&data, Some(&head));
        let first = searcher.search("not(Sol)").unwrap();
        let second = searcher.search("not(Sol)").unwrap();
        assert_eq!(first, second);
    }
}
