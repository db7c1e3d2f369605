//! Search Semantics Tests
//!
//! End-to-end properties of parse + search:
//! - view after parse returns exactly the ingested rows in original order
//! - unconstrained leaves match exact field values, sorted by position
//! - not(Q) partitions the row set with Q
//! - and is exact intersection, or is exact union
//! - repeated searches are idempotent
//! - column misses are empty results, never errors

use csvql::csv::{CsvParser, StringRowCreator, Table};
use csvql::query::{QueryError, Searcher};

// =============================================================================
// Fixture
// =============================================================================

const STARS_CSV: &str = "\
StarID,ProperName,X,Y,Z
0,Sol,0,0,0
1,Andreas,282.43485,0.00449,5.36884
2,Rory Gilmore,43.04329,0.00285,-15.24144
3,Mortimer,277.11358,0.02422,223.27753
70667,Proxima Centauri,-0.47175,-0.36132,-1.15037
71454,Rigel Kentaurus B,-0.50359,-0.42128,-1.1767
71457,Rigel Kentaurus A,-0.50362,-0.42139,-1.17665
87666,Barnard's Star,-0.01729,-1.81533,0.14824
118721,Veil,-2.28262,0.64697,0.29354
119617,Ink,-3.27439,0.40083,0.1226
";

fn stars() -> Table {
    CsvParser::new(true, StringRowCreator)
        .parse_str(STARS_CSV)
        .unwrap()
}

fn search(table: &Table, query: &str) -> Vec<Vec<String>> {
    Searcher::new(table.rows(), table.header())
        .search(query)
        .unwrap()
}

fn names(rows: &[Vec<String>]) -> Vec<&str> {
    rows.iter().map(|row| row[1].as_str()).collect()
}

// =============================================================================
// Round Trip
// =============================================================================

/// Parse followed by view returns exactly the ingested rows in order.
#[test]
fn test_parse_view_round_trip() {
    let table = stars();
    assert_eq!(table.len(), 10);
    assert_eq!(table.width(), 5);

    let viewed = table.rows_with_header();
    assert_eq!(viewed.len(), 11);
    assert_eq!(viewed[0][0], "StarID");
    assert_eq!(viewed[1][1], "Sol");
    assert_eq!(viewed[10][1], "Ink");
}

// =============================================================================
// Leaf Matching
// =============================================================================

/// An unconstrained leaf returns exactly the rows containing the target as an
/// exact field value, ascending by original position.
#[test]
fn test_unconstrained_leaf_exact_match() {
    let table = stars();
    assert_eq!(names(&search(&table, "Sol")), vec!["Sol"]);
    // "0" appears only in Sol's row; substring "7" of several ids matches none
    assert_eq!(names(&search(&table, "0")), vec!["Sol"]);
    assert!(search(&table, "7").is_empty());
    assert!(search(&table, "sol").is_empty());
}

/// The example from the reference data: constrain by name, then by index.
#[test]
fn test_constrained_leaf_examples() {
    let table = stars();

    let by_name = search(&table, "-0.01729;X;name");
    assert_eq!(names(&by_name), vec!["Barnard's Star"]);

    let negated = search(&table, "not(-0.01729;2;idx)");
    assert_eq!(negated.len(), 9);
    assert!(!names(&negated).contains(&"Barnard's Star"));

    let either = search(&table, "or(-0.01729;2;idx,Proxima Centauri)");
    assert_eq!(names(&either), vec!["Proxima Centauri", "Barnard's Star"]);
}

// =============================================================================
// Boolean Algebra
// =============================================================================

/// search(Q) and search(not(Q)) partition the table: disjoint, union = all.
#[test]
fn test_not_partitions_rows() {
    let table = stars();
    for query in ["Sol", "-0.01729;X;name", "nothing-matches-this"] {
        let pos = search(&table, query);
        let neg = search(&table, &format!("not({query})"));
        assert_eq!(pos.len() + neg.len(), table.len());
        for row in &pos {
            assert!(!neg.contains(row));
        }
    }
}

/// and(Q1,Q2) equals the intersection of the individual results.
#[test]
fn test_and_is_exact_intersection() {
    let table = stars();
    let q1 = search(&table, "not(Sol)");
    let q2 = search(&table, "not(Ink)");
    let both = search(&table, "and(not(Sol),not(Ink))");

    let expected: Vec<_> = q1.iter().filter(|row| q2.contains(row)).cloned().collect();
    assert_eq!(both, expected);
    assert_eq!(both.len(), 8);
}

/// or(Q1,Q2) equals the union, sorted by original position.
#[test]
fn test_or_is_exact_union() {
    let table = stars();
    let either = search(&table, "or(Sol,Ink)");
    assert_eq!(names(&either), vec!["Sol", "Ink"]);

    // Overlapping operands do not duplicate rows
    let overlap = search(&table, "or(Sol,0;2;idx)");
    assert_eq!(names(&overlap), vec!["Sol"]);
}

/// Deeply nested combinators evaluate without losing determinism.
#[test]
fn test_nested_combinators() {
    let table = stars();
    let result = search(&table, "and(not(Sol),or(Proxima Centauri,Barnard's Star))");
    assert_eq!(names(&result), vec!["Proxima Centauri", "Barnard's Star"]);
}

/// The same query against an unmodified table yields identical output.
#[test]
fn test_idempotence() {
    let table = stars();
    let query = "or(not(Sol),and(Ink,Veil))";
    let first = search(&table, query);
    let second = search(&table, query);
    assert_eq!(first, second);
}

// =============================================================================
// Soft Failures and Errors
// =============================================================================

/// Out-of-range index or unknown name yields an empty result, never an error.
#[test]
fn test_column_misses_are_empty_not_errors() {
    let table = stars();
    assert!(search(&table, "Sol;12;idx").is_empty());
    assert!(search(&table, "Sol;Luminosity;name").is_empty());
    assert!(search(&table, "Sol;-3;idx").is_empty());
}

/// A two-part leaf reports its actual arity against the expected 1 or 3.
#[test]
fn test_two_part_leaf_error_message() {
    let table = stars();
    let err = Searcher::new(table.rows(), table.header())
        .search("-0.12345;1")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Wrong query format! Received 2 args, but should be 1 or 3"
    );
}

/// Operators with missing operands fail with an explicit parse error.
#[test]
fn test_incomplete_expression_reported() {
    let table = stars();
    let searcher = Searcher::new(table.rows(), table.header());
    assert_eq!(searcher.search("and(Sol)"), Err(QueryError::Incomplete));
    assert_eq!(searcher.search("not()"), Err(QueryError::Incomplete));
}

// =============================================================================
// First-Line Handling
// =============================================================================

/// Declaring no header still drops the first physical line from the data:
/// it only establishes the width.
#[test]
fn test_no_header_still_drops_first_line() {
    let text = "alpha,one\nbeta,two\ngamma,three\n";
    let table = CsvParser::new(false, StringRowCreator)
        .parse_str(text)
        .unwrap();

    assert!(table.header().is_none());
    assert_eq!(table.len(), 2);
    // "alpha" was the first physical line and is not searchable
    let searcher = Searcher::new(table.rows(), table.header());
    assert!(searcher.search("alpha").unwrap().is_empty());
    assert_eq!(searcher.search("beta").unwrap().len(), 1);
}

/// Searching an empty table yields an empty result without parsing the query.
#[test]
fn test_empty_table_bypasses_query_parsing() {
    let table = CsvParser::new(true, StringRowCreator)
        .parse_str("only,a,header\n")
        .unwrap();
    let searcher = Searcher::new(table.rows(), table.header());
    // Malformed query text, but the empty table short-circuits first.
    assert_eq!(searcher.search("and(;;;;"), Ok(vec![]));
}
