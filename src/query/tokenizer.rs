//! # Query Tokenizer
//!
//! Splits a raw query string into a flat ordered token sequence. Commas and
//! parentheses are pure separators: they delimit tokens and are discarded,
//! never retained. A leaf's internal text, including any `;`-separated
//! sub-parts, stays intact as one token.
//!
//! With separators discarded the grammar is strictly prefix-form: every
//! operator token is immediately followed by its operand subtrees in the flat
//! stream.

/// Split `query` into tokens on `,`, `(`, `)`.
///
/// Empty fragments produced by adjacent separators (e.g. the `)` at the end
/// of `not(x)`) are dropped; they carry no grammar content.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .split([',', '(', ')'])
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}
