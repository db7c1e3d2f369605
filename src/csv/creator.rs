//! # Row Constructors
//!
//! The pluggable capability that turns an ordered field sequence into a
//! domain record. The parser applies one constructor to every accepted row;
//! a constructor failure aborts the whole parse.

use super::errors::FactoryError;

/// Build a domain record from one row of raw fields.
pub trait FromRow {
    /// The record type produced for each row
    type Row;

    /// Convert the raw fields into a record, or report why the row is
    /// unusable via [`FactoryError`].
    fn create(&self, fields: Vec<String>) -> Result<Self::Row, FactoryError>;
}

/// The identity constructor: rows stay as plain string field lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringRowCreator;

impl FromRow for StringRowCreator {
    type Row = Vec<String>;

    fn create(&self, fields: Vec<String>) -> Result<Self::Row, FactoryError> {
        Ok(fields)
    }
}

/// A star record: one integer id, a free-text name, and three coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub id: i64,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Typed constructor producing [`Star`] records.
///
/// Requires exactly five fields; fails with [`FactoryError`] on arity
/// mismatch or on any field that does not parse as its declared type.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarCreator;

impl StarCreator {
    fn reject(fields: &[String]) -> FactoryError {
        FactoryError::new("Cannot construct Star object", fields.to_vec())
    }
}

impl FromRow for StarCreator {
    type Row = Star;

    fn create(&self, fields: Vec<String>) -> Result<Self::Row, FactoryError> {
        if fields.len() != 5 {
            return Err(Self::reject(&fields));
        }
        let id = fields[0]
            .parse::<i64>()
            .map_err(|_| Self::reject(&fields))?;
        let x = fields[2]
            .parse::<f64>()
            .map_err(|_| Self::reject(&fields))?;
        let y = fields[3]
            .parse::<f64>()
            .map_err(|_| Self::reject(&fields))?;
        let z = fields[4]
            .parse::<f64>()
            .map_err(|_| Self::reject(&fields))?;
        Ok(Star {
            id,
            name: fields[1].clone(),
            x,
            y,
            z,
        })
    }
}
