use serde::Serialize;
use thiserror::Error;

pub const TABLE_ROWS: i64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Enter a number to build its table")]
    EmptyInput,

    #[error("'{0}' is not a whole number")]
    InvalidInput(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub multiplier: i64,
    pub product: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiplicationTable {
    pub base: i64,
    pub rows: Vec<TableRow>,
}

impl MultiplicationTable {
    pub fn new(base: i64) -> Self {
        let rows = (1..=TABLE_ROWS)
            .map(|multiplier| TableRow {
                multiplier,
                product: base.saturating_mul(multiplier),
            })
            .collect();
        Self { base, rows }
    }

    /// Builds the table for whatever the user typed. Blank input yields no
    /// table.
    pub fn from_input(input: &str) -> Result<Self, TableError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TableError::EmptyInput);
        }
        let base = input
            .parse::<i64>()
            .map_err(|_| TableError::InvalidInput(input.to_string()))?;
        Ok(Self::new(base))
    }

    pub fn title(&self) -> String {
        format!("Table of {}", self.base)
    }

    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| format!("{} × {} = {}", self.base, row.multiplier, row.product))
            .collect()
    }
}
