use std::collections::HashMap;
use tracing::trace;

/// Numeric view of one input row keyed by column name.
///
/// Cells that do not parse as a finite number are left out, so a missing
/// column and a garbage cell look the same to the scorer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: HashMap<String, f64>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: f64) -> Self {
        self.insert(field, value);
        self
    }

    /// Non-finite values are dropped.
    pub fn insert(&mut self, field: impl Into<String>, value: f64) {
        if value.is_finite() {
            self.values.insert(field.into(), value);
        }
    }

    /// Pairs `row` positionally with `header`. Short rows leave trailing
    /// columns absent; extra cells are ignored. Cells that are not valid
    /// UTF-8 are treated like any other unparsable cell.
    pub fn from_row<H, C>(header: &[H], row: &[C]) -> Self
    where
        H: AsRef<str>,
        C: AsRef<[u8]>,
    {
        let mut record = Self::new();
        for (column, cell) in header.iter().zip(row.iter()) {
            let column: &str = column.as_ref();
            let cell: &[u8] = cell.as_ref();
            match parse_cell(cell) {
                Some(value) => record.insert(column, value),
                None => trace!(
                    column,
                    cell = %String::from_utf8_lossy(cell),
                    "skipping non-numeric cell"
                ),
            }
        }
        record
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn parse_cell(cell: &[u8]) -> Option<f64> {
    std::str::from_utf8(cell)
        .ok()?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_row_keeps_only_numeric_cells() {
        let header = ["repo.url", "legacy.created_since", "legacy.contributor_count"];
        let row = ["https://example.com/a", "42", " 7.5 "];
        let record = Record::from_row(&header, &row);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("legacy.created_since"), Some(42.0));
        assert_eq!(record.get("legacy.contributor_count"), Some(7.5));
        assert_eq!(record.get("repo.url"), None);
    }

    #[test]
    fn non_finite_and_empty_cells_are_absent() {
        let header = ["a", "b", "c", "d"];
        let row = ["NaN", "inf", "", "-Infinity"];
        assert!(Record::from_row(&header, &row).is_empty());
    }

    #[test]
    fn invalid_utf8_cells_are_absent() {
        let header = ["name", "x", "y"];
        let row: [&[u8]; 3] = [b"caf\xe9", b"\xff5", b"3"];
        let record = Record::from_row(&header, &row);
        assert_eq!(record.get("x"), None);
        assert_eq!(record.get("y"), Some(3.0));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn short_rows_leave_trailing_fields_absent() {
        let header = ["x", "y"];
        let row = ["1"];
        let record = Record::from_row(&header, &row);
        assert_eq!(record.get("x"), Some(1.0));
        assert_eq!(record.get("y"), None);
    }

    #[test]
    fn insert_ignores_non_finite_values() {
        let record = Record::new().with("x", f64::NAN).with("y", 2.0);
        assert_eq!(record.get("x"), None);
        assert_eq!(record.get("y"), Some(2.0));
    }
}
