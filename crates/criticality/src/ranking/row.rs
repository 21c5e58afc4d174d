/// Fractional digits written for every score cell.
pub const SCORE_PRECISION: usize = 5;

pub fn format_score(score: f64) -> String {
    format!("{score:.prec$}", prec = SCORE_PRECISION)
}

/// Input cells, kept as raw bytes, with the formatted score appended as the
/// final cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRow {
    cells: csv::ByteRecord,
}

impl ScoredRow {
    pub fn new(cells: impl Into<csv::ByteRecord>, score: f64) -> Self {
        let mut cells = cells.into();
        cells.push_field(format_score(score).as_bytes());
        Self { cells }
    }

    pub fn cells(&self) -> &csv::ByteRecord {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&[u8]> {
        self.cells.get(index)
    }

    pub fn score_cell(&self) -> &str {
        self.cells
            .iter()
            .last()
            .and_then(|cell| std::str::from_utf8(cell).ok())
            .unwrap_or_default()
    }
}
