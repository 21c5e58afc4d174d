//! Batch driver: read CSV rows, score them, and write them back ranked.

mod column;
mod io;

pub use column::{output_header, result_column_name};
pub use io::{open_input, open_output, OpenError, OutputOptions, STDIO_PATH};

use crate::ranking::{RankedCollector, ScoredRow};
use crate::scoring::{Record, ScoringAlgorithm};
use std::io::{Read, Write};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("input has no CSV header row")]
    MissingHeader,
    #[error("header already contains field {0}")]
    HeaderConflict(String),
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Counts reported once a run has been written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub column: String,
}

/// Scores every row of a CSV stream with one algorithm and emits the rows in
/// descending score order, ties in input order.
pub struct ScoringPipeline {
    algorithm: Box<dyn ScoringAlgorithm>,
    column: String,
}

impl ScoringPipeline {
    pub fn new(algorithm: Box<dyn ScoringAlgorithm>, column: impl Into<String>) -> Self {
        Self {
            algorithm,
            column: column.into(),
        }
    }

    pub fn score(&self, record: &Record) -> f64 {
        self.algorithm.score(record)
    }

    pub fn run<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<RunSummary, PipelineError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input);
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(output);

        let mut rows = reader.byte_records();
        let raw_header = match rows.next() {
            Some(record) => record?,
            None => return Err(PipelineError::MissingHeader),
        };
        writer.write_byte_record(&output_header(&raw_header, &self.column)?)?;

        // Field names are matched as text; the header itself is echoed raw.
        let header: Vec<String> = raw_header
            .iter()
            .map(|name| String::from_utf8_lossy(name).into_owned())
            .collect();

        let mut collector = RankedCollector::new();
        for row in rows {
            let row = row?;
            let record = Record::from_row(&header, &row.iter().collect::<Vec<_>>());
            let score = self.score(&record);
            collector.insert(ScoredRow::new(row, score), score);
        }

        let total = collector.len();
        debug!(rows = total, algorithm = self.algorithm.name(), "scored input rows");

        for row in collector.drain() {
            writer.write_byte_record(row.cells())?;
        }
        writer.flush()?;

        info!(rows = total, column = %self.column, "wrote ranked output");
        Ok(RunSummary {
            rows: total,
            column: self.column.clone(),
        })
    }
}
