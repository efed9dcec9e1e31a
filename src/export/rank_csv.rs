//! CSV export for PageRank reports

use std::{fs::File, io::Write, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, pagerank::RankReport};

/// A single row in the rank CSV export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankRecord {
    pub page: String,
    pub sampled: f64,
    pub iterated: f64,
}

/// Writes [`RankReport`]s as CSV
pub struct RankCsvExporter;

impl RankCsvExporter {
    /// One record per page, in lexicographic page order
    pub fn records(report: &RankReport) -> Vec<RankRecord> {
        report
            .rows()
            .map(|(page, sampled, iterated)| RankRecord {
                page: page.to_string(),
                sampled,
                iterated,
            })
            .collect()
    }

    /// Write the report with a `page,sampled,iterated` header.
    ///
    /// Returns the number of rows written.
    pub fn write<W: Write>(report: &RankReport, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let records = Self::records(report);
        for record in &records {
            csv_writer.serialize(record)?;
        }
        csv_writer
            .flush()
            .map_err(|e| Error::io("flush rank CSV", e))?;
        Ok(records.len())
    }

    /// Export the report to a CSV file at `path`
    pub fn export(report: &RankReport, path: &Path) -> Result<usize> {
        let file = File::create(path)
            .map_err(|e| Error::io(format!("create {}", path.display()), e))?;
        Self::write(report, file)
    }
}
