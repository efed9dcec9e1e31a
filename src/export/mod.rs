//! Export functionality for rank reports
//!
//! Reports can be written as CSV (one row per page) or as JSON.

mod rank_csv;

pub use rank_csv::{RankCsvExporter, RankRecord};
