//! Tab-delimited and free-text codecs for LipidGrep.
//!
//! Reads the reference catalog and the query-names list into
//! [`lipidgrep_core`] types, and writes the identifier report. Generic over
//! `std::io` readers and writers; opening files is the caller's job.

mod catalog;
mod column;
mod names;
mod report;

pub mod error;

pub use catalog::{ColumnMap, read_catalog};
pub use column::Column;
pub use error::{Error, Result};
pub use names::{parse_names, read_names};
pub use report::{REPORT_HEADER, ReportWriter};

/// Drop a leading UTF-8 byte-order mark, as editors on Windows often add one.
pub(crate) fn strip_bom(s: &str) -> &str {
  s.strip_prefix('\u{feff}').unwrap_or(s)
}
