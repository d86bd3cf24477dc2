//! Error types for the lipidgrep-tsv codecs.

use thiserror::Error;

use crate::column::Column;

#[derive(Debug, Error)]
pub enum Error {
  #[error("reference catalog is empty; expected a header row")]
  MissingHeader,

  #[error("{0} column is required for lipid import")]
  MissingColumn(Column),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
