//! Query-name list reader.
//!
//! The names file is free text: names may be separated by line breaks,
//! commas, tabs or semicolons, in any mix.

use std::io::Read;

use lipidgrep_core::QueryName;

use crate::{error::Result, strip_bom};

const DELIMITERS: [char; 5] = ['\r', '\n', ',', '\t', ';'];

/// Split `input` into query names, in order.
///
/// Tokens that are empty once trimmed are dropped.
pub fn parse_names(input: &str) -> Vec<QueryName> {
  strip_bom(input)
    .split(DELIMITERS)
    .filter(|token| !token.trim().is_empty())
    .map(QueryName::new)
    .collect()
}

/// Read every query name from `reader`.
pub fn read_names<R: Read>(mut reader: R) -> Result<Vec<QueryName>> {
  let mut input = String::new();
  reader.read_to_string(&mut input)?;

  let names = parse_names(&input);
  tracing::info!(names = names.len(), "loaded query names");
  Ok(names)
}
