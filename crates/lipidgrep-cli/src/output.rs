//! Report path derivation.

use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

/// The report path for a names file: its `.txt` or `.csv` extension removed,
/// then `suffix` appended.
pub fn report_path(names: &Path, suffix: &str) -> PathBuf {
  let base = match names.extension().and_then(OsStr::to_str) {
    Some("txt" | "csv") => names.with_extension(""),
    _ => names.to_path_buf(),
  };
  let mut path = base.into_os_string();
  path.push(suffix);
  PathBuf::from(path)
}
