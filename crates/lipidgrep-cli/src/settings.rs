//! Layered settings: defaults, then an optional TOML file, then
//! `LIPIDGREP_*` environment variables.

use std::path::Path;

use anyhow::Context as _;
use lipidgrep_core::LIPIDMAPS_RECORD_URL;
use serde::Deserialize;

/// Suffix appended to the names-file path to form the report path.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_IdentifierInfo.txt";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Base URL that LipidMaps IDs are appended to in the report.
  pub lipidmaps_url: String,
  /// Appended to the names-file path (minus `.txt`/`.csv`) for the report.
  pub output_suffix: String,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      lipidmaps_url: LIPIDMAPS_RECORD_URL.to_string(),
      output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
    }
  }
}

impl Settings {
  /// Load settings from `path` (if it exists) and the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("LIPIDGREP"))
      .build()
      .with_context(|| format!("failed to read config file {}", path.display()))?;

    settings
      .try_deserialize()
      .context("failed to deserialise Settings")
  }
}
