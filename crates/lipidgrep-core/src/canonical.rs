//! Canonicalization of lipid species names into join keys.
//!
//! Reference-database names and instrument-exported names describe the same
//! species in different shapes. Both are reduced to a canonical string here so
//! that matching is plain string equality.
//!
//! Pipeline for reference names:
//!   raw common name
//!     └─ chain tokens (left to right, whole string scanned)
//!          └─ class label (text before first `(`, hyphens removed)
//!               └─ `<class>(<chain>/<chain>/...)` + optional oxidation tail
//!
//! Query names only lose their underscore suffixes (`_d7`, `_13C`, `_Na`).

use std::sync::LazyLock;

use regex::Regex;

// ─── Patterns ────────────────────────────────────────────────────────────────

/// One acyl/alkyl chain: optional subtype marker, `carbons:double-bonds`, and
/// an optional parenthesized oxidation tag.
static CHAIN_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"([mdtOP]-?)?\d+:\d+(\(((\d+)?(OH|\(OH\))|CHO|COOH)\))?")
    .expect("chain-token pattern compiles")
});

/// Instrument suffix: underscore plus one to three word characters.
static QUERY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"_\w{1,3}")
    .expect("query-suffix pattern compiles")
});

// ─── Reference names ─────────────────────────────────────────────────────────

/// Every chain token in `raw`, in the order it appears.
pub fn chain_tokens(raw: &str) -> Vec<&str> {
  CHAIN_TOKEN.find_iter(raw).map(|m| m.as_str()).collect()
}

/// The class label: everything before the first `(`, with hyphens removed.
pub fn class_label(raw: &str) -> String {
  let head = raw.split('(').next().unwrap_or(raw);
  head.replace('-', "")
}

/// Text after the last `(` in `raw`, or all of `raw` when it has no `(`.
fn oxidation_tail(raw: &str) -> &str {
  raw.rsplit('(').next().unwrap_or(raw)
}

/// Reduce a reference-database common name to its canonical key.
///
/// Returns an empty string when no chain token is found; such records can
/// never be matched. Total over arbitrary input.
///
/// When the text after the last `(` contains `OH`, that text is appended
/// behind an unclosed `(`. Existing reference matches depend on this exact
/// shape, including for names whose last group is `COOH`.
pub fn canonical_key(raw: &str) -> String {
  let chains = chain_tokens(raw);
  if chains.is_empty() {
    return String::new();
  }

  let class = class_label(raw);
  let mut key = String::with_capacity(raw.len() * 2);
  key.push_str(&class);
  key.push('(');
  key.push_str(&chains.join("/"));
  key.push(')');

  let oxidation = oxidation_tail(raw);
  if oxidation.contains("OH") {
    key.push('(');
    key.push_str(oxidation);
  }

  key
}

// ─── Query names ─────────────────────────────────────────────────────────────

/// Strip every `_xyz` instrument suffix from an already-trimmed query name.
pub fn query_key(trimmed: &str) -> String {
  QUERY_SUFFIX.replace_all(trimmed, "").into_owned()
}
