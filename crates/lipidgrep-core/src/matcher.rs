//! Exact-key join of query names against the catalog.

use crate::{
  catalog::Catalog,
  record::{LipidRecord, QueryName},
};

/// One (query, matching record) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRow<'a> {
  pub query:  &'a QueryName,
  /// The record's canonical key; equal to `query.canonical`.
  pub key:    &'a str,
  pub record: &'a LipidRecord,
}

/// The outcome of matching a list of queries.
#[derive(Debug, Default)]
pub struct MatchReport<'a> {
  /// Rows in query order, then catalog order within a query.
  pub rows:      Vec<MatchRow<'a>>,
  /// Queries that matched no record, in query order.
  pub unmatched: Vec<&'a QueryName>,
  /// Number of queries examined.
  pub queries:   usize,
}

impl MatchReport<'_> {
  /// Number of queries that produced at least one row.
  pub fn matched_queries(&self) -> usize {
    self.queries - self.unmatched.len()
  }
}

/// Join every query to every catalog record with an equal canonical key.
///
/// A query may match several records (e.g. stereoisomers sharing a key);
/// queries matching nothing produce no row.
pub fn match_queries<'a>(
  catalog: &'a Catalog,
  queries: &'a [QueryName],
) -> MatchReport<'a> {
  let mut report = MatchReport {
    queries: queries.len(),
    ..MatchReport::default()
  };

  for query in queries {
    let before = report.rows.len();
    report.rows.extend(
      catalog
        .lookup(&query.canonical)
        .map(|(key, record)| MatchRow { query, key, record }),
    );

    if report.rows.len() == before {
      tracing::debug!(query = %query.original, "no catalog match");
      report.unmatched.push(query);
    }
  }

  report
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::canonical::canonical_key;

  fn record(name: &str, lm_id: &str) -> LipidRecord {
    let mut record = LipidRecord::new(name, "[M+H]+");
    record.lipidmaps_id = lm_id.to_string();
    record
  }

  fn queries(names: &[&str]) -> Vec<QueryName> {
    names.iter().map(|n| QueryName::new(n)).collect()
  }

  #[test]
  fn unknown_query_yields_no_row() {
    let catalog = Catalog::new(vec![
      record("PE(18:0/20:4)", "LMGP02010009"),
      record("PC(16:0/18:1)", "LMGP01010005"),
    ]);
    let queries = queries(&["PE(18:0/20:4)", "Unknown"]);

    let report = match_queries(&catalog, &queries);
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].query.original, "PE(18:0/20:4)");
    assert_eq!(report.rows[0].record.lipidmaps_id, "LMGP02010009");
    assert_eq!(report.unmatched.len(), 1);
    assert_eq!(report.unmatched[0].original, "Unknown");
    assert_eq!(report.matched_queries(), 1);
  }

  #[test]
  fn rows_follow_query_then_catalog_order() {
    let catalog = Catalog::new(vec![
      record("PC(16:0/18:1)", "A"),
      record("SM(d18:1/16:0)", "B"),
      record("PC(16:0/18:1)", "C"),
    ]);
    let queries = queries(&["SM(d18:1/16:0)", "PC(16:0/18:1)_d7"]);

    let report = match_queries(&catalog, &queries);
    let got: Vec<(&str, &str)> = report
      .rows
      .iter()
      .map(|r| (r.query.original.as_str(), r.record.lipidmaps_id.as_str()))
      .collect();
    assert_eq!(got, vec![
      ("SM(d18:1/16:0)", "B"),
      ("PC(16:0/18:1)_d7", "A"),
      ("PC(16:0/18:1)_d7", "C"),
    ]);
    assert!(report.unmatched.is_empty());
  }

  #[test]
  fn every_row_key_matches_its_query() {
    let catalog = Catalog::new(vec![
      record("PE(P-18:0/20:4(5OH))", "A"),
      record("PE-NMe(16:0/18:1)", "B"),
      record("Cholesterol", "C"),
    ]);
    let queries =
      queries(&["PE(P-18:0/20:4(5OH))(5OH))", "PENMe(16:0/18:1)_Na", ""]);

    let report = match_queries(&catalog, &queries);
    assert_eq!(report.rows.len(), 2);
    for row in &report.rows {
      assert_eq!(row.key, row.query.canonical);
      assert_eq!(canonical_key(&row.record.common_name), row.query.canonical);
    }
  }

  #[test]
  fn repeated_queries_repeat_rows() {
    let catalog = Catalog::new(vec![record("PE(18:0/20:4)", "A")]);
    let queries = queries(&["PE(18:0/20:4)", "PE(18:0/20:4)"]);
    assert_eq!(match_queries(&catalog, &queries).rows.len(), 2);
  }
}
