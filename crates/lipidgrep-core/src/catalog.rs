//! In-memory reference catalog with a canonical-key index.
//!
//! Records are kept in load order. Each record's key is computed once when
//! the catalog is built; the index maps a key to the positions of every
//! record sharing it, in load order.

use std::collections::HashMap;

use crate::record::LipidRecord;

/// The loaded reference database.
#[derive(Debug, Default)]
pub struct Catalog {
  records: Vec<LipidRecord>,
  keys:    Vec<String>,
  index:   HashMap<String, Vec<usize>>,
}

impl Catalog {
  pub fn new(records: Vec<LipidRecord>) -> Self {
    let keys: Vec<String> =
      records.iter().map(LipidRecord::canonical_key).collect();

    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (position, key) in keys.iter().enumerate() {
      // Empty keys come from unrecognized names and must stay unmatchable.
      if key.is_empty() {
        continue;
      }
      index.entry(key.clone()).or_default().push(position);
    }

    tracing::debug!(
      records = records.len(),
      distinct_keys = index.len(),
      "built catalog index"
    );

    Self {
      records,
      keys,
      index,
    }
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// All records in load order.
  pub fn records(&self) -> &[LipidRecord] {
    &self.records
  }

  /// Records whose canonical key could not be derived.
  pub fn unkeyed(&self) -> usize {
    self.keys.iter().filter(|k| k.is_empty()).count()
  }

  /// Every record whose canonical key equals `key`, with that key, in load
  /// order. Case-sensitive; an empty `key` matches nothing.
  pub fn lookup<'a>(
    &'a self,
    key: &str,
  ) -> impl Iterator<Item = (&'a str, &'a LipidRecord)> + use<'a> {
    self
      .index
      .get(key)
      .map(Vec::as_slice)
      .unwrap_or_default()
      .iter()
      .map(move |&i| (self.keys[i].as_str(), &self.records[i]))
  }
}

impl FromIterator<LipidRecord> for Catalog {
  fn from_iter<I: IntoIterator<Item = LipidRecord>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}
