//! Reference records and query names — the two sides of the join.

use crate::canonical;

/// Default base URL for LipidMaps structure-database detail pages.
pub const LIPIDMAPS_RECORD_URL: &str =
  "http://www.lipidmaps.org/data/LMSDRecord.php?LMID=";

// ─── Reference side ──────────────────────────────────────────────────────────

/// One annotated lipid from the reference database.
///
/// String fields default to empty and numeric identifiers to `0` when the
/// database has no such column or the cell is empty. A `0` ID means "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LipidRecord {
  /// Name as stored in the database; source of the canonical key.
  pub common_name:  String,
  pub adduct:       String,
  pub lipidmaps_id: String,
  pub category:     String,
  pub main_class:   String,
  pub sub_class:    String,
  pub formula:      String,
  pub pubchem_sid:  String,
  pub pubchem_cid:  String,
  pub inchi_key:    String,
  pub kegg_id:      String,
  pub hmdb_id:      String,
  pub chebi_id:     i32,
  pub lipidat_id:   i32,
  pub lipidbank_id: String,
}

impl LipidRecord {
  /// Build a record carrying only the two required fields.
  pub fn new(common_name: impl Into<String>, adduct: impl Into<String>) -> Self {
    Self {
      common_name: common_name.into(),
      adduct: adduct.into(),
      ..Self::default()
    }
  }

  /// Canonical join key derived from [`LipidRecord::common_name`].
  pub fn canonical_key(&self) -> String {
    canonical::canonical_key(&self.common_name)
  }

  /// Detail-page URL under `base`, or an empty string without a LipidMaps ID.
  pub fn lipidmaps_url(&self, base: &str) -> String {
    if self.lipidmaps_id.is_empty() {
      String::new()
    } else {
      format!("{base}{}", self.lipidmaps_id)
    }
  }
}

/// Parse an integer identifier cell; anything unparsable counts as absent.
pub fn parse_id(cell: &str) -> i32 {
  cell.trim().parse().unwrap_or_default()
}

// ─── Query side ──────────────────────────────────────────────────────────────

/// One name from the user's names file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryName {
  /// The name as written, trimmed of surrounding whitespace.
  pub original:  String,
  /// The join key: `original` with instrument suffixes removed.
  pub canonical: String,
}

impl QueryName {
  pub fn new(raw: &str) -> Self {
    let original = raw.trim().to_string();
    let canonical = canonical::query_key(&original);
    Self {
      original,
      canonical,
    }
  }
}
