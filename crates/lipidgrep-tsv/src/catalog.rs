//! Reference-catalog reader.
//!
//! Input is tab-delimited text. The first line names the columns; every
//! later line is one lipid. Only [`Column`] headers are read, in any order
//! and any letter case. `COMMON_NAME` and `ADDUCT` must be present.

use std::{collections::HashMap, io::BufRead};

use lipidgrep_core::{Catalog, LipidRecord, parse_id};

use crate::{
  column::Column,
  error::{Error, Result},
  strip_bom,
};

// ─── Header mapping ──────────────────────────────────────────────────────────

/// Position of each recognized column in a catalog row.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
  positions: HashMap<Column, usize>,
  width:     usize,
}

impl ColumnMap {
  /// Map the recognized headers in `header` to their positions.
  ///
  /// Unrecognized headers are skipped. A header repeated later in the line
  /// is ignored in favour of its first position.
  pub fn from_header(header: &str) -> Result<Self> {
    let mut positions = HashMap::new();
    let titles: Vec<&str> = strip_bom(header).split('\t').collect();

    for (position, title) in titles.iter().enumerate() {
      let Ok(column) = title.trim().parse::<Column>() else {
        continue;
      };
      if positions.contains_key(&column) {
        tracing::warn!(%column, position, "duplicate catalog column ignored");
        continue;
      }
      positions.insert(column, position);
    }

    for required in Column::REQUIRED {
      if !positions.contains_key(&required) {
        return Err(Error::MissingColumn(required));
      }
    }

    Ok(Self {
      positions,
      width: titles.len(),
    })
  }

  pub fn position(&self, column: Column) -> Option<usize> {
    self.positions.get(&column).copied()
  }

  fn cell<'l>(&self, cells: &[&'l str], column: Column) -> &'l str {
    self
      .position(column)
      .and_then(|i| cells.get(i).copied())
      .unwrap_or_default()
  }

  /// Build a record from one data line.
  ///
  /// Cells missing from a short row read as empty.
  pub fn parse_row(&self, line: &str) -> LipidRecord {
    let cells: Vec<&str> = line.split('\t').collect();
    if cells.len() < self.width {
      tracing::debug!(
        cells = cells.len(),
        expected = self.width,
        "short catalog row"
      );
    }

    let cell = |column: Column| self.cell(&cells, column);
    let text = |column: Column| self.cell(&cells, column).to_string();

    LipidRecord {
      common_name:  text(Column::CommonName),
      adduct:       text(Column::Adduct),
      lipidmaps_id: text(Column::LmId),
      category:     text(Column::Category),
      main_class:   text(Column::MainClass),
      sub_class:    text(Column::SubClass),
      formula:      text(Column::Formula),
      pubchem_sid:  text(Column::PubchemSid),
      pubchem_cid:  text(Column::PubchemCid),
      inchi_key:    text(Column::InchiKey),
      kegg_id:      text(Column::KeggId),
      hmdb_id:      text(Column::HmdbId),
      chebi_id:     parse_id(cell(Column::ChebiId)),
      lipidat_id:   parse_id(cell(Column::LipidatId)),
      lipidbank_id: text(Column::LipidbankId),
    }
  }
}

// ─── Reader ──────────────────────────────────────────────────────────────────

/// Read a whole reference catalog from `reader`.
///
/// Fails on an empty input, on a header lacking a required column, or on any
/// I/O error. Blank data lines are skipped.
pub fn read_catalog<R: BufRead>(reader: R) -> Result<Catalog> {
  let mut lines = reader.lines();
  let header = lines.next().ok_or(Error::MissingHeader)??;
  let columns = ColumnMap::from_header(&header)?;

  let mut records = Vec::new();
  for (index, line) in lines.enumerate() {
    let line = line?;
    if line.trim().is_empty() {
      tracing::debug!(line = index + 2, "skipping blank catalog line");
      continue;
    }
    records.push(columns.parse_row(&line));
  }

  let catalog = Catalog::new(records);
  tracing::info!(
    records = catalog.len(),
    unkeyed = catalog.unkeyed(),
    "loaded reference catalog"
  );
  Ok(catalog)
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  const HEADER: &str = "LM_ID\tCOMMON_NAME\tADDUCT\tCATEGORY\tMAIN_CLASS\t\
                        SUB_CLASS\tFORMULA\tCHEBI_ID\tLIPIDAT_ID";

  fn read(input: &str) -> Result<Catalog> {
    read_catalog(Cursor::new(input))
  }

  #[test]
  fn reads_all_recognized_fields() {
    let input = format!(
      "{HEADER}\nLMGP02010009\tPE(18:0/20:4)\t[M+H]+\tGlycerophospholipids \
       [GP]\tGlycerophosphoethanolamines [GP02]\tDiacylglycerophospho\
       ethanolamines [GP0201]\tC43H78NO8P\t78097\t\n"
    );
    let catalog = read(&input).unwrap();
    assert_eq!(catalog.len(), 1);

    let record = &catalog.records()[0];
    assert_eq!(record.lipidmaps_id, "LMGP02010009");
    assert_eq!(record.common_name, "PE(18:0/20:4)");
    assert_eq!(record.adduct, "[M+H]+");
    assert_eq!(record.category, "Glycerophospholipids [GP]");
    assert_eq!(record.formula, "C43H78NO8P");
    assert_eq!(record.chebi_id, 78097);
    assert_eq!(record.lipidat_id, 0);
    assert_eq!(record.kegg_id, "");
  }

  #[test]
  fn header_case_and_order_do_not_matter() {
    let input = "adduct\tExtra\tcommon_name\tKegg_Id\n\
                 [M+H]+\tx\tPC(16:0/18:1)\tC00157\n";
    let catalog = read(input).unwrap();
    let record = &catalog.records()[0];
    assert_eq!(record.common_name, "PC(16:0/18:1)");
    assert_eq!(record.adduct, "[M+H]+");
    assert_eq!(record.kegg_id, "C00157");
  }

  #[test]
  fn missing_common_name_is_fatal() {
    let err = read("LM_ID\tADDUCT\nLM1\t[M+H]+\n").unwrap_err();
    assert!(matches!(err, Error::MissingColumn(Column::CommonName)));
    assert_eq!(
      err.to_string(),
      "COMMON_NAME column is required for lipid import"
    );
  }

  #[test]
  fn missing_adduct_is_fatal() {
    let err = read("COMMON_NAME\nPE(18:0/20:4)\n").unwrap_err();
    assert!(matches!(err, Error::MissingColumn(Column::Adduct)));
  }

  #[test]
  fn empty_input_is_fatal() {
    assert!(matches!(read("").unwrap_err(), Error::MissingHeader));
  }

  #[test]
  fn unparsable_ids_become_zero() {
    let input = "COMMON_NAME\tADDUCT\tCHEBI_ID\tLIPIDAT_ID\n\
                 PE(18:0/20:4)\t[M+H]+\tCHEBI:1\tn/a\n\
                 PC(16:0/18:1)\t[M+H]+\t\t 12 \n";
    let catalog = read(input).unwrap();
    assert_eq!(catalog.records()[0].chebi_id, 0);
    assert_eq!(catalog.records()[0].lipidat_id, 0);
    assert_eq!(catalog.records()[1].chebi_id, 0);
    assert_eq!(catalog.records()[1].lipidat_id, 12);
  }

  #[test]
  fn short_rows_and_blank_lines_are_tolerated() {
    let input = "COMMON_NAME\tADDUCT\tFORMULA\r\n\
                 PE(18:0/20:4)\t[M+H]+\r\n\
                 \r\n\
                 Cholesterol\t[M+NH4]+\tC27H46O\r\n";
    let catalog = read(input).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.records()[0].formula, "");
    assert_eq!(catalog.records()[1].formula, "C27H46O");
    assert_eq!(catalog.unkeyed(), 1);
  }

  #[test]
  fn duplicate_header_keeps_first_position() {
    let map =
      ColumnMap::from_header("COMMON_NAME\tADDUCT\tcommon_name").unwrap();
    assert_eq!(map.position(Column::CommonName), Some(0));
  }

  #[test]
  fn byte_order_mark_is_ignored() {
    let catalog =
      read("\u{feff}COMMON_NAME\tADDUCT\nPE(18:0/20:4)\t[M+H]+\n").unwrap();
    assert_eq!(catalog.lookup("PE(18:0/20:4)").count(), 1);
  }
}
