//! Identifier report writer.
//!
//! One header line, then one tab-separated line per match. Columns are fixed;
//! absent identifiers are written as empty cells (strings) or `0` (integers).

use std::io::Write;

use lipidgrep_core::MatchRow;

use crate::error::Result;

/// Report column titles, in output order.
pub const REPORT_HEADER: [&str; 17] = [
  "Lipid Annotation",
  "Clean Name",
  "Global Target Match",
  "Category",
  "Main Class",
  "Sub Class",
  "Formula",
  "LM_ID",
  "LipidMaps Entry",
  "PUBCHEM_SID",
  "PUBCHEM_CID",
  "INCHI_KEY",
  "KEGG_ID",
  "HMDBID",
  "CHEBI_ID",
  "LIPIDAT_ID",
  "LIPIDBANK_ID",
];

/// Streams match rows to `out` as the identifier report.
pub struct ReportWriter<W: Write> {
  out:           W,
  lipidmaps_url: String,
  rows:          usize,
}

impl<W: Write> ReportWriter<W> {
  /// Write the header line and return a writer ready for rows.
  ///
  /// `lipidmaps_url` is the base that each record's LipidMaps ID is appended
  /// to for the "LipidMaps Entry" column.
  pub fn new(mut out: W, lipidmaps_url: impl Into<String>) -> Result<Self> {
    writeln!(out, "{}", REPORT_HEADER.join("\t"))?;
    Ok(Self {
      out,
      lipidmaps_url: lipidmaps_url.into(),
      rows: 0,
    })
  }

  pub fn write_row(&mut self, row: &MatchRow<'_>) -> Result<()> {
    let record = row.record;
    let chebi_id = record.chebi_id.to_string();
    let lipidat_id = record.lipidat_id.to_string();
    let lipidmaps_entry = record.lipidmaps_url(&self.lipidmaps_url);

    let fields: [&str; 17] = [
      &row.query.original,
      row.key,
      &record.common_name,
      &record.category,
      &record.main_class,
      &record.sub_class,
      &record.formula,
      &record.lipidmaps_id,
      &lipidmaps_entry,
      &record.pubchem_sid,
      &record.pubchem_cid,
      &record.inchi_key,
      &record.kegg_id,
      &record.hmdb_id,
      &chebi_id,
      &lipidat_id,
      &record.lipidbank_id,
    ];
    writeln!(self.out, "{}", fields.join("\t"))?;
    self.rows += 1;
    Ok(())
  }

  pub fn write_rows<'r, 'a: 'r>(
    &mut self,
    rows: impl IntoIterator<Item = &'r MatchRow<'a>>,
  ) -> Result<()> {
    for row in rows {
      self.write_row(row)?;
    }
    Ok(())
  }

  /// Rows written so far, excluding the header.
  pub fn rows_written(&self) -> usize {
    self.rows
  }

  /// Flush and hand back the underlying writer.
  pub fn finish(mut self) -> Result<W> {
    self.out.flush()?;
    Ok(self.out)
  }
}
