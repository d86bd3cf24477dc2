//! Recognized reference-catalog columns.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A column header the catalog reader understands.
///
/// Parsing is ASCII case-insensitive; any other header text is ignored by the
/// reader rather than rejected.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Column {
  #[strum(serialize = "LM_ID")]
  LmId,
  #[strum(serialize = "COMMON_NAME")]
  CommonName,
  #[strum(serialize = "ADDUCT")]
  Adduct,
  #[strum(serialize = "CATEGORY")]
  Category,
  #[strum(serialize = "MAIN_CLASS")]
  MainClass,
  #[strum(serialize = "SUB_CLASS")]
  SubClass,
  #[strum(serialize = "FORMULA")]
  Formula,
  #[strum(serialize = "PUBCHEM_SID")]
  PubchemSid,
  #[strum(serialize = "PUBCHEM_CID")]
  PubchemCid,
  #[strum(serialize = "INCHI_KEY")]
  InchiKey,
  #[strum(serialize = "KEGG_ID")]
  KeggId,
  #[strum(serialize = "HMDBID")]
  HmdbId,
  #[strum(serialize = "CHEBI_ID")]
  ChebiId,
  #[strum(serialize = "LIPIDAT_ID")]
  LipidatId,
  #[strum(serialize = "LIPIDBANK_ID")]
  LipidbankId,
}

impl Column {
  /// Columns a catalog cannot be loaded without.
  pub const REQUIRED: [Column; 2] = [Column::CommonName, Column::Adduct];
}
