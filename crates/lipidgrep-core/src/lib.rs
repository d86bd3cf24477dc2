//! Lipid species name matching for LipidGrep.
//!
//! Canonicalizes reference-database names and instrument-exported query names
//! into comparable keys, and joins queries to reference records by exact key
//! equality. Pure synchronous; file formats live in `lipidgrep-tsv`.
//!
//! # Quick start
//!
//! ```
//! use lipidgrep_core::{Catalog, LipidRecord, QueryName, match_queries};
//!
//! let catalog = Catalog::new(vec![LipidRecord::new("PE(18:0/20:4)", "[M+H]+")]);
//! let queries = vec![QueryName::new("PE(18:0/20:4)_d7")];
//! let report = match_queries(&catalog, &queries);
//! assert_eq!(report.rows.len(), 1);
//! ```

pub mod canonical;
pub mod catalog;
pub mod matcher;
pub mod record;

pub use canonical::{canonical_key, query_key};
pub use catalog::Catalog;
pub use matcher::{MatchReport, MatchRow, match_queries};
pub use record::{LIPIDMAPS_RECORD_URL, LipidRecord, QueryName, parse_id};
