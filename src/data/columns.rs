//! Header names published by Statistics Canada for table 18-10-0004-01.
//!
//! These are a contract with the upstream provider and are matched exactly.

pub const REF_DATE: &str = "REF_DATE";
pub const GEO: &str = "GEO";
pub const CATEGORY: &str = "Products and product groups";
pub const VALUE: &str = "VALUE";

/// Columns kept in the cleaned output, in output order.
pub const OUTPUT_COLUMNS: [&str; 4] = [REF_DATE, GEO, CATEGORY, VALUE];
