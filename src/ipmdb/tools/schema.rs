//! The fixed release schema shared by every pipeline stage.
//!
//! The set of tables making up the database is versioned by convention, not
//! inferred: the loader requires every name listed here in both source
//! workbooks, the merger and the exporter iterate the same list in the same
//! order.

/// Ordered list of the logical tables making up one release of the database.
pub const TABLE_NAMES: [&str; 10] = [
    "Metadata",
    "StateVariables",
    "ContinuousDomains",
    "IntegrationRules",
    "StateVectors",
    "IpmKernels",
    "VitalRateExpr",
    "ParameterValues",
    "EnvironmentalVariables",
    "HierarchTable",
];

/// Table describing study-level metadata; first in every release.
pub const METADATA_TABLE: &str = "Metadata";

/// Table holding the hierarchical parameter-set indices. Kept under this name
/// in memory, exported under [`PAR_SET_INDICES`].
pub const HIERARCH_TABLE: &str = "HierarchTable";

/// On-disk name for [`HIERARCH_TABLE`].
pub const PAR_SET_INDICES: &str = "ParSetIndices";

/// Validation-status flag column. Only the primary workbook tracks it
/// natively; the loader adds it to the secondary metadata table before merge.
pub const CHECKED_COLUMN: &str = "checked";

/// Literal cell text the source workbooks use for "value intentionally
/// absent". Matched on full-cell equality only.
pub const NA_SENTINEL: &str = "NA";

/// File stem a table is exported under.
pub fn export_stem(table_name: &str) -> &str {
    if table_name == HIERARCH_TABLE {
        PAR_SET_INDICES
    } else {
        table_name
    }
}
