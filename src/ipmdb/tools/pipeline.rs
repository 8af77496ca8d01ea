use std::path::Path;

use tracing::{info, instrument};

use crate::ipmdb::tools::error::Result;
use crate::ipmdb::tools::io::{excel_read, text_write};
use crate::ipmdb::tools::merge;
use crate::ipmdb::tools::normalize;

/// Runs the full release pipeline: load both workbooks, merge like-named
/// tables, normalize placeholders, and replace the exported text tables.
#[instrument(
    level = "info",
    skip_all,
    fields(
        primary = %primary.display(),
        secondary = %secondary.display(),
        output = %out_dir.display()
    )
)]
pub fn build_database(primary: &Path, secondary: &Path, out_dir: &Path) -> Result<()> {
    let (primary_collection, secondary_collection) = excel_read::load_sources(primary, secondary)?;
    info!(
        table_count = primary_collection.len(),
        "source workbooks loaded"
    );

    let merged = merge::merge_collections(&primary_collection, &secondary_collection)?;
    let normalized = normalize::normalize_collection(&merged);

    text_write::write_collection(out_dir, &normalized)?;
    info!(table_count = normalized.len(), "database tables exported");
    Ok(())
}
