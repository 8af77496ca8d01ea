use crate::ipmdb::tools::model::{CellValue, Collection, Table};
use crate::ipmdb::tools::schema;

/// Normalizes every table of the collection.
pub fn normalize_collection(collection: &Collection) -> Collection {
    let mut normalized = Collection::new();
    for name in schema::TABLE_NAMES {
        if let Some(table) = collection.get(name) {
            normalized.insert(normalize_table(table));
        }
    }
    normalized
}

/// Rewrites every cell holding the literal placeholder text into the explicit
/// absent marker.
///
/// The match is full-cell equality, never a substring search, so legitimate
/// text that merely contains the token ("DNA", "NAME") is left alone. Cells
/// that are already absent stay absent, which makes the pass idempotent.
pub fn normalize_table(table: &Table) -> Table {
    let rows = table
        .rows
        .iter()
        .map(|row| row.iter().map(normalize_cell).collect())
        .collect();
    Table {
        name: table.name.clone(),
        columns: table.columns.clone(),
        rows,
    }
}

fn normalize_cell(cell: &CellValue) -> CellValue {
    match cell {
        CellValue::Text(value) if value == schema::NA_SENTINEL => CellValue::Missing,
        other => other.clone(),
    }
}
