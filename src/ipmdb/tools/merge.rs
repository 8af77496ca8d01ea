use tracing::debug;

use crate::ipmdb::tools::error::{Result, ToolError};
use crate::ipmdb::tools::model::{Collection, Table};
use crate::ipmdb::tools::schema;

/// Merges the secondary collection into the primary one, table by table in
/// schema order.
///
/// Primary rows come first, column order is the primary table's, and nothing
/// is re-sorted. A table the secondary side lacks passes through unchanged.
pub fn merge_collections(primary: &Collection, secondary: &Collection) -> Result<Collection> {
    let mut merged = Collection::new();
    for name in schema::TABLE_NAMES {
        let Some(primary_table) = primary.get(name) else {
            continue;
        };
        let merged_table = match secondary.get(name) {
            Some(secondary_table) => merge_tables(primary_table, secondary_table)?,
            None => primary_table.clone(),
        };
        debug!(table = name, rows = merged_table.rows.len(), "table merged");
        merged.insert(merged_table);
    }
    Ok(merged)
}

/// Concatenates the secondary table's rows below the primary table's.
///
/// The two sides must agree on the column set; a disagreement would otherwise
/// surface only as ragged rows in the exported files.
pub fn merge_tables(primary: &Table, secondary: &Table) -> Result<Table> {
    if primary.columns != secondary.columns {
        return Err(ToolError::ColumnMismatch {
            table: primary.name.clone(),
            primary: primary.columns.join(", "),
            secondary: secondary.columns.join(", "),
        });
    }

    let mut table = primary.clone();
    table.rows.extend(secondary.rows.iter().cloned());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipmdb::tools::model::CellValue;

    fn table(name: &str, ids: &[&str]) -> Table {
        Table {
            name: name.to_string(),
            columns: vec!["ipm_id".to_string()],
            rows: ids
                .iter()
                .map(|id| vec![CellValue::Text((*id).to_string())])
                .collect(),
        }
    }

    #[test]
    fn merged_row_count_is_the_sum_of_both_sides() {
        let primary = table("Metadata", &["a", "b", "c"]);
        let secondary = table("Metadata", &["d", "e"]);

        let merged = merge_tables(&primary, &secondary).expect("tables merged");
        assert_eq!(merged.rows.len(), 5);
    }

    #[test]
    fn primary_rows_precede_secondary_rows_in_original_order() {
        let primary = table("Metadata", &["a", "b"]);
        let secondary = table("Metadata", &["c"]);

        let merged = merge_tables(&primary, &secondary).expect("tables merged");
        let ids: Vec<&CellValue> = merged.rows.iter().map(|row| &row[0]).collect();
        assert_eq!(
            ids,
            vec![
                &CellValue::Text("a".to_string()),
                &CellValue::Text("b".to_string()),
                &CellValue::Text("c".to_string()),
            ]
        );
    }

    #[test]
    fn table_missing_from_secondary_passes_through_unchanged() {
        let mut primary = Collection::new();
        primary.insert(table("Metadata", &["a"]));
        let secondary = Collection::new();

        let merged = merge_collections(&primary, &secondary).expect("collections merged");
        assert_eq!(merged.get("Metadata"), primary.get("Metadata"));
    }

    #[test]
    fn column_disagreement_is_rejected() {
        let primary = table("Metadata", &["a"]);
        let mut secondary = table("Metadata", &["b"]);
        secondary.columns = vec!["id".to_string()];

        let error = merge_tables(&primary, &secondary).unwrap_err();
        assert!(matches!(error, ToolError::ColumnMismatch { table, .. } if table == "Metadata"));
    }
}
