use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single cell of a database table.
///
/// "Missing" is the explicit absent marker from the moment a workbook is
/// loaded; a truly empty source cell and a normalized placeholder both end up
/// here, so downstream stages never have to distinguish the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CellValue {
    /// Plain text value.
    Text(String),
    /// Numeric value; Excel stores every number as a float.
    Number(f64),
    /// Boolean value.
    Boolean(bool),
    /// Value intentionally absent.
    Missing,
}

impl CellValue {
    /// Returns `true` for the explicit absent marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// A named table: ordered column names plus rows of cells.
///
/// Rows have positional identity only. After a merge the primary-source rows
/// precede the secondary-source rows, and nothing re-sorts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Creates an empty table with the provided header.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Returns a copy of the table with one extra trailing column whose cells
    /// all hold `default`.
    pub fn with_column(&self, column: impl Into<String>, default: CellValue) -> Table {
        let mut table = self.clone();
        table.columns.push(column.into());
        for row in &mut table.rows {
            row.push(default.clone());
        }
        table
    }
}

/// One side of the database: the named set of tables loaded from a single
/// workbook, or the merged result.
///
/// Lookup is by table name; iteration order is always imposed externally by
/// the release schema, never by map order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    tables: BTreeMap<String, Table>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a table under its own name.
    pub fn insert(&mut self, table: Table) {
        self.tables.insert(table.name.clone(), table);
    }

    /// Looks up a table by name.
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Number of tables held.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` when no tables are held.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_row_table() -> Table {
        Table {
            name: "Metadata".to_string(),
            columns: vec!["ipm_id".to_string(), "species".to_string()],
            rows: vec![
                vec![
                    CellValue::Text("aaa1".to_string()),
                    CellValue::Text("Carex".to_string()),
                ],
                vec![CellValue::Text("aaa2".to_string()), CellValue::Missing],
            ],
        }
    }

    #[test]
    fn with_column_extends_header_and_every_row() {
        let table = two_row_table();
        let augmented = table.with_column("checked", CellValue::Missing);

        assert_eq!(augmented.columns, vec!["ipm_id", "species", "checked"]);
        assert!(augmented.rows.iter().all(|row| row.len() == 3));
        assert!(augmented.rows.iter().all(|row| row[2].is_missing()));
        // the original is untouched
        assert_eq!(table.columns.len(), 2);
    }

    #[test]
    fn with_column_on_empty_table_only_extends_header() {
        let table = Table::new("StateVectors", vec!["ipm_id".to_string()]);
        let augmented = table.with_column("checked", CellValue::Missing);
        assert_eq!(augmented.columns.len(), 2);
        assert!(augmented.rows.is_empty());
    }

    #[test]
    fn collection_replaces_tables_by_name() {
        let mut collection = Collection::new();
        collection.insert(two_row_table());
        collection.insert(Table::new("Metadata", vec!["ipm_id".to_string()]));

        assert_eq!(collection.len(), 1);
        assert!(collection.get("Metadata").unwrap().rows.is_empty());
    }
}
