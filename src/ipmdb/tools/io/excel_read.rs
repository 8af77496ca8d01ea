use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::ipmdb::tools::error::{Result, ToolError};
use crate::ipmdb::tools::model::{CellValue, Collection, Table};
use crate::ipmdb::tools::schema;

/// Loads the primary and secondary source workbooks.
///
/// Only the primary workbook tracks the validation-status flag natively, so
/// the secondary metadata table gains a trailing [`schema::CHECKED_COLUMN`]
/// with every cell absent before the two sides are merged.
pub fn load_sources(primary: &Path, secondary: &Path) -> Result<(Collection, Collection)> {
    let primary_collection = read_collection(primary, "primary")?;
    let mut secondary_collection = read_collection(secondary, "secondary")?;

    let augmented = secondary_collection
        .get(schema::METADATA_TABLE)
        .map(|metadata| metadata.with_column(schema::CHECKED_COLUMN, CellValue::Missing));
    if let Some(metadata) = augmented {
        secondary_collection.insert(metadata);
    }

    Ok((primary_collection, secondary_collection))
}

/// Reads one workbook into a collection containing every table named by the
/// release schema. The first worksheet row is the header.
pub fn read_collection(path: &Path, source_name: &str) -> Result<Collection> {
    if !path.exists() {
        return Err(ToolError::SourceUnavailable(path.to_path_buf()));
    }
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|_: calamine::XlsxError| ToolError::SourceUnavailable(path.to_path_buf()))?;

    let mut collection = Collection::new();
    for table_name in schema::TABLE_NAMES {
        let range = read_required_sheet(&mut workbook, source_name, table_name)?;
        collection.insert(range_to_table(table_name, &range));
    }
    Ok(collection)
}

fn read_required_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    source_name: &str,
    name: &str,
) -> Result<calamine::Range<DataType>> {
    let range_result = workbook
        .worksheet_range(name)
        .ok_or_else(|| ToolError::MissingTable {
            source_name: source_name.to_string(),
            table: name.to_string(),
        })?;
    let range = range_result.map_err(ToolError::from)?;
    Ok(range)
}

fn range_to_table(name: &str, range: &calamine::Range<DataType>) -> Table {
    let mut rows = range.rows();

    let columns: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(cell_to_text).collect(),
        None => Vec::new(),
    };

    let mut table = Table::new(name, columns);
    for row in rows {
        let mut cells: Vec<CellValue> = row.iter().map(cell_to_value).collect();
        cells.resize(table.columns.len(), CellValue::Missing);
        table.rows.push(cells);
    }
    table
}

fn cell_to_value(cell: &DataType) -> CellValue {
    match cell {
        DataType::String(value) => CellValue::Text(value.clone()),
        DataType::Float(value) => CellValue::Number(*value),
        DataType::Int(value) => CellValue::Number(*value as f64),
        DataType::Bool(value) => CellValue::Boolean(*value),
        DataType::Empty => CellValue::Missing,
        other => CellValue::Text(other.to_string()),
    }
}

fn cell_to_text(cell: &DataType) -> String {
    match cell {
        DataType::String(value) => value.clone(),
        DataType::Empty => String::new(),
        other => other.to_string(),
    }
}
