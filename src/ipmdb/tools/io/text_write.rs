use std::fs;
use std::path::{Path, PathBuf};

use crate::ipmdb::tools::error::{Result, ToolError};
use crate::ipmdb::tools::model::{CellValue, Collection, Table};
use crate::ipmdb::tools::schema;
use tracing::debug;

/// Writes every table of the collection into `dir`, in schema order, after
/// clearing whatever a previous release left there.
pub fn write_collection(dir: &Path, collection: &Collection) -> Result<()> {
    clear_output_dir(dir)?;
    for name in schema::TABLE_NAMES {
        if let Some(table) = collection.get(name) {
            let path = write_table(dir, table)?;
            debug!(table = name, path = %path.display(), "table written");
        }
    }
    Ok(())
}

/// Removes everything inside the output directory so no table from a prior
/// release lingers, creating the directory first if needed.
pub fn clear_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| ToolError::WriteFailure {
        path: dir.to_path_buf(),
        source,
    })?;

    let entries = fs::read_dir(dir).map_err(|source| ToolError::WriteFailure {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| ToolError::WriteFailure {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let removal = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removal.map_err(|source| ToolError::WriteFailure { path, source })?;
    }
    Ok(())
}

/// Serializes one table as a tab-delimited UTF-8 text file named after its
/// export stem. Every field is quoted; absent cells carry the literal
/// [`schema::NA_SENTINEL`] token. Returns the path written.
pub fn write_table(dir: &Path, table: &Table) -> Result<PathBuf> {
    let path = dir.join(format!("{}.txt", schema::export_stem(&table.name)));

    let mut out = String::new();
    push_line(&mut out, table.columns.iter().cloned());
    for row in &table.rows {
        push_line(&mut out, row.iter().map(field_text));
    }

    fs::write(&path, out).map_err(|source| ToolError::WriteFailure {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn push_line(out: &mut String, fields: impl Iterator<Item = String>) {
    let quoted: Vec<String> = fields.map(|field| quote(&field)).collect();
    out.push_str(&quoted.join("\t"));
    out.push('\n');
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn field_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(value) => value.clone(),
        CellValue::Number(value) => value.to_string(),
        CellValue::Boolean(true) => "TRUE".to_string(),
        CellValue::Boolean(false) => "FALSE".to_string(),
        CellValue::Missing => schema::NA_SENTINEL.to_string(),
    }
}
