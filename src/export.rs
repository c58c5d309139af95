use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::CategoryTable;

/// Default output path of the category metadata file.
pub const METADATA_FILE: &str = "_category_metadata.json";

/// Serialize the category metadata as JSON.
pub fn metadata_json(table: &CategoryTable) -> Result<String> {
    Ok(serde_json::to_string_pretty(&table.metadata())?)
}

/// Write category metadata to a JSON file, replacing any previous contents.
pub fn write_metadata(
    table: &CategoryTable,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, metadata_json(table)?)
        .with_context(|| format!("failed to write {path:?}"))
}
