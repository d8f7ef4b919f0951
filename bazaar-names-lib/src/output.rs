//! Writing the conversion table to disk.

use std::fs;
use std::path::{Path, PathBuf};

use bazaar_names_catalog::ConversionTable;

use crate::error::GenerateError;

/// Render the table as 2-space indented JSON, keys in ascending order.
pub fn to_json(table: &ConversionTable) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(table)
}

/// Overwrite `path` with the rendered table and return the number of entries.
///
/// Goes through a sibling `.tmp` file and a rename, so a failed run leaves the
/// previous file untouched.
pub fn write_conversions(path: &Path, table: &ConversionTable) -> Result<usize, GenerateError> {
    let json = to_json(table)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GenerateError::write(parent, e))?;
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, json).map_err(|e| GenerateError::write(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(GenerateError::write(path, e));
    }

    log::debug!("Wrote {} entries to {}", table.len(), path.display());
    Ok(table.len())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
