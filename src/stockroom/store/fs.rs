use crate::error::{FileOp, InventoryError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Reads the whole file as text. Invalid UTF-8 is replaced rather than
/// rejected so one bad byte cannot make the rest of the file unreadable.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| InventoryError::file_op(FileOp::Read, path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Writes `contents` next to `path` under a temporary name, then renames it
/// into place, so readers see either the old file or the new one.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = tmp_sibling(path);

    if let Err(e) = fs::write(&tmp_path, contents) {
        let _ = fs::remove_file(&tmp_path);
        return Err(InventoryError::file_op(FileOp::Write, path, e));
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(InventoryError::file_op(FileOp::Write, path, e));
    }
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let stem = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "inventory".to_string());
    let name = format!(".{}-{}.tmp", stem, Uuid::new_v4());
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
