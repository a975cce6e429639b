//! Reading request documents and writing manifests (Imperative Shell).

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use serde_json::Value;

use crate::error::{AppError, Result};

/// Reads a YAML or JSON request document.
pub fn read_request(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(AppError::RequestNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(AppError::ReadRequest)?;
    if text.trim().is_empty() {
        return Err(AppError::EmptyRequest);
    }

    // JSON documents are valid YAML, so one parser covers both.
    let document: Value = serde_yaml::from_str(&text).map_err(AppError::ParseRequest)?;
    if is_empty_document(&document) {
        return Err(AppError::EmptyRequest);
    }

    tracing::debug!(path = %path.display(), bytes = text.len(), "read request document");
    Ok(document)
}

fn is_empty_document(document: &Value) -> bool {
    match document {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Writes `contents` to `dir/file_name`, creating `dir` if needed.
///
/// The manifest is written to a sibling temp file and renamed into place, so
/// readers see either the old file or the complete new one.
pub fn write_manifest(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(AppError::CreateStateDir)?;

    let target = dir.join(file_name);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_nanos())
        .unwrap_or(0);
    let temp = dir.join(format!(".{file_name}.tmp.{nanos}"));

    if let Err(err) = write_synced(&temp, contents) {
        let _ = fs::remove_file(&temp);
        return Err(AppError::WriteManifest(err));
    }
    if let Err(err) = fs::rename(&temp, &target) {
        let _ = fs::remove_file(&temp);
        return Err(AppError::WriteManifest(err));
    }

    tracing::debug!(path = %target.display(), bytes = contents.len(), "wrote manifest");
    Ok(target)
}

fn write_synced(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}
