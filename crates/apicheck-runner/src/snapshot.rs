//! Loading captured responses from disk (JSON or YAML)

use std::path::{Path, PathBuf};

use apicheck_core::ResponseSnapshot;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Cannot read {0}: {1}")]
    Io(PathBuf, String),
    #[error("Invalid response snapshot {0}: {1}")]
    Parse(PathBuf, String),
}

/// Load a response snapshot; `.yaml`/`.yml` files are read as YAML, anything else as JSON.
///
/// # Errors
///
/// Returns error if the file cannot be read or does not describe a response.
pub fn load_response(path: &Path) -> Result<ResponseSnapshot, SnapshotError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SnapshotError::Io(path.to_path_buf(), e.to_string()))?;

    let is_yaml = path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");
    if is_yaml {
        serde_yml::from_str(&content)
            .map_err(|e| SnapshotError::Parse(path.to_path_buf(), e.to_string()))
    } else {
        serde_json::from_str(&content)
            .map_err(|e| SnapshotError::Parse(path.to_path_buf(), e.to_string()))
    }
}
