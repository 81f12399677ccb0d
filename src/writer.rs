//! Persisting the finished document

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::WordCloudError;

/// Write `contents` to `path` as UTF-8, creating parent directories and
/// replacing any existing file
pub fn write_document(path: &Path, contents: &str) -> Result<(), WordCloudError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| WordCloudError::write(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| WordCloudError::write(path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote document");
    Ok(())
}
