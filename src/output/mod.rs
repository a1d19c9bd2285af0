//! Output artifact writing

use crate::error::{ConversionError, ConversionResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write `content` to `path` in one step.
///
/// The buffer goes to a sibling temporary file which is then renamed over
/// the destination, so readers see either the old file or the complete new
/// one. Missing parent directories are created.
pub fn write_atomic(path: &Path, content: &str) -> ConversionResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConversionError::io(
                format!("Failed to create output directory: {}", e),
                Some(parent.to_path_buf()),
            )
        })?;
    }

    let staging = staging_path(path);
    if let Err(e) = std::fs::write(&staging, content) {
        let _ = std::fs::remove_file(&staging);
        return Err(ConversionError::io(
            format!("Failed to write output: {}", e),
            Some(path.to_path_buf()),
        ));
    }

    std::fs::rename(&staging, path).map_err(|e| {
        let _ = std::fs::remove_file(&staging);
        ConversionError::io(
            format!("Failed to replace output: {}", e),
            Some(path.to_path_buf()),
        )
    })?;

    debug!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(())
}

/// `<name>.tmp` next to the destination
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
