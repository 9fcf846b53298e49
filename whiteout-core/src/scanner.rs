//! Target directory scanning

use std::path::{Path, PathBuf};

use thiserror::Error;

const PNG_SUFFIX: &[u8] = b".png";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory {} does not exist.", .0.display())]
    Missing(PathBuf),
    #[error("{} is not a directory.", .0.display())]
    NotADirectory(PathBuf),
    #[error("Failed to read directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List the `.png` files directly inside `dir`, sorted by name.
///
/// Matching is a case-sensitive suffix test on the raw file name, so names
/// that aren't valid UTF-8 are still found. Nothing is opened or modified here.
pub fn scan(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ScanError> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Err(ScanError::Missing(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    log::debug!("Scanning {}", dir.display());

    let entries = std::fs::read_dir(dir).map_err(|source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => {
                if entry.file_name().as_encoded_bytes().ends_with(PNG_SUFFIX) {
                    paths.push(dir.join(entry.file_name()));
                }
            }
            Err(e) => log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e),
        }
    }
    paths.sort();

    Ok(paths)
}
