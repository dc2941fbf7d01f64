use crate::shared::error::NoticeError;
use crate::shared::Result;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Maximum size of a manifest or license text file (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Reads a file after checking that it is a regular file within size limits
///
/// # Security
/// Uses `symlink_metadata()` so a symbolic link is rejected rather than
/// followed, and refuses files larger than `MAX_FILE_SIZE`.
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Description used in error messages (e.g., "package manifest")
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| NoticeError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(NoticeError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Point to the real file instead of a symbolic link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(NoticeError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    fs::read_to_string(path).map_err(|e| {
        NoticeError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Joins a relative file reference onto `base_dir`, refusing to leave it
///
/// # Security
/// Absolute paths and `..` components are rejected, so a manifest or config
/// can only pull in files that live below its own directory.
pub fn resolve_within(base_dir: &Path, relative: &Path, file_description: &str) -> Result<PathBuf> {
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

    if escapes || relative.as_os_str().is_empty() {
        return Err(NoticeError::SecurityError {
            path: relative.to_path_buf(),
            reason: format!(
                "{} must be a relative path inside {}",
                file_description,
                base_dir.display()
            ),
            hint: "Move the file next to the referencing file and use a relative path without '..'"
                .to_string(),
        }
        .into());
    }

    Ok(base_dir.join(relative))
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(NoticeError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the input into smaller files".to_string(),
        }
        .into());
    }
    Ok(())
}
