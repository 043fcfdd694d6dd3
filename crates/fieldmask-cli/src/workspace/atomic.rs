use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{WorkspaceError, WorkspaceResult};

/// Replace `path` with `data` so readers never observe a half-written output.
///
/// The bytes land in a sibling `.<name>.<pid>.tmp` file which is synced and
/// renamed over the target. The temp file is removed if any step fails.
pub fn write_bytes_atomic(path: &Path, data: &[u8]) -> WorkspaceResult<()> {
    let parent = existing_parent(path)?;
    let tmp_path = staging_path(path)?;

    let staged = stage(&tmp_path, data).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(err) = staged {
        fs::remove_file(&tmp_path).ok();
        return Err(err.into());
    }

    if let Some(dir) = parent {
        sync_dir(dir)?;
    }
    Ok(())
}

/// Persist the rename itself.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

fn stage(tmp_path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(tmp_path)?;
    file.write_all(data)?;
    file.sync_all()
}

fn existing_parent(path: &Path) -> WorkspaceResult<Option<&Path>> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)?;
            Ok(Some(parent))
        }
        _ => Ok(None),
    }
}

fn staging_path(path: &Path) -> WorkspaceResult<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        WorkspaceError::Invalid(format!("output path has no file name: {}", path.display()))
    })?;
    let tmp = format!(".{}.{}.tmp", name.to_string_lossy(), std::process::id());
    Ok(path.with_file_name(tmp))
}
