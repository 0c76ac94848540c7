use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::item::Item;

/// Error type for store file I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreIoError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load the item list from a JSON file.
///
/// A missing file is not an error: it yields an empty list, the state of a
/// store that has never been saved. A file holding JSON `null` also yields an
/// empty list. Unreadable or malformed content is an error so the caller can
/// tell "empty because no data" from "empty because corrupted"; the caller is
/// expected to recover with an empty list rather than abort.
pub fn load_items(path: &Path) -> Result<Vec<Item>, StoreIoError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path).map_err(|e| StoreIoError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let items: Option<Vec<Item>> =
        serde_json::from_str(&content).map_err(|e| StoreIoError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(items.unwrap_or_default())
}

/// Save the item list as indented JSON, overwriting the file at `path`.
///
/// The parent directory is created if absent. The write goes through a temp
/// file + rename, so a failed save leaves the previous file contents intact;
/// the in-memory store stays authoritative and the caller may retry.
pub fn save_items(path: &Path, items: &[Item]) -> Result<(), StoreIoError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StoreIoError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }
    let content = serde_json::to_string_pretty(items).map_err(|e| StoreIoError::Write {
        path: path.to_path_buf(),
        source: io::Error::other(e.to_string()),
    })?;
    atomic_write(path, content.as_bytes()).map_err(|e| StoreIoError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Back up a corrupt store file as `<path>.bak` so recovering with an empty
/// list doesn't silently discard the bytes. Best effort.
pub fn backup_corrupt(path: &Path) -> Option<PathBuf> {
    let bak = bak_path(path);
    fs::copy(path, &bak).ok().map(|_| bak)
}

fn bak_path(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => path.with_extension(format!("{}.bak", ext)),
        None => path.with_extension("bak"),
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    // A bare relative filename has an empty parent; temp in "." then.
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
