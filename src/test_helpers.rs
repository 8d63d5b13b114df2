//! Shared test utilities: fixture writers, mtime control and permission
//! guards for building small sites inside a `TempDir`.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let src = write_file(tmp.path(), "notes/a.md", "# Hi");
//! set_mtime(&src, SystemTime::UNIX_EPOCH + Duration::from_secs(10));
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::template::Template;

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `contents` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// Set a file's modification time without touching its content.
pub fn set_mtime(path: &Path, time: SystemTime) {
    fs::File::options()
        .write(true)
        .open(path)
        .and_then(|f| f.set_modified(time))
        .unwrap_or_else(|e| panic!("cannot set mtime of {}: {e}", path.display()));
}

/// In-memory template with the default placeholder.
pub fn test_template(text: &str) -> Template {
    Template {
        path: PathBuf::from("index.html"),
        text: text.to_string(),
        modified: SystemTime::UNIX_EPOCH,
        placeholder: "{{body}}".to_string(),
    }
}

/// Paths relative to `root`, `/`-separated and sorted.
pub fn sorted_relative(root: &Path, paths: &[PathBuf]) -> Vec<String> {
    let mut rel: Vec<String> = paths
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap_or_else(|_| panic!("{} is not under {}", p.display(), root.display()))
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    rel.sort();
    rel
}

// =========================================================================
// Permissions
// =========================================================================

/// Changes a path's mode and restores the original on drop, so `TempDir`
/// can still clean up.
#[cfg(unix)]
pub struct PermissionGuard {
    path: PathBuf,
    original: fs::Permissions,
}

#[cfg(unix)]
impl PermissionGuard {
    pub fn lock(path: &Path, mode: u32) -> Self {
        use std::os::unix::fs::PermissionsExt;
        let original = fs::metadata(path).unwrap().permissions();
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
        Self {
            path: path.to_path_buf(),
            original,
        }
    }
}

#[cfg(unix)]
impl Drop for PermissionGuard {
    fn drop(&mut self) {
        let _ = fs::set_permissions(&self.path, self.original.clone());
    }
}

/// Whether a locked path is actually inaccessible. Root ignores file modes,
/// so permission tests bail out when this is false.
#[cfg(unix)]
pub fn permissions_enforced(path: &Path) -> bool {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::read_dir(path).is_err(),
        Ok(_) => fs::File::open(path).is_err(),
        Err(_) => true,
    }
}
