//! Recursive discovery of Markdown sources.
//!
//! Every directory is listed by its own task: listing the root yields files
//! and subdirectories, each subdirectory is spawned immediately, and the walk
//! ends when the task set drains. Nothing waits on a sibling directory.
//!
//! ## Matching
//!
//! An entry is a source when it is not a directory and its extension is
//! exactly the configured one (`md`, case-sensitive). `notes.MD` is ignored,
//! and so is a file named just `.md` (a dotfile has no extension).
//! Symlinked directories are not followed.
//!
//! ## Failure
//!
//! Discovery is all-or-nothing. The first directory that cannot be listed
//! ends the walk with [`DiscoverError`]; returning drops the task set, which
//! aborts listings still in flight.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("Cannot list directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Directory listing task failed: {0}")]
    Task(#[from] JoinError),
}

/// What a single directory listing produced.
#[derive(Debug, Default)]
struct Listing {
    sources: Vec<PathBuf>,
    subdirs: Vec<PathBuf>,
}

/// Find every file under `root` whose extension is `extension`.
///
/// Paths are `root` joined with the relative path. Order is unspecified.
pub async fn find_sources(root: &Path, extension: &str) -> Result<Vec<PathBuf>, DiscoverError> {
    let extension: Arc<str> = extension.into();
    let mut listings = JoinSet::new();
    listings.spawn(list_dir(root.to_path_buf(), extension.clone()));

    let mut sources = Vec::new();
    while let Some(joined) = listings.join_next().await {
        let listing = joined??;
        sources.extend(listing.sources);
        for dir in listing.subdirs {
            listings.spawn(list_dir(dir, extension.clone()));
        }
    }
    Ok(sources)
}

async fn list_dir(dir: PathBuf, extension: Arc<str>) -> Result<Listing, DiscoverError> {
    let read_err = |source| DiscoverError::ReadDir {
        path: dir.clone(),
        source,
    };
    let mut entries = tokio::fs::read_dir(&dir).await.map_err(read_err)?;
    let mut listing = Listing::default();

    while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
        let file_type = entry.file_type().await.map_err(read_err)?;
        let path = entry.path();
        if file_type.is_dir() {
            listing.subdirs.push(path);
        } else if has_extension(&path, &extension) {
            listing.sources.push(path);
        }
    }
    Ok(listing)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension() == Some(OsStr::new(extension))
}
