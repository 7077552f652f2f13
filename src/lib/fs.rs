//! Read-only lookup of generated source files under a search root.

use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Result of a file lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    Found(PathBuf),
    NotFound,
}

impl Located {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Located::Found(path) => Some(path),
            Located::NotFound => None,
        }
    }
}

/// Find the first file named `file_name` below `root`.
///
/// Traversal order is fixed: inside each directory, non-directory entries are
/// visited before subdirectories, and each group is sorted by file name. A
/// match in a directory therefore wins over any match in its subdirectories,
/// and sibling subdirectories are searched in lexicographic order.
///
/// Symlinks are not followed, and a symlink to a directory never matches.
/// Unreadable directories (including a missing root) are skipped and never
/// turn into an error.
pub fn locate_file(root: &Path, file_name: &str) -> Located {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by(files_before_dirs);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(
                    target: "flash_size_check::fs",
                    root = %root.display(),
                    reason = %err,
                    "Skipping unreadable entry"
                );
                continue;
            }
        };
        if entry.depth() == 0 || entry.file_type().is_dir() || entry.path().is_dir() {
            continue;
        }
        if entry.file_name() == file_name {
            return Located::Found(entry.into_path());
        }
    }

    Located::NotFound
}

fn files_before_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
