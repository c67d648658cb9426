use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::error::{ModgraphError, Result};

/// Lazily discovers files under a root whose extension equals a configured
/// suffix, e.g. `.elm`.
pub struct TreeWalker {
    extension: String,
}

impl TreeWalker {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Yields matching file paths in directory enumeration order.
    ///
    /// Only a failure to read the root itself is yielded as an error. Entries
    /// below it that cannot be read are logged and skipped.
    pub fn walk<'a>(&'a self, root_path: &Path) -> impl Iterator<Item = Result<PathBuf>> + 'a {
        WalkDir::new(root_path)
            .follow_links(false)
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => self.accepts(&entry).then(|| Ok(entry.into_path())),
                Err(err) if err.depth() == 0 => Some(Err(ModgraphError::from(err))),
                Err(err) => {
                    log::warn!("Skipping unreadable entry: {err}");
                    None
                }
            })
    }

    fn accepts(&self, entry: &DirEntry) -> bool {
        if dotted_extension(entry.path()) != self.extension.as_bytes() {
            return false;
        }
        if entry.path_is_symlink() {
            // links are not traversed, but a link to a file is scanned
            return match fs::metadata(entry.path()) {
                Ok(meta) => meta.is_file(),
                Err(err) => {
                    log::debug!("Skipping dangling link {}: {err}", entry.path().display());
                    false
                }
            };
        }
        entry.file_type().is_file()
    }
}

/// The raw bytes of the file name from its last `.`, dot included; empty
/// when the name has no dot.
pub fn dotted_extension(path: &Path) -> &[u8] {
    let Some(name) = path.file_name() else {
        return &[];
    };
    let bytes = name.as_encoded_bytes();
    match bytes.iter().rposition(|&b| b == b'.') {
        Some(idx) => &bytes[idx..],
        None => &[],
    }
}
