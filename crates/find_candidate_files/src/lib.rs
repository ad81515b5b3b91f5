// crates/find_candidate_files/src/lib.rs

use std::path::{Path, PathBuf};
use strip_marker::{FILE_EXTENSION, NAME_SUBSTRING};
use walkdir::WalkDir;

/// Result of walking a root directory.
#[derive(Debug, Default)]
pub struct CandidateScan {
    /// Files that passed the name filter, in traversal order.
    pub candidates: Vec<PathBuf>,
    /// Entries that could not be visited. The walk carries on past them.
    pub errors: Vec<walkdir::Error>,
}

/// Returns true when the file's base name ends with the target extension
/// and contains the naming-convention substring, both case-insensitively.
pub fn is_candidate(path: &Path) -> bool {
    let basename = match path.file_name() {
        Some(name) => name.to_string_lossy().to_lowercase(),
        None => return false,
    };
    basename.ends_with(FILE_EXTENSION) && basename.contains(NAME_SUBSTRING)
}

/// Recursively lists every regular file under `root`.
///
/// Entries are visited in file-name order within each directory. A root that
/// is missing or is not a directory yields nothing. Symbolic links are not
/// followed.
pub fn scan_files(root: &Path) -> (Vec<PathBuf>, Vec<walkdir::Error>) {
    let mut files = Vec::new();
    let mut errors = Vec::new();

    if !root.is_dir() {
        log::debug!("Root {} is not a directory; nothing to scan", root.display());
        return (files, errors);
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(err) => errors.push(err),
        }
    }
    (files, errors)
}

/// Scans `root` and keeps only the files accepted by [`is_candidate`].
pub fn find_candidate_files(root: &Path) -> CandidateScan {
    let (files, errors) = scan_files(root);
    let candidates = files
        .into_iter()
        .filter(|path| {
            let selected = is_candidate(path);
            if !selected {
                log::debug!("Skipping {}", path.display());
            }
            selected
        })
        .collect();
    CandidateScan { candidates, errors }
}
