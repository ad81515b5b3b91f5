// crates/strip_ok_comments/src/runner.rs

use find_candidate_files::find_candidate_files;
use std::path::{Path, PathBuf};

use crate::config::RunConfig;
use crate::file_stripper::{DefaultFileStripper, FileStripper};

/// A file that was rewritten successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub removed_lines: usize,
}

/// A file, or a traversal entry, that could not be processed.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

/// Everything one run did, in processing order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub processed: Vec<FileOutcome>,
    pub failures: Vec<FileFailure>,
}

impl RunReport {
    /// Total number of lines removed across all rewritten files.
    pub fn removed_lines(&self) -> usize {
        self.processed.iter().map(|o| o.removed_lines).sum()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Strips marker comments from every candidate file under the configured root.
pub fn run(config: &RunConfig) -> RunReport {
    run_with_stripper(&config.root_path, &DefaultFileStripper)
}

/// Scans `root`, then hands each candidate to `stripper` one at a time.
///
/// A failing file is logged and recorded; it never stops the run.
pub fn run_with_stripper(root: &Path, stripper: &dyn FileStripper) -> RunReport {
    let mut report = RunReport::default();
    log::debug!("Scanning {}", root.display());

    let scan = find_candidate_files(root);

    for err in scan.errors {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        let error = anyhow::Error::new(err).context(format!("Error scanning {}", path.display()));
        log::error!("{:#}", error);
        report.failures.push(FileFailure { path, error });
    }

    for path in scan.candidates {
        match stripper.strip_file(&path) {
            Ok(removed_lines) => {
                log::info!("Processed {} ({} line(s) removed)", path.display(), removed_lines);
                report.processed.push(FileOutcome { path, removed_lines });
            }
            Err(error) => {
                log::error!("{:#}", error);
                report.failures.push(FileFailure { path, error });
            }
        }
    }

    log::info!(
        "{} file(s) rewritten, {} line(s) removed, {} failure(s)",
        report.processed.len(),
        report.removed_lines(),
        report.failures.len()
    );
    report
}
