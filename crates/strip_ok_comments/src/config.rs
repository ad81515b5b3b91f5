// crates/strip_ok_comments/src/config.rs

use std::path::PathBuf;
use strip_marker::DEFAULT_ROOT;

/// Runtime configuration composed from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory the traversal starts from.
    pub root_path: PathBuf,
    pub verbose: bool,
}

impl RunConfig {
    pub fn new(root_path: impl Into<PathBuf>, verbose: bool) -> Self {
        Self {
            root_path: root_path.into(),
            verbose,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT, false)
    }
}
