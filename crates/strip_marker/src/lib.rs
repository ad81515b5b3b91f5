// crates/strip_marker/src/lib.rs

//! Marker and file-name constants shared by the comment-stripping crates.

/// Prefix that opens a single-line comment.
pub const COMMENT_PREFIX: &str = "//";

/// The word which, alone after the prefix, marks a line for removal.
/// Compared case-insensitively.
pub const TARGET_TOKEN: &str = "ok";

/// Extension a candidate file name must end with (case-insensitive).
pub const FILE_EXTENSION: &str = ".java";

/// Substring a candidate file name must contain (case-insensitive).
pub const NAME_SUBSTRING: &str = "input";

/// Directory scanned when no root is given on the command line.
pub const DEFAULT_ROOT: &str = "src/test/resources";
