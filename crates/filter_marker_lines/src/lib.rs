// crates/filter_marker_lines/src/lib.rs

use strip_marker::{COMMENT_PREFIX, TARGET_TOKEN};

/// Returns true when the line, once trimmed, is exactly the comment prefix
/// followed by the target token (surrounding whitespace allowed, token
/// compared case-insensitively).
///
/// Code before the comment, extra words or punctuation all disqualify the line:
///   - `"  // OK "` matches
///   - `"// ok."` and `"x = 1; // ok"` do not
pub fn is_marker_line(line: &str) -> bool {
    match line.trim().strip_prefix(COMMENT_PREFIX) {
        Some(rest) => rest.trim().eq_ignore_ascii_case(TARGET_TOKEN),
        None => false,
    }
}

/// Removes every marker line from `content`.
///
/// Kept lines are copied byte for byte, each with its own terminator, so
/// `\r\n` endings and a missing trailing newline survive untouched.
/// Returns the filtered content together with the number of lines removed.
pub fn strip_marker_lines(content: &str) -> (String, usize) {
    let mut output = String::with_capacity(content.len());
    let mut removed = 0;

    for line in content.split_inclusive('\n') {
        if is_marker_line(line) {
            removed += 1;
            continue;
        }
        output.push_str(line);
    }
    (output, removed)
}
