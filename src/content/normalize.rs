//! Whitespace normalization for content comparison
//!
//! Normalized text is only ever used as a comparison key. It is never
//! written back to disk.

/// Canonicalize source text for comparison.
///
/// - `\r\n` and lone `\r` become `\n`
/// - trailing whitespace is stripped from every line
/// - leading and trailing blank lines are removed
///
/// The result has no trailing newline. `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    let lines: Vec<&str> = unified.split('\n').map(str::trim_end).collect();

    let Some(first) = lines.iter().position(|line| !line.is_empty()) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .unwrap_or(first);

    lines[first..=last].join("\n")
}

/// Compare two texts by their normalized form
pub fn equivalent(left: &str, right: &str) -> bool {
    normalize(left) == normalize(right)
}
