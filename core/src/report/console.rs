use std::path::Path;

/// Format a single progress line for multi-file runs. Deterministic,
/// unit-testable.
#[must_use]
pub fn format_progress_line(done: usize, total: usize, name: &str) -> String {
    format!("Processing file {}/{} - {}...", done, total, name)
}

/// Write a progress line to stderr, keeping stdout for per-file results.
pub fn emit_progress_line(line: &str) {
    eprintln!("{}", line);
}

/// Warning for documents GUAC will skip entirely.
#[must_use]
pub fn format_all_not_affected_warning(path: &Path) -> String {
    format!(
        "WARNING: every statement in {} has status 'not_affected'; GUAC will ignore this file.",
        path.display()
    )
}

/// Per-file completion message for the normal case.
#[must_use]
pub fn format_completion(path: &Path) -> String {
    format!("Finished processing {}.", path.display())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{format_all_not_affected_warning, format_completion, format_progress_line};

    #[test]
    fn progress_line_counts_and_names() {
        let s = format_progress_line(2, 5, "vex.json");
        assert_eq!(s, "Processing file 2/5 - vex.json...");
    }

    #[test]
    fn warning_names_the_path_and_guac() {
        let s = format_all_not_affected_warning(Path::new("a/vex.json"));
        assert!(s.starts_with("WARNING:"));
        assert!(s.contains("a/vex.json"));
        assert!(s.contains("GUAC"));
    }

    #[test]
    fn completion_names_the_path() {
        let s = format_completion(Path::new("a/vex.json"));
        assert_eq!(s, "Finished processing a/vex.json.");
    }
}
