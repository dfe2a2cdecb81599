// Keeps the project's `.gitignore` aware of the files the installed tools produce.
// The installer owns one region of the file, delimited by sentinel comments; the region is
// appended on the first run and rewritten in place on later runs.

use colored::Colorize;
use std::path::Path;

use crate::libs::utilities::file_operations::{append_text, read_if_exists, rewrite_text};
use crate::log_info;
use crate::schemas::errors::Result;

/// Name of the ignore file, relative to the project root.
pub const IGNORE_FILE: &str = ".gitignore";

pub const REGION_START: &str = "###> php-tooling ###";
pub const REGION_END: &str = "###< php-tooling ###";

/// Patterns inside the managed region.
pub const IGNORED_PATTERNS: [&str; 6] = [
    ".DS_Store",
    ".php-cs-fixer.cache",
    ".phpcs.cache",
    ".idea/",
    ".vscode/",
    "vendor/",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreUpdate {
    Appended,
    Rewritten,
    Unchanged,
}

/// The managed region, sentinels included, ending with a newline.
pub fn managed_region() -> String {
    let mut region = String::from(REGION_START);
    region.push('\n');
    for pattern in IGNORED_PATTERNS {
        region.push_str(pattern);
        region.push('\n');
    }
    region.push_str(REGION_END);
    region.push('\n');
    region
}

/// Adds the managed region to `<project_root>/.gitignore`, or refreshes it if a previous
/// run already added one.
pub fn update_ignore_file(project_root: &Path) -> Result<IgnoreUpdate> {
    let path = project_root.join(IGNORE_FILE);
    let region = managed_region();

    let outcome = match read_if_exists(&path)? {
        Some(existing) => match replace_region(&existing, &region) {
            Some(updated) if updated == existing => IgnoreUpdate::Unchanged,
            Some(updated) => {
                rewrite_text(&path, &updated)?;
                IgnoreUpdate::Rewritten
            }
            None => {
                append_text(&path, &format!("\n{region}"))?;
                IgnoreUpdate::Appended
            }
        },
        None => {
            append_text(&path, &format!("\n{region}"))?;
            IgnoreUpdate::Appended
        }
    };

    match outcome {
        IgnoreUpdate::Appended => log_info!("[Ignore] Added ignore patterns to {}", IGNORE_FILE.green()),
        IgnoreUpdate::Rewritten => log_info!("[Ignore] Refreshed ignore patterns in {}", IGNORE_FILE.green()),
        IgnoreUpdate::Unchanged => log_info!("[Ignore] {} is already up to date", IGNORE_FILE.green()),
    }
    Ok(outcome)
}

/// Swaps the first managed region in `content` for `region`.
/// Returns `None` when `content` holds no complete region (start followed by end).
fn replace_region(content: &str, region: &str) -> Option<String> {
    let start = content.find(REGION_START)?;
    let end_marker = start + content[start..].find(REGION_END)?;
    let mut end = end_marker + REGION_END.len();
    if content[end..].starts_with('\n') {
        end += 1;
    }

    let mut updated = String::with_capacity(content.len() + region.len());
    updated.push_str(&content[..start]);
    updated.push_str(region);
    updated.push_str(&content[end..]);
    Some(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn creates_the_ignore_file() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(update_ignore_file(dir.path()).unwrap(), IgnoreUpdate::Appended);

        let content = fs::read_to_string(dir.path().join(IGNORE_FILE)).unwrap();
        assert_eq!(content, format!("\n{}", managed_region()));
        assert!(content.contains("\n.php-cs-fixer.cache\n"));
    }

    #[test]
    fn appends_after_existing_patterns() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(IGNORE_FILE), "/var/\n.env.local\n").unwrap();

        update_ignore_file(dir.path()).unwrap();

        let content = fs::read_to_string(dir.path().join(IGNORE_FILE)).unwrap();
        assert!(content.starts_with("/var/\n.env.local\n\n###> php-tooling ###\n"));
    }

    #[test]
    fn second_run_does_not_duplicate() {
        let dir = tempfile::tempdir().unwrap();

        update_ignore_file(dir.path()).unwrap();
        assert_eq!(update_ignore_file(dir.path()).unwrap(), IgnoreUpdate::Unchanged);

        let content = fs::read_to_string(dir.path().join(IGNORE_FILE)).unwrap();
        assert_eq!(content.matches(REGION_START).count(), 1);
    }

    #[test]
    fn stale_region_is_rewritten_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let stale = format!("/var/\n{REGION_START}\n.idea/\n{REGION_END}\n.env\n");
        fs::write(dir.path().join(IGNORE_FILE), &stale).unwrap();

        assert_eq!(update_ignore_file(dir.path()).unwrap(), IgnoreUpdate::Rewritten);

        let content = fs::read_to_string(dir.path().join(IGNORE_FILE)).unwrap();
        assert_eq!(content, format!("/var/\n{}.env\n", managed_region()));
    }

    #[test]
    fn region_without_newline_at_eof_is_replaced() {
        let content = format!("{REGION_START}\nvendor/\n{REGION_END}");
        assert_eq!(replace_region(&content, "X\n").as_deref(), Some("X\n"));
    }

    #[test]
    fn unterminated_region_is_left_alone() {
        assert_eq!(replace_region(&format!("{REGION_START}\n.idea/\n"), "X\n"), None);
    }
}
