// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page discovery: runs the checks over a single page or every page in a
//! directory tree.

use crate::analyzers;
use crate::config::Config;
use crate::error::Result;
use crate::findings::FindingSet;
use std::path::Path;
use tracing::info;
use walkdir::WalkDir;

/// Scan a directory of HTML pages
pub fn scan_directory(dir: &Path, config: &Config) -> Result<FindingSet> {
    let mut all_findings = FindingSet::new();
    let mut pages_scanned = 0;
    let evaluator = config.evaluator();

    info!("Scanning directory: {}", dir.display());

    let walker = WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_str().unwrap_or("");
            if e.depth() > 0 && e.file_type().is_dir() {
                return !config.scan.skip_dirs.iter().any(|d| d == name) && !name.starts_with('.');
            }
            true
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        if !config.scan.extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)) {
            continue;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                info!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        all_findings.extend(analyzers::analyze_page(path, &content, evaluator).findings);
        pages_scanned += 1;
    }

    info!(
        "Scanned {} pages, found {} issues",
        pages_scanned,
        all_findings.issues().len()
    );

    Ok(all_findings)
}

/// Scan a single page
pub fn scan_file(path: &Path, config: &Config) -> Result<FindingSet> {
    let content = std::fs::read_to_string(path)?;
    Ok(analyzers::analyze_page(path, &content, config.evaluator()))
}

/// Scan a file or a directory, whichever `path` is
pub fn scan_path(path: &Path, config: &Config) -> Result<FindingSet> {
    if path.is_dir() {
        scan_directory(path, config)
    } else {
        scan_file(path, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_nonexistent_dir() {
        let result = scan_directory(Path::new("/nonexistent/path"), &Config::default());
        assert!(result.expect("walkdir errors are skipped").is_empty());
    }

    #[test]
    fn test_scan_missing_file_is_error() {
        assert!(scan_file(Path::new("/nonexistent/page.html"), &Config::default()).is_err());
    }

    #[test]
    fn test_scan_directory_filters_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        let page = "<html><body><img src=\"a.png\"></body></html>";
        std::fs::write(dir.path().join("index.html"), page).unwrap();
        std::fs::write(dir.path().join("notes.txt"), page).unwrap();
        std::fs::create_dir(dir.path().join("node_modules")).unwrap();
        std::fs::write(dir.path().join("node_modules").join("vendor.html"), page).unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs").join("guide.HTM"), page).unwrap();

        let findings = scan_directory(dir.path(), &Config::default()).unwrap();
        let missing_alt = findings.by_rule("WCAG-1.1.1-missing-alt");
        assert_eq!(missing_alt.len(), 2);
    }
}
