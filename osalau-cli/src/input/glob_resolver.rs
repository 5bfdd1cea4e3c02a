//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve input patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No input files found matching the provided patterns");
    }

    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_literal_path_and_glob() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.txt");
        let b = temp_dir.path().join("b.txt");
        fs::write(&a, "x").unwrap();
        fs::write(&b, "y").unwrap();

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let files = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_duplicates_are_removed() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.txt");
        fs::write(&a, "x").unwrap();

        let literal = a.display().to_string();
        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let files = resolve_patterns(&[literal, pattern]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_no_match_is_an_error() {
        let result = resolve_patterns(&["/nonexistent/dir/*.txt".to_string()]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No input files found"));
    }
}
