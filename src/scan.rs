//! Directory scanning for batch outline extraction.

use anyhow::{bail, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ScanConfig;

/// A markdown file found under a scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFile {
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated on all platforms.
    pub relative_path: String,
}

/// List markdown files under `root` matching the configured globs,
/// sorted by relative path.
pub fn scan_markdown(root: &Path, config: &ScanConfig) -> Result<Vec<MarkdownFile>> {
    if !root.is_dir() {
        bail!("Scan root is not a directory: {}", root.display());
    }

    let include_set = build_globset(&config.include_globs)?;

    let mut default_excludes = vec![
        "**/.git/**".to_string(),
        "**/target/**".to_string(),
        "**/node_modules/**".to_string(),
    ];
    default_excludes.extend(config.exclude_globs.iter().cloned());
    let exclude_set = build_globset(&default_excludes)?;

    let mut files = Vec::new();

    let walker = WalkDir::new(root).follow_links(config.follow_symlinks);
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if exclude_set.is_match(&rel_str) {
            log::trace!("excluded {}", rel_str);
            continue;
        }
        if !include_set.is_match(&rel_str) {
            continue;
        }

        files.push(MarkdownFile {
            path: path.to_path_buf(),
            relative_path: rel_str,
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    log::debug!("found {} markdown files under {}", files.len(), root.display());

    Ok(files)
}

pub fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("guide/deep")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(root.join("drafts")).unwrap();
        fs::write(root.join("README.md"), "# Readme").unwrap();
        fs::write(root.join("guide/intro.markdown"), "# Intro").unwrap();
        fs::write(root.join("guide/deep/nested.md"), "# Nested").unwrap();
        fs::write(root.join("guide/notes.txt"), "not markdown").unwrap();
        fs::write(root.join("node_modules/pkg/README.md"), "# Vendored").unwrap();
        fs::write(root.join("drafts/wip.md"), "# WIP").unwrap();
        tmp
    }

    fn rel(files: &[MarkdownFile]) -> Vec<&str> {
        files.iter().map(|f| f.relative_path.as_str()).collect()
    }

    #[test]
    fn test_default_scan_sorted_and_filtered() {
        let tmp = tree();
        let files = scan_markdown(tmp.path(), &ScanConfig::default()).unwrap();
        assert_eq!(
            rel(&files),
            vec![
                "README.md",
                "drafts/wip.md",
                "guide/deep/nested.md",
                "guide/intro.markdown",
            ]
        );
    }

    #[test]
    fn test_user_excludes() {
        let tmp = tree();
        let cfg = ScanConfig {
            exclude_globs: vec!["drafts/**".to_string()],
            ..ScanConfig::default()
        };
        let files = scan_markdown(tmp.path(), &cfg).unwrap();
        assert!(!rel(&files).contains(&"drafts/wip.md"));
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_missing_root_errors() {
        let tmp = TempDir::new().unwrap();
        let err = scan_markdown(&tmp.path().join("nope"), &ScanConfig::default()).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}
