//! `mdo batch`: outline every markdown file under a directory.
//!
//! Unreadable files are skipped with a warning and counted; they do not
//! abort the batch. A render failure does abort it.

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;
use crate::export;
use crate::extract::Extractor;
use crate::models::Outline;
use crate::outline_cmd::{extractor, OutputOptions};
use crate::render::Renderer;
use crate::scan::scan_markdown;

/// Outlines collected from a directory, in relative-path order.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub outlines: Vec<(String, Outline)>,
    pub skipped: usize,
}

pub fn outline_directory<R: Renderer>(
    root: &Path,
    config: &Config,
    extractor: &Extractor<R>,
) -> Result<BatchResult> {
    let files = scan_markdown(root, &config.scan)?;
    let mut result = BatchResult::default();

    for file in files {
        let markdown = match std::fs::read_to_string(&file.path) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("skipping {}: {}", file.relative_path, e);
                result.skipped += 1;
                continue;
            }
        };
        let outline = extractor
            .extract(&markdown)
            .with_context(|| format!("Failed to extract outline from {}", file.relative_path))?;
        log::debug!("{}: {} headings", file.relative_path, outline.len());
        result.outlines.push((file.relative_path, outline));
    }

    Ok(result)
}

pub fn run_batch(
    config: &Config,
    root: &Path,
    output: Option<&Path>,
    options: OutputOptions,
) -> Result<()> {
    let result = outline_directory(root, config, &extractor(config))?;

    let json = export::batch_to_json(&result.outlines, options.level_format, options.pretty)?;
    export::write_output(&json, output)?;

    eprintln!(
        "Outlined {} files ({} skipped)",
        result.outlines.len(),
        result.skipped
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OutlineError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_outlines_in_path_order() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("b.md"), "# Bee\nbuzz\n").unwrap();
        fs::write(tmp.path().join("sub/a.md"), "# Ay\n").unwrap();
        fs::write(tmp.path().join("a.md"), "no headings here\n").unwrap();

        let cfg = Config::minimal();
        let result = outline_directory(tmp.path(), &cfg, &extractor(&cfg)).unwrap();

        let paths: Vec<&str> = result.outlines.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, vec!["a.md", "b.md", "sub/a.md"]);
        assert!(result.outlines[0].1.is_empty());
        assert_eq!(
            result.outlines[1].1.get("Bee").unwrap().content(),
            ["<p>buzz</p>"]
        );
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_non_utf8_file_is_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("ok.md"), "# Ok\n").unwrap();
        fs::write(tmp.path().join("bad.md"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let cfg = Config::minimal();
        let result = outline_directory(tmp.path(), &cfg, &extractor(&cfg)).unwrap();
        assert_eq!(result.outlines.len(), 1);
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_render_failure_aborts() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("doc.md"), "# Doc\n").unwrap();

        let failing = Extractor::new(|_: &str| -> crate::error::Result<String> {
            Err(OutlineError::Render("no renderer".into()))
        });
        let err = outline_directory(tmp.path(), &Config::minimal(), &failing).unwrap_err();
        assert!(err.to_string().contains("doc.md"));
    }
}
